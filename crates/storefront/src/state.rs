use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::Config;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub config: Config,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        let di_container = DependenciesInject::new();

        if config.seed_demo_data {
            di_container
                .seed_demo_catalog()
                .await
                .context("Failed to seed demo catalog")?;
        }

        Ok(Self {
            di_container,
            config,
        })
    }
}
