use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub log_dir: String,
    pub default_page_size: i32,
    pub max_page_size: i32,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());

        let default_page_size = std::env::var("PAGE_SIZE_DEFAULT")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<i32>()
            .context("PAGE_SIZE_DEFAULT must be a valid i32 integer")?;

        let max_page_size = std::env::var("PAGE_SIZE_MAX")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<i32>()
            .context("PAGE_SIZE_MAX must be a valid i32 integer")?;

        if default_page_size < 1 || default_page_size > max_page_size {
            return Err(anyhow!(
                "PAGE_SIZE_DEFAULT must be between 1 and {max_page_size}, got {default_page_size}"
            ));
        }

        let seed_str = std::env::var("SEED_DEMO_DATA").unwrap_or_else(|_| "true".to_string());
        let seed_demo_data = match seed_str.as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                return Err(anyhow!(
                    "SEED_DEMO_DATA must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        Ok(Self {
            log_dir,
            default_page_size,
            max_page_size,
            seed_demo_data,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: "./logs".to_string(),
            default_page_size: 20,
            max_page_size: 100,
            seed_demo_data: true,
        }
    }
}
