pub mod repository;
pub mod service;

pub use self::repository::{
    DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
    ProductQueryRepositoryTrait,
};
pub use self::service::{
    DynProductCommandService, DynProductQueryService, ProductCommandServiceTrait,
    ProductQueryServiceTrait,
};
