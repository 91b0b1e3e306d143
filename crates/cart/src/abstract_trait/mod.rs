mod product_fetcher;
mod repository;
mod service;

pub use self::product_fetcher::{DynProductFetcher, ProductFetcherTrait, ProductSummary};
pub use self::repository::{CartRepositoryTrait, DynCartRepository};
pub use self::service::{
    CartCommandServiceTrait, CartQueryServiceTrait, DynCartCommandService, DynCartQueryService,
};
