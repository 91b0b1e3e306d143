pub mod adapter;
pub mod di;
pub mod state;
