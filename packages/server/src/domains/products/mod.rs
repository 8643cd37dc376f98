pub mod models;

pub use models::{PriceHistory, Product};
