mod price_history;
mod product;

pub use price_history::PriceHistory;
pub use product::Product;
