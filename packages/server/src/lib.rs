// PriceFighter - API Core
//
// Backend for tracking e-commerce product prices over time: fetch a
// product page, extract name/price/currency, persist alongside history,
// serve over a REST API.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
