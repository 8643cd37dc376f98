pub mod fetcher;

pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
