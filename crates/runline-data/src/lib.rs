// Season stat providers: where the engine's team tables come from.

pub mod file;
pub mod http;
pub mod provider;
pub mod tables;

pub use file::CsvFileProvider;
pub use http::HttpCsvProvider;
pub use provider::{refresh_engine, ProviderError, StatsProvider};
