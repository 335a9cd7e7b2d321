// Library root: exposes config loading, slate evaluation, and report
// rendering so the binary and integration tests share one code path.

pub mod app;
pub mod config;
pub mod report;
