//! Shared fixtures and the local platform server for integration tests

pub mod fixtures;
pub mod test_server;

#[allow(unused_imports)]
pub use fixtures::Fixtures;
#[allow(unused_imports)]
pub use test_server::{RecordedRequest, TestServer};
