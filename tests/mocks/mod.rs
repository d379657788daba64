//! Test doubles shared by the integration tests.

pub mod mock_fub_client;

#[allow(unused_imports)]
pub use mock_fub_client::MockFubClient;
