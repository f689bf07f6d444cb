//! Test helper modules for artparty-api integration tests

pub mod test_server;

pub use test_server::TestServer;
