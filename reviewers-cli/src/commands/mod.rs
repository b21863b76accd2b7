//! CLI command implementations

pub mod request;

pub use request::RequestArgs;
