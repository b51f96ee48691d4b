//! Type-safe wrappers around [`ChatTransport`](crate::framework::ChatTransport).

pub mod detail_client;
pub mod status_client;

pub use detail_client::*;
pub use status_client::*;
