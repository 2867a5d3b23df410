/// Transport over TCP implementation for the chat widget to talk to the server
#[cfg(feature = "client")]
pub mod client;
#[cfg(any(feature = "client", feature = "server"))]
mod common;
/// Peer side of the TCP transport, reading commands from a single chat widget connection
#[cfg(feature = "server")]
pub mod server;

#[cfg(any(feature = "client", feature = "server"))]
pub use common::{BoxedStream, JsonLineWriter};
