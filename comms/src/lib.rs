/// Set of commands the chat widget emits towards the transport
pub mod command;
/// Set of events the transport delivers to the chat widget
pub mod event;
/// Implementation of event and command transportation over TCP Streams.
/// Requires 'server' or 'client' features to be enabled and will bring in tokio dependency alongside with other dependencies
pub mod transport;
