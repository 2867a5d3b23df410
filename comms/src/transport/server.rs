use tokio::net::TcpStream;

use crate::{command, event};

use super::common::{json_line_stream, BoxedStream, JsonLineWriter};

/// [CommandStream] is a stream of [crate::command::UserCommand]s sent by a chat widget
///
/// # Cancel Safety
///
/// This stream is cancel-safe, meaning that it can be used in [tokio::select!]
/// without the risk of missing commands.
pub type CommandStream = BoxedStream<anyhow::Result<command::UserCommand>>;

/// [EventWriter] writes [crate::event::Event]s to a chat widget
pub type EventWriter = JsonLineWriter<event::Event>;

/// Splits a TCP stream into a stream of commands and an event writer.
/// This is the peer side of [super::client::split_tcp_stream].
///
/// # Arguments
///
/// - `stream` - A [TcpStream] to split
pub fn split_tcp_stream(stream: TcpStream) -> (CommandStream, EventWriter) {
    let (reader, writer) = stream.into_split();

    (json_line_stream(reader, "client"), EventWriter::new(writer))
}
