use anyhow::Context;
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::{command, event};

use super::common::{json_line_stream, BoxedStream, JsonLineWriter};

/// [EventStream] is a stream of [crate::event::Event]s delivered by the transport
///
/// # Cancel Safety
///
/// This stream is cancel-safe, meaning that it can be used in [tokio::select!]
/// without the risk of missing events.
pub type EventStream = BoxedStream<anyhow::Result<event::Event>>;

/// [CommandWriter] writes [crate::command::UserCommand]s to the transport
pub type CommandWriter = JsonLineWriter<command::UserCommand>;

/// Splits a TCP stream into a stream of events and a command writer.
///
/// # Arguments
///
/// - `stream` - A [TcpStream] to split
pub fn split_tcp_stream(stream: TcpStream) -> (EventStream, CommandWriter) {
    let (reader, writer) = stream.into_split();

    (
        json_line_stream(reader, "server"),
        CommandWriter::new(writer),
    )
}

/// Opens a TCP connection to the given address and splits it into a stream of events and a command writer.
pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<(EventStream, CommandWriter)> {
    let stream = TcpStream::connect(addr)
        .await
        .context("could not connect to the chat server")?;

    Ok(split_tcp_stream(stream))
}
