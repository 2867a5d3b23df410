use comms::{command::UserCommand, transport::client::CommandWriter};
use tokio::{
    sync::mpsc::{self, UnboundedSender},
    task::JoinHandle,
};
use tracing::{debug, warn};
use widget::Transport;

/// [Transport] handing commands to the task owning the TCP [CommandWriter].
///
/// Emitting never blocks and never fails from the caller's point of view, commands that can not be
/// delivered are logged and dropped.
#[derive(Debug, Clone)]
pub struct CommandSender {
    command_tx: UnboundedSender<UserCommand>,
}

impl Transport for CommandSender {
    fn emit(&mut self, command: UserCommand) {
        debug!(room_id = command.room_id(), ?command, "emitting command");

        if let Err(err) = self.command_tx.send(command) {
            warn!(command = ?err.0, "command writer is gone, dropping command");
        }
    }
}

/// Spawns the task writing emitted commands to the server, in emission order
pub fn spawn_command_writer(mut command_writer: CommandWriter) -> (CommandSender, JoinHandle<()>) {
    let (command_tx, mut command_rx) = mpsc::unbounded_channel::<UserCommand>();

    let handle = tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            if let Err(err) = command_writer.write(&command).await {
                warn!(?command, "could not deliver command: {err:#}");
            }
        }
    });

    (CommandSender { command_tx }, handle)
}
