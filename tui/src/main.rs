use clap::Parser;
use tracing::info;
use widget::ChatWidget;

use crate::{
    config::Args,
    connection::spawn_command_writer,
    state_store::{State, StateStore},
    termination::{create_termination, Interrupted, Terminator},
    ui_management::UiManager,
};

mod config;
mod connection;
mod logging;
mod state_store;
mod termination;
mod ui_management;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_file, args.log_level)?;

    info!(addr = %args.addr, "connecting to the chat server");
    let (event_stream, command_writer) = comms::transport::client::connect(args.addr.as_str()).await?;
    let (command_sender, _command_writer_task) = spawn_command_writer(command_writer);

    let (terminator, mut interrupt_rx) = create_termination();
    let (state_store, state_rx) = StateStore::new();
    let (ui_manager, action_rx) = UiManager::new();

    tokio::try_join!(
        state_store.main_loop(
            ChatWidget::new(command_sender),
            event_stream,
            State::new(&args.addr, args.bands_or_default()),
            terminator,
            action_rx,
            interrupt_rx.resubscribe(),
        ),
        ui_manager.main_loop(state_rx, interrupt_rx.resubscribe()),
    )?;

    if let Ok(reason) = interrupt_rx.recv().await {
        match reason {
            Interrupted::UserInt => println!("exited per user request"),
            Interrupted::OsSigInt => println!("exited because of an os sig int"),
            Interrupted::ServerDisconnected => println!("exited because the server closed the connection"),
        }
    } else {
        println!("exited because of an unexpected error");
    }

    Ok(())
}
