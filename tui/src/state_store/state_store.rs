use std::time::Duration;

use comms::transport::client::EventStream;
use tokio::sync::{
    broadcast,
    mpsc::{self, UnboundedReceiver, UnboundedSender},
};
use tokio_stream::StreamExt;
use tracing::{info, warn};
use widget::{ChatWidget, Transport};

use crate::{Interrupted, Terminator};

use super::{
    action::{Action, ComposerEdit},
    State,
};

/// Owns the chat widget. Every widget operation happens on this loop, one event at a time,
/// and the resulting [State] is handed to the UI.
pub struct StateStore {
    state_tx: UnboundedSender<State>,
}

impl StateStore {
    pub fn new() -> (Self, UnboundedReceiver<State>) {
        let (state_tx, state_rx) = mpsc::unbounded_channel::<State>();

        (StateStore { state_tx }, state_rx)
    }

    /// Hands a snapshot to the UI, false once the UI stopped listening
    fn publish(&self, state: &State) -> bool {
        self.state_tx.send(state.clone()).is_ok()
    }
}

fn apply_composer_edit<T: Transport>(widget: &mut ChatWidget<T>, edit: ComposerEdit) {
    let composer = &mut widget.document_mut().composer;

    match edit {
        ComposerEdit::Insert(c) => composer.enter_char(c),
        ComposerEdit::Backspace => composer.delete_char(),
        ComposerEdit::CursorLeft => composer.move_cursor_left(),
        ComposerEdit::CursorRight => composer.move_cursor_right(),
    }
}

impl StateStore {
    pub async fn main_loop<T: Transport>(
        self,
        mut widget: ChatWidget<T>,
        mut event_stream: EventStream,
        mut state: State,
        mut terminator: Terminator,
        mut action_rx: UnboundedReceiver<Action>,
        mut interrupt_rx: broadcast::Receiver<Interrupted>,
    ) -> anyhow::Result<Interrupted> {
        widget.handle_connect();
        state.sync_with(&widget);

        // the initial state once
        if !self.publish(&state) {
            return Ok(Interrupted::UserInt);
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(1));

        let result = loop {
            tokio::select! {
                // Render the events delivered by the server as they come in
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => widget.handle_event(&event),
                    Some(Err(err)) => warn!("skipping event: {err:#}"),
                    None => {
                        info!("server closed the connection");
                        let _ = terminator.terminate(Interrupted::ServerDisconnected);

                        break Interrupted::ServerDisconnected;
                    },
                },
                // Handle the actions coming from the UI
                Some(action) = action_rx.recv() => match action {
                    Action::JoinBand(band) => widget.join_room(&band.id, &band.name),
                    Action::EditComposer(edit) => apply_composer_edit(&mut widget, edit),
                    Action::SubmitMessage => {
                        widget.submit();
                    },
                    Action::Exit => {
                        let _ = terminator.terminate(Interrupted::UserInt);

                        break Interrupted::UserInt;
                    },
                },
                // Tick to terminate the select every N milliseconds
                _ = ticker.tick() => {
                    state.tick_timer();
                },
                // Catch and handle interrupt signal to gracefully shutdown
                Ok(interrupted) = interrupt_rx.recv() => {
                    break interrupted;
                }
            }

            state.sync_with(&widget);
            if !self.publish(&state) {
                info!("ui stopped listening, shutting the store down");
                let _ = terminator.terminate(Interrupted::UserInt);

                break Interrupted::UserInt;
            }
        };

        Ok(result)
    }
}
