use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::{
    broadcast,
    mpsc::{self, UnboundedReceiver},
};
use tokio_stream::StreamExt;
use tracing::warn;

use crate::{
    state_store::{action::Action, State},
    ui_management::components::{Component, ComponentRender},
    Interrupted,
};

use super::pages::ChatPage;

pub struct UiManager {
    action_tx: mpsc::UnboundedSender<Action>,
}

impl UiManager {
    pub fn new() -> (Self, UnboundedReceiver<Action>) {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        (Self { action_tx }, action_rx)
    }

    pub async fn main_loop(
        self,
        mut state_rx: UnboundedReceiver<State>,
        mut interrupt_rx: broadcast::Receiver<Interrupted>,
    ) -> anyhow::Result<Interrupted> {
        // consume the first state to initialize the ui app
        let mut chat_page = {
            let state = state_rx
                .recv()
                .await
                .context("state store stopped before publishing a state")?;

            ChatPage::new(&state, self.action_tx.clone())
        };

        let mut terminal = setup_terminal()?;
        let mut crossterm_events = EventStream::new();
        let mut needs_redraw = true;

        let result: anyhow::Result<Interrupted> = loop {
            if needs_redraw {
                if let Err(err) = terminal
                    .draw(|frame| chat_page.render(frame, ()))
                    .context("could not render to the terminal")
                {
                    break Err(err);
                }
                needs_redraw = false;
            }

            tokio::select! {
                maybe_event = crossterm_events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Event::Key(key) = &event {
                            chat_page.handle_key_event(*key);
                        }
                        needs_redraw = changes_screen(&event);
                    },
                    Some(Err(err)) => warn!(%err, "could not read terminal input"),
                    // the terminal went away, let the store shut down with us
                    None => {
                        let _ = self.action_tx.send(Action::Exit);

                        break Ok(Interrupted::UserInt);
                    },
                },
                // every state published by the store is drawn once
                Some(state) = state_rx.recv() => {
                    chat_page = chat_page.move_with_state(&state);
                    needs_redraw = true;
                },
                // Catch and handle interrupt signal to gracefully shutdown
                Ok(interrupted) = interrupt_rx.recv() => {
                    break Ok(interrupted);
                }
            }
        };

        restore_terminal(&mut terminal)?;

        result
    }
}

/// Terminal input that can change what is on screen
fn changes_screen(event: &Event) -> bool {
    matches!(event, Event::Key(_) | Event::Resize(..) | Event::FocusGained)
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();

    enable_raw_mode()?;

    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    Ok(terminal.show_cursor()?)
}
