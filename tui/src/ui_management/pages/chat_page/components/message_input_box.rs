use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    prelude::{Backend, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;
use widget::composer::Composer;

use super::super::section::{
    usage::{HasUsageInfo, UsageInfo, UsageInfoLine},
    SectionActivation,
};
use crate::{
    state_store::{
        action::{Action, ComposerEdit},
        State,
    },
    ui_management::components::{Component, ComponentRender},
};

struct Props {
    /// The widget's composer, hidden until a band is joined
    composer: Composer,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        Self {
            composer: state.document.composer.clone(),
        }
    }
}

/// Forwards typing to the widget's composer and submits it on Enter
pub struct MessageInputBox {
    action_tx: UnboundedSender<Action>,
    /// State Mapped MessageInputBox Props
    props: Props,
}

impl MessageInputBox {
    pub fn is_visible(&self) -> bool {
        self.props.composer.is_visible()
    }
}

impl Component for MessageInputBox {
    fn new(state: &State, action_tx: UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            props: Props::from(state),
        }
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        Self {
            props: Props::from(state),
            ..self
        }
    }

    fn name(&self) -> &str {
        "Message Input"
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press || !self.is_visible() {
            return;
        }

        let action = match key.code {
            KeyCode::Char(c) => Action::EditComposer(ComposerEdit::Insert(c)),
            KeyCode::Backspace => Action::EditComposer(ComposerEdit::Backspace),
            KeyCode::Left => Action::EditComposer(ComposerEdit::CursorLeft),
            KeyCode::Right => Action::EditComposer(ComposerEdit::CursorRight),
            KeyCode::Enter => Action::SubmitMessage,
            _ => return,
        };

        let _ = self.action_tx.send(action);
    }
}

impl SectionActivation for MessageInputBox {
    fn activate(&mut self) {}

    fn deactivate(&mut self) {}
}

pub struct RenderProps {
    pub area: Rect,
    pub border_color: Color,
    pub show_cursor: bool,
}

impl ComponentRender<RenderProps> for MessageInputBox {
    fn render<B: Backend>(&self, frame: &mut Frame<B>, props: RenderProps) {
        let input = Paragraph::new(self.props.composer.text())
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .fg(props.border_color)
                    .title("Message Input"),
            );
        frame.render_widget(input, props.area);

        // Cursor is hidden by default, so we need to make it visible if the input box is selected
        if props.show_cursor {
            frame.set_cursor(
                cursor_column(props.area, self.props.composer.cursor_position()),
                // Move one line down, from the border to the input line
                props.area.y + 1,
            )
        }
    }
}

/// Column of a cursor sitting `cursor_position` chars into the text, one cell per char.
/// Stays on the last cell inside the borders once the text is wider than the box.
fn cursor_column(area: Rect, cursor_position: usize) -> u16 {
    let last_inner_cell = area.width.saturating_sub(3);
    let offset = u16::try_from(cursor_position)
        .unwrap_or(u16::MAX)
        .min(last_inner_cell);

    area.x + 1 + offset
}

impl HasUsageInfo for MessageInputBox {
    fn usage_info(&self) -> UsageInfo {
        if !self.is_visible() {
            UsageInfo {
                description: Some("You can not send a message until you join a band.".into()),
                lines: vec![UsageInfoLine {
                    keys: vec!["Esc".into()],
                    description: "to cancel".into(),
                }],
            }
        } else {
            UsageInfo {
                description: Some("Type your message to send it to the band".into()),
                lines: vec![
                    UsageInfoLine {
                        keys: vec!["Esc".into()],
                        description: "to cancel".into(),
                    },
                    UsageInfoLine {
                        keys: vec!["Enter".into()],
                        description: "to send your message".into(),
                    },
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_the_text_inside_the_borders() {
        let area = Rect::new(10, 20, 30, 3);

        assert_eq!(cursor_column(area, 0), 11);
        assert_eq!(cursor_column(area, 5), 16);
    }

    #[test]
    fn cursor_stays_inside_the_box_for_long_text() {
        let area = Rect::new(10, 20, 30, 3);

        assert_eq!(cursor_column(area, 27), 38);
        assert_eq!(cursor_column(area, 200), 38);
        assert_eq!(cursor_column(area, usize::MAX), 38);
    }
}
