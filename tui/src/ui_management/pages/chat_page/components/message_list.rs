use ratatui::{
    prelude::{Alignment, Backend, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use widget::{
    document::MessageList,
    node::{MessageNode, NodeContent},
};

use crate::ui_management::components::ComponentRender;

const NO_BAND_SELECTED_MESSAGE: &str = "Join a band to start chatting!";

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Terminal counterpart of the node markup: muted timestamp, bold username, plain message.
/// Status notices are centered and muted.
fn node_to_line(node: &MessageNode) -> Line<'_> {
    match node.content() {
        NodeContent::Chat {
            timestamp,
            username,
            message,
        } => Line::from(vec![
            Span::styled(timestamp.as_str(), muted()),
            Span::raw(" "),
            Span::styled(
                format!("{username}:"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(message.as_str()),
        ]),
        NodeContent::Status { text } => {
            Line::from(Span::styled(text.as_str(), muted().add_modifier(Modifier::ITALIC)))
                .alignment(Alignment::Center)
        }
    }
}

/// Draws the rows of the message list that fit, keeping the scroll position as the last visible row
pub struct MessageListView<'a> {
    pub messages: &'a MessageList,
    /// Whether a band has been joined yet
    pub has_band: bool,
}

pub struct RenderProps {
    pub area: Rect,
}

impl ComponentRender<RenderProps> for MessageListView<'_> {
    fn render<B: Backend>(&self, frame: &mut Frame<B>, props: RenderProps) {
        let lines: Vec<Line> = if self.has_band {
            // 2 rows go to the borders
            let height = props.area.height.saturating_sub(2) as usize;

            self.messages.nodes()[self.messages.visible_range(height)]
                .iter()
                .map(node_to_line)
                .collect()
        } else {
            vec![Line::from(NO_BAND_SELECTED_MESSAGE)]
        };

        let messages =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));
        frame.render_widget(messages, props.area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn chat_line_bolds_the_username() {
        let node = MessageNode::chat("alice", "<b>hi</b>", "12:00");

        let line = node_to_line(&node);

        assert_eq!(line_text(&line), "12:00 alice: <b>hi</b>");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn status_line_is_centered() {
        let node = MessageNode::status("Alice joined");

        let line = node_to_line(&node);

        assert_eq!(line_text(&line), "Alice joined");
        assert_eq!(line.alignment, Some(Alignment::Center));
    }
}
