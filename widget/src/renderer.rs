use tracing::{debug, enabled, warn, Level};

use crate::{document::MessageList, node::MessageNode};

/// Appends a chat message node (timestamp, bold username, message) and scrolls to the bottom
pub fn render_message(list: &mut MessageList, username: &str, message: &str, timestamp: &str) {
    append_and_scroll(list, MessageNode::chat(username, message, timestamp));
}

/// Appends a centered, muted status notice with the literal text and scrolls to the bottom
pub fn render_status(list: &mut MessageList, text: &str) {
    append_and_scroll(list, MessageNode::status(text));
}

fn append_and_scroll(list: &mut MessageList, node: MessageNode) {
    if enabled!(Level::DEBUG) {
        match node.to_html() {
            Ok(markup) => debug!(%markup, "rendered node"),
            Err(err) => warn!(%err, "could not render node markup"),
        }
    }

    list.append(node);
    list.scroll_to_bottom();
}

#[cfg(test)]
mod tests {
    use crate::node::NodeContent;

    use super::*;

    #[test]
    fn render_message_appends_structured_node() {
        let mut list = MessageList::default();

        render_message(&mut list, "alice", "hi", "12:00");

        assert_eq!(list.len(), 1);
        assert_eq!(
            list.nodes()[0].content(),
            &NodeContent::Chat {
                timestamp: "12:00".into(),
                username: "alice".into(),
                message: "hi".into(),
            }
        );
        assert_eq!(list.scroll_top(), list.scroll_height());
    }

    #[test]
    fn render_status_appends_centered_node_and_scrolls() {
        let mut list = MessageList::default();
        render_message(&mut list, "alice", "hi", "12:00");

        render_status(&mut list, "Alice joined");

        assert_eq!(list.len(), 2);
        let status = &list.nodes()[1];
        assert!(status.is_centered());
        assert_eq!(status.text_content(), "Alice joined");
        assert_eq!(list.scroll_top(), 2);
    }

    #[test]
    fn rendering_never_touches_existing_nodes() {
        let mut list = MessageList::default();
        render_status(&mut list, "first");
        let first = list.nodes()[0].clone();

        render_message(&mut list, "bob", "second", "12:01");
        render_status(&mut list, "third");

        assert_eq!(list.nodes()[0], first);
        assert_eq!(list.len(), 3);
    }
}
