use std::ops::Range;

use crate::{composer::Composer, node::MessageNode};

/// The scrollable list of rendered nodes.
///
/// Nodes are only ever appended, display order is arrival order. The only way to remove nodes is
/// clearing the whole list. Every node is one row high, so the scroll height is the node count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageList {
    nodes: Vec<MessageNode>,
    scroll_top: usize,
}

impl MessageList {
    pub fn append(&mut self, node: MessageNode) {
        self.nodes.push(node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.scroll_top = 0;
    }

    pub fn nodes(&self) -> &[MessageNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn scroll_height(&self) -> usize {
        self.nodes.len()
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.scroll_height();
    }

    /// Indexes of the nodes visible in a viewport of `height` rows, the row at the scroll position
    /// being the last visible one
    pub fn visible_range(&self, height: usize) -> Range<usize> {
        let end = self.scroll_top.min(self.nodes.len());

        end.saturating_sub(height)..end
    }
}

/// Everything the widget shows: the label of the current room, the message list and the composer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatDocument {
    /// Name of the joined room, none until the first join
    room_label: Option<String>,
    pub messages: MessageList,
    pub composer: Composer,
}

impl ChatDocument {
    pub fn room_label(&self) -> Option<&str> {
        self.room_label.as_deref()
    }

    pub fn set_room_label(&mut self, label: &str) {
        self.room_label = Some(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(count: usize) -> MessageList {
        let mut list = MessageList::default();
        for idx in 0..count {
            list.append(MessageNode::status(&format!("notice {idx}")));
        }
        list
    }

    #[test]
    fn append_keeps_arrival_order() {
        let list = list_with(3);

        let texts: Vec<String> = list.nodes().iter().map(|n| n.text_content()).collect();
        assert_eq!(texts, vec!["notice 0", "notice 1", "notice 2"]);
    }

    #[test]
    fn clear_removes_everything_and_resets_scroll() {
        let mut list = list_with(3);
        list.scroll_to_bottom();

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.scroll_top(), 0);
        assert_eq!(list.scroll_height(), 0);
    }

    #[test]
    fn visible_range_follows_scroll_position() {
        let mut list = list_with(10);

        // nothing scrolled yet
        assert_eq!(list.visible_range(4), 0..0);

        list.scroll_to_bottom();
        assert_eq!(list.scroll_top(), list.scroll_height());
        assert_eq!(list.visible_range(4), 6..10);
        assert_eq!(list.visible_range(20), 0..10);
    }

    #[test]
    fn room_label_is_unset_until_first_join() {
        let mut document = ChatDocument::default();
        assert_eq!(document.room_label(), None);

        document.set_room_label("Jazz Band");
        assert_eq!(document.room_label(), Some("Jazz Band"));
    }
}
