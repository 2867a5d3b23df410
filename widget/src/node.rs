use askama::Template;

/// Class list of a chat message node
pub const CHAT_NODE_CLASS: &str = "mb-2";
/// Class list of a status notice node, centered and muted
pub const STATUS_NODE_CLASS: &str = "text-center text-muted mb-2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    /// A message some user sent to the room
    Chat {
        timestamp: String,
        username: String,
        message: String,
    },
    /// A system generated notice
    Status { text: String },
}

/// A single row appended to the message list.
///
/// Nodes keep the user supplied text structured, markup is only produced by [MessageNode::to_html]
/// which escapes every user controlled field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNode {
    class: &'static str,
    content: NodeContent,
}

#[derive(Template)]
#[template(
    source = r#"<div class="{{ class }}"><small class="text-muted">{{ timestamp }}</small> <strong>{{ username }}:</strong> {{ message }}</div>"#,
    ext = "html"
)]
struct ChatNodeMarkup<'a> {
    class: &'a str,
    timestamp: &'a str,
    username: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(source = r#"<div class="{{ class }}">{{ text }}</div>"#, ext = "html")]
struct StatusNodeMarkup<'a> {
    class: &'a str,
    text: &'a str,
}

impl MessageNode {
    pub fn chat(username: &str, message: &str, timestamp: &str) -> Self {
        MessageNode {
            class: CHAT_NODE_CLASS,
            content: NodeContent::Chat {
                timestamp: timestamp.to_string(),
                username: username.to_string(),
                message: message.to_string(),
            },
        }
    }

    pub fn status(text: &str) -> Self {
        MessageNode {
            class: STATUS_NODE_CLASS,
            content: NodeContent::Status {
                text: text.to_string(),
            },
        }
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    pub fn is_centered(&self) -> bool {
        self.has_class("text-center")
    }

    pub fn is_muted(&self) -> bool {
        self.has_class("text-muted")
    }

    /// The text a reader sees, without any styling
    pub fn text_content(&self) -> String {
        match &self.content {
            NodeContent::Chat {
                timestamp,
                username,
                message,
            } => format!("{timestamp} {username}: {message}"),
            NodeContent::Status { text } => text.clone(),
        }
    }

    /// Markup for the node with every user controlled field escaped
    pub fn to_html(&self) -> askama::Result<String> {
        match &self.content {
            NodeContent::Chat {
                timestamp,
                username,
                message,
            } => ChatNodeMarkup {
                class: self.class,
                timestamp,
                username,
                message,
            }
            .render(),
            NodeContent::Status { text } => StatusNodeMarkup {
                class: self.class,
                text,
            }
            .render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_node_keeps_layout() {
        let node = MessageNode::chat("alice", "hi", "12:00");

        assert_eq!(
            node.to_html().unwrap(),
            r#"<div class="mb-2"><small class="text-muted">12:00</small> <strong>alice:</strong> hi</div>"#
        );
        assert_eq!(node.text_content(), "12:00 alice: hi");
        assert!(!node.is_centered());
    }

    #[test]
    fn chat_node_escapes_user_content() {
        let node = MessageNode::chat("<img src=x>", "<script>alert(1)</script> & more", "<i>now</i>");

        let markup = node.to_html().unwrap();

        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("<img"));
        assert!(!markup.contains("<i>"));
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("&amp; more"));
        assert!(markup.contains("<strong>&lt;img src=x&gt;:</strong>"));
    }

    #[test]
    fn chat_node_escapes_quotes() {
        let markup = MessageNode::chat("a\"b", "it's", "1").to_html().unwrap();

        assert!(markup.contains("<strong>a&quot;b:</strong>"));
        assert!(markup.contains("it&#x27;s"));
    }

    #[test]
    fn status_node_is_centered_and_muted() {
        let node = MessageNode::status("Alice joined");

        assert!(node.is_centered());
        assert!(node.is_muted());
        assert_eq!(node.text_content(), "Alice joined");
        assert_eq!(
            node.to_html().unwrap(),
            r#"<div class="text-center text-muted mb-2">Alice joined</div>"#
        );
    }

    #[test]
    fn status_node_escapes_text() {
        let markup = MessageNode::status("<b>bob</b> left").to_html().unwrap();

        assert!(markup.contains("&lt;b&gt;bob"));
        assert!(!markup.contains("<b>"));
    }
}
