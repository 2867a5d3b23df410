use serde::{Deserialize, Serialize};

/// A user has sent a message to the current room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageEvent {
    /// The username of the user that has sent the message
    pub username: String,
    /// The content of the message
    pub message: String,
    /// Already formatted time the message was recorded at
    pub timestamp: String,
}

/// A system generated notice, e.g. a user has joined or left the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// The literal text of the notice
    #[serde(rename = "msg")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
/// Events that can be delivered to the chat widget
/// Events are ephemeral, the widget renders them as soon as they arrive and never keeps them around
pub enum Event {
    Message(ChatMessageEvent),
    Status(StatusEvent),
}
