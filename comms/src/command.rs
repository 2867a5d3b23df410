use serde::{Deserialize, Serialize};

/// Notifies the transport that the user joined a band room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinCommand {
    // The room to join.
    #[serde(rename = "band_id")]
    pub room_id: String,
}

/// Notifies the transport that the user left a band room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveCommand {
    // The room to leave.
    #[serde(rename = "band_id")]
    pub room_id: String,
}

/// Sends a chat message to a band room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCommand {
    // The content of the message.
    pub message: String,
    // The room to send the message to.
    #[serde(rename = "band_id")]
    pub room_id: String,
}

/// A notification emitted by the chat widget towards the transport.
/// Every command is fire-and-forget, the transport never replies to a command directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UserCommand {
    Join(JoinCommand),
    Leave(LeaveCommand),
    Message(MessageCommand),
}

impl UserCommand {
    pub fn join(room_id: impl Into<String>) -> Self {
        UserCommand::Join(JoinCommand {
            room_id: room_id.into(),
        })
    }

    pub fn leave(room_id: impl Into<String>) -> Self {
        UserCommand::Leave(LeaveCommand {
            room_id: room_id.into(),
        })
    }

    pub fn message(message: impl Into<String>, room_id: impl Into<String>) -> Self {
        UserCommand::Message(MessageCommand {
            message: message.into(),
            room_id: room_id.into(),
        })
    }

    /// The room this command is addressed to
    pub fn room_id(&self) -> &str {
        match self {
            UserCommand::Join(command) => &command.room_id,
            UserCommand::Leave(command) => &command.room_id,
            UserCommand::Message(command) => &command.room_id,
        }
    }
}
