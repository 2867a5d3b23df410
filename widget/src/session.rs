use tracing::{debug, info};

use crate::{document::ChatDocument, transport::Transport};

/// Tracks the single room the widget is currently chatting in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSession {
    current_room_id: Option<String>,
}

impl RoomSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_room_id(&self) -> Option<&str> {
        self.current_room_id.as_deref()
    }

    /// Switches to the given room.
    ///
    /// Leaves the current room first if there is one, even when it is the same room. Afterwards the
    /// room label shows `room_name`, the message list is empty and the composer is visible.
    pub fn join<T: Transport + ?Sized>(
        &mut self,
        room_id: &str,
        room_name: &str,
        transport: &mut T,
        document: &mut ChatDocument,
    ) {
        if let Some(previous_room_id) = self.current_room_id.take() {
            transport.leave(&previous_room_id);
        }

        self.current_room_id = Some(room_id.to_string());
        transport.join(room_id);
        info!(room_id, room_name, "joined room");

        document.set_room_label(room_name);
        document.messages.clear();
        document.composer.show();
    }

    /// Sends the message to the current room, does nothing when no room was joined yet
    pub fn send<T: Transport + ?Sized>(&self, message: &str, transport: &mut T) {
        match self.current_room_id.as_deref() {
            Some(room_id) => transport.message(message, room_id),
            None => debug!("no room joined, dropping message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use comms::command::UserCommand;

    use super::*;

    #[test]
    fn first_join_only_emits_join() {
        let mut session = RoomSession::new();
        let mut document = ChatDocument::default();
        let mut emitted: Vec<UserCommand> = Vec::new();

        session.join("room1", "Jazz Band", &mut emitted, &mut document);

        assert_eq!(emitted, vec![UserCommand::join("room1")]);
        assert_eq!(session.current_room_id(), Some("room1"));
    }

    #[test]
    fn switching_leaves_previous_room_first() {
        let mut session = RoomSession::new();
        let mut document = ChatDocument::default();
        let mut emitted: Vec<UserCommand> = Vec::new();

        session.join("room1", "Jazz Band", &mut emitted, &mut document);
        session.join("room2", "Rock Band", &mut emitted, &mut document);

        assert_eq!(
            emitted,
            vec![
                UserCommand::join("room1"),
                UserCommand::leave("room1"),
                UserCommand::join("room2"),
            ]
        );
        assert_eq!(session.current_room_id(), Some("room2"));
    }

    #[test]
    fn rejoining_the_same_room_leaves_and_joins_again() {
        let mut session = RoomSession::new();
        let mut document = ChatDocument::default();
        let mut emitted: Vec<UserCommand> = Vec::new();

        session.join("room1", "Jazz Band", &mut emitted, &mut document);
        session.join("room1", "Jazz Band", &mut emitted, &mut document);

        assert_eq!(
            emitted,
            vec![
                UserCommand::join("room1"),
                UserCommand::leave("room1"),
                UserCommand::join("room1"),
            ]
        );
    }

    #[test]
    fn send_without_room_emits_nothing() {
        let session = RoomSession::new();
        let mut emitted: Vec<UserCommand> = Vec::new();

        session.send("hello", &mut emitted);

        assert!(emitted.is_empty());
    }

    #[test]
    fn send_targets_current_room() {
        let mut session = RoomSession::new();
        let mut document = ChatDocument::default();
        let mut emitted: Vec<UserCommand> = Vec::new();
        session.join("room1", "Jazz Band", &mut emitted, &mut document);
        emitted.clear();

        session.send("hello", &mut emitted);

        assert_eq!(emitted, vec![UserCommand::message("hello", "room1")]);
    }
}
