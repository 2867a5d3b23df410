use comms::command::UserCommand;

/// Outbound side of the real-time transport the widget talks through.
///
/// Every notification is fire-and-forget: implementors must not block and the widget never
/// learns whether a command was delivered. Delivery, reconnection and retries belong to the
/// implementor.
pub trait Transport {
    fn emit(&mut self, command: UserCommand);

    fn join(&mut self, room_id: &str) {
        self.emit(UserCommand::join(room_id));
    }

    fn leave(&mut self, room_id: &str) {
        self.emit(UserCommand::leave(room_id));
    }

    fn message(&mut self, message: &str, room_id: &str) {
        self.emit(UserCommand::message(message, room_id));
    }
}

/// Records every emitted command in order
impl Transport for Vec<UserCommand> {
    fn emit(&mut self, command: UserCommand) {
        self.push(command);
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn emit(&mut self, command: UserCommand) {
        (**self).emit(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_emit_matching_commands() {
        let mut emitted: Vec<UserCommand> = Vec::new();

        emitted.join("band-1");
        emitted.message("hello", "band-1");
        emitted.leave("band-1");

        assert_eq!(
            emitted,
            vec![
                UserCommand::join("band-1"),
                UserCommand::message("hello", "band-1"),
                UserCommand::leave("band-1"),
            ]
        );
    }

    fn join_through<T: Transport>(mut transport: T, room_id: &str) {
        transport.join(room_id);
    }

    #[test]
    fn mutable_reference_forwards_to_inner_transport() {
        let mut emitted: Vec<UserCommand> = Vec::new();

        join_through(&mut emitted, "band-2");

        assert_eq!(emitted, vec![UserCommand::join("band-2")]);
    }
}
