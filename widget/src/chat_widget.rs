use comms::event::Event;
use tracing::info;

use crate::{
    document::ChatDocument,
    form::{self, SubmitEvent},
    renderer,
    session::RoomSession,
    transport::Transport,
};

/// The chat widget: the room session, the document it draws into and the transport it talks through.
///
/// All operations are synchronous and meant to be called from a single event loop, one event at a time.
#[derive(Debug)]
pub struct ChatWidget<T> {
    session: RoomSession,
    document: ChatDocument,
    transport: T,
}

impl<T: Transport> ChatWidget<T> {
    pub fn new(transport: T) -> Self {
        ChatWidget {
            session: RoomSession::new(),
            document: ChatDocument::default(),
            transport,
        }
    }

    pub fn join_room(&mut self, room_id: &str, room_name: &str) {
        self.session
            .join(room_id, room_name, &mut self.transport, &mut self.document);
    }

    /// Submits whatever is in the composer, see [form::on_submit]
    pub fn submit(&mut self) -> SubmitEvent {
        let mut event = SubmitEvent::new();
        form::on_submit(
            &mut event,
            &mut self.document.composer,
            &self.session,
            &mut self.transport,
        );

        event
    }

    /// Renders an event delivered by the transport
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Message(event) => renderer::render_message(
                &mut self.document.messages,
                &event.username,
                &event.message,
                &event.timestamp,
            ),
            Event::Status(event) => renderer::render_status(&mut self.document.messages, &event.text),
        }
    }

    pub fn handle_connect(&self) {
        info!("connected to the chat server");
    }

    pub fn document(&self) -> &ChatDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut ChatDocument {
        &mut self.document
    }

    pub fn session(&self) -> &RoomSession {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
