use widget::{ChatDocument, ChatWidget, Transport};

use crate::config::Band;

/// Snapshot of everything the UI draws
#[derive(Debug, Clone)]
pub struct State {
    /// Address of the chat server
    pub server_addr: String,
    /// Bands the user can join
    pub bands: Vec<Band>,
    /// Id of the band the user is chatting in
    pub active_band: Option<String>,
    /// The widget's document: room label, message list and composer
    pub document: ChatDocument,
    /// Seconds since the app connected
    pub timer: usize,
}

impl State {
    pub fn new(server_addr: &str, bands: Vec<Band>) -> Self {
        State {
            server_addr: server_addr.to_string(),
            bands,
            active_band: None,
            document: ChatDocument::default(),
            timer: 0,
        }
    }

    /// Copies the widget's current document and room into the snapshot
    pub fn sync_with<T: Transport>(&mut self, widget: &ChatWidget<T>) {
        self.active_band = widget.session().current_room_id().map(String::from);
        self.document = widget.document().clone();
    }

    pub fn tick_timer(&mut self) {
        self.timer += 1;
    }
}
