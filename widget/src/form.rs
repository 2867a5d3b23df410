use crate::{composer::Composer, session::RoomSession, transport::Transport};

/// A submit intent coming from the composer form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the host's default submit behaviour (navigation, reload)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handles a composer submission.
///
/// The default action is always prevented, whatever the input. Whitespace only input is ignored
/// and left in the composer. Otherwise the trimmed text goes to the session, the composer is cleared
/// and the sent text is returned.
pub fn on_submit<T: Transport + ?Sized>(
    event: &mut SubmitEvent,
    composer: &mut Composer,
    session: &RoomSession,
    transport: &mut T,
) -> Option<String> {
    event.prevent_default();

    let message = trim_blank(composer.text());
    if message.is_empty() {
        return None;
    }

    let message = message.to_string();
    session.send(&message, transport);
    composer.clear();

    Some(message)
}

/// Trims whitespace and byte order marks from both ends
fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
