/// The facade bundling the room session, the document and the transport
pub mod chat_widget;
/// The text input the user types chat messages into
pub mod composer;
/// In-memory equivalent of the widget's DOM: room label, message list and composer
pub mod document;
/// Handling of the composer submission
pub mod form;
/// Nodes appended to the message list and their markup
pub mod node;
/// Appends inbound events to the message list
pub mod renderer;
/// Tracks the currently joined room
pub mod session;
/// The seam towards the external real-time transport
pub mod transport;

pub use chat_widget::ChatWidget;
pub use document::ChatDocument;
pub use transport::Transport;
