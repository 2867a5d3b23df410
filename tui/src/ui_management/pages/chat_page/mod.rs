#[allow(clippy::module_inception)]
mod chat_page;
mod components;
mod section;

pub use self::chat_page::ChatPage;
