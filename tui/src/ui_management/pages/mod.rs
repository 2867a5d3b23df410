mod chat_page;

pub use self::chat_page::ChatPage;
