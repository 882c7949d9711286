pub mod chat_handlers;
pub mod download_handlers;
pub mod page_handlers;
