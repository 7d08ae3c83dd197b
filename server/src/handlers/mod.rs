pub mod chat_handler;
pub mod process_handler;
