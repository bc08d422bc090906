pub mod client_message;
pub mod command;
pub mod server_message;
