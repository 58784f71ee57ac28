pub mod messages;
pub mod server;
pub mod session;
