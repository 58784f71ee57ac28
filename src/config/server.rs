/// Server configuration constants.
///
/// Address and port the HTTP/WebSocket server binds to.
pub const BIND_ADDRESS: &str = "127.0.0.1";

/// Port of the HTTP/WebSocket server.
pub const BIND_PORT: u16 = 8080;
