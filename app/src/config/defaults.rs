//! Default configuration values.

/// Unread-message count endpoint polled at startup.
pub const ENDPOINT_URL: &str = "http://127.0.0.1:8000/accounts/unread_message_count/";

/// Port the overlay HTTP + WebSocket server binds to.
pub const SERVER_PORT: u16 = 8080;

/// Seconds between polls after the startup poll. `0` polls once only.
pub const POLL_INTERVAL_SECS: u64 = 0;
