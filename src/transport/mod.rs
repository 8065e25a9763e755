//! Session transport seam
//!
//! The controller does not own the network stack. A transport hands over
//! connection events and complete text messages and accepts text replies.

mod queue;

use heapless::String;

pub use queue::{QueueTransport, Reply, TransportQueue, TryReceiveError, TrySendError};

/// Transport-assigned connection handle
pub type ConnectionId = u8;

/// Longest accepted inbound message, bytes
pub const MAX_MESSAGE_LEN: usize = 64;

/// Longest reported connection path, bytes
pub const MAX_URL_LEN: usize = 32;

/// Longest outbound reply, bytes
pub const MAX_REPLY_LEN: usize = 64;

/// Inbound text message
pub type Message = String<MAX_MESSAGE_LEN>;

/// Events delivered by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A client connected
    Connected {
        id: ConnectionId,
        /// Remote IPv4 address
        remote: [u8; 4],
        /// Requested path
        url: String<MAX_URL_LEN>,
    },
    /// A client went away
    Disconnected { id: ConnectionId },
    /// A complete text message arrived
    Text { id: ConnectionId, message: Message },
}

impl TransportEvent {
    /// Build a text event, truncating overlong messages
    pub fn text(id: ConnectionId, message: &str) -> Self {
        Self::Text {
            id,
            message: truncated(message),
        }
    }

    /// Build a connect event, truncating an overlong path
    pub fn connected(id: ConnectionId, remote: [u8; 4], url: &str) -> Self {
        Self::Connected {
            id,
            remote,
            url: truncated(url),
        }
    }
}

/// Non-blocking session transport
pub trait Transport {
    /// Take the next pending event, if any
    fn poll(&mut self) -> Option<TransportEvent>;

    /// Send a text reply to one connection
    fn send(&mut self, id: ConnectionId, text: &str);
}

/// Copy as many whole characters of `text` as fit into `N` bytes
pub(crate) fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
