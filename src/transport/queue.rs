//! Interrupt-safe mailbox between a network task and the render loop.
//!
//! The network side pushes events and drains replies; the render loop owns a
//! [`QueueTransport`] that pops events and pushes replies. Both directions are
//! bounded `heapless::Deque`s guarded by `critical-section`, so the network
//! side may run from an interrupt handler or another executor.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, String};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{ConnectionId, MAX_REPLY_LEN, Transport, TransportEvent, truncated};

/// Error returned when a queue is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when a queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Outbound text addressed to one connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: ConnectionId,
    pub text: String<MAX_REPLY_LEN>,
}

/// Bounded event and reply queues
///
/// `EVENTS` inbound events and `REPLIES` outbound replies can be buffered.
/// A full connect dump is roughly 50 lines, so `REPLIES` should be sized
/// accordingly when clients read slowly.
pub struct TransportQueue<const EVENTS: usize, const REPLIES: usize> {
    inbound: Mutex<RefCell<Deque<TransportEvent, EVENTS>>>,
    outbound: Mutex<RefCell<Deque<Reply, REPLIES>>>,
}

impl<const EVENTS: usize, const REPLIES: usize> TransportQueue<EVENTS, REPLIES> {
    /// Create empty queues.
    pub const fn new() -> Self {
        Self {
            inbound: Mutex::new(RefCell::new(Deque::new())),
            outbound: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Transport handle for the render loop.
    pub const fn transport(&self) -> QueueTransport<'_, EVENTS, REPLIES> {
        QueueTransport { queue: self }
    }

    /// Enqueue an inbound event.
    ///
    /// Returns `Err(TrySendError(event))` if the inbound queue is full.
    pub fn try_push_event(&self, event: TransportEvent) -> Result<(), TrySendError<TransportEvent>> {
        critical_section::with(|cs| {
            let mut queue = self.inbound.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Enqueue an inbound text message.
    pub fn try_push_text(
        &self,
        id: ConnectionId,
        message: &str,
    ) -> Result<(), TrySendError<TransportEvent>> {
        self.try_push_event(TransportEvent::text(id, message))
    }

    /// Take the oldest outbound reply.
    ///
    /// Returns `Err(TryReceiveError)` if no reply is waiting.
    pub fn try_take_reply(&self) -> Result<Reply, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.outbound.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    fn pop_event(&self) -> Option<TransportEvent> {
        critical_section::with(|cs| self.inbound.borrow(cs).borrow_mut().pop_front())
    }

    fn push_reply(&self, reply: Reply) -> Result<(), TrySendError<Reply>> {
        critical_section::with(|cs| {
            let mut queue = self.outbound.borrow(cs).borrow_mut();
            queue.push_back(reply).map_err(TrySendError)
        })
    }
}

impl<const EVENTS: usize, const REPLIES: usize> Default for TransportQueue<EVENTS, REPLIES> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render-loop side of a [`TransportQueue`].
#[derive(Clone, Copy)]
pub struct QueueTransport<'a, const EVENTS: usize, const REPLIES: usize> {
    queue: &'a TransportQueue<EVENTS, REPLIES>,
}

impl<const EVENTS: usize, const REPLIES: usize> Transport for QueueTransport<'_, EVENTS, REPLIES> {
    fn poll(&mut self) -> Option<TransportEvent> {
        self.queue.pop_event()
    }

    fn send(&mut self, id: ConnectionId, text: &str) {
        let reply = Reply {
            id,
            text: truncated(text),
        };
        // Replies are best effort; a slow client loses the newest lines.
        if let Err(TrySendError(_dropped)) = self.queue.push_reply(reply) {
            #[cfg(feature = "esp32-log")]
            println!("[QueueTransport.send] reply queue full, dropping {:?}", _dropped.text);
        }
    }
}
