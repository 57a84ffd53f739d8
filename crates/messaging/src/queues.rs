//! Named static inboxes and the non-blocking send paths.
//!
//! Three tasks own inboxes: the display task, the background task (sensor
//! and housekeeping) and the radio task. Senders never block; a full inbox
//! drops the message with a logged diagnostic, which mirrors the behaviour
//! of the wire protocol (the host retries at its own pace).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::message::Message;

/// Depth of each task inbox.
pub const QUEUE_DEPTH: usize = 8;

type Inbox = Channel<CriticalSectionRawMutex, Message, QUEUE_DEPTH>;

static DISPLAY_QUEUE: Inbox = Channel::new();
static BACKGROUND_QUEUE: Inbox = Channel::new();
static RADIO_QUEUE: Inbox = Channel::new();

/// Identifies one task inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueId {
    /// The display task inbox.
    Display,
    /// The background task inbox (sensor, LED, housekeeping).
    Background,
    /// The radio task inbox (host-bound traffic).
    Radio,
}

fn inbox(queue: QueueId) -> &'static Inbox {
    match queue {
        QueueId::Display => &DISPLAY_QUEUE,
        QueueId::Background => &BACKGROUND_QUEUE,
        QueueId::Radio => &RADIO_QUEUE,
    }
}

/// Send `msg` to `queue` without blocking.
///
/// Drops the message and logs when the inbox is full.
pub fn send(queue: QueueId, msg: Message) {
    if inbox(queue).try_send(msg).is_err() {
        log::warn!("inbox full; message dropped");
    }
}

/// Send from interrupt context.
///
/// The channel's critical-section path is interrupt-safe and the payload is
/// inline, so this is the same non-allocating path as [`send`].
pub fn send_from_isr(queue: QueueId, msg: Message) {
    send(queue, msg);
}

/// Wait for the next message on `queue`.
pub async fn receive(queue: QueueId) -> Message {
    inbox(queue).receive().await
}
