//! Process-wide message bus and one-second timer service.
//!
//! Every task owns one named FIFO inbox. A message is a small record
//! `{type, options, buffer}`; the buffer is a bounded inline payload, so
//! nothing on the bus ever touches an allocator; the from-ISR send path is
//! the same non-blocking path as the task-context one.
//!
//! Core logic in the display and sensor crates never sends directly: each
//! handler appends to an [`Outbox`] which the owning task drains into the
//! bus. That keeps the handlers synchronous and host-testable.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod message;
pub mod options;
pub mod queues;
pub mod timer;

pub use message::{route, DisplayMode, Message, MsgType, Outbox, MSG_BUFFER_CAPACITY};
pub use queues::{receive, send, send_from_isr, QueueId};
pub use timer::{TimerId, TimerService, MAX_TIMERS};
