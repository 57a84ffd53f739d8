//! Display task core: frame composition and the page state machine.
//!
//! Everything here is synchronous and hardware-free. The [`DisplayCore`]
//! draws into an in-memory frame buffer through small compositor
//! primitives, pushes finished regions to an [`LcdTransport`] and reports
//! outgoing messages through an outbox; the owning task supplies the inbox,
//! the 1 Hz tick and the bus.
//!
//! [`LcdTransport`]: platform::LcdTransport

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod buttons;
pub mod compositor;
pub mod core;
pub mod fonts;
pub mod framebuffer;
pub mod pages;
pub mod trig;

pub use crate::core::{digital_clock_glyphs, DisplayCore, FIRMWARE_VERSION, WATCH_DRAWN_IDLE_ROWS};
pub use buttons::{configure_page_buttons, page_bindings, ButtonBinding, BUTTON_TABLE};
pub use framebuffer::FrameBuffer;
pub use pages::{determine_idle_page, CurrentPages, Page, PageType};
