//! NameSync Protocol - Sync Layer.
//!
//! The protocol core:
//! - Announcement log with FIFO eviction
//! - Fetch responder and initiator
//! - Response payload wire format
//! - The coordinator and its event queue

mod coordinator;
mod event;
mod initiator;
mod log;
mod payload;
mod responder;

pub use coordinator::*;
pub use event::*;
pub use initiator::*;
pub use log::*;
pub use payload::*;
pub use responder::*;
