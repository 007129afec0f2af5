//! # NameSync Protocol
//!
//! NameSync propagates a growing set of hierarchical names among a group of
//! distributed participants so that every participant eventually learns
//! every name announced by any other, without a central coordinator.
//!
//! The crate provides the protocol core:
//!
//! - **Announcement log**: bounded record of locally announced names,
//!   indexed by publication sequence number
//! - **Fetch responder**: serves the log to peers, silently dropping
//!   requests it cannot answer
//! - **Fetch initiator**: turns state-vector change notifications into one
//!   fetch request per changed remote participant
//! - **Coordinator**: single-threaded event loop binding the above to a
//!   shared namespace tree and to the external synchronizer, transport,
//!   and signer
//!
//! State-vector reconciliation, transport, and signing credentials are
//! external collaborators behind the traits in [`core`].
//!
//! ## Example
//!
//! ```no_run
//! use namesync_protocol::prelude::*;
//!
//! # fn collaborators() -> (Box<dyn Synchronizer>, Box<dyn FetchTransport>) { unimplemented!() }
//! # async fn example() -> Result<(), SyncError> {
//! let config = SyncConfigBuilder::new(
//!     Name::parse("/com/newspaper/USER/bob")?,
//!     Name::parse("/com/newspaper")?,
//! )
//! .build();
//!
//! let (synchronizer, transport) = collaborators();
//! let (mut coordinator, handle) =
//!     NameSync::new(config, synchronizer, transport, Box::new(DigestSigner::new()))?;
//!
//! // Application code advertises names through the handle; the
//! // coordinator merges names fetched from peers into the namespace.
//! handle.insert(Name::parse("/com/newspaper/story/1")?).await?;
//!
//! coordinator.run().await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod namespace;
pub mod signing;
pub mod sync;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::namespace::Namespace;
    pub use crate::signing::DigestSigner;
    pub use crate::sync::*;
}

// Re-export commonly used items at crate root
pub use crate::core::{Name, NameComponent, SyncError, SyncState};
pub use crate::namespace::Namespace;
pub use crate::sync::{Event, InsertOrigin, NameSync, NameSyncHandle, SyncConfig, SyncConfigBuilder};
