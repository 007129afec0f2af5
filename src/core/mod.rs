//! NameSync Protocol - Core types, constants, and collaborator seams.
//!
//! This module has minimal dependencies and defines the abstractions the
//! rest of the crate is built on: hierarchical names, state-vector entries,
//! protocol constants, errors, and the traits toward the external
//! synchronizer, transport, and signer.

mod constants;
mod error;
mod name;
mod traits;

pub use constants::*;
pub use error::*;
pub use name::*;
pub use traits::*;
