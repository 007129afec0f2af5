//! NameSync Protocol - Shared Namespace.
//!
//! The mutable name tree the coordinator and the application both insert
//! into. Only insertion and lookup live here; interpreting the content at a
//! name belongs to upstream consumers.

mod tree;

pub use tree::*;
