//! The source adapter.
//!
//! - [`CopySource`] - Read-only view over a borrowed byte container with a
//!   forward-only cursor
//! - [`NO_DATA`] - Sentinel returned by the raw read shim
//!
//! Trait integrations (`std::io::Read`, `bytes::Buf`) live in a submodule;
//! the async integration is feature-gated at the crate root.

mod copy;
mod impls;

pub use copy::{CopySource, NO_DATA};
