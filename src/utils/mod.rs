//! Typed object names and helpers shared by the backends.

#[macro_use]
pub mod handle;

pub use self::handle::{GlId, RawId};
