//! The implementations of [`GlFunctions`](super::GlFunctions).
//!
//! `direct` and `host` forward to two unrelated native function tables and
//! are compiled in by the features of the same name. `headless` drops every
//! command and is always available.

pub mod headless;

#[cfg(feature = "direct")]
pub mod direct;

#[cfg(feature = "host")]
pub mod host;
