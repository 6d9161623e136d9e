//! # What is This?
//!
//! Nether is the graphics dispatch layer of a small rendering toolkit. Every
//! OpenGL call the toolkit makes goes through one trait, [`gl::GlFunctions`],
//! and the implementation behind it is installed once, when rendering starts:
//!
//! * the driver-loaded function table, resolved by the `gl` crate (feature `direct`);
//! * a table handed out by an embedding toolkit that owns the context (feature `host`);
//! * a headless table that drops every command, for tools and tests.
//!
//! With the `diagnostics` feature every dispatched call is followed by a
//! `glGetError` check, and failing calls are reported on standard error as
//! `[ERROR] <call> - <code>`.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod errors;
#[macro_use]
pub mod utils;
pub mod gl;

pub mod prelude {
    pub use crate::errors::{Error, Result};
    pub use crate::gl::diagnostics::{reset_sink, set_sink};
    pub use crate::gl::{
        BackendKind, Capabilities, Diagnostic, Dispatcher, ErrorCode, GlFunctions, Version,
    };
    pub use crate::utils::handle::GlId;
}
