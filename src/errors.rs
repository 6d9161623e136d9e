//! Errors raised by the crate itself.
//!
//! Failures of the native operations are never turned into these; they stay
//! in the GL error flag and are only observable through `get_error` (or the
//! diagnostics emitted when the `diagnostics` feature is enabled).

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "OpenGL entry points are not loaded, run the loader before installing the direct backend.")]
    FunctionsNotLoaded,
    #[fail(display = "[GL] String of {:#x} is empty or malformed.", _0)]
    MalformedString(u32),
    #[fail(display = "[GL] Can not parse a version from '{}'.", _0)]
    MalformedVersion(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
