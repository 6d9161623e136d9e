//! Post-call error checking.
//!
//! Whether dispatched calls are checked is decided at build time by the
//! `diagnostics` feature, which picks the [`Active`] instrumentation. A
//! checked call queries `get_error` once after forwarding and, if the flag
//! was raised, hands a [`Diagnostic`] to the sink of the calling thread. The
//! check is purely observational: the forwarded call's result is returned
//! untouched and nothing is retried.

use std::cell::RefCell;
use std::fmt;

use super::types::{self, GLenum};
use super::GlFunctions;

/// Selects whether dispatched calls are followed by an error check.
pub trait Instrumentation: 'static {
    const CHECKED: bool;
}

/// Every forwarded call is followed by one `get_error` query.
#[derive(Debug)]
pub enum Checked {}

/// Calls are forwarded as they are.
#[derive(Debug)]
pub enum Bare {}

impl Instrumentation for Checked {
    const CHECKED: bool = true;
}

impl Instrumentation for Bare {
    const CHECKED: bool = false;
}

/// The instrumentation used by the free dispatch functions.
#[cfg(feature = "diagnostics")]
pub type Active = Checked;

/// The instrumentation used by the free dispatch functions.
#[cfg(not(feature = "diagnostics"))]
pub type Active = Bare;

/// A decoded value of the GL error flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,
    ContextLost,
    Unknown(GLenum),
}

impl ErrorCode {
    pub fn from_raw(code: GLenum) -> Self {
        match code {
            types::NO_ERROR => ErrorCode::NoError,
            types::INVALID_ENUM => ErrorCode::InvalidEnum,
            types::INVALID_VALUE => ErrorCode::InvalidValue,
            types::INVALID_OPERATION => ErrorCode::InvalidOperation,
            types::STACK_OVERFLOW => ErrorCode::StackOverflow,
            types::STACK_UNDERFLOW => ErrorCode::StackUnderflow,
            types::OUT_OF_MEMORY => ErrorCode::OutOfMemory,
            types::INVALID_FRAMEBUFFER_OPERATION => ErrorCode::InvalidFramebufferOperation,
            types::CONTEXT_LOST => ErrorCode::ContextLost,
            v => ErrorCode::Unknown(v),
        }
    }

    pub fn raw(self) -> GLenum {
        match self {
            ErrorCode::NoError => types::NO_ERROR,
            ErrorCode::InvalidEnum => types::INVALID_ENUM,
            ErrorCode::InvalidValue => types::INVALID_VALUE,
            ErrorCode::InvalidOperation => types::INVALID_OPERATION,
            ErrorCode::StackOverflow => types::STACK_OVERFLOW,
            ErrorCode::StackUnderflow => types::STACK_UNDERFLOW,
            ErrorCode::OutOfMemory => types::OUT_OF_MEMORY,
            ErrorCode::InvalidFramebufferOperation => types::INVALID_FRAMEBUFFER_OPERATION,
            ErrorCode::ContextLost => types::CONTEXT_LOST,
            ErrorCode::Unknown(v) => v,
        }
    }

    /// The symbolic name of a known code, `None` for `Unknown`.
    pub fn name(self) -> Option<&'static str> {
        match self {
            ErrorCode::NoError => Some("GL_NO_ERROR"),
            ErrorCode::InvalidEnum => Some("GL_INVALID_ENUM"),
            ErrorCode::InvalidValue => Some("GL_INVALID_VALUE"),
            ErrorCode::InvalidOperation => Some("GL_INVALID_OPERATION"),
            ErrorCode::StackOverflow => Some("GL_STACK_OVERFLOW"),
            ErrorCode::StackUnderflow => Some("GL_STACK_UNDERFLOW"),
            ErrorCode::OutOfMemory => Some("GL_OUT_OF_MEMORY"),
            ErrorCode::InvalidFramebufferOperation => Some("GL_INVALID_FRAMEBUFFER_OPERATION"),
            ErrorCode::ContextLost => Some("GL_CONTEXT_LOST"),
            ErrorCode::Unknown(_) => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown code (0x{:X})", self.raw()),
        }
    }
}

/// A failing call observed by a checked dispatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// GL name of the call without the `gl` prefix, e.g. `compileShader`.
    pub call: &'static str,
    pub code: ErrorCode,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ERROR] {} - {}", self.call, self.code)
    }
}

type Sink = Box<dyn FnMut(&Diagnostic)>;

thread_local! {
    static SINK: RefCell<Option<Sink>> = RefCell::new(None);
}

/// Routes the diagnostics raised on the current thread to `sink` instead
/// of standard error.
pub fn set_sink<F>(sink: F)
where
    F: FnMut(&Diagnostic) + 'static,
{
    SINK.with(|v| *v.borrow_mut() = Some(Box::new(sink)));
}

/// Restores the default sink, which writes every diagnostic to standard
/// error as a line of its own.
pub fn reset_sink() {
    SINK.with(|v| *v.borrow_mut() = None);
}

fn write_stderr(diagnostic: &Diagnostic) {
    eprintln!("{}", diagnostic);
}

/// Hands `diagnostic` to the sink of the current thread.
pub fn emit(diagnostic: &Diagnostic) {
    SINK.with(|v| match v.try_borrow_mut() {
        Ok(mut sink) => match *sink {
            Some(ref mut sink) => sink(diagnostic),
            None => write_stderr(diagnostic),
        },
        // A sink that dispatches checked calls itself ends up here.
        Err(_) => write_stderr(diagnostic),
    });
}

/// Queries the error flag of `gl` and emits a diagnostic naming `call` if it
/// was raised. Returns the decoded code.
pub unsafe fn check(gl: &dyn GlFunctions, call: &'static str) -> ErrorCode {
    let code = ErrorCode::from_raw(gl.get_error());
    if code != ErrorCode::NoError {
        emit(&Diagnostic { call, code });
    }

    code
}

/// Forwards one call to `gl`, followed by a `check` if `I` asks for it.
///
/// With `Bare` this compiles down to `f(gl)`.
#[inline]
pub unsafe fn forward<I, T, F>(gl: &dyn GlFunctions, call: &'static str, f: F) -> T
where
    I: Instrumentation,
    F: FnOnce(&dyn GlFunctions) -> T,
{
    let v = f(gl);
    if I::CHECKED {
        check(gl, call);
    }

    v
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let diagnostic = Diagnostic {
            call: "compileShader",
            code: ErrorCode::InvalidOperation,
        };

        assert_eq!(
            format!("{}", diagnostic),
            "[ERROR] compileShader - GL_INVALID_OPERATION"
        );
    }

    #[test]
    fn unknown_codes_are_rendered_in_hex() {
        assert_eq!(format!("{}", ErrorCode::from_raw(0xBEEF)), "unknown code (0xBEEF)");
        assert_eq!(format!("{}", ErrorCode::from_raw(0x1)), "unknown code (0x1)");
    }

    #[test]
    fn raw_round_trips() {
        for code in 0x0500..0x0508 {
            assert_eq!(ErrorCode::from_raw(code).raw(), code);
            assert!(ErrorCode::from_raw(code).name().is_some());
        }
    }
}
