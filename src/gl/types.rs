//! Scalar aliases and the handful of enumerants the dispatch layer itself
//! needs to know about. Everything else is passed through as a raw `GLenum`.

pub type GLenum = u32;
pub type GLbitfield = u32;

pub const FALSE: u8 = 0;
pub const TRUE: u8 = 1;

// Error codes.
pub const NO_ERROR: GLenum = 0;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVALID_OPERATION: GLenum = 0x0502;
pub const STACK_OVERFLOW: GLenum = 0x0503;
pub const STACK_UNDERFLOW: GLenum = 0x0504;
pub const OUT_OF_MEMORY: GLenum = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;
pub const CONTEXT_LOST: GLenum = 0x0507;

// Strings and limits.
pub const VENDOR: GLenum = 0x1F00;
pub const RENDERER: GLenum = 0x1F01;
pub const VERSION: GLenum = 0x1F02;
pub const EXTENSIONS: GLenum = 0x1F03;
pub const NUM_EXTENSIONS: GLenum = 0x821D;
pub const MAX_COMBINED_TEXTURE_IMAGE_UNITS: GLenum = 0x8B4D;
pub const MAX_COLOR_ATTACHMENTS: GLenum = 0x8CDF;

// Shader and program objects.
pub const FRAGMENT_SHADER: GLenum = 0x8B30;
pub const VERTEX_SHADER: GLenum = 0x8B31;
pub const COMPILE_STATUS: GLenum = 0x8B81;
pub const LINK_STATUS: GLenum = 0x8B82;
pub const VALIDATE_STATUS: GLenum = 0x8B83;
pub const INFO_LOG_LENGTH: GLenum = 0x8B84;
pub const INVALID_INDEX: u32 = 0xFFFF_FFFF;

pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;

// Debug output.
pub const DEBUG_SOURCE_APPLICATION: GLenum = 0x824A;
pub const BUFFER: GLenum = 0x82E0;
pub const SHADER: GLenum = 0x82E1;
pub const PROGRAM: GLenum = 0x82E2;
