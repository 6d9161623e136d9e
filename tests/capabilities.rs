extern crate nether;

use std::sync::{Mutex, MutexGuard};

use nether::gl::{self, Capabilities, Version};

static SERIAL: Mutex<()> = Mutex::new(());

/// Tests of this file share the registry, run them one at a time against an
/// empty one.
fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|v| v.into_inner());
    gl::uninstall();
    guard
}

#[test]
fn headless() {
    let _guard = serial();
    let functions = gl::install_headless();
    let capabilities = unsafe { gl::capabilities() }.unwrap();

    assert_eq!(capabilities.version, Version::GL(3, 3));
    assert_eq!(capabilities.vendor, "nether");
    assert_eq!(capabilities.renderer, "Headless");
    assert!(capabilities.extensions.gl_khr_debug);
    assert!(!capabilities.extensions.gl_arb_buffer_storage);
    assert!(capabilities.has_debug_output());
    assert_eq!(capabilities.max_combined_texture_image_units, 16);
    assert_eq!(capabilities.max_color_attachments, 4);

    // Indexed extension queries from 3.0 onwards.
    assert_eq!(functions.calls("getStringi"), 1);
    assert_eq!(functions.calls("getError"), 0);
}

#[test]
fn explicit_backend() {
    let functions = nether::gl::backends::headless::HeadlessFunctions::new();
    let capabilities = unsafe { Capabilities::parse(&functions) }.unwrap();
    assert_eq!(capabilities.version, Version::GL(3, 3));
}

#[test]
fn debug_output_by_version() {
    let _guard = serial();
    let functions = gl::install_headless();
    let mut capabilities = unsafe { gl::capabilities() }.unwrap();
    capabilities.extensions.gl_khr_debug = false;
    assert!(!capabilities.has_debug_output());

    capabilities.version = Version::GL(4, 3);
    assert!(capabilities.has_debug_output());

    capabilities.version = Version::ES(3, 1);
    assert!(!capabilities.has_debug_output());

    capabilities.version = Version::ES(3, 2);
    assert!(capabilities.has_debug_output());

    assert_eq!(functions.calls("getString"), 3);
}

#[test]
#[should_panic(expected = "`capabilities` dispatched before a backend was installed")]
fn before_install() {
    let _guard = serial();
    let _ = unsafe { gl::capabilities() };
}
