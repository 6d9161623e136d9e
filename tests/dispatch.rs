extern crate nether;

use std::sync::{Mutex, MutexGuard};
use std::thread;

use nether::gl::backends::headless::HeadlessFunctions;
use nether::gl::types;
use nether::gl::{self, BackendKind, Bare, Checked, Dispatcher, GlFunctions, ShaderId};

static SERIAL: Mutex<()> = Mutex::new(());

/// Tests of this file share the registry, run them one at a time against an
/// empty one.
fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|v| v.into_inner());
    gl::uninstall();
    guard
}

#[test]
#[should_panic(expected = "`clear` dispatched before a backend was installed")]
fn dispatch_before_install() {
    let _guard = serial();
    unsafe { gl::clear(0) };
}

#[test]
fn nothing_installed() {
    let _guard = serial();
    assert_eq!(gl::active_backend(), None);
}

#[test]
fn routes_to_most_recent() {
    let _guard = serial();
    let first = gl::install_headless();
    unsafe { gl::viewport(0, 0, 64, 64) };

    let second = gl::install_headless();
    unsafe {
        gl::viewport(0, 0, 128, 128);
        gl::clear(0);
    }

    assert_eq!(first.calls("viewport"), 1);
    assert_eq!(first.calls("clear"), 0);
    assert_eq!(second.calls("viewport"), 1);
    assert_eq!(second.calls("clear"), 1);
    assert_eq!(gl::active_backend(), Some(BackendKind::Headless));
}

#[test]
fn custom() {
    let _guard = serial();
    let functions = HeadlessFunctions::new();
    gl::install(BackendKind::Custom, Box::new(functions.clone()));
    assert_eq!(gl::active_backend(), Some(BackendKind::Custom));

    unsafe {
        let shader = gl::create_shader(types::VERTEX_SHADER);
        assert!(!shader.is_none());
        gl::shader_source(shader, &["#version 330 core\n", "void main() {}"]);
        gl::compile_shader(shader);
        assert_eq!(
            gl::get_shader_iv(shader, types::COMPILE_STATUS),
            i32::from(types::TRUE)
        );
    }

    assert_eq!(functions.calls("createShader"), 1);
    assert_eq!(functions.calls("shaderSource"), 1);
    assert_eq!(functions.calls("compileShader"), 1);
}

#[test]
fn dispatch_from_other_threads() {
    let _guard = serial();
    let functions = gl::install_headless();

    let handle = thread::spawn(|| {
        unsafe { gl::clear(0) };
        gl::active_backend()
    });

    assert_eq!(handle.join().unwrap(), Some(BackendKind::Headless));
    assert_eq!(functions.calls("clear"), 1);
}

#[test]
fn one_backend_for_all_threads() {
    let _guard = serial();
    let first = thread::spawn(gl::install_headless).join().unwrap();
    assert_eq!(gl::active_backend(), Some(BackendKind::Headless));

    let second = gl::install_headless();
    thread::spawn(|| unsafe { gl::flush() }).join().unwrap();

    assert_eq!(first.calls("flush"), 0);
    assert_eq!(second.calls("flush"), 1);
}

#[test]
fn uninstall() {
    let _guard = serial();
    assert_eq!(gl::uninstall(), None);

    let functions = gl::install_headless();
    assert_eq!(gl::uninstall(), Some(BackendKind::Headless));
    assert_eq!(gl::active_backend(), None);

    unsafe { functions.clear(0) };
    assert_eq!(functions.calls("clear"), 1);
}

#[test]
fn explicit_dispatcher() {
    let _guard = serial();
    let functions = HeadlessFunctions::new();
    let checked = Dispatcher::<Checked>::headless(functions.clone());
    let bare = Dispatcher::<Bare>::headless(functions.clone());

    unsafe {
        let mut buffers = [gl::BufferId::NONE; 4];
        checked.gen_buffers(&mut buffers);
        assert!(buffers.iter().all(|v| !v.is_none()));

        let program = bare.create_program();
        bare.attach_shader(program, ShaderId::new(1));
        bare.link_program(program);
        assert_eq!(
            bare.get_program_iv(program, types::LINK_STATUS),
            i32::from(types::TRUE)
        );
    }

    assert_eq!(checked.kind(), BackendKind::Headless);
    assert_eq!(functions.calls("genBuffers"), 1);
    assert_eq!(functions.calls("getError"), 1);
    assert_eq!(gl::active_backend(), None);
}

#[test]
fn framebuffer_and_strings() {
    let _guard = serial();
    let _ = gl::install_headless();

    unsafe {
        let mut fbo = [gl::FramebufferId::NONE];
        gl::gen_framebuffers(&mut fbo);
        gl::bind_framebuffer(types::FRAMEBUFFER, fbo[0]);
        assert_eq!(
            gl::check_framebuffer_status(types::FRAMEBUFFER),
            types::FRAMEBUFFER_COMPLETE
        );

        assert!(gl::get_string(types::VERSION).starts_with("3.3"));
        assert_eq!(gl::get_string(0), "");
        assert!(gl::map_buffer_range(0, 0, 16, 0).is_null());
        assert!(gl::unmap_buffer(0));
    }
}

#[cfg(feature = "direct")]
#[test]
fn direct_requires_loader() {
    let _guard = serial();
    match gl::install_direct() {
        Err(nether::errors::Error::FunctionsNotLoaded) => {}
        other => panic!("unexpected {:?}", other),
    }

    assert_eq!(gl::active_backend(), None);
}
