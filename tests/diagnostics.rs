extern crate env_logger;
extern crate nether;
extern crate rand;

use std::cell::RefCell;
use std::env;
use std::process::Command;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};

use rand::Rng;

use nether::gl::backends::headless::HeadlessFunctions;
use nether::gl::diagnostics;
use nether::gl::types;
use nether::gl::{self, Bare, Checked, Diagnostic, Dispatcher, ErrorCode};

static SERIAL: Mutex<()> = Mutex::new(());

/// Tests of this file that go through the registry run one at a time against
/// an empty one.
fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|v| v.into_inner());
    gl::uninstall();
    guard
}

fn capture() -> Rc<RefCell<Vec<String>>> {
    let _ = env_logger::try_init();

    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = lines.clone();
    diagnostics::set_sink(move |v: &Diagnostic| sink.borrow_mut().push(v.to_string()));
    lines
}

#[test]
fn failing_call() {
    let lines = capture();

    let functions = HeadlessFunctions::new();
    functions.fail_on("compileShader", types::INVALID_OPERATION);
    let gl = Dispatcher::<Checked>::headless(functions.clone());

    unsafe {
        let shader = gl.create_shader(types::FRAGMENT_SHADER);
        assert!(lines.borrow().is_empty());

        gl.compile_shader(shader);
        gl.delete_shader(shader);
    }

    assert_eq!(
        *lines.borrow(),
        vec!["[ERROR] compileShader - GL_INVALID_OPERATION".to_owned()]
    );

    assert_eq!(functions.calls("getError"), 3);
}

#[test]
fn succeeding_calls_are_silent() {
    let lines = capture();
    let functions = HeadlessFunctions::new();
    let gl = Dispatcher::<Checked>::headless(functions.clone());

    unsafe {
        gl.enable(0x0B71);
        gl.depth_func(0x0203);
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(0x4100);
    }

    assert!(lines.borrow().is_empty());
    assert_eq!(functions.calls("getError"), 4);
}

#[test]
fn bare_never_queries_errors() {
    let lines = capture();

    let functions = HeadlessFunctions::new();
    functions.fail_on("drawArrays", types::INVALID_ENUM);
    let gl = Dispatcher::<Bare>::headless(functions.clone());

    unsafe {
        gl.bind_vertex_array(gl::VertexArrayId::new(1));
        gl.draw_arrays(0, 0, 3);
        gl.draw_arrays(0, 3, 3);
    }

    assert!(lines.borrow().is_empty());
    assert_eq!(functions.calls("getError"), 0);

    // The flag is still raised for whoever polls it.
    assert_eq!(unsafe { gl.get_error() }, types::INVALID_ENUM);
    assert_eq!(unsafe { gl.get_error() }, types::NO_ERROR);
}

#[test]
fn get_error_is_not_instrumented() {
    let _guard = serial();
    let lines = capture();

    let functions = gl::install_headless();
    functions.fail_on("clear", types::OUT_OF_MEMORY);

    unsafe {
        gl::clear(0);
        let code = gl::get_error();

        if cfg!(feature = "diagnostics") {
            assert_eq!(lines.borrow().len(), 1);
            assert_eq!(functions.calls("getError"), 2);
            assert_eq!(code, types::NO_ERROR);
        } else {
            assert!(lines.borrow().is_empty());
            assert_eq!(functions.calls("getError"), 1);
            assert_eq!(code, types::OUT_OF_MEMORY);
        }
    }
}

#[test]
fn each_failing_call_is_reported() {
    let lines = capture();

    let functions = HeadlessFunctions::new();
    functions
        .fail_on("bindTexture", types::INVALID_ENUM)
        .fail_on("texParameteri", types::INVALID_VALUE);

    let gl = Dispatcher::<Checked>::headless(functions.clone());
    unsafe {
        gl.bind_texture(0, gl::TextureId::new(1));
        gl.tex_parameter_i(0, 0, 0);
    }

    assert_eq!(
        *lines.borrow(),
        vec![
            "[ERROR] bindTexture - GL_INVALID_ENUM".to_owned(),
            "[ERROR] texParameteri - GL_INVALID_VALUE".to_owned(),
        ]
    );
}

const DEFAULT_SINK_CHILD: &str = "NETHER_DEFAULT_SINK_CHILD";

#[test]
fn default_sink() {
    if env::var_os(DEFAULT_SINK_CHILD).is_some() {
        diagnostics::reset_sink();

        let functions = HeadlessFunctions::new();
        functions.fail_on("compileShader", types::INVALID_OPERATION);
        let gl = Dispatcher::<Checked>::headless(functions);

        unsafe {
            let shader = gl.create_shader(types::VERTEX_SHADER);
            gl.compile_shader(shader);
            gl.delete_shader(shader);
        }

        return;
    }

    // Runs this very test again in a child process, where stderr is not
    // captured by the harness.
    let output = Command::new(env::current_exe().unwrap())
        .args(&["default_sink", "--exact", "--nocapture", "--test-threads=1"])
        .env(DEFAULT_SINK_CHILD, "1")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|v| v.contains("[ERROR]")).collect();
    assert_eq!(lines, vec!["[ERROR] compileShader - GL_INVALID_OPERATION"]);
}

#[cfg(feature = "diagnostics")]
#[test]
fn sink_may_install_a_backend() {
    let _guard = serial();

    let first = gl::install_headless();
    first.fail_on("clear", types::INVALID_OPERATION);

    let installed = Rc::new(RefCell::new(None));
    let slot = installed.clone();
    diagnostics::set_sink(move |_: &Diagnostic| {
        *slot.borrow_mut() = Some(gl::install_headless());
    });

    unsafe { gl::clear(0) };
    diagnostics::reset_sink();

    let second = installed.borrow_mut().take().unwrap();
    unsafe { gl::clear(0) };

    assert_eq!(first.calls("clear"), 1);
    assert_eq!(first.calls("getError"), 1);
    assert_eq!(second.calls("clear"), 1);
}

#[test]
fn decode_known_codes() {
    let table = [
        (types::INVALID_ENUM, "GL_INVALID_ENUM"),
        (types::INVALID_VALUE, "GL_INVALID_VALUE"),
        (types::INVALID_OPERATION, "GL_INVALID_OPERATION"),
        (types::STACK_OVERFLOW, "GL_STACK_OVERFLOW"),
        (types::STACK_UNDERFLOW, "GL_STACK_UNDERFLOW"),
        (types::OUT_OF_MEMORY, "GL_OUT_OF_MEMORY"),
        (
            types::INVALID_FRAMEBUFFER_OPERATION,
            "GL_INVALID_FRAMEBUFFER_OPERATION",
        ),
        (types::CONTEXT_LOST, "GL_CONTEXT_LOST"),
    ];

    for &(code, name) in &table {
        let decoded = ErrorCode::from_raw(code);
        assert_eq!(decoded.name(), Some(name));
        assert_eq!(decoded.to_string(), name);
        assert_eq!(decoded.raw(), code);
    }

    assert_eq!(ErrorCode::from_raw(types::NO_ERROR), ErrorCode::NoError);
}

#[test]
fn decode_unknown_codes() {
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let code: u32 = rng.gen();
        if code == types::NO_ERROR || (code >= 0x0500 && code <= 0x0507) {
            continue;
        }

        let decoded = ErrorCode::from_raw(code);
        assert_eq!(decoded, ErrorCode::Unknown(code));
        assert_eq!(decoded.to_string(), format!("unknown code (0x{:X})", code));
    }

    assert_eq!(
        ErrorCode::from_raw(0x0508).to_string(),
        "unknown code (0x508)"
    );
}
