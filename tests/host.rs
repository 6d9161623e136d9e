#![cfg(feature = "host")]

extern crate nether;

use std::collections::HashMap;
use std::os::raw::{c_char, c_void};
use std::ptr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::slice;

use nether::gl::backends::host::{HostContext, HostFunctions};
use nether::gl::types;
use nether::gl::{self, BackendKind};

/// A host table that records what reaches it.
#[derive(Default)]
struct CountingHost {
    calls: Mutex<HashMap<&'static str, usize>>,
    sources: Mutex<Vec<String>>,
    labels: Mutex<Vec<String>>,
    offsets: Mutex<Vec<usize>>,
    counts: Mutex<Vec<i32>>,
}

/// The active backend seen by every `CountingHost` while it is dropped.
static DROPPED: Mutex<Vec<Option<BackendKind>>> = Mutex::new(Vec::new());

impl Drop for CountingHost {
    fn drop(&mut self) {
        DROPPED.lock().unwrap().push(gl::active_backend());
    }
}

static SERIAL: Mutex<()> = Mutex::new(());

/// Tests of this file share the registry, run them one at a time against an
/// empty one.
fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|v| v.into_inner());
    gl::uninstall();
    guard
}

impl CountingHost {
    fn hit(&self, name: &'static str) {
        *self.calls.lock().unwrap().entry(name).or_insert(0) += 1;
    }

    fn calls(&self, name: &str) -> usize {
        self.calls.lock().unwrap().get(name).cloned().unwrap_or(0)
    }
}

macro_rules! counting_host {
    ($(fn $name:ident(&$this:ident $(, $arg:tt: $ty:ty)*) $(-> $ret:ty)? $body:block)*) => {
        impl HostFunctions for CountingHost {
            $(
                unsafe fn $name(&$this $(, $arg: $ty)*) $(-> $ret)? {
                    $this.hit(stringify!($name));
                    $body
                }
            )*
        }
    };
}

counting_host! {
    fn create_shader(&self, _: u32) -> u32 { 7 }
    fn shader_source(&self, _: u32, count: i32, strings: *mut *const c_char, lengths: *const i32) {
        let mut text = String::new();
        for i in 0..count as usize {
            let bytes = slice::from_raw_parts(*strings.add(i) as *const u8, *lengths.add(i) as usize);
            text.push_str(&String::from_utf8_lossy(bytes));
        }

        self.sources.lock().unwrap().push(text);
    }
    fn compile_shader(&self, _: u32) {}
    fn delete_shader(&self, _: u32) {}
    fn get_shader_iv(&self, _: u32, _: u32, _: *mut i32) {}
    fn get_shader_info_log(&self, _: u32, _: i32, _: *mut i32, _: *mut c_char) {}
    fn create_program(&self) -> u32 { 0 }
    fn attach_shader(&self, _: u32, _: u32) {}
    fn detach_shader(&self, _: u32, _: u32) {}
    fn link_program(&self, _: u32) {}
    fn validate_program(&self, _: u32) {}
    fn use_program(&self, _: u32) {}
    fn delete_program(&self, _: u32) {}
    fn get_program_iv(&self, _: u32, _: u32, _: *mut i32) {}
    fn get_program_info_log(&self, _: u32, _: i32, _: *mut i32, _: *mut c_char) {}
    fn get_uniform_location(&self, _: u32, _: *const c_char) -> i32 { -1 }
    fn get_attrib_location(&self, _: u32, _: *const c_char) -> i32 { 0 }
    fn bind_attrib_location(&self, _: u32, _: u32, _: *const c_char) {}
    fn get_uniform_block_index(&self, _: u32, _: *const c_char) -> u32 { 0 }
    fn uniform_block_binding(&self, _: u32, _: u32, _: u32) {}
    fn gen_buffers(&self, n: i32, buffers: *mut u32) {
        for i in 0..n as usize {
            *buffers.add(i) = 10 + i as u32;
        }
    }
    fn delete_buffers(&self, _: i32, _: *const u32) {}
    fn bind_buffer(&self, _: u32, _: u32) {}
    fn bind_buffer_base(&self, _: u32, _: u32, _: u32) {}
    fn bind_buffer_range(&self, _: u32, _: u32, _: u32, _: i64, _: i64) {}
    fn buffer_data(&self, _: u32, _: i64, _: *const c_void, _: u32) {}
    fn buffer_sub_data(&self, _: u32, _: i64, _: i64, _: *const c_void) {}
    fn buffer_storage(&self, _: u32, _: i64, _: *const c_void, _: u32) {}
    fn copy_buffer_sub_data(&self, _: u32, _: u32, _: i64, _: i64, _: i64) {}
    fn map_buffer_range(&self, _: u32, _: i64, _: i64, _: u32) -> *mut c_void { ptr::null_mut() }
    fn flush_mapped_buffer_range(&self, _: u32, _: i64, _: i64) {}
    fn unmap_buffer(&self, _: u32) -> u8 { 0 }
    fn gen_vertex_arrays(&self, _: i32, _: *mut u32) {}
    fn delete_vertex_arrays(&self, _: i32, _: *const u32) {}
    fn bind_vertex_array(&self, _: u32) {}
    fn enable_vertex_attrib_array(&self, _: u32) {}
    fn disable_vertex_attrib_array(&self, _: u32) {}
    fn vertex_attrib_pointer(&self, _: u32, _: i32, _: u32, _: u8, _: i32, _: *const c_void) {}
    fn vertex_attrib_i_pointer(&self, _: u32, _: i32, _: u32, _: i32, _: *const c_void) {}
    fn vertex_attrib_divisor(&self, _: u32, _: u32) {}
    fn gen_textures(&self, _: i32, _: *mut u32) {}
    fn delete_textures(&self, _: i32, _: *const u32) {}
    fn bind_texture(&self, _: u32, _: u32) {}
    fn active_texture(&self, _: u32) {}
    fn tex_image_2d(&self, _: u32, _: i32, _: i32, _: i32, _: i32, _: i32, _: u32, _: u32, _: *const c_void) {}
    fn tex_image_3d(&self, _: u32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: u32, _: u32, _: *const c_void) {}
    fn tex_sub_image_2d(&self, _: u32, _: i32, _: i32, _: i32, _: i32, _: i32, _: u32, _: u32, _: *const c_void) {}
    fn tex_sub_image_3d(&self, _: u32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: u32, _: u32, _: *const c_void) {}
    fn compressed_tex_image_2d(&self, _: u32, _: i32, _: u32, _: i32, _: i32, _: i32, _: i32, _: *const c_void) {}
    fn compressed_tex_image_3d(&self, _: u32, _: i32, _: u32, _: i32, _: i32, _: i32, _: i32, _: i32, _: *const c_void) {}
    fn compressed_tex_sub_image_2d(&self, _: u32, _: i32, _: i32, _: i32, _: i32, _: i32, _: u32, _: i32, _: *const c_void) {}
    fn tex_storage_2d(&self, _: u32, _: i32, _: u32, _: i32, _: i32) {}
    fn tex_storage_3d(&self, _: u32, _: i32, _: u32, _: i32, _: i32, _: i32) {}
    fn tex_parameter_i(&self, _: u32, _: u32, _: i32) {}
    fn tex_parameter_f(&self, _: u32, _: u32, _: f32) {}
    fn generate_mipmap(&self, _: u32) {}
    fn get_tex_level_parameter_iv(&self, _: u32, _: i32, _: u32, _: *mut i32) {}
    fn pixel_store_i(&self, _: u32, _: i32) {}
    fn gen_samplers(&self, _: i32, _: *mut u32) {}
    fn delete_samplers(&self, _: i32, _: *const u32) {}
    fn bind_sampler(&self, _: u32, _: u32) {}
    fn sampler_parameter_i(&self, _: u32, _: u32, _: i32) {}
    fn gen_framebuffers(&self, _: i32, _: *mut u32) {}
    fn delete_framebuffers(&self, _: i32, _: *const u32) {}
    fn bind_framebuffer(&self, _: u32, _: u32) {}
    fn framebuffer_texture_2d(&self, _: u32, _: u32, _: u32, _: u32, _: i32) {}
    fn framebuffer_renderbuffer(&self, _: u32, _: u32, _: u32, _: u32) {}
    fn check_framebuffer_status(&self, _: u32) -> u32 { 0 }
    fn blit_framebuffer(&self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: u32, _: u32) {}
    fn draw_buffers(&self, _: i32, _: *const u32) {}
    fn read_buffer(&self, _: u32) {}
    fn read_pixels(&self, _: i32, _: i32, _: i32, _: i32, _: u32, _: u32, _: *mut c_void) {}
    fn invalidate_framebuffer(&self, _: u32, _: i32, _: *const u32) {}
    fn gen_renderbuffers(&self, _: i32, _: *mut u32) {}
    fn delete_renderbuffers(&self, _: i32, _: *const u32) {}
    fn bind_renderbuffer(&self, _: u32, _: u32) {}
    fn renderbuffer_storage(&self, _: u32, _: u32, _: i32, _: i32) {}
    fn renderbuffer_storage_multisample(&self, _: u32, _: i32, _: u32, _: i32, _: i32) {}
    fn uniform_1i(&self, _: i32, _: i32) {}
    fn uniform_2i(&self, _: i32, _: i32, _: i32) {}
    fn uniform_3i(&self, _: i32, _: i32, _: i32, _: i32) {}
    fn uniform_4i(&self, _: i32, _: i32, _: i32, _: i32, _: i32) {}
    fn uniform_1ui(&self, _: i32, _: u32) {}
    fn uniform_1f(&self, _: i32, _: f32) {}
    fn uniform_2f(&self, _: i32, _: f32, _: f32) {}
    fn uniform_3f(&self, _: i32, _: f32, _: f32, _: f32) {}
    fn uniform_4f(&self, _: i32, _: f32, _: f32, _: f32, _: f32) {}
    fn uniform_1iv(&self, _: i32, _: i32, _: *const i32) {}
    fn uniform_1fv(&self, _: i32, _: i32, _: *const f32) {}
    fn uniform_2fv(&self, _: i32, _: i32, _: *const f32) {}
    fn uniform_3fv(&self, _: i32, count: i32, _: *const f32) {
        self.counts.lock().unwrap().push(count);
    }
    fn uniform_4fv(&self, _: i32, _: i32, _: *const f32) {}
    fn uniform_matrix_2fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn uniform_matrix_3fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn uniform_matrix_4fv(&self, _: i32, count: i32, _: u8, _: *const f32) {
        self.counts.lock().unwrap().push(count);
    }
    fn uniform_matrix_2x3fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn uniform_matrix_3x2fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn uniform_matrix_2x4fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn uniform_matrix_4x2fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn uniform_matrix_3x4fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn uniform_matrix_4x3fv(&self, _: i32, _: i32, _: u8, _: *const f32) {}
    fn draw_arrays(&self, _: u32, _: i32, _: i32) {}
    fn draw_elements(&self, _: u32, _: i32, _: u32, _: *const c_void) {}
    fn draw_range_elements(&self, _: u32, _: u32, _: u32, _: i32, _: u32, _: *const c_void) {}
    fn draw_arrays_instanced(&self, _: u32, _: i32, _: i32, _: i32) {}
    fn draw_elements_instanced(&self, _: u32, _: i32, _: u32, _: *const c_void, _: i32) {}
    fn multi_draw_arrays(&self, _: u32, _: *const i32, _: *const i32, _: i32) {}
    fn multi_draw_elements(&self, _: u32, _: *const i32, _: u32, indices: *mut *const c_void, n: i32) {
        let offsets = (0..n as usize).map(|i| *indices.add(i) as usize);
        self.offsets.lock().unwrap().extend(offsets);
    }
    fn draw_arrays_indirect(&self, _: u32, _: *const c_void) {}
    fn draw_elements_indirect(&self, _: u32, _: u32, _: *const c_void) {}
    fn enable(&self, _: u32) {}
    fn disable(&self, _: u32) {}
    fn is_enabled(&self, _: u32) -> u8 { 1 }
    fn blend_func(&self, _: u32, _: u32) {}
    fn blend_func_separate(&self, _: u32, _: u32, _: u32, _: u32) {}
    fn blend_equation(&self, _: u32) {}
    fn blend_color(&self, _: f32, _: f32, _: f32, _: f32) {}
    fn depth_func(&self, _: u32) {}
    fn depth_mask(&self, _: u8) {}
    fn cull_face(&self, _: u32) {}
    fn front_face(&self, _: u32) {}
    fn polygon_mode(&self, _: u32, _: u32) {}
    fn polygon_offset(&self, _: f32, _: f32) {}
    fn line_width(&self, _: f32) {}
    fn color_mask(&self, _: u8, _: u8, _: u8, _: u8) {}
    fn stencil_func(&self, _: u32, _: i32, _: u32) {}
    fn stencil_op(&self, _: u32, _: u32, _: u32) {}
    fn stencil_mask(&self, _: u32) {}
    fn scissor(&self, _: i32, _: i32, _: i32, _: i32) {}
    fn viewport(&self, _: i32, _: i32, _: i32, _: i32) {}
    fn clear(&self, _: u32) {}
    fn clear_color(&self, _: f32, _: f32, _: f32, _: f32) {}
    fn clear_depth_f(&self, _: f32) {}
    fn clear_stencil(&self, _: i32) {}
    fn get_integer_v(&self, _: u32, _: *mut i32) {}
    fn get_string(&self, name: u32) -> *const u8 {
        if name == types::VERSION {
            b"4.6.0 Host\0".as_ptr()
        } else {
            ptr::null()
        }
    }
    fn get_string_i(&self, _: u32, _: u32) -> *const u8 { ptr::null() }
    fn flush(&self) {}
    fn finish(&self) {}
    fn gen_queries(&self, _: i32, _: *mut u32) {}
    fn delete_queries(&self, _: i32, _: *const u32) {}
    fn begin_query(&self, _: u32, _: u32) {}
    fn end_query(&self, _: u32) {}
    fn query_counter(&self, _: u32, _: u32) {}
    fn get_query_object_uiv(&self, _: u32, _: u32, _: *mut u32) {}
    fn get_query_object_ui64v(&self, _: u32, _: u32, _: *mut u64) {}
    fn memory_barrier(&self, _: u32) {}
    fn gen_transform_feedbacks(&self, _: i32, _: *mut u32) {}
    fn delete_transform_feedbacks(&self, _: i32, _: *const u32) {}
    fn bind_transform_feedback(&self, _: u32, _: u32) {}
    fn begin_transform_feedback(&self, _: u32) {}
    fn end_transform_feedback(&self) {}
    fn push_debug_group(&self, _: u32, _: u32, len: i32, message: *const c_char) {
        let bytes = slice::from_raw_parts(message as *const u8, len as usize);
        self.labels.lock().unwrap().push(String::from_utf8_lossy(bytes).into_owned());
    }
    fn pop_debug_group(&self) {}
    fn object_label(&self, _: u32, _: u32, _: i32, _: *const c_char) {}
    fn debug_message_insert(&self, _: u32, _: u32, _: u32, _: u32, _: i32, _: *const c_char) {}
    fn debug_message_control(&self, _: u32, _: u32, _: u32, _: i32, _: *const u32, _: u8) {}
    fn get_error(&self) -> u32 { 0 }
}

struct Context {
    table: Arc<CountingHost>,
    debug_output: bool,
}

impl Context {
    fn new(debug_output: bool) -> Self {
        Context {
            table: Arc::new(CountingHost::default()),
            debug_output,
        }
    }
}

impl HostContext for Context {
    fn extra_functions(&self) -> Arc<dyn HostFunctions> {
        self.table.clone()
    }

    fn supports_debug_output(&self) -> bool {
        self.debug_output
    }
}

#[test]
fn double_install_drops_first() {
    let _guard = serial();
    let first = Context::new(true);
    let second = Context::new(true);

    gl::install_host(&first);
    assert_eq!(Arc::strong_count(&first.table), 2);

    gl::install_host(&second);
    assert_eq!(Arc::strong_count(&first.table), 1);
    assert_eq!(Arc::strong_count(&second.table), 2);

    unsafe { gl::flush() };
    assert_eq!(first.table.calls("flush"), 0);
    assert_eq!(second.table.calls("flush"), 1);
}

#[test]
fn routes_to_host_after_headless() {
    let _guard = serial();
    let headless = gl::install_headless();
    let ctx = Context::new(false);
    gl::install_host(&ctx);
    assert_eq!(gl::active_backend(), Some(BackendKind::Host));

    unsafe { gl::viewport(0, 0, 32, 32) };
    assert_eq!(headless.calls("viewport"), 0);
    assert_eq!(ctx.table.calls("viewport"), 1);
}

#[test]
fn debug_family_without_debug_output() {
    let _guard = serial();
    let ctx = Context::new(false);
    gl::install_host(&ctx);

    unsafe {
        gl::push_debug_group(types::DEBUG_SOURCE_APPLICATION, 0, "shadow pass");
        gl::object_label(types::BUFFER, 1, "vertices");
        gl::debug_message_insert(types::DEBUG_SOURCE_APPLICATION, 0, 0, 0, "marker");
        gl::debug_message_control(0, 0, 0, &[], true);
        gl::pop_debug_group();
    }

    for name in &[
        "push_debug_group",
        "pop_debug_group",
        "object_label",
        "debug_message_insert",
        "debug_message_control",
    ] {
        assert_eq!(ctx.table.calls(name), 0);
    }

    // Other families are forwarded as they are.
    unsafe { gl::polygon_mode(0x0408, 0x1B01) };
    assert_eq!(ctx.table.calls("polygon_mode"), 1);
}

#[test]
fn debug_family_with_debug_output() {
    let _guard = serial();
    let ctx = Context::new(true);
    gl::install_host(&ctx);

    unsafe {
        gl::push_debug_group(types::DEBUG_SOURCE_APPLICATION, 0, "shadow pass");
        gl::pop_debug_group();
    }

    assert_eq!(ctx.table.calls("push_debug_group"), 1);
    assert_eq!(ctx.table.calls("pop_debug_group"), 1);
    assert_eq!(*ctx.table.labels.lock().unwrap(), vec!["shadow pass".to_owned()]);
}

#[test]
fn adapts_signatures() {
    let _guard = serial();
    let ctx = Context::new(true);
    gl::install_host(&ctx);

    unsafe {
        let shader = gl::create_shader(types::VERTEX_SHADER);
        assert_eq!(shader.raw(), 7);

        gl::shader_source(shader, &["#version 330 core\n", "void main() {}"]);
        assert_eq!(
            *ctx.table.sources.lock().unwrap(),
            vec!["#version 330 core\nvoid main() {}".to_owned()]
        );

        let mut buffers = [gl::BufferId::NONE; 3];
        gl::gen_buffers(&mut buffers);
        assert_eq!(
            buffers,
            [gl::BufferId::new(10), gl::BufferId::new(11), gl::BufferId::new(12)]
        );

        gl::multi_draw_elements(0x0004, &[3, 3, 6], 0x1403, &[0, 12]);
        assert_eq!(*ctx.table.offsets.lock().unwrap(), vec![0, 12]);

        assert!(gl::is_enabled(0x0B71));
        assert_eq!(gl::get_uniform_location(gl::ProgramId::new(1), "u_color"), None);
        assert_eq!(gl::get_string(types::VERSION), "4.6.0 Host");
        assert_eq!(gl::get_string(types::VENDOR), "");
    }
}

#[test]
fn checked_calls_query_host_errors() {
    let _guard = serial();
    let ctx = Context::new(true);
    gl::install_host(&ctx);

    unsafe {
        gl::clear(0);
        gl::get_error();
    }

    let expected = if cfg!(feature = "diagnostics") { 2 } else { 1 };
    assert_eq!(ctx.table.calls("get_error"), expected);
}

#[test]
fn previous_backend_is_gone_before_the_next_one_lands() {
    let _guard = serial();
    DROPPED.lock().unwrap().clear();

    let ctx = Context::new(true);
    gl::install_host(&ctx);
    drop(ctx);
    assert!(DROPPED.lock().unwrap().is_empty());

    let headless = gl::install_headless();
    assert_eq!(*DROPPED.lock().unwrap(), vec![None]);

    unsafe { gl::flush() };
    assert_eq!(headless.calls("flush"), 1);
}

#[test]
fn uniform_arrays_are_counted_in_elements() {
    let _guard = serial();
    let ctx = Context::new(true);
    gl::install_host(&ctx);

    unsafe {
        gl::uniform_3fv(gl::UniformLocation::new(0), &[0.0; 6]);
        gl::uniform_matrix_4fv(gl::UniformLocation::new(1), false, &[0.0; 32]);
    }

    assert_eq!(*ctx.table.counts.lock().unwrap(), vec![2, 2]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "do not split into 3-component elements")]
fn partial_uniform_elements() {
    let _guard = serial();
    let ctx = Context::new(true);
    gl::install_host(&ctx);

    unsafe { gl::uniform_3fv(gl::UniformLocation::new(0), &[0.0; 4]) };
}
