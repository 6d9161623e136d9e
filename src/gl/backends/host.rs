//! Forwards to a function table handed out by an embedding toolkit.
//!
//! A toolkit that owns the GL context (a UI framework with its own GL
//! widgets, say) resolves the entry points itself and exposes them through
//! [`HostContext`]. Its table is shaped like the C API, so [`HostBackend`]
//! converts slices, booleans and out-params on the way through.
//!
//! The debug output and object labeling calls are only forwarded if the host
//! reports support for them. Otherwise they do nothing.

use std::ffi::CString;
use std::os::raw::{c_char, c_void};
use std::ptr;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::gl::types::{self, GLbitfield, GLenum};
use crate::gl::GlFunctions;
use crate::utils::handle::*;

/// What an embedding toolkit exposes about its current GL context.
pub trait HostContext {
    /// The function table of the context. The table stays valid as long as
    /// the context does.
    fn extra_functions(&self) -> Arc<dyn HostFunctions>;

    /// Whether the context supports debug output and object labels.
    fn supports_debug_output(&self) -> bool;
}

/// The native function table of a host toolkit.
///
/// Every method maps to the GL entry point of the same name and takes its C
/// arguments: `u8` booleans, `i64` pointer-sized integers and raw pointers.
/// Note that `shader_source` and `multi_draw_elements` take their pointer
/// arrays as `*mut`.
///
/// The registry is shared by the whole process, so the table must be
/// `Send + Sync`. Calls still only reach it from the thread the context is
/// current on.
pub trait HostFunctions: Send + Sync {
    unsafe fn create_shader(&self, ty: u32) -> u32;
    unsafe fn shader_source(
        &self,
        shader: u32,
        count: i32,
        strings: *mut *const c_char,
        lengths: *const i32,
    );
    unsafe fn compile_shader(&self, shader: u32);
    unsafe fn delete_shader(&self, shader: u32);
    unsafe fn get_shader_iv(&self, shader: u32, pname: u32, params: *mut i32);
    unsafe fn get_shader_info_log(&self, shader: u32, size: i32, len: *mut i32, log: *mut c_char);

    unsafe fn create_program(&self) -> u32;
    unsafe fn attach_shader(&self, program: u32, shader: u32);
    unsafe fn detach_shader(&self, program: u32, shader: u32);
    unsafe fn link_program(&self, program: u32);
    unsafe fn validate_program(&self, program: u32);
    unsafe fn use_program(&self, program: u32);
    unsafe fn delete_program(&self, program: u32);
    unsafe fn get_program_iv(&self, program: u32, pname: u32, params: *mut i32);
    unsafe fn get_program_info_log(&self, program: u32, size: i32, len: *mut i32, log: *mut c_char);
    unsafe fn get_uniform_location(&self, program: u32, name: *const c_char) -> i32;
    unsafe fn get_attrib_location(&self, program: u32, name: *const c_char) -> i32;
    unsafe fn bind_attrib_location(&self, program: u32, index: u32, name: *const c_char);
    unsafe fn get_uniform_block_index(&self, program: u32, name: *const c_char) -> u32;
    unsafe fn uniform_block_binding(&self, program: u32, block: u32, binding: u32);

    unsafe fn gen_buffers(&self, n: i32, buffers: *mut u32);
    unsafe fn delete_buffers(&self, n: i32, buffers: *const u32);
    unsafe fn bind_buffer(&self, target: u32, buffer: u32);
    unsafe fn bind_buffer_base(&self, target: u32, index: u32, buffer: u32);
    unsafe fn bind_buffer_range(&self, target: u32, index: u32, buffer: u32, offset: i64, size: i64);
    unsafe fn buffer_data(&self, target: u32, size: i64, data: *const c_void, usage: u32);
    unsafe fn buffer_sub_data(&self, target: u32, offset: i64, size: i64, data: *const c_void);
    unsafe fn buffer_storage(&self, target: u32, size: i64, data: *const c_void, flags: u32);
    unsafe fn copy_buffer_sub_data(
        &self,
        read_target: u32,
        write_target: u32,
        read_offset: i64,
        write_offset: i64,
        size: i64,
    );
    unsafe fn map_buffer_range(&self, target: u32, offset: i64, len: i64, access: u32) -> *mut c_void;
    unsafe fn flush_mapped_buffer_range(&self, target: u32, offset: i64, len: i64);
    unsafe fn unmap_buffer(&self, target: u32) -> u8;

    unsafe fn gen_vertex_arrays(&self, n: i32, arrays: *mut u32);
    unsafe fn delete_vertex_arrays(&self, n: i32, arrays: *const u32);
    unsafe fn bind_vertex_array(&self, array: u32);
    unsafe fn enable_vertex_attrib_array(&self, index: u32);
    unsafe fn disable_vertex_attrib_array(&self, index: u32);
    unsafe fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: u8,
        stride: i32,
        pointer: *const c_void,
    );
    unsafe fn vertex_attrib_i_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        stride: i32,
        pointer: *const c_void,
    );
    unsafe fn vertex_attrib_divisor(&self, index: u32, divisor: u32);

    unsafe fn gen_textures(&self, n: i32, textures: *mut u32);
    unsafe fn delete_textures(&self, n: i32, textures: *const u32);
    unsafe fn bind_texture(&self, target: u32, texture: u32);
    unsafe fn active_texture(&self, unit: u32);
    unsafe fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: u32,
        ty: u32,
        pixels: *const c_void,
    );
    unsafe fn tex_image_3d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        depth: i32,
        border: i32,
        format: u32,
        ty: u32,
        pixels: *const c_void,
    );
    unsafe fn tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: *const c_void,
    );
    unsafe fn tex_sub_image_3d(
        &self,
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        ty: u32,
        pixels: *const c_void,
    );
    unsafe fn compressed_tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        border: i32,
        size: i32,
        data: *const c_void,
    );
    unsafe fn compressed_tex_image_3d(
        &self,
        target: u32,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        depth: i32,
        border: i32,
        size: i32,
        data: *const c_void,
    );
    unsafe fn compressed_tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        size: i32,
        data: *const c_void,
    );
    unsafe fn tex_storage_2d(
        &self,
        target: u32,
        levels: i32,
        internal_format: u32,
        width: i32,
        height: i32,
    );
    unsafe fn tex_storage_3d(
        &self,
        target: u32,
        levels: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        depth: i32,
    );
    unsafe fn tex_parameter_i(&self, target: u32, pname: u32, param: i32);
    unsafe fn tex_parameter_f(&self, target: u32, pname: u32, param: f32);
    unsafe fn generate_mipmap(&self, target: u32);
    unsafe fn get_tex_level_parameter_iv(&self, target: u32, level: i32, pname: u32, params: *mut i32);
    unsafe fn pixel_store_i(&self, pname: u32, param: i32);

    unsafe fn gen_samplers(&self, n: i32, samplers: *mut u32);
    unsafe fn delete_samplers(&self, n: i32, samplers: *const u32);
    unsafe fn bind_sampler(&self, unit: u32, sampler: u32);
    unsafe fn sampler_parameter_i(&self, sampler: u32, pname: u32, param: i32);

    unsafe fn gen_framebuffers(&self, n: i32, framebuffers: *mut u32);
    unsafe fn delete_framebuffers(&self, n: i32, framebuffers: *const u32);
    unsafe fn bind_framebuffer(&self, target: u32, framebuffer: u32);
    unsafe fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: u32,
        level: i32,
    );
    unsafe fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: u32,
    );
    unsafe fn check_framebuffer_status(&self, target: u32) -> u32;
    unsafe fn blit_framebuffer(
        &self,
        src_x0: i32,
        src_y0: i32,
        src_x1: i32,
        src_y1: i32,
        dst_x0: i32,
        dst_y0: i32,
        dst_x1: i32,
        dst_y1: i32,
        mask: u32,
        filter: u32,
    );
    unsafe fn draw_buffers(&self, n: i32, buffers: *const u32);
    unsafe fn read_buffer(&self, src: u32);
    unsafe fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: *mut c_void,
    );
    unsafe fn invalidate_framebuffer(&self, target: u32, n: i32, attachments: *const u32);

    unsafe fn gen_renderbuffers(&self, n: i32, renderbuffers: *mut u32);
    unsafe fn delete_renderbuffers(&self, n: i32, renderbuffers: *const u32);
    unsafe fn bind_renderbuffer(&self, target: u32, renderbuffer: u32);
    unsafe fn renderbuffer_storage(&self, target: u32, internal_format: u32, width: i32, height: i32);
    unsafe fn renderbuffer_storage_multisample(
        &self,
        target: u32,
        samples: i32,
        internal_format: u32,
        width: i32,
        height: i32,
    );

    unsafe fn uniform_1i(&self, location: i32, x: i32);
    unsafe fn uniform_2i(&self, location: i32, x: i32, y: i32);
    unsafe fn uniform_3i(&self, location: i32, x: i32, y: i32, z: i32);
    unsafe fn uniform_4i(&self, location: i32, x: i32, y: i32, z: i32, w: i32);
    unsafe fn uniform_1ui(&self, location: i32, x: u32);
    unsafe fn uniform_1f(&self, location: i32, x: f32);
    unsafe fn uniform_2f(&self, location: i32, x: f32, y: f32);
    unsafe fn uniform_3f(&self, location: i32, x: f32, y: f32, z: f32);
    unsafe fn uniform_4f(&self, location: i32, x: f32, y: f32, z: f32, w: f32);
    unsafe fn uniform_1iv(&self, location: i32, count: i32, values: *const i32);
    unsafe fn uniform_1fv(&self, location: i32, count: i32, values: *const f32);
    unsafe fn uniform_2fv(&self, location: i32, count: i32, values: *const f32);
    unsafe fn uniform_3fv(&self, location: i32, count: i32, values: *const f32);
    unsafe fn uniform_4fv(&self, location: i32, count: i32, values: *const f32);
    unsafe fn uniform_matrix_2fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_3fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_4fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_2x3fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_3x2fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_2x4fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_4x2fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_3x4fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);
    unsafe fn uniform_matrix_4x3fv(&self, location: i32, count: i32, transpose: u8, values: *const f32);

    unsafe fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    unsafe fn draw_elements(&self, mode: u32, count: i32, ty: u32, indices: *const c_void);
    unsafe fn draw_range_elements(
        &self,
        mode: u32,
        start: u32,
        end: u32,
        count: i32,
        ty: u32,
        indices: *const c_void,
    );
    unsafe fn draw_arrays_instanced(&self, mode: u32, first: i32, count: i32, instances: i32);
    unsafe fn draw_elements_instanced(
        &self,
        mode: u32,
        count: i32,
        ty: u32,
        indices: *const c_void,
        instances: i32,
    );
    unsafe fn multi_draw_arrays(&self, mode: u32, firsts: *const i32, counts: *const i32, n: i32);
    unsafe fn multi_draw_elements(
        &self,
        mode: u32,
        counts: *const i32,
        ty: u32,
        indices: *mut *const c_void,
        n: i32,
    );
    unsafe fn draw_arrays_indirect(&self, mode: u32, indirect: *const c_void);
    unsafe fn draw_elements_indirect(&self, mode: u32, ty: u32, indirect: *const c_void);

    unsafe fn enable(&self, cap: u32);
    unsafe fn disable(&self, cap: u32);
    unsafe fn is_enabled(&self, cap: u32) -> u8;
    unsafe fn blend_func(&self, src: u32, dst: u32);
    unsafe fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);
    unsafe fn blend_equation(&self, mode: u32);
    unsafe fn blend_color(&self, r: f32, g: f32, b: f32, a: f32);
    unsafe fn depth_func(&self, func: u32);
    unsafe fn depth_mask(&self, flag: u8);
    unsafe fn cull_face(&self, mode: u32);
    unsafe fn front_face(&self, mode: u32);
    unsafe fn polygon_mode(&self, face: u32, mode: u32);
    unsafe fn polygon_offset(&self, factor: f32, units: f32);
    unsafe fn line_width(&self, width: f32);
    unsafe fn color_mask(&self, r: u8, g: u8, b: u8, a: u8);
    unsafe fn stencil_func(&self, func: u32, reference: i32, mask: u32);
    unsafe fn stencil_op(&self, stencil_fail: u32, depth_fail: u32, depth_pass: u32);
    unsafe fn stencil_mask(&self, mask: u32);
    unsafe fn scissor(&self, x: i32, y: i32, width: i32, height: i32);
    unsafe fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    unsafe fn clear(&self, mask: u32);
    unsafe fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    unsafe fn clear_depth_f(&self, depth: f32);
    unsafe fn clear_stencil(&self, stencil: i32);
    unsafe fn get_integer_v(&self, pname: u32, values: *mut i32);
    unsafe fn get_string(&self, name: u32) -> *const u8;
    unsafe fn get_string_i(&self, name: u32, index: u32) -> *const u8;
    unsafe fn flush(&self);
    unsafe fn finish(&self);

    unsafe fn gen_queries(&self, n: i32, queries: *mut u32);
    unsafe fn delete_queries(&self, n: i32, queries: *const u32);
    unsafe fn begin_query(&self, target: u32, query: u32);
    unsafe fn end_query(&self, target: u32);
    unsafe fn query_counter(&self, query: u32, target: u32);
    unsafe fn get_query_object_uiv(&self, query: u32, pname: u32, params: *mut u32);
    unsafe fn get_query_object_ui64v(&self, query: u32, pname: u32, params: *mut u64);
    unsafe fn memory_barrier(&self, barriers: u32);

    unsafe fn gen_transform_feedbacks(&self, n: i32, feedbacks: *mut u32);
    unsafe fn delete_transform_feedbacks(&self, n: i32, feedbacks: *const u32);
    unsafe fn bind_transform_feedback(&self, target: u32, feedback: u32);
    unsafe fn begin_transform_feedback(&self, primitive_mode: u32);
    unsafe fn end_transform_feedback(&self);

    unsafe fn push_debug_group(&self, source: u32, id: u32, len: i32, message: *const c_char);
    unsafe fn pop_debug_group(&self);
    unsafe fn object_label(&self, identifier: u32, name: u32, len: i32, label: *const c_char);
    unsafe fn debug_message_insert(
        &self,
        source: u32,
        ty: u32,
        id: u32,
        severity: u32,
        len: i32,
        message: *const c_char,
    );
    unsafe fn debug_message_control(
        &self,
        source: u32,
        ty: u32,
        severity: u32,
        count: i32,
        ids: *const u32,
        enabled: u8,
    );

    unsafe fn get_error(&self) -> u32;
}

/// The host-toolkit backend.
///
/// Keeps the table it was built from alive, but not the context behind it.
/// It must not be used once the context is gone.
pub struct HostBackend {
    functions: Arc<dyn HostFunctions>,
    debug_output: bool,
}

impl HostBackend {
    pub fn new<C: HostContext + ?Sized>(ctx: &C) -> Self {
        let debug_output = ctx.supports_debug_output();
        if !debug_output {
            info!("Host context lacks debug output, debug groups and labels are ignored.");
        }

        HostBackend {
            functions: ctx.extra_functions(),
            debug_output,
        }
    }

    #[inline]
    pub fn supports_debug_output(&self) -> bool {
        self.debug_output
    }
}

#[inline]
fn boolean(v: bool) -> u8 {
    if v {
        types::TRUE
    } else {
        types::FALSE
    }
}

#[inline]
fn len<T>(v: &[T]) -> i32 {
    v.len() as i32
}

/// Number of `n`-component elements in `values`.
#[inline]
fn elements(values: &[f32], n: usize) -> i32 {
    debug_assert_eq!(
        values.len() % n,
        0,
        "[GL] {} values do not split into {}-component elements.",
        values.len(),
        n
    );
    (values.len() / n) as i32
}

#[inline]
fn ptr_of<T>(v: &[T]) -> *const c_void {
    v.as_ptr() as *const c_void
}

#[inline]
fn bytes(data: Option<&[u8]>) -> *const c_void {
    data.map(ptr_of).unwrap_or_else(ptr::null)
}

fn c_name(name: &str) -> Option<CString> {
    match CString::new(name) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("[GL] Name {:?} contains a NUL byte.", name);
            None
        }
    }
}

unsafe fn c_string(v: *const u8) -> String {
    if v.is_null() {
        String::new()
    } else {
        ::std::ffi::CStr::from_ptr(v as *const c_char)
            .to_string_lossy()
            .into_owned()
    }
}

impl GlFunctions for HostBackend {
    unsafe fn create_shader(&self, ty: GLenum) -> ShaderId {
        ShaderId::new(self.functions.create_shader(ty))
    }

    unsafe fn shader_source(&self, shader: ShaderId, sources: &[&str]) {
        let mut strings: SmallVec<[*const c_char; 4]> = sources
            .iter()
            .map(|v| v.as_ptr() as *const c_char)
            .collect();
        let lengths: SmallVec<[i32; 4]> = sources.iter().map(|v| v.len() as i32).collect();

        self.functions.shader_source(
            shader.raw(),
            len(sources),
            strings.as_mut_ptr(),
            lengths.as_ptr(),
        );
    }

    unsafe fn compile_shader(&self, shader: ShaderId) {
        self.functions.compile_shader(shader.raw());
    }

    unsafe fn delete_shader(&self, shader: ShaderId) {
        self.functions.delete_shader(shader.raw());
    }

    unsafe fn get_shader_iv(&self, shader: ShaderId, pname: GLenum) -> i32 {
        let mut v = 0;
        self.functions.get_shader_iv(shader.raw(), pname, &mut v);
        v
    }

    unsafe fn get_shader_info_log(&self, shader: ShaderId, buf: &mut [u8]) -> usize {
        let mut n = 0;
        self.functions.get_shader_info_log(
            shader.raw(),
            len(buf),
            &mut n,
            buf.as_mut_ptr() as *mut c_char,
        );
        n.max(0) as usize
    }

    unsafe fn create_program(&self) -> ProgramId {
        ProgramId::new(self.functions.create_program())
    }

    unsafe fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.functions.attach_shader(program.raw(), shader.raw());
    }

    unsafe fn detach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.functions.detach_shader(program.raw(), shader.raw());
    }

    unsafe fn link_program(&self, program: ProgramId) {
        self.functions.link_program(program.raw());
    }

    unsafe fn validate_program(&self, program: ProgramId) {
        self.functions.validate_program(program.raw());
    }

    unsafe fn use_program(&self, program: ProgramId) {
        self.functions.use_program(program.raw());
    }

    unsafe fn delete_program(&self, program: ProgramId) {
        self.functions.delete_program(program.raw());
    }

    unsafe fn get_program_iv(&self, program: ProgramId, pname: GLenum) -> i32 {
        let mut v = 0;
        self.functions.get_program_iv(program.raw(), pname, &mut v);
        v
    }

    unsafe fn get_program_info_log(&self, program: ProgramId, buf: &mut [u8]) -> usize {
        let mut n = 0;
        self.functions.get_program_info_log(
            program.raw(),
            len(buf),
            &mut n,
            buf.as_mut_ptr() as *mut c_char,
        );
        n.max(0) as usize
    }

    unsafe fn get_uniform_location(
        &self,
        program: ProgramId,
        name: &str,
    ) -> Option<UniformLocation> {
        let name = c_name(name)?;
        match self.functions.get_uniform_location(program.raw(), name.as_ptr()) {
            -1 => None,
            v => Some(UniformLocation::new(v)),
        }
    }

    unsafe fn get_attrib_location(&self, program: ProgramId, name: &str) -> Option<u32> {
        let name = c_name(name)?;
        match self.functions.get_attrib_location(program.raw(), name.as_ptr()) {
            v if v < 0 => None,
            v => Some(v as u32),
        }
    }

    unsafe fn bind_attrib_location(&self, program: ProgramId, index: u32, name: &str) {
        if let Some(name) = c_name(name) {
            self.functions
                .bind_attrib_location(program.raw(), index, name.as_ptr());
        }
    }

    unsafe fn get_uniform_block_index(&self, program: ProgramId, name: &str) -> Option<u32> {
        let name = c_name(name)?;
        match self.functions.get_uniform_block_index(program.raw(), name.as_ptr()) {
            types::INVALID_INDEX => None,
            v => Some(v),
        }
    }

    unsafe fn uniform_block_binding(&self, program: ProgramId, block: u32, binding: u32) {
        self.functions
            .uniform_block_binding(program.raw(), block, binding);
    }

    unsafe fn gen_buffers(&self, buffers: &mut [BufferId]) {
        let ids = as_raw_mut(buffers);
        self.functions.gen_buffers(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_buffers(&self, buffers: &[BufferId]) {
        let ids = as_raw(buffers);
        self.functions.delete_buffers(len(ids), ids.as_ptr());
    }

    unsafe fn bind_buffer(&self, target: GLenum, buffer: BufferId) {
        self.functions.bind_buffer(target, buffer.raw());
    }

    unsafe fn bind_buffer_base(&self, target: GLenum, index: u32, buffer: BufferId) {
        self.functions.bind_buffer_base(target, index, buffer.raw());
    }

    unsafe fn bind_buffer_range(
        &self,
        target: GLenum,
        index: u32,
        buffer: BufferId,
        offset: isize,
        size: isize,
    ) {
        self.functions
            .bind_buffer_range(target, index, buffer.raw(), offset as i64, size as i64);
    }

    unsafe fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) {
        self.functions
            .buffer_data(target, data.len() as i64, ptr_of(data), usage);
    }

    unsafe fn buffer_data_size(&self, target: GLenum, size: isize, usage: GLenum) {
        self.functions
            .buffer_data(target, size as i64, ptr::null(), usage);
    }

    unsafe fn buffer_sub_data(&self, target: GLenum, offset: isize, data: &[u8]) {
        self.functions
            .buffer_sub_data(target, offset as i64, data.len() as i64, ptr_of(data));
    }

    unsafe fn buffer_storage(
        &self,
        target: GLenum,
        size: isize,
        data: Option<&[u8]>,
        flags: GLbitfield,
    ) {
        self.functions
            .buffer_storage(target, size as i64, bytes(data), flags);
    }

    unsafe fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: isize,
        write_offset: isize,
        size: isize,
    ) {
        self.functions.copy_buffer_sub_data(
            read_target,
            write_target,
            read_offset as i64,
            write_offset as i64,
            size as i64,
        );
    }

    unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: isize,
        length: isize,
        access: GLbitfield,
    ) -> *mut c_void {
        self.functions
            .map_buffer_range(target, offset as i64, length as i64, access)
    }

    unsafe fn flush_mapped_buffer_range(&self, target: GLenum, offset: isize, length: isize) {
        self.functions
            .flush_mapped_buffer_range(target, offset as i64, length as i64);
    }

    unsafe fn unmap_buffer(&self, target: GLenum) -> bool {
        self.functions.unmap_buffer(target) != types::FALSE
    }

    unsafe fn gen_vertex_arrays(&self, arrays: &mut [VertexArrayId]) {
        let ids = as_raw_mut(arrays);
        self.functions.gen_vertex_arrays(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_vertex_arrays(&self, arrays: &[VertexArrayId]) {
        let ids = as_raw(arrays);
        self.functions.delete_vertex_arrays(len(ids), ids.as_ptr());
    }

    unsafe fn bind_vertex_array(&self, array: VertexArrayId) {
        self.functions.bind_vertex_array(array.raw());
    }

    unsafe fn enable_vertex_attrib_array(&self, index: u32) {
        self.functions.enable_vertex_attrib_array(index);
    }

    unsafe fn disable_vertex_attrib_array(&self, index: u32) {
        self.functions.disable_vertex_attrib_array(index);
    }

    unsafe fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: GLenum,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        self.functions.vertex_attrib_pointer(
            index,
            size,
            ty,
            boolean(normalized),
            stride,
            offset as *const c_void,
        );
    }

    unsafe fn vertex_attrib_i_pointer(
        &self,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: usize,
    ) {
        self.functions
            .vertex_attrib_i_pointer(index, size, ty, stride, offset as *const c_void);
    }

    unsafe fn vertex_attrib_divisor(&self, index: u32, divisor: u32) {
        self.functions.vertex_attrib_divisor(index, divisor);
    }

    unsafe fn gen_textures(&self, textures: &mut [TextureId]) {
        let ids = as_raw_mut(textures);
        self.functions.gen_textures(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_textures(&self, textures: &[TextureId]) {
        let ids = as_raw(textures);
        self.functions.delete_textures(len(ids), ids.as_ptr());
    }

    unsafe fn bind_texture(&self, target: GLenum, texture: TextureId) {
        self.functions.bind_texture(target, texture.raw());
    }

    unsafe fn active_texture(&self, unit: GLenum) {
        self.functions.active_texture(unit);
    }

    unsafe fn tex_image_2d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: GLenum,
        ty: GLenum,
        pixels: Option<&[u8]>,
    ) {
        self.functions.tex_image_2d(
            target,
            level,
            internal_format,
            width,
            height,
            border,
            format,
            ty,
            bytes(pixels),
        );
    }

    unsafe fn tex_image_3d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        depth: i32,
        border: i32,
        format: GLenum,
        ty: GLenum,
        pixels: Option<&[u8]>,
    ) {
        self.functions.tex_image_3d(
            target,
            level,
            internal_format,
            width,
            height,
            depth,
            border,
            format,
            ty,
            bytes(pixels),
        );
    }

    unsafe fn tex_sub_image_2d(
        &self,
        target: GLenum,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GLenum,
        ty: GLenum,
        pixels: &[u8],
    ) {
        self.functions.tex_sub_image_2d(
            target,
            level,
            x,
            y,
            width,
            height,
            format,
            ty,
            ptr_of(pixels),
        );
    }

    unsafe fn tex_sub_image_3d(
        &self,
        target: GLenum,
        level: i32,
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: GLenum,
        ty: GLenum,
        pixels: &[u8],
    ) {
        self.functions.tex_sub_image_3d(
            target,
            level,
            x,
            y,
            z,
            width,
            height,
            depth,
            format,
            ty,
            ptr_of(pixels),
        );
    }

    unsafe fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
        border: i32,
        data: &[u8],
    ) {
        self.functions.compressed_tex_image_2d(
            target,
            level,
            internal_format,
            width,
            height,
            border,
            len(data),
            ptr_of(data),
        );
    }

    unsafe fn compressed_tex_image_3d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
        depth: i32,
        border: i32,
        data: &[u8],
    ) {
        self.functions.compressed_tex_image_3d(
            target,
            level,
            internal_format,
            width,
            height,
            depth,
            border,
            len(data),
            ptr_of(data),
        );
    }

    unsafe fn compressed_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GLenum,
        data: &[u8],
    ) {
        self.functions.compressed_tex_sub_image_2d(
            target,
            level,
            x,
            y,
            width,
            height,
            format,
            len(data),
            ptr_of(data),
        );
    }

    unsafe fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
    ) {
        self.functions
            .tex_storage_2d(target, levels, internal_format, width, height);
    }

    unsafe fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
        depth: i32,
    ) {
        self.functions
            .tex_storage_3d(target, levels, internal_format, width, height, depth);
    }

    unsafe fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: i32) {
        self.functions.tex_parameter_i(target, pname, param);
    }

    unsafe fn tex_parameter_f(&self, target: GLenum, pname: GLenum, param: f32) {
        self.functions.tex_parameter_f(target, pname, param);
    }

    unsafe fn generate_mipmap(&self, target: GLenum) {
        self.functions.generate_mipmap(target);
    }

    unsafe fn get_tex_level_parameter_iv(&self, target: GLenum, level: i32, pname: GLenum) -> i32 {
        let mut v = 0;
        self.functions
            .get_tex_level_parameter_iv(target, level, pname, &mut v);
        v
    }

    unsafe fn pixel_store_i(&self, pname: GLenum, param: i32) {
        self.functions.pixel_store_i(pname, param);
    }

    unsafe fn gen_samplers(&self, samplers: &mut [SamplerId]) {
        let ids = as_raw_mut(samplers);
        self.functions.gen_samplers(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_samplers(&self, samplers: &[SamplerId]) {
        let ids = as_raw(samplers);
        self.functions.delete_samplers(len(ids), ids.as_ptr());
    }

    unsafe fn bind_sampler(&self, unit: u32, sampler: SamplerId) {
        self.functions.bind_sampler(unit, sampler.raw());
    }

    unsafe fn sampler_parameter_i(&self, sampler: SamplerId, pname: GLenum, param: i32) {
        self.functions
            .sampler_parameter_i(sampler.raw(), pname, param);
    }

    unsafe fn gen_framebuffers(&self, framebuffers: &mut [FramebufferId]) {
        let ids = as_raw_mut(framebuffers);
        self.functions.gen_framebuffers(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_framebuffers(&self, framebuffers: &[FramebufferId]) {
        let ids = as_raw(framebuffers);
        self.functions.delete_framebuffers(len(ids), ids.as_ptr());
    }

    unsafe fn bind_framebuffer(&self, target: GLenum, framebuffer: FramebufferId) {
        self.functions.bind_framebuffer(target, framebuffer.raw());
    }

    unsafe fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture_target: GLenum,
        texture: TextureId,
        level: i32,
    ) {
        self.functions.framebuffer_texture_2d(
            target,
            attachment,
            texture_target,
            texture.raw(),
            level,
        );
    }

    unsafe fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: RenderbufferId,
    ) {
        self.functions.framebuffer_renderbuffer(
            target,
            attachment,
            renderbuffer_target,
            renderbuffer.raw(),
        );
    }

    unsafe fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        self.functions.check_framebuffer_status(target)
    }

    unsafe fn blit_framebuffer(
        &self,
        src_x0: i32,
        src_y0: i32,
        src_x1: i32,
        src_y1: i32,
        dst_x0: i32,
        dst_y0: i32,
        dst_x1: i32,
        dst_y1: i32,
        mask: GLbitfield,
        filter: GLenum,
    ) {
        self.functions.blit_framebuffer(
            src_x0, src_y0, src_x1, src_y1, dst_x0, dst_y0, dst_x1, dst_y1, mask, filter,
        );
    }

    unsafe fn draw_buffers(&self, buffers: &[GLenum]) {
        self.functions.draw_buffers(len(buffers), buffers.as_ptr());
    }

    unsafe fn read_buffer(&self, src: GLenum) {
        self.functions.read_buffer(src);
    }

    unsafe fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GLenum,
        ty: GLenum,
        pixels: &mut [u8],
    ) {
        self.functions.read_pixels(
            x,
            y,
            width,
            height,
            format,
            ty,
            pixels.as_mut_ptr() as *mut c_void,
        );
    }

    unsafe fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) {
        self.functions
            .invalidate_framebuffer(target, len(attachments), attachments.as_ptr());
    }

    unsafe fn gen_renderbuffers(&self, renderbuffers: &mut [RenderbufferId]) {
        let ids = as_raw_mut(renderbuffers);
        self.functions.gen_renderbuffers(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_renderbuffers(&self, renderbuffers: &[RenderbufferId]) {
        let ids = as_raw(renderbuffers);
        self.functions.delete_renderbuffers(len(ids), ids.as_ptr());
    }

    unsafe fn bind_renderbuffer(&self, target: GLenum, renderbuffer: RenderbufferId) {
        self.functions.bind_renderbuffer(target, renderbuffer.raw());
    }

    unsafe fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: i32,
        height: i32,
    ) {
        self.functions
            .renderbuffer_storage(target, internal_format, width, height);
    }

    unsafe fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
    ) {
        self.functions.renderbuffer_storage_multisample(
            target,
            samples,
            internal_format,
            width,
            height,
        );
    }

    unsafe fn uniform_1i(&self, location: UniformLocation, x: i32) {
        self.functions.uniform_1i(location.raw(), x);
    }

    unsafe fn uniform_2i(&self, location: UniformLocation, x: i32, y: i32) {
        self.functions.uniform_2i(location.raw(), x, y);
    }

    unsafe fn uniform_3i(&self, location: UniformLocation, x: i32, y: i32, z: i32) {
        self.functions.uniform_3i(location.raw(), x, y, z);
    }

    unsafe fn uniform_4i(&self, location: UniformLocation, x: i32, y: i32, z: i32, w: i32) {
        self.functions.uniform_4i(location.raw(), x, y, z, w);
    }

    unsafe fn uniform_1ui(&self, location: UniformLocation, x: u32) {
        self.functions.uniform_1ui(location.raw(), x);
    }

    unsafe fn uniform_1f(&self, location: UniformLocation, x: f32) {
        self.functions.uniform_1f(location.raw(), x);
    }

    unsafe fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) {
        self.functions.uniform_2f(location.raw(), x, y);
    }

    unsafe fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) {
        self.functions.uniform_3f(location.raw(), x, y, z);
    }

    unsafe fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) {
        self.functions.uniform_4f(location.raw(), x, y, z, w);
    }

    unsafe fn uniform_1iv(&self, location: UniformLocation, values: &[i32]) {
        self.functions
            .uniform_1iv(location.raw(), len(values), values.as_ptr());
    }

    unsafe fn uniform_1fv(&self, location: UniformLocation, values: &[f32]) {
        self.functions
            .uniform_1fv(location.raw(), elements(values, 1), values.as_ptr());
    }

    unsafe fn uniform_2fv(&self, location: UniformLocation, values: &[f32]) {
        self.functions
            .uniform_2fv(location.raw(), elements(values, 2), values.as_ptr());
    }

    unsafe fn uniform_3fv(&self, location: UniformLocation, values: &[f32]) {
        self.functions
            .uniform_3fv(location.raw(), elements(values, 3), values.as_ptr());
    }

    unsafe fn uniform_4fv(&self, location: UniformLocation, values: &[f32]) {
        self.functions
            .uniform_4fv(location.raw(), elements(values, 4), values.as_ptr());
    }

    unsafe fn uniform_matrix_2fv(&self, location: UniformLocation, transpose: bool, values: &[f32]) {
        self.functions.uniform_matrix_2fv(
            location.raw(),
            elements(values, 4),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_3fv(&self, location: UniformLocation, transpose: bool, values: &[f32]) {
        self.functions.uniform_matrix_3fv(
            location.raw(),
            elements(values, 9),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_4fv(&self, location: UniformLocation, transpose: bool, values: &[f32]) {
        self.functions.uniform_matrix_4fv(
            location.raw(),
            elements(values, 16),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_2x3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        self.functions.uniform_matrix_2x3fv(
            location.raw(),
            elements(values, 6),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_3x2fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        self.functions.uniform_matrix_3x2fv(
            location.raw(),
            elements(values, 6),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_2x4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        self.functions.uniform_matrix_2x4fv(
            location.raw(),
            elements(values, 8),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_4x2fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        self.functions.uniform_matrix_4x2fv(
            location.raw(),
            elements(values, 8),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_3x4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        self.functions.uniform_matrix_3x4fv(
            location.raw(),
            elements(values, 12),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn uniform_matrix_4x3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        self.functions.uniform_matrix_4x3fv(
            location.raw(),
            elements(values, 12),
            boolean(transpose),
            values.as_ptr(),
        );
    }

    unsafe fn draw_arrays(&self, mode: GLenum, first: i32, count: i32) {
        self.functions.draw_arrays(mode, first, count);
    }

    unsafe fn draw_elements(&self, mode: GLenum, count: i32, ty: GLenum, offset: usize) {
        self.functions
            .draw_elements(mode, count, ty, offset as *const c_void);
    }

    unsafe fn draw_range_elements(
        &self,
        mode: GLenum,
        start: u32,
        end: u32,
        count: i32,
        ty: GLenum,
        offset: usize,
    ) {
        self.functions
            .draw_range_elements(mode, start, end, count, ty, offset as *const c_void);
    }

    unsafe fn draw_arrays_instanced(&self, mode: GLenum, first: i32, count: i32, instances: i32) {
        self.functions
            .draw_arrays_instanced(mode, first, count, instances);
    }

    unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: i32,
        ty: GLenum,
        offset: usize,
        instances: i32,
    ) {
        self.functions.draw_elements_instanced(
            mode,
            count,
            ty,
            offset as *const c_void,
            instances,
        );
    }

    unsafe fn multi_draw_arrays(&self, mode: GLenum, firsts: &[i32], counts: &[i32]) {
        let n = firsts.len().min(counts.len());
        self.functions
            .multi_draw_arrays(mode, firsts.as_ptr(), counts.as_ptr(), n as i32);
    }

    unsafe fn multi_draw_elements(&self, mode: GLenum, counts: &[i32], ty: GLenum, offsets: &[usize]) {
        let n = counts.len().min(offsets.len());
        let mut indices: SmallVec<[*const c_void; 8]> = offsets[..n]
            .iter()
            .map(|&v| v as *const c_void)
            .collect();

        self.functions.multi_draw_elements(
            mode,
            counts.as_ptr(),
            ty,
            indices.as_mut_ptr(),
            n as i32,
        );
    }

    unsafe fn draw_arrays_indirect(&self, mode: GLenum, offset: usize) {
        self.functions
            .draw_arrays_indirect(mode, offset as *const c_void);
    }

    unsafe fn draw_elements_indirect(&self, mode: GLenum, ty: GLenum, offset: usize) {
        self.functions
            .draw_elements_indirect(mode, ty, offset as *const c_void);
    }

    unsafe fn enable(&self, cap: GLenum) {
        self.functions.enable(cap);
    }

    unsafe fn disable(&self, cap: GLenum) {
        self.functions.disable(cap);
    }

    unsafe fn is_enabled(&self, cap: GLenum) -> bool {
        self.functions.is_enabled(cap) != types::FALSE
    }

    unsafe fn blend_func(&self, src: GLenum, dst: GLenum) {
        self.functions.blend_func(src, dst);
    }

    unsafe fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        self.functions
            .blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha);
    }

    unsafe fn blend_equation(&self, mode: GLenum) {
        self.functions.blend_equation(mode);
    }

    unsafe fn blend_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.functions.blend_color(r, g, b, a);
    }

    unsafe fn depth_func(&self, func: GLenum) {
        self.functions.depth_func(func);
    }

    unsafe fn depth_mask(&self, flag: bool) {
        self.functions.depth_mask(boolean(flag));
    }

    unsafe fn cull_face(&self, mode: GLenum) {
        self.functions.cull_face(mode);
    }

    unsafe fn front_face(&self, mode: GLenum) {
        self.functions.front_face(mode);
    }

    unsafe fn polygon_mode(&self, face: GLenum, mode: GLenum) {
        self.functions.polygon_mode(face, mode);
    }

    unsafe fn polygon_offset(&self, factor: f32, units: f32) {
        self.functions.polygon_offset(factor, units);
    }

    unsafe fn line_width(&self, width: f32) {
        self.functions.line_width(width);
    }

    unsafe fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) {
        self.functions
            .color_mask(boolean(r), boolean(g), boolean(b), boolean(a));
    }

    unsafe fn stencil_func(&self, func: GLenum, reference: i32, mask: u32) {
        self.functions.stencil_func(func, reference, mask);
    }

    unsafe fn stencil_op(&self, stencil_fail: GLenum, depth_fail: GLenum, depth_pass: GLenum) {
        self.functions
            .stencil_op(stencil_fail, depth_fail, depth_pass);
    }

    unsafe fn stencil_mask(&self, mask: u32) {
        self.functions.stencil_mask(mask);
    }

    unsafe fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        self.functions.scissor(x, y, width, height);
    }

    unsafe fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.functions.viewport(x, y, width, height);
    }

    unsafe fn clear(&self, mask: GLbitfield) {
        self.functions.clear(mask);
    }

    unsafe fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.functions.clear_color(r, g, b, a);
    }

    unsafe fn clear_depth(&self, depth: f32) {
        self.functions.clear_depth_f(depth);
    }

    unsafe fn clear_stencil(&self, stencil: i32) {
        self.functions.clear_stencil(stencil);
    }

    unsafe fn get_integer_v(&self, pname: GLenum, values: &mut [i32]) {
        if !values.is_empty() {
            self.functions.get_integer_v(pname, values.as_mut_ptr());
        }
    }

    unsafe fn get_string(&self, name: GLenum) -> String {
        c_string(self.functions.get_string(name))
    }

    unsafe fn get_string_i(&self, name: GLenum, index: u32) -> String {
        c_string(self.functions.get_string_i(name, index))
    }

    unsafe fn flush(&self) {
        self.functions.flush();
    }

    unsafe fn finish(&self) {
        self.functions.finish();
    }

    unsafe fn gen_queries(&self, queries: &mut [QueryId]) {
        let ids = as_raw_mut(queries);
        self.functions.gen_queries(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_queries(&self, queries: &[QueryId]) {
        let ids = as_raw(queries);
        self.functions.delete_queries(len(ids), ids.as_ptr());
    }

    unsafe fn begin_query(&self, target: GLenum, query: QueryId) {
        self.functions.begin_query(target, query.raw());
    }

    unsafe fn end_query(&self, target: GLenum) {
        self.functions.end_query(target);
    }

    unsafe fn query_counter(&self, query: QueryId, target: GLenum) {
        self.functions.query_counter(query.raw(), target);
    }

    unsafe fn get_query_object_u32(&self, query: QueryId, pname: GLenum) -> u32 {
        let mut v = 0;
        self.functions
            .get_query_object_uiv(query.raw(), pname, &mut v);
        v
    }

    unsafe fn get_query_object_u64(&self, query: QueryId, pname: GLenum) -> u64 {
        let mut v = 0;
        self.functions
            .get_query_object_ui64v(query.raw(), pname, &mut v);
        v
    }

    unsafe fn memory_barrier(&self, barriers: GLbitfield) {
        self.functions.memory_barrier(barriers);
    }

    unsafe fn gen_transform_feedbacks(&self, feedbacks: &mut [TransformFeedbackId]) {
        let ids = as_raw_mut(feedbacks);
        self.functions
            .gen_transform_feedbacks(len(ids), ids.as_mut_ptr());
    }

    unsafe fn delete_transform_feedbacks(&self, feedbacks: &[TransformFeedbackId]) {
        let ids = as_raw(feedbacks);
        self.functions
            .delete_transform_feedbacks(len(ids), ids.as_ptr());
    }

    unsafe fn bind_transform_feedback(&self, target: GLenum, feedback: TransformFeedbackId) {
        self.functions
            .bind_transform_feedback(target, feedback.raw());
    }

    unsafe fn begin_transform_feedback(&self, primitive_mode: GLenum) {
        self.functions.begin_transform_feedback(primitive_mode);
    }

    unsafe fn end_transform_feedback(&self) {
        self.functions.end_transform_feedback();
    }

    unsafe fn push_debug_group(&self, source: GLenum, id: u32, message: &str) {
        if self.debug_output {
            self.functions.push_debug_group(
                source,
                id,
                len(message.as_bytes()),
                message.as_ptr() as *const c_char,
            );
        }
    }

    unsafe fn pop_debug_group(&self) {
        if self.debug_output {
            self.functions.pop_debug_group();
        }
    }

    unsafe fn object_label(&self, identifier: GLenum, name: u32, label: &str) {
        if self.debug_output {
            self.functions.object_label(
                identifier,
                name,
                len(label.as_bytes()),
                label.as_ptr() as *const c_char,
            );
        }
    }

    unsafe fn debug_message_insert(
        &self,
        source: GLenum,
        ty: GLenum,
        id: u32,
        severity: GLenum,
        message: &str,
    ) {
        if self.debug_output {
            self.functions.debug_message_insert(
                source,
                ty,
                id,
                severity,
                len(message.as_bytes()),
                message.as_ptr() as *const c_char,
            );
        }
    }

    unsafe fn debug_message_control(
        &self,
        source: GLenum,
        ty: GLenum,
        severity: GLenum,
        ids: &[u32],
        enabled: bool,
    ) {
        if self.debug_output {
            self.functions.debug_message_control(
                source,
                ty,
                severity,
                len(ids),
                ids.as_ptr(),
                boolean(enabled),
            );
        }
    }

    unsafe fn get_error(&self) -> GLenum {
        self.functions.get_error()
    }
}
