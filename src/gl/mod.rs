//! The OpenGL dispatch layer.
//!
//! Every graphics call made by the toolkit goes through [`GlFunctions`]. The
//! implementation behind it is installed once for the whole process, either
//! the driver-loaded table ([`install_direct`]) or a table handed out by an
//! embedding toolkit ([`install_host`]). The free functions of this module
//! forward to whatever is installed:
//!
//! ```ignore
//! nether::gl::install_direct()?;
//!
//! unsafe {
//!     let shader = nether::gl::create_shader(nether::gl::types::VERTEX_SHADER);
//!     nether::gl::shader_source(shader, &[source]);
//!     nether::gl::compile_shader(shader);
//! }
//! ```
//!
//! With the `diagnostics` feature enabled every forwarded call is followed by
//! a `glGetError` check, see [`diagnostics`].

pub mod backends;
pub mod capabilities;
pub mod diagnostics;
pub mod dispatcher;
pub mod registry;
pub mod types;

pub use self::capabilities::{capabilities, Capabilities, Extensions, Version};
pub use self::diagnostics::{Active, Bare, Checked, Diagnostic, ErrorCode, Instrumentation};
pub use self::dispatcher::*;
pub use self::registry::{active_backend, install, install_dispatcher, install_headless, uninstall};

#[cfg(feature = "direct")]
pub use self::registry::install_direct;

#[cfg(feature = "host")]
pub use self::registry::install_host;

pub use crate::utils::handle::{
    BufferId, FramebufferId, ProgramId, QueryId, RenderbufferId, SamplerId, ShaderId, TextureId,
    TransformFeedbackId, UniformLocation, VertexArrayId,
};

use std::os::raw::c_void;

use self::types::{GLbitfield, GLenum};

/// The complete set of graphics operations the toolkit issues.
///
/// Implementors forward every method unchanged to one native function table;
/// this trait defines dispatch, not behaviour. Arguments are plain numbers,
/// typed object names and slices standing in for pointer + length pairs. No
/// method keeps any argument beyond the call.
///
/// All methods are `unsafe`: the caller guarantees that the context owning
/// the table is current on the calling thread, and that byte offsets into
/// bound buffers stay inside them. Implementors are `Send + Sync` so the
/// registry can hand them to whichever thread issues calls.
pub trait GlFunctions: Send + Sync {
    unsafe fn create_shader(&self, ty: GLenum) -> ShaderId;

    /// Replaces the source of `shader` with the concatenation of `sources`.
    unsafe fn shader_source(&self, shader: ShaderId, sources: &[&str]);

    unsafe fn compile_shader(&self, shader: ShaderId);

    unsafe fn delete_shader(&self, shader: ShaderId);

    unsafe fn get_shader_iv(&self, shader: ShaderId, pname: GLenum) -> i32;

    /// Copies the info log into `buf` and returns the number of bytes written,
    /// not counting the terminating NUL.
    unsafe fn get_shader_info_log(&self, shader: ShaderId, buf: &mut [u8]) -> usize;

    unsafe fn create_program(&self) -> ProgramId;

    unsafe fn attach_shader(&self, program: ProgramId, shader: ShaderId);

    unsafe fn detach_shader(&self, program: ProgramId, shader: ShaderId);

    unsafe fn link_program(&self, program: ProgramId);

    unsafe fn validate_program(&self, program: ProgramId);

    unsafe fn use_program(&self, program: ProgramId);

    unsafe fn delete_program(&self, program: ProgramId);

    unsafe fn get_program_iv(&self, program: ProgramId, pname: GLenum) -> i32;

    unsafe fn get_program_info_log(&self, program: ProgramId, buf: &mut [u8]) -> usize;

    /// Returns `None` if `name` is not an active uniform of `program`.
    unsafe fn get_uniform_location(&self, program: ProgramId, name: &str)
        -> Option<UniformLocation>;

    /// Returns `None` if `name` is not an active attribute of `program`.
    unsafe fn get_attrib_location(&self, program: ProgramId, name: &str) -> Option<u32>;

    unsafe fn bind_attrib_location(&self, program: ProgramId, index: u32, name: &str);

    unsafe fn get_uniform_block_index(&self, program: ProgramId, name: &str) -> Option<u32>;

    unsafe fn uniform_block_binding(&self, program: ProgramId, block: u32, binding: u32);

    unsafe fn gen_buffers(&self, buffers: &mut [BufferId]);

    unsafe fn delete_buffers(&self, buffers: &[BufferId]);

    unsafe fn bind_buffer(&self, target: GLenum, buffer: BufferId);

    unsafe fn bind_buffer_base(&self, target: GLenum, index: u32, buffer: BufferId);

    unsafe fn bind_buffer_range(
        &self,
        target: GLenum,
        index: u32,
        buffer: BufferId,
        offset: isize,
        size: isize,
    );

    /// Allocates the store of the buffer bound to `target` and fills it with
    /// `data`.
    unsafe fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum);

    /// Allocates `size` bytes of uninitialized store.
    unsafe fn buffer_data_size(&self, target: GLenum, size: isize, usage: GLenum);

    unsafe fn buffer_sub_data(&self, target: GLenum, offset: isize, data: &[u8]);

    /// Allocates an immutable store. `data`, if present, must be `size` bytes.
    unsafe fn buffer_storage(
        &self,
        target: GLenum,
        size: isize,
        data: Option<&[u8]>,
        flags: GLbitfield,
    );

    unsafe fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: isize,
        write_offset: isize,
        size: isize,
    );

    /// Maps a range of the bound buffer into client memory. The pointer is
    /// valid until `unmap_buffer` on the same target, null on failure.
    unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: isize,
        length: isize,
        access: GLbitfield,
    ) -> *mut c_void;

    unsafe fn flush_mapped_buffer_range(&self, target: GLenum, offset: isize, length: isize);

    /// Returns `false` if the store was corrupted while mapped.
    unsafe fn unmap_buffer(&self, target: GLenum) -> bool;

    unsafe fn gen_vertex_arrays(&self, arrays: &mut [VertexArrayId]);

    unsafe fn delete_vertex_arrays(&self, arrays: &[VertexArrayId]);

    unsafe fn bind_vertex_array(&self, array: VertexArrayId);

    unsafe fn enable_vertex_attrib_array(&self, index: u32);

    unsafe fn disable_vertex_attrib_array(&self, index: u32);

    /// `offset` is a byte offset into the buffer bound to `ARRAY_BUFFER`.
    unsafe fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: GLenum,
        normalized: bool,
        stride: i32,
        offset: usize,
    );

    unsafe fn vertex_attrib_i_pointer(
        &self,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: usize,
    );

    unsafe fn vertex_attrib_divisor(&self, index: u32, divisor: u32);

    unsafe fn gen_textures(&self, textures: &mut [TextureId]);

    unsafe fn delete_textures(&self, textures: &[TextureId]);

    unsafe fn bind_texture(&self, target: GLenum, texture: TextureId);

    unsafe fn active_texture(&self, unit: GLenum);

    /// `pixels` of `None` allocates the level without uploading anything.
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
    );

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
    );

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
    );

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
    );

    unsafe fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
        border: i32,
        data: &[u8],
    );

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
    );

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
    );

    unsafe fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
    );

    unsafe fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
        depth: i32,
    );

    unsafe fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: i32);

    unsafe fn tex_parameter_f(&self, target: GLenum, pname: GLenum, param: f32);

    unsafe fn generate_mipmap(&self, target: GLenum);

    unsafe fn get_tex_level_parameter_iv(&self, target: GLenum, level: i32, pname: GLenum) -> i32;

    unsafe fn pixel_store_i(&self, pname: GLenum, param: i32);

    unsafe fn gen_samplers(&self, samplers: &mut [SamplerId]);

    unsafe fn delete_samplers(&self, samplers: &[SamplerId]);

    unsafe fn bind_sampler(&self, unit: u32, sampler: SamplerId);

    unsafe fn sampler_parameter_i(&self, sampler: SamplerId, pname: GLenum, param: i32);

    unsafe fn gen_framebuffers(&self, framebuffers: &mut [FramebufferId]);

    unsafe fn delete_framebuffers(&self, framebuffers: &[FramebufferId]);

    unsafe fn bind_framebuffer(&self, target: GLenum, framebuffer: FramebufferId);

    unsafe fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture_target: GLenum,
        texture: TextureId,
        level: i32,
    );

    unsafe fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: RenderbufferId,
    );

    unsafe fn check_framebuffer_status(&self, target: GLenum) -> GLenum;

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
    );

    unsafe fn draw_buffers(&self, buffers: &[GLenum]);

    unsafe fn read_buffer(&self, src: GLenum);

    unsafe fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GLenum,
        ty: GLenum,
        pixels: &mut [u8],
    );

    unsafe fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]);

    unsafe fn gen_renderbuffers(&self, renderbuffers: &mut [RenderbufferId]);

    unsafe fn delete_renderbuffers(&self, renderbuffers: &[RenderbufferId]);

    unsafe fn bind_renderbuffer(&self, target: GLenum, renderbuffer: RenderbufferId);

    unsafe fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: i32,
        height: i32,
    );

    unsafe fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
    );

    unsafe fn uniform_1i(&self, location: UniformLocation, x: i32);

    unsafe fn uniform_2i(&self, location: UniformLocation, x: i32, y: i32);

    unsafe fn uniform_3i(&self, location: UniformLocation, x: i32, y: i32, z: i32);

    unsafe fn uniform_4i(&self, location: UniformLocation, x: i32, y: i32, z: i32, w: i32);

    unsafe fn uniform_1ui(&self, location: UniformLocation, x: u32);

    unsafe fn uniform_1f(&self, location: UniformLocation, x: f32);

    unsafe fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32);

    unsafe fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32);

    unsafe fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32);

    // The array and matrix forms derive the element count from the slice
    // length, which must be a whole number of elements. Debug builds assert
    // it, release builds ignore a trailing partial element.

    unsafe fn uniform_1iv(&self, location: UniformLocation, values: &[i32]);

    unsafe fn uniform_1fv(&self, location: UniformLocation, values: &[f32]);

    unsafe fn uniform_2fv(&self, location: UniformLocation, values: &[f32]);

    unsafe fn uniform_3fv(&self, location: UniformLocation, values: &[f32]);

    unsafe fn uniform_4fv(&self, location: UniformLocation, values: &[f32]);

    unsafe fn uniform_matrix_2fv(&self, location: UniformLocation, transpose: bool, values: &[f32]);

    unsafe fn uniform_matrix_3fv(&self, location: UniformLocation, transpose: bool, values: &[f32]);

    unsafe fn uniform_matrix_4fv(&self, location: UniformLocation, transpose: bool, values: &[f32]);

    unsafe fn uniform_matrix_2x3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    );

    unsafe fn uniform_matrix_3x2fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    );

    unsafe fn uniform_matrix_2x4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    );

    unsafe fn uniform_matrix_4x2fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    );

    unsafe fn uniform_matrix_3x4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    );

    unsafe fn uniform_matrix_4x3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    );

    unsafe fn draw_arrays(&self, mode: GLenum, first: i32, count: i32);

    /// `offset` is a byte offset into the bound `ELEMENT_ARRAY_BUFFER`.
    unsafe fn draw_elements(&self, mode: GLenum, count: i32, ty: GLenum, offset: usize);

    unsafe fn draw_range_elements(
        &self,
        mode: GLenum,
        start: u32,
        end: u32,
        count: i32,
        ty: GLenum,
        offset: usize,
    );

    unsafe fn draw_arrays_instanced(&self, mode: GLenum, first: i32, count: i32, instances: i32);

    unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: i32,
        ty: GLenum,
        offset: usize,
        instances: i32,
    );

    /// Issues `min(firsts.len(), counts.len())` draws.
    unsafe fn multi_draw_arrays(&self, mode: GLenum, firsts: &[i32], counts: &[i32]);

    /// Issues `min(counts.len(), offsets.len())` draws.
    unsafe fn multi_draw_elements(&self, mode: GLenum, counts: &[i32], ty: GLenum, offsets: &[usize]);

    /// `offset` is a byte offset into the bound `DRAW_INDIRECT_BUFFER`.
    unsafe fn draw_arrays_indirect(&self, mode: GLenum, offset: usize);

    unsafe fn draw_elements_indirect(&self, mode: GLenum, ty: GLenum, offset: usize);

    unsafe fn enable(&self, cap: GLenum);

    unsafe fn disable(&self, cap: GLenum);

    unsafe fn is_enabled(&self, cap: GLenum) -> bool;

    unsafe fn blend_func(&self, src: GLenum, dst: GLenum);

    unsafe fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    );

    unsafe fn blend_equation(&self, mode: GLenum);

    unsafe fn blend_color(&self, r: f32, g: f32, b: f32, a: f32);

    unsafe fn depth_func(&self, func: GLenum);

    unsafe fn depth_mask(&self, flag: bool);

    unsafe fn cull_face(&self, mode: GLenum);

    unsafe fn front_face(&self, mode: GLenum);

    unsafe fn polygon_mode(&self, face: GLenum, mode: GLenum);

    unsafe fn polygon_offset(&self, factor: f32, units: f32);

    unsafe fn line_width(&self, width: f32);

    unsafe fn color_mask(&self, r: bool, g: bool, b: bool, a: bool);

    unsafe fn stencil_func(&self, func: GLenum, reference: i32, mask: u32);

    unsafe fn stencil_op(&self, stencil_fail: GLenum, depth_fail: GLenum, depth_pass: GLenum);

    unsafe fn stencil_mask(&self, mask: u32);

    unsafe fn scissor(&self, x: i32, y: i32, width: i32, height: i32);

    unsafe fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    unsafe fn clear(&self, mask: GLbitfield);

    unsafe fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);

    unsafe fn clear_depth(&self, depth: f32);

    unsafe fn clear_stencil(&self, stencil: i32);

    /// `values` must hold every value `pname` yields. Does nothing if it is
    /// empty.
    unsafe fn get_integer_v(&self, pname: GLenum, values: &mut [i32]);

    /// Returns an empty string if the implementation hands out a null pointer.
    unsafe fn get_string(&self, name: GLenum) -> String;

    unsafe fn get_string_i(&self, name: GLenum, index: u32) -> String;

    unsafe fn flush(&self);

    unsafe fn finish(&self);

    unsafe fn gen_queries(&self, queries: &mut [QueryId]);

    unsafe fn delete_queries(&self, queries: &[QueryId]);

    unsafe fn begin_query(&self, target: GLenum, query: QueryId);

    unsafe fn end_query(&self, target: GLenum);

    /// Records a timestamp into `query` once all previous commands complete.
    unsafe fn query_counter(&self, query: QueryId, target: GLenum);

    unsafe fn get_query_object_u32(&self, query: QueryId, pname: GLenum) -> u32;

    unsafe fn get_query_object_u64(&self, query: QueryId, pname: GLenum) -> u64;

    unsafe fn memory_barrier(&self, barriers: GLbitfield);

    unsafe fn gen_transform_feedbacks(&self, feedbacks: &mut [TransformFeedbackId]);

    unsafe fn delete_transform_feedbacks(&self, feedbacks: &[TransformFeedbackId]);

    unsafe fn bind_transform_feedback(&self, target: GLenum, feedback: TransformFeedbackId);

    unsafe fn begin_transform_feedback(&self, primitive_mode: GLenum);

    unsafe fn end_transform_feedback(&self);

    // Debug output and object labeling. Backends whose table lacks debug
    // output may turn these into no-ops.

    unsafe fn push_debug_group(&self, source: GLenum, id: u32, message: &str);

    unsafe fn pop_debug_group(&self);

    /// Attaches `label` to the object `name` of kind `identifier`
    /// (`types::BUFFER`, `types::SHADER`, ...).
    unsafe fn object_label(&self, identifier: GLenum, name: u32, label: &str);

    unsafe fn debug_message_insert(
        &self,
        source: GLenum,
        ty: GLenum,
        id: u32,
        severity: GLenum,
        message: &str,
    );

    unsafe fn debug_message_control(
        &self,
        source: GLenum,
        ty: GLenum,
        severity: GLenum,
        ids: &[u32],
        enabled: bool,
    );

    /// Returns and clears the error flag. Never wrapped by the diagnostics.
    unsafe fn get_error(&self) -> GLenum;
}
