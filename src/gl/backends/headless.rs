//! A backend that drops every command.
//!
//! Useful where there is no GPU context at all: servers, tools and tests. It
//! hands out sequential object names, reports successful compiles, links and
//! complete framebuffers, and keeps bookkeeping of the calls it received.
//! Cloning a `HeadlessFunctions` shares that bookkeeping, so a copy kept by
//! the caller observes the one installed in the registry.

use std::collections::HashMap;
use std::os::raw::c_void;
use std::ptr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::gl::types::{self, GLbitfield, GLenum};
use crate::gl::GlFunctions;
use crate::utils::handle::*;

const VERSION: &str = "3.3.0 Headless";
const EXTENSIONS: &[&str] = &["GL_KHR_debug"];

#[derive(Default)]
struct HeadlessState {
    next_id: AtomicU32,
    error: AtomicU32,
    calls: Mutex<HashMap<&'static str, usize>>,
    failures: Mutex<HashMap<&'static str, GLenum>>,
}

fn lock<T>(v: &Mutex<T>) -> MutexGuard<T> {
    v.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Default)]
pub struct HeadlessFunctions {
    state: Arc<HeadlessState>,
}

impl HeadlessFunctions {
    pub fn new() -> Self {
        HeadlessFunctions::default()
    }

    /// Raises `code` in the error flag whenever `call` (named as in
    /// diagnostics, e.g. `compileShader`) runs. Like the native flag, it keeps
    /// the first error until `get_error` clears it.
    pub fn fail_on(&self, call: &'static str, code: GLenum) -> &Self {
        lock(&self.state.failures).insert(call, code);
        self
    }

    /// Stops raising errors for `call`.
    pub fn succeed_on(&self, call: &str) -> &Self {
        lock(&self.state.failures).remove(call);
        self
    }

    /// How many times `call` was received.
    pub fn calls(&self, call: &str) -> usize {
        lock(&self.state.calls).get(call).cloned().unwrap_or(0)
    }

    /// How many calls were received in total.
    pub fn total_calls(&self) -> usize {
        lock(&self.state.calls).values().sum()
    }

    fn count(&self, call: &'static str) {
        *lock(&self.state.calls).entry(call).or_insert(0) += 1;
    }

    fn hit(&self, call: &'static str) {
        self.count(call);

        if let Some(&code) = lock(&self.state.failures).get(call) {
            // Keeps the first error until it is queried.
            let _ = self.state.error.compare_exchange(
                types::NO_ERROR,
                code,
                Ordering::SeqCst,
                Ordering::SeqCst,
            );
        }
    }

    fn next_id(&self) -> RawId {
        self.state.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn create<T: GlId>(&self, call: &'static str) -> T {
        self.hit(call);
        T::new(self.next_id())
    }

    fn gen<T: GlId>(&self, call: &'static str, ids: &mut [T]) {
        self.hit(call);
        for v in ids {
            *v = T::new(self.next_id());
        }
    }
}

impl GlFunctions for HeadlessFunctions {
    unsafe fn create_shader(&self, _: GLenum) -> ShaderId {
        self.create("createShader")
    }

    unsafe fn shader_source(&self, _: ShaderId, _: &[&str]) {
        self.hit("shaderSource");
    }

    unsafe fn compile_shader(&self, _: ShaderId) {
        self.hit("compileShader");
    }

    unsafe fn delete_shader(&self, _: ShaderId) {
        self.hit("deleteShader");
    }

    unsafe fn get_shader_iv(&self, _: ShaderId, pname: GLenum) -> i32 {
        self.hit("getShaderiv");
        match pname {
            types::COMPILE_STATUS => i32::from(types::TRUE),
            _ => 0,
        }
    }

    unsafe fn get_shader_info_log(&self, _: ShaderId, _: &mut [u8]) -> usize {
        self.hit("getShaderInfoLog");
        0
    }

    unsafe fn create_program(&self) -> ProgramId {
        self.create("createProgram")
    }

    unsafe fn attach_shader(&self, _: ProgramId, _: ShaderId) {
        self.hit("attachShader");
    }

    unsafe fn detach_shader(&self, _: ProgramId, _: ShaderId) {
        self.hit("detachShader");
    }

    unsafe fn link_program(&self, _: ProgramId) {
        self.hit("linkProgram");
    }

    unsafe fn validate_program(&self, _: ProgramId) {
        self.hit("validateProgram");
    }

    unsafe fn use_program(&self, _: ProgramId) {
        self.hit("useProgram");
    }

    unsafe fn delete_program(&self, _: ProgramId) {
        self.hit("deleteProgram");
    }

    unsafe fn get_program_iv(&self, _: ProgramId, pname: GLenum) -> i32 {
        self.hit("getProgramiv");
        match pname {
            types::LINK_STATUS | types::VALIDATE_STATUS => i32::from(types::TRUE),
            _ => 0,
        }
    }

    unsafe fn get_program_info_log(&self, _: ProgramId, _: &mut [u8]) -> usize {
        self.hit("getProgramInfoLog");
        0
    }

    unsafe fn get_uniform_location(&self, _: ProgramId, _: &str) -> Option<UniformLocation> {
        self.hit("getUniformLocation");
        Some(UniformLocation::new(0))
    }

    unsafe fn get_attrib_location(&self, _: ProgramId, _: &str) -> Option<u32> {
        self.hit("getAttribLocation");
        Some(0)
    }

    unsafe fn bind_attrib_location(&self, _: ProgramId, _: u32, _: &str) {
        self.hit("bindAttribLocation");
    }

    unsafe fn get_uniform_block_index(&self, _: ProgramId, _: &str) -> Option<u32> {
        self.hit("getUniformBlockIndex");
        Some(0)
    }

    unsafe fn uniform_block_binding(&self, _: ProgramId, _: u32, _: u32) {
        self.hit("uniformBlockBinding");
    }

    unsafe fn gen_buffers(&self, buffers: &mut [BufferId]) {
        self.gen("genBuffers", buffers);
    }

    unsafe fn delete_buffers(&self, _: &[BufferId]) {
        self.hit("deleteBuffers");
    }

    unsafe fn bind_buffer(&self, _: GLenum, _: BufferId) {
        self.hit("bindBuffer");
    }

    unsafe fn bind_buffer_base(&self, _: GLenum, _: u32, _: BufferId) {
        self.hit("bindBufferBase");
    }

    unsafe fn bind_buffer_range(&self, _: GLenum, _: u32, _: BufferId, _: isize, _: isize) {
        self.hit("bindBufferRange");
    }

    unsafe fn buffer_data(&self, _: GLenum, _: &[u8], _: GLenum) {
        self.hit("bufferData");
    }

    unsafe fn buffer_data_size(&self, _: GLenum, _: isize, _: GLenum) {
        self.hit("bufferData");
    }

    unsafe fn buffer_sub_data(&self, _: GLenum, _: isize, _: &[u8]) {
        self.hit("bufferSubData");
    }

    unsafe fn buffer_storage(&self, _: GLenum, _: isize, _: Option<&[u8]>, _: GLbitfield) {
        self.hit("bufferStorage");
    }

    unsafe fn copy_buffer_sub_data(&self, _: GLenum, _: GLenum, _: isize, _: isize, _: isize) {
        self.hit("copyBufferSubData");
    }

    unsafe fn map_buffer_range(&self, _: GLenum, _: isize, _: isize, _: GLbitfield) -> *mut c_void {
        self.hit("mapBufferRange");
        ptr::null_mut()
    }

    unsafe fn flush_mapped_buffer_range(&self, _: GLenum, _: isize, _: isize) {
        self.hit("flushMappedBufferRange");
    }

    unsafe fn unmap_buffer(&self, _: GLenum) -> bool {
        self.hit("unmapBuffer");
        true
    }

    unsafe fn gen_vertex_arrays(&self, arrays: &mut [VertexArrayId]) {
        self.gen("genVertexArrays", arrays);
    }

    unsafe fn delete_vertex_arrays(&self, _: &[VertexArrayId]) {
        self.hit("deleteVertexArrays");
    }

    unsafe fn bind_vertex_array(&self, _: VertexArrayId) {
        self.hit("bindVertexArray");
    }

    unsafe fn enable_vertex_attrib_array(&self, _: u32) {
        self.hit("enableVertexAttribArray");
    }

    unsafe fn disable_vertex_attrib_array(&self, _: u32) {
        self.hit("disableVertexAttribArray");
    }

    unsafe fn vertex_attrib_pointer(&self, _: u32, _: i32, _: GLenum, _: bool, _: i32, _: usize) {
        self.hit("vertexAttribPointer");
    }

    unsafe fn vertex_attrib_i_pointer(&self, _: u32, _: i32, _: GLenum, _: i32, _: usize) {
        self.hit("vertexAttribIPointer");
    }

    unsafe fn vertex_attrib_divisor(&self, _: u32, _: u32) {
        self.hit("vertexAttribDivisor");
    }

    unsafe fn gen_textures(&self, textures: &mut [TextureId]) {
        self.gen("genTextures", textures);
    }

    unsafe fn delete_textures(&self, _: &[TextureId]) {
        self.hit("deleteTextures");
    }

    unsafe fn bind_texture(&self, _: GLenum, _: TextureId) {
        self.hit("bindTexture");
    }

    unsafe fn active_texture(&self, _: GLenum) {
        self.hit("activeTexture");
    }

    unsafe fn tex_image_2d(
        &self,
        _: GLenum,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: GLenum,
        _: GLenum,
        _: Option<&[u8]>,
    ) {
        self.hit("texImage2D");
    }

    unsafe fn tex_image_3d(
        &self,
        _: GLenum,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: GLenum,
        _: GLenum,
        _: Option<&[u8]>,
    ) {
        self.hit("texImage3D");
    }

    unsafe fn tex_sub_image_2d(
        &self,
        _: GLenum,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: GLenum,
        _: GLenum,
        _: &[u8],
    ) {
        self.hit("texSubImage2D");
    }

    unsafe fn tex_sub_image_3d(
        &self,
        _: GLenum,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: GLenum,
        _: GLenum,
        _: &[u8],
    ) {
        self.hit("texSubImage3D");
    }

    unsafe fn compressed_tex_image_2d(
        &self,
        _: GLenum,
        _: i32,
        _: GLenum,
        _: i32,
        _: i32,
        _: i32,
        _: &[u8],
    ) {
        self.hit("compressedTexImage2D");
    }

    unsafe fn compressed_tex_image_3d(
        &self,
        _: GLenum,
        _: i32,
        _: GLenum,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: &[u8],
    ) {
        self.hit("compressedTexImage3D");
    }

    unsafe fn compressed_tex_sub_image_2d(
        &self,
        _: GLenum,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: GLenum,
        _: &[u8],
    ) {
        self.hit("compressedTexSubImage2D");
    }

    unsafe fn tex_storage_2d(&self, _: GLenum, _: i32, _: GLenum, _: i32, _: i32) {
        self.hit("texStorage2D");
    }

    unsafe fn tex_storage_3d(&self, _: GLenum, _: i32, _: GLenum, _: i32, _: i32, _: i32) {
        self.hit("texStorage3D");
    }

    unsafe fn tex_parameter_i(&self, _: GLenum, _: GLenum, _: i32) {
        self.hit("texParameteri");
    }

    unsafe fn tex_parameter_f(&self, _: GLenum, _: GLenum, _: f32) {
        self.hit("texParameterf");
    }

    unsafe fn generate_mipmap(&self, _: GLenum) {
        self.hit("generateMipmap");
    }

    unsafe fn get_tex_level_parameter_iv(&self, _: GLenum, _: i32, _: GLenum) -> i32 {
        self.hit("getTexLevelParameteriv");
        0
    }

    unsafe fn pixel_store_i(&self, _: GLenum, _: i32) {
        self.hit("pixelStorei");
    }

    unsafe fn gen_samplers(&self, samplers: &mut [SamplerId]) {
        self.gen("genSamplers", samplers);
    }

    unsafe fn delete_samplers(&self, _: &[SamplerId]) {
        self.hit("deleteSamplers");
    }

    unsafe fn bind_sampler(&self, _: u32, _: SamplerId) {
        self.hit("bindSampler");
    }

    unsafe fn sampler_parameter_i(&self, _: SamplerId, _: GLenum, _: i32) {
        self.hit("samplerParameteri");
    }

    unsafe fn gen_framebuffers(&self, framebuffers: &mut [FramebufferId]) {
        self.gen("genFramebuffers", framebuffers);
    }

    unsafe fn delete_framebuffers(&self, _: &[FramebufferId]) {
        self.hit("deleteFramebuffers");
    }

    unsafe fn bind_framebuffer(&self, _: GLenum, _: FramebufferId) {
        self.hit("bindFramebuffer");
    }

    unsafe fn framebuffer_texture_2d(&self, _: GLenum, _: GLenum, _: GLenum, _: TextureId, _: i32) {
        self.hit("framebufferTexture2D");
    }

    unsafe fn framebuffer_renderbuffer(&self, _: GLenum, _: GLenum, _: GLenum, _: RenderbufferId) {
        self.hit("framebufferRenderbuffer");
    }

    unsafe fn check_framebuffer_status(&self, _: GLenum) -> GLenum {
        self.hit("checkFramebufferStatus");
        types::FRAMEBUFFER_COMPLETE
    }

    unsafe fn blit_framebuffer(
        &self,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: GLbitfield,
        _: GLenum,
    ) {
        self.hit("blitFramebuffer");
    }

    unsafe fn draw_buffers(&self, _: &[GLenum]) {
        self.hit("drawBuffers");
    }

    unsafe fn read_buffer(&self, _: GLenum) {
        self.hit("readBuffer");
    }

    unsafe fn read_pixels(&self, _: i32, _: i32, _: i32, _: i32, _: GLenum, _: GLenum, _: &mut [u8]) {
        self.hit("readPixels");
    }

    unsafe fn invalidate_framebuffer(&self, _: GLenum, _: &[GLenum]) {
        self.hit("invalidateFramebuffer");
    }

    unsafe fn gen_renderbuffers(&self, renderbuffers: &mut [RenderbufferId]) {
        self.gen("genRenderbuffers", renderbuffers);
    }

    unsafe fn delete_renderbuffers(&self, _: &[RenderbufferId]) {
        self.hit("deleteRenderbuffers");
    }

    unsafe fn bind_renderbuffer(&self, _: GLenum, _: RenderbufferId) {
        self.hit("bindRenderbuffer");
    }

    unsafe fn renderbuffer_storage(&self, _: GLenum, _: GLenum, _: i32, _: i32) {
        self.hit("renderbufferStorage");
    }

    unsafe fn renderbuffer_storage_multisample(&self, _: GLenum, _: i32, _: GLenum, _: i32, _: i32) {
        self.hit("renderbufferStorageMultisample");
    }

    unsafe fn uniform_1i(&self, _: UniformLocation, _: i32) {
        self.hit("uniform1i");
    }

    unsafe fn uniform_2i(&self, _: UniformLocation, _: i32, _: i32) {
        self.hit("uniform2i");
    }

    unsafe fn uniform_3i(&self, _: UniformLocation, _: i32, _: i32, _: i32) {
        self.hit("uniform3i");
    }

    unsafe fn uniform_4i(&self, _: UniformLocation, _: i32, _: i32, _: i32, _: i32) {
        self.hit("uniform4i");
    }

    unsafe fn uniform_1ui(&self, _: UniformLocation, _: u32) {
        self.hit("uniform1ui");
    }

    unsafe fn uniform_1f(&self, _: UniformLocation, _: f32) {
        self.hit("uniform1f");
    }

    unsafe fn uniform_2f(&self, _: UniformLocation, _: f32, _: f32) {
        self.hit("uniform2f");
    }

    unsafe fn uniform_3f(&self, _: UniformLocation, _: f32, _: f32, _: f32) {
        self.hit("uniform3f");
    }

    unsafe fn uniform_4f(&self, _: UniformLocation, _: f32, _: f32, _: f32, _: f32) {
        self.hit("uniform4f");
    }

    unsafe fn uniform_1iv(&self, _: UniformLocation, _: &[i32]) {
        self.hit("uniform1iv");
    }

    unsafe fn uniform_1fv(&self, _: UniformLocation, _: &[f32]) {
        self.hit("uniform1fv");
    }

    unsafe fn uniform_2fv(&self, _: UniformLocation, _: &[f32]) {
        self.hit("uniform2fv");
    }

    unsafe fn uniform_3fv(&self, _: UniformLocation, _: &[f32]) {
        self.hit("uniform3fv");
    }

    unsafe fn uniform_4fv(&self, _: UniformLocation, _: &[f32]) {
        self.hit("uniform4fv");
    }

    unsafe fn uniform_matrix_2fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix2fv");
    }

    unsafe fn uniform_matrix_3fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix3fv");
    }

    unsafe fn uniform_matrix_4fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix4fv");
    }

    unsafe fn uniform_matrix_2x3fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix2x3fv");
    }

    unsafe fn uniform_matrix_3x2fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix3x2fv");
    }

    unsafe fn uniform_matrix_2x4fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix2x4fv");
    }

    unsafe fn uniform_matrix_4x2fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix4x2fv");
    }

    unsafe fn uniform_matrix_3x4fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix3x4fv");
    }

    unsafe fn uniform_matrix_4x3fv(&self, _: UniformLocation, _: bool, _: &[f32]) {
        self.hit("uniformMatrix4x3fv");
    }

    unsafe fn draw_arrays(&self, _: GLenum, _: i32, _: i32) {
        self.hit("drawArrays");
    }

    unsafe fn draw_elements(&self, _: GLenum, _: i32, _: GLenum, _: usize) {
        self.hit("drawElements");
    }

    unsafe fn draw_range_elements(&self, _: GLenum, _: u32, _: u32, _: i32, _: GLenum, _: usize) {
        self.hit("drawRangeElements");
    }

    unsafe fn draw_arrays_instanced(&self, _: GLenum, _: i32, _: i32, _: i32) {
        self.hit("drawArraysInstanced");
    }

    unsafe fn draw_elements_instanced(&self, _: GLenum, _: i32, _: GLenum, _: usize, _: i32) {
        self.hit("drawElementsInstanced");
    }

    unsafe fn multi_draw_arrays(&self, _: GLenum, _: &[i32], _: &[i32]) {
        self.hit("multiDrawArrays");
    }

    unsafe fn multi_draw_elements(&self, _: GLenum, _: &[i32], _: GLenum, _: &[usize]) {
        self.hit("multiDrawElements");
    }

    unsafe fn draw_arrays_indirect(&self, _: GLenum, _: usize) {
        self.hit("drawArraysIndirect");
    }

    unsafe fn draw_elements_indirect(&self, _: GLenum, _: GLenum, _: usize) {
        self.hit("drawElementsIndirect");
    }

    unsafe fn enable(&self, _: GLenum) {
        self.hit("enable");
    }

    unsafe fn disable(&self, _: GLenum) {
        self.hit("disable");
    }

    unsafe fn is_enabled(&self, _: GLenum) -> bool {
        self.hit("isEnabled");
        false
    }

    unsafe fn blend_func(&self, _: GLenum, _: GLenum) {
        self.hit("blendFunc");
    }

    unsafe fn blend_func_separate(&self, _: GLenum, _: GLenum, _: GLenum, _: GLenum) {
        self.hit("blendFuncSeparate");
    }

    unsafe fn blend_equation(&self, _: GLenum) {
        self.hit("blendEquation");
    }

    unsafe fn blend_color(&self, _: f32, _: f32, _: f32, _: f32) {
        self.hit("blendColor");
    }

    unsafe fn depth_func(&self, _: GLenum) {
        self.hit("depthFunc");
    }

    unsafe fn depth_mask(&self, _: bool) {
        self.hit("depthMask");
    }

    unsafe fn cull_face(&self, _: GLenum) {
        self.hit("cullFace");
    }

    unsafe fn front_face(&self, _: GLenum) {
        self.hit("frontFace");
    }

    unsafe fn polygon_mode(&self, _: GLenum, _: GLenum) {
        self.hit("polygonMode");
    }

    unsafe fn polygon_offset(&self, _: f32, _: f32) {
        self.hit("polygonOffset");
    }

    unsafe fn line_width(&self, _: f32) {
        self.hit("lineWidth");
    }

    unsafe fn color_mask(&self, _: bool, _: bool, _: bool, _: bool) {
        self.hit("colorMask");
    }

    unsafe fn stencil_func(&self, _: GLenum, _: i32, _: u32) {
        self.hit("stencilFunc");
    }

    unsafe fn stencil_op(&self, _: GLenum, _: GLenum, _: GLenum) {
        self.hit("stencilOp");
    }

    unsafe fn stencil_mask(&self, _: u32) {
        self.hit("stencilMask");
    }

    unsafe fn scissor(&self, _: i32, _: i32, _: i32, _: i32) {
        self.hit("scissor");
    }

    unsafe fn viewport(&self, _: i32, _: i32, _: i32, _: i32) {
        self.hit("viewport");
    }

    unsafe fn clear(&self, _: GLbitfield) {
        self.hit("clear");
    }

    unsafe fn clear_color(&self, _: f32, _: f32, _: f32, _: f32) {
        self.hit("clearColor");
    }

    unsafe fn clear_depth(&self, _: f32) {
        self.hit("clearDepth");
    }

    unsafe fn clear_stencil(&self, _: i32) {
        self.hit("clearStencil");
    }

    unsafe fn get_integer_v(&self, pname: GLenum, values: &mut [i32]) {
        self.hit("getIntegerv");

        let v = match pname {
            types::NUM_EXTENSIONS => EXTENSIONS.len() as i32,
            types::MAX_COMBINED_TEXTURE_IMAGE_UNITS => 16,
            types::MAX_COLOR_ATTACHMENTS => 4,
            _ => 0,
        };

        if let Some(first) = values.first_mut() {
            *first = v;
        }
    }

    unsafe fn get_string(&self, name: GLenum) -> String {
        self.hit("getString");
        match name {
            types::VERSION => VERSION.to_owned(),
            types::VENDOR => "nether".to_owned(),
            types::RENDERER => "Headless".to_owned(),
            types::EXTENSIONS => EXTENSIONS.join(" "),
            _ => String::new(),
        }
    }

    unsafe fn get_string_i(&self, name: GLenum, index: u32) -> String {
        self.hit("getStringi");
        match name {
            types::EXTENSIONS => EXTENSIONS
                .get(index as usize)
                .map(|v| (*v).to_owned())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    unsafe fn flush(&self) {
        self.hit("flush");
    }

    unsafe fn finish(&self) {
        self.hit("finish");
    }

    unsafe fn gen_queries(&self, queries: &mut [QueryId]) {
        self.gen("genQueries", queries);
    }

    unsafe fn delete_queries(&self, _: &[QueryId]) {
        self.hit("deleteQueries");
    }

    unsafe fn begin_query(&self, _: GLenum, _: QueryId) {
        self.hit("beginQuery");
    }

    unsafe fn end_query(&self, _: GLenum) {
        self.hit("endQuery");
    }

    unsafe fn query_counter(&self, _: QueryId, _: GLenum) {
        self.hit("queryCounter");
    }

    unsafe fn get_query_object_u32(&self, _: QueryId, _: GLenum) -> u32 {
        self.hit("getQueryObjectuiv");
        0
    }

    unsafe fn get_query_object_u64(&self, _: QueryId, _: GLenum) -> u64 {
        self.hit("getQueryObjectui64v");
        0
    }

    unsafe fn memory_barrier(&self, _: GLbitfield) {
        self.hit("memoryBarrier");
    }

    unsafe fn gen_transform_feedbacks(&self, feedbacks: &mut [TransformFeedbackId]) {
        self.gen("genTransformFeedbacks", feedbacks);
    }

    unsafe fn delete_transform_feedbacks(&self, _: &[TransformFeedbackId]) {
        self.hit("deleteTransformFeedbacks");
    }

    unsafe fn bind_transform_feedback(&self, _: GLenum, _: TransformFeedbackId) {
        self.hit("bindTransformFeedback");
    }

    unsafe fn begin_transform_feedback(&self, _: GLenum) {
        self.hit("beginTransformFeedback");
    }

    unsafe fn end_transform_feedback(&self) {
        self.hit("endTransformFeedback");
    }

    unsafe fn push_debug_group(&self, _: GLenum, _: u32, _: &str) {
        self.hit("pushDebugGroup");
    }

    unsafe fn pop_debug_group(&self) {
        self.hit("popDebugGroup");
    }

    unsafe fn object_label(&self, _: GLenum, _: u32, _: &str) {
        self.hit("objectLabel");
    }

    unsafe fn debug_message_insert(&self, _: GLenum, _: GLenum, _: u32, _: GLenum, _: &str) {
        self.hit("debugMessageInsert");
    }

    unsafe fn debug_message_control(&self, _: GLenum, _: GLenum, _: GLenum, _: &[u32], _: bool) {
        self.hit("debugMessageControl");
    }

    unsafe fn get_error(&self) -> GLenum {
        self.count("getError");
        self.state.error.swap(types::NO_ERROR, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_are_sequential_and_non_zero() {
        let gl = HeadlessFunctions::new();
        unsafe {
            let shader = gl.create_shader(types::VERTEX_SHADER);
            let mut buffers = [BufferId::NONE; 2];
            gl.gen_buffers(&mut buffers);

            assert_eq!(shader.raw(), 1);
            assert_eq!(buffers, [BufferId::new(2), BufferId::new(3)]);
        }
    }

    #[test]
    fn error_flag_is_sticky_until_queried() {
        let gl = HeadlessFunctions::new();
        gl.fail_on("compileShader", types::INVALID_VALUE);

        unsafe {
            let shader = gl.create_shader(types::FRAGMENT_SHADER);
            assert_eq!(gl.get_error(), types::NO_ERROR);

            gl.compile_shader(shader);
            gl.delete_shader(shader);
            assert_eq!(gl.get_error(), types::INVALID_VALUE);
            assert_eq!(gl.get_error(), types::NO_ERROR);
        }

        assert_eq!(gl.calls("compileShader"), 1);
        assert_eq!(gl.calls("getError"), 3);
        assert_eq!(gl.total_calls(), 6);
    }

    #[test]
    fn clones_share_bookkeeping() {
        let gl = HeadlessFunctions::new();
        let other = gl.clone();

        unsafe { other.clear(0) };
        assert_eq!(gl.calls("clear"), 1);
    }
}
