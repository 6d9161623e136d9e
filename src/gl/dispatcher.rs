//! The owning container of one backend, and the free dispatch functions.
//!
//! Components that issue graphics calls can take a [`Dispatcher`] as an
//! explicit dependency. Those that can not use the free functions of
//! [`crate::gl`], which forward to the dispatcher installed in the
//! [`registry`](super::registry).

use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_void;

use super::backends::headless::HeadlessFunctions;
use super::diagnostics::{self, Active, Instrumentation};
use super::registry;
use super::types::{GLbitfield, GLenum};
use super::*;

/// Which kind of backend a dispatcher forwards to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Direct,
    Host,
    Headless,
    Custom,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            BackendKind::Direct => "direct",
            BackendKind::Host => "host",
            BackendKind::Headless => "headless",
            BackendKind::Custom => "custom",
        };

        f.write_str(name)
    }
}

/// Owns exactly one backend and forwards every call to it, instrumented as
/// `I` says.
pub struct Dispatcher<I: Instrumentation = Active> {
    kind: BackendKind,
    functions: Box<dyn GlFunctions>,
    _instrumentation: PhantomData<I>,
}

impl<I: Instrumentation> Dispatcher<I> {
    pub fn new(kind: BackendKind, functions: Box<dyn GlFunctions>) -> Self {
        Dispatcher {
            kind,
            functions,
            _instrumentation: PhantomData,
        }
    }

    /// Forwards to the driver-loaded function table. Fails if the loader has
    /// not resolved the entry points yet.
    #[cfg(feature = "direct")]
    pub fn direct() -> crate::errors::Result<Self> {
        use super::backends::direct::DirectFunctions;

        if !DirectFunctions::is_loaded() {
            return Err(crate::errors::Error::FunctionsNotLoaded);
        }

        Ok(Self::new(BackendKind::Direct, Box::new(DirectFunctions)))
    }

    /// Forwards to the function table of `ctx`. The dispatcher must not be
    /// used after `ctx` is destroyed.
    #[cfg(feature = "host")]
    pub fn host<C>(ctx: &C) -> Self
    where
        C: super::backends::host::HostContext + ?Sized,
    {
        let backend = super::backends::host::HostBackend::new(ctx);
        Self::new(BackendKind::Host, Box::new(backend))
    }

    /// Forwards to `functions`, a handle sharing its bookkeeping with the
    /// caller's copy.
    pub fn headless(functions: HeadlessFunctions) -> Self {
        Self::new(BackendKind::Headless, Box::new(functions))
    }

    #[inline]
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// The backend itself, bypassing the instrumentation.
    #[inline]
    pub fn functions(&self) -> &dyn GlFunctions {
        &*self.functions
    }

    /// Returns and clears the error flag of the backend. Never instrumented.
    #[inline]
    pub unsafe fn get_error(&self) -> GLenum {
        self.functions.get_error()
    }

    #[inline]
    unsafe fn forward<T, F>(&self, call: &'static str, f: F) -> T
    where
        F: FnOnce(&dyn GlFunctions) -> T,
    {
        diagnostics::forward::<I, T, F>(&*self.functions, call, f)
    }
}

impl<I: Instrumentation> Drop for Dispatcher<I> {
    fn drop(&mut self) {
        debug!("Dropping {} backend.", self.kind);
    }
}

impl<I: Instrumentation> fmt::Debug for Dispatcher<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("kind", &self.kind)
            .field("checked", &I::CHECKED)
            .finish()
    }
}

/// Returns and clears the error flag of the active backend. Never
/// instrumented, so it is safe to call from a diagnostic sink.
#[inline]
pub unsafe fn get_error() -> GLenum {
    registry::with_active("getError", |dispatcher| dispatcher.get_error())
}

macro_rules! dispatch {
    ($(
        fn $name:ident = $call:literal ($($arg:ident: $ty:ty),*) $(-> $ret:ty)?;
    )*) => {
        impl<I: Instrumentation> Dispatcher<I> {
            $(
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) $(-> $ret)? {
                    self.forward($call, |gl| gl.$name($($arg),*))
                }
            )*
        }

        $(
            /// Forwards to the installed backend, see
            /// [`GlFunctions`].
            #[inline]
            pub unsafe fn $name($($arg: $ty),*) $(-> $ret)? {
                registry::with_active($call, |dispatcher| dispatcher.$name($($arg),*))
            }
        )*
    };
}

dispatch! {
    fn create_shader = "createShader" (ty: GLenum) -> ShaderId;
    fn shader_source = "shaderSource" (shader: ShaderId, sources: &[&str]);
    fn compile_shader = "compileShader" (shader: ShaderId);
    fn delete_shader = "deleteShader" (shader: ShaderId);
    fn get_shader_iv = "getShaderiv" (shader: ShaderId, pname: GLenum) -> i32;
    fn get_shader_info_log = "getShaderInfoLog" (shader: ShaderId, buf: &mut [u8]) -> usize;

    fn create_program = "createProgram" () -> ProgramId;
    fn attach_shader = "attachShader" (program: ProgramId, shader: ShaderId);
    fn detach_shader = "detachShader" (program: ProgramId, shader: ShaderId);
    fn link_program = "linkProgram" (program: ProgramId);
    fn validate_program = "validateProgram" (program: ProgramId);
    fn use_program = "useProgram" (program: ProgramId);
    fn delete_program = "deleteProgram" (program: ProgramId);
    fn get_program_iv = "getProgramiv" (program: ProgramId, pname: GLenum) -> i32;
    fn get_program_info_log = "getProgramInfoLog" (program: ProgramId, buf: &mut [u8]) -> usize;
    fn get_uniform_location = "getUniformLocation" (program: ProgramId, name: &str) -> Option<UniformLocation>;
    fn get_attrib_location = "getAttribLocation" (program: ProgramId, name: &str) -> Option<u32>;
    fn bind_attrib_location = "bindAttribLocation" (program: ProgramId, index: u32, name: &str);
    fn get_uniform_block_index = "getUniformBlockIndex" (program: ProgramId, name: &str) -> Option<u32>;
    fn uniform_block_binding = "uniformBlockBinding" (program: ProgramId, block: u32, binding: u32);

    fn gen_buffers = "genBuffers" (buffers: &mut [BufferId]);
    fn delete_buffers = "deleteBuffers" (buffers: &[BufferId]);
    fn bind_buffer = "bindBuffer" (target: GLenum, buffer: BufferId);
    fn bind_buffer_base = "bindBufferBase" (target: GLenum, index: u32, buffer: BufferId);
    fn bind_buffer_range = "bindBufferRange" (target: GLenum, index: u32, buffer: BufferId, offset: isize, size: isize);
    fn buffer_data = "bufferData" (target: GLenum, data: &[u8], usage: GLenum);
    fn buffer_data_size = "bufferData" (target: GLenum, size: isize, usage: GLenum);
    fn buffer_sub_data = "bufferSubData" (target: GLenum, offset: isize, data: &[u8]);
    fn buffer_storage = "bufferStorage" (target: GLenum, size: isize, data: Option<&[u8]>, flags: GLbitfield);
    fn copy_buffer_sub_data = "copyBufferSubData" (read_target: GLenum, write_target: GLenum, read_offset: isize, write_offset: isize, size: isize);
    fn map_buffer_range = "mapBufferRange" (target: GLenum, offset: isize, length: isize, access: GLbitfield) -> *mut c_void;
    fn flush_mapped_buffer_range = "flushMappedBufferRange" (target: GLenum, offset: isize, length: isize);
    fn unmap_buffer = "unmapBuffer" (target: GLenum) -> bool;

    fn gen_vertex_arrays = "genVertexArrays" (arrays: &mut [VertexArrayId]);
    fn delete_vertex_arrays = "deleteVertexArrays" (arrays: &[VertexArrayId]);
    fn bind_vertex_array = "bindVertexArray" (array: VertexArrayId);
    fn enable_vertex_attrib_array = "enableVertexAttribArray" (index: u32);
    fn disable_vertex_attrib_array = "disableVertexAttribArray" (index: u32);
    fn vertex_attrib_pointer = "vertexAttribPointer" (index: u32, size: i32, ty: GLenum, normalized: bool, stride: i32, offset: usize);
    fn vertex_attrib_i_pointer = "vertexAttribIPointer" (index: u32, size: i32, ty: GLenum, stride: i32, offset: usize);
    fn vertex_attrib_divisor = "vertexAttribDivisor" (index: u32, divisor: u32);

    fn gen_textures = "genTextures" (textures: &mut [TextureId]);
    fn delete_textures = "deleteTextures" (textures: &[TextureId]);
    fn bind_texture = "bindTexture" (target: GLenum, texture: TextureId);
    fn active_texture = "activeTexture" (unit: GLenum);
    fn tex_image_2d = "texImage2D" (target: GLenum, level: i32, internal_format: i32, width: i32, height: i32, border: i32, format: GLenum, ty: GLenum, pixels: Option<&[u8]>);
    fn tex_image_3d = "texImage3D" (target: GLenum, level: i32, internal_format: i32, width: i32, height: i32, depth: i32, border: i32, format: GLenum, ty: GLenum, pixels: Option<&[u8]>);
    fn tex_sub_image_2d = "texSubImage2D" (target: GLenum, level: i32, x: i32, y: i32, width: i32, height: i32, format: GLenum, ty: GLenum, pixels: &[u8]);
    fn tex_sub_image_3d = "texSubImage3D" (target: GLenum, level: i32, x: i32, y: i32, z: i32, width: i32, height: i32, depth: i32, format: GLenum, ty: GLenum, pixels: &[u8]);
    fn compressed_tex_image_2d = "compressedTexImage2D" (target: GLenum, level: i32, internal_format: GLenum, width: i32, height: i32, border: i32, data: &[u8]);
    fn compressed_tex_image_3d = "compressedTexImage3D" (target: GLenum, level: i32, internal_format: GLenum, width: i32, height: i32, depth: i32, border: i32, data: &[u8]);
    fn compressed_tex_sub_image_2d = "compressedTexSubImage2D" (target: GLenum, level: i32, x: i32, y: i32, width: i32, height: i32, format: GLenum, data: &[u8]);
    fn tex_storage_2d = "texStorage2D" (target: GLenum, levels: i32, internal_format: GLenum, width: i32, height: i32);
    fn tex_storage_3d = "texStorage3D" (target: GLenum, levels: i32, internal_format: GLenum, width: i32, height: i32, depth: i32);
    fn tex_parameter_i = "texParameteri" (target: GLenum, pname: GLenum, param: i32);
    fn tex_parameter_f = "texParameterf" (target: GLenum, pname: GLenum, param: f32);
    fn generate_mipmap = "generateMipmap" (target: GLenum);
    fn get_tex_level_parameter_iv = "getTexLevelParameteriv" (target: GLenum, level: i32, pname: GLenum) -> i32;
    fn pixel_store_i = "pixelStorei" (pname: GLenum, param: i32);

    fn gen_samplers = "genSamplers" (samplers: &mut [SamplerId]);
    fn delete_samplers = "deleteSamplers" (samplers: &[SamplerId]);
    fn bind_sampler = "bindSampler" (unit: u32, sampler: SamplerId);
    fn sampler_parameter_i = "samplerParameteri" (sampler: SamplerId, pname: GLenum, param: i32);

    fn gen_framebuffers = "genFramebuffers" (framebuffers: &mut [FramebufferId]);
    fn delete_framebuffers = "deleteFramebuffers" (framebuffers: &[FramebufferId]);
    fn bind_framebuffer = "bindFramebuffer" (target: GLenum, framebuffer: FramebufferId);
    fn framebuffer_texture_2d = "framebufferTexture2D" (target: GLenum, attachment: GLenum, texture_target: GLenum, texture: TextureId, level: i32);
    fn framebuffer_renderbuffer = "framebufferRenderbuffer" (target: GLenum, attachment: GLenum, renderbuffer_target: GLenum, renderbuffer: RenderbufferId);
    fn check_framebuffer_status = "checkFramebufferStatus" (target: GLenum) -> GLenum;
    fn blit_framebuffer = "blitFramebuffer" (src_x0: i32, src_y0: i32, src_x1: i32, src_y1: i32, dst_x0: i32, dst_y0: i32, dst_x1: i32, dst_y1: i32, mask: GLbitfield, filter: GLenum);
    fn draw_buffers = "drawBuffers" (buffers: &[GLenum]);
    fn read_buffer = "readBuffer" (src: GLenum);
    fn read_pixels = "readPixels" (x: i32, y: i32, width: i32, height: i32, format: GLenum, ty: GLenum, pixels: &mut [u8]);
    fn invalidate_framebuffer = "invalidateFramebuffer" (target: GLenum, attachments: &[GLenum]);

    fn gen_renderbuffers = "genRenderbuffers" (renderbuffers: &mut [RenderbufferId]);
    fn delete_renderbuffers = "deleteRenderbuffers" (renderbuffers: &[RenderbufferId]);
    fn bind_renderbuffer = "bindRenderbuffer" (target: GLenum, renderbuffer: RenderbufferId);
    fn renderbuffer_storage = "renderbufferStorage" (target: GLenum, internal_format: GLenum, width: i32, height: i32);
    fn renderbuffer_storage_multisample = "renderbufferStorageMultisample" (target: GLenum, samples: i32, internal_format: GLenum, width: i32, height: i32);

    fn uniform_1i = "uniform1i" (location: UniformLocation, x: i32);
    fn uniform_2i = "uniform2i" (location: UniformLocation, x: i32, y: i32);
    fn uniform_3i = "uniform3i" (location: UniformLocation, x: i32, y: i32, z: i32);
    fn uniform_4i = "uniform4i" (location: UniformLocation, x: i32, y: i32, z: i32, w: i32);
    fn uniform_1ui = "uniform1ui" (location: UniformLocation, x: u32);
    fn uniform_1f = "uniform1f" (location: UniformLocation, x: f32);
    fn uniform_2f = "uniform2f" (location: UniformLocation, x: f32, y: f32);
    fn uniform_3f = "uniform3f" (location: UniformLocation, x: f32, y: f32, z: f32);
    fn uniform_4f = "uniform4f" (location: UniformLocation, x: f32, y: f32, z: f32, w: f32);
    fn uniform_1iv = "uniform1iv" (location: UniformLocation, values: &[i32]);
    fn uniform_1fv = "uniform1fv" (location: UniformLocation, values: &[f32]);
    fn uniform_2fv = "uniform2fv" (location: UniformLocation, values: &[f32]);
    fn uniform_3fv = "uniform3fv" (location: UniformLocation, values: &[f32]);
    fn uniform_4fv = "uniform4fv" (location: UniformLocation, values: &[f32]);
    fn uniform_matrix_2fv = "uniformMatrix2fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_3fv = "uniformMatrix3fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_4fv = "uniformMatrix4fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_2x3fv = "uniformMatrix2x3fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_3x2fv = "uniformMatrix3x2fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_2x4fv = "uniformMatrix2x4fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_4x2fv = "uniformMatrix4x2fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_3x4fv = "uniformMatrix3x4fv" (location: UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix_4x3fv = "uniformMatrix4x3fv" (location: UniformLocation, transpose: bool, values: &[f32]);

    fn draw_arrays = "drawArrays" (mode: GLenum, first: i32, count: i32);
    fn draw_elements = "drawElements" (mode: GLenum, count: i32, ty: GLenum, offset: usize);
    fn draw_range_elements = "drawRangeElements" (mode: GLenum, start: u32, end: u32, count: i32, ty: GLenum, offset: usize);
    fn draw_arrays_instanced = "drawArraysInstanced" (mode: GLenum, first: i32, count: i32, instances: i32);
    fn draw_elements_instanced = "drawElementsInstanced" (mode: GLenum, count: i32, ty: GLenum, offset: usize, instances: i32);
    fn multi_draw_arrays = "multiDrawArrays" (mode: GLenum, firsts: &[i32], counts: &[i32]);
    fn multi_draw_elements = "multiDrawElements" (mode: GLenum, counts: &[i32], ty: GLenum, offsets: &[usize]);
    fn draw_arrays_indirect = "drawArraysIndirect" (mode: GLenum, offset: usize);
    fn draw_elements_indirect = "drawElementsIndirect" (mode: GLenum, ty: GLenum, offset: usize);

    fn enable = "enable" (cap: GLenum);
    fn disable = "disable" (cap: GLenum);
    fn is_enabled = "isEnabled" (cap: GLenum) -> bool;
    fn blend_func = "blendFunc" (src: GLenum, dst: GLenum);
    fn blend_func_separate = "blendFuncSeparate" (src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum);
    fn blend_equation = "blendEquation" (mode: GLenum);
    fn blend_color = "blendColor" (r: f32, g: f32, b: f32, a: f32);
    fn depth_func = "depthFunc" (func: GLenum);
    fn depth_mask = "depthMask" (flag: bool);
    fn cull_face = "cullFace" (mode: GLenum);
    fn front_face = "frontFace" (mode: GLenum);
    fn polygon_mode = "polygonMode" (face: GLenum, mode: GLenum);
    fn polygon_offset = "polygonOffset" (factor: f32, units: f32);
    fn line_width = "lineWidth" (width: f32);
    fn color_mask = "colorMask" (r: bool, g: bool, b: bool, a: bool);
    fn stencil_func = "stencilFunc" (func: GLenum, reference: i32, mask: u32);
    fn stencil_op = "stencilOp" (stencil_fail: GLenum, depth_fail: GLenum, depth_pass: GLenum);
    fn stencil_mask = "stencilMask" (mask: u32);
    fn scissor = "scissor" (x: i32, y: i32, width: i32, height: i32);
    fn viewport = "viewport" (x: i32, y: i32, width: i32, height: i32);
    fn clear = "clear" (mask: GLbitfield);
    fn clear_color = "clearColor" (r: f32, g: f32, b: f32, a: f32);
    fn clear_depth = "clearDepth" (depth: f32);
    fn clear_stencil = "clearStencil" (stencil: i32);
    fn get_integer_v = "getIntegerv" (pname: GLenum, values: &mut [i32]);
    fn get_string = "getString" (name: GLenum) -> String;
    fn get_string_i = "getStringi" (name: GLenum, index: u32) -> String;
    fn flush = "flush" ();
    fn finish = "finish" ();

    fn gen_queries = "genQueries" (queries: &mut [QueryId]);
    fn delete_queries = "deleteQueries" (queries: &[QueryId]);
    fn begin_query = "beginQuery" (target: GLenum, query: QueryId);
    fn end_query = "endQuery" (target: GLenum);
    fn query_counter = "queryCounter" (query: QueryId, target: GLenum);
    fn get_query_object_u32 = "getQueryObjectuiv" (query: QueryId, pname: GLenum) -> u32;
    fn get_query_object_u64 = "getQueryObjectui64v" (query: QueryId, pname: GLenum) -> u64;
    fn memory_barrier = "memoryBarrier" (barriers: GLbitfield);

    fn gen_transform_feedbacks = "genTransformFeedbacks" (feedbacks: &mut [TransformFeedbackId]);
    fn delete_transform_feedbacks = "deleteTransformFeedbacks" (feedbacks: &[TransformFeedbackId]);
    fn bind_transform_feedback = "bindTransformFeedback" (target: GLenum, feedback: TransformFeedbackId);
    fn begin_transform_feedback = "beginTransformFeedback" (primitive_mode: GLenum);
    fn end_transform_feedback = "endTransformFeedback" ();

    fn push_debug_group = "pushDebugGroup" (source: GLenum, id: u32, message: &str);
    fn pop_debug_group = "popDebugGroup" ();
    fn object_label = "objectLabel" (identifier: GLenum, name: u32, label: &str);
    fn debug_message_insert = "debugMessageInsert" (source: GLenum, ty: GLenum, id: u32, severity: GLenum, message: &str);
    fn debug_message_control = "debugMessageControl" (source: GLenum, ty: GLenum, severity: GLenum, ids: &[u32], enabled: bool);
}
