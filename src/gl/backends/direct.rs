//! Forwards to the function table resolved by the `gl` crate's loader.
//!
//! The table is process-global and filled in by `DirectFunctions::load_with`,
//! which must run once a context is current, e.g. with glutin:
//!
//! ```ignore
//! DirectFunctions::load_with(|symbol| window.get_proc_address(symbol) as *const _);
//! nether::gl::install_direct()?;
//! ```

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_void};
use std::ptr;

use ::gl::types::{GLboolean, GLchar, GLint, GLsizei, GLubyte};
use smallvec::SmallVec;

use crate::gl::types::{self, GLbitfield, GLenum};
use crate::gl::GlFunctions;
use crate::utils::handle::*;

/// The driver-loaded backend. It holds no state of its own.
#[derive(Debug, Default, Copy, Clone)]
pub struct DirectFunctions;

impl DirectFunctions {
    /// Resolves every entry point with `loader`, which maps a symbol name such
    /// as `glCompileShader` to its address in the current context.
    pub fn load_with<F>(loader: F)
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        ::gl::load_with(loader);
    }

    /// Whether the loader has resolved the core entry points.
    pub fn is_loaded() -> bool {
        ::gl::GetError::is_loaded() && ::gl::CreateShader::is_loaded()
    }
}

#[inline]
fn boolean(v: bool) -> GLboolean {
    if v {
        ::gl::TRUE
    } else {
        ::gl::FALSE
    }
}

/// Number of `n`-component elements in `values`.
#[inline]
fn elements(values: &[f32], n: usize) -> GLsizei {
    debug_assert_eq!(
        values.len() % n,
        0,
        "[GL] {} values do not split into {}-component elements.",
        values.len(),
        n
    );
    (values.len() / n) as GLsizei
}

#[inline]
fn byte_offset(v: usize) -> *const c_void {
    v as *const c_void
}

#[inline]
fn bytes(data: Option<&[u8]>) -> *const c_void {
    data.map(|v| v.as_ptr() as *const c_void)
        .unwrap_or_else(ptr::null)
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

unsafe fn c_string(v: *const GLubyte) -> String {
    if v.is_null() {
        String::new()
    } else {
        CStr::from_ptr(v as *const c_char).to_string_lossy().into_owned()
    }
}

impl GlFunctions for DirectFunctions {
    unsafe fn create_shader(&self, ty: GLenum) -> ShaderId {
        ShaderId::new(::gl::CreateShader(ty))
    }

    unsafe fn shader_source(&self, shader: ShaderId, sources: &[&str]) {
        let strings: SmallVec<[*const GLchar; 4]> = sources
            .iter()
            .map(|v| v.as_ptr() as *const GLchar)
            .collect();
        let lengths: SmallVec<[GLint; 4]> = sources.iter().map(|v| v.len() as GLint).collect();

        ::gl::ShaderSource(
            shader.raw(),
            sources.len() as GLsizei,
            strings.as_ptr(),
            lengths.as_ptr(),
        );
    }

    unsafe fn compile_shader(&self, shader: ShaderId) {
        ::gl::CompileShader(shader.raw());
    }

    unsafe fn delete_shader(&self, shader: ShaderId) {
        ::gl::DeleteShader(shader.raw());
    }

    unsafe fn get_shader_iv(&self, shader: ShaderId, pname: GLenum) -> i32 {
        let mut v = 0;
        ::gl::GetShaderiv(shader.raw(), pname, &mut v);
        v
    }

    unsafe fn get_shader_info_log(&self, shader: ShaderId, buf: &mut [u8]) -> usize {
        let mut len = 0;
        ::gl::GetShaderInfoLog(
            shader.raw(),
            buf.len() as GLsizei,
            &mut len,
            buf.as_mut_ptr() as *mut GLchar,
        );
        len.max(0) as usize
    }

    unsafe fn create_program(&self) -> ProgramId {
        ProgramId::new(::gl::CreateProgram())
    }

    unsafe fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        ::gl::AttachShader(program.raw(), shader.raw());
    }

    unsafe fn detach_shader(&self, program: ProgramId, shader: ShaderId) {
        ::gl::DetachShader(program.raw(), shader.raw());
    }

    unsafe fn link_program(&self, program: ProgramId) {
        ::gl::LinkProgram(program.raw());
    }

    unsafe fn validate_program(&self, program: ProgramId) {
        ::gl::ValidateProgram(program.raw());
    }

    unsafe fn use_program(&self, program: ProgramId) {
        ::gl::UseProgram(program.raw());
    }

    unsafe fn delete_program(&self, program: ProgramId) {
        ::gl::DeleteProgram(program.raw());
    }

    unsafe fn get_program_iv(&self, program: ProgramId, pname: GLenum) -> i32 {
        let mut v = 0;
        ::gl::GetProgramiv(program.raw(), pname, &mut v);
        v
    }

    unsafe fn get_program_info_log(&self, program: ProgramId, buf: &mut [u8]) -> usize {
        let mut len = 0;
        ::gl::GetProgramInfoLog(
            program.raw(),
            buf.len() as GLsizei,
            &mut len,
            buf.as_mut_ptr() as *mut GLchar,
        );
        len.max(0) as usize
    }

    unsafe fn get_uniform_location(
        &self,
        program: ProgramId,
        name: &str,
    ) -> Option<UniformLocation> {
        let name = c_name(name)?;
        match ::gl::GetUniformLocation(program.raw(), name.as_ptr()) {
            -1 => None,
            v => Some(UniformLocation::new(v)),
        }
    }

    unsafe fn get_attrib_location(&self, program: ProgramId, name: &str) -> Option<u32> {
        let name = c_name(name)?;
        match ::gl::GetAttribLocation(program.raw(), name.as_ptr()) {
            v if v < 0 => None,
            v => Some(v as u32),
        }
    }

    unsafe fn bind_attrib_location(&self, program: ProgramId, index: u32, name: &str) {
        if let Some(name) = c_name(name) {
            ::gl::BindAttribLocation(program.raw(), index, name.as_ptr());
        }
    }

    unsafe fn get_uniform_block_index(&self, program: ProgramId, name: &str) -> Option<u32> {
        let name = c_name(name)?;
        match ::gl::GetUniformBlockIndex(program.raw(), name.as_ptr()) {
            types::INVALID_INDEX => None,
            v => Some(v),
        }
    }

    unsafe fn uniform_block_binding(&self, program: ProgramId, block: u32, binding: u32) {
        ::gl::UniformBlockBinding(program.raw(), block, binding);
    }

    unsafe fn gen_buffers(&self, buffers: &mut [BufferId]) {
        let ids = as_raw_mut(buffers);
        ::gl::GenBuffers(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_buffers(&self, buffers: &[BufferId]) {
        let ids = as_raw(buffers);
        ::gl::DeleteBuffers(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn bind_buffer(&self, target: GLenum, buffer: BufferId) {
        ::gl::BindBuffer(target, buffer.raw());
    }

    unsafe fn bind_buffer_base(&self, target: GLenum, index: u32, buffer: BufferId) {
        ::gl::BindBufferBase(target, index, buffer.raw());
    }

    unsafe fn bind_buffer_range(
        &self,
        target: GLenum,
        index: u32,
        buffer: BufferId,
        offset: isize,
        size: isize,
    ) {
        ::gl::BindBufferRange(target, index, buffer.raw(), offset, size);
    }

    unsafe fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) {
        ::gl::BufferData(
            target,
            data.len() as isize,
            data.as_ptr() as *const c_void,
            usage,
        );
    }

    unsafe fn buffer_data_size(&self, target: GLenum, size: isize, usage: GLenum) {
        ::gl::BufferData(target, size, ptr::null(), usage);
    }

    unsafe fn buffer_sub_data(&self, target: GLenum, offset: isize, data: &[u8]) {
        ::gl::BufferSubData(
            target,
            offset,
            data.len() as isize,
            data.as_ptr() as *const c_void,
        );
    }

    unsafe fn buffer_storage(
        &self,
        target: GLenum,
        size: isize,
        data: Option<&[u8]>,
        flags: GLbitfield,
    ) {
        ::gl::BufferStorage(target, size, bytes(data), flags);
    }

    unsafe fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: isize,
        write_offset: isize,
        size: isize,
    ) {
        ::gl::CopyBufferSubData(read_target, write_target, read_offset, write_offset, size);
    }

    unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: isize,
        length: isize,
        access: GLbitfield,
    ) -> *mut c_void {
        ::gl::MapBufferRange(target, offset, length, access)
    }

    unsafe fn flush_mapped_buffer_range(&self, target: GLenum, offset: isize, length: isize) {
        ::gl::FlushMappedBufferRange(target, offset, length);
    }

    unsafe fn unmap_buffer(&self, target: GLenum) -> bool {
        ::gl::UnmapBuffer(target) == ::gl::TRUE
    }

    unsafe fn gen_vertex_arrays(&self, arrays: &mut [VertexArrayId]) {
        let ids = as_raw_mut(arrays);
        ::gl::GenVertexArrays(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_vertex_arrays(&self, arrays: &[VertexArrayId]) {
        let ids = as_raw(arrays);
        ::gl::DeleteVertexArrays(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn bind_vertex_array(&self, array: VertexArrayId) {
        ::gl::BindVertexArray(array.raw());
    }

    unsafe fn enable_vertex_attrib_array(&self, index: u32) {
        ::gl::EnableVertexAttribArray(index);
    }

    unsafe fn disable_vertex_attrib_array(&self, index: u32) {
        ::gl::DisableVertexAttribArray(index);
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
        ::gl::VertexAttribPointer(index, size, ty, boolean(normalized), stride, byte_offset(offset));
    }

    unsafe fn vertex_attrib_i_pointer(
        &self,
        index: u32,
        size: i32,
        ty: GLenum,
        stride: i32,
        offset: usize,
    ) {
        ::gl::VertexAttribIPointer(index, size, ty, stride, byte_offset(offset));
    }

    unsafe fn vertex_attrib_divisor(&self, index: u32, divisor: u32) {
        ::gl::VertexAttribDivisor(index, divisor);
    }

    unsafe fn gen_textures(&self, textures: &mut [TextureId]) {
        let ids = as_raw_mut(textures);
        ::gl::GenTextures(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_textures(&self, textures: &[TextureId]) {
        let ids = as_raw(textures);
        ::gl::DeleteTextures(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn bind_texture(&self, target: GLenum, texture: TextureId) {
        ::gl::BindTexture(target, texture.raw());
    }

    unsafe fn active_texture(&self, unit: GLenum) {
        ::gl::ActiveTexture(unit);
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
        ::gl::TexImage2D(
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
        ::gl::TexImage3D(
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
        ::gl::TexSubImage2D(
            target,
            level,
            x,
            y,
            width,
            height,
            format,
            ty,
            pixels.as_ptr() as *const c_void,
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
        ::gl::TexSubImage3D(
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
            pixels.as_ptr() as *const c_void,
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
        ::gl::CompressedTexImage2D(
            target,
            level,
            internal_format,
            width,
            height,
            border,
            data.len() as GLsizei,
            data.as_ptr() as *const c_void,
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
        ::gl::CompressedTexImage3D(
            target,
            level,
            internal_format,
            width,
            height,
            depth,
            border,
            data.len() as GLsizei,
            data.as_ptr() as *const c_void,
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
        ::gl::CompressedTexSubImage2D(
            target,
            level,
            x,
            y,
            width,
            height,
            format,
            data.len() as GLsizei,
            data.as_ptr() as *const c_void,
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
        ::gl::TexStorage2D(target, levels, internal_format, width, height);
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
        ::gl::TexStorage3D(target, levels, internal_format, width, height, depth);
    }

    unsafe fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: i32) {
        ::gl::TexParameteri(target, pname, param);
    }

    unsafe fn tex_parameter_f(&self, target: GLenum, pname: GLenum, param: f32) {
        ::gl::TexParameterf(target, pname, param);
    }

    unsafe fn generate_mipmap(&self, target: GLenum) {
        ::gl::GenerateMipmap(target);
    }

    unsafe fn get_tex_level_parameter_iv(&self, target: GLenum, level: i32, pname: GLenum) -> i32 {
        let mut v = 0;
        ::gl::GetTexLevelParameteriv(target, level, pname, &mut v);
        v
    }

    unsafe fn pixel_store_i(&self, pname: GLenum, param: i32) {
        ::gl::PixelStorei(pname, param);
    }

    unsafe fn gen_samplers(&self, samplers: &mut [SamplerId]) {
        let ids = as_raw_mut(samplers);
        ::gl::GenSamplers(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_samplers(&self, samplers: &[SamplerId]) {
        let ids = as_raw(samplers);
        ::gl::DeleteSamplers(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn bind_sampler(&self, unit: u32, sampler: SamplerId) {
        ::gl::BindSampler(unit, sampler.raw());
    }

    unsafe fn sampler_parameter_i(&self, sampler: SamplerId, pname: GLenum, param: i32) {
        ::gl::SamplerParameteri(sampler.raw(), pname, param);
    }

    unsafe fn gen_framebuffers(&self, framebuffers: &mut [FramebufferId]) {
        let ids = as_raw_mut(framebuffers);
        ::gl::GenFramebuffers(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_framebuffers(&self, framebuffers: &[FramebufferId]) {
        let ids = as_raw(framebuffers);
        ::gl::DeleteFramebuffers(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn bind_framebuffer(&self, target: GLenum, framebuffer: FramebufferId) {
        ::gl::BindFramebuffer(target, framebuffer.raw());
    }

    unsafe fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture_target: GLenum,
        texture: TextureId,
        level: i32,
    ) {
        ::gl::FramebufferTexture2D(target, attachment, texture_target, texture.raw(), level);
    }

    unsafe fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: RenderbufferId,
    ) {
        ::gl::FramebufferRenderbuffer(target, attachment, renderbuffer_target, renderbuffer.raw());
    }

    unsafe fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        ::gl::CheckFramebufferStatus(target)
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
        ::gl::BlitFramebuffer(
            src_x0, src_y0, src_x1, src_y1, dst_x0, dst_y0, dst_x1, dst_y1, mask, filter,
        );
    }

    unsafe fn draw_buffers(&self, buffers: &[GLenum]) {
        ::gl::DrawBuffers(buffers.len() as GLsizei, buffers.as_ptr());
    }

    unsafe fn read_buffer(&self, src: GLenum) {
        ::gl::ReadBuffer(src);
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
        ::gl::ReadPixels(
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
        ::gl::InvalidateFramebuffer(target, attachments.len() as GLsizei, attachments.as_ptr());
    }

    unsafe fn gen_renderbuffers(&self, renderbuffers: &mut [RenderbufferId]) {
        let ids = as_raw_mut(renderbuffers);
        ::gl::GenRenderbuffers(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_renderbuffers(&self, renderbuffers: &[RenderbufferId]) {
        let ids = as_raw(renderbuffers);
        ::gl::DeleteRenderbuffers(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn bind_renderbuffer(&self, target: GLenum, renderbuffer: RenderbufferId) {
        ::gl::BindRenderbuffer(target, renderbuffer.raw());
    }

    unsafe fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: i32,
        height: i32,
    ) {
        ::gl::RenderbufferStorage(target, internal_format, width, height);
    }

    unsafe fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: i32,
        internal_format: GLenum,
        width: i32,
        height: i32,
    ) {
        ::gl::RenderbufferStorageMultisample(target, samples, internal_format, width, height);
    }

    unsafe fn uniform_1i(&self, location: UniformLocation, x: i32) {
        ::gl::Uniform1i(location.raw(), x);
    }

    unsafe fn uniform_2i(&self, location: UniformLocation, x: i32, y: i32) {
        ::gl::Uniform2i(location.raw(), x, y);
    }

    unsafe fn uniform_3i(&self, location: UniformLocation, x: i32, y: i32, z: i32) {
        ::gl::Uniform3i(location.raw(), x, y, z);
    }

    unsafe fn uniform_4i(&self, location: UniformLocation, x: i32, y: i32, z: i32, w: i32) {
        ::gl::Uniform4i(location.raw(), x, y, z, w);
    }

    unsafe fn uniform_1ui(&self, location: UniformLocation, x: u32) {
        ::gl::Uniform1ui(location.raw(), x);
    }

    unsafe fn uniform_1f(&self, location: UniformLocation, x: f32) {
        ::gl::Uniform1f(location.raw(), x);
    }

    unsafe fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) {
        ::gl::Uniform2f(location.raw(), x, y);
    }

    unsafe fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) {
        ::gl::Uniform3f(location.raw(), x, y, z);
    }

    unsafe fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) {
        ::gl::Uniform4f(location.raw(), x, y, z, w);
    }

    unsafe fn uniform_1iv(&self, location: UniformLocation, values: &[i32]) {
        ::gl::Uniform1iv(location.raw(), values.len() as GLsizei, values.as_ptr());
    }

    unsafe fn uniform_1fv(&self, location: UniformLocation, values: &[f32]) {
        ::gl::Uniform1fv(location.raw(), elements(values, 1), values.as_ptr());
    }

    unsafe fn uniform_2fv(&self, location: UniformLocation, values: &[f32]) {
        ::gl::Uniform2fv(location.raw(), elements(values, 2), values.as_ptr());
    }

    unsafe fn uniform_3fv(&self, location: UniformLocation, values: &[f32]) {
        ::gl::Uniform3fv(location.raw(), elements(values, 3), values.as_ptr());
    }

    unsafe fn uniform_4fv(&self, location: UniformLocation, values: &[f32]) {
        ::gl::Uniform4fv(location.raw(), elements(values, 4), values.as_ptr());
    }

    unsafe fn uniform_matrix_2fv(&self, location: UniformLocation, transpose: bool, values: &[f32]) {
        let n = elements(values, 4);
        ::gl::UniformMatrix2fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_3fv(&self, location: UniformLocation, transpose: bool, values: &[f32]) {
        let n = elements(values, 9);
        ::gl::UniformMatrix3fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_4fv(&self, location: UniformLocation, transpose: bool, values: &[f32]) {
        let n = elements(values, 16);
        ::gl::UniformMatrix4fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_2x3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        let n = elements(values, 6);
        ::gl::UniformMatrix2x3fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_3x2fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        let n = elements(values, 6);
        ::gl::UniformMatrix3x2fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_2x4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        let n = elements(values, 8);
        ::gl::UniformMatrix2x4fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_4x2fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        let n = elements(values, 8);
        ::gl::UniformMatrix4x2fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_3x4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        let n = elements(values, 12);
        ::gl::UniformMatrix3x4fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn uniform_matrix_4x3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) {
        let n = elements(values, 12);
        ::gl::UniformMatrix4x3fv(location.raw(), n, boolean(transpose), values.as_ptr());
    }

    unsafe fn draw_arrays(&self, mode: GLenum, first: i32, count: i32) {
        ::gl::DrawArrays(mode, first, count);
    }

    unsafe fn draw_elements(&self, mode: GLenum, count: i32, ty: GLenum, offset: usize) {
        ::gl::DrawElements(mode, count, ty, byte_offset(offset));
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
        ::gl::DrawRangeElements(mode, start, end, count, ty, byte_offset(offset));
    }

    unsafe fn draw_arrays_instanced(&self, mode: GLenum, first: i32, count: i32, instances: i32) {
        ::gl::DrawArraysInstanced(mode, first, count, instances);
    }

    unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: i32,
        ty: GLenum,
        offset: usize,
        instances: i32,
    ) {
        ::gl::DrawElementsInstanced(mode, count, ty, byte_offset(offset), instances);
    }

    unsafe fn multi_draw_arrays(&self, mode: GLenum, firsts: &[i32], counts: &[i32]) {
        let n = firsts.len().min(counts.len());
        ::gl::MultiDrawArrays(mode, firsts.as_ptr(), counts.as_ptr(), n as GLsizei);
    }

    unsafe fn multi_draw_elements(
        &self,
        mode: GLenum,
        counts: &[i32],
        ty: GLenum,
        offsets: &[usize],
    ) {
        let n = counts.len().min(offsets.len());
        let indices: SmallVec<[*const c_void; 8]> =
            offsets[..n].iter().map(|&v| byte_offset(v)).collect();

        ::gl::MultiDrawElements(mode, counts.as_ptr(), ty, indices.as_ptr(), n as GLsizei);
    }

    unsafe fn draw_arrays_indirect(&self, mode: GLenum, offset: usize) {
        ::gl::DrawArraysIndirect(mode, byte_offset(offset));
    }

    unsafe fn draw_elements_indirect(&self, mode: GLenum, ty: GLenum, offset: usize) {
        ::gl::DrawElementsIndirect(mode, ty, byte_offset(offset));
    }

    unsafe fn enable(&self, cap: GLenum) {
        ::gl::Enable(cap);
    }

    unsafe fn disable(&self, cap: GLenum) {
        ::gl::Disable(cap);
    }

    unsafe fn is_enabled(&self, cap: GLenum) -> bool {
        ::gl::IsEnabled(cap) == ::gl::TRUE
    }

    unsafe fn blend_func(&self, src: GLenum, dst: GLenum) {
        ::gl::BlendFunc(src, dst);
    }

    unsafe fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        ::gl::BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha);
    }

    unsafe fn blend_equation(&self, mode: GLenum) {
        ::gl::BlendEquation(mode);
    }

    unsafe fn blend_color(&self, r: f32, g: f32, b: f32, a: f32) {
        ::gl::BlendColor(r, g, b, a);
    }

    unsafe fn depth_func(&self, func: GLenum) {
        ::gl::DepthFunc(func);
    }

    unsafe fn depth_mask(&self, flag: bool) {
        ::gl::DepthMask(boolean(flag));
    }

    unsafe fn cull_face(&self, mode: GLenum) {
        ::gl::CullFace(mode);
    }

    unsafe fn front_face(&self, mode: GLenum) {
        ::gl::FrontFace(mode);
    }

    unsafe fn polygon_mode(&self, face: GLenum, mode: GLenum) {
        ::gl::PolygonMode(face, mode);
    }

    unsafe fn polygon_offset(&self, factor: f32, units: f32) {
        ::gl::PolygonOffset(factor, units);
    }

    unsafe fn line_width(&self, width: f32) {
        ::gl::LineWidth(width);
    }

    unsafe fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) {
        ::gl::ColorMask(boolean(r), boolean(g), boolean(b), boolean(a));
    }

    unsafe fn stencil_func(&self, func: GLenum, reference: i32, mask: u32) {
        ::gl::StencilFunc(func, reference, mask);
    }

    unsafe fn stencil_op(&self, stencil_fail: GLenum, depth_fail: GLenum, depth_pass: GLenum) {
        ::gl::StencilOp(stencil_fail, depth_fail, depth_pass);
    }

    unsafe fn stencil_mask(&self, mask: u32) {
        ::gl::StencilMask(mask);
    }

    unsafe fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        ::gl::Scissor(x, y, width, height);
    }

    unsafe fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        ::gl::Viewport(x, y, width, height);
    }

    unsafe fn clear(&self, mask: GLbitfield) {
        ::gl::Clear(mask);
    }

    unsafe fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        ::gl::ClearColor(r, g, b, a);
    }

    unsafe fn clear_depth(&self, depth: f32) {
        ::gl::ClearDepth(f64::from(depth));
    }

    unsafe fn clear_stencil(&self, stencil: i32) {
        ::gl::ClearStencil(stencil);
    }

    unsafe fn get_integer_v(&self, pname: GLenum, values: &mut [i32]) {
        if !values.is_empty() {
            ::gl::GetIntegerv(pname, values.as_mut_ptr());
        }
    }

    unsafe fn get_string(&self, name: GLenum) -> String {
        c_string(::gl::GetString(name))
    }

    unsafe fn get_string_i(&self, name: GLenum, index: u32) -> String {
        c_string(::gl::GetStringi(name, index))
    }

    unsafe fn flush(&self) {
        ::gl::Flush();
    }

    unsafe fn finish(&self) {
        ::gl::Finish();
    }

    unsafe fn gen_queries(&self, queries: &mut [QueryId]) {
        let ids = as_raw_mut(queries);
        ::gl::GenQueries(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_queries(&self, queries: &[QueryId]) {
        let ids = as_raw(queries);
        ::gl::DeleteQueries(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn begin_query(&self, target: GLenum, query: QueryId) {
        ::gl::BeginQuery(target, query.raw());
    }

    unsafe fn end_query(&self, target: GLenum) {
        ::gl::EndQuery(target);
    }

    unsafe fn query_counter(&self, query: QueryId, target: GLenum) {
        ::gl::QueryCounter(query.raw(), target);
    }

    unsafe fn get_query_object_u32(&self, query: QueryId, pname: GLenum) -> u32 {
        let mut v = 0;
        ::gl::GetQueryObjectuiv(query.raw(), pname, &mut v);
        v
    }

    unsafe fn get_query_object_u64(&self, query: QueryId, pname: GLenum) -> u64 {
        let mut v = 0;
        ::gl::GetQueryObjectui64v(query.raw(), pname, &mut v);
        v
    }

    unsafe fn memory_barrier(&self, barriers: GLbitfield) {
        ::gl::MemoryBarrier(barriers);
    }

    unsafe fn gen_transform_feedbacks(&self, feedbacks: &mut [TransformFeedbackId]) {
        let ids = as_raw_mut(feedbacks);
        ::gl::GenTransformFeedbacks(ids.len() as GLsizei, ids.as_mut_ptr());
    }

    unsafe fn delete_transform_feedbacks(&self, feedbacks: &[TransformFeedbackId]) {
        let ids = as_raw(feedbacks);
        ::gl::DeleteTransformFeedbacks(ids.len() as GLsizei, ids.as_ptr());
    }

    unsafe fn bind_transform_feedback(&self, target: GLenum, feedback: TransformFeedbackId) {
        ::gl::BindTransformFeedback(target, feedback.raw());
    }

    unsafe fn begin_transform_feedback(&self, primitive_mode: GLenum) {
        ::gl::BeginTransformFeedback(primitive_mode);
    }

    unsafe fn end_transform_feedback(&self) {
        ::gl::EndTransformFeedback();
    }

    unsafe fn push_debug_group(&self, source: GLenum, id: u32, message: &str) {
        ::gl::PushDebugGroup(
            source,
            id,
            message.len() as GLsizei,
            message.as_ptr() as *const GLchar,
        );
    }

    unsafe fn pop_debug_group(&self) {
        ::gl::PopDebugGroup();
    }

    unsafe fn object_label(&self, identifier: GLenum, name: u32, label: &str) {
        ::gl::ObjectLabel(
            identifier,
            name,
            label.len() as GLsizei,
            label.as_ptr() as *const GLchar,
        );
    }

    unsafe fn debug_message_insert(
        &self,
        source: GLenum,
        ty: GLenum,
        id: u32,
        severity: GLenum,
        message: &str,
    ) {
        ::gl::DebugMessageInsert(
            source,
            ty,
            id,
            severity,
            message.len() as GLsizei,
            message.as_ptr() as *const GLchar,
        );
    }

    unsafe fn debug_message_control(
        &self,
        source: GLenum,
        ty: GLenum,
        severity: GLenum,
        ids: &[u32],
        enabled: bool,
    ) {
        ::gl::DebugMessageControl(
            source,
            ty,
            severity,
            ids.len() as GLsizei,
            ids.as_ptr(),
            boolean(enabled),
        );
    }

    unsafe fn get_error(&self) -> GLenum {
        ::gl::GetError()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unloaded() {
        assert!(!DirectFunctions::is_loaded());
    }

    #[test]
    fn interior_nul_is_rejected() {
        assert!(c_name("u_color").is_some());
        assert!(c_name("u_\0color").is_none());
    }

    #[test]
    fn element_counts() {
        assert_eq!(elements(&[0.0; 12], 3), 4);
        assert_eq!(elements(&[0.0; 16], 16), 1);
        assert_eq!(elements(&[], 4), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "do not split into 4-component elements")]
    fn partial_elements_are_rejected() {
        elements(&[0.0; 6], 4);
    }
}
