pub use uapi::c;
use {
    crate::gfx_apis::gl::GlesLoadError,
    libloading::Library,
    std::{
        ffi::c_void,
        fmt::{Debug, Formatter},
        ptr,
    },
};

pub type GLboolean = c::c_uchar;
pub type GLchar = c::c_char;
pub type GLenum = c::c_uint;
pub type GLint = c::c_int;
pub type GLsizei = c::c_int;
pub type GLuint = c::c_uint;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;

pub const GL_ZERO: GLint = 0;
pub const GL_ONE: GLint = 1;

pub const GL_UNSIGNED_BYTE: GLenum = 0x1401;
pub const GL_UNSIGNED_SHORT: GLenum = 0x1403;
pub const GL_FLOAT: GLenum = 0x1406;
pub const GL_HALF_FLOAT: GLenum = 0x140B;
pub const GL_UNSIGNED_INT_8_8_8_8: GLenum = 0x8035;

pub const GL_RED: GLenum = 0x1903;
pub const GL_GREEN: GLenum = 0x1904;
pub const GL_BLUE: GLenum = 0x1905;
pub const GL_ALPHA: GLenum = 0x1906;
pub const GL_RGB: GLenum = 0x1907;
pub const GL_RGBA: GLenum = 0x1908;
pub const GL_BGRA: GLenum = 0x80E1;
pub const GL_RG: GLenum = 0x8227;

pub const GL_RGB8: GLint = 0x8051;
pub const GL_RGB16: GLint = 0x8054;
pub const GL_RGBA8: GLint = 0x8058;
pub const GL_RGBA16: GLint = 0x805B;
pub const GL_R8: GLint = 0x8229;
pub const GL_R16: GLint = 0x822A;
pub const GL_RG8: GLint = 0x822B;
pub const GL_RG16: GLint = 0x822C;
pub const GL_R16F: GLint = 0x822D;
pub const GL_R32F: GLint = 0x822E;
pub const GL_RGBA32F: GLint = 0x8814;
pub const GL_RGB32F: GLint = 0x8815;
pub const GL_RGBA16F: GLint = 0x881A;
pub const GL_RGB16F: GLint = 0x881B;
pub const GL_BGRA8_EXT: GLint = 0x93A1;

pub const GL_MAX_TEXTURE_SIZE: GLenum = 0x0D33;
pub const GL_TEXTURE_2D: GLenum = 0x0DE1;
pub const GL_TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const GL_TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const GL_TEXTURE_WRAP_S: GLenum = 0x2802;
pub const GL_TEXTURE_WRAP_T: GLenum = 0x2803;
pub const GL_TEXTURE_SWIZZLE_R: GLenum = 0x8E42;
pub const GL_TEXTURE_SWIZZLE_G: GLenum = 0x8E43;
pub const GL_TEXTURE_SWIZZLE_B: GLenum = 0x8E44;
pub const GL_TEXTURE_SWIZZLE_A: GLenum = 0x8E45;

pub const GL_NEAREST: GLint = 0x2600;
pub const GL_LINEAR: GLint = 0x2601;
pub const GL_LINEAR_MIPMAP_LINEAR: GLint = 0x2703;
pub const GL_REPEAT: GLint = 0x2901;
pub const GL_CLAMP_TO_BORDER: GLint = 0x812D;
pub const GL_CLAMP_TO_EDGE: GLint = 0x812F;

pub const GL_FRAGMENT_SHADER: GLenum = 0x8B30;
pub const GL_VERTEX_SHADER: GLenum = 0x8B31;
pub const GL_COMPILE_STATUS: GLenum = 0x8B81;
pub const GL_LINK_STATUS: GLenum = 0x8B82;
pub const GL_INFO_LOG_LENGTH: GLenum = 0x8B84;

dynload! {
    GlesV2 from "libGLESv2.so.2" {
        glGetIntegerv: unsafe fn(pname: GLenum, data: *mut GLint),

        glCreateShader: unsafe fn(ty: GLenum) -> GLuint,
        glDeleteShader: unsafe fn(shader: GLuint),
        glShaderSource: unsafe fn(
            shader: GLuint,
            count: GLsizei,
            string: *const *const GLchar,
            length: *const GLint,
        ),
        glCompileShader: unsafe fn(shader: GLuint),
        glGetShaderiv: unsafe fn(shader: GLuint, pname: GLenum, params: *mut GLint),
        glGetShaderInfoLog: unsafe fn(
            shader: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        ),

        glCreateProgram: unsafe fn() -> GLuint,
        glDeleteProgram: unsafe fn(prog: GLuint),
        glAttachShader: unsafe fn(prog: GLuint, shader: GLuint),
        glDetachShader: unsafe fn(prog: GLuint, shader: GLuint),
        glBindAttribLocation: unsafe fn(prog: GLuint, index: GLuint, name: *const GLchar),
        glLinkProgram: unsafe fn(prog: GLuint),
        glGetProgramiv: unsafe fn(prog: GLuint, pname: GLenum, params: *mut GLint),
        glGetProgramInfoLog: unsafe fn(
            prog: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        ),
        glUseProgram: unsafe fn(prog: GLuint),
        glGetUniformLocation: unsafe fn(prog: GLuint, name: *const GLchar) -> GLint,
        glUniform1i: unsafe fn(location: GLint, v0: GLint),

        glGenSamplers: unsafe fn(n: GLsizei, samplers: *mut GLuint),
        glDeleteSamplers: unsafe fn(n: GLsizei, samplers: *const GLuint),
        glSamplerParameteri: unsafe fn(sampler: GLuint, pname: GLenum, param: GLint),

        glGenTextures: unsafe fn(n: GLsizei, textures: *mut GLuint),
        glDeleteTextures: unsafe fn(n: GLsizei, textures: *const GLuint),
        glBindTexture: unsafe fn(target: GLenum, texture: GLuint),
        glTexParameteri: unsafe fn(target: GLenum, pname: GLenum, param: GLint),
        glTexImage2D: unsafe fn(
            target: GLenum,
            level: GLint,
            internalformat: GLint,
            width: GLsizei,
            height: GLsizei,
            border: GLint,
            format: GLenum,
            ty: GLenum,
            pixels: *const c_void,
        ),
    }
}

/// A [`GlesV2`] table together with the library it was loaded from.
pub struct GlesLibrary {
    pub procs: GlesV2,
    _lib: Library,
}

impl GlesLibrary {
    pub fn open() -> Result<Self, GlesLoadError> {
        let lib = unsafe { Library::new(GlesV2::LIBRARY) }.map_err(GlesLoadError::Open)?;
        let procs = GlesV2::load(|name| unsafe {
            match lib.get::<*mut c_void>(name.to_bytes_with_nul()) {
                Ok(sym) if !(*sym).is_null() => *sym,
                _ => ptr::null_mut(),
            }
        })?;
        Ok(Self { procs, _lib: lib })
    }
}

impl Debug for GlesLibrary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlesLibrary").finish_non_exhaustive()
    }
}
