use {
    crate::{
        gfx_api::GfxError,
        gfx_apis::gl::gl::{program::ProgramLinkError, shader::ShaderCompileError},
        shaders::ShaderSourceError,
    },
    thiserror::Error,
};

pub mod context;
pub mod device;
pub mod display;
pub mod format;
pub mod gl;
pub mod preamble;
pub mod sys;

pub use {
    context::{GlApi, GlCaps, GlContext, GlFormatFlags, GlVersion},
    device::GlDevice,
    display::{DeviceRegistry, Display, DisplayId},
    format::GlFormatChoice,
};

#[derive(Debug, Error)]
pub enum GlDeviceError {
    #[error("Could not prepare the GL context of the display")]
    PrepareGl(#[source] GfxError),
    #[error("OpenGL ES 2.0 is not supported by this renderer.")]
    Gles2Unsupported,
    #[error("Could not make the GL context current")]
    MakeCurrent(#[source] GfxError),
    #[error("Could not load the source of shader `{0}`")]
    ShaderSource(&'static str, #[source] ShaderSourceError),
    #[error(transparent)]
    Compile(#[from] ShaderCompileError),
    #[error(transparent)]
    Link(#[from] ProgramLinkError),
    #[error("Image size {width}x{height} exceeds the maximum size {max}")]
    ImageTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
}

impl From<GlDeviceError> for GfxError {
    fn from(value: GlDeviceError) -> Self {
        Self(Box::new(value))
    }
}

#[derive(Debug, Error)]
pub enum GlesLoadError {
    #[error("Could not open the GLES library")]
    Open(#[source] libloading::Error),
    #[error("The GLES library does not export `{0}`")]
    MissingSymbol(&'static str),
}
