use {
    crate::{
        format::MemoryFormat,
        gfx_api::GfxError,
        gfx_apis::gl::{GlDeviceError, sys::GlesV2},
    },
    linearize::Linearize,
    serde::{Deserialize, Serialize},
    std::fmt::{Debug, Display, Formatter},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlApi {
    Gl,
    Gles,
}

impl GlApi {
    pub fn name(self) -> &'static str {
        match self {
            GlApi::Gl => "gl",
            GlApi::Gles => "gles",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Display for GlVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

bitflags! {
    GlFormatFlags: u32;
    GL_FORMAT_USABLE = 1 << 0,
    GL_FORMAT_RENDERABLE = 1 << 1,
    GL_FORMAT_FILTERABLE = 1 << 2,
}

/// The capability queries format negotiation depends on.
pub trait GlCaps {
    fn api(&self) -> GlApi;

    /// The raw capabilities of the context for `format`.
    fn format_flags(&self, format: MemoryFormat) -> GlFormatFlags;
}

pub trait GlContext: GlCaps + Debug {
    fn make_current(&self) -> Result<(), GfxError>;

    fn version(&self) -> GlVersion;

    /// The `#version` line shaders must start with.
    fn glsl_version_string(&self) -> &str;

    fn gles(&self) -> &GlesV2;

    fn check_version(&self, gl_min: GlVersion, gles_min: GlVersion) -> bool {
        let min = match self.api() {
            GlApi::Gl => gl_min,
            GlApi::Gles => gles_min,
        };
        self.version() >= min
    }
}

impl dyn GlContext {
    pub fn is_gles(&self) -> bool {
        self.api() == GlApi::Gles
    }

    #[inline]
    pub(in crate::gfx_apis::gl) fn with_current<T, F>(&self, f: F) -> Result<T, GlDeviceError>
    where
        F: FnOnce(&GlesV2) -> Result<T, GlDeviceError>,
    {
        self.make_current().map_err(GlDeviceError::MakeCurrent)?;
        f(self.gles())
    }
}
