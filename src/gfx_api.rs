use {
    crate::format::{MemoryDepth, MemoryFormat},
    linearize::Linearize,
    std::{
        error::Error,
        ffi::CStr,
        fmt::{Debug, Formatter},
        hash::{Hash, Hasher},
        ptr,
        rc::Rc,
    },
    thiserror::Error,
};

/// A shader operation of the renderer.
///
/// Operations are statics and are identified by their address. Two operations with
/// the same name are still distinct cache entries.
pub struct ShaderOp {
    /// The name under which the shader source is looked up.
    pub name: &'static str,
    /// Vertex attributes. The attribute at index `i` is bound to location `i`.
    pub attribs: &'static [&'static CStr],
}

impl ShaderOp {
    pub const fn new(name: &'static str, attribs: &'static [&'static CStr]) -> Self {
        Self { name, attribs }
    }
}

impl Debug for ShaderOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderOp")
            .field("name", &self.name)
            .field("addr", &(self as *const Self))
            .finish()
    }
}

/// A reference to a [`ShaderOp`] that compares and hashes by address.
#[derive(Copy, Clone, Debug)]
pub struct ShaderOpRef(pub &'static ShaderOp);

impl PartialEq for ShaderOpRef {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Eq for ShaderOpRef {}

impl Hash for ShaderOpRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum ShaderClip {
    None,
    Rect,
    Rounded,
}

impl ShaderClip {
    pub fn define(self) -> &'static str {
        match self {
            ShaderClip::None => "GPU_SHADER_CLIP_NONE",
            ShaderClip::Rect => "GPU_SHADER_CLIP_RECT",
            ShaderClip::Rounded => "GPU_SHADER_CLIP_ROUNDED",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderClip::None => "none",
            ShaderClip::Rect => "rect",
            ShaderClip::Rounded => "rounded",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum GpuSampler {
    Default,
    Transparent,
    Repeat,
    Nearest,
    MipmapDefault,
}

bitflags! {
    GpuImageFlags: u32;
    IMAGE_RENDERABLE = 1 << 0,
    IMAGE_FILTERABLE = 1 << 1,
    IMAGE_CAN_MIPMAP = 1 << 2,
    IMAGE_NO_BLIT = 1 << 3,
    IMAGE_STRAIGHT_ALPHA = 1 << 4,
}

#[derive(Error)]
#[error(transparent)]
pub struct GfxError(pub Box<dyn Error>);

impl Debug for GfxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

pub trait GpuImage: Debug {
    /// The logical format of the image.
    fn format(&self) -> MemoryFormat;

    fn flags(&self) -> GpuImageFlags;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}

/// A per-display GPU device.
pub trait GpuDevice: Debug {
    fn make_current(&self) -> Result<(), GfxError>;

    /// The largest width or height an image can have.
    fn max_image_size(&self) -> usize;

    /// Creates an image that can be rendered to and sampled with filtering.
    fn create_offscreen_image(
        &self,
        with_mipmap: bool,
        depth: MemoryDepth,
        width: usize,
        height: usize,
    ) -> Result<Rc<dyn GpuImage>, GfxError>;

    /// Creates an image that pixels are uploaded into.
    fn create_upload_image(
        &self,
        with_mipmap: bool,
        format: MemoryFormat,
        width: usize,
        height: usize,
    ) -> Result<Rc<dyn GpuImage>, GfxError>;

    fn create_download_image(
        &self,
        depth: MemoryDepth,
        width: usize,
        height: usize,
    ) -> Result<Rc<dyn GpuImage>, GfxError>;

    fn create_atlas_image(&self, width: usize, height: usize)
    -> Result<Rc<dyn GpuImage>, GfxError>;
}
