
use {
    crate::gfx_apis::gl::sys::{
        GL_ALPHA, GL_BGRA, GL_BGRA8_EXT, GL_BLUE, GL_FLOAT, GL_GREEN, GL_HALF_FLOAT, GL_ONE,
        GL_R8, GL_R16, GL_R16F, GL_R32F, GL_RED, GL_RG, GL_RG8, GL_RG16, GL_RGB, GL_RGB8,
        GL_RGB16, GL_RGB16F, GL_RGB32F, GL_RGBA, GL_RGBA8, GL_RGBA16, GL_RGBA16F, GL_RGBA32F,
        GL_UNSIGNED_BYTE, GL_UNSIGNED_INT_8_8_8_8, GL_UNSIGNED_SHORT, GLenum, GLint,
    },
    ahash::AHashMap,
    linearize::{Linearize, LinearizeExt},
    std::sync::LazyLock,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum MemoryFormat {
    B8G8R8A8Premultiplied,
    A8R8G8B8Premultiplied,
    R8G8B8A8Premultiplied,
    A8B8G8R8Premultiplied,
    B8G8R8A8,
    A8R8G8B8,
    R8G8B8A8,
    A8B8G8R8,
    B8G8R8X8,
    X8R8G8B8,
    R8G8B8X8,
    X8B8G8R8,
    R8G8B8,
    B8G8R8,
    R16G16B16,
    R16G16B16A16Premultiplied,
    R16G16B16A16,
    R16G16B16Float,
    R16G16B16A16FloatPremultiplied,
    R16G16B16A16Float,
    R32G32B32Float,
    R32G32B32A32FloatPremultiplied,
    R32G32B32A32Float,
    G8A8Premultiplied,
    G8A8,
    G8,
    G16A16Premultiplied,
    G16A16,
    G16,
    A8,
    A16,
    A16Float,
    A32Float,
}

/// The format used when callers have no preference.
pub const MEMORY_DEFAULT: MemoryFormat = MemoryFormat::B8G8R8A8Premultiplied;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MemoryAlpha {
    Premultiplied,
    Straight,
    Opaque,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum MemoryDepth {
    U8,
    U16,
    Float16,
    Float32,
}

impl MemoryDepth {
    /// The premultiplied RGBA format used for offscreen rendering at this depth.
    pub fn format(self) -> MemoryFormat {
        match self {
            MemoryDepth::U8 => MemoryFormat::R8G8B8A8Premultiplied,
            MemoryDepth::U16 => MemoryFormat::R16G16B16A16Premultiplied,
            MemoryDepth::Float16 => MemoryFormat::R16G16B16A16FloatPremultiplied,
            MemoryDepth::Float32 => MemoryFormat::R32G32B32A32FloatPremultiplied,
        }
    }
}

pub type Swizzle = [GLint; 4];

const R: GLint = GL_RED as GLint;
const G: GLint = GL_GREEN as GLint;
const B: GLint = GL_BLUE as GLint;
const A: GLint = GL_ALPHA as GLint;

pub const SWIZZLE_RGBA: Swizzle = [R, G, B, A];
const SWIZZLE_RGB1: Swizzle = [R, G, B, GL_ONE];
const SWIZZLE_GRAY_ALPHA: Swizzle = [R, R, R, G];
const SWIZZLE_GRAY: Swizzle = [R, R, R, GL_ONE];
const SWIZZLE_ALPHA: Swizzle = [R, R, R, R];

/// The parameters needed to upload or download pixels of a format.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GlTransfer {
    pub internal_format: GLint,
    pub format: GLenum,
    pub ty: GLenum,
    pub swizzle: Swizzle,
}

#[derive(Copy, Clone, Debug)]
pub struct GlFormatInfo {
    pub internal_gl_format: GLint,
    pub internal_gles_format: GLint,
    pub format: GLenum,
    pub ty: GLenum,
    pub swizzle: Swizzle,
    pub rgba_format: Option<MemoryFormat>,
    pub rgba_swizzle: Swizzle,
}

impl GlFormatInfo {
    const fn new(
        internal_gl_format: GLint,
        internal_gles_format: GLint,
        format: GLenum,
        ty: GLenum,
        swizzle: Swizzle,
    ) -> Self {
        Self {
            internal_gl_format,
            internal_gles_format,
            format,
            ty,
            swizzle,
            rgba_format: None,
            rgba_swizzle: SWIZZLE_RGBA,
        }
    }

    const fn rgba(mut self, format: MemoryFormat, swizzle: Swizzle) -> Self {
        self.rgba_format = Some(format);
        self.rgba_swizzle = swizzle;
        self
    }
}

#[derive(Debug)]
pub struct FormatInfo {
    pub format: MemoryFormat,
    pub name: &'static str,
    pub alpha: MemoryAlpha,
    pub bpp: u32,
    pub depth: MemoryDepth,
    pub gl: GlFormatInfo,
    pub fallbacks: &'static [MemoryFormat],
}

static FORMATS_NAMES: LazyLock<AHashMap<&'static str, MemoryFormat>> = LazyLock::new(|| {
    let mut map = AHashMap::new();
    for format in MemoryFormat::variants() {
        assert!(map.insert(format.name(), format).is_none());
    }
    map
});

pub fn named_formats() -> &'static AHashMap<&'static str, MemoryFormat> {
    &FORMATS_NAMES
}

impl MemoryFormat {
    pub fn info(self) -> &'static FormatInfo {
        use MemoryFormat::*;
        match self {
            B8G8R8A8Premultiplied => B8G8R8A8_PREMULTIPLIED,
            A8R8G8B8Premultiplied => A8R8G8B8_PREMULTIPLIED,
            R8G8B8A8Premultiplied => R8G8B8A8_PREMULTIPLIED,
            A8B8G8R8Premultiplied => A8B8G8R8_PREMULTIPLIED,
            B8G8R8A8 => B8G8R8A8_STRAIGHT,
            A8R8G8B8 => A8R8G8B8_STRAIGHT,
            R8G8B8A8 => R8G8B8A8_STRAIGHT,
            A8B8G8R8 => A8B8G8R8_STRAIGHT,
            B8G8R8X8 => B8G8R8X8_OPAQUE,
            X8R8G8B8 => X8R8G8B8_OPAQUE,
            R8G8B8X8 => R8G8B8X8_OPAQUE,
            X8B8G8R8 => X8B8G8R8_OPAQUE,
            R8G8B8 => R8G8B8_OPAQUE,
            B8G8R8 => B8G8R8_OPAQUE,
            R16G16B16 => R16G16B16_OPAQUE,
            R16G16B16A16Premultiplied => R16G16B16A16_PREMULTIPLIED,
            R16G16B16A16 => R16G16B16A16_STRAIGHT,
            R16G16B16Float => R16G16B16_FLOAT_OPAQUE,
            R16G16B16A16FloatPremultiplied => R16G16B16A16_FLOAT_PREMULTIPLIED,
            R16G16B16A16Float => R16G16B16A16_FLOAT_STRAIGHT,
            R32G32B32Float => R32G32B32_FLOAT_OPAQUE,
            R32G32B32A32FloatPremultiplied => R32G32B32A32_FLOAT_PREMULTIPLIED,
            R32G32B32A32Float => R32G32B32A32_FLOAT_STRAIGHT,
            G8A8Premultiplied => G8A8_PREMULTIPLIED,
            G8A8 => G8A8_STRAIGHT,
            G8 => G8_OPAQUE,
            G16A16Premultiplied => G16A16_PREMULTIPLIED,
            G16A16 => G16A16_STRAIGHT,
            G16 => G16_OPAQUE,
            A8 => A8_ALPHA,
            A16 => A16_ALPHA,
            A16Float => A16_FLOAT_ALPHA,
            A32Float => A32_FLOAT_ALPHA,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        named_formats().get(name).copied()
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn alpha(self) -> MemoryAlpha {
        self.info().alpha
    }

    pub fn bytes_per_pixel(self) -> u32 {
        self.info().bpp
    }

    pub fn depth(self) -> MemoryDepth {
        self.info().depth
    }

    pub fn fallbacks(self) -> &'static [MemoryFormat] {
        self.info().fallbacks
    }

    pub fn gl_format(self, gles: bool) -> GlTransfer {
        let gl = &self.info().gl;
        GlTransfer {
            internal_format: match gles {
                true => gl.internal_gles_format,
                false => gl.internal_gl_format,
            },
            format: gl.format,
            ty: gl.ty,
            swizzle: gl.swizzle,
        }
    }

    /// Returns the RGBA format this format can be stored as, with the transfer
    /// parameters of that format and the swizzle that restores the channel order.
    pub fn gl_rgba_format(self, gles: bool) -> Option<(MemoryFormat, GlTransfer)> {
        let gl = &self.info().gl;
        let alt = gl.rgba_format?;
        let transfer = GlTransfer {
            swizzle: gl.rgba_swizzle,
            ..alt.gl_format(gles)
        };
        Some((alt, transfer))
    }
}

/// The per-format data the format negotiation depends on.
pub trait FormatTables {
    fn alpha(&self, format: MemoryFormat) -> MemoryAlpha;

    /// The ordered list of substitutes for `format`.
    ///
    /// The last entry must be supported by every context.
    fn fallbacks(&self, format: MemoryFormat) -> &[MemoryFormat];

    fn gl_format(&self, format: MemoryFormat, gles: bool) -> GlTransfer;

    fn gl_rgba_format(&self, format: MemoryFormat, gles: bool)
    -> Option<(MemoryFormat, GlTransfer)>;
}

/// The built-in format tables.
#[derive(Copy, Clone, Debug, Default)]
pub struct MemoryFormatTables;

impl FormatTables for MemoryFormatTables {
    fn alpha(&self, format: MemoryFormat) -> MemoryAlpha {
        format.alpha()
    }

    fn fallbacks(&self, format: MemoryFormat) -> &[MemoryFormat] {
        format.fallbacks()
    }

    fn gl_format(&self, format: MemoryFormat, gles: bool) -> GlTransfer {
        format.gl_format(gles)
    }

    fn gl_rgba_format(
        &self,
        format: MemoryFormat,
        gles: bool,
    ) -> Option<(MemoryFormat, GlTransfer)> {
        format.gl_rgba_format(gles)
    }
}

use MemoryFormat::{
    R8G8B8A8 as RGBA8_STRAIGHT, R8G8B8A8Premultiplied as RGBA8, R8G8B8X8 as RGBX8,
    R16G16B16A16Premultiplied as RGBA16, R16G16B16A16FloatPremultiplied as RGBA16F,
    R32G32B32A32FloatPremultiplied as RGBA32F,
};

static B8G8R8A8_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::B8G8R8A8Premultiplied,
    name: "b8g8r8a8-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_BGRA8_EXT, GL_BGRA, GL_UNSIGNED_BYTE, SWIZZLE_RGBA)
        .rgba(RGBA8, [B, G, R, A]),
    fallbacks: &[RGBA8],
};

static A8R8G8B8_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A8R8G8B8Premultiplied,
    name: "a8r8g8b8-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_BGRA, GL_UNSIGNED_INT_8_8_8_8, SWIZZLE_RGBA)
        .rgba(RGBA8, [G, B, A, R]),
    fallbacks: &[RGBA8],
};

static R8G8B8A8_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R8G8B8A8Premultiplied,
    name: "r8g8b8a8-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_RGBA, GL_UNSIGNED_BYTE, SWIZZLE_RGBA),
    fallbacks: &[],
};

static A8B8G8R8_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A8B8G8R8Premultiplied,
    name: "a8b8g8r8-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_RGBA, GL_UNSIGNED_INT_8_8_8_8, SWIZZLE_RGBA)
        .rgba(RGBA8, [A, B, G, R]),
    fallbacks: &[RGBA8],
};

static B8G8R8A8_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::B8G8R8A8,
    name: "b8g8r8a8",
    alpha: MemoryAlpha::Straight,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_BGRA8_EXT, GL_BGRA, GL_UNSIGNED_BYTE, SWIZZLE_RGBA)
        .rgba(RGBA8_STRAIGHT, [B, G, R, A]),
    fallbacks: &[RGBA8_STRAIGHT, RGBA8],
};

static A8R8G8B8_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A8R8G8B8,
    name: "a8r8g8b8",
    alpha: MemoryAlpha::Straight,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_BGRA, GL_UNSIGNED_INT_8_8_8_8, SWIZZLE_RGBA)
        .rgba(RGBA8_STRAIGHT, [G, B, A, R]),
    fallbacks: &[RGBA8_STRAIGHT, RGBA8],
};

static R8G8B8A8_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R8G8B8A8,
    name: "r8g8b8a8",
    alpha: MemoryAlpha::Straight,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_RGBA, GL_UNSIGNED_BYTE, SWIZZLE_RGBA),
    fallbacks: &[RGBA8],
};

static A8B8G8R8_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A8B8G8R8,
    name: "a8b8g8r8",
    alpha: MemoryAlpha::Straight,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_RGBA, GL_UNSIGNED_INT_8_8_8_8, SWIZZLE_RGBA)
        .rgba(RGBA8_STRAIGHT, [A, B, G, R]),
    fallbacks: &[RGBA8_STRAIGHT, RGBA8],
};

static B8G8R8X8_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::B8G8R8X8,
    name: "b8g8r8x8",
    alpha: MemoryAlpha::Opaque,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_BGRA8_EXT, GL_BGRA, GL_UNSIGNED_BYTE, SWIZZLE_RGB1)
        .rgba(RGBX8, [B, G, R, GL_ONE]),
    fallbacks: &[RGBX8, RGBA8],
};

static X8R8G8B8_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::X8R8G8B8,
    name: "x8r8g8b8",
    alpha: MemoryAlpha::Opaque,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_BGRA, GL_UNSIGNED_INT_8_8_8_8, SWIZZLE_RGB1)
        .rgba(RGBX8, [G, B, A, GL_ONE]),
    fallbacks: &[RGBX8, RGBA8],
};

static R8G8B8X8_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R8G8B8X8,
    name: "r8g8b8x8",
    alpha: MemoryAlpha::Opaque,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_RGBA, GL_UNSIGNED_BYTE, SWIZZLE_RGB1),
    fallbacks: &[RGBA8],
};

static X8B8G8R8_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::X8B8G8R8,
    name: "x8b8g8r8",
    alpha: MemoryAlpha::Opaque,
    bpp: 4,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGBA8, GL_RGBA8, GL_RGBA, GL_UNSIGNED_INT_8_8_8_8, SWIZZLE_RGB1)
        .rgba(RGBX8, [A, B, G, GL_ONE]),
    fallbacks: &[RGBX8, RGBA8],
};

static R8G8B8_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R8G8B8,
    name: "r8g8b8",
    alpha: MemoryAlpha::Opaque,
    bpp: 3,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGB8, GL_RGB8, GL_RGB, GL_UNSIGNED_BYTE, SWIZZLE_RGBA),
    fallbacks: &[RGBX8, RGBA8],
};

static B8G8R8_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::B8G8R8,
    name: "b8g8r8",
    alpha: MemoryAlpha::Opaque,
    bpp: 3,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RGB8, GL_RGB8, GL_RGB, GL_UNSIGNED_BYTE, [B, G, R, A]),
    fallbacks: &[MemoryFormat::R8G8B8, RGBX8, RGBA8],
};

static R16G16B16_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R16G16B16,
    name: "r16g16b16",
    alpha: MemoryAlpha::Opaque,
    bpp: 6,
    depth: MemoryDepth::U16,
    gl: GlFormatInfo::new(GL_RGB16, GL_RGB16, GL_RGB, GL_UNSIGNED_SHORT, SWIZZLE_RGBA),
    fallbacks: &[RGBA16, RGBA32F, RGBA16F, RGBA8],
};

static R16G16B16A16_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R16G16B16A16Premultiplied,
    name: "r16g16b16a16-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 8,
    depth: MemoryDepth::U16,
    gl: GlFormatInfo::new(GL_RGBA16, GL_RGBA16, GL_RGBA, GL_UNSIGNED_SHORT, SWIZZLE_RGBA),
    fallbacks: &[RGBA32F, RGBA16F, RGBA8],
};

static R16G16B16A16_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R16G16B16A16,
    name: "r16g16b16a16",
    alpha: MemoryAlpha::Straight,
    bpp: 8,
    depth: MemoryDepth::U16,
    gl: GlFormatInfo::new(GL_RGBA16, GL_RGBA16, GL_RGBA, GL_UNSIGNED_SHORT, SWIZZLE_RGBA),
    fallbacks: &[
        MemoryFormat::R32G32B32A32Float,
        MemoryFormat::R16G16B16A16Float,
        RGBA8_STRAIGHT,
        RGBA8,
    ],
};

static R16G16B16_FLOAT_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R16G16B16Float,
    name: "r16g16b16-float",
    alpha: MemoryAlpha::Opaque,
    bpp: 6,
    depth: MemoryDepth::Float16,
    gl: GlFormatInfo::new(GL_RGB16F, GL_RGB16F, GL_RGB, GL_HALF_FLOAT, SWIZZLE_RGBA),
    fallbacks: &[RGBA16F, RGBA32F, RGBA8],
};

static R16G16B16A16_FLOAT_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R16G16B16A16FloatPremultiplied,
    name: "r16g16b16a16-float-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 8,
    depth: MemoryDepth::Float16,
    gl: GlFormatInfo::new(GL_RGBA16F, GL_RGBA16F, GL_RGBA, GL_HALF_FLOAT, SWIZZLE_RGBA),
    fallbacks: &[RGBA32F, RGBA8],
};

static R16G16B16A16_FLOAT_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R16G16B16A16Float,
    name: "r16g16b16a16-float",
    alpha: MemoryAlpha::Straight,
    bpp: 8,
    depth: MemoryDepth::Float16,
    gl: GlFormatInfo::new(GL_RGBA16F, GL_RGBA16F, GL_RGBA, GL_HALF_FLOAT, SWIZZLE_RGBA),
    fallbacks: &[MemoryFormat::R32G32B32A32Float, RGBA16F, RGBA8],
};

static R32G32B32_FLOAT_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R32G32B32Float,
    name: "r32g32b32-float",
    alpha: MemoryAlpha::Opaque,
    bpp: 12,
    depth: MemoryDepth::Float32,
    gl: GlFormatInfo::new(GL_RGB32F, GL_RGB32F, GL_RGB, GL_FLOAT, SWIZZLE_RGBA),
    fallbacks: &[RGBA32F, RGBA16F, RGBA8],
};

static R32G32B32A32_FLOAT_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R32G32B32A32FloatPremultiplied,
    name: "r32g32b32a32-float-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 16,
    depth: MemoryDepth::Float32,
    gl: GlFormatInfo::new(GL_RGBA32F, GL_RGBA32F, GL_RGBA, GL_FLOAT, SWIZZLE_RGBA),
    fallbacks: &[RGBA16F, RGBA8],
};

static R32G32B32A32_FLOAT_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::R32G32B32A32Float,
    name: "r32g32b32a32-float",
    alpha: MemoryAlpha::Straight,
    bpp: 16,
    depth: MemoryDepth::Float32,
    gl: GlFormatInfo::new(GL_RGBA32F, GL_RGBA32F, GL_RGBA, GL_FLOAT, SWIZZLE_RGBA),
    fallbacks: &[MemoryFormat::R16G16B16A16Float, RGBA32F, RGBA8],
};

static G8A8_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::G8A8Premultiplied,
    name: "g8a8-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 2,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RG8, GL_RG8, GL_RG, GL_UNSIGNED_BYTE, SWIZZLE_GRAY_ALPHA),
    fallbacks: &[RGBA8],
};

static G8A8_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::G8A8,
    name: "g8a8",
    alpha: MemoryAlpha::Straight,
    bpp: 2,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_RG8, GL_RG8, GL_RG, GL_UNSIGNED_BYTE, SWIZZLE_GRAY_ALPHA),
    fallbacks: &[RGBA8_STRAIGHT, RGBA8],
};

static G8_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::G8,
    name: "g8",
    alpha: MemoryAlpha::Opaque,
    bpp: 1,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_R8, GL_R8, GL_RED, GL_UNSIGNED_BYTE, SWIZZLE_GRAY),
    fallbacks: &[RGBX8, RGBA8],
};

static G16A16_PREMULTIPLIED: &FormatInfo = &FormatInfo {
    format: MemoryFormat::G16A16Premultiplied,
    name: "g16a16-premultiplied",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 4,
    depth: MemoryDepth::U16,
    gl: GlFormatInfo::new(GL_RG16, GL_RG16, GL_RG, GL_UNSIGNED_SHORT, SWIZZLE_GRAY_ALPHA),
    fallbacks: &[RGBA16, RGBA32F, RGBA16F, RGBA8],
};

static G16A16_STRAIGHT: &FormatInfo = &FormatInfo {
    format: MemoryFormat::G16A16,
    name: "g16a16",
    alpha: MemoryAlpha::Straight,
    bpp: 4,
    depth: MemoryDepth::U16,
    gl: GlFormatInfo::new(GL_RG16, GL_RG16, GL_RG, GL_UNSIGNED_SHORT, SWIZZLE_GRAY_ALPHA),
    fallbacks: &[MemoryFormat::R16G16B16A16, RGBA8_STRAIGHT, RGBA8],
};

static G16_OPAQUE: &FormatInfo = &FormatInfo {
    format: MemoryFormat::G16,
    name: "g16",
    alpha: MemoryAlpha::Opaque,
    bpp: 2,
    depth: MemoryDepth::U16,
    gl: GlFormatInfo::new(GL_R16, GL_R16, GL_RED, GL_UNSIGNED_SHORT, SWIZZLE_GRAY),
    fallbacks: &[MemoryFormat::R16G16B16, RGBA16, RGBA8],
};

static A8_ALPHA: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A8,
    name: "a8",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 1,
    depth: MemoryDepth::U8,
    gl: GlFormatInfo::new(GL_R8, GL_R8, GL_RED, GL_UNSIGNED_BYTE, SWIZZLE_ALPHA),
    fallbacks: &[RGBA8],
};

static A16_ALPHA: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A16,
    name: "a16",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 2,
    depth: MemoryDepth::U16,
    gl: GlFormatInfo::new(GL_R16, GL_R16, GL_RED, GL_UNSIGNED_SHORT, SWIZZLE_ALPHA),
    fallbacks: &[RGBA16, RGBA32F, RGBA16F, RGBA8],
};

static A16_FLOAT_ALPHA: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A16Float,
    name: "a16-float",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 2,
    depth: MemoryDepth::Float16,
    gl: GlFormatInfo::new(GL_R16F, GL_R16F, GL_RED, GL_HALF_FLOAT, SWIZZLE_ALPHA),
    fallbacks: &[RGBA16F, RGBA32F, RGBA8],
};

static A32_FLOAT_ALPHA: &FormatInfo = &FormatInfo {
    format: MemoryFormat::A32Float,
    name: "a32-float",
    alpha: MemoryAlpha::Premultiplied,
    bpp: 4,
    depth: MemoryDepth::Float32,
    gl: GlFormatInfo::new(GL_R32F, GL_R32F, GL_RED, GL_FLOAT, SWIZZLE_ALPHA),
    fallbacks: &[RGBA32F, RGBA16F, RGBA8],
};
