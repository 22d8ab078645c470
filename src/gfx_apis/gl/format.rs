
use crate::{
    format::{FormatTables, GlTransfer, MemoryAlpha, MemoryFormat},
    gfx_api::{
        GpuImageFlags, IMAGE_CAN_MIPMAP, IMAGE_FILTERABLE, IMAGE_NO_BLIT, IMAGE_RENDERABLE,
        IMAGE_STRAIGHT_ALPHA,
    },
    gfx_apis::gl::context::{
        GL_FORMAT_FILTERABLE, GL_FORMAT_RENDERABLE, GL_FORMAT_USABLE, GlApi, GlCaps,
    },
};

/// The result of format negotiation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GlFormatChoice {
    /// The logical format of the image.
    pub format: MemoryFormat,
    /// The capabilities the image will have.
    pub flags: GpuImageFlags,
    pub transfer: GlTransfer,
}

/// Returns the image capabilities of `format` or `None` if the context cannot use it.
pub fn format_flags<C: GlCaps + ?Sized>(
    caps: &C,
    tables: &dyn FormatTables,
    format: MemoryFormat,
) -> Option<GpuImageFlags> {
    let gl_flags = caps.format_flags(format);
    if !gl_flags.contains(GL_FORMAT_USABLE) {
        return None;
    }
    let mut flags = GpuImageFlags::none();
    if gl_flags.contains(GL_FORMAT_RENDERABLE) {
        flags |= IMAGE_RENDERABLE;
    } else if caps.api() == GlApi::Gles {
        flags |= IMAGE_NO_BLIT;
    }
    if gl_flags.contains(GL_FORMAT_FILTERABLE) {
        flags |= IMAGE_FILTERABLE;
    }
    if gl_flags.contains(GL_FORMAT_RENDERABLE | GL_FORMAT_FILTERABLE) {
        flags |= IMAGE_CAN_MIPMAP;
    }
    if tables.alpha(format) == MemoryAlpha::Straight {
        flags |= IMAGE_STRAIGHT_ALPHA;
    }
    Some(flags)
}

fn satisfies<C: GlCaps + ?Sized>(
    caps: &C,
    tables: &dyn FormatTables,
    format: MemoryFormat,
    required: GpuImageFlags,
) -> Option<GpuImageFlags> {
    format_flags(caps, tables, format).filter(|flags| flags.contains(required))
}

/// Finds a format the context supports with at least the `required` capabilities.
///
/// The format itself is tried first, then its RGBA alternate, then its fallbacks.
///
/// # Panics
///
/// Panics if no entry of the fallback chain is supported.
pub fn find_gl_format<C: GlCaps + ?Sized>(
    caps: &C,
    tables: &dyn FormatTables,
    format: MemoryFormat,
    required: GpuImageFlags,
) -> GlFormatChoice {
    let gles = caps.api() == GlApi::Gles;
    if let Some(flags) = satisfies(caps, tables, format, required) {
        return GlFormatChoice {
            format,
            flags,
            transfer: tables.gl_format(format, gles),
        };
    }
    if let Some((alt, transfer)) = tables.gl_rgba_format(format, gles) {
        if let Some(flags) = satisfies(caps, tables, alt, required) {
            log::debug!("Storing {format:?} as {alt:?}");
            return GlFormatChoice {
                format,
                flags,
                transfer,
            };
        }
    }
    for &fallback in tables.fallbacks(format) {
        if let Some(flags) = satisfies(caps, tables, fallback, required) {
            log::debug!("Falling back from {format:?} to {fallback:?}");
            return GlFormatChoice {
                format: fallback,
                flags,
                transfer: tables.gl_format(fallback, gles),
            };
        }
    }
    panic!("No fallback of {format:?} supports {required:?}");
}
