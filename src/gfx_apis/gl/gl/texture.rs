use {
    crate::{
        format::{GlTransfer, MemoryFormat},
        gfx_api::{GpuImage, GpuImageFlags},
        gfx_apis::gl::{
            GlDeviceError,
            context::GlContext,
            format::GlFormatChoice,
            sys::{
                GL_CLAMP_TO_EDGE, GL_TEXTURE_2D, GL_TEXTURE_SWIZZLE_A, GL_TEXTURE_SWIZZLE_B,
                GL_TEXTURE_SWIZZLE_G, GL_TEXTURE_SWIZZLE_R, GL_TEXTURE_WRAP_S, GL_TEXTURE_WRAP_T,
                GLuint,
            },
        },
    },
    std::{
        fmt::{Debug, Formatter},
        ptr,
        rc::Rc,
    },
};

pub struct GlImage {
    pub(in crate::gfx_apis::gl) ctx: Rc<dyn GlContext>,
    pub tex: GLuint,
    pub format: MemoryFormat,
    pub flags: GpuImageFlags,
    pub transfer: GlTransfer,
    pub width: usize,
    pub height: usize,
}

impl GlImage {
    /// Allocates uninitialized storage for a texture of the negotiated format.
    pub(in crate::gfx_apis::gl) fn new(
        ctx: &Rc<dyn GlContext>,
        choice: &GlFormatChoice,
        width: usize,
        height: usize,
    ) -> Result<Self, GlDeviceError> {
        let transfer = choice.transfer;
        let tex = ctx.with_current(|gles| unsafe {
            let mut tex = 0;
            (gles.glGenTextures)(1, &mut tex);
            (gles.glBindTexture)(GL_TEXTURE_2D, tex);
            (gles.glTexImage2D)(
                GL_TEXTURE_2D,
                0,
                transfer.internal_format,
                width as _,
                height as _,
                0,
                transfer.format,
                transfer.ty,
                ptr::null(),
            );
            (gles.glTexParameteri)(GL_TEXTURE_2D, GL_TEXTURE_WRAP_S, GL_CLAMP_TO_EDGE);
            (gles.glTexParameteri)(GL_TEXTURE_2D, GL_TEXTURE_WRAP_T, GL_CLAMP_TO_EDGE);
            let swizzle = [
                GL_TEXTURE_SWIZZLE_R,
                GL_TEXTURE_SWIZZLE_G,
                GL_TEXTURE_SWIZZLE_B,
                GL_TEXTURE_SWIZZLE_A,
            ];
            for (pname, value) in swizzle.into_iter().zip(transfer.swizzle) {
                (gles.glTexParameteri)(GL_TEXTURE_2D, pname, value);
            }
            (gles.glBindTexture)(GL_TEXTURE_2D, 0);
            Ok(tex)
        })?;
        Ok(GlImage {
            ctx: ctx.clone(),
            tex,
            format: choice.format,
            flags: choice.flags,
            transfer,
            width,
            height,
        })
    }
}

impl Debug for GlImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlImage")
            .field("tex", &self.tex)
            .field("format", &self.format)
            .field("flags", &self.flags)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl GpuImage for GlImage {
    fn format(&self) -> MemoryFormat {
        self.format
    }

    fn flags(&self) -> GpuImageFlags {
        self.flags
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

impl Drop for GlImage {
    fn drop(&mut self) {
        let _ = self.ctx.with_current(|gles| unsafe {
            (gles.glDeleteTextures)(1, &self.tex);
            Ok(())
        });
    }
}
