use {
    crate::{
        gfx_api::GpuSampler,
        gfx_apis::gl::{
            GlDeviceError,
            context::GlContext,
            sys::{
                GL_CLAMP_TO_BORDER, GL_CLAMP_TO_EDGE, GL_LINEAR, GL_LINEAR_MIPMAP_LINEAR,
                GL_NEAREST, GL_REPEAT, GL_TEXTURE_MAG_FILTER, GL_TEXTURE_MIN_FILTER,
                GL_TEXTURE_WRAP_S, GL_TEXTURE_WRAP_T, GLint, GLuint,
            },
        },
    },
    linearize::{Linearize, LinearizeExt},
    std::rc::Rc,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SamplerParams {
    pub min_filter: GLint,
    pub mag_filter: GLint,
    pub wrap: GLint,
}

impl GpuSampler {
    pub fn params(self) -> SamplerParams {
        let (min_filter, mag_filter, wrap) = match self {
            GpuSampler::Default => (GL_LINEAR, GL_LINEAR, GL_CLAMP_TO_EDGE),
            GpuSampler::Transparent => (GL_LINEAR, GL_LINEAR, GL_CLAMP_TO_BORDER),
            GpuSampler::Repeat => (GL_LINEAR, GL_LINEAR, GL_REPEAT),
            GpuSampler::Nearest => (GL_NEAREST, GL_NEAREST, GL_CLAMP_TO_EDGE),
            GpuSampler::MipmapDefault => (GL_LINEAR_MIPMAP_LINEAR, GL_LINEAR, GL_CLAMP_TO_EDGE),
        };
        SamplerParams {
            min_filter,
            mag_filter,
            wrap,
        }
    }
}

/// One sampler object per [`GpuSampler`].
pub struct GlSamplers {
    pub ctx: Rc<dyn GlContext>,
    ids: [GLuint; GpuSampler::LENGTH],
}

impl GlSamplers {
    pub(in crate::gfx_apis::gl) fn new(ctx: &Rc<dyn GlContext>) -> Result<Self, GlDeviceError> {
        let ids = ctx.with_current(|gles| unsafe {
            let mut ids = [0; GpuSampler::LENGTH];
            (gles.glGenSamplers)(ids.len() as _, ids.as_mut_ptr());
            for sampler in GpuSampler::variants() {
                let id = ids[sampler.linearize()];
                let params = sampler.params();
                (gles.glSamplerParameteri)(id, GL_TEXTURE_MIN_FILTER, params.min_filter);
                (gles.glSamplerParameteri)(id, GL_TEXTURE_MAG_FILTER, params.mag_filter);
                (gles.glSamplerParameteri)(id, GL_TEXTURE_WRAP_S, params.wrap);
                (gles.glSamplerParameteri)(id, GL_TEXTURE_WRAP_T, params.wrap);
            }
            Ok(ids)
        })?;
        Ok(Self {
            ctx: ctx.clone(),
            ids,
        })
    }

    pub fn get(&self, sampler: GpuSampler) -> GLuint {
        self.ids[sampler.linearize()]
    }
}

impl Drop for GlSamplers {
    fn drop(&mut self) {
        let _ = self.ctx.with_current(|gles| unsafe {
            (gles.glDeleteSamplers)(self.ids.len() as _, self.ids.as_ptr());
            Ok(())
        });
    }
}
