use {
    crate::gfx_apis::gl::{
        GlDeviceError,
        context::GlContext,
        gl::shader::{GlShader, read_info_log},
        sys::{GL_FALSE, GL_INFO_LOG_LENGTH, GL_LINK_STATUS, GLint, GLuint},
    },
    std::{ffi::CStr, rc::Rc},
    thiserror::Error,
};

#[derive(Debug, Error)]
#[error("Linking failure in shader: {log}")]
pub struct ProgramLinkError {
    pub log: String,
}

pub struct GlProgram {
    pub ctx: Rc<dyn GlContext>,
    pub prog: GLuint,
}

impl GlProgram {
    /// Links the two stages into a program.
    ///
    /// Attribute `i` is bound to location `i` before linking. The shaders are
    /// detached and deleted afterwards, whether linking succeeds or not.
    pub(in crate::gfx_apis::gl) unsafe fn link(
        vert: GlShader,
        frag: GlShader,
        attribs: &[&CStr],
    ) -> Result<Self, GlDeviceError> {
        unsafe {
            let ctx = vert.ctx.clone();
            let gles = ctx.gles();
            let res = GlProgram {
                ctx: ctx.clone(),
                prog: (gles.glCreateProgram)(),
            };
            (gles.glAttachShader)(res.prog, vert.shader);
            (gles.glAttachShader)(res.prog, frag.shader);
            for (idx, name) in attribs.iter().enumerate() {
                (gles.glBindAttribLocation)(res.prog, idx as GLuint, name.as_ptr());
            }
            (gles.glLinkProgram)(res.prog);
            (gles.glDetachShader)(res.prog, vert.shader);
            (gles.glDetachShader)(res.prog, frag.shader);
            drop(vert);
            drop(frag);

            let mut ok = 0;
            (gles.glGetProgramiv)(res.prog, GL_LINK_STATUS, &mut ok);
            if ok == GL_FALSE as GLint {
                let mut len = 0;
                (gles.glGetProgramiv)(res.prog, GL_INFO_LOG_LENGTH, &mut len);
                let log = read_info_log(len, |size, written, buf| {
                    (gles.glGetProgramInfoLog)(res.prog, size, written, buf)
                });
                return Err(ProgramLinkError { log }.into());
            }

            Ok(res)
        }
    }

    pub unsafe fn get_uniform_location(&self, name: &CStr) -> GLint {
        unsafe { (self.ctx.gles().glGetUniformLocation)(self.prog, name.as_ptr()) }
    }

    /// Sets the sampler uniform `name` to texture unit `unit`. Missing uniforms are ignored.
    pub unsafe fn set_texture_unit(&self, name: &CStr, unit: u32) {
        unsafe {
            let loc = self.get_uniform_location(name);
            if loc != -1 {
                (self.ctx.gles().glUniform1i)(loc, unit as GLint);
            }
        }
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        let _ = self.ctx.with_current(|gles| unsafe {
            (gles.glDeleteProgram)(self.prog);
            Ok(())
        });
    }
}
