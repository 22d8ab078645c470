use {
    crate::gfx_apis::gl::{
        GlDeviceError,
        context::GlContext,
        preamble::prepend_line_numbers,
        sys::{
            GL_COMPILE_STATUS, GL_FALSE, GL_FRAGMENT_SHADER, GL_INFO_LOG_LENGTH, GL_VERTEX_SHADER,
            GLchar, GLenum, GLint, GLsizei, GLuint,
        },
    },
    linearize::Linearize,
    std::rc::Rc,
    thiserror::Error,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_type(self) -> GLenum {
        match self {
            ShaderStage::Vertex => GL_VERTEX_SHADER,
            ShaderStage::Fragment => GL_FRAGMENT_SHADER,
        }
    }

    pub fn define(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "GPU_VERTEX_SHADER",
            ShaderStage::Fragment => "GPU_FRAGMENT_SHADER",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

#[derive(Debug, Error)]
#[error("Compilation failure in shader.\nSource Code:\n{listing}\n\nError Message:\n{log}\n\n")]
pub struct ShaderCompileError {
    pub stage: ShaderStage,
    pub listing: String,
    pub log: String,
}

pub struct GlShader {
    pub ctx: Rc<dyn GlContext>,
    pub shader: GLuint,
}

impl GlShader {
    /// Compiles the concatenation of `sources`.
    ///
    /// The context must be current.
    pub(in crate::gfx_apis::gl) unsafe fn compile(
        ctx: &Rc<dyn GlContext>,
        stage: ShaderStage,
        sources: &[&[u8]],
    ) -> Result<Self, GlDeviceError> {
        unsafe {
            let gles = ctx.gles();
            let shader = (gles.glCreateShader)(stage.gl_type());
            let res = GlShader {
                ctx: ctx.clone(),
                shader,
            };
            let ptrs: Vec<*const GLchar> = sources.iter().map(|s| s.as_ptr() as _).collect();
            let lens: Vec<GLint> = sources.iter().map(|s| s.len() as GLint).collect();
            (gles.glShaderSource)(shader, sources.len() as _, ptrs.as_ptr(), lens.as_ptr());
            (gles.glCompileShader)(shader);

            let mut ok = 0;
            (gles.glGetShaderiv)(shader, GL_COMPILE_STATUS, &mut ok);
            if ok == GL_FALSE as GLint {
                let mut len = 0;
                (gles.glGetShaderiv)(shader, GL_INFO_LOG_LENGTH, &mut len);
                let log = read_info_log(len, |size, written, buf| {
                    (gles.glGetShaderInfoLog)(shader, size, written, buf)
                });
                return Err(ShaderCompileError {
                    stage,
                    listing: prepend_line_numbers(&sources.concat()),
                    log,
                }
                .into());
            }
            Ok(res)
        }
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        let _ = self.ctx.with_current(|gles| unsafe {
            (gles.glDeleteShader)(self.shader);
            Ok(())
        });
    }
}

/// Reads a driver info log of `len` bytes including the terminating nul byte.
pub(in crate::gfx_apis::gl) fn read_info_log(
    len: GLint,
    get: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    get(len, &mut written, buf.as_mut_ptr() as _);
    buf.truncate((written.max(0) as usize).min(buf.len()));
    String::from_utf8_lossy(&buf).into_owned()
}
