use {
    crate::{
        gfx_api::ShaderClip,
        gfx_apis::gl::{context::GlApi, gl::shader::ShaderStage},
    },
    bstr::ByteSlice,
    std::{ffi::CString, fmt::Write},
};

/// The number of sampler units available to a program.
pub const MAX_SAMPLERS: u32 = 16;

/// Each external texture occupies this many sampler units.
pub const EXTERNAL_TEXTURE_UNITS: u32 = 3;

/// The texture unit layout of a program.
///
/// Regular textures occupy units `0..n_textures`. External texture `i` occupies
/// unit `n_textures + 3 * i`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TextureUnits {
    pub n_textures: u32,
    pub n_external_textures: u32,
}

impl TextureUnits {
    /// # Panics
    ///
    /// Panics if the API is desktop GL and `n_external_textures` is not 0 or if the
    /// external textures do not fit into [`MAX_SAMPLERS`].
    pub fn new(api: GlApi, n_external_textures: u32) -> Self {
        match api {
            GlApi::Gl => assert_eq!(
                n_external_textures, 0,
                "external textures are not supported by desktop GL",
            ),
            GlApi::Gles => assert!(
                n_external_textures
                    .checked_mul(EXTERNAL_TEXTURE_UNITS)
                    .is_some_and(|n| n <= MAX_SAMPLERS),
                "{n_external_textures} external textures exceed the sampler budget",
            ),
        }
        Self {
            n_textures: MAX_SAMPLERS - EXTERNAL_TEXTURE_UNITS * n_external_textures,
            n_external_textures,
        }
    }

    pub fn texture_unit(&self, idx: u32) -> u32 {
        idx
    }

    pub fn external_texture_unit(&self, idx: u32) -> u32 {
        self.n_textures + EXTERNAL_TEXTURE_UNITS * idx
    }

    /// The sampler uniforms of a program and the units they are bound to.
    pub fn bindings(&self) -> impl Iterator<Item = (CString, u32)> + '_ {
        let external = (0..self.n_external_textures).map(|i| {
            let name = format!("external_textures[{i}]");
            (to_cstring(name), self.external_texture_unit(i))
        });
        let regular = (0..self.n_textures).map(|i| {
            let name = format!("textures[{i}]");
            (to_cstring(name), self.texture_unit(i))
        });
        external.chain(regular)
    }
}

fn to_cstring(s: String) -> CString {
    CString::new(s).unwrap_or_default()
}

/// The text prepended to the body of every shader stage.
#[derive(Copy, Clone, Debug)]
pub struct ShaderPreamble<'a> {
    pub glsl_version: &'a str,
    pub api: GlApi,
    pub stage: ShaderStage,
    pub variation: u32,
    pub clip: ShaderClip,
    pub units: TextureUnits,
}

impl ShaderPreamble<'_> {
    pub fn build(&self) -> String {
        let mut s = String::new();
        let _ = self.write(&mut s);
        s
    }

    fn write(&self, s: &mut String) -> std::fmt::Result {
        writeln!(s, "{}", self.glsl_version)?;
        if self.api == GlApi::Gles {
            if self.units.n_external_textures > 0 {
                s.push_str("#extension GL_OES_EGL_image_external_essl3 : require\n");
                s.push_str("#extension GL_OES_EGL_image_external : require\n");
            }
            s.push_str("#define GPU_GLES 1\n");
        }
        writeln!(s, "#define N_TEXTURES {}", self.units.n_textures)?;
        writeln!(s, "#define N_EXTERNAL_TEXTURES {}", self.units.n_external_textures)?;
        writeln!(s, "#define {} 1", self.stage.define())?;
        writeln!(s, "#define GPU_VARIATION {}u", self.variation)?;
        writeln!(s, "#define GPU_SHADER_CLIP {}", self.clip.define())?;
        Ok(())
    }
}

/// Prefixes every line of `src` with its 1-based line number.
pub fn prepend_line_numbers(src: &[u8]) -> String {
    let mut s = String::new();
    for (idx, line) in src.lines_with_terminator().enumerate() {
        let _ = write!(s, "{:>3}| {}", idx + 1, line.to_str_lossy());
    }
    s
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::gfx_apis::gl::{context::GlApi, gl::shader::ShaderStage},
    };

    #[test]
    fn unit_budget() {
        for n in 0..=5 {
            let units = TextureUnits::new(GlApi::Gles, n);
            assert_eq!(units.n_textures, 16 - 3 * n);
            for i in 0..n {
                assert_eq!(units.external_texture_unit(i), 16 - 3 * n + 3 * i);
                assert!(units.external_texture_unit(i) + 2 < MAX_SAMPLERS);
            }
        }
    }

    #[test]
    #[should_panic]
    fn gl_rejects_external_textures() {
        TextureUnits::new(GlApi::Gl, 1);
    }

    #[test]
    #[should_panic]
    fn gles_rejects_six_external_textures() {
        TextureUnits::new(GlApi::Gles, 6);
    }

    #[test]
    fn bindings() {
        let units = TextureUnits::new(GlApi::Gles, 2);
        let bindings: Vec<_> = units.bindings().collect();
        assert_eq!(bindings.len(), 12);
        assert_eq!(bindings[0], (c"external_textures[0]".to_owned(), 10));
        assert_eq!(bindings[1], (c"external_textures[1]".to_owned(), 13));
        assert_eq!(bindings[2], (c"textures[0]".to_owned(), 0));
        assert_eq!(bindings[11], (c"textures[9]".to_owned(), 9));
    }

    #[test]
    fn gles_preamble() {
        let preamble = ShaderPreamble {
            glsl_version: "#version 300 es",
            api: GlApi::Gles,
            stage: ShaderStage::Fragment,
            variation: 7,
            clip: ShaderClip::Rounded,
            units: TextureUnits::new(GlApi::Gles, 1),
        };
        assert_eq!(
            preamble.build(),
            "#version 300 es\n\
             #extension GL_OES_EGL_image_external_essl3 : require\n\
             #extension GL_OES_EGL_image_external : require\n\
             #define GPU_GLES 1\n\
             #define N_TEXTURES 13\n\
             #define N_EXTERNAL_TEXTURES 1\n\
             #define GPU_FRAGMENT_SHADER 1\n\
             #define GPU_VARIATION 7u\n\
             #define GPU_SHADER_CLIP GPU_SHADER_CLIP_ROUNDED\n",
        );
    }

    #[test]
    fn gl_preamble() {
        let preamble = ShaderPreamble {
            glsl_version: "#version 330",
            api: GlApi::Gl,
            stage: ShaderStage::Vertex,
            variation: 0,
            clip: ShaderClip::None,
            units: TextureUnits::new(GlApi::Gl, 0),
        };
        assert_eq!(
            preamble.build(),
            "#version 330\n\
             #define N_TEXTURES 16\n\
             #define N_EXTERNAL_TEXTURES 0\n\
             #define GPU_VERTEX_SHADER 1\n\
             #define GPU_VARIATION 0u\n\
             #define GPU_SHADER_CLIP GPU_SHADER_CLIP_NONE\n",
        );
    }

    #[test]
    fn gles_without_external_textures_has_no_extensions() {
        let preamble = ShaderPreamble {
            glsl_version: "#version 300 es",
            api: GlApi::Gles,
            stage: ShaderStage::Vertex,
            variation: 1,
            clip: ShaderClip::Rect,
            units: TextureUnits::new(GlApi::Gles, 0),
        }
        .build();
        assert!(!preamble.contains("#extension"));
        assert!(preamble.contains("#define GPU_GLES 1\n"));
    }

    #[test]
    fn line_numbers() {
        assert_eq!(prepend_line_numbers(b"a\nb\nc"), "  1| a\n  2| b\n  3| c");
        assert_eq!(prepend_line_numbers(b"a\n"), "  1| a\n");
        assert_eq!(prepend_line_numbers(b""), "");
        let long = "x\n".repeat(1000);
        let listing = prepend_line_numbers(long.as_bytes());
        assert!(listing.ends_with("1000| x\n"));
        assert!(listing.contains(" 99| x\n100| x\n"));
    }
}
