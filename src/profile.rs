use {
    crate::{
        format::MemoryFormat,
        gfx_apis::gl::context::{
            GL_FORMAT_FILTERABLE, GL_FORMAT_RENDERABLE, GL_FORMAT_USABLE, GlApi, GlCaps,
            GlFormatFlags, GlVersion,
        },
    },
    linearize::LinearizeExt,
    serde::{Deserialize, Serialize},
    std::{
        collections::BTreeMap,
        io,
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Could not read `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),
    #[error("Could not parse the profile")]
    Parse(#[source] serde_json::Error),
    #[error("Unknown memory format `{0}`")]
    UnknownFormat(String),
    #[error("There is no built-in profile named `{0}`")]
    UnknownBuiltin(String),
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FormatCaps {
    #[serde(default)]
    pub usable: bool,
    #[serde(default)]
    pub renderable: bool,
    #[serde(default)]
    pub filterable: bool,
}

impl FormatCaps {
    const NONE: Self = Self::new(false, false, false);
    const ALL: Self = Self::new(true, true, true);
    const SAMPLE: Self = Self::new(true, false, true);
    const UPLOAD: Self = Self::new(true, false, false);

    const fn new(usable: bool, renderable: bool, filterable: bool) -> Self {
        Self {
            usable,
            renderable,
            filterable,
        }
    }

    pub fn flags(self) -> GlFormatFlags {
        let mut flags = GlFormatFlags::none();
        if self.usable {
            flags |= GL_FORMAT_USABLE;
        }
        if self.renderable {
            flags |= GL_FORMAT_RENDERABLE;
        }
        if self.filterable {
            flags |= GL_FORMAT_FILTERABLE;
        }
        flags
    }
}

/// The capabilities of a GL implementation.
///
/// Formats missing from `formats` are unsupported.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapabilityProfile {
    pub api: GlApi,
    pub version: GlVersion,
    pub glsl_version: String,
    #[serde(default)]
    pub formats: BTreeMap<String, FormatCaps>,
}

pub const BUILTIN_PROFILES: &[&str] = &["gl", "gles"];

impl CapabilityProfile {
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json).map_err(ProfileError::Parse)?;
        for name in profile.formats.keys() {
            if MemoryFormat::from_name(name).is_none() {
                return Err(ProfileError::UnknownFormat(name.clone()));
            }
        }
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ProfileError::Read(path.to_path_buf(), e))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn builtin(name: &str) -> Result<Self, ProfileError> {
        let (api, version, glsl_version, caps): (_, _, _, fn(MemoryFormat) -> FormatCaps) =
            match name {
                "gl" => (GlApi::Gl, GlVersion::new(3, 3), "#version 330", gl3_caps),
                "gles" => (GlApi::Gles, GlVersion::new(3, 0), "#version 300 es", gles3_caps),
                _ => return Err(ProfileError::UnknownBuiltin(name.to_string())),
            };
        let formats = MemoryFormat::variants()
            .map(|f| (f, caps(f)))
            .filter(|(_, c)| *c != FormatCaps::NONE)
            .map(|(f, c)| (f.name().to_string(), c))
            .collect();
        Ok(Self {
            api,
            version,
            glsl_version: glsl_version.to_string(),
            formats,
        })
    }
}

fn gl3_caps(_: MemoryFormat) -> FormatCaps {
    FormatCaps::ALL
}

/// A GLES 3.0 implementation without format extensions.
fn gles3_caps(format: MemoryFormat) -> FormatCaps {
    use MemoryFormat::*;
    match format {
        B8G8R8A8Premultiplied | B8G8R8A8 | B8G8R8X8 => FormatCaps::NONE,
        A8R8G8B8Premultiplied | A8R8G8B8 | X8R8G8B8 => FormatCaps::NONE,
        A8B8G8R8Premultiplied | A8B8G8R8 | X8B8G8R8 => FormatCaps::NONE,
        R16G16B16 | R16G16B16A16Premultiplied | R16G16B16A16 => FormatCaps::NONE,
        G16A16Premultiplied | G16A16 | G16 | A16 => FormatCaps::NONE,
        R16G16B16Float | R16G16B16A16FloatPremultiplied | R16G16B16A16Float | A16Float => {
            FormatCaps::SAMPLE
        }
        R32G32B32Float | R32G32B32A32FloatPremultiplied | R32G32B32A32Float | A32Float => {
            FormatCaps::UPLOAD
        }
        R8G8B8A8Premultiplied | R8G8B8A8 | R8G8B8X8 | R8G8B8 | B8G8R8 => FormatCaps::ALL,
        G8A8Premultiplied | G8A8 | G8 | A8 => FormatCaps::ALL,
    }
}

impl GlCaps for CapabilityProfile {
    fn api(&self) -> GlApi {
        self.api
    }

    fn format_flags(&self, format: MemoryFormat) -> GlFormatFlags {
        match self.formats.get(format.name()) {
            Some(caps) => caps.flags(),
            None => GlFormatFlags::none(),
        }
    }
}
