use {
    crate::utils::copyhashmap::CopyHashMap,
    ahash::AHashMap,
    std::{
        io,
        path::{Path, PathBuf},
        rc::Rc,
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ShaderSourceError {
    #[error("There is no shader named `{0}`")]
    NotFound(String),
    #[error("Could not read `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),
}

/// Supplies the body of a shader by name.
///
/// The body is shared by all stages and variations of the shader.
pub trait ShaderSource {
    fn lookup(&self, name: &str) -> Result<Rc<[u8]>, ShaderSourceError>;
}

/// Reads `<dir>/<name>.glsl`. Files are read once and cached.
pub struct ShaderDir {
    dir: PathBuf,
    cache: CopyHashMap<String, Rc<[u8]>>,
}

impl ShaderDir {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            cache: Default::default(),
        }
    }
}

impl ShaderSource for ShaderDir {
    fn lookup(&self, name: &str) -> Result<Rc<[u8]>, ShaderSourceError> {
        if let Some(src) = self.cache.get(name) {
            return Ok(src);
        }
        let path = self.dir.join(format!("{name}.glsl"));
        let src: Rc<[u8]> = match std::fs::read(&path) {
            Ok(src) => src.into(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ShaderSourceError::NotFound(name.to_string()));
            }
            Err(e) => return Err(ShaderSourceError::Read(path, e)),
        };
        self.cache.set(name.to_string(), src.clone());
        Ok(src)
    }
}

/// Shader sources compiled into the binary.
#[derive(Default)]
pub struct StaticShaders {
    shaders: AHashMap<&'static str, &'static [u8]>,
}

impl StaticShaders {
    pub fn new(shaders: &[(&'static str, &'static [u8])]) -> Self {
        Self {
            shaders: shaders.iter().copied().collect(),
        }
    }
}

impl ShaderSource for StaticShaders {
    fn lookup(&self, name: &str) -> Result<Rc<[u8]>, ShaderSourceError> {
        match self.shaders.get(name) {
            Some(src) => Ok(Rc::from(*src)),
            None => Err(ShaderSourceError::NotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shaders::{ShaderDir, ShaderSource, ShaderSourceError, StaticShaders};

    #[test]
    fn static_shaders() {
        let shaders = StaticShaders::new(&[("color", b"void main() {}\n")]);
        assert_eq!(&*shaders.lookup("color").unwrap(), b"void main() {}\n");
        assert!(matches!(
            shaders.lookup("blur"),
            Err(ShaderSourceError::NotFound(n)) if n == "blur",
        ));
    }

    #[test]
    fn shader_dir() {
        let dir = std::env::temp_dir().join(format!("gl-device-shaders-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("texture.glsl"), b"// texture\n").unwrap();
        let shaders = ShaderDir::new(&dir);
        assert_eq!(&*shaders.lookup("texture").unwrap(), b"// texture\n");
        std::fs::remove_file(dir.join("texture.glsl")).unwrap();
        assert_eq!(&*shaders.lookup("texture").unwrap(), b"// texture\n");
        assert!(matches!(
            shaders.lookup("missing"),
            Err(ShaderSourceError::NotFound(_)),
        ));
        let _ = std::fs::remove_dir(&dir);
    }
}
