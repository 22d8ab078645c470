//! A software stand-in for the GL driver.
//!
//! The functions record every call into thread-local state that tests inspect.

use {
    crate::{
        format::MemoryFormat,
        gfx_api::GfxError,
        gfx_apis::gl::{
            context::{GlApi, GlCaps, GlContext, GlFormatFlags, GlVersion},
            display::{Display, DisplayId},
            sys::{
                GL_COMPILE_STATUS, GL_INFO_LOG_LENGTH, GL_LINK_STATUS, GL_MAX_TEXTURE_SIZE,
                GLchar, GLenum, GLint, GLsizei, GLuint, GlesV2,
            },
        },
    },
    ahash::AHashMap,
    std::{
        cell::{Cell, RefCell},
        ffi::{CStr, c_void},
        ptr, slice,
        rc::Rc,
    },
};

#[derive(Default, Debug)]
pub struct FakeShader {
    pub ty: GLenum,
    pub source: String,
    pub compiled: bool,
    pub log: String,
}

#[derive(Default, Debug)]
pub struct FakeProgram {
    pub attached: Vec<GLuint>,
    pub attribs: Vec<(GLuint, String)>,
    pub attribs_at_link: Vec<(GLuint, String)>,
    pub shaders_at_link: Vec<GLuint>,
    pub linked: bool,
    pub log: String,
    pub locations: AHashMap<String, GLint>,
}

#[derive(Default, Debug)]
pub struct FakeTexture {
    pub internal_format: GLint,
    pub width: GLsizei,
    pub height: GLsizei,
    pub format: GLenum,
    pub ty: GLenum,
    pub params: AHashMap<GLenum, GLint>,
}

#[derive(Debug)]
pub struct FakeGl {
    next_id: GLuint,
    pub shaders: AHashMap<GLuint, FakeShader>,
    pub compiled_sources: Vec<String>,
    pub deleted_shaders: Vec<GLuint>,
    pub programs: AHashMap<GLuint, FakeProgram>,
    pub deleted_programs: Vec<GLuint>,
    pub links: usize,
    pub current_program: GLuint,
    pub uniforms: Vec<(GLuint, String, GLint)>,
    pub sampler_gens: usize,
    pub samplers: AHashMap<GLuint, AHashMap<GLenum, GLint>>,
    pub deleted_samplers: Vec<GLuint>,
    pub textures: AHashMap<GLuint, FakeTexture>,
    pub deleted_textures: Vec<GLuint>,
    pub bound_texture: GLuint,
    pub max_texture_size: GLint,
    pub fail_compile: Option<&'static str>,
    pub fail_link: bool,
    pub events: Vec<&'static str>,
}

impl Default for FakeGl {
    fn default() -> Self {
        Self {
            next_id: 1,
            shaders: Default::default(),
            compiled_sources: Default::default(),
            deleted_shaders: Default::default(),
            programs: Default::default(),
            deleted_programs: Default::default(),
            links: 0,
            current_program: 0,
            uniforms: Default::default(),
            sampler_gens: 0,
            samplers: Default::default(),
            deleted_samplers: Default::default(),
            textures: Default::default(),
            deleted_textures: Default::default(),
            bound_texture: 0,
            max_texture_size: 8192,
            fail_compile: None,
            fail_link: false,
            events: Default::default(),
        }
    }
}

impl FakeGl {
    fn next_id(&mut self) -> GLuint {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static STATE: RefCell<FakeGl> = RefCell::new(FakeGl::default());
}

pub fn with<T>(f: impl FnOnce(&mut FakeGl) -> T) -> T {
    STATE.with_borrow_mut(f)
}

pub fn reset() {
    with(|gl| *gl = FakeGl::default());
}

unsafe fn c_str(s: *const GLchar) -> String {
    unsafe { CStr::from_ptr(s).to_string_lossy().into_owned() }
}

unsafe fn copy_log(log: &str, buf_size: GLsizei, length: *mut GLsizei, out: *mut GLchar) {
    if buf_size <= 0 {
        return;
    }
    let n = log.len().min(buf_size as usize - 1);
    unsafe {
        ptr::copy_nonoverlapping(log.as_ptr(), out as *mut u8, n);
        *out.add(n) = 0;
        if !length.is_null() {
            *length = n as GLsizei;
        }
    }
}

unsafe extern "C" fn get_integerv(pname: GLenum, data: *mut GLint) {
    if pname == GL_MAX_TEXTURE_SIZE {
        unsafe { *data = with(|gl| gl.max_texture_size) };
    }
}

unsafe extern "C" fn create_shader(ty: GLenum) -> GLuint {
    with(|gl| {
        let id = gl.next_id();
        gl.shaders.insert(
            id,
            FakeShader {
                ty,
                ..Default::default()
            },
        );
        id
    })
}

unsafe extern "C" fn delete_shader(shader: GLuint) {
    with(|gl| {
        gl.shaders.remove(&shader);
        gl.deleted_shaders.push(shader);
    });
}

unsafe extern "C" fn shader_source(
    shader: GLuint,
    count: GLsizei,
    string: *const *const GLchar,
    length: *const GLint,
) {
    let mut src = Vec::new();
    for i in 0..count as usize {
        unsafe {
            let part = *string.add(i);
            if length.is_null() || *length.add(i) < 0 {
                src.extend_from_slice(CStr::from_ptr(part).to_bytes());
            } else {
                src.extend_from_slice(slice::from_raw_parts(
                    part as *const u8,
                    *length.add(i) as usize,
                ));
            }
        }
    }
    let src = String::from_utf8_lossy(&src).into_owned();
    with(|gl| {
        if let Some(s) = gl.shaders.get_mut(&shader) {
            s.source = src;
        }
    });
}

unsafe extern "C" fn compile_shader(shader: GLuint) {
    with(|gl| {
        let fail = gl.fail_compile;
        let Some(s) = gl.shaders.get_mut(&shader) else {
            return;
        };
        s.compiled = !fail.is_some_and(|f| s.source.contains(f));
        if !s.compiled {
            s.log = "0:1(1): error: fake compile error".to_string();
        }
        let source = s.source.clone();
        gl.compiled_sources.push(source);
    });
}

unsafe extern "C" fn get_shaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) {
    let v = with(|gl| {
        let s = &gl.shaders[&shader];
        match pname {
            GL_COMPILE_STATUS => s.compiled as GLint,
            GL_INFO_LOG_LENGTH if s.log.is_empty() => 0,
            GL_INFO_LOG_LENGTH => s.log.len() as GLint + 1,
            _ => 0,
        }
    });
    unsafe { *params = v };
}

unsafe extern "C" fn get_shader_info_log(
    shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    let log = with(|gl| gl.shaders[&shader].log.clone());
    unsafe { copy_log(&log, buf_size, length, info_log) };
}

unsafe extern "C" fn create_program() -> GLuint {
    with(|gl| {
        let id = gl.next_id();
        gl.programs.insert(id, Default::default());
        id
    })
}

unsafe extern "C" fn delete_program(prog: GLuint) {
    with(|gl| {
        gl.programs.remove(&prog);
        gl.deleted_programs.push(prog);
        gl.events.push("glDeleteProgram");
    });
}

unsafe extern "C" fn attach_shader(prog: GLuint, shader: GLuint) {
    with(|gl| gl.programs.get_mut(&prog).map(|p| p.attached.push(shader)));
}

unsafe extern "C" fn detach_shader(prog: GLuint, shader: GLuint) {
    with(|gl| {
        if let Some(p) = gl.programs.get_mut(&prog) {
            p.attached.retain(|s| *s != shader);
        }
    });
}

unsafe extern "C" fn bind_attrib_location(prog: GLuint, index: GLuint, name: *const GLchar) {
    let name = unsafe { c_str(name) };
    with(|gl| gl.programs.get_mut(&prog).map(|p| p.attribs.push((index, name))));
}

unsafe extern "C" fn link_program(prog: GLuint) {
    with(|gl| {
        gl.links += 1;
        let fail = gl.fail_link;
        if let Some(p) = gl.programs.get_mut(&prog) {
            p.attribs_at_link = p.attribs.clone();
            p.shaders_at_link = p.attached.clone();
            p.linked = !fail;
            if fail {
                p.log = "error: fake link error".to_string();
            }
        }
    });
}

unsafe extern "C" fn get_programiv(prog: GLuint, pname: GLenum, params: *mut GLint) {
    let v = with(|gl| {
        let p = &gl.programs[&prog];
        match pname {
            GL_LINK_STATUS => p.linked as GLint,
            GL_INFO_LOG_LENGTH if p.log.is_empty() => 0,
            GL_INFO_LOG_LENGTH => p.log.len() as GLint + 1,
            _ => 0,
        }
    });
    unsafe { *params = v };
}

unsafe extern "C" fn get_program_info_log(
    prog: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    let log = with(|gl| gl.programs[&prog].log.clone());
    unsafe { copy_log(&log, buf_size, length, info_log) };
}

unsafe extern "C" fn use_program(prog: GLuint) {
    with(|gl| gl.current_program = prog);
}

unsafe extern "C" fn get_uniform_location(prog: GLuint, name: *const GLchar) -> GLint {
    let name = unsafe { c_str(name) };
    with(|gl| {
        let Some(p) = gl.programs.get_mut(&prog) else {
            return -1;
        };
        let next = p.locations.len() as GLint;
        *p.locations.entry(name).or_insert(next)
    })
}

unsafe extern "C" fn uniform1i(location: GLint, v0: GLint) {
    with(|gl| {
        let prog = gl.current_program;
        let name = gl.programs[&prog]
            .locations
            .iter()
            .find(|(_, l)| **l == location)
            .map(|(n, _)| n.clone())
            .unwrap_or_default();
        gl.uniforms.push((prog, name, v0));
    });
}

unsafe extern "C" fn gen_samplers(n: GLsizei, samplers: *mut GLuint) {
    with(|gl| {
        gl.sampler_gens += 1;
        for i in 0..n as usize {
            let id = gl.next_id();
            gl.samplers.insert(id, Default::default());
            unsafe { *samplers.add(i) = id };
        }
    });
}

unsafe extern "C" fn delete_samplers(n: GLsizei, samplers: *const GLuint) {
    let ids = unsafe { slice::from_raw_parts(samplers, n as usize) };
    with(|gl| {
        for id in ids {
            gl.samplers.remove(id);
            gl.deleted_samplers.push(*id);
        }
        gl.events.push("glDeleteSamplers");
    });
}

unsafe extern "C" fn sampler_parameteri(sampler: GLuint, pname: GLenum, param: GLint) {
    with(|gl| gl.samplers.get_mut(&sampler).map(|s| s.insert(pname, param)));
}

unsafe extern "C" fn gen_textures(n: GLsizei, textures: *mut GLuint) {
    with(|gl| {
        for i in 0..n as usize {
            let id = gl.next_id();
            gl.textures.insert(id, Default::default());
            unsafe { *textures.add(i) = id };
        }
    });
}

unsafe extern "C" fn delete_textures(n: GLsizei, textures: *const GLuint) {
    let ids = unsafe { slice::from_raw_parts(textures, n as usize) };
    with(|gl| {
        for id in ids {
            gl.textures.remove(id);
            gl.deleted_textures.push(*id);
        }
    });
}

unsafe extern "C" fn bind_texture(_target: GLenum, texture: GLuint) {
    with(|gl| gl.bound_texture = texture);
}

unsafe extern "C" fn tex_parameteri(_target: GLenum, pname: GLenum, param: GLint) {
    with(|gl| {
        let bound = gl.bound_texture;
        gl.textures.get_mut(&bound).map(|t| t.params.insert(pname, param))
    });
}

unsafe extern "C" fn tex_image_2d(
    _target: GLenum,
    _level: GLint,
    internalformat: GLint,
    width: GLsizei,
    height: GLsizei,
    _border: GLint,
    format: GLenum,
    ty: GLenum,
    _pixels: *const c_void,
) {
    with(|gl| {
        let bound = gl.bound_texture;
        if let Some(t) = gl.textures.get_mut(&bound) {
            t.internal_format = internalformat;
            t.width = width;
            t.height = height;
            t.format = format;
            t.ty = ty;
        }
    });
}

pub fn proc_address(name: &CStr) -> *mut c_void {
    match name.to_bytes() {
        b"glGetIntegerv" => get_integerv as *mut c_void,
        b"glCreateShader" => create_shader as *mut c_void,
        b"glDeleteShader" => delete_shader as *mut c_void,
        b"glShaderSource" => shader_source as *mut c_void,
        b"glCompileShader" => compile_shader as *mut c_void,
        b"glGetShaderiv" => get_shaderiv as *mut c_void,
        b"glGetShaderInfoLog" => get_shader_info_log as *mut c_void,
        b"glCreateProgram" => create_program as *mut c_void,
        b"glDeleteProgram" => delete_program as *mut c_void,
        b"glAttachShader" => attach_shader as *mut c_void,
        b"glDetachShader" => detach_shader as *mut c_void,
        b"glBindAttribLocation" => bind_attrib_location as *mut c_void,
        b"glLinkProgram" => link_program as *mut c_void,
        b"glGetProgramiv" => get_programiv as *mut c_void,
        b"glGetProgramInfoLog" => get_program_info_log as *mut c_void,
        b"glUseProgram" => use_program as *mut c_void,
        b"glGetUniformLocation" => get_uniform_location as *mut c_void,
        b"glUniform1i" => uniform1i as *mut c_void,
        b"glGenSamplers" => gen_samplers as *mut c_void,
        b"glDeleteSamplers" => delete_samplers as *mut c_void,
        b"glSamplerParameteri" => sampler_parameteri as *mut c_void,
        b"glGenTextures" => gen_textures as *mut c_void,
        b"glDeleteTextures" => delete_textures as *mut c_void,
        b"glBindTexture" => bind_texture as *mut c_void,
        b"glTexParameteri" => tex_parameteri as *mut c_void,
        b"glTexImage2D" => tex_image_2d as *mut c_void,
        _ => ptr::null_mut(),
    }
}

pub fn fake_gles() -> GlesV2 {
    GlesV2::load(proc_address).unwrap()
}

#[derive(Debug)]
pub struct FakeContext {
    pub api: GlApi,
    pub version: GlVersion,
    pub glsl_version: String,
    pub gles: GlesV2,
    pub formats: RefCell<AHashMap<MemoryFormat, GlFormatFlags>>,
    pub make_current_calls: Cell<usize>,
    /// The 1-based `make_current` call that fails.
    pub fail_make_current: Cell<Option<usize>>,
}

impl FakeContext {
    pub fn new(api: GlApi, version: GlVersion) -> Rc<Self> {
        let glsl_version = match api {
            GlApi::Gl => "#version 330",
            GlApi::Gles => "#version 300 es",
        };
        Rc::new(Self {
            api,
            version,
            glsl_version: glsl_version.to_string(),
            gles: fake_gles(),
            formats: Default::default(),
            make_current_calls: Cell::new(0),
            fail_make_current: Cell::new(None),
        })
    }

    pub fn support(&self, format: MemoryFormat, flags: GlFormatFlags) {
        self.formats.borrow_mut().insert(format, flags);
    }
}

impl GlCaps for FakeContext {
    fn api(&self) -> GlApi {
        self.api
    }

    fn format_flags(&self, format: MemoryFormat) -> GlFormatFlags {
        self.formats
            .borrow()
            .get(&format)
            .copied()
            .unwrap_or_default()
    }
}

impl GlContext for FakeContext {
    fn make_current(&self) -> Result<(), GfxError> {
        let calls = self.make_current_calls.get() + 1;
        self.make_current_calls.set(calls);
        if self.fail_make_current.get() == Some(calls) {
            return Err(GfxError("context lost".into()));
        }
        with(|gl| gl.events.push("make_current"));
        Ok(())
    }

    fn version(&self) -> GlVersion {
        self.version
    }

    fn glsl_version_string(&self) -> &str {
        &self.glsl_version
    }

    fn gles(&self) -> &GlesV2 {
        &self.gles
    }
}

pub struct FakeDisplay {
    pub id: DisplayId,
    pub ctx: Rc<FakeContext>,
    pub prepared: Cell<usize>,
}

impl FakeDisplay {
    pub fn new(id: u64, ctx: Rc<FakeContext>) -> Self {
        Self {
            id: DisplayId(id),
            ctx,
            prepared: Cell::new(0),
        }
    }
}

impl Display for FakeDisplay {
    fn id(&self) -> DisplayId {
        self.id
    }

    fn prepare_gl(&self) -> Result<Rc<dyn GlContext>, GfxError> {
        self.prepared.set(self.prepared.get() + 1);
        Ok(self.ctx.clone())
    }
}
