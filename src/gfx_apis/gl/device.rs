use {
    crate::{
        config::{DEBUG_SHADERS, DebugFlags},
        format::{FormatTables, MEMORY_DEFAULT, MemoryDepth, MemoryFormat},
        gfx_api::{
            GfxError, GpuDevice, GpuImage, GpuImageFlags, GpuSampler, IMAGE_CAN_MIPMAP,
            IMAGE_FILTERABLE, IMAGE_RENDERABLE, ShaderClip, ShaderOp, ShaderOpRef,
        },
        gfx_apis::gl::{
            GlDeviceError,
            context::{GlApi, GlContext, GlVersion},
            display::{DeviceMap, DisplayId},
            format::{self, GlFormatChoice},
            gl::{
                program::GlProgram,
                sampler::GlSamplers,
                shader::{GlShader, ShaderStage},
                texture::GlImage,
            },
            preamble::{ShaderPreamble, TextureUnits, prepend_line_numbers},
            sys::{GL_MAX_TEXTURE_SIZE, GLuint},
        },
        shaders::ShaderSource,
        utils::{copyhashmap::CopyHashMap, errorfmt::ErrorFmt},
    },
    std::{
        fmt::{Debug, Formatter},
        rc::Rc,
    },
};

/// The minimum desktop GL and GLES versions a device can be created for.
pub const MIN_VERSION: GlVersion = GlVersion::new(3, 0);

/// Identifies a compiled program.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProgramKey {
    pub op: ShaderOpRef,
    pub variation: u32,
    pub clip: ShaderClip,
    pub n_external_textures: u32,
}

impl ProgramKey {
    pub fn new(
        op: &'static ShaderOp,
        variation: u32,
        clip: ShaderClip,
        n_external_textures: u32,
    ) -> Self {
        Self {
            op: ShaderOpRef(op),
            variation,
            clip,
            n_external_textures,
        }
    }
}

/// The GL device of a display.
///
/// Owns the programs it has compiled and one sampler per [`GpuSampler`].
pub struct GlDevice {
    pub ctx: Rc<dyn GlContext>,
    shaders: Rc<dyn ShaderSource>,
    tables: Rc<dyn FormatTables>,
    debug: DebugFlags,
    programs: CopyHashMap<ProgramKey, Rc<GlProgram>>,
    failed: CopyHashMap<ProgramKey, u64>,
    samplers: Option<GlSamplers>,
    max_image_size: usize,
    registration: Option<(Rc<DeviceMap>, DisplayId)>,
}

impl GlDevice {
    pub(in crate::gfx_apis::gl) fn new(
        ctx: &Rc<dyn GlContext>,
        shaders: &Rc<dyn ShaderSource>,
        tables: &Rc<dyn FormatTables>,
        debug: DebugFlags,
        registration: Option<(Rc<DeviceMap>, DisplayId)>,
    ) -> Result<Rc<Self>, GlDeviceError> {
        if !ctx.check_version(MIN_VERSION, MIN_VERSION) {
            return Err(GlDeviceError::Gles2Unsupported);
        }
        let max_image_size = ctx.with_current(|gles| unsafe {
            let mut size = 0;
            (gles.glGetIntegerv)(GL_MAX_TEXTURE_SIZE, &mut size);
            Ok(size.max(0) as usize)
        })?;
        let samplers = GlSamplers::new(ctx)?;
        log::debug!(
            "GL device: api = {}, version = {}, max image size = {}",
            ctx.api().name(),
            ctx.version(),
            max_image_size,
        );
        Ok(Rc::new(Self {
            ctx: ctx.clone(),
            shaders: shaders.clone(),
            tables: tables.clone(),
            debug,
            programs: Default::default(),
            failed: Default::default(),
            samplers: Some(samplers),
            max_image_size,
            registration,
        }))
    }

    /// Creates a device that is not tracked by a registry.
    pub fn for_context(
        ctx: &Rc<dyn GlContext>,
        shaders: &Rc<dyn ShaderSource>,
        tables: &Rc<dyn FormatTables>,
        debug: DebugFlags,
    ) -> Result<Rc<Self>, GlDeviceError> {
        Self::new(ctx, shaders, tables, debug, None)
    }

    pub fn api(&self) -> GlApi {
        self.ctx.api()
    }

    /// Binds the program for the given parameters, building it on first use.
    ///
    /// Build failures leave the bound program unchanged. The first failure of a key
    /// is logged as an error, repeated failures at debug level.
    ///
    /// # Panics
    ///
    /// Panics if the external textures are not supported by the API. See
    /// [`TextureUnits::new`].
    pub fn use_program(
        &self,
        op: &'static ShaderOp,
        variation: u32,
        clip: ShaderClip,
        n_external_textures: u32,
    ) {
        let key = ProgramKey::new(op, variation, clip, n_external_textures);
        match self.try_use_program(&key) {
            Ok(()) => {
                self.failed.remove(&key);
            }
            Err(e) => {
                let attempts = self.failed.get(&key).unwrap_or(0) + 1;
                self.failed.set(key, attempts);
                if attempts == 1 {
                    log::error!("Failed to load shader program: {}", ErrorFmt(e));
                } else {
                    log::debug!(
                        "Failed to load shader program (attempt {}): {}",
                        attempts,
                        ErrorFmt(e),
                    );
                }
            }
        }
    }

    fn try_use_program(&self, key: &ProgramKey) -> Result<(), GlDeviceError> {
        if let Some(prog) = self.programs.get(key) {
            return self.ctx.with_current(|gles| unsafe {
                (gles.glUseProgram)(prog.prog);
                Ok(())
            });
        }
        let units = TextureUnits::new(self.api(), key.n_external_textures);
        let prog = self.load_program(key, units)?;
        self.ctx.with_current(|gles| unsafe {
            (gles.glUseProgram)(prog.prog);
            for (name, unit) in units.bindings() {
                prog.set_texture_unit(&name, unit);
            }
            Ok(())
        })?;
        self.programs.set(*key, prog);
        Ok(())
    }

    /// The number of consecutive failed builds of the program.
    pub fn failed_attempts(&self, key: &ProgramKey) -> u64 {
        self.failed.get(key).unwrap_or(0)
    }

    pub(in crate::gfx_apis::gl) fn load_program(
        &self,
        key: &ProgramKey,
        units: TextureUnits,
    ) -> Result<Rc<GlProgram>, GlDeviceError> {
        let op = key.op.0;
        let body = self
            .shaders
            .lookup(op.name)
            .map_err(|e| GlDeviceError::ShaderSource(op.name, e))?;
        let vert = self.compile_stage(key, units, ShaderStage::Vertex, &body)?;
        let frag = self.compile_stage(key, units, ShaderStage::Fragment, &body)?;
        let prog = self
            .ctx
            .with_current(|_| unsafe { GlProgram::link(vert, frag, op.attribs) })?;
        Ok(Rc::new(prog))
    }

    fn compile_stage(
        &self,
        key: &ProgramKey,
        units: TextureUnits,
        stage: ShaderStage,
        body: &[u8],
    ) -> Result<GlShader, GlDeviceError> {
        let preamble = ShaderPreamble {
            glsl_version: self.ctx.glsl_version_string(),
            api: self.api(),
            stage,
            variation: key.variation,
            clip: key.clip,
            units,
        }
        .build();
        let sources = [preamble.as_bytes(), body];
        let shader = self
            .ctx
            .with_current(|_| unsafe { GlShader::compile(&self.ctx, stage, &sources) })?;
        if self.debug.contains(DEBUG_SHADERS) {
            log::info!(
                "{} shader {}, {}:\n{}",
                stage.name(),
                shader.shader,
                key.op.0.name,
                prepend_line_numbers(&sources.concat()),
            );
        }
        Ok(shader)
    }

    /// The number of programs that have been built and cached.
    pub fn num_programs(&self) -> usize {
        self.programs.len()
    }

    pub fn get_sampler_id(&self, sampler: GpuSampler) -> GLuint {
        match &self.samplers {
            Some(s) => s.get(sampler),
            None => 0,
        }
    }

    pub fn find_gl_format(&self, format: MemoryFormat, required: GpuImageFlags) -> GlFormatChoice {
        format::find_gl_format(&*self.ctx, &*self.tables, format, required)
    }

    fn create_image(
        &self,
        format: MemoryFormat,
        mut required: GpuImageFlags,
        with_mipmap: bool,
        width: usize,
        height: usize,
    ) -> Result<Rc<GlImage>, GlDeviceError> {
        let max = self.max_image_size;
        if width > max || height > max {
            return Err(GlDeviceError::ImageTooLarge { width, height, max });
        }
        if with_mipmap {
            required |= IMAGE_CAN_MIPMAP;
        }
        let choice = self.find_gl_format(format, required);
        Ok(Rc::new(GlImage::new(&self.ctx, &choice, width, height)?))
    }
}

impl Debug for GlDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlDevice")
            .field("ctx", &self.ctx)
            .field("num_programs", &self.num_programs())
            .field("max_image_size", &self.max_image_size)
            .finish_non_exhaustive()
    }
}

impl GpuDevice for GlDevice {
    fn make_current(&self) -> Result<(), GfxError> {
        self.ctx.make_current()
    }

    fn max_image_size(&self) -> usize {
        self.max_image_size
    }

    fn create_offscreen_image(
        &self,
        with_mipmap: bool,
        depth: MemoryDepth,
        width: usize,
        height: usize,
    ) -> Result<Rc<dyn GpuImage>, GfxError> {
        let img = self.create_image(
            depth.format(),
            IMAGE_RENDERABLE | IMAGE_FILTERABLE,
            with_mipmap,
            width,
            height,
        )?;
        Ok(img)
    }

    fn create_upload_image(
        &self,
        with_mipmap: bool,
        format: MemoryFormat,
        width: usize,
        height: usize,
    ) -> Result<Rc<dyn GpuImage>, GfxError> {
        let img = self.create_image(format, GpuImageFlags::none(), with_mipmap, width, height)?;
        Ok(img)
    }

    fn create_download_image(
        &self,
        depth: MemoryDepth,
        width: usize,
        height: usize,
    ) -> Result<Rc<dyn GpuImage>, GfxError> {
        let img = self.create_image(depth.format(), IMAGE_RENDERABLE, false, width, height)?;
        Ok(img)
    }

    fn create_atlas_image(
        &self,
        width: usize,
        height: usize,
    ) -> Result<Rc<dyn GpuImage>, GfxError> {
        let img = self.create_image(MEMORY_DEFAULT, IMAGE_RENDERABLE, false, width, height)?;
        Ok(img)
    }
}

impl Drop for GlDevice {
    fn drop(&mut self) {
        if let Err(e) = self.ctx.make_current() {
            log::warn!("Could not make the context current: {}", ErrorFmt(e));
        }
        self.programs.clear();
        self.samplers.take();
        if let Some((devices, id)) = self.registration.take() {
            devices.remove(&id);
        }
    }
}
