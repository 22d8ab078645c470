use {
    crate::{
        config::DebugFlags,
        format::FormatTables,
        gfx_api::GfxError,
        gfx_apis::gl::{GlDeviceError, context::GlContext, device::GlDevice},
        shaders::ShaderSource,
        utils::copyhashmap::CopyHashMap,
    },
    std::rc::{Rc, Weak},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DisplayId(pub u64);

/// A display connection that can provide a GL context.
pub trait Display {
    fn id(&self) -> DisplayId;

    /// Initializes GL for the display and returns its context.
    fn prepare_gl(&self) -> Result<Rc<dyn GlContext>, GfxError>;
}

pub(in crate::gfx_apis::gl) type DeviceMap = CopyHashMap<DisplayId, Weak<GlDevice>>;

/// Holds at most one [`GlDevice`] per display.
///
/// The registry does not keep devices alive. A device removes itself when it is
/// dropped.
pub struct DeviceRegistry {
    shaders: Rc<dyn ShaderSource>,
    tables: Rc<dyn FormatTables>,
    debug: DebugFlags,
    devices: Rc<DeviceMap>,
}

impl DeviceRegistry {
    pub fn new(
        shaders: Rc<dyn ShaderSource>,
        tables: Rc<dyn FormatTables>,
        debug: DebugFlags,
    ) -> Self {
        Self {
            shaders,
            tables,
            debug,
            devices: Default::default(),
        }
    }

    /// Returns the device of the display, creating it if necessary.
    pub fn get_or_create(&self, display: &dyn Display) -> Result<Rc<GlDevice>, GlDeviceError> {
        let id = display.id();
        if let Some(dev) = self.devices.get(&id).and_then(|d| d.upgrade()) {
            return Ok(dev);
        }
        let ctx = display.prepare_gl().map_err(GlDeviceError::PrepareGl)?;
        let dev = GlDevice::new(
            &ctx,
            &self.shaders,
            &self.tables,
            self.debug,
            Some((self.devices.clone(), id)),
        )?;
        self.devices.set(id, Rc::downgrade(&dev));
        log::info!("Created GL device for display {}", id.0);
        Ok(dev)
    }

    pub fn get(&self, display: DisplayId) -> Option<Rc<GlDevice>> {
        self.devices.get(&display).and_then(|d| d.upgrade())
    }

    /// The number of displays with a live device.
    pub fn len(&self) -> usize {
        self.devices
            .lock()
            .values()
            .filter(|d| d.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
