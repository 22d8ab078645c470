use linearize::{Linearize, LinearizeExt};

/// Comma separated list of [`DebugFlag`] names. `all` enables every flag.
pub const GPU_DEBUG: &str = "GPU_DEBUG";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Linearize)]
pub enum DebugFlag {
    /// Log the line-numbered source of every compiled shader stage.
    Shaders,
}

impl DebugFlag {
    pub fn name(self) -> &'static str {
        match self {
            DebugFlag::Shaders => "shaders",
        }
    }

    pub fn flag(self) -> DebugFlags {
        match self {
            DebugFlag::Shaders => DEBUG_SHADERS,
        }
    }
}

bitflags! {
    DebugFlags: u32;
    DEBUG_SHADERS = 1 << 0,
}

impl DebugFlags {
    pub fn from_env() -> Self {
        match std::env::var(GPU_DEBUG) {
            Ok(var) => Self::parse(&var),
            Err(_) => Self::none(),
        }
    }

    pub fn parse(var: &str) -> Self {
        let mut res = Self::none();
        for mut name in var.split(",") {
            name = name.trim();
            if name.is_empty() {
                continue;
            }
            if name == "all" {
                res = Self::all();
                continue;
            }
            let Some(flag) = DebugFlag::variants().find(|f| f.name() == name) else {
                log::warn!("Unknown debug flag {}", name);
                continue;
            };
            res |= flag.flag();
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{DEBUG_SHADERS, DebugFlags};

    #[test]
    fn parse() {
        assert_eq!(DebugFlags::parse(""), DebugFlags::none());
        assert_eq!(DebugFlags::parse("shaders"), DEBUG_SHADERS);
        assert_eq!(DebugFlags::parse(" shaders , bogus,"), DEBUG_SHADERS);
        assert_eq!(DebugFlags::parse("all"), DebugFlags::all());
    }
}
