macro_rules! fatal {
    ($($arg:tt)+) => {{
        eprintln!($($arg)+);
        std::process::exit(1);
    }};
}

macro_rules! bitflags {
    ($name:ident: $rep:ty; $($var:ident = $val:expr,)*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name(pub $rep);

        $(
            pub const $var: $name = $name($val);
        )*

        #[allow(dead_code)]
        impl $name {
            pub const fn none() -> Self {
                Self(0)
            }

            pub const fn all() -> Self {
                Self(0 $(| $val)*)
            }

            pub fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub fn is_not_empty(self) -> bool {
                self.0 != 0
            }

            pub fn names(self) -> impl Iterator<Item = &'static str> {
                let names: &'static [(&'static str, $rep)] = &[$((stringify!($var), $val),)*];
                names
                    .iter()
                    .filter(move |(_, v)| *v != 0 && self.0 & *v == *v)
                    .map(|(n, _)| *n)
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self::Output {
                Self(self.0 & rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut any = false;
                let mut v = self.0;
                for name in self.names() {
                    if any {
                        write!(f, "|")?;
                    }
                    any = true;
                    write!(f, "{}", name)?;
                }
                $(
                    if $val != 0 && v & $val == $val {
                        v &= !$val;
                    }
                )*
                if !any || v != 0 {
                    if any {
                        write!(f, "|")?;
                    }
                    write!(f, "0x{:x}", v)?;
                }
                Ok(())
            }
        }
    };
}

macro_rules! dynload {
    (
        $container:ident from $library:literal {
            $(
                $fun:ident: unsafe fn($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?,
            )*
        }
    ) => {
        #[allow(non_snake_case)]
        #[derive(Copy, Clone, Debug)]
        pub struct $container {
            $(
                pub $fun: unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?,
            )*
        }

        impl $container {
            pub const LIBRARY: &'static str = $library;

            pub fn load(
                mut get_proc: impl FnMut(&std::ffi::CStr) -> *mut std::ffi::c_void,
            ) -> Result<Self, crate::gfx_apis::gl::GlesLoadError> {
                Ok(Self {
                    $(
                        $fun: {
                            const NAME: &std::ffi::CStr =
                                match std::ffi::CStr::from_bytes_with_nul(
                                    concat!(stringify!($fun), "\0").as_bytes(),
                                ) {
                                    Ok(name) => name,
                                    Err(_) => panic!("function name contains a nul byte"),
                                };
                            let ptr = get_proc(NAME);
                            if ptr.is_null() {
                                return Err(crate::gfx_apis::gl::GlesLoadError::MissingSymbol(
                                    stringify!($fun),
                                ));
                            }
                            unsafe {
                                std::mem::transmute::<
                                    *mut std::ffi::c_void,
                                    unsafe extern "C" fn($($ty),*) $(-> $ret)?,
                                >(ptr)
                            }
                        },
                    )*
                })
            }
        }
    };
}
