#![allow(
    clippy::len_zero,
    clippy::needless_lifetimes,
    clippy::enum_variant_names,
    clippy::useless_format,
    clippy::redundant_clone,
    clippy::missing_safety_doc
)]

#[macro_use]
mod macros;

pub mod cli;
pub mod config;
pub mod format;
pub mod gfx_api;
pub mod gfx_apis;
pub mod logger;
pub mod profile;
pub mod shaders;
pub mod utils;
