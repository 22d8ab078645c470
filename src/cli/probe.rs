use crate::{
    config::{DebugFlags, GPU_DEBUG},
    gfx_apis::gl::sys::{GlesLibrary, GlesV2},
    utils::errorfmt::ErrorFmt,
};

pub fn main() {
    match GlesLibrary::open() {
        Ok(lib) => {
            log::debug!("Loaded {:?}", lib);
            println!("{}: all functions resolved", GlesV2::LIBRARY);
        }
        Err(e) => fatal!("Could not load {}: {}", GlesV2::LIBRARY, ErrorFmt(e)),
    }
    let flags = DebugFlags::from_env();
    match flags.is_empty() {
        true => println!("{}: no debug flags", GPU_DEBUG),
        false => println!("{}: {:?}", GPU_DEBUG, flags),
    }
}
