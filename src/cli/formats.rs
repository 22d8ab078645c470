use {
    crate::{
        cli::{CliApi, FormatsArgs},
        format::MemoryFormat,
    },
    isnt::std_1::vec::IsntVecExt,
    linearize::LinearizeExt,
};

pub fn main(args: FormatsArgs) {
    for format in MemoryFormat::variants() {
        let info = format.info();
        let fallbacks: Vec<_> = info.fallbacks.iter().map(|f| f.name()).collect();
        print!(
            "{:<34} {:<13} {:>2} bpp {:<7}",
            info.name,
            format!("{:?}", info.alpha),
            info.bpp,
            format!("{:?}", info.depth),
        );
        if let Some(alt) = info.gl.rgba_format {
            print!(" rgba: {}", alt.name());
        }
        if fallbacks.is_not_empty() {
            print!(" fallbacks: {}", fallbacks.join(" -> "));
        }
        if let Some(api) = args.api {
            let t = format.gl_format(api == CliApi::Gles);
            print!(
                " gl: {:#06x} {:#06x} {:#06x}",
                t.internal_format, t.format, t.ty
            );
        }
        println!();
    }
}
