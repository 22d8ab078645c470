use {
    crate::{
        cli::{CliImageFlag, NegotiateArgs, load_profile},
        format::{MemoryFormat, MemoryFormatTables},
        gfx_api::{
            GpuImageFlags, IMAGE_CAN_MIPMAP, IMAGE_FILTERABLE, IMAGE_NO_BLIT, IMAGE_RENDERABLE,
            IMAGE_STRAIGHT_ALPHA,
        },
        gfx_apis::gl::format::{find_gl_format, format_flags},
    },
    serde::Serialize,
};

impl From<CliImageFlag> for GpuImageFlags {
    fn from(value: CliImageFlag) -> Self {
        match value {
            CliImageFlag::Renderable => IMAGE_RENDERABLE,
            CliImageFlag::Filterable => IMAGE_FILTERABLE,
            CliImageFlag::CanMipmap => IMAGE_CAN_MIPMAP,
            CliImageFlag::NoBlit => IMAGE_NO_BLIT,
            CliImageFlag::StraightAlpha => IMAGE_STRAIGHT_ALPHA,
        }
    }
}

#[derive(Serialize)]
struct Negotiation<'a> {
    requested: &'a str,
    format: &'a str,
    flags: Vec<&'static str>,
    internal_format: String,
    gl_format: String,
    gl_type: String,
    swizzle: [String; 4],
}

pub fn main(args: NegotiateArgs) {
    let profile = load_profile(&args.profile);
    let Some(format) = MemoryFormat::from_name(&args.format) else {
        fatal!("Unknown memory format `{}`", args.format);
    };
    let mut required = GpuImageFlags::none();
    for flag in &args.require {
        required |= (*flag).into();
    }
    let tables = &MemoryFormatTables;
    if format_flags(&profile, tables, MemoryFormat::R8G8B8A8Premultiplied).is_none() {
        fatal!("The profile does not support r8g8b8a8-premultiplied");
    }
    let choice = find_gl_format(&profile, tables, format, required);
    let res = Negotiation {
        requested: format.name(),
        format: choice.format.name(),
        flags: choice.flags.names().collect(),
        internal_format: format!("{:#06x}", choice.transfer.internal_format),
        gl_format: format!("{:#06x}", choice.transfer.format),
        gl_type: format!("{:#06x}", choice.transfer.ty),
        swizzle: choice.transfer.swizzle.map(|s| format!("{:#06x}", s)),
    };
    if args.json {
        match serde_json::to_string_pretty(&res) {
            Ok(s) => println!("{}", s),
            Err(e) => fatal!("Could not serialize the result: {}", e),
        }
        return;
    }
    println!("requested:       {}", res.requested);
    println!("format:          {}", res.format);
    println!("flags:           {}", res.flags.join("|"));
    println!("internal format: {}", res.internal_format);
    println!("format/type:     {} / {}", res.gl_format, res.gl_type);
    println!("swizzle:         {}", res.swizzle.join(", "));
}
