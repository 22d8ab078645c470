use {
    crate::{
        cli::{PreambleArgs, load_profile},
        gfx_apis::gl::{
            context::GlApi,
            preamble::{
                EXTERNAL_TEXTURE_UNITS, MAX_SAMPLERS, ShaderPreamble, TextureUnits,
                prepend_line_numbers,
            },
        },
        utils::errorfmt::ErrorFmt,
    },
    bstr::ByteSlice,
    std::io::{Write, stdout},
};

pub fn main(args: PreambleArgs) {
    let profile = load_profile(&args.profile);
    let n = args.external_textures;
    match profile.api {
        GlApi::Gl if n > 0 => fatal!("External textures require GLES"),
        GlApi::Gles if n.saturating_mul(EXTERNAL_TEXTURE_UNITS) > MAX_SAMPLERS => {
            let max = MAX_SAMPLERS / EXTERNAL_TEXTURE_UNITS;
            fatal!("At most {} external textures are supported", max)
        }
        _ => {}
    }
    let preamble = ShaderPreamble {
        glsl_version: &profile.glsl_version,
        api: profile.api,
        stage: args.stage.into(),
        variation: args.variation,
        clip: args.clip.into(),
        units: TextureUnits::new(profile.api, n),
    }
    .build();
    let mut src = preamble.into_bytes();
    if let Some(body) = &args.body {
        match std::fs::read(body) {
            Ok(b) => src.extend_from_slice(&b),
            Err(e) => fatal!("Could not read {}: {}", body.display(), ErrorFmt(e)),
        }
    }
    let out = match args.line_numbers {
        true => prepend_line_numbers(&src).into_bytes(),
        false => src,
    };
    let mut stdout = stdout().lock();
    let _ = stdout.write_all(&out);
    if !out.ends_with_str("\n") {
        let _ = stdout.write_all(b"\n");
    }
}
