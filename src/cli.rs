mod formats;
mod generate;
mod negotiate;
mod preamble;
mod probe;

use {
    crate::{
        gfx_api::ShaderClip,
        gfx_apis::gl::gl::shader::ShaderStage,
        logger::Logger,
        profile::{BUILTIN_PROFILES, CapabilityProfile},
        utils::errorfmt::ErrorFmt,
    },
    ::log::Level,
    clap::{Args, Parser, Subcommand, ValueEnum},
    clap_complete::Shell,
    std::path::{Path, PathBuf},
};

/// Inspect the GL program cache and texture format negotiation.
#[derive(Parser, Debug)]
struct GlDeviceCli {
    #[clap(flatten)]
    global: GlobalArgs,
    #[clap(subcommand)]
    command: Cmd,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// The log level.
    #[clap(value_enum, long, default_value_t)]
    pub log_level: CliLogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the source of a shader stage as it is passed to the driver.
    Preamble(PreambleArgs),
    /// Find the format an image of a memory format is stored in.
    Negotiate(NegotiateArgs),
    /// List the memory formats with their alternates and fallbacks.
    Formats(FormatsArgs),
    /// Load the system GLES library and print the active debug flags.
    Probe,
    /// Generate shell completion scripts for gl-device.
    GenerateCompletion(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// The capability profile.
    ///
    /// Either the name of a built-in profile (`gl` or `gles`) or the path of a JSON file.
    #[clap(long, short, default_value = "gles")]
    pub profile: String,
}

#[derive(Args, Debug)]
pub struct PreambleArgs {
    #[clap(flatten)]
    pub profile: ProfileArgs,
    /// The shader stage.
    #[clap(value_enum, long, default_value_t = CliShaderStage::Fragment)]
    pub stage: CliShaderStage,
    /// The variation of the shader.
    #[clap(long, default_value_t = 0)]
    pub variation: u32,
    /// The clip mode.
    #[clap(value_enum, long, default_value_t = CliShaderClip::None)]
    pub clip: CliShaderClip,
    /// The number of external textures.
    #[clap(long, default_value_t = 0)]
    pub external_textures: u32,
    /// A file whose contents are appended to the preamble.
    #[clap(long)]
    pub body: Option<PathBuf>,
    /// Prefix every line with its line number.
    #[clap(long, short = 'n')]
    pub line_numbers: bool,
}

#[derive(Args, Debug)]
pub struct NegotiateArgs {
    #[clap(flatten)]
    pub profile: ProfileArgs,
    /// The requested memory format, e.g. `b8g8r8a8-premultiplied`.
    pub format: String,
    /// The capabilities the image must have.
    #[clap(value_enum, long, short, use_value_delimiter = true)]
    pub require: Vec<CliImageFlag>,
    /// Print the result as JSON.
    #[clap(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct FormatsArgs {
    /// Print the transfer parameters of the given API.
    #[clap(value_enum, long)]
    pub api: Option<CliApi>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The shell to generate completions for
    #[clap(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CliShaderStage {
    Vertex,
    Fragment,
}

impl From<CliShaderStage> for ShaderStage {
    fn from(value: CliShaderStage) -> Self {
        match value {
            CliShaderStage::Vertex => ShaderStage::Vertex,
            CliShaderStage::Fragment => ShaderStage::Fragment,
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CliShaderClip {
    None,
    Rect,
    Rounded,
}

impl From<CliShaderClip> for ShaderClip {
    fn from(value: CliShaderClip) -> Self {
        match value {
            CliShaderClip::None => ShaderClip::None,
            CliShaderClip::Rect => ShaderClip::Rect,
            CliShaderClip::Rounded => ShaderClip::Rounded,
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CliImageFlag {
    Renderable,
    Filterable,
    CanMipmap,
    NoBlit,
    StraightAlpha,
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CliApi {
    Gl,
    Gles,
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash, Default)]
pub enum CliLogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<CliLogLevel> for Level {
    fn from(value: CliLogLevel) -> Self {
        match value {
            CliLogLevel::Trace => Level::Trace,
            CliLogLevel::Debug => Level::Debug,
            CliLogLevel::Info => Level::Info,
            CliLogLevel::Warn => Level::Warn,
            CliLogLevel::Error => Level::Error,
        }
    }
}

fn load_profile(args: &ProfileArgs) -> CapabilityProfile {
    let res = match BUILTIN_PROFILES.contains(&args.profile.as_str()) {
        true => CapabilityProfile::builtin(&args.profile),
        false => CapabilityProfile::load(Path::new(&args.profile)),
    };
    match res {
        Ok(p) => p,
        Err(e) => fatal!("Could not load profile `{}`: {}", args.profile, ErrorFmt(e)),
    }
}

pub fn main() {
    let cli = GlDeviceCli::parse();
    Logger::install_stderr(cli.global.log_level.into());
    match cli.command {
        Cmd::Preamble(a) => preamble::main(a),
        Cmd::Negotiate(a) => negotiate::main(a),
        Cmd::Formats(a) => formats::main(a),
        Cmd::Probe => probe::main(),
        Cmd::GenerateCompletion(g) => generate::main(g),
    }
}
