use {
    crate::cli::{GenerateArgs, GlDeviceCli},
    clap::CommandFactory,
    std::io::stdout,
};

pub fn main(args: GenerateArgs) {
    let stdout = stdout();
    let mut stdout = stdout.lock();
    clap_complete::generate(
        args.shell,
        &mut GlDeviceCli::command(),
        "gl-device",
        &mut stdout,
    );
}
