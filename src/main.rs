fn main() {
    gl_device::cli::main();
}
