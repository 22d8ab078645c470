pub mod program;
pub mod sampler;
pub mod shader;
pub mod texture;
