pub mod gl;
