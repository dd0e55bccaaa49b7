pub mod border_path;
pub mod sampler;
