pub mod blur;
pub mod composite;
pub mod cpu;
pub mod layers;
pub mod pipeline;
