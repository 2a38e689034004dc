//! WebGPU rendering module
//!
//! Flat-color triangle lists: the scene is rebuilt from the sim state every
//! frame in field coordinates and mapped to clip space on upload.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::{Vertex, colors};
