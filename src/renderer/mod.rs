//! wgpu rendering module
//!
//! Instanced drawing of a disc (ball) and a unit quad (paddles). Nothing in
//! here feeds back into the simulation.

pub mod pipeline;
pub mod shader;
pub mod shapes;
pub mod sync;
pub mod vertex;

pub use pipeline::RenderState;
pub use shader::ShaderSources;
pub use shapes::{Mesh, generate_disc, unit_quad};
pub use sync::RenderFrame;
pub use vertex::InstanceData;
