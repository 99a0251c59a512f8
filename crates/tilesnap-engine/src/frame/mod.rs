//! Per-frame pipeline.
//!
//! All driver state is explicit: a [`SceneConfig`] fixed at setup and a
//! [`Camera`] per frame. [`FramePipeline::build`] is a function of those two
//! and nothing else.

mod camera;
mod config;
mod pipeline;

pub use camera::Camera;
pub use config::{SceneConfig, VertexPolicy};
pub use pipeline::FramePipeline;
