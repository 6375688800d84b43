//! Scene Geometry - spatial reasoning core of an AI-assisted scene editor
//!
//! Turns symbolic placement commands into collision-free coordinates and
//! wall sketches into room outlines.

pub mod command;
pub mod core;
pub mod room;
pub mod spatial;

pub use crate::core::error::{GeometryError, Result};
pub use crate::core::types::{ObjectId, SceneObjectRef};
