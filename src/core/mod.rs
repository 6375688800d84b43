pub mod config;
pub mod error;
pub mod types;

pub use config::{config, GeometryConfig};
pub use error::{GeometryError, Result};
pub use types::{ObjectId, SceneObjectRef};
