mod config;
mod emit;
mod error;
mod family;
mod registry;

pub mod defaults;

// Re-export public API
pub use config::{Config, FamilyConfig, SimulatorConfig};
pub use emit::{
    PACKAGING_FILE, PREAMBLE, packaging_path, render_packaging, render_packaging_to_string,
    write_packaging,
};
pub use error::{PackagingError, Result};
pub use family::Family;
pub use registry::{Registration, Registry};
