pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, profile::FetchProfile, CliConfig};
pub use core::{engine::ExportEngine, pipeline::ListingPipeline};
pub use utils::error::{ExportError, Result};
