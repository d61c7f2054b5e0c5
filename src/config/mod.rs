pub mod cli;
pub mod profile;

use crate::config::profile::FetchProfile;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fii-etl")]
#[command(about = "Fetch paginated FII listings from StatusInvest and export them to CSV")]
pub struct CliConfig {
    /// Built-in fetch profile
    #[arg(long, value_enum, default_value_t = Mode::Paginated)]
    pub mode: Mode,

    /// TOML file overriding the built-in profile
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Number of pages to request
    #[arg(long)]
    pub pages: Option<u32>,

    /// Page size (the `take` query parameter)
    #[arg(long)]
    pub take: Option<u32>,

    /// Stop fetching when a page returns no rows
    #[arg(long)]
    pub stop_on_empty: bool,

    /// Output directory override
    #[arg(long)]
    pub output_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Multi-page listing fetch (rows under `data`)
    Paginated,
    /// Single-page date-stamped snapshot (rows under `result`)
    Daily,
}

impl CliConfig {
    /// Build the effective profile: TOML file (if any) over the selected
    /// built-in, then CLI overrides, then validation.
    pub fn resolve_profile(&self) -> Result<FetchProfile> {
        let mut profile = match &self.profile {
            Some(path) => FetchProfile::from_path(path)?,
            None => match self.mode {
                Mode::Paginated => FetchProfile::paginated(),
                Mode::Daily => FetchProfile::daily(),
            },
        };

        if let Some(pages) = self.pages {
            profile.pages = pages;
        }
        if let Some(take) = self.take {
            profile.take = take;
        }
        if self.stop_on_empty {
            profile.stop_on_empty = true;
        }
        if let Some(dir) = &self.output_dir {
            profile.output.directory = dir.clone();
        }

        profile.validate()?;
        Ok(profile)
    }
}
