//! Command-line surface: argument definitions and command execution.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::model::{CountriesFilters, OverviewFilters, SortDirection};
use crate::ui::pagination::PAGE_SIZE_OPTIONS;

pub use commands::{run_command, CommandOutput};

#[derive(Debug, Parser)]
#[command(
    name = "nations",
    version,
    about = "Browse countries, languages and statistics from the nations backend"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: <config dir>/nations/config.toml).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration file.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Print the view model as JSON instead of a table.
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Configuration from `--config` (or the default location), with
    /// `--base-url` applied on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List countries.
    Countries(CountriesArgs),

    /// Best GDP-per-population year of every country.
    Stats(PageArgs),

    /// Country statistics by continent, region and year.
    Overview(OverviewArgs),

    /// Languages spoken in a country.
    Languages {
        #[arg(value_name = "COUNTRY_ID")]
        country_id: u32,
    },

    /// Regions usable as overview filters.
    Regions,

    /// Years covered by the statistics overview.
    YearRange,
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Page number, starting at 1.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Items per page: 5, 10, 20, 50 or 100 (default from configuration).
    #[arg(long, value_parser = page_size)]
    pub size: Option<u32>,
}

fn page_size(raw: &str) -> Result<u32, String> {
    let size: u32 = raw.parse().map_err(|e| format!("{}", e))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZE_OPTIONS))
    }
}

impl PageArgs {
    /// Zero-based page index.
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Args)]
pub struct CountriesArgs {
    #[command(flatten)]
    pub paging: PageArgs,

    #[arg(long)]
    pub region: Option<String>,

    /// Match on country name.
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long = "year-from")]
    pub year_from: Option<i32>,

    #[arg(long = "year-to")]
    pub year_to: Option<i32>,
}

impl CountriesArgs {
    pub fn filters(&self) -> CountriesFilters {
        CountriesFilters {
            region: self.region.clone(),
            search_query: self.search.clone(),
            year_from: self.year_from,
            year_to: self.year_to,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct OverviewArgs {
    #[command(flatten)]
    pub paging: PageArgs,

    #[arg(long = "region-id")]
    pub region_id: Option<u32>,

    #[arg(long = "year-from")]
    pub year_from: Option<i32>,

    #[arg(long = "year-to")]
    pub year_to: Option<i32>,

    #[arg(long)]
    pub continent: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    /// Column to sort by (e.g. gdp, population, year).
    #[arg(long = "sort-by")]
    pub sort_by: Option<String>,

    /// asc or desc.
    #[arg(long)]
    pub direction: Option<SortDirection>,
}

impl OverviewArgs {
    pub fn filters(&self) -> OverviewFilters {
        OverviewFilters {
            region_id: self.region_id,
            year_from: self.year_from,
            year_to: self.year_to,
            continent_name: self.continent.clone(),
            region_name: self.region.clone(),
            country_name: self.country.clone(),
            year: self.year,
            sort_by: self.sort_by.clone(),
            direction: self.direction,
        }
    }
}
