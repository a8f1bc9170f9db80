//! Fetch collaborator: the boundary between the store and the backend.
//!
//! The store only talks to [`NationsApi`]. [`NationsClient`] implements it
//! over HTTP; tests substitute scripted implementations.

mod client;
mod error;

use async_trait::async_trait;

use crate::model::{
    CountriesFilters, CountryDto, CountryStats, CountryStatsOverviewDto, LanguageDto,
    OverviewFilters, Page, PageRequest, RegionDto, YearRange,
};

pub use client::NationsClient;
pub use error::ApiError;

/// Backend operations the effect orchestrator may invoke.
///
/// Every failure is reported as an [`ApiError`] carrying an HTTP-like
/// status class; implementations never panic on transport problems.
#[async_trait]
pub trait NationsApi: Send + Sync + 'static {
    /// `GET /countries`
    async fn countries(
        &self,
        page: PageRequest,
        filters: &CountriesFilters,
    ) -> Result<Page<CountryDto>, ApiError>;

    /// `GET /countries/stats/max-gdp-per-population`
    async fn max_gdp_per_population(
        &self,
        page: PageRequest,
    ) -> Result<Page<CountryStats>, ApiError>;

    /// `GET /country-stats-overview`
    async fn country_stats_overview(
        &self,
        page: PageRequest,
        filters: &OverviewFilters,
    ) -> Result<Page<CountryStatsOverviewDto>, ApiError>;

    /// `GET /languages/country/{country_id}`
    async fn country_languages(&self, country_id: u32) -> Result<Vec<LanguageDto>, ApiError>;

    /// `GET /country-stats-overview/regions`
    async fn regions(&self) -> Result<Vec<RegionDto>, ApiError>;

    /// `GET /country-stats-overview/year-range`
    async fn year_range(&self) -> Result<YearRange, ApiError>;
}
