use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::{ApiError, NationsApi};
use crate::config::ApiConfig;
use crate::model::{
    CountriesFilters, CountryDto, CountryStats, CountryStatsOverviewDto, FilterSet, LanguageDto,
    NoFilters, OverviewFilters, Page, PageRequest, RegionDto, YearRange,
};

/// HTTP implementation of [`NationsApi`] against the REST backend.
#[derive(Clone)]
pub struct NationsClient {
    client: Client,
    base_url: String,
}

impl NationsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ApiError::Client {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` with `query` appended in order.
    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn paged_query(page: PageRequest, filters: &impl FilterSet) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", page.page.to_string()),
            ("size", page.size.to_string()),
        ];
        query.extend(filters.query_pairs());
        query
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let display_url = url.to_string();
        tracing::debug!(url = %display_url, "GET");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Unreachable {
                url: display_url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %display_url, status = %status, "Backend returned error status");
            return Err(ApiError::Http {
                url: display_url,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ApiError::Decode {
                    url: display_url,
                    reason: e.to_string(),
                }
            } else {
                ApiError::Unreachable {
                    url: display_url,
                    reason: e.to_string(),
                }
            }
        })
    }
}

#[async_trait]
impl NationsApi for NationsClient {
    async fn countries(
        &self,
        page: PageRequest,
        filters: &CountriesFilters,
    ) -> Result<Page<CountryDto>, ApiError> {
        let url = self.endpoint("countries", &Self::paged_query(page, filters))?;
        self.get_json(url).await
    }

    async fn max_gdp_per_population(
        &self,
        page: PageRequest,
    ) -> Result<Page<CountryStats>, ApiError> {
        let url = self.endpoint(
            "countries/stats/max-gdp-per-population",
            &Self::paged_query(page, &NoFilters),
        )?;
        self.get_json(url).await
    }

    async fn country_stats_overview(
        &self,
        page: PageRequest,
        filters: &OverviewFilters,
    ) -> Result<Page<CountryStatsOverviewDto>, ApiError> {
        let url = self.endpoint("country-stats-overview", &Self::paged_query(page, filters))?;
        self.get_json(url).await
    }

    async fn country_languages(&self, country_id: u32) -> Result<Vec<LanguageDto>, ApiError> {
        let url = self.endpoint(&format!("languages/country/{}", country_id), &[])?;
        self.get_json(url).await
    }

    async fn regions(&self) -> Result<Vec<RegionDto>, ApiError> {
        let url = self.endpoint("country-stats-overview/regions", &[])?;
        self.get_json(url).await
    }

    async fn year_range(&self) -> Result<YearRange, ApiError> {
        let url = self.endpoint("country-stats-overview/year-range", &[])?;
        self.get_json(url).await
    }
}
