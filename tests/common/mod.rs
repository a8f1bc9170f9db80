//! Shared test utilities: fixtures and a scripted fetch collaborator.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use nations::api::{ApiError, NationsApi};
use nations::model::{
    CountriesFilters, CountryDto, CountryStats, CountryStatsOverviewDto, LanguageDto,
    OverviewFilters, Page, PageRequest, RegionDto, YearRange,
};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{oneshot, watch};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fail the test instead of hanging when `future` never completes.
pub async fn within_timeout<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(TEST_TIMEOUT, future)
        .await
        .expect("timed out waiting for store")
}

// -- Fixtures -----------------------------------------------------------------

pub fn country(index: u64) -> CountryDto {
    CountryDto {
        id: Some(index as u32 + 1),
        name: format!("Country {}", index + 1),
        area: 1000.0 * (index + 1) as f64,
        country_code2: format!("C{}", index % 10),
    }
}

pub fn country_stats(index: u64) -> CountryStats {
    CountryStats {
        country_name: format!("Country {}", index + 1),
        country_code2: format!("C{}", index % 10),
        area: 500.0,
        year: 2000 + (index % 19) as i32,
        population: 1_000_000 + index,
        gdp: 5.0e9,
        gdp_per_population: 5000.0,
    }
}

pub fn overview_row(index: u64) -> CountryStatsOverviewDto {
    CountryStatsOverviewDto {
        continent_name: "Europe".to_string(),
        region_name: "Western Europe".to_string(),
        country_name: format!("Country {}", index + 1),
        year: 2010,
        population: 2_000_000 + index,
        gdp: 1.0e10,
    }
}

pub fn language(name: &str, official: bool) -> LanguageDto {
    LanguageDto {
        country_id: Some(1),
        language_id: None,
        language_name: name.to_string(),
        country_name: "Country 1".to_string(),
        country_code3: "CO1".to_string(),
        official,
    }
}

pub fn regions() -> Vec<RegionDto> {
    vec![
        RegionDto {
            id: 1,
            name: "Caribbean".to_string(),
        },
        RegionDto {
            id: 2,
            name: "Western Europe".to_string(),
        },
    ]
}

/// The slice of a `total`-item collection that `request` asks for.
pub fn page_of<T>(request: PageRequest, total: u64, item: impl Fn(u64) -> T) -> Page<T> {
    let start = request.offset().min(total);
    let end = (start + u64::from(request.size)).min(total);
    Page::new((start..end).map(item).collect(), request, total)
}

pub fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("fixture serializes")
}

pub fn network_error() -> ApiError {
    ApiError::Unreachable {
        url: "http://127.0.0.1:9/api".to_string(),
        reason: "connection refused".to_string(),
    }
}

// -- Scripted fetch collaborator ---------------------------------------------

/// A call received by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Countries {
        page: PageRequest,
        filters: CountriesFilters,
    },
    CountryStats {
        page: PageRequest,
    },
    Overview {
        page: PageRequest,
        filters: OverviewFilters,
    },
    Languages {
        country_id: u32,
    },
    Regions,
    YearRange,
}

type Reply = Result<Value, ApiError>;

enum Mode {
    /// Answer immediately from fixtures.
    Auto,
    /// Park every call until the test resolves it.
    Manual,
}

/// In-memory [`NationsApi`] that records every call.
///
/// In automatic mode it answers from fixtures sized by `total`; in manual
/// mode each call waits for [`ScriptedApi::resolve`], which lets tests pick
/// the order in which concurrent fetches complete.
pub struct ScriptedApi {
    mode: Mode,
    total: u64,
    languages: Vec<LanguageDto>,
    failure: Mutex<Option<ApiError>>,
    calls: Mutex<Vec<Call>>,
    pending: Mutex<Vec<(Call, oneshot::Sender<Reply>)>>,
    recorded: watch::Sender<usize>,
}

impl ScriptedApi {
    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            total: 23,
            languages: Vec::new(),
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            pending: Mutex::new(Vec::new()),
            recorded: watch::channel(0).0,
        }
    }

    pub fn auto() -> Self {
        Self::with_mode(Mode::Auto)
    }

    pub fn manual() -> Self {
        Self::with_mode(Mode::Manual)
    }

    /// Size of every paginated fixture collection.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    pub fn with_languages(mut self, languages: Vec<LanguageDto>) -> Self {
        self.languages = languages;
        self
    }

    /// Make every automatic answer fail with `error`.
    pub fn failing_with(self, error: ApiError) -> Self {
        *self.failure.lock() = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Wait until at least `count` calls were received.
    pub async fn wait_for_calls(&self, count: usize) {
        let mut recorded = self.recorded.subscribe();
        within_timeout(recorded.wait_for(|n| *n >= count))
            .await
            .expect("scripted api dropped");
    }

    /// Answer the oldest parked call equal to `call`.
    pub fn resolve(&self, call: &Call, reply: Reply) {
        let mut pending = self.pending.lock();
        let index = pending
            .iter()
            .position(|(parked, _)| parked == call)
            .unwrap_or_else(|| panic!("no parked call {:?}", call));
        let (_, responder) = pending.remove(index);
        let _ = responder.send(reply);
    }

    fn auto_reply(&self, call: &Call) -> Reply {
        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }
        let total = self.total;
        Ok(match call {
            Call::Countries { page, .. } => to_json(&page_of(*page, total, country)),
            Call::CountryStats { page } => to_json(&page_of(*page, total, country_stats)),
            Call::Overview { page, .. } => to_json(&page_of(*page, total, overview_row)),
            Call::Languages { .. } => to_json(&self.languages),
            Call::Regions => to_json(&regions()),
            Call::YearRange => to_json(&YearRange {
                min_year: 1960,
                max_year: 2018,
            }),
        })
    }

    async fn respond<T: DeserializeOwned>(&self, call: Call) -> Result<T, ApiError> {
        self.calls.lock().push(call.clone());

        let reply = match self.mode {
            Mode::Auto => {
                self.recorded.send_modify(|n| *n += 1);
                self.auto_reply(&call)
            }
            Mode::Manual => {
                let (responder, receiver) = oneshot::channel();
                self.pending.lock().push((call, responder));
                self.recorded.send_modify(|n| *n += 1);
                receiver.await.unwrap_or_else(|_| Err(network_error()))
            }
        };

        let value = reply?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode {
            url: "scripted".to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl NationsApi for ScriptedApi {
    async fn countries(
        &self,
        page: PageRequest,
        filters: &CountriesFilters,
    ) -> Result<Page<CountryDto>, ApiError> {
        self.respond(Call::Countries {
            page,
            filters: filters.clone(),
        })
        .await
    }

    async fn max_gdp_per_population(
        &self,
        page: PageRequest,
    ) -> Result<Page<CountryStats>, ApiError> {
        self.respond(Call::CountryStats { page }).await
    }

    async fn country_stats_overview(
        &self,
        page: PageRequest,
        filters: &OverviewFilters,
    ) -> Result<Page<CountryStatsOverviewDto>, ApiError> {
        self.respond(Call::Overview {
            page,
            filters: filters.clone(),
        })
        .await
    }

    async fn country_languages(&self, country_id: u32) -> Result<Vec<LanguageDto>, ApiError> {
        self.respond(Call::Languages { country_id }).await
    }

    async fn regions(&self) -> Result<Vec<RegionDto>, ApiError> {
        self.respond(Call::Regions).await
    }

    async fn year_range(&self) -> Result<YearRange, ApiError> {
        self.respond(Call::YearRange).await
    }
}
