//! Effect orchestration: which intents cause fetches, and which fetch
//! results are still wanted when they arrive.
//!
//! [`EffectOrchestrator::react`] runs after the reducer has applied an
//! intent and reads the post-transition state, so derived reloads always use
//! the latest page size and filters rather than the intent payload.
//!
//! Every fetch gets a [`FetchTicket`]. Issuing a new fetch for a target
//! supersedes all earlier tickets for it; [`EffectOrchestrator::resolve`]
//! drops outcomes whose ticket is no longer current, so the slice only ever
//! sees the most recently requested result.

use std::collections::HashMap;

use crate::api::{ApiError, NationsApi};
use crate::model::{
    CountriesFilters, CountryDto, CountryStats, CountryStatsOverviewDto, FilterSet, LanguageDto,
    OverviewFilters, Page, PageRequest, RegionDto, YearRange,
};

use super::intent::NationsIntent;
use super::languages::LanguagesIntent;
use super::management::ManagementInfoIntent;
use super::paged::{PageIntent, PagedSlice};
use super::state::{ErrorCode, NationsState};

/// Unit of last-request-wins bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchTarget {
    CountriesList,
    CountryStats,
    CountryStatsOverview,
    CountryLanguages,
    Regions,
    YearRange,
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub target: FetchTarget,
    pub generation: u64,
}

/// A call on the fetch collaborator, with its parameters resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCall {
    Countries {
        page: PageRequest,
        filters: CountriesFilters,
    },
    CountryStats {
        page: PageRequest,
    },
    CountryStatsOverview {
        page: PageRequest,
        filters: OverviewFilters,
    },
    CountryLanguages {
        country_id: u32,
    },
    Regions,
    YearRange,
}

impl FetchCall {
    pub fn target(&self) -> FetchTarget {
        match self {
            FetchCall::Countries { .. } => FetchTarget::CountriesList,
            FetchCall::CountryStats { .. } => FetchTarget::CountryStats,
            FetchCall::CountryStatsOverview { .. } => FetchTarget::CountryStatsOverview,
            FetchCall::CountryLanguages { .. } => FetchTarget::CountryLanguages,
            FetchCall::Regions => FetchTarget::Regions,
            FetchCall::YearRange => FetchTarget::YearRange,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub call: FetchCall,
}

/// Raw result of a [`FetchCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Countries(Result<Page<CountryDto>, ApiError>),
    CountryStats(Result<Page<CountryStats>, ApiError>),
    CountryStatsOverview(Result<Page<CountryStatsOverviewDto>, ApiError>),
    CountryLanguages(Result<Vec<LanguageDto>, ApiError>),
    Regions(Result<Vec<RegionDto>, ApiError>),
    YearRange(Result<YearRange, ApiError>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: FetchResult,
}

/// What the store runtime must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Apply a derived intent right away.
    Dispatch(NationsIntent),
    /// Run a fetch; its outcome comes back through [`EffectOrchestrator::resolve`].
    Fetch(FetchRequest),
}

/// Follow-up of a paginated intent, before it is tied to a concrete slice.
enum PagedFollowUp<F> {
    Fetch(PageRequest, F),
    Reload { page: u32, size: u32, filters: F },
    /// The slice was reset; results of earlier requests are unwanted.
    Cancel,
}

/// Reads the slice as it is after the transition.
fn paged_follow_up<T, F: FilterSet>(
    intent: &PageIntent<T, F>,
    slice: &PagedSlice<T, F>,
) -> Option<PagedFollowUp<F>> {
    let size = slice.pagination.page_size;
    match intent {
        PageIntent::LoadRequested {
            page,
            size,
            filters,
        } if *size > 0 => Some(PagedFollowUp::Fetch(
            PageRequest::new(*page, *size),
            filters.clone(),
        )),
        PageIntent::PageChanged { page } => Some(PagedFollowUp::Reload {
            page: *page,
            size,
            filters: slice.filters.clone(),
        }),
        PageIntent::PageSizeChanged { size } if *size > 0 => Some(PagedFollowUp::Reload {
            page: 0,
            size: *size,
            filters: slice.filters.clone(),
        }),
        PageIntent::FiltersChanged { .. } => Some(PagedFollowUp::Reload {
            page: 0,
            size,
            filters: slice.filters.clone(),
        }),
        PageIntent::FiltersCleared => Some(PagedFollowUp::Reload {
            page: 0,
            size,
            filters: F::default(),
        }),
        PageIntent::PaginationInitialized { page, size } if *size > 0 => {
            Some(PagedFollowUp::Reload {
                page: *page,
                size: *size,
                filters: slice.filters.clone(),
            })
        }
        PageIntent::DataCleared | PageIntent::PaginationReset => Some(PagedFollowUp::Cancel),
        _ => None,
    }
}

fn failure_code(ticket: &FetchTicket, err: &ApiError) -> ErrorCode {
    let code = ErrorCode::from(err);
    tracing::warn!(target_slice = ?ticket.target, code = %code, error = %err, "Load failed");
    code
}

fn paged_outcome<T, F: FilterSet>(ticket: &FetchTicket, result: Result<Page<T>, ApiError>) -> PageIntent<T, F> {
    match result {
        Ok(envelope) => PageIntent::LoadSucceeded { envelope },
        Err(err) => PageIntent::LoadFailed {
            code: failure_code(ticket, &err),
        },
    }
}

/// Derive-then-fetch rules plus last-request-wins bookkeeping.
#[derive(Debug, Default)]
pub struct EffectOrchestrator {
    latest: HashMap<FetchTarget, u64>,
    next_generation: u64,
}

impl EffectOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects caused by `intent`, given the state right after it was reduced.
    pub fn react(&mut self, intent: &NationsIntent, state: &NationsState) -> Vec<Effect> {
        match intent {
            NationsIntent::Init => Vec::new(),

            NationsIntent::CountriesList(i) => self.follow_up(
                paged_follow_up(i, &state.countries_list),
                FetchTarget::CountriesList,
                |page, filters| FetchCall::Countries { page, filters },
                NationsIntent::CountriesList,
            ),

            NationsIntent::CountryStats(i) => self.follow_up(
                paged_follow_up(i, &state.country_stats),
                FetchTarget::CountryStats,
                |page, _| FetchCall::CountryStats { page },
                NationsIntent::CountryStats,
            ),

            NationsIntent::CountryStatsOverview(i) => self.follow_up(
                paged_follow_up(i, &state.country_stats_overview),
                FetchTarget::CountryStatsOverview,
                |page, filters| FetchCall::CountryStatsOverview { page, filters },
                NationsIntent::CountryStatsOverview,
            ),

            NationsIntent::CountryLanguages(LanguagesIntent::LoadRequested { country_id }) => {
                vec![self.issue(FetchCall::CountryLanguages {
                    country_id: *country_id,
                })]
            }
            NationsIntent::CountryLanguages(LanguagesIntent::Cleared) => {
                self.cancel(FetchTarget::CountryLanguages);
                Vec::new()
            }
            NationsIntent::CountryLanguages(LanguagesIntent::CountrySelected { .. })
                if state.country_languages.requested_country_id.is_none() =>
            {
                self.cancel(FetchTarget::CountryLanguages);
                Vec::new()
            }
            NationsIntent::CountryLanguages(_) => Vec::new(),

            NationsIntent::ManagementInfo(ManagementInfoIntent::LoadRegions) => {
                vec![self.issue(FetchCall::Regions)]
            }
            NationsIntent::ManagementInfo(ManagementInfoIntent::LoadYearRange) => {
                vec![self.issue(FetchCall::YearRange)]
            }
            NationsIntent::ManagementInfo(_) => Vec::new(),
        }
    }

    fn follow_up<T, F: FilterSet>(
        &mut self,
        follow_up: Option<PagedFollowUp<F>>,
        target: FetchTarget,
        call: impl FnOnce(PageRequest, F) -> FetchCall,
        wrap: impl FnOnce(PageIntent<T, F>) -> NationsIntent,
    ) -> Vec<Effect> {
        match follow_up {
            Some(PagedFollowUp::Fetch(page, filters)) => vec![self.issue(call(page, filters))],
            Some(PagedFollowUp::Reload {
                page,
                size,
                filters,
            }) => vec![Effect::Dispatch(wrap(PageIntent::LoadRequested {
                page,
                size,
                filters,
            }))],
            Some(PagedFollowUp::Cancel) => {
                self.cancel(target);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Ticket `call` as the newest fetch of its target.
    fn issue(&mut self, call: FetchCall) -> Effect {
        self.next_generation += 1;
        let target = call.target();
        self.latest.insert(target, self.next_generation);
        Effect::Fetch(FetchRequest {
            ticket: FetchTicket {
                target,
                generation: self.next_generation,
            },
            call,
        })
    }

    /// Drop interest in every in-flight fetch of `target`.
    pub fn cancel(&mut self, target: FetchTarget) {
        self.latest.remove(&target);
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.latest.get(&ticket.target) == Some(&ticket.generation)
    }

    /// Terminal intent for `outcome`, or `None` when a newer fetch for the
    /// same target was issued since.
    pub fn resolve(&mut self, outcome: FetchOutcome) -> Option<NationsIntent> {
        let FetchOutcome { ticket, result } = outcome;
        if !self.is_current(&ticket) {
            tracing::trace!(
                target_slice = ?ticket.target,
                generation = ticket.generation,
                "Discarding superseded fetch result"
            );
            return None;
        }
        self.latest.remove(&ticket.target);

        let intent = match result {
            FetchResult::Countries(result) => {
                NationsIntent::CountriesList(paged_outcome(&ticket, result))
            }
            FetchResult::CountryStats(result) => {
                NationsIntent::CountryStats(paged_outcome(&ticket, result))
            }
            FetchResult::CountryStatsOverview(result) => {
                NationsIntent::CountryStatsOverview(paged_outcome(&ticket, result))
            }
            FetchResult::CountryLanguages(result) => NationsIntent::CountryLanguages(match result {
                Ok(languages) => LanguagesIntent::LoadSucceeded { languages },
                Err(err) => LanguagesIntent::LoadFailed {
                    code: failure_code(&ticket, &err),
                },
            }),
            FetchResult::Regions(result) => NationsIntent::ManagementInfo(match result {
                Ok(regions) => ManagementInfoIntent::RegionsLoaded { regions },
                Err(err) => ManagementInfoIntent::RegionsFailed {
                    code: failure_code(&ticket, &err),
                },
            }),
            FetchResult::YearRange(result) => NationsIntent::ManagementInfo(match result {
                Ok(range) => ManagementInfoIntent::YearRangeLoaded { range },
                Err(err) => ManagementInfoIntent::YearRangeFailed {
                    code: failure_code(&ticket, &err),
                },
            }),
        };
        Some(intent)
    }
}

/// Perform `request` against `api`. Never fails: errors travel inside the
/// outcome.
pub async fn execute<A: NationsApi + ?Sized>(api: &A, request: FetchRequest) -> FetchOutcome {
    let FetchRequest { ticket, call } = request;
    let result = match call {
        FetchCall::Countries { page, filters } => {
            FetchResult::Countries(api.countries(page, &filters).await)
        }
        FetchCall::CountryStats { page } => {
            FetchResult::CountryStats(api.max_gdp_per_population(page).await)
        }
        FetchCall::CountryStatsOverview { page, filters } => {
            FetchResult::CountryStatsOverview(api.country_stats_overview(page, &filters).await)
        }
        FetchCall::CountryLanguages { country_id } => {
            FetchResult::CountryLanguages(api.country_languages(country_id).await)
        }
        FetchCall::Regions => FetchResult::Regions(api.regions().await),
        FetchCall::YearRange => FetchResult::YearRange(api.year_range().await),
    };
    FetchOutcome { ticket, result }
}
