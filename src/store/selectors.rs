//! View-model composers.
//!
//! Pure functions of [`NationsState`]. They are cheap enough to rerun after
//! every transition; [`Memoized`] skips the work when the snapshot has not
//! changed.

use std::sync::Arc;

use serde::Serialize;

use crate::model::{
    CountryDto, CountryStats, CountryStatsOverviewDto, LanguageDto, RegionDto, SortDirection,
    YearRange,
};
use crate::ui::pagination::PaginationConfig;

use super::paged::PagedSlice;
use super::state::{ErrorCode, NationsState, PaginationState};

pub const COUNTRIES_LIST_VISIBLE_PAGES: u32 = 3;
pub const COUNTRY_STATS_VISIBLE_PAGES: u32 = 5;
pub const OVERVIEW_VISIBLE_PAGES: u32 = 3;

/// View model of any paginated list screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedListViewModel<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<ErrorCode>,
    pub has_items: bool,
    pub item_count: usize,
    pub has_error: bool,
    pub is_ready: bool,
    pub pagination_config: PaginationConfig,
}

pub type CountriesListViewModel = PaginatedListViewModel<CountryDto>;
pub type CountryStatsViewModel = PaginatedListViewModel<CountryStats>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStatsOverviewViewModel {
    #[serde(flatten)]
    pub list: PaginatedListViewModel<CountryStatsOverviewDto>,
    pub sort_by: Option<String>,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryLanguagesViewModel {
    pub selected_country: Option<CountryDto>,
    pub languages: Vec<LanguageDto>,
    pub loading: bool,
    pub error: Option<ErrorCode>,
    pub has_languages: bool,
    pub language_count: usize,
    pub has_error: bool,
    pub is_ready: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementInfoViewModel {
    pub regions: Vec<RegionDto>,
    pub year_range: Option<YearRange>,
    pub loading: bool,
    pub error: Option<ErrorCode>,
    pub regions_error: Option<ErrorCode>,
    pub year_range_error: Option<ErrorCode>,
    pub has_error: bool,
    pub is_ready: bool,
}

pub fn pagination_config(pagination: &PaginationState, max_visible_pages: u32) -> PaginationConfig {
    PaginationConfig {
        current_page: pagination.current_page,
        page_size: pagination.page_size,
        total_elements: pagination.total_elements,
        total_pages: pagination.total_pages,
        show_first_last: true,
        show_prev_next: true,
        max_visible_pages,
    }
}

pub fn paginated_list<T: Clone, F: Default>(
    slice: &PagedSlice<T, F>,
    max_visible_pages: u32,
) -> PaginatedListViewModel<T> {
    PaginatedListViewModel {
        items: slice.data.clone(),
        loading: slice.loading,
        error: slice.error,
        has_items: !slice.data.is_empty(),
        item_count: slice.data.len(),
        has_error: slice.error.is_some(),
        is_ready: slice.is_ready(),
        pagination_config: pagination_config(&slice.pagination, max_visible_pages),
    }
}

pub fn select_countries_list(state: &NationsState) -> CountriesListViewModel {
    paginated_list(&state.countries_list, COUNTRIES_LIST_VISIBLE_PAGES)
}

pub fn select_country_stats(state: &NationsState) -> CountryStatsViewModel {
    paginated_list(&state.country_stats, COUNTRY_STATS_VISIBLE_PAGES)
}

pub fn select_country_stats_overview(state: &NationsState) -> CountryStatsOverviewViewModel {
    let slice = &state.country_stats_overview;
    CountryStatsOverviewViewModel {
        list: paginated_list(slice, OVERVIEW_VISIBLE_PAGES),
        sort_by: slice.filters.sort_by.clone(),
        direction: slice.filters.direction,
    }
}

pub fn select_country_languages(state: &NationsState) -> CountryLanguagesViewModel {
    let slice = &state.country_languages;
    let has_error = slice.error.is_some();
    CountryLanguagesViewModel {
        selected_country: slice.selected_country.clone(),
        languages: slice.data.clone(),
        loading: slice.loading,
        error: slice.error,
        has_languages: !slice.data.is_empty(),
        language_count: slice.data.len(),
        has_error,
        is_ready: !slice.loading && !has_error,
    }
}

pub fn select_management_info(state: &NationsState) -> ManagementInfoViewModel {
    let info = &state.management_info;
    let loading = info.loading();
    let error = info.error();
    ManagementInfoViewModel {
        regions: info.regions.clone(),
        year_range: info.year_range,
        loading,
        error,
        regions_error: info.regions_status.error,
        year_range_error: info.year_range_status.error,
        has_error: error.is_some(),
        is_ready: !loading && error.is_none(),
    }
}

/// Caches the last view model per snapshot, compared by pointer.
pub struct Memoized<V> {
    selector: fn(&NationsState) -> V,
    last: Option<(Arc<NationsState>, V)>,
}

impl<V: Clone> Memoized<V> {
    pub fn new(selector: fn(&NationsState) -> V) -> Self {
        Self {
            selector,
            last: None,
        }
    }

    pub fn get(&mut self, state: &Arc<NationsState>) -> V {
        match &self.last {
            Some((cached, view)) if Arc::ptr_eq(cached, state) => view.clone(),
            _ => {
                let view = (self.selector)(state.as_ref());
                self.last = Some((Arc::clone(state), view.clone()));
                view
            }
        }
    }
}
