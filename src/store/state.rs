use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::config::PaginationSettings;
use crate::model::{
    CountriesFilters, CountryDto, CountryStats, CountryStatsOverviewDto, NoFilters,
    OverviewFilters, Page, PageRequest,
};
use crate::ui::mvi::UiState;

use super::languages::LanguagesState;
use super::management::ManagementInfoState;
use super::paged::PagedSlice;

/// Page size of every paginated slice unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Failure category stored in a slice after a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    Connection,
    NotFound,
    Server,
    Forbidden,
    Unknown,
}

impl ErrorCode {
    /// Map an HTTP-like status class to an error code.
    ///
    /// `0` means the request never got a response.
    pub fn from_status(status: u16) -> Self {
        match status {
            0 => ErrorCode::Connection,
            404 => ErrorCode::NotFound,
            s if s >= 500 => ErrorCode::Server,
            403 => ErrorCode::Forbidden,
            _ => ErrorCode::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Connection => "connection",
            ErrorCode::NotFound => "notFound",
            ErrorCode::Server => "server",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::Unknown => "unknown",
        }
    }

    /// Translation key shown by localized front-ends.
    pub fn translation_key(&self) -> &'static str {
        match self {
            ErrorCode::Connection => "NATIONS-error.connection",
            ErrorCode::NotFound => "NATIONS-error.notFound",
            ErrorCode::Server => "NATIONS-error.server",
            ErrorCode::Forbidden => "NATIONS-error.forbidden",
            ErrorCode::Unknown => "NATIONS-error.unknown",
        }
    }

    /// English fallback message.
    pub fn describe(&self) -> &'static str {
        match self {
            ErrorCode::Connection => "Unable to connect to the server",
            ErrorCode::NotFound => "The requested data was not found",
            ErrorCode::Server => "The server encountered an error",
            ErrorCode::Forbidden => "Access to this data is forbidden",
            ErrorCode::Unknown => "An unexpected error occurred",
        }
    }
}

impl From<&ApiError> for ErrorCode {
    fn from(err: &ApiError) -> Self {
        ErrorCode::from_status(err.status())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination metadata of one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 0,
            page_size,
            total_elements: 0,
            total_pages: 0,
        }
    }

    /// Pagination after a page arrived.
    ///
    /// Page coordinates come from the envelope when it carries them and
    /// from `self` otherwise; `total_pages` is always recomputed from the
    /// element count so it agrees with the effective page size.
    pub fn from_envelope<T>(&self, envelope: &Page<T>) -> Self {
        let page_size = envelope
            .page_size()
            .filter(|size| *size > 0)
            .unwrap_or(self.page_size);
        let total_pages = crate::model::total_pages_for(envelope.total_elements, page_size)
            .unwrap_or(envelope.total_pages);

        Self {
            current_page: envelope.page_number().unwrap_or(self.current_page),
            page_size,
            total_elements: envelope.total_elements,
            total_pages,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.current_page, self.page_size)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Names of the slices held by [`NationsState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SliceId {
    CountriesList,
    CountryStats,
    CountryStatsOverview,
    CountryLanguages,
    ManagementInfo,
}

impl SliceId {
    pub fn label(&self) -> &'static str {
        match self {
            SliceId::CountriesList => "Countries List",
            SliceId::CountryStats => "Country Stats",
            SliceId::CountryStatsOverview => "Country Stats Overview",
            SliceId::CountryLanguages => "Country Languages",
            SliceId::ManagementInfo => "Management Info",
        }
    }
}

/// Composite state: one independent sub-tree per collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationsState {
    pub countries_list: PagedSlice<CountryDto, CountriesFilters>,
    pub country_stats: PagedSlice<CountryStats, NoFilters>,
    pub country_stats_overview: PagedSlice<CountryStatsOverviewDto, OverviewFilters>,
    pub country_languages: LanguagesState,
    pub management_info: ManagementInfoState,
}

impl NationsState {
    /// Initial state with configured page sizes.
    pub fn with_settings(settings: &PaginationSettings) -> Self {
        Self {
            countries_list: PagedSlice::new(settings.countries_page_size),
            country_stats: PagedSlice::new(settings.country_stats_page_size),
            country_stats_overview: PagedSlice::new(settings.overview_page_size),
            country_languages: LanguagesState::default(),
            management_info: ManagementInfoState::default(),
        }
    }
}

impl Default for NationsState {
    fn default() -> Self {
        Self::with_settings(&PaginationSettings::default())
    }
}

impl UiState for NationsState {}
