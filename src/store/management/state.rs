use serde::Serialize;

use crate::model::{RegionDto, YearRange};
use crate::store::ErrorCode;
use crate::ui::mvi::UiState;

/// Loading flag and error of one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadStatus {
    pub loading: bool,
    pub error: Option<ErrorCode>,
}

impl LoadStatus {
    pub fn started() -> Self {
        Self {
            loading: true,
            error: None,
        }
    }

    pub fn done() -> Self {
        Self::default()
    }

    pub fn failed(code: ErrorCode) -> Self {
        Self {
            loading: false,
            error: Some(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementInfoState {
    pub regions: Vec<RegionDto>,
    pub regions_status: LoadStatus,
    pub year_range: Option<YearRange>,
    pub year_range_status: LoadStatus,
}

impl ManagementInfoState {
    pub fn loading(&self) -> bool {
        self.regions_status.loading || self.year_range_status.loading
    }

    /// First error among the lookups, regions first.
    pub fn error(&self) -> Option<ErrorCode> {
        self.regions_status.error.or(self.year_range_status.error)
    }
}

impl UiState for ManagementInfoState {}
