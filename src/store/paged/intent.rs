use crate::model::{FilterSet, Page};
use crate::store::ErrorCode;
use crate::ui::mvi::Intent;

use super::state::SliceItem;

/// Intents understood by every paginated slice.
#[derive(Debug, Clone, PartialEq)]
pub enum PageIntent<T, F: FilterSet> {
    /// Fetch `page` of `size` items with `filters`.
    LoadRequested { page: u32, size: u32, filters: F },
    /// The backend answered the current request.
    LoadSucceeded { envelope: Page<T> },
    /// The current request failed.
    LoadFailed { code: ErrorCode },
    PageChanged { page: u32 },
    PageSizeChanged { size: u32 },
    /// Field-wise edit of the current filters.
    FiltersChanged { patch: F::Patch },
    FiltersCleared,
    PaginationInitialized { page: u32, size: u32 },
    PaginationReset,
    DataCleared,
    ErrorReset,
}

impl<T, F: FilterSet> PageIntent<T, F> {
    /// Human-readable action name used in intent labels.
    pub fn name(&self) -> &'static str {
        match self {
            PageIntent::LoadRequested { .. } => "Load Requested",
            PageIntent::LoadSucceeded { .. } => "Load Succeeded",
            PageIntent::LoadFailed { .. } => "Load Failed",
            PageIntent::PageChanged { .. } => "Page Changed",
            PageIntent::PageSizeChanged { .. } => "Page Size Changed",
            PageIntent::FiltersChanged { .. } => "Filters Changed",
            PageIntent::FiltersCleared => "Filters Cleared",
            PageIntent::PaginationInitialized { .. } => "Pagination Initialized",
            PageIntent::PaginationReset => "Pagination Reset",
            PageIntent::DataCleared => "Data Cleared",
            PageIntent::ErrorReset => "Error Reset",
        }
    }
}

impl<T: SliceItem, F: FilterSet> Intent for PageIntent<T, F> {}
