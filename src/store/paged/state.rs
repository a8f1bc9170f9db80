use std::fmt::Debug;

use serde::Serialize;

use crate::model::FilterSet;
use crate::store::{ErrorCode, PaginationState, DEFAULT_PAGE_SIZE};
use crate::ui::mvi::UiState;

/// Requirements on the element type of a paginated collection.
pub trait SliceItem: Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<T> SliceItem for T where T: Clone + PartialEq + Debug + Send + Sync + 'static {}

/// State of one paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedSlice<T, F> {
    /// Items of the current page only.
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<ErrorCode>,
    pub pagination: PaginationState,
    pub filters: F,
    /// Page size restored by `PaginationReset`.
    #[serde(skip)]
    pub default_page_size: u32,
}

impl<T, F: Default> PagedSlice<T, F> {
    pub fn new(page_size: u32) -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
            pagination: PaginationState::new(page_size),
            filters: F::default(),
            default_page_size: page_size,
        }
    }

    /// Same slice with `filters` preset.
    pub fn with_filters(self, filters: F) -> Self {
        Self { filters, ..self }
    }

    /// Not loading and no error.
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

impl<T, F: Default> Default for PagedSlice<T, F> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T: SliceItem, F: FilterSet> UiState for PagedSlice<T, F> {}
