use std::marker::PhantomData;

use crate::model::FilterSet;
use crate::store::PaginationState;
use crate::ui::mvi::Reducer;

use super::intent::PageIntent;
use super::state::{PagedSlice, SliceItem};

/// Reducer shared by all paginated slices.
///
/// Pure and total: a zero page size and intents that do not apply leave
/// the slice untouched. Resetting or clearing the slice also ends any load
/// in progress, since its result will be discarded.
pub struct PageReducer<T, F>(PhantomData<fn() -> (T, F)>);

impl<T: SliceItem, F: FilterSet> Reducer for PageReducer<T, F> {
    type State = PagedSlice<T, F>;
    type Intent = PageIntent<T, F>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::LoadRequested { size, .. } if size > 0 => {
                state.loading = true;
                state.error = None;
            }

            PageIntent::LoadSucceeded { envelope } => {
                state.pagination = state.pagination.from_envelope(&envelope);
                state.data = envelope.content;
                state.loading = false;
                state.error = None;
            }

            PageIntent::LoadFailed { code } => {
                state.data = Vec::new();
                state.loading = false;
                state.error = Some(code);
            }

            PageIntent::PageChanged { page } => {
                state.pagination.current_page = page;
            }

            PageIntent::PageSizeChanged { size } if size > 0 => {
                state.pagination.page_size = size;
                state.pagination.current_page = 0;
            }

            PageIntent::FiltersChanged { patch } => {
                state.filters = std::mem::take(&mut state.filters).apply(patch);
                state.pagination.current_page = 0;
            }

            PageIntent::FiltersCleared => {
                state.filters = F::default();
                state.pagination.current_page = 0;
            }

            PageIntent::PaginationInitialized { page, size } if size > 0 => {
                state.pagination.current_page = page;
                state.pagination.page_size = size;
            }

            PageIntent::PaginationReset => {
                state.pagination = PaginationState::new(state.default_page_size);
                state.loading = false;
            }

            PageIntent::DataCleared => {
                state.data = Vec::new();
                state.pagination.total_elements = 0;
                state.pagination.total_pages = 0;
                state.loading = false;
            }

            PageIntent::ErrorReset => {
                state.error = None;
            }

            PageIntent::LoadRequested { .. }
            | PageIntent::PageSizeChanged { .. }
            | PageIntent::PaginationInitialized { .. } => {}
        }
        state
    }
}
