use crate::model::{
    CountriesFilters, CountryDto, CountryStats, CountryStatsOverviewDto, NoFilters,
    OverviewFilters,
};
use crate::ui::mvi::Reducer;

use super::intent::NationsIntent;
use super::languages::LanguagesReducer;
use super::management::ManagementInfoReducer;
use super::paged::PageReducer;
use super::state::NationsState;

type CountriesListReducer = PageReducer<CountryDto, CountriesFilters>;
type CountryStatsReducer = PageReducer<CountryStats, NoFilters>;
type OverviewReducer = PageReducer<CountryStatsOverviewDto, OverviewFilters>;

/// Routes each intent to the reducer of its slice.
macro_rules! reduce_slice {
    ($state:ident, $field:ident, $reducer:ty, $intent:expr) => {
        $state.$field = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent)
    };
}

/// Composite reducer. Only the targeted slice changes; every other slice
/// keeps its value.
pub struct NationsReducer;

impl Reducer for NationsReducer {
    type State = NationsState;
    type Intent = NationsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NationsIntent::Init => {}
            NationsIntent::CountriesList(i) => {
                reduce_slice!(state, countries_list, CountriesListReducer, i)
            }
            NationsIntent::CountryStats(i) => {
                reduce_slice!(state, country_stats, CountryStatsReducer, i)
            }
            NationsIntent::CountryStatsOverview(i) => {
                reduce_slice!(state, country_stats_overview, OverviewReducer, i)
            }
            NationsIntent::CountryLanguages(i) => {
                reduce_slice!(state, country_languages, LanguagesReducer, i)
            }
            NationsIntent::ManagementInfo(i) => {
                reduce_slice!(state, management_info, ManagementInfoReducer, i)
            }
        }
        state
    }
}
