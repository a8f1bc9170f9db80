use crate::ui::mvi::Reducer;

use super::intent::ManagementInfoIntent;
use super::state::{LoadStatus, ManagementInfoState};

pub struct ManagementInfoReducer;

impl Reducer for ManagementInfoReducer {
    type State = ManagementInfoState;
    type Intent = ManagementInfoIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ManagementInfoIntent::LoadRegions => state.regions_status = LoadStatus::started(),
            ManagementInfoIntent::RegionsLoaded { regions } => {
                state.regions = regions;
                state.regions_status = LoadStatus::done();
            }
            ManagementInfoIntent::RegionsFailed { code } => {
                state.regions = Vec::new();
                state.regions_status = LoadStatus::failed(code);
            }
            ManagementInfoIntent::LoadYearRange => state.year_range_status = LoadStatus::started(),
            ManagementInfoIntent::YearRangeLoaded { range } => {
                state.year_range = Some(range);
                state.year_range_status = LoadStatus::done();
            }
            ManagementInfoIntent::YearRangeFailed { code } => {
                state.year_range = None;
                state.year_range_status = LoadStatus::failed(code);
            }
        }
        state
    }
}
