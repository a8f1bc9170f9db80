use crate::ui::mvi::Reducer;

use super::intent::LanguagesIntent;
use super::state::LanguagesState;

pub struct LanguagesReducer;

impl Reducer for LanguagesReducer {
    type State = LanguagesState;
    type Intent = LanguagesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LanguagesIntent::LoadRequested { country_id } => {
                state.loading = true;
                state.error = None;
                state.requested_country_id = Some(country_id);
            }
            LanguagesIntent::LoadSucceeded { languages } => {
                state.data = languages;
                state.loading = false;
                state.error = None;
                state.requested_country_id = None;
            }
            LanguagesIntent::LoadFailed { code } => {
                state.data = Vec::new();
                state.loading = false;
                state.error = Some(code);
                state.requested_country_id = None;
            }
            LanguagesIntent::Cleared => {
                state = LanguagesState::default();
            }
            LanguagesIntent::CountrySelected { country } => {
                if state.selected_country.as_ref().and_then(|c| c.id) != country.id {
                    state.data = Vec::new();
                }
                // A lookup for another country is abandoned.
                if state.requested_country_id.is_some()
                    && state.requested_country_id != country.id
                {
                    state.requested_country_id = None;
                    state.loading = false;
                }
                state.selected_country = Some(country);
            }
        }
        state
    }
}
