use serde::Serialize;

use crate::model::{CountryDto, LanguageDto};
use crate::store::ErrorCode;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesState {
    pub data: Vec<LanguageDto>,
    pub loading: bool,
    pub error: Option<ErrorCode>,
    /// Country picked in the countries list, if any.
    pub selected_country: Option<CountryDto>,
    /// Country of the lookup in flight.
    #[serde(skip)]
    pub requested_country_id: Option<u32>,
}

impl UiState for LanguagesState {}
