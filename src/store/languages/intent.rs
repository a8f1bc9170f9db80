use crate::model::{CountryDto, LanguageDto};
use crate::store::ErrorCode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LanguagesIntent {
    LoadRequested { country_id: u32 },
    LoadSucceeded { languages: Vec<LanguageDto> },
    LoadFailed { code: ErrorCode },
    /// Forget the selection and its languages.
    Cleared,
    CountrySelected { country: CountryDto },
}

impl LanguagesIntent {
    pub fn name(&self) -> &'static str {
        match self {
            LanguagesIntent::LoadRequested { .. } => "Load Requested",
            LanguagesIntent::LoadSucceeded { .. } => "Load Succeeded",
            LanguagesIntent::LoadFailed { .. } => "Load Failed",
            LanguagesIntent::Cleared => "Cleared",
            LanguagesIntent::CountrySelected { .. } => "Country Selected",
        }
    }
}

impl Intent for LanguagesIntent {}
