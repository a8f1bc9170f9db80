use std::fmt;

use crate::model::{
    CountriesFilters, CountryDto, CountryStats, CountryStatsOverviewDto, NoFilters,
    OverviewFilters,
};
use crate::ui::mvi::Intent;

use super::languages::LanguagesIntent;
use super::management::ManagementInfoIntent;
use super::paged::PageIntent;
use super::state::SliceId;

pub type CountriesListIntent = PageIntent<CountryDto, CountriesFilters>;
pub type CountryStatsIntent = PageIntent<CountryStats, NoFilters>;
pub type OverviewIntent = PageIntent<CountryStatsOverviewDto, OverviewFilters>;

/// Every intent the store accepts, tagged with the slice it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum NationsIntent {
    /// Store start-up. No slice reacts to it.
    Init,
    CountriesList(CountriesListIntent),
    CountryStats(CountryStatsIntent),
    CountryStatsOverview(OverviewIntent),
    CountryLanguages(LanguagesIntent),
    ManagementInfo(ManagementInfoIntent),
}

impl NationsIntent {
    pub fn slice(&self) -> Option<SliceId> {
        match self {
            NationsIntent::Init => None,
            NationsIntent::CountriesList(_) => Some(SliceId::CountriesList),
            NationsIntent::CountryStats(_) => Some(SliceId::CountryStats),
            NationsIntent::CountryStatsOverview(_) => Some(SliceId::CountryStatsOverview),
            NationsIntent::CountryLanguages(_) => Some(SliceId::CountryLanguages),
            NationsIntent::ManagementInfo(_) => Some(SliceId::ManagementInfo),
        }
    }

    pub fn label(&self) -> IntentLabel {
        let action = match self {
            NationsIntent::Init => "Init",
            NationsIntent::CountriesList(i) => i.name(),
            NationsIntent::CountryStats(i) => i.name(),
            NationsIntent::CountryStatsOverview(i) => i.name(),
            NationsIntent::CountryLanguages(i) => i.name(),
            NationsIntent::ManagementInfo(i) => i.name(),
        };
        IntentLabel {
            slice: self.slice().map_or("Store", |slice| slice.label()),
            action,
        }
    }
}

impl Intent for NationsIntent {}

impl From<CountriesListIntent> for NationsIntent {
    fn from(intent: CountriesListIntent) -> Self {
        NationsIntent::CountriesList(intent)
    }
}

impl From<CountryStatsIntent> for NationsIntent {
    fn from(intent: CountryStatsIntent) -> Self {
        NationsIntent::CountryStats(intent)
    }
}

impl From<OverviewIntent> for NationsIntent {
    fn from(intent: OverviewIntent) -> Self {
        NationsIntent::CountryStatsOverview(intent)
    }
}

impl From<LanguagesIntent> for NationsIntent {
    fn from(intent: LanguagesIntent) -> Self {
        NationsIntent::CountryLanguages(intent)
    }
}

impl From<ManagementInfoIntent> for NationsIntent {
    fn from(intent: ManagementInfoIntent) -> Self {
        NationsIntent::ManagementInfo(intent)
    }
}

/// Stable `[Slice] Action` name of an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentLabel {
    pub slice: &'static str,
    pub action: &'static str,
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.slice, self.action)
    }
}
