//! Data transfer objects exchanged with the nations backend.

mod dto;
mod filters;
mod page;

pub use dto::{
    CountryDto, CountryStats, CountryStatsOverviewDto, LanguageDto, RegionDto, YearRange,
};
pub use filters::{
    CountriesFilters, CountriesFiltersPatch, FieldPatch, FilterSet, NoFilters, OverviewFilters,
    OverviewFiltersPatch, SortDirection,
};
pub use page::{Page, PageRequest, Pageable};
pub(crate) use page::total_pages_for;
