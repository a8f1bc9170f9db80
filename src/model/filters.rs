//! Filter sets carried by paginated slices and their query-string encoding.

use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Behaviour shared by every slice's filter set.
pub trait FilterSet: Clone + PartialEq + Default + Debug + Send + Sync + 'static {
    /// Per-field edit carried by `FiltersChanged`.
    type Patch: Clone + PartialEq + Default + Debug + Send + Sync + 'static;

    /// Apply `patch` field by field: `Keep` fields stay as they are, the
    /// others are overwritten or unset.
    fn apply(self, patch: Self::Patch) -> Self;

    /// Query parameters for the backend, in wire order. Falsy values
    /// (empty strings, zero numbers) are omitted.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Edit of one optional filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    Keep,
    Set(T),
    Unset,
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        FieldPatch::Keep
    }
}

impl<T> FieldPatch<T> {
    /// Form-style edit: a value sets the field, `None` unsets it.
    pub fn replace(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldPatch::Set(value),
            None => FieldPatch::Unset,
        }
    }

    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldPatch::Keep => current,
            FieldPatch::Set(value) => Some(value),
            FieldPatch::Unset => None,
        }
    }
}

/// Slices without filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoFilters;

impl FilterSet for NoFilters {
    type Patch = NoFilters;

    fn apply(self, _patch: Self::Patch) -> Self {
        NoFilters
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Filters of the countries list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,
}

/// Edit of [`CountriesFilters`]; untouched fields default to `Keep`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountriesFiltersPatch {
    pub region: FieldPatch<String>,
    pub search_query: FieldPatch<String>,
    pub year_from: FieldPatch<i32>,
    pub year_to: FieldPatch<i32>,
}

/// Every field replaced, unset ones cleared.
impl From<CountriesFilters> for CountriesFiltersPatch {
    fn from(filters: CountriesFilters) -> Self {
        Self {
            region: FieldPatch::replace(filters.region),
            search_query: FieldPatch::replace(filters.search_query),
            year_from: FieldPatch::replace(filters.year_from),
            year_to: FieldPatch::replace(filters.year_to),
        }
    }
}

impl FilterSet for CountriesFilters {
    type Patch = CountriesFiltersPatch;

    fn apply(self, patch: Self::Patch) -> Self {
        Self {
            region: patch.region.apply(self.region),
            search_query: patch.search_query.apply(self.search_query),
            year_from: patch.year_from.apply(self.year_from),
            year_to: patch.year_to.apply(self.year_to),
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "region", &self.region);
        push_text(&mut pairs, "search", &self.search_query);
        push_number(&mut pairs, "yearFrom", self.year_from);
        push_number(&mut pairs, "yearTo", self.year_to);
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{}' (expected asc or desc)", other)),
        }
    }
}

/// Filters of the country statistics overview.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// Edit of [`OverviewFilters`]; untouched fields default to `Keep`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverviewFiltersPatch {
    pub region_id: FieldPatch<u32>,
    pub year_from: FieldPatch<i32>,
    pub year_to: FieldPatch<i32>,
    pub continent_name: FieldPatch<String>,
    pub region_name: FieldPatch<String>,
    pub country_name: FieldPatch<String>,
    pub year: FieldPatch<i32>,
    pub sort_by: FieldPatch<String>,
    pub direction: FieldPatch<SortDirection>,
}

impl From<OverviewFilters> for OverviewFiltersPatch {
    fn from(filters: OverviewFilters) -> Self {
        Self {
            region_id: FieldPatch::replace(filters.region_id),
            year_from: FieldPatch::replace(filters.year_from),
            year_to: FieldPatch::replace(filters.year_to),
            continent_name: FieldPatch::replace(filters.continent_name),
            region_name: FieldPatch::replace(filters.region_name),
            country_name: FieldPatch::replace(filters.country_name),
            year: FieldPatch::replace(filters.year),
            sort_by: FieldPatch::replace(filters.sort_by),
            direction: FieldPatch::replace(filters.direction),
        }
    }
}

impl FilterSet for OverviewFilters {
    type Patch = OverviewFiltersPatch;

    fn apply(self, patch: Self::Patch) -> Self {
        Self {
            region_id: patch.region_id.apply(self.region_id),
            year_from: patch.year_from.apply(self.year_from),
            year_to: patch.year_to.apply(self.year_to),
            continent_name: patch.continent_name.apply(self.continent_name),
            region_name: patch.region_name.apply(self.region_name),
            country_name: patch.country_name.apply(self.country_name),
            year: patch.year.apply(self.year),
            sort_by: patch.sort_by.apply(self.sort_by),
            direction: patch.direction.apply(self.direction),
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(region_id) = self.region_id.filter(|id| *id != 0) {
            pairs.push(("regionId", region_id.to_string()));
        }
        push_number(&mut pairs, "yearFrom", self.year_from);
        push_number(&mut pairs, "yearTo", self.year_to);
        push_text(&mut pairs, "continentName", &self.continent_name);
        push_text(&mut pairs, "regionName", &self.region_name);
        push_text(&mut pairs, "countryName", &self.country_name);
        push_number(&mut pairs, "year", self.year);
        push_text(&mut pairs, "sortBy", &self.sort_by);
        if let Some(direction) = self.direction {
            pairs.push(("direction", direction.as_str().to_string()));
        }
        pairs
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

fn push_number(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<i32>) {
    if let Some(value) = value.filter(|v| *v != 0) {
        pairs.push((key, value.to_string()));
    }
}
