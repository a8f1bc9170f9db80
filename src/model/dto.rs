use serde::{Deserialize, Serialize};

/// A country as listed by `/countries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub area: f64,
    pub country_code2: String,
}

/// A language spoken in a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    #[serde(default)]
    pub country_id: Option<u32>,
    #[serde(default)]
    pub language_id: Option<u32>,
    pub language_name: String,
    pub country_name: String,
    pub country_code3: String,
    pub official: bool,
}

/// Best GDP-per-population year of a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    pub country_name: String,
    pub country_code2: String,
    pub area: f64,
    pub year: i32,
    pub population: u64,
    pub gdp: f64,
    pub gdp_per_population: f64,
}

/// One row of the country statistics overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStatsOverviewDto {
    pub continent_name: String,
    pub region_name: String,
    pub country_name: String,
    pub year: i32,
    pub population: u64,
    pub gdp: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDto {
    pub id: u32,
    pub name: String,
}

/// Years covered by the statistics overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    pub min_year: i32,
    pub max_year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_reads_camel_case_fields() {
        let json = r#"{"id":7,"name":"Greece","area":131957.0,"countryCode2":"GR"}"#;
        let country: CountryDto = serde_json::from_str(json).unwrap();
        assert_eq!(country.id, Some(7));
        assert_eq!(country.country_code2, "GR");
    }

    #[test]
    fn country_id_is_optional() {
        let json = r#"{"name":"Chad","area":1284000.0,"countryCode2":"TD"}"#;
        let country: CountryDto = serde_json::from_str(json).unwrap();
        assert_eq!(country.id, None);
    }

    #[test]
    fn year_range_reads_min_max() {
        let range: YearRange = serde_json::from_str(r#"{"minYear":1960,"maxYear":2018}"#).unwrap();
        assert_eq!(range, YearRange { min_year: 1960, max_year: 2018 });
    }
}
