use crate::model::{RegionDto, YearRange};
use crate::store::ErrorCode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ManagementInfoIntent {
    LoadRegions,
    RegionsLoaded { regions: Vec<RegionDto> },
    RegionsFailed { code: ErrorCode },
    LoadYearRange,
    YearRangeLoaded { range: YearRange },
    YearRangeFailed { code: ErrorCode },
}

impl ManagementInfoIntent {
    pub fn name(&self) -> &'static str {
        match self {
            ManagementInfoIntent::LoadRegions => "Load Regions",
            ManagementInfoIntent::RegionsLoaded { .. } => "Regions Loaded",
            ManagementInfoIntent::RegionsFailed { .. } => "Regions Failed",
            ManagementInfoIntent::LoadYearRange => "Load Year Range",
            ManagementInfoIntent::YearRangeLoaded { .. } => "Year Range Loaded",
            ManagementInfoIntent::YearRangeFailed { .. } => "Year Range Failed",
        }
    }
}

impl Intent for ManagementInfoIntent {}
