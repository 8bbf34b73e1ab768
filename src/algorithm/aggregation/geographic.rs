//! Geographic distribution of admissions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;

use super::statistics::count_by;

/// Number of cities reported in the ranking
pub const TOP_CITIES_LIMIT: usize = 10;

/// One entry of the city ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityShare {
    /// City label
    pub name: String,
    /// Records from the city
    pub count: usize,
    /// Share of all analysed records, rounded to a whole percent
    pub percentage: u32,
}

/// Where patients come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicDistribution {
    /// Records per city
    pub by_city: BTreeMap<String, usize>,
    /// Records per region
    pub by_region: BTreeMap<String, usize>,
    /// Largest cities by record count
    pub top_cities: Vec<CityShare>,
}

/// Build the geographic distribution for a set of records
///
/// Records without a city or region only drop out of the corresponding
/// mapping. Percentages are relative to every record passed in, located or
/// not.
#[must_use]
pub fn analyze_geography<'a, I>(records: I) -> GeographicDistribution
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let records: Vec<&PatientRecord> = records.into_iter().collect();
    let total = records.len();

    let by_city = count_by(records.iter().copied(), PatientRecord::city_label);
    let by_region = count_by(records.iter().copied(), PatientRecord::region_label);

    let mut ranking: Vec<(&String, &usize)> = by_city.iter().collect();
    // Stable: equal counts stay in label order
    ranking.sort_by(|a, b| b.1.cmp(a.1));

    let top_cities = ranking
        .into_iter()
        .take(TOP_CITIES_LIMIT)
        .map(|(name, &count)| CityShare {
            name: name.clone(),
            count,
            percentage: percentage_of(count, total),
        })
        .collect();

    GeographicDistribution {
        by_city,
        by_region,
        top_cities,
    }
}

fn percentage_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}
