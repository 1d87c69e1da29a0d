//! Country Table Module
//! Typed wage-table rows plus the region filter and country lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("Country not found: {0}")]
    NotFound(String),
}

/// One row of the wage table. All money fields share the row's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub region: String,
    pub currency: String,
    pub minimum_wage: f64,
    pub rent: f64,
    pub food: f64,
    pub utilities: f64,
    pub internet: f64,
    pub transport: f64,
    pub entertainment: f64,
}

/// Loaded wage table. Read-only after load; rows keep source order.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
}

impl CountryTable {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique regions in first-appearance order.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for record in &self.records {
            if !regions.contains(&record.region) {
                regions.push(record.region.clone());
            }
        }
        regions
    }

    /// Keep rows whose region is a member of `regions`, preserving source
    /// order. An empty set selects nothing rather than everything.
    pub fn filter_by_regions(&self, regions: &HashSet<String>) -> Vec<CountryRecord> {
        self.records
            .iter()
            .filter(|record| regions.contains(&record.region))
            .cloned()
            .collect()
    }
}

/// Look up a country by name. Duplicate names are not validated against;
/// the first record in sequence order wins.
pub fn select_country<'a>(
    records: &'a [CountryRecord],
    country_name: &str,
) -> Result<&'a CountryRecord, SelectError> {
    records
        .iter()
        .find(|record| record.country == country_name)
        .ok_or_else(|| SelectError::NotFound(country_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, region: &str, rent: f64) -> CountryRecord {
        CountryRecord {
            country: country.to_string(),
            region: region.to_string(),
            currency: "USD".to_string(),
            minimum_wage: 1500.0,
            rent,
            food: 400.0,
            utilities: 150.0,
            internet: 60.0,
            transport: 100.0,
            entertainment: 50.0,
        }
    }

    fn sample_table() -> CountryTable {
        CountryTable::new(vec![
            record("Colombia", "Sudamérica", 600_000.0),
            record("Chile", "Sudamérica", 350_000.0),
            record("Canada", "Norteamérica", 1200.0),
            record("Germany", "Europa", 800.0),
            record("Australia", "Oceanía", 1800.0),
        ])
    }

    fn regions(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn filter_keeps_only_member_regions_in_source_order() {
        let table = sample_table();
        let selected = regions(&["Sudamérica", "Europa"]);

        let filtered = table.filter_by_regions(&selected);

        assert!(filtered.iter().all(|r| selected.contains(&r.region)));
        let names: Vec<&str> = filtered.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, ["Colombia", "Chile", "Germany"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let table = sample_table();
        let selected = regions(&["Sudamérica", "Oceanía"]);

        let once = table.filter_by_regions(&selected);
        let twice = CountryTable::new(once.clone()).filter_by_regions(&selected);

        assert_eq!(once, twice);
    }

    #[test]
    fn empty_region_set_selects_nothing() {
        let table = sample_table();
        assert!(table.filter_by_regions(&HashSet::new()).is_empty());
    }

    #[test]
    fn regions_are_unique_in_first_appearance_order() {
        let table = sample_table();
        assert_eq!(
            table.regions(),
            ["Sudamérica", "Norteamérica", "Europa", "Oceanía"]
        );
    }

    #[test]
    fn unknown_country_is_not_found() {
        let table = sample_table();
        let result = select_country(table.records(), "Atlantis");
        assert_eq!(result, Err(SelectError::NotFound("Atlantis".to_string())));
    }

    #[test]
    fn duplicate_country_names_resolve_to_first_match() {
        let table = CountryTable::new(vec![
            record("Colombia", "Sudamérica", 600_000.0),
            record("Colombia", "Sudamérica", 999_999.0),
        ]);

        let selected = select_country(table.records(), "Colombia").unwrap();
        assert_eq!(selected.rent, 600_000.0);
    }
}
