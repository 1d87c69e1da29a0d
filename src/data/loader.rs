//! CSV Data Loader Module
//! Reads the wage table CSV into typed country records using Polars.

use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::{CountryRecord, CountryTable};

// Column headers fixed by the externally supplied file.
pub const COL_COUNTRY: &str = "Pais";
pub const COL_REGION: &str = "Region";
pub const COL_CURRENCY: &str = "Moneda";
pub const COL_MINIMUM_WAGE: &str = "Salario Minimo";
pub const COL_RENT: &str = "Alquiler Accesible";
pub const COL_FOOD: &str = "Alimentacion";
pub const COL_UTILITIES: &str = "Servicios Publicos";
pub const COL_INTERNET: &str = "Internet";
pub const COL_TRANSPORT: &str = "Transporte";
pub const COL_ENTERTAINMENT: &str = "Entretenimiento Basico";

const REQUIRED_COLUMNS: [&str; 10] = [
    COL_COUNTRY,
    COL_REGION,
    COL_CURRENCY,
    COL_MINIMUM_WAGE,
    COL_RENT,
    COL_FOOD,
    COL_UTILITIES,
    COL_INTERNET,
    COL_TRANSPORT,
    COL_ENTERTAINMENT,
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("No usable rows in file")]
    NoData,
}

/// Handles CSV file loading with Polars. The whole table loads or the load
/// fails; there is no partial-success surface.
pub struct DataLoader {
    table: Option<CountryTable>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            table: None,
            file_path: None,
        }
    }

    /// Load a CSV file and materialize one record per usable row.
    pub fn load_csv(&mut self, file_path: &str) -> Result<&CountryTable, LoaderError> {
        self.file_path = Some(PathBuf::from(file_path));
        self.table = None;

        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let missing = Self::missing_columns(&df);
        if !missing.is_empty() {
            return Err(LoaderError::MissingColumns(missing));
        }

        let records = Self::extract_records(&df)?;
        if records.is_empty() {
            return Err(LoaderError::NoData);
        }

        self.table = Some(CountryTable::new(records));
        self.table.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get a reference to the loaded table.
    pub fn table(&self) -> Option<&CountryTable> {
        self.table.as_ref()
    }

    /// Get file path.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    fn missing_columns(df: &DataFrame) -> Vec<String> {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        REQUIRED_COLUMNS
            .iter()
            .filter(|required| !names.iter().any(|name| name == *required))
            .map(|required| required.to_string())
            .collect()
    }

    fn extract_records(df: &DataFrame) -> Result<Vec<CountryRecord>, LoaderError> {
        let country_series = df.column(COL_COUNTRY)?;
        let region_series = df.column(COL_REGION)?;
        let currency_series = df.column(COL_CURRENCY)?;

        let wage = df.column(COL_MINIMUM_WAGE)?.cast(&DataType::Float64)?;
        let rent = df.column(COL_RENT)?.cast(&DataType::Float64)?;
        let food = df.column(COL_FOOD)?.cast(&DataType::Float64)?;
        let utilities = df.column(COL_UTILITIES)?.cast(&DataType::Float64)?;
        let internet = df.column(COL_INTERNET)?.cast(&DataType::Float64)?;
        let transport = df.column(COL_TRANSPORT)?.cast(&DataType::Float64)?;
        let entertainment = df.column(COL_ENTERTAINMENT)?.cast(&DataType::Float64)?;

        let wage_ca = wage.f64()?;
        let rent_ca = rent.f64()?;
        let food_ca = food.f64()?;
        let utilities_ca = utilities.f64()?;
        let internet_ca = internet.f64()?;
        let transport_ca = transport.f64()?;
        let entertainment_ca = entertainment.f64()?;

        let mut records = Vec::with_capacity(df.height());

        for i in 0..df.height() {
            let country = Self::string_at(country_series, i);
            let region = Self::string_at(region_series, i);
            let currency = Self::string_at(currency_series, i);

            let numbers = (
                wage_ca.get(i),
                rent_ca.get(i),
                food_ca.get(i),
                utilities_ca.get(i),
                internet_ca.get(i),
                transport_ca.get(i),
                entertainment_ca.get(i),
            );

            match (country, region, currency, numbers) {
                (
                    Some(country),
                    Some(region),
                    Some(currency),
                    (
                        Some(minimum_wage),
                        Some(rent),
                        Some(food),
                        Some(utilities),
                        Some(internet),
                        Some(transport),
                        Some(entertainment),
                    ),
                ) => {
                    records.push(CountryRecord {
                        country,
                        region,
                        currency,
                        minimum_wage,
                        rent,
                        food,
                        utilities,
                        internet,
                        transport,
                        entertainment,
                    });
                }
                _ => {
                    // Incomplete row: skip it rather than fail the whole load
                    log::warn!("skipping row {} with missing fields", i);
                }
            }
        }

        Ok(records)
    }

    /// Non-null cell as a plain string, quotes stripped.
    fn string_at(column: &Column, i: usize) -> Option<String> {
        let value = column.get(i).ok()?;
        if value.is_null() {
            None
        } else {
            Some(value.to_string().trim_matches('"').to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HEADER: &str = "Pais,Region,Moneda,Salario Minimo,Alquiler Accesible,Alimentacion,\
Servicios Publicos,Internet,Transporte,Entretenimiento Basico";

    fn fixture(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_table() {
        let body = format!(
            "{HEADER}\n\
Colombia,Sudamérica,COP,1300000,600000,400000,150000,60000,100000,50000\n\
Australia,Oceanía,AUD,3867.7,1800,600,250,70,160,120\n"
        );
        let path = fixture("wagescope_loader_ok.csv", &body);

        let mut loader = DataLoader::new();
        let table = loader.load_csv(path.to_str().unwrap()).unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.country, "Colombia");
        assert_eq!(first.region, "Sudamérica");
        assert_eq!(first.currency, "COP");
        assert_eq!(first.minimum_wage, 1_300_000.0);
        assert_eq!(first.rent, 600_000.0);
        assert_eq!(first.entertainment, 50_000.0);
        let second = &table.records()[1];
        assert_eq!(second.minimum_wage, 3_867.7);
    }

    #[test]
    fn missing_region_column_is_rejected() {
        let body = "Pais,Moneda,Salario Minimo,Alquiler Accesible,Alimentacion,\
Servicios Publicos,Internet,Transporte,Entretenimiento Basico\n\
Colombia,COP,1300000,600000,400000,150000,60000,100000,50000\n";
        let path = fixture("wagescope_loader_no_region.csv", body);

        let mut loader = DataLoader::new();
        let err = loader.load_csv(path.to_str().unwrap()).unwrap_err();

        match err {
            LoaderError::MissingColumns(columns) => {
                assert_eq!(columns, vec!["Region".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_csv_error() {
        let mut loader = DataLoader::new();
        let err = loader
            .load_csv("/nonexistent/wagescope_missing.csv")
            .unwrap_err();
        assert!(matches!(err, LoaderError::Csv(_)));
    }

    #[test]
    fn rows_with_missing_fields_are_skipped() {
        let body = format!(
            "{HEADER}\n\
Colombia,Sudamérica,COP,1300000,600000,400000,150000,60000,100000,50000\n\
Chile,Sudamérica,CLP,,350000,280000,90000,25000,55000,40000\n"
        );
        let path = fixture("wagescope_loader_skip.csv", &body);

        let mut loader = DataLoader::new();
        let table = loader.load_csv(path.to_str().unwrap()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].country, "Colombia");
    }

    #[test]
    fn header_only_file_has_no_data() {
        let path = fixture("wagescope_loader_empty.csv", &format!("{HEADER}\n"));

        let mut loader = DataLoader::new();
        let err = loader.load_csv(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoaderError::NoData));
    }
}
