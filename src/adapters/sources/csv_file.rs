//! Implements PackageSource using a semicolon-delimited file. Uses the `csv` crate.
//!
//! One package per row: `CODE;value;value;...`. No header; `#` starts a comment line.
//! Rows may differ in length, arity is checked later by the dispatcher.

use crate::domain::{DomainError, SensorPackage};
use crate::ports::PackageSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Parse package rows from CSV text.
pub fn parse_packages(content: &str) -> Result<Vec<SensorPackage>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut packages = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        // an empty code is kept so the dispatcher rejects the row
        let code = record.get(0).unwrap_or_default();
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let data = record
            .iter()
            .skip(1)
            .map(|v| {
                v.parse::<f64>().map_err(|e| {
                    csv::Error::from(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("line {}: {:?} is not a number ({})", line, v, e),
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        packages.push(SensorPackage::new(code, data));
    }
    Ok(packages)
}

#[async_trait]
impl PackageSource for CsvFileSource {
    async fn load_packages(&self) -> Result<Vec<SensorPackage>, DomainError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Source(format!("read {}: {}", self.path.display(), e))
        })?;
        let packages = parse_packages(&raw).map_err(|e| {
            DomainError::Source(format!("parse {}: {}", self.path.display(), e))
        })?;
        info!(path = %self.path.display(), packages = packages.len(), "loaded CSV packages");
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_rows_of_different_length() {
        let content = "# demo\nSWM;720;1;80;25;40\nRUN; 15000 ;1;75\n\nWLK;9000;1;75;180\n";
        let packages = parse_packages(content).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0].data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        assert_eq!(packages[1], SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(packages[2].workout_type, "WLK");
    }

    #[test]
    fn test_row_without_code_is_kept() {
        let packages = parse_packages(";15000;1;75\nRUN;15000;1;75\n;;\n").unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], SensorPackage::new("", vec![15000.0, 1.0, 75.0]));
        assert_eq!(
            packages[0].to_training(),
            Err(DomainError::UnknownActivityCode(String::new()))
        );
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        let err = parse_packages("RUN;15000;one;75\n").unwrap_err();
        assert!(err.to_string().contains("one"));
    }

    #[tokio::test]
    async fn test_load_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "RUN;15000;1;75").unwrap();
        writeln!(file, "XYZ;1;2;3").unwrap();

        let packages = CsvFileSource::new(file.path()).load_packages().await.unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].workout_type, "XYZ");
    }
}
