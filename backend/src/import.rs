//! CSV bulk import.
//!
//! The importer is a thin loop over `Registry::insert`: every row becomes
//! a candidate, any rejection is logged and skipped, and the run always
//! completes with a tally of accepted and skipped rows. All relationship
//! logic (linking, orphan adoption) lives in the registry.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use swiftreg_shared::{CandidateCode, CodeStore, SwiftRegistry};

use crate::error::ImportError;

/// Expected CSV column headers
pub const COLUMNS: ImportColumns = ImportColumns {
    swift_code: "SWIFT CODE",
    bank_name: "NAME",
    address: "ADDRESS",
    country_iso2: "COUNTRY ISO2 CODE",
    country_name: "COUNTRY NAME",
};

/// Header names for the five imported columns
pub struct ImportColumns {
    pub swift_code: &'static str,
    pub bank_name: &'static str,
    pub address: &'static str,
    pub country_iso2: &'static str,
    pub country_name: &'static str,
}

/// Outcome tally of a completed import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}

/// Import SWIFT codes from a CSV reader into the registry.
///
/// Returns an error only for hard failures (unreadable input, missing
/// columns); per-row registry rejections are counted as skips.
pub fn import_csv<S: CodeStore, R: Read>(
    registry: &SwiftRegistry<S>,
    reader: R,
) -> Result<ImportReport, ImportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &'static str| -> Result<usize, ImportError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(ImportError::MissingColumn {
                column: name.to_string(),
            })
    };
    let code_col = column(COLUMNS.swift_code)?;
    let bank_col = column(COLUMNS.bank_name)?;
    let address_col = column(COLUMNS.address)?;
    let iso2_col = column(COLUMNS.country_iso2)?;
    let country_col = column(COLUMNS.country_name)?;

    let mut report = ImportReport::default();
    for record in csv_reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        let candidate = CandidateCode {
            swift_code: field(code_col),
            bank_name: field(bank_col),
            address: field(address_col),
            country_iso2: field(iso2_col),
            country_name: field(country_col),
        };

        match registry.insert(&candidate) {
            Ok(outcome) => {
                report.added += 1;
                debug!(code = %outcome.code(), "row imported");
            }
            Err(err) => {
                report.skipped += 1;
                warn!(code = %candidate.swift_code, %err, "row skipped");
            }
        }
    }

    info!(
        added = report.added,
        skipped = report.skipped,
        "import complete"
    );
    Ok(report)
}

/// Import SWIFT codes from a CSV file on disk.
pub fn import_file<S: CodeStore>(
    registry: &SwiftRegistry<S>,
    path: &Path,
) -> Result<ImportReport, ImportError> {
    info!(path = %path.display(), "importing SWIFT codes");
    let file = File::open(path)?;
    import_csv(registry, file)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use swiftreg_shared::MemoryStore;

    const HEADER: &str = "COUNTRY ISO2 CODE,SWIFT CODE,NAME,ADDRESS,COUNTRY NAME";

    fn registry() -> SwiftRegistry<MemoryStore> {
        SwiftRegistry::new(MemoryStore::new())
    }

    #[test]
    fn test_import_counts_added_and_skipped() {
        let reg = registry();
        let csv_data = format!(
            "{HEADER}\n\
             PL,TESTPL00XXX,Test Bank,Warsaw HQ,POLAND\n\
             PL,TESTPL00AAA,Test Bank,Branch Office,POLAND\n\
             PL,TESTPL00XXX,Test Bank,Warsaw HQ,POLAND\n\
             XX,TESTXX00XXX,Fake Bank,Nowhere 1,FAKELAND\n"
        );

        let report = import_csv(&reg, csv_data.as_bytes()).unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, 2);

        // The branch got linked by the registry, not by the importer
        let branch = reg.get_by_code("TESTPL00AAA").unwrap();
        assert_eq!(branch.headquarter_code.as_deref(), Some("TESTPL00XXX"));
    }

    #[test]
    fn test_branch_first_order_in_file_converges() {
        let reg = registry();
        let csv_data = format!(
            "{HEADER}\n\
             PL,TESTPL00AAA,Test Bank,Branch Office,POLAND\n\
             PL,TESTPL00XXX,Test Bank,Warsaw HQ,POLAND\n"
        );

        let report = import_csv(&reg, csv_data.as_bytes()).unwrap();
        assert_eq!(report.added, 2);

        let branch = reg.get_by_code("TESTPL00AAA").unwrap();
        assert_eq!(branch.headquarter_code.as_deref(), Some("TESTPL00XXX"));
    }

    #[test]
    fn test_missing_column_is_hard_failure() {
        let reg = registry();
        let csv_data = "SWIFT CODE,NAME,ADDRESS\nTESTPL00XXX,Test Bank,Warsaw HQ\n";

        let result = import_csv(&reg, csv_data.as_bytes());
        assert_matches!(
            result,
            Err(ImportError::MissingColumn { column }) if column == "COUNTRY ISO2 CODE"
        );
    }

    #[test]
    fn test_empty_input_is_ok() {
        let reg = registry();
        let report = import_csv(&reg, format!("{HEADER}\n").as_bytes()).unwrap();
        assert_eq!(report, ImportReport::default());
    }
}
