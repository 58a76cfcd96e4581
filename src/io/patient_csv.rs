// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Import of an existing patient's profile from CSV.
//!
//! The file holds a header on the first line and a single data row on the
//! second. The data row is split on commas (quoted commas are not
//! supported); each field loses one surrounding pair of double quotes and
//! any surrounding whitespace, then maps positionally onto the profile.

use crate::error::CsvImportError;
use crate::models::profile::{ProfileData, FIELD_ORDER};
use std::path::Path;

/// Line (0-based) holding the patient data.
const DATA_LINE: usize = 1;

/// Read and parse a patient CSV file.
pub fn import_profile(path: &Path) -> Result<ProfileData, CsvImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| CsvImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&text)?;
    log::info!("Imported patient profile from {}", path.display());
    Ok(profile)
}

/// Parse the text of a patient CSV file.
pub fn parse_profile(text: &str) -> Result<ProfileData, CsvImportError> {
    let row = text
        .lines()
        .nth(DATA_LINE)
        .ok_or(CsvImportError::MissingDataRow)?;

    let values: Vec<String> = row.split(',').map(clean_field).collect();
    if values.len() < FIELD_ORDER.len() {
        return Err(CsvImportError::MissingField {
            field: FIELD_ORDER[values.len()],
            line: DATA_LINE + 1,
            found: values.len(),
        });
    }
    if values.len() > FIELD_ORDER.len() {
        log::warn!(
            "Ignoring {} extra field(s) on line {}",
            values.len() - FIELD_ORDER.len(),
            DATA_LINE + 1
        );
    }

    let mut fields = values.into_iter();
    let fields: [String; 7] = std::array::from_fn(|_| fields.next().unwrap_or_default());
    Ok(ProfileData::from_fields(fields))
}

/// Strip one leading and one trailing quote, then surrounding whitespace.
fn clean_field(raw: &str) -> String {
    let field = raw.strip_prefix('"').unwrap_or(raw);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "firstName,lastName,dob,hobbies,preexistingConditions,allergies,medication";

    #[test]
    fn test_quoted_row() {
        let text = format!("{}\n\"A\",\"B\",\"2000-01-01\",\"h\",\"c\",\"al\",\"m\"\n", HEADER);
        let profile = parse_profile(&text).unwrap();
        assert_eq!(
            profile,
            ProfileData {
                first_name: "A".into(),
                last_name: "B".into(),
                dob: "2000-01-01".into(),
                hobbies: "h".into(),
                preexisting_conditions: "c".into(),
                allergies: "al".into(),
                medication: "m".into(),
            }
        );
    }

    #[test]
    fn test_unquoted_row_with_padding_and_crlf() {
        let text = format!("{}\r\n Jane , Doe,1950-03-02,chess,PD,none, levodopa \r\n", HEADER);
        let profile = parse_profile(&text).unwrap();
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.medication, "levodopa");
    }

    #[test]
    fn test_only_one_quote_pair_removed() {
        assert_eq!(clean_field("\"\"x\"\""), "\"x\"");
        assert_eq!(clean_field("\"half"), "half");
        assert_eq!(clean_field(""), "");
    }

    #[test]
    fn test_rows_after_the_first_are_ignored() {
        let text = format!("{}\nA,B,C,D,E,F,G\nX,Y,Z,1,2,3,4\n", HEADER);
        assert_eq!(parse_profile(&text).unwrap().first_name, "A");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = format!("{}\nA,B,C,D,E,F,G,H\n", HEADER);
        assert_eq!(parse_profile(&text).unwrap().medication, "G");
    }

    #[test]
    fn test_header_only_is_missing_data_row() {
        let err = parse_profile(HEADER).unwrap_err();
        assert!(matches!(err, CsvImportError::MissingDataRow));
        assert!(matches!(parse_profile("").unwrap_err(), CsvImportError::MissingDataRow));
    }

    #[test]
    fn test_short_row_names_missing_field() {
        let text = format!("{}\nA,B,C,D,E,F\n", HEADER);
        match parse_profile(&text).unwrap_err() {
            CsvImportError::MissingField { field, line, found } => {
                assert_eq!(field, "medication");
                assert_eq!(line, 2);
                assert_eq!(found, 6);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_quoted_comma_splits_field() {
        let text = format!("{}\n\"Doe, Jane\",B,C,D,E,F\n", HEADER);
        let profile = parse_profile(&text).unwrap();
        assert_eq!(profile.first_name, "Doe");
        assert_eq!(profile.last_name, "Jane");
    }

    #[test]
    fn test_import_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "A,B,2000-01-01,h,c,al,m").unwrap();
        let profile = import_profile(file.path()).unwrap();
        assert_eq!(profile.allergies, "al");
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_profile(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CsvImportError::Io { .. }));
    }
}
