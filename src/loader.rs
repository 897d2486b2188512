//! CSV process loader.
//!
//! Reads process rows of the form `id,burst,arrival` or
//! `id,burst,arrival,priority` (all base-10 integers, no header row) and
//! produces a validated process set. Any malformed field, wrong field count,
//! or validation failure is a fatal load error: policies never see an
//! invalid set.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Process;
use crate::validation::validate_processes;

/// Loads and validates processes from any reader.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut processes = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        processes.push(parse_record(&record)?);
    }

    if let Err(errors) = validate_processes(&processes) {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::InvalidProcessSet(joined));
    }

    Ok(processes)
}

/// Loads and validates processes from a CSV file on disk.
pub fn load_processes_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Process>> {
    let file = File::open(path)?;
    load_processes(file)
}

fn parse_record(record: &csv::StringRecord) -> Result<Process> {
    let line = record.position().map_or(0, |p| p.line());

    if record.len() != 3 && record.len() != 4 {
        return Err(Error::MalformedRecord {
            line,
            count: record.len(),
        });
    }

    let field = |column: usize| -> Result<i64> {
        let value = &record[column];
        value.parse().map_err(|_| Error::MalformedField {
            line,
            column: column + 1,
            value: value.to_string(),
        })
    };

    let id = field(0)?;
    let burst = field(1)?;
    let arrival = field(2)?;

    let mut process = Process::new(id, arrival, burst);
    if record.len() == 4 {
        process = process.with_priority(field(3)?);
    }
    Ok(process)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_three_field_rows() {
        let input = "1,5,0\n2,3,1\n3,1,2\n";
        let processes = load_processes(input.as_bytes()).unwrap();

        assert_eq!(processes.len(), 3);
        assert_eq!(processes[0], Process::new(1, 0, 5));
        assert_eq!(processes[1], Process::new(2, 1, 3));
        assert_eq!(processes[2], Process::new(3, 2, 1));
    }

    #[test]
    fn test_load_four_field_rows_with_priority() {
        let input = "1,5,0,2\n2,3,1,1\n";
        let processes = load_processes(input.as_bytes()).unwrap();

        assert_eq!(processes[0].priority, 2);
        assert_eq!(processes[1].priority, 1);
    }

    #[test]
    fn test_priority_defaults_to_zero() {
        let processes = load_processes("7,4,0\n".as_bytes()).unwrap();
        assert_eq!(processes[0].priority, 0);
    }

    #[test]
    fn test_malformed_integer_is_fatal() {
        let err = load_processes("1,five,0\n".as_bytes()).unwrap_err();
        match err {
            Error::MalformedField { line, column, value } => {
                assert_eq!(line, 1);
                assert_eq!(column, 2);
                assert_eq!(value, "five");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count_is_fatal() {
        let err = load_processes("1,5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { count: 2, .. }));

        let err = load_processes("1,5,0,2,9\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { count: 5, .. }));
    }

    #[test]
    fn test_invalid_set_is_fatal() {
        // Zero burst fails validation after parsing.
        let err = load_processes("1,0,0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidProcessSet(_)));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        let processes = load_processes("".as_bytes()).unwrap();
        assert!(processes.is_empty());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let processes = load_processes("1, 5, 0\n".as_bytes()).unwrap();
        assert_eq!(processes[0].burst, 5);
    }

    #[test]
    fn test_load_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1,5,0\n2,3,1,4\n").unwrap();

        let processes = load_processes_from_path(file.path()).unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[1].priority, 4);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_processes_from_path("/nonexistent/processes.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
