//! Event log ingestion.
//!
//! Columns: `start, end, lane, label [, overhead [, color [, args...]]]`.
//! Malformed records are skipped with a stderr diagnostic carrying the
//! offending line number; the import continues with whatever remains.

use std::path::Path;

use thiserror::Error;

use crate::fmt_args;
use crate::model::TaskRecord;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Import task records from a CSV file.
///
/// Fields are trimmed; rows may have any number of trailing argument
/// columns. Returns the valid records in file order plus the number of
/// rows skipped. An empty result is not an error here; the caller decides
/// what a run without records means.
pub fn import_csv(path: &Path) -> Result<(Vec<TaskRecord>, usize), ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line() as usize).unwrap_or(i + 1);
                eprintln!("Skipping unreadable line {}: {}", line, e);
                skipped += 1;
                continue;
            }
        };
        let line = row.position().map(|p| p.line() as usize).unwrap_or(i + 1);

        if row.iter().all(|f| f.is_empty()) {
            continue;
        }
        if row.len() < 4 {
            let fields: Vec<&str> = row.iter().collect();
            eprintln!("Skipping invalid line {}: {:?}", line, fields);
            skipped += 1;
            continue;
        }

        let (start, end) = match (row[0].parse::<f64>(), row[1].parse::<f64>()) {
            (Ok(s), Ok(e)) => (s, e),
            _ => {
                eprintln!("Bad times on line {}: [{:?}, {:?}]", line, &row[0], &row[1]);
                skipped += 1;
                continue;
            }
        };

        let lane = row[2].to_string();
        let template = row.get(3).unwrap_or("");

        let overhead = match row.get(4) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) if v >= 0.0 => Some(v),
                Ok(_) => {
                    eprintln!("Warning: negative overhead on line {}, ignoring", line);
                    None
                }
                Err(_) => {
                    eprintln!("Warning: bad overhead {:?} on line {}, ignoring", raw, line);
                    None
                }
            },
        };

        let explicit_color = match row.get(5).map(parse_color_token) {
            None | Some(Ok(None)) => None,
            Some(Ok(Some(c))) => Some(c),
            Some(Err(())) => {
                eprintln!("Bad color {:?} on line {}", &row[5], line);
                skipped += 1;
                continue;
            }
        };

        let args: Vec<String> = row.iter().skip(6).map(str::to_string).collect();
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let label = fmt_args::format(template, &arg_refs);

        records.push(TaskRecord {
            start,
            end,
            lane,
            label,
            args,
            overhead,
            explicit_color,
            index: records.len(),
        });
    }

    Ok((records, skipped))
}

/// Parse a color token: empty means "no color", a decimal integer or a
/// `#RRGGBB` hex value yields one, anything else is a record error.
fn parse_color_token(raw: &str) -> Result<Option<u32>, ()> {
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Ok(Some(v as u32));
    }
    if let Some(hex) = raw.strip_prefix('#') {
        return match u32::from_str_radix(hex, 16) {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(()),
        };
    }
    Err(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn import_str(contents: &str) -> (Vec<TaskRecord>, usize) {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        import_csv(f.path()).unwrap()
    }

    #[test]
    fn parses_minimal_rows() {
        let (records, skipped) = import_str("0,10,T1,alpha\n5,15,T2,beta\n");
        assert_eq!(skipped, 0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start, 0.0);
        assert_eq!(records[0].lane, "T1");
        assert_eq!(records[0].label, "alpha");
        assert_eq!(records[1].index, 1);
    }

    #[test]
    fn short_rows_are_skipped_and_counted() {
        let (records, skipped) = import_str("0,10,T1\n0,10,T1,ok\n");
        assert_eq!(skipped, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "ok");
    }

    #[test]
    fn bad_timestamps_are_skipped() {
        let (records, skipped) = import_str("zero,10,T1,a\n1,two,T1,b\n2,3,T1,c\n");
        assert_eq!(skipped, 2);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "c");
    }

    #[test]
    fn blank_rows_are_ignored_silently() {
        let (records, skipped) = import_str("0,1,T1,a\n\n2,3,T1,b\n");
        assert_eq!(skipped, 0);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn overhead_and_color_columns() {
        let (records, _) = import_str("0,1,T1,a,2.5,16711680\n0,1,T1,b,,#ff8800\n0,1,T1,c\n");
        assert_eq!(records[0].overhead, Some(2.5));
        assert_eq!(records[0].explicit_color, Some(16_711_680));
        assert_eq!(records[1].overhead, None);
        assert_eq!(records[1].explicit_color, Some(0xff8800));
        assert_eq!(records[2].explicit_color, None);
    }

    #[test]
    fn negative_overhead_becomes_none() {
        let (records, skipped) = import_str("0,1,T1,a,-4\n");
        assert_eq!(skipped, 0);
        assert_eq!(records[0].overhead, None);
    }

    #[test]
    fn invalid_color_token_skips_the_record() {
        let (records, skipped) = import_str("0,1,T1,a,,notacolor\n0,1,T1,b\n");
        assert_eq!(skipped, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "b");
    }

    #[test]
    fn trailing_args_feed_the_label_template() {
        let (records, _) = import_str("0,1,T1,frame %d of %d,,,3,60\n");
        assert_eq!(records[0].label, "frame 3 of 60");
        assert_eq!(records[0].args, vec!["3", "60"]);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let (records, _) = import_str("0,1,T1,\"sort, then merge\"\n");
        assert_eq!(records[0].label, "sort, then merge");
    }

    #[test]
    fn indices_follow_accepted_records() {
        let (records, _) = import_str("0,1,T1,a\nbad,1,T1,b\n2,3,T1,c\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[1].index, 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ImportError::Csv(_)));
    }
}
