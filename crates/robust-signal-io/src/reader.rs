//! Row parsing for whitespace and delimited signal files

use crate::options::LoadOptions;
use robust_core::{Error, Result, Signal};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, instrument};

/// Accumulates `(time, amplitude)` rows
#[derive(Debug, Default)]
struct Columns {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
}

impl Columns {
    /// One row of fields; a lone field is an amplitude at the sample index
    fn push_row<'a, I>(&mut self, fields: I, line: usize, decimal_comma: bool) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter().map(str::trim).filter(|f| !f.is_empty());
        let first = match fields.next() {
            Some(f) => f,
            None => return Ok(()),
        };

        match fields.next() {
            Some(second) => {
                self.times.push(parse_number(first, decimal_comma, line)?);
                self.amplitudes.push(parse_number(second, decimal_comma, line)?);
            }
            None => {
                self.times.push(self.times.len() as f64);
                self.amplitudes.push(parse_number(first, decimal_comma, line)?);
            }
        }
        Ok(())
    }

    fn into_signal(self) -> Result<Signal<f64>> {
        Signal::new(self.times, self.amplitudes)
    }
}

/// Parse one numeric field, accepting `,` as decimal mark when asked
pub fn parse_number(field: &str, decimal_comma: bool, line: usize) -> Result<f64> {
    let text: Cow<'_, str> = if decimal_comma {
        Cow::Owned(field.replace(',', "."))
    } else {
        Cow::Borrowed(field)
    };
    text.parse::<f64>().map_err(|e| Error::Parse {
        line,
        message: format!("invalid number {field:?}: {e}"),
    })
}

/// Read a signal from any byte stream
#[instrument(skip_all, fields(delimiter = ?options.delimiter, decimal_comma = options.decimal_comma))]
pub fn read_signal<R: Read>(reader: R, options: &LoadOptions) -> Result<Signal<f64>> {
    options.validate()?;
    let columns = match options.delimiter.as_byte() {
        None => read_whitespace(reader, options)?,
        Some(delimiter) => read_delimited(reader, delimiter, options)?,
    };
    debug!(samples = columns.times.len(), "signal parsed");
    columns.into_signal()
}

/// Read a signal from a file
pub fn load_signal(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Signal<f64>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading signal");
    read_signal(File::open(path)?, options)
}

fn read_whitespace<R: Read>(reader: R, options: &LoadOptions) -> Result<Columns> {
    let mut columns = Columns::default();
    let mut header_pending = options.has_header;

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed, options.comment) {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }
        columns.push_row(trimmed.split_whitespace(), i + 1, options.decimal_comma)?;
    }
    Ok(columns)
}

fn read_delimited<R: Read>(reader: R, delimiter: u8, options: &LoadOptions) -> Result<Columns> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .comment(options.comment)
        .from_reader(reader);

    let mut columns = Columns::default();
    for record in csv_reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        columns.push_row(record.iter(), line, options.decimal_comma)?;
    }
    Ok(columns)
}

fn is_comment(line: &str, comment: Option<u8>) -> bool {
    comment.is_some_and(|c| line.as_bytes().first() == Some(&c))
}

fn csv_error(err: csv::Error) -> Error {
    let line = err.position().map_or(0, |p| p.line() as usize);
    match err.into_kind() {
        csv::ErrorKind::Io(e) => Error::Io(e),
        kind => Error::Parse {
            line,
            message: format!("{kind:?}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Delimiter;

    fn read(text: &str, options: &LoadOptions) -> Result<Signal<f64>> {
        read_signal(text.as_bytes(), options)
    }

    #[test]
    fn test_two_column_whitespace() {
        let signal = read("0.0 1.5\n0.1\t2.5\n  0.2   3.5  \n", &LoadOptions::whitespace()).unwrap();
        assert_eq!(signal.times(), &[0.0, 0.1, 0.2]);
        assert_eq!(signal.amplitudes(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_single_column_uses_index() {
        let signal = read("4\n\n5\n6\n", &LoadOptions::whitespace()).unwrap();
        assert_eq!(signal.times(), &[0.0, 1.0, 2.0]);
        assert_eq!(signal.amplitudes(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let signal = read("0 1 99\n1 2 98\n", &LoadOptions::whitespace()).unwrap();
        assert_eq!(signal.amplitudes(), &[1.0, 2.0]);
    }

    #[test]
    fn test_bad_number_reports_line() {
        let err = read("0 1\n\n1 x\n", &LoadOptions::whitespace()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_header_and_comments() {
        let text = "# recorded at 1 kHz\ntime amplitude\n0 1\n1 2\n";
        let signal = read(text, &LoadOptions::whitespace().with_header(true)).unwrap();
        assert_eq!(signal.len(), 2);
    }

    #[test]
    fn test_semicolon_decimal_comma() {
        let options = LoadOptions::delimited(Delimiter::Semicolon).with_decimal_comma(true);
        let signal = read("0,000;1,25\n0,001;-0,5\n", &options).unwrap();
        assert_eq!(signal.times(), &[0.0, 0.001]);
        assert_eq!(signal.amplitudes(), &[1.25, -0.5]);
    }

    #[test]
    fn test_comma_csv() {
        let options = LoadOptions::delimited(Delimiter::Comma);
        let signal = read("0.5, 1\n0.7, 2\n", &options).unwrap();
        assert_eq!(signal.times(), &[0.5, 0.7]);
        assert_eq!(signal.amplitudes(), &[1.0, 2.0]);
    }

    #[test]
    fn test_tab_single_column() {
        let options = LoadOptions::delimited(Delimiter::Tab);
        let signal = read("7.5\n8.5\n", &options).unwrap();
        assert_eq!(signal.times(), &[0.0, 1.0]);
    }

    #[test]
    fn test_csv_bad_field_reports_line() {
        let options = LoadOptions::delimited(Delimiter::Comma);
        let err = read("0,1\n1,2\n2,oops\n", &options).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = read("0 1\n1 NaN\n", &LoadOptions::whitespace()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_empty_input() {
        let signal = read("\n\n", &LoadOptions::whitespace()).unwrap();
        assert!(signal.is_empty());
    }
}
