//! Loading signals from files on disk

use anyhow::Result;
use approx::assert_abs_diff_eq;
use robust_core::Error;
use robust_signal_io::{load_signal, Delimiter, LoadOptions};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn loads_tab_separated_recording() -> Result<()> {
    let mut text = String::new();
    for i in 0..500 {
        let t = i as f64 * 0.002;
        text.push_str(&format!("{t}\t{}\n", (t * 10.0).sin()));
    }
    let file = write_temp(&text)?;

    for options in [LoadOptions::whitespace(), LoadOptions::delimited(Delimiter::Tab)] {
        let signal = load_signal(file.path(), &options)?;
        assert_eq!(signal.len(), 500);
        assert!(signal.is_time_ordered());
        assert_abs_diff_eq!(signal.times()[499], 0.998, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn loads_amplitude_only_recording() -> Result<()> {
    let file = write_temp("0.1\n0.2\n\n0.3\n")?;
    let signal = load_signal(file.path(), &LoadOptions::default())?;
    assert_eq!(signal.times(), &[0.0, 1.0, 2.0]);
    assert_eq!(signal.amplitudes(), &[0.1, 0.2, 0.3]);
    Ok(())
}

#[test]
fn loads_semicolon_decimal_comma_with_header() -> Result<()> {
    let file = write_temp("Time;Amplitude\n0,0;-0,125\n0,5;0,250\n1,0;0,375\n")?;
    let options = LoadOptions::delimited(Delimiter::Semicolon)
        .with_decimal_comma(true)
        .with_header(true);
    let signal = load_signal(file.path(), &options)?;
    assert_eq!(signal.times(), &[0.0, 0.5, 1.0]);
    assert_eq!(signal.amplitudes(), &[-0.125, 0.25, 0.375]);
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_signal(dir.path().join("absent.txt"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_line_is_parse_error() -> Result<()> {
    let file = write_temp("0 1\n1 2\n2 3,5\n")?;
    match load_signal(file.path(), &LoadOptions::default()) {
        Err(Error::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("3,5"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    Ok(())
}
