//! Signal file loaders
//!
//! Reads the plain-text recordings baseline removal is usually run on:
//!
//! - whitespace separated `time amplitude` rows, or bare `amplitude` rows
//!   where the sample index stands in for time
//! - delimited variants (`,`, `;`, tab) through the `csv` crate, optionally
//!   with a decimal comma (`0,25`)
//!
//! Blank lines are skipped. A row that does not parse fails the whole load
//! with [`robust_core::Error::Parse`] carrying its line number.
//!
//! ```rust
//! use robust_signal_io::{read_signal, Delimiter, LoadOptions};
//!
//! let text = "0,00;1,5\n0,01;1,7\n";
//! let options = LoadOptions::delimited(Delimiter::Semicolon).with_decimal_comma(true);
//! let signal = read_signal(text.as_bytes(), &options).unwrap();
//! assert_eq!(signal.amplitudes(), &[1.5, 1.7]);
//! ```

mod options;
mod reader;

pub use options::{Delimiter, LoadOptions};
pub use reader::{load_signal, parse_number, read_signal};
