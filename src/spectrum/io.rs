//! Two-column text reader and writer.
//!
//! Each line holds a position and a value separated by whitespace. Lines
//! that do not parse are skipped (and reported through tracing) rather than
//! aborting the read.

use crate::spectrum::Spectrum;
use crate::trace::{input_warning, stage_event};
use crate::util::{PeakError, PeakResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Transform applied to each value as it is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueTransform {
    /// Store values as read.
    #[default]
    Identity,
    /// Store `log10(value)`; non-positive values are skipped.
    Log10,
}

fn parse_line(line: &str, transform: ValueTransform) -> Option<(f64, f64)> {
    let mut fields = line.split_whitespace();
    let (Some(position), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };
    let position: f64 = position.parse().ok()?;
    let value: f64 = value.parse().ok()?;
    match transform {
        ValueTransform::Identity => Some((position, value)),
        ValueTransform::Log10 if value > 0.0 => Some((position, value.log10())),
        ValueTransform::Log10 => None,
    }
}

/// Reads a spectrum from two-column text.
///
/// Blank lines are ignored silently; malformed lines are skipped with a
/// warning. Only I/O failures are errors.
pub fn read_spectrum<R: BufRead>(reader: R, transform: ValueTransform) -> PeakResult<Spectrum> {
    let mut spectrum = Spectrum::default();
    let mut skipped = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line, transform) {
            Some((position, value)) => spectrum.push(position, value),
            None => {
                skipped += 1;
                input_warning!("skipping malformed line", line = idx + 1, text = line.as_str());
            }
        }
    }
    stage_event!("spectrum_read", points = spectrum.len(), skipped = skipped);
    Ok(spectrum)
}

/// Loads a spectrum from a two-column text file.
pub fn load_spectrum<P: AsRef<Path>>(path: P, transform: ValueTransform) -> PeakResult<Spectrum> {
    let file = File::open(path)?;
    read_spectrum(BufReader::new(file), transform)
}

/// Writes a spectrum as `position value` lines.
///
/// # Errors
/// An empty spectrum, or an I/O failure.
pub fn write_spectrum<W: Write>(mut writer: W, spectrum: &Spectrum) -> PeakResult<()> {
    if spectrum.is_empty() {
        return Err(PeakError::TooFewPoints { needed: 1, got: 0 });
    }
    for (position, value) in spectrum.positions().iter().zip(spectrum.values()) {
        writeln!(writer, "{position} {value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves a spectrum to a two-column text file.
pub fn save_spectrum<P: AsRef<Path>>(path: P, spectrum: &Spectrum) -> PeakResult<()> {
    let file = File::create(path)?;
    write_spectrum(BufWriter::new(file), spectrum)
}

#[cfg(test)]
mod tests {
    use super::{parse_line, read_spectrum, write_spectrum, ValueTransform};
    use crate::spectrum::Spectrum;

    #[test]
    fn parse_line_accepts_tabs_and_exponents() {
        assert_eq!(
            parse_line("1.5\t2e3", ValueTransform::Identity),
            Some((1.5, 2000.0))
        );
        assert_eq!(parse_line("1 100", ValueTransform::Log10), Some((1.0, 2.0)));
    }

    #[test]
    fn parse_line_rejects_malformed_fields() {
        assert_eq!(parse_line("1 2 3", ValueTransform::Identity), None);
        assert_eq!(parse_line("x 2", ValueTransform::Identity), None);
        assert_eq!(parse_line("7", ValueTransform::Identity), None);
        assert_eq!(parse_line("1 0", ValueTransform::Log10), None);
    }

    #[test]
    fn read_skips_bad_lines() {
        let text = "# header\n0 1\n\n1 10\nbad line here\n2 100\n";
        let spectrum = read_spectrum(text.as_bytes(), ValueTransform::Log10).unwrap();
        assert_eq!(spectrum.positions(), &[0.0, 1.0, 2.0]);
        assert_eq!(spectrum.values(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn write_emits_one_line_per_sample() {
        let spectrum = Spectrum::new(vec![0.5, 1.0], vec![3.0, -2.25]).unwrap();
        let mut out = Vec::new();
        write_spectrum(&mut out, &spectrum).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5 3\n1 -2.25\n");
    }

    #[test]
    fn write_rejects_empty_spectrum() {
        let mut out = Vec::new();
        assert!(write_spectrum(&mut out, &Spectrum::default()).is_err());
    }
}
