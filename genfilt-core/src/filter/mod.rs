//! Line-stream filter drivers
//!
//! Both drivers stream their inputs line by line, write kept lines back
//! byte-for-byte (line terminators included) and report progress every
//! `progress_interval` lines.

mod source;
mod target;

pub use source::{
    line_length, line_words, source_gender, SourceFilter, SourcePaths, SourceStats,
};
pub use target::{FilterStats, TargetFilter, TargetPaths};

use crate::error::{FilterError, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Progress callback, called with the number of lines read so far
pub type ProgressFn = Box<dyn Fn(u64) + Send + Sync>;

/// `<path><suffix>`, e.g. `corpus.de` + `.target_filtered`
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Read the next line, terminator included, into `buf`
///
/// Returns `false` at end of stream, leaving `buf` empty.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> Result<bool> {
    buf.clear();
    Ok(reader.read_line(buf)? > 0)
}

pub(crate) fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| FilterError::file_open(path, e))
}

pub(crate) fn create_output(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| FilterError::file_open(path, e))
}

/// Emits progress on a fixed line cadence
pub(crate) struct ProgressReporter<'a> {
    interval: u64,
    input: &'a str,
    callback: Option<&'a ProgressFn>,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) fn new(interval: u64, input: &'a str, callback: Option<&'a ProgressFn>) -> Self {
        Self {
            interval,
            input,
            callback,
        }
    }

    pub(crate) fn line_read(&self, count: u64) {
        if self.interval == 0 || count % self.interval != 0 {
            return;
        }
        log::info!("Processing line {} from {}", count, self.input);
        if let Some(callback) = self.callback {
            callback(count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_with_suffix() {
        assert_eq!(
            with_suffix(Path::new("data/train.de"), ".target_filtered"),
            PathBuf::from("data/train.de.target_filtered")
        );
        assert_eq!(with_suffix(Path::new("corpus"), ".fem"), PathBuf::from("corpus.fem"));
    }

    #[test]
    fn test_read_line_keeps_terminator() {
        let mut reader = Cursor::new("one\ntwo");
        let mut buf = String::new();
        assert!(read_line(&mut reader, &mut buf).unwrap());
        assert_eq!(buf, "one\n");
        assert!(read_line(&mut reader, &mut buf).unwrap());
        assert_eq!(buf, "two");
        assert!(!read_line(&mut reader, &mut buf).unwrap());
        assert_eq!(buf, "");
    }

    #[test]
    fn test_progress_cadence() {
        let calls = Arc::new(AtomicU64::new(0));
        let seen = Arc::clone(&calls);
        let callback: ProgressFn = Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let reporter = ProgressReporter::new(3, "input", Some(&callback));
        for count in 1..=10 {
            reporter.line_read(count);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_open_input_missing() {
        let result = open_input(Path::new("/nonexistent/corpus.txt"));
        assert!(matches!(result, Err(FilterError::FileOpen { .. })));
    }
}
