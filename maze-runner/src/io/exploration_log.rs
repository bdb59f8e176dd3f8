//! Exploration log sink abstraction and the CSV implementation.
//!
//! The [`StepSink`] trait decouples the exploration loop from where step
//! records end up (currently a CSV file). Tests use recording sinks that
//! keep records in memory without touching the filesystem.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

/// Column header of the exploration log.
pub const CSV_HEADER: &str = "Step,x-coordinate,y-coordinate,Actions";

/// One exploration step: the 1-based step number, the cell the runner
/// occupied before moving, and the action code it performed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub step: usize,
    pub x: usize,
    pub y: usize,
    pub actions: &'static str,
}

/// Destination for exploration step records.
pub trait StepSink {
    /// Record one step. Records arrive in step order, starting at 1.
    fn record_step(&mut self, record: &StepRecord) -> io::Result<()>;
}

/// Sink that writes records as CSV rows.
pub struct CsvStepLog {
    writer: BufWriter<File>,
}

impl CsvStepLog {
    /// Create (or truncate) the log file and write the header row.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{CSV_HEADER}")?;
        debug!(path = %path.display(), "exploration log created");
        Ok(Self { writer })
    }

    /// Flush buffered rows to disk.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl StepSink for CsvStepLog {
    fn record_step(&mut self, record: &StepRecord) -> io::Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{}",
            record.step, record.x, record.y, record.actions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn csv_log_writes_header_then_rows() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("exploration.csv");

        let mut log = CsvStepLog::create(&path).expect("create log");
        log.record_step(&StepRecord {
            step: 1,
            x: 0,
            y: 0,
            actions: "LF",
        })
        .expect("record");
        log.record_step(&StepRecord {
            step: 2,
            x: 0,
            y: 1,
            actions: "LLF",
        })
        .expect("record");
        log.finish().expect("flush");

        let contents = fs::read_to_string(&path).expect("read log");
        assert_eq!(
            contents,
            "Step,x-coordinate,y-coordinate,Actions\n1,0,0,LF\n2,0,1,LLF\n"
        );
    }

    #[test]
    fn create_truncates_an_existing_log() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("exploration.csv");
        fs::write(&path, "stale contents\n").expect("seed file");

        CsvStepLog::create(&path)
            .expect("create log")
            .finish()
            .expect("flush");

        let contents = fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "Step,x-coordinate,y-coordinate,Actions\n");
    }
}
