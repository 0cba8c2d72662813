//! File-backed record storage.
//!
//! A [`RecordStore`] keeps a collection of [`Record`]s in a flat text
//! file, one record per line. Every write replaces the whole file, so
//! the file always holds the last snapshot handed to
//! [`RecordStore::write_all`].
//!
//! Each read or write call holds the store's mutex for its duration.
//! That keeps two threads from interleaving writes to the same file, but
//! a read followed by a write (as [`RecordStore::append`] does) is not
//! atomic: another caller's write can land between the two halves.
//! Nothing coordinates separate store instances or separate processes.

use crate::error::{EatsError, Result};
use crate::monitor::{count_changed, CancelSource, MonitorOptions, MonitorSummary, PollingMonitor};
use crate::output::print_warning;
use crate::record::{Identified, Record};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// A line that could not be parsed during a read.
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    pub error: EatsError,
}

/// Records read from a file together with the lines that were skipped.
#[derive(Debug)]
pub struct ReadReport<R> {
    pub records: Vec<R>,
    pub skipped: Vec<SkippedLine>,
}

pub struct RecordStore<R> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordStore<R> {
    /// Open the store at `path`, creating an empty file if none exists.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`EatsError::Create`] when the file is missing and cannot be
    /// created.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eats::{KitchenOrder, RecordStore};
    ///
    /// let store: RecordStore<KitchenOrder> = RecordStore::open("kitchen_orders.txt")?;
    /// println!("next order id: {}", store.next_id()?);
    /// # Ok::<(), eats::EatsError>(())
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)
                .map_err(|source| EatsError::Create {
                    path: path.clone(),
                    source,
                })?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // The mutex guards no data, so a poisoned lock is still usable.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read every record in file order.
    ///
    /// Malformed lines are skipped with a warning; a missing file reads as
    /// empty.
    pub fn read_all(&self) -> Result<Vec<R>> {
        let report = self.read_all_with_report()?;
        for skipped in &report.skipped {
            print_warning(&format!(
                "Skipped invalid line {} in {}: {}",
                skipped.line_number,
                self.path.display(),
                skipped.error
            ));
        }
        Ok(report.records)
    }

    /// Read every record in file order, returning skipped lines instead of
    /// printing them.
    pub fn read_all_with_report(&self) -> Result<ReadReport<R>> {
        let _guard = self.guard();

        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        // Lines are decoded one at a time so a bad byte only costs its own line.
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for (index, bytes) in content.split(|&b| b == b'\n').enumerate() {
            let parsed = std::str::from_utf8(bytes)
                .map_err(|e| EatsError::Parse(format!("invalid UTF-8: {}", e)))
                .and_then(|line| {
                    if line.trim().is_empty() {
                        Ok(None)
                    } else {
                        R::from_line(line).map(Some)
                    }
                });
            match parsed {
                Ok(None) => {}
                Ok(Some(record)) => records.push(record),
                Err(error) => skipped.push(SkippedLine {
                    line_number: index + 1,
                    error,
                }),
            }
        }

        Ok(ReadReport { records, skipped })
    }

    /// Replace the file contents with `records`, one per line.
    ///
    /// The file is truncated before anything is written; if writing fails
    /// part way the file may be empty or hold a partial snapshot.
    pub fn write_all(&self, records: &[R]) -> Result<()> {
        let _guard = self.guard();

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            writeln!(writer, "{}", record.to_line())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Add one record to the end of the file.
    pub fn append(&self, record: R) -> Result<()> {
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)
    }

    /// Watch the file, redrawing each record's raw line whenever the
    /// number of records changes.
    pub fn watch<W: Write>(
        &self,
        options: MonitorOptions,
        out: W,
        cancel: &mut dyn CancelSource,
    ) -> Result<MonitorSummary> {
        let mut monitor = PollingMonitor::new(out, options);
        monitor.run(
            || self.read_all(),
            |out: &mut W, records: &[R]| {
                for record in records {
                    writeln!(out, "{}", record.to_line())?;
                }
                Ok(())
            },
            count_changed,
            cancel,
        )
    }
}

impl<R: Record + Identified> RecordStore<R> {
    /// One past the highest id in the file, or 1 when the file is empty.
    ///
    /// # Errors
    ///
    /// Returns [`EatsError::Parse`] when the highest id is already
    /// `u32::MAX`.
    pub fn next_id(&self) -> Result<u32> {
        let records = self.read_all()?;
        match records.iter().map(|r| r.id()).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| EatsError::Parse(format!("no id left after {}", max))),
        }
    }
}
