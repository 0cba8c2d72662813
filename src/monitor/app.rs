//! The polling loop behind the live monitor.

use super::cancel::CancelSource;
use crate::error::Result;
use crate::output::{BOLD, CYAN, GRAY, GREEN, RESET};
use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::time::Duration;
use terminal_size::{terminal_size, Width};

/// Fallback width for the header rule when stdout is not a terminal.
const DEFAULT_RULE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct MonitorOptions {
    /// How often the data provider is polled.
    pub refresh_interval: Duration,
    /// Longest wait between two cancellation checks.
    pub poll_slice: Duration,
    /// Shown as the header banner.
    pub title: String,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(3),
            poll_slice: Duration::from_millis(250),
            title: "LIVE MONITOR".to_string(),
        }
    }
}

impl MonitorOptions {
    /// Number of slices making up one refresh interval, and the slice length.
    fn slices(&self) -> (u32, Duration) {
        let slice = if self.poll_slice.is_zero() || self.poll_slice > self.refresh_interval {
            self.refresh_interval
        } else {
            self.poll_slice
        };
        if slice.is_zero() {
            return (1, slice);
        }
        let count = self.refresh_interval.as_nanos().div_ceil(slice.as_nanos());
        (u32::try_from(count).unwrap_or(u32::MAX).max(1), slice)
    }
}

/// What happened during one monitor session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorSummary {
    /// Number of times the data provider was called.
    pub polls: usize,
    /// 1-based poll numbers that triggered a redraw.
    pub redraws: Vec<usize>,
}

pub struct PollingMonitor<W: Write> {
    out: W,
    options: MonitorOptions,
}

impl<W: Write> PollingMonitor<W> {
    pub fn new(out: W, options: MonitorOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Poll `provider` until `cancel` asks to stop.
    ///
    /// The first snapshot is always drawn. After that a snapshot is drawn
    /// only when `changed(current, last_drawn)` is true. Any error from the
    /// provider, the display callback or the cancel source ends the session
    /// and is returned to the caller.
    pub fn run<T, P, D, C>(
        &mut self,
        mut provider: P,
        mut display: D,
        changed: C,
        cancel: &mut dyn CancelSource,
    ) -> Result<MonitorSummary>
    where
        P: FnMut() -> Result<Vec<T>>,
        D: FnMut(&mut W, &[T]) -> Result<()>,
        C: Fn(&[T], &[T]) -> bool,
    {
        let mut summary = MonitorSummary::default();
        let mut last_drawn: Vec<T> = Vec::new();
        let mut force_redraw = true;

        loop {
            let current = provider()?;
            summary.polls += 1;

            if force_redraw || changed(current.as_slice(), last_drawn.as_slice()) {
                self.redraw(&current, &last_drawn, &mut display, cancel.hint())?;
                summary.redraws.push(summary.polls);
                last_drawn = current;
                force_redraw = false;
            }

            if self.wait_interval(cancel)? {
                break;
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "Exiting monitor mode...")?;
        self.out.flush()?;
        Ok(summary)
    }

    fn redraw<T, D>(
        &mut self,
        current: &[T],
        previous: &[T],
        display: &mut D,
        hint: Option<&str>,
    ) -> Result<()>
    where
        D: FnMut(&mut W, &[T]) -> Result<()>,
    {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        let rule = "=".repeat(rule_width());
        writeln!(self.out, "{BOLD}===== {} ====={RESET}", self.options.title)?;
        writeln!(
            self.out,
            "Refreshing every {} when changes detected",
            describe_interval(self.options.refresh_interval)
        )?;
        writeln!(
            self.out,
            "Last updated: {CYAN}{}{RESET}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        if let Some(hint) = hint {
            writeln!(self.out, "{GRAY}({}){RESET}", hint)?;
        }
        writeln!(self.out, "{GRAY}{}{RESET}", rule)?;
        writeln!(self.out)?;

        if !previous.is_empty() && current.len() > previous.len() {
            writeln!(self.out, "{GREEN}{BOLD}*** NEW DATA RECEIVED! ***{RESET}")?;
            writeln!(self.out)?;
        }

        display(&mut self.out, current)?;
        self.out.flush()?;
        Ok(())
    }

    /// Wait out one refresh interval slice by slice. Returns `true` once the
    /// cancel source asks to stop.
    fn wait_interval(&self, cancel: &mut dyn CancelSource) -> Result<bool> {
        let (count, slice) = self.options.slices();
        let mut remaining = self.options.refresh_interval;
        for _ in 0..count {
            let this_slice = slice.min(remaining);
            if cancel.wait(this_slice)? {
                return Ok(true);
            }
            remaining = remaining.saturating_sub(this_slice);
        }
        Ok(false)
    }
}

fn rule_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w).clamp(40, 100))
        .unwrap_or(DEFAULT_RULE_WIDTH)
}

/// Human form of the refresh interval, e.g. "5 seconds" or "500 ms".
pub fn describe_interval(interval: Duration) -> String {
    if interval.subsec_nanos() == 0 {
        match interval.as_secs() {
            1 => "1 second".to_string(),
            secs => format!("{} seconds", secs),
        }
    } else {
        format!("{} ms", interval.as_millis())
    }
}
