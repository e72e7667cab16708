//! Reads event records line by line and hands them to an event manager.

use std::io::BufRead;
use std::sync::Arc;

use cordial_core::clock::Clock;
use cordial_core::session::SessionContext;
use cordial_events::{Event, EventRecord};
use cordial_hooks::EventManager;

use crate::error::AppError;

/// Counters for one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Lines read, including blank and undecodable ones.
    pub lines: usize,
    /// Events decoded and handed to the manager.
    pub events: usize,
    /// Lines that failed to decode and were skipped.
    pub decode_failures: usize,
    /// Listener errors reported by the manager.
    pub listener_failures: usize,
    /// Events whose response number did not increase.
    pub out_of_order: usize,
}

/// Replays records through an [`EventManager`].
pub struct Replayer<'a> {
    manager: &'a EventManager,
    session: Arc<SessionContext>,
    clock: &'a dyn Clock,
    strict: bool,
}

impl<'a> Replayer<'a> {
    /// Creates a lenient replayer: undecodable lines are logged and skipped.
    #[must_use]
    pub fn new(manager: &'a EventManager, session: Arc<SessionContext>, clock: &'a dyn Clock) -> Self {
        Self {
            manager,
            session,
            clock,
            strict: false,
        }
    }

    /// Sets whether the first undecodable line aborts the run.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reads `input` to the end, delivering every decoded event.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if reading fails, and `AppError::Decode` for
    /// the first undecodable line in strict mode.
    pub fn run<R: BufRead>(&self, input: R) -> Result<ReplaySummary, AppError> {
        let mut summary = ReplaySummary::default();
        let mut last_response_number: Option<i64> = None;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            summary.lines += 1;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let record = match EventRecord::parse(line) {
                Ok(record) => record,
                Err(source) if self.strict => {
                    tracing::error!(line = line_number, error = %source, "undecodable line in strict mode");
                    return Err(AppError::Decode {
                        line: line_number,
                        source,
                    });
                }
                Err(error) => {
                    summary.decode_failures += 1;
                    tracing::warn!(line = line_number, error = %error, "skipping undecodable line");
                    continue;
                }
            };

            if let Some(previous) = last_response_number
                && record.response_number <= previous
            {
                summary.out_of_order += 1;
                tracing::warn!(
                    line = line_number,
                    previous,
                    response_number = record.response_number,
                    "response number did not increase"
                );
            }
            last_response_number = Some(record.response_number);

            let event = Event::from_record(record, Arc::clone(&self.session), self.clock);
            let report = self.manager.handle(&event);
            summary.events += 1;
            summary.listener_failures += report.failed;
        }

        Ok(summary)
    }
}
