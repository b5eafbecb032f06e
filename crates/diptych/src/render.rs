//! Render request pacing and ordering.
//!
//! Rendering itself happens outside this crate. What lives here is the
//! bookkeeping around it: text edits are coalesced into one request after a
//! quiet period, and every request carries a ticket so that a response
//! arriving after a newer request was issued can be recognised and dropped.
//!
//! Both types take the current [`Instant`] as an argument instead of reading
//! the clock, so callers drive them from whatever event loop they run.

use std::time::{Duration, Instant};

use log::{debug, trace};

use diptych_core::Engine;

use crate::config::RenderConfig;

/// Sequence number attached to a render request.
///
/// Tickets issued by one [`RenderSequencer`] increase strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(u64);

impl RenderTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Issues render tickets and filters out stale responses.
#[derive(Debug, Default)]
pub struct RenderSequencer {
    latest: u64,
}

impl RenderSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket. Every ticket issued earlier becomes stale.
    pub fn issue(&mut self) -> RenderTicket {
        self.latest += 1;
        RenderTicket(self.latest)
    }

    /// Returns the most recently issued ticket, if any.
    pub fn latest(&self) -> Option<RenderTicket> {
        (self.latest > 0).then_some(RenderTicket(self.latest))
    }

    /// Returns `true` if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Passes `result` through only if it answers the latest request.
    ///
    /// # Examples
    ///
    /// ```
    /// # use diptych::render::RenderSequencer;
    /// let mut sequencer = RenderSequencer::new();
    /// let first = sequencer.issue();
    /// let second = sequencer.issue();
    ///
    /// // The first response arrives late and is dropped.
    /// assert_eq!(sequencer.accept(second, "<svg>2</svg>"), Some("<svg>2</svg>"));
    /// assert_eq!(sequencer.accept(first, "<svg>1</svg>"), None);
    /// ```
    pub fn accept<T>(&self, ticket: RenderTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            trace!(ticket = ticket.0, latest = self.latest; "Discarding stale render result");
            None
        }
    }
}

/// A render the glue layer should start now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub ticket: RenderTicket,
    pub engine: Engine,
    pub code: String,
}

/// The latest edit waiting for its quiet period to end.
#[derive(Debug)]
struct PendingEdit {
    engine: Engine,
    code: String,
    deadline: Instant,
}

/// Coalesces text edits into render requests.
///
/// Each [`record`](Self::record) replaces the pending text and pushes the
/// deadline out by the quiescence window. [`poll`](Self::poll) yields a
/// request once the deadline has passed.
#[derive(Debug)]
pub struct RenderDebouncer {
    window: Duration,
    pending: Option<PendingEdit>,
    sequencer: RenderSequencer,
}

impl RenderDebouncer {
    /// Creates a debouncer with the given quiescence window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            sequencer: RenderSequencer::new(),
        }
    }

    /// Creates a debouncer using the configured, clamped window.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.debounce())
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records an edit made at `now`.
    pub fn record(&mut self, engine: Engine, code: impl Into<String>, now: Instant) {
        let deadline = now + self.window;
        let replaced = self
            .pending
            .replace(PendingEdit {
                engine,
                code: code.into(),
                deadline,
            })
            .is_some();
        trace!(engine:% = engine, coalesced = replaced; "Recorded edit for rendering");
    }

    /// Returns when the pending edit becomes due, if one is waiting.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|edit| edit.deadline)
    }

    /// Returns `true` if an edit is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending edit as a request if its quiet period ended by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<RenderRequest> {
        let due = self.pending.as_ref()?.deadline <= now;
        if !due {
            return None;
        }

        let edit = self.pending.take()?;
        let ticket = self.sequencer.issue();
        debug!(ticket = ticket.0, engine:% = edit.engine; "Issuing render request");
        Some(RenderRequest {
            ticket,
            engine: edit.engine,
            code: edit.code,
        })
    }

    /// Passes `result` through only if it answers the latest request.
    pub fn accept<T>(&self, ticket: RenderTicket, result: T) -> Option<T> {
        self.sequencer.accept(ticket, result)
    }
}

impl Default for RenderDebouncer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(400);

    #[test]
    fn test_tickets_increase() {
        let mut sequencer = RenderSequencer::new();
        assert_eq!(sequencer.latest(), None);

        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(second > first);
        assert_eq!(sequencer.latest(), Some(second));
        assert!(sequencer.is_current(second));
        assert!(!sequencer.is_current(first));
    }

    #[test]
    fn test_nothing_before_deadline() {
        let start = Instant::now();
        let mut debouncer = RenderDebouncer::new(WINDOW);
        assert_eq!(debouncer.poll(start), None);

        debouncer.record(Engine::Mermaid, "flowchart LR", start);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_millis(399)), None);
        assert_eq!(debouncer.deadline(), Some(start + WINDOW));
    }

    #[test]
    fn test_rapid_edits_coalesce_into_one_request() {
        let start = Instant::now();
        let mut debouncer = RenderDebouncer::new(WINDOW);

        debouncer.record(Engine::D2, "a", start);
        debouncer.record(Engine::D2, "a -", start + Duration::from_millis(100));
        debouncer.record(Engine::D2, "a -> b", start + Duration::from_millis(200));

        // The deadline moved with the last edit.
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), None);

        let request = debouncer
            .poll(start + Duration::from_millis(600))
            .expect("quiet period elapsed");
        assert_eq!(request.engine, Engine::D2);
        assert_eq!(request.code, "a -> b");
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_late_response_is_discarded() {
        let start = Instant::now();
        let mut debouncer = RenderDebouncer::new(WINDOW);

        debouncer.record(Engine::Mermaid, "one", start);
        let first = debouncer.poll(start + WINDOW).unwrap();

        let later = start + Duration::from_secs(1);
        debouncer.record(Engine::Mermaid, "two", later);
        let second = debouncer.poll(later + WINDOW).unwrap();

        assert_eq!(debouncer.accept(second.ticket, 2), Some(2));
        assert_eq!(debouncer.accept(first.ticket, 1), None);
    }

    #[test]
    fn test_window_from_config_is_clamped() {
        let debouncer = RenderDebouncer::from_config(&RenderConfig::new(50));
        assert_eq!(debouncer.window(), RenderConfig::MIN_DEBOUNCE);
        assert_eq!(RenderDebouncer::default().window(), WINDOW);
    }
}
