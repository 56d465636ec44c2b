//! Fixed-interval driver for the pipeline
//!
//! Each tick polls the row source, feeds the rows through the pipeline and
//! publishes a snapshot. Ticks run one after another on a single task, so
//! they can never overlap; a tick that overruns the interval makes the
//! scheduler skip the ticks it missed rather than queue them.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, trace, warn};
use raven_view_core::{BoxedRenderer, BoxedRowSource};
use raven_view_types::Snapshot;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

use super::pipeline::Pipeline;
use super::published::SnapshotCell;

/// Where the scheduler is in its cycle.
///
/// `Ticking` only holds while [`Scheduler::tick`] runs, so callers of
/// [`Scheduler::state`] always see `Idle`; each transition is logged at
/// trace level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Ticking,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// New rows arrived and a fresh snapshot was published
    Updated { decoded: usize, rejected: usize },
    /// Nothing new; the previous snapshot was published again
    NoNewRows,
    /// The source could not be read; the previous snapshot was published again
    SourceUnavailable,
}

/// Counters kept over the scheduler's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    /// Ticks dropped because an earlier tick overran the interval
    pub skipped: u64,
    pub rows_decoded: u64,
    pub rows_rejected: u64,
    pub unavailable_polls: u64,
}

pub struct Scheduler {
    source: BoxedRowSource,
    pipeline: Pipeline,
    renderers: Vec<BoxedRenderer>,
    published: SnapshotCell,
    interval: Duration,
    state: SchedulerState,
    stats: TickStats,
    source_available: bool,
}

impl Scheduler {
    pub fn new(source: BoxedRowSource, pipeline: Pipeline, interval: Duration) -> Self {
        let published = SnapshotCell::new(pipeline.snapshot());
        Self {
            source,
            pipeline,
            renderers: Vec::new(),
            published,
            interval,
            state: SchedulerState::Idle,
            stats: TickStats::default(),
            source_available: true,
        }
    }

    /// Add a renderer that receives every published snapshot
    pub fn add_renderer(&mut self, renderer: BoxedRenderer) {
        self.renderers.push(renderer);
    }

    /// Handle onto the most recently published snapshot
    pub fn snapshot_cell(&self) -> SnapshotCell {
        self.published.clone()
    }

    pub fn latest(&self) -> Arc<Snapshot> {
        self.published.load()
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run one update cycle and publish its snapshot
    pub fn tick(&mut self) -> TickOutcome {
        self.set_state(SchedulerState::Ticking);

        let outcome = match self.source.poll_rows() {
            Ok(rows) => {
                if !self.source_available {
                    info!("Source {} is readable again", self.source.metadata().name);
                    self.source_available = true;
                }
                if rows.is_empty() {
                    TickOutcome::NoNewRows
                } else {
                    let counts = self.pipeline.apply_rows(&rows);
                    self.pipeline.recompute_averages();
                    self.published.store(Arc::new(self.pipeline.snapshot()));

                    self.stats.rows_decoded += counts.decoded as u64;
                    self.stats.rows_rejected += counts.rejected as u64;
                    TickOutcome::Updated {
                        decoded: counts.decoded,
                        rejected: counts.rejected,
                    }
                }
            }
            Err(e) => {
                // Only report the transition, not every tick the file is missing
                if self.source_available {
                    warn!("{}; keeping the last snapshot until it returns", e);
                    self.source_available = false;
                } else {
                    trace!("{}", e);
                }
                self.stats.unavailable_polls += 1;
                TickOutcome::SourceUnavailable
            }
        };

        self.publish();
        self.stats.ticks += 1;
        self.set_state(SchedulerState::Idle);
        outcome
    }

    fn set_state(&mut self, state: SchedulerState) {
        trace!("Scheduler {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn publish(&mut self) {
        let snapshot = self.published.load();
        for renderer in &mut self.renderers {
            if let Err(e) = renderer.render(&snapshot) {
                warn!("Renderer {} failed: {}", renderer.id(), e);
            }
        }
    }

    /// Tick every interval until `shutdown` turns true or its sender is dropped.
    ///
    /// Shutdown is only observed between ticks.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        if *shutdown.borrow() {
            return;
        }

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!("Scheduler running every {:?}", self.interval);

        loop {
            let deadline = tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
                deadline = interval.tick() => deadline,
            };

            let start = Instant::now();
            self.tick();
            let finished = Instant::now();
            trace!("Tick took {:?}", finished - start);

            // Deadlines that passed while this tick ran are dropped, and the
            // next tick waits a full interval from now.
            let late = finished.saturating_duration_since(deadline);
            if late >= self.interval {
                let missed = (late.as_nanos() / self.interval.as_nanos().max(1)) as u64;
                debug!("Tick overran by {:?}, skipping {} ticks", late, missed);
                self.stats.skipped += missed;
                interval.reset();
            }
        }

        for renderer in &mut self.renderers {
            if let Err(e) = renderer.finish() {
                warn!("Renderer {} failed to finish: {}", renderer.id(), e);
            }
        }
        let stats = self.stats;
        info!(
            "Scheduler stopped: {} ticks, {} skipped, {} rows decoded, {} rejected, {} unavailable polls",
            stats.ticks, stats.skipped, stats.rows_decoded, stats.rows_rejected, stats.unavailable_polls
        );
    }
}
