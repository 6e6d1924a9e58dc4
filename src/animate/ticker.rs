use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use log::{error, info};

use crate::animate::scene::Scene;
use crate::render::RenderAdapter;

/// Cooperative stop signal for a running [`Ticker`]. Clones share the
/// flag, so any holder can stop the loop from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// `Ticker`
/// The animation loop as an explicit scheduled task: sample the clock,
/// compose, draw, sleep, until cancelled or a tick budget runs out.
///
/// The phase is taken from absolute wall-clock time on every tick, so a
/// slow tick delays the next frame but never accumulates drift.
pub struct Ticker {
    interval: Duration,
    budget: Option<u64>,
    cancel: CancelToken,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            budget: None,
            cancel: CancelToken::new(),
        }
    }

    /// Caps the run at a fixed number of ticks, for demos and
    /// deterministic tests.
    pub fn with_budget(mut self, ticks: u64) -> Self {
        self.budget = Some(ticks);
        self
    }

    /// A handle that stops the loop at the top of its next tick.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Drives the loop until cancellation, budget exhaustion, or
    /// failure.
    ///
    /// A composition failure (a broken clock contract) or a rejected
    /// frame ends the run with the error; display failures are not
    /// retried.
    pub fn run<A: RenderAdapter>(&self, scene: &Scene, adapter: &mut A) -> crate::Result<()> {
        let mut ticks: u64 = 0;

        loop {
            if self.cancel.is_cancelled() {
                info!("Animation cancelled after {ticks} ticks");
                return Ok(());
            }
            if self.budget.is_some_and(|budget| ticks >= budget) {
                return Ok(());
            }

            let now_ms = Utc::now().timestamp_millis().max(0) as u64;
            let frame = scene.compose(now_ms)?;

            if let Err(err) = adapter.draw(&frame) {
                error!("Display surface rejected frame {ticks}: {err:?}");
                return Err(err.into());
            }

            ticks += 1;
            thread::sleep(self.interval);
        }
    }
}
