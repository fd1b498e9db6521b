/// What the shim should do with an update request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Interval elapsed: recompute now.
    Run,
    /// Too early: schedule one deferred frame.
    Defer,
    /// Too early and a frame is already pending: nothing to do.
    Coalesce,
}

/// Rate limiter with coalescing: at most one deferred update pending at once.
///
/// Time is passed in by the caller (milliseconds from any monotonic origin)
/// so the policy stays testable without a clock.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_run_ms: Option<f64>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_run_ms: None,
            pending: false,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> Admission {
        let due = match self.last_run_ms {
            None => true,
            // a clock that went backwards counts as due
            Some(last) => now_ms - last >= self.interval_ms || now_ms < last,
        };
        if due {
            self.last_run_ms = Some(now_ms);
            return Admission::Run;
        }
        if self.pending {
            Admission::Coalesce
        } else {
            self.pending = true;
            Admission::Defer
        }
    }

    /// The deferred frame fired; the caller re-requests afterwards.
    #[inline]
    pub fn frame_fired(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Forget all timing state. Returns whether a deferred frame was pending.
    pub fn reset(&mut self) -> bool {
        let was_pending = self.pending;
        self.pending = false;
        self.last_run_ms = None;
        was_pending
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}
