use std::cell::Cell;
use std::rc::Rc;

/// Coalesces bursts of events into at most one pending animation-frame job.
///
/// `try_schedule` returns `true` only for the first event since the last
/// `release`; the frame callback calls `release` before doing its work.
#[derive(Clone, Default)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_event_schedules() {
        let gate = FrameGate::new();
        assert!(gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(gate.is_pending());
    }

    #[test]
    fn test_release_reopens_gate() {
        let gate = FrameGate::new();
        assert!(gate.try_schedule());
        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.try_schedule());
    }

    #[test]
    fn test_clones_share_state() {
        let gate = FrameGate::new();
        let frame_side = gate.clone();
        assert!(gate.try_schedule());
        assert!(!frame_side.try_schedule());
        frame_side.release();
        assert!(gate.try_schedule());
    }
}
