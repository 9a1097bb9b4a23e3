//! Shared mutable context threaded through every navigation handler.

/// Panel visibility flags and transition bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
    /// Front climate controls hidden.
    pub hide_front: bool,
    /// Rear climate controls hidden.
    pub hide_rear: bool,
    /// Completed transitions since startup.
    pub transitions: u64,
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

impl NavContext {
    /// Front visible, rear hidden.
    pub fn new() -> Self {
        Self {
            hide_front: false,
            hide_rear: true,
            transitions: 0,
        }
    }
}
