//! Bounded command queue.
//!
//! Several input sources (touch panel, steering-wheel keys, voice) may
//! push concurrently; the controller drains the queue on its own thread,
//! one command at a time.  A full queue drops the new command.

use std::sync::{Mutex, PoisonError};

use log::warn;

use crate::app::commands::ClimateCommand;

pub const COMMAND_QUEUE_DEPTH: usize = 32;

#[derive(Default)]
pub struct CommandQueue {
    inner: Mutex<heapless::Deque<ClimateCommand, COMMAND_QUEUE_DEPTH>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `cmd`.  Returns `false` if the queue was full.
    pub fn push(&self, cmd: ClimateCommand) -> bool {
        let mut q = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match q.push_back(cmd) {
            Ok(()) => true,
            Err(dropped) => {
                warn!("Command queue full, dropping {:?}", dropped);
                false
            }
        }
    }

    pub fn pop(&self) -> Option<ClimateCommand> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
