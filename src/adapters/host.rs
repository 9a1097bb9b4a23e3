//! Log-only view host for the demo binary.
//!
//! Implements the video player and the navigation router by logging the
//! request and remembering the last one.

use log::info;

use crate::app::ports::{NavigationHostPort, VideoPlayerPort};

#[derive(Debug, Default)]
pub struct LogHost {
    last_topic: Option<&'static str>,
    current_state: Option<&'static str>,
}

impl LogHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_topic(&self) -> Option<&'static str> {
        self.last_topic
    }

    pub fn current_state(&self) -> Option<&'static str> {
        self.current_state
    }
}

impl VideoPlayerPort for LogHost {
    fn start_topic(&mut self, topic: &'static str, target_state: Option<&'static str>) {
        match target_state {
            Some(target) => info!("HOST | play '{}' then show {}", topic, target),
            None => info!("HOST | play '{}'", topic),
        }
        self.last_topic = Some(topic);
    }
}

impl NavigationHostPort for LogHost {
    fn go_to_state(&mut self, state_name: &'static str) {
        info!("HOST | go to {}", state_name);
        self.current_state = Some(state_name);
    }
}
