//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured panel events to the
//! `log` facade.  A view-layer binding would implement the same trait.

use log::info;

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PanelEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PanelEvent) {
        info!("{}", render(event));
    }
}

/// One `TAG | detail` line per event.
fn render(event: &PanelEvent) -> String {
    match event {
        PanelEvent::Started(state) => format!("START | initial_state={}", state.host_name()),
        PanelEvent::NavigationChanged { from, to } => {
            format!("STATE | {} -> {}", from.name(), to.name())
        }
        PanelEvent::ModelChanged(fields) => format!(
            "MODEL | {} field(s): {:?}",
            fields.len(),
            fields.iter().collect::<Vec<_>>()
        ),
        PanelEvent::FlagChanged { flag, value } => format!("FLAG | {}={}", flag.name(), value),
        PanelEvent::VideoRequested { topic } => format!("VIDEO | {topic}"),
        PanelEvent::StoreAckShown => "ACK | my temp stored (shown)".to_string(),
        PanelEvent::StoreAckHidden => "ACK | hidden".to_string(),
    }
}
