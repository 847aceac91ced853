use crate::usecase::stats::ForestStats;
use serde::Serialize;
use tokio::sync::mpsc;

/// Optional sink for progress events. Sending never blocks, so the
/// synchronous core can emit from anywhere.
pub type EventSink = Option<mpsc::UnboundedSender<PartitionEvent>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartitionEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    ComponentsDetected {
        nodes: usize,
        edges: usize,
        components: usize,
    },

    ComponentCreated {
        node: String,
    },

    ComponentsMerged {
        merged: usize,
        nodes: usize,
    },

    ComponentSplit {
        pieces: usize,
        nodes: usize,
    },

    ComponentDropped {
        node: String,
    },

    TreeClassified {
        nodes: usize,
        root: Option<String>,
        is_tree: bool,
    },

    Finished {
        stats: ForestStats,
    },
}

pub(crate) fn emit(sink: &EventSink, ev: PartitionEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev);
    }
}
