use crate::usecase::event::PartitionEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn partition_event_to_json(ev: &PartitionEvent) -> serde_json::Value {
    serde_json::to_value(ev)
        .unwrap_or_else(|e| json!({"type": "unserializable_event", "error": e.to_string()}))
}

/// Drains `rx`, printing one JSON object per line to stdout. The task ends
/// once every sender is dropped.
pub fn spawn_ndjson_printer(mut rx: mpsc::UnboundedReceiver<PartitionEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = partition_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
