//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Event sink that outputs one JSON object per line
pub struct JsonEventSink {
    /// Value of the `"command"` field on every line
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event.to_json(self.command));
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::TransferOp;
    use std::sync::Arc;

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_writes_one_object_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("watch", writer);

        sink.on_event(SyncEvent::SyncStarted {
            paths: vec!["a/b.txt".to_string()],
        });
        sink.on_event(SyncEvent::TransferItem {
            op: TransferOp::Deleted,
            path: "old.txt".to_string(),
        });
        sink.on_event(SyncEvent::Shutdown);

        let lines = lines(&buffer);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["event"], "sync_started");
        assert_eq!(lines[0]["command"], "watch");
        assert_eq!(lines[0]["paths"][0], "a/b.txt");
        assert_eq!(lines[1]["op"], "deleted");
        assert_eq!(lines[2]["event"], "shutdown");
    }

    #[test]
    fn json_sink_wants_detail() {
        let (writer, _buffer) = TestWriter::new();
        assert!(JsonEventSink::with_writer("sync", writer).wants_detailed_events());
    }
}
