use std::sync::{Arc, Mutex};

use splitlog::{LineWriter, Logger, Sink};

/// Collects written lines in memory so tests can assert on them.
#[derive(Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryWriter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LineWriter for MemoryWriter {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// A logger over two capture sinks, returned alongside both writers.
pub fn capture_logger() -> (Logger, MemoryWriter, MemoryWriter) {
    let normal = MemoryWriter::default();
    let error = MemoryWriter::default();
    let logger = Logger::with_sinks(Sink::new(normal.clone()), Sink::new(error.clone()));
    (logger, normal, error)
}
