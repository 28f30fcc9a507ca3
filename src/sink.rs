use std::io::{self, Write};

use chrono::Local;

use crate::caller::Caller;

/// Timestamp layout for every line: local date and time with microseconds.
const STAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Destination for fully rendered log lines. One call is one line; writers
/// must keep concurrent lines whole.
pub trait LineWriter: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes lines to the process's stdout, flushing after every line.
pub struct StdoutWriter;

impl LineWriter for StdoutWriter {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

/// Writes lines to the process's stderr.
pub struct StderrWriter;

impl LineWriter for StderrWriter {
    fn write_line(&self, line: &str) {
        let mut out = io::stderr().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// An output sink owning a line writer. The sink stamps each line with the
/// local time before handing it over; the optional caller segment sits
/// between the stamp and the message.
pub struct Sink {
    writer: Box<dyn LineWriter>,
}

impl Sink {
    pub fn stdout() -> Self {
        Self::new(StdoutWriter)
    }

    pub fn stderr() -> Self {
        Self::new(StderrWriter)
    }

    pub fn new(writer: impl LineWriter + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    pub(crate) fn append(&self, caller: Option<&Caller>, msg: &str) {
        let stamp = Local::now().format(STAMP_FORMAT);
        let line = match caller {
            Some(caller) => format!("{stamp} {}:{}: {msg}", caller.file, caller.line),
            None => format!("{stamp} {msg}"),
        };
        self.writer.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<String>>>);

    impl LineWriter for CaptureWriter {
        fn write_line(&self, line: &str) {
            self.0.lock().unwrap().push(line.to_string());
        }
    }

    #[test]
    fn stamps_every_line() {
        let writer = CaptureWriter::default();
        let sink = Sink::new(writer.clone());
        sink.append(None, "INF: ready");
        let lines = writer.0.lock().unwrap();
        let re =
            regex::Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6} INF: ready$").unwrap();
        assert!(re.is_match(&lines[0]), "unexpected line: {}", lines[0]);
    }

    #[test]
    fn inserts_the_caller_between_stamp_and_message() {
        let writer = CaptureWriter::default();
        let sink = Sink::new(writer.clone());
        sink.append(Some(&Caller::short("src/sink.rs", 42)), "DBG: probe");
        let lines = writer.0.lock().unwrap();
        let re = regex::Regex::new(
            r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6} sink\.rs:42: DBG: probe$",
        )
        .unwrap();
        assert!(re.is_match(&lines[0]), "unexpected line: {}", lines[0]);
    }
}
