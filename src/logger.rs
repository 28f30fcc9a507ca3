use std::{
    fmt::Display,
    panic::Location,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::{
    caller::{self, Caller, DEFAULT_CALL_DEPTH},
    config::SPLITLOG_CONFIG,
    sink::Sink,
};

/// A leveled logger over two independent sinks: informational output on
/// the normal sink, errors and diagnostics on the error sink.
///
/// One instance is meant to be shared per process. Both settings can be
/// flipped at runtime from any thread and take effect on the next call.
pub struct Logger {
    normal: Sink,
    error: Sink,
    debug: AtomicBool,
    call_depth: AtomicUsize,
}

impl Logger {
    /// Creates a logger bound to the process's stdout and stderr, with
    /// debug output disabled unless `SPLITLOG_DEBUG` says otherwise.
    pub fn new() -> Self {
        Self::with_sinks(Sink::stdout(), Sink::stderr())
    }

    /// Creates a logger over caller-supplied sinks.
    pub fn with_sinks(normal: Sink, error: Sink) -> Self {
        Self {
            normal,
            error,
            debug: AtomicBool::new(SPLITLOG_CONFIG.DEBUG),
            call_depth: AtomicUsize::new(SPLITLOG_CONFIG.CALL_DEPTH),
        }
    }

    /// Sets the number of stack frames skipped when resolving a call site
    /// for annotation. Any value is accepted; an out-of-range depth yields
    /// a wrong or fallback location, never an error, and never changes
    /// what is delivered.
    pub fn set_call_depth(&self, depth: usize) {
        self.call_depth.store(depth, Ordering::Relaxed);
    }

    /// Turns debug output on or off. While enabled, lines on both sinks
    /// carry a `file:line` segment next to the timestamp; disabling
    /// reverts both sinks to timestamp-only annotation.
    pub fn enable_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Writes one `DBG: ` line to the error sink. No-op while debug
    /// output is disabled.
    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        if self.debug_enabled() {
            self.emit(&self.error, Location::caller(), &header("DBG", &msg));
        }
    }

    /// Writes one `INF: ` line to the normal sink.
    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        self.emit(&self.normal, Location::caller(), &header("INF", &msg));
    }

    /// Writes one `ERR: ` line to the error sink.
    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        self.emit(&self.error, Location::caller(), &header("ERR", &msg));
    }

    /// Writes one `FTL: ` line to the error sink, then terminates the
    /// process with exit status 1.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) -> ! {
        self.emit(&self.error, Location::caller(), &header("FTL", &msg));
        std::process::exit(1);
    }

    /// Writes the rendered message to the error sink without a level tag,
    /// then panics with the same message. The crate performs no recovery;
    /// whether the unwind is caught is up to the surrounding context.
    #[track_caller]
    pub fn panic(&self, msg: impl Display) -> ! {
        let msg = msg.to_string();
        self.emit(&self.error, Location::caller(), &msg);
        panic!("{msg}");
    }

    /// Facade entry: the record already carries its own call site, so the
    /// configured call depth does not apply.
    pub(crate) fn append_line(&self, to_error: bool, caller: Option<Caller>, line: &str) {
        let sink = if to_error { &self.error } else { &self.normal };
        let caller = if self.debug_enabled() { caller } else { None };
        sink.append(caller.as_ref(), line);
    }

    fn emit(&self, sink: &Sink, site: &'static Location<'static>, line: &str) {
        let caller = if self.debug_enabled() {
            let depth = self.call_depth.load(Ordering::Relaxed);
            if depth == DEFAULT_CALL_DEPTH {
                Some(Caller::from(site))
            } else {
                // Depth 0 counts from this frame, matching the stack-walk
                // contract in caller::resolve.
                Some(caller::resolve(depth).unwrap_or_else(|| Caller::from(site)))
            }
        } else {
            None
        };
        sink.append(caller.as_ref(), line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn header(tag: &str, msg: &impl Display) -> String {
    format!("{tag}: {msg}")
}
