use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{caller::Caller, logger::Logger};

/// Adapter feeding `log` macro records into a shared [`Logger`]:
/// `info!` lands on the normal sink, `warn!` and `error!` on the error
/// sink, `debug!` and `trace!` on the error sink behind the debug toggle.
struct FacadeLogger {
    logger: Arc<Logger>,
}

impl Log for FacadeLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let caller = record
            .file()
            .zip(record.line())
            .map(|(file, line)| Caller::short(file, line));
        match record.level() {
            Level::Info => {
                self.logger
                    .append_line(false, caller, &format!("INF: {}", record.args()));
            }
            Level::Warn | Level::Error => {
                self.logger
                    .append_line(true, caller, &format!("ERR: {}", record.args()));
            }
            Level::Debug | Level::Trace => {
                if self.logger.debug_enabled() {
                    self.logger
                        .append_line(true, caller, &format!("DBG: {}", record.args()));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Installs `logger` as the backend of the `log` crate macros for the
/// whole process and returns it for direct use. Fails if a global logger
/// is already installed.
pub fn init_global(logger: Logger) -> Result<Arc<Logger>, SetLoggerError> {
    let logger = Arc::new(logger);
    log::set_boxed_logger(Box::new(FacadeLogger {
        logger: Arc::clone(&logger),
    }))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(logger)
}
