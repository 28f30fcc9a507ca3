use std::sync::LazyLock;

use derive_from_env::FromEnv;

/// Process-wide defaults for newly constructed loggers.
#[derive(FromEnv)]
#[from_env(prefix = "SPLITLOG")]
#[allow(non_snake_case)]
pub struct SplitlogConfig {
    /// Start loggers with debug output (and call-site annotation) enabled.
    #[from_env(default = "false")]
    pub DEBUG: bool,
    /// Stack frames to skip when resolving a call site.
    #[from_env(default = "2")]
    pub CALL_DEPTH: usize,
}

pub static SPLITLOG_CONFIG: LazyLock<SplitlogConfig> =
    LazyLock::new(|| SplitlogConfig::from_env().unwrap());
