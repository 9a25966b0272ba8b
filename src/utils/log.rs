// File: log.rs
// Description: colored log prefixes and timing macro shared by library and CLI

// Colored string for log
pub const INFO: &str = "\x1b[1;32m[INFO]\x1b[0m";
pub const FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m";
pub const WARN: &str = "\x1b[1;33m[WARN]\x1b[0m";
pub const DONE: &str = "\x1b[1;34m[DONE]\x1b[0m";

pub fn log_msg(prefix: &str, msg: &str) -> String { format!("{} {}", prefix, msg) }
pub fn print_log_msg(prefix: &str, msg: &str) { eprintln!("{}", log_msg(prefix, msg)); }

/// Evaluate an expression, log how long it took and yield its value.
#[macro_export]
macro_rules! measure_time {
    ($e:expr) => {{
        let start = std::time::Instant::now();
        let result = $e;
        $crate::utils::log::print_log_msg(
            $crate::utils::log::INFO,
            &format!("{} took {:?}", stringify!($e), start.elapsed()),
        );
        result
    }};
}
