//! Colorized console logging for development builds.
//!
//! Each line is tagged with the calling file's name and the time of day, and
//! is only printed when the debug flag is exactly `development`. The tag comes
//! from the caller's own `file!()`, so calls made from a binary's `src/main.rs`
//! are tagged `[main]`:
//!
//! ```no_run
//! use prettylog::pretty_log_with;
//!
//! let obj = serde_json::json!({ "a": 1, "c": "tres" });
//! pretty_log_with!(Some("development"), "red", "Hola.", "Log 1.");
//! pretty_log_with!(Some("development"), "cyan", "Object:", obj);
//! // \x1b[31m[main] (7:25:33 PM): Hola. Log 1.\x1b[0m
//! // \x1b[36m[main] (7:25:33 PM): Object: {"a":1,"c":"tres"}\x1b[0m
//! ```

pub mod colors;
pub mod formatter;
pub mod guard;
pub mod paths;
pub mod settings;

pub use colors::Color;
pub use formatter::{prettylog, LogConfig};
pub use guard::{run_if_enabled, ENABLED_SENTINEL};
pub use settings::{get_settings, Settings};

/// Logs the values in `color` if the process settings enable output.
///
/// The caller's crate directory and source file are filled in automatically.
/// Evaluates to `Some(())` when a line was printed and `None` otherwise.
#[macro_export]
macro_rules! pretty_log {
    ($color:expr $(, $value:expr)* $(,)?) => {
        $crate::pretty_log_with!($crate::settings::get_settings().debug_flag(), $color $(, $value)*)
    };
}

/// Like `pretty_log!`, with the debug flag given explicitly.
#[macro_export]
macro_rules! pretty_log_with {
    ($flag:expr, $color:expr $(, $value:expr)* $(,)?) => {
        $crate::guard::run_if_enabled($flag, || {
            let config = $crate::formatter::LogConfig::new($color)
                .with_origin(env!("CARGO_MANIFEST_DIR"), file!());
            $crate::formatter::prettylog(&config, &[$($crate::formatter::to_log_value(&$value)),*]);
        })
    };
}
