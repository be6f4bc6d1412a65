//! Builds and writes a single colorized log line:
//! `<color>[<file tag>] (<time>): <values...><reset>`.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Write};

use crate::colors::{self, RESET};
use crate::paths;

/// Per-call settings for a log line.
///
/// Built fresh at each call site and dropped after the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Color name; unknown or missing names print in white
    #[serde(default)]
    pub color: Option<String>,
    /// Directory of the calling source file
    #[serde(default)]
    pub origin_file_dir: Option<String>,
    /// Path of the calling source file
    #[serde(default)]
    pub origin_file_path: Option<String>,
}

impl LogConfig {
    /// Creates a config with a color and no origin
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Sets the caller's source directory and file path
    #[must_use]
    pub fn with_origin(mut self, dir: impl Into<String>, path: impl Into<String>) -> Self {
        self.origin_file_dir = Some(dir.into());
        self.origin_file_path = Some(path.into());
        self
    }

    /// The escape code this config prints in
    pub fn ansi_color(&self) -> &'static str {
        colors::resolve(self.color.as_deref())
    }

    /// The bracketed tag for this config's origin, possibly empty
    pub fn file_tag(&self) -> &str {
        paths::file_tag(self.origin_file_dir.as_deref(), self.origin_file_path.as_deref())
    }
}

/// Converts any serializable value into a loggable one.
///
/// Values that cannot be represented (e.g. maps with non-string keys)
/// degrade to a description of the failure instead of aborting the log call.
pub fn to_log_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| Value::String(format!("<unloggable: {e}>")))
}

/// Current local time of day, e.g. `7:25:33 PM`
pub fn timestamp() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}

fn push_value(line: &mut String, value: &Value) {
    match value {
        // Strings print bare, like a console would
        Value::String(s) => line.push_str(s),
        other => line.push_str(&other.to_string()),
    }
}

/// Renders a full log line without the trailing newline.
pub fn render_line(config: &LogConfig, values: &[Value], timestamp: &str) -> String {
    let mut line = format!("{}[{}] ({timestamp}):", config.ansi_color(), config.file_tag());
    for value in values {
        line.push(' ');
        push_value(&mut line, value);
    }
    line.push_str(RESET);
    line
}

/// Writes one log line, stamped with the current time, to `writer`.
///
/// ### Arguments
/// * `writer` - Destination of the line
/// * `config` - Color and origin of the line
/// * `values` - Message values, in order
pub fn write_line<W: Write>(writer: &mut W, config: &LogConfig, values: &[Value]) -> io::Result<()> {
    let line = render_line(config, values, &timestamp());
    writeln!(writer, "{line}")
}

/// Prints one log line to stdout.
///
/// Never fails: a failed write is reported on stderr and dropped.
pub fn prettylog(config: &LogConfig, values: &[Value]) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_line(&mut handle, config, values) {
        eprintln!("Failed to write log line: {e}");
    }
}
