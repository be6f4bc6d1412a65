//! File tag derivation: the caller's source file name without its directory
//! or extension. Separator rules differ between Windows and everything else,
//! so the rule set is a `PathStyle` chosen once for the build target.

/// Path parsing rules for one family of operating systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/` separated paths
    Posix,
    /// `\` or `/` separated paths with an optional `X:` drive prefix
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was built for
    pub const NATIVE: Self = if cfg!(windows) {
        Self::Windows
    } else {
        Self::Posix
    };

    const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    fn strip_drive(self, path: &str) -> &str {
        if self != Self::Windows {
            return path;
        }
        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            &path[2..]
        } else {
            path
        }
    }

    /// Last component of `path`, ignoring trailing separators.
    pub fn basename(self, path: &str) -> &str {
        let path = self.strip_drive(path);
        let trimmed = path.trim_end_matches(|c| self.is_separator(c));
        match trimmed.rfind(|c| self.is_separator(c)) {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }

    /// Extension of the last component, including the dot.
    ///
    /// Empty when there is no dot, or when the only dot leads the name
    /// (`.env` is a name, not an extension).
    pub fn extname(self, path: &str) -> &str {
        let name = self.basename(path);
        if name == ".." {
            return "";
        }
        match name.rfind('.') {
            Some(0) | None => "",
            Some(idx) => &name[idx..],
        }
    }

    /// Last component of `path` with its extension removed.
    pub fn file_stem(self, path: &str) -> &str {
        let name = self.basename(path);
        let ext = self.extname(path);
        &name[..name.len() - ext.len()]
    }

    /// Tag shown in a log line for the given origin.
    ///
    /// Empty unless both the directory and the path are known.
    pub fn file_tag<'a>(self, dir: Option<&str>, path: Option<&'a str>) -> &'a str {
        match (dir, path) {
            (Some(dir), Some(path)) if !dir.is_empty() && !path.is_empty() => self.file_stem(path),
            _ => "",
        }
    }
}

/// `PathStyle::file_tag` for the platform this crate was built for.
pub fn file_tag<'a>(dir: Option<&str>, path: Option<&'a str>) -> &'a str {
    PathStyle::NATIVE.file_tag(dir, path)
}
