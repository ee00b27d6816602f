use crate::host::{CwdDescriptor, Host, Pane, Platform};
use crate::utils::debug_with_context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryInfo {
    /// Last component of `display_path`
    pub basename: String,
    pub hostname: String,
    /// Normalized path with the home directory shortened to `~`
    pub display_path: String,
    /// Normalized absolute path, used for the git lookup
    pub path: Option<String>,
}

pub struct DirectorySegment;

impl DirectorySegment {
    pub fn new() -> Self {
        Self
    }

    pub fn get_directory_info(&self, host: &impl Host, pane: &impl Pane) -> DirectoryInfo {
        let descriptor = pane.current_working_dir();
        let home = host.home_dir();
        let info = resolve(
            descriptor.as_ref(),
            &host.hostname(),
            home.as_deref(),
            host.platform(),
        );

        debug_with_context(
            "directory",
            &format!("cwd={:?} host={} path={:?}", info.display_path, info.hostname, info.path),
        );
        info
    }
}

impl Default for DirectorySegment {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a pane's working directory into display strings and a path
pub fn resolve(
    descriptor: Option<&CwdDescriptor>,
    default_host: &str,
    home: Option<&str>,
    platform: Platform,
) -> DirectoryInfo {
    let (host, path) = match descriptor {
        None => (None, String::new()),
        Some(CwdDescriptor::Structured { path, host }) => (host.clone(), path.clone()),
        Some(CwdDescriptor::Uri(uri)) => {
            let (host, path) = split_file_uri(uri);
            (host, percent_decode(&path))
        }
    };

    let hostname = host
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| default_host.to_string());

    if path.is_empty() {
        return DirectoryInfo {
            basename: "~".to_string(),
            hostname,
            display_path: "~".to_string(),
            path: None,
        };
    }

    let path = normalize(&path, platform);
    let display_path = match home {
        Some(home) => shorten_home(&path, &normalize(home, platform), platform),
        None => path.clone(),
    };

    DirectoryInfo {
        basename: basename(&display_path).to_string(),
        hostname,
        display_path,
        path: Some(path),
    }
}

/// Split `file://host/path` into host and path.
///
/// The first `/` after the scheme starts the path; whatever precedes it is
/// the host. A string without the scheme is split the same way.
pub fn split_file_uri(uri: &str) -> (Option<String>, String) {
    let rest = uri.strip_prefix("file://").unwrap_or(uri);
    match rest.find('/') {
        Some(index) => {
            let host = &rest[..index];
            let host = (!host.is_empty()).then(|| host.to_string());
            (host, rest[index..].to_string())
        }
        None if rest.is_empty() => (None, String::new()),
        None => (Some(rest.to_string()), String::new()),
    }
}

/// Decode `%XX` escapes into raw bytes; malformed escapes are kept as-is
pub fn percent_decode(input: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(input.as_bytes())).into_owned()
}

/// Strip the leading slash of `/C:` drive paths; use backslashes on Windows
pub fn normalize(path: &str, platform: Platform) -> String {
    let bytes = path.as_bytes();
    let path = if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        &path[1..]
    } else {
        path
    };

    if platform.is_windows() {
        path.replace('/', "\\")
    } else {
        path.to_string()
    }
}

/// Replace a leading home directory with `~`.
///
/// The prefix must end on a component boundary, so `/home/al` does not
/// shorten `/home/alice`. Windows paths compare case-insensitively.
pub fn shorten_home(path: &str, home: &str, platform: Platform) -> String {
    let home = home.trim_end_matches(['/', '\\']);
    if home.is_empty() {
        return path.to_string();
    }

    let rest = if platform.is_windows() {
        path.get(..home.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(home))
            .map(|_| &path[home.len()..])
    } else {
        path.strip_prefix(home)
    };

    match rest {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with(['/', '\\']) => format!("~{}", rest),
        _ => path.to_string(),
    }
}

/// Last path component, ignoring trailing separators
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return path;
    }

    match trimmed.rfind(['/', '\\']) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}
