//! Platform identification and asset suffix generation.
//!
//! Release assets are matched by name suffix: an archive built for linux on
//! amd64 is expected to end in something like `linux_amd64.tar.gz` or
//! `linux-amd64`. Identifiers use the Go toolchain vocabulary (`darwin`,
//! `amd64`, `arm64`, ...) since that is what most release pipelines emit.
use std::fmt::Display;

/// Separators accepted between the OS and the architecture.
const SEPARATORS: [char; 2] = ['_', '-'];

/// Archive or compression extensions accepted after the platform marker. The
/// empty entry matches a bare `<os><sep><arch>` name.
const EXTENSIONS: [&str; 7] =
    [".zip", ".tar.gz", ".gzip", ".gz", ".tar.xz", ".xz", ""];

/// Operating system and CPU architecture pair that assets are matched
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Operating system identifier (e.g. "linux", "darwin", "windows").
    pub os: String,
    /// CPU architecture identifier (e.g. "amd64", "arm64").
    pub arch: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Platform of the running process, translated from Rust's
    /// `std::env::consts` names into release asset naming.
    pub fn current() -> Self {
        Self::new(
            os_name(std::env::consts::OS),
            arch_name(std::env::consts::ARCH),
        )
    }

    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// Every filename suffix that marks an asset as built for this platform.
    ///
    /// All suffixes are equally acceptable; the order only reflects how they
    /// are generated. Windows additionally accepts an `.exe` component ahead
    /// of the archive extension.
    pub fn suffixes(&self) -> Vec<String> {
        let per_sep = if self.is_windows() { 2 } else { 1 };
        let mut suffixes =
            Vec::with_capacity(SEPARATORS.len() * EXTENSIONS.len() * per_sep);

        for sep in SEPARATORS {
            for ext in EXTENSIONS {
                suffixes.push(format!("{}{sep}{}{ext}", self.os, self.arch));
                if self.is_windows() {
                    suffixes
                        .push(format!("{}{sep}{}.exe{ext}", self.os, self.arch));
                }
            }
        }

        suffixes
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

fn os_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn arch_name(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" if cfg!(target_endian = "little") => "ppc64le",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        other => other,
    }
}
