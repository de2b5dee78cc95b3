use std::fmt;

/// Operating-system family the installer dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Bsd,
    MacOs,
    Windows,
    /// Anything without an installation strategy
    Other,
}

impl Platform {
    /// Detects the family of the host operating system
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an `std::env::consts::OS`-style identifier to a family
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Platform::Bsd,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    /// True for families that share the Unix install procedure
    pub fn is_unix_like(&self) -> bool {
        matches!(self, Platform::Linux | Platform::Bsd)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "Linux",
            Platform::Bsd => "BSD",
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
            Platform::Other => "this platform",
        };
        f.write_str(name)
    }
}
