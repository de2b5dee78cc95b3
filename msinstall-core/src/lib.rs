use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

// Internal modules (private)
mod copier;
mod platform;
mod selector;

// Re-export public types
pub use copier::CopyStatus;
pub use platform::Platform;
pub use selector::{search_path_dirs, select_install_dir, CANDIDATE_DIRS};

/// File name of the binary this tool installs, resolved against the
/// current working directory
pub const ARTIFACT_NAME: &str = "mrsocko";

/// Configuration options for the install engine
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Path to the binary to install
    pub artifact: PathBuf,
    /// Report the chosen destination without writing anything
    pub dry_run: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from(ARTIFACT_NAME),
            dry_run: false,
        }
    }
}

/// Result of one installation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The artifact was copied to this destination
    Installed(PathBuf),
    /// Dry run: this destination would have been used
    WouldInstall(PathBuf),
    /// A destination was chosen but the copy was refused
    PermissionDenied(PathBuf),
    /// None of the candidate directories is on the search path
    NoEligibleDir,
    /// No install procedure exists for this platform family
    Unsupported(Platform),
}

/// Main install engine: platform dispatch plus the Unix install procedure
pub struct InstallEngine {
    config: InstallConfig,
}

impl InstallEngine {
    /// Create a new install engine with the given configuration
    pub fn new(config: InstallConfig) -> Self {
        Self { config }
    }

    /// Detects the host platform and runs the matching install procedure
    pub fn run(&self) -> Result<InstallOutcome> {
        self.run_on(Platform::detect())
    }

    /// Runs the install procedure for a specific platform family.
    /// Linux and the BSDs share the Unix procedure; the rest have none.
    pub fn run_on(&self, platform: Platform) -> Result<InstallOutcome> {
        match platform {
            Platform::Linux | Platform::Bsd => self.install_unix(),
            Platform::MacOs | Platform::Windows | Platform::Other => {
                Ok(InstallOutcome::Unsupported(platform))
            }
        }
    }

    fn install_unix(&self) -> Result<InstallOutcome> {
        let path_var = env::var_os("PATH").unwrap_or_default();
        let search_path = selector::search_path_dirs(&path_var);
        self.install_from_search_path(&search_path)
    }

    /// Unix procedure with the search path injected, so tests never have to
    /// touch the real environment
    pub fn install_from_search_path(&self, search_path: &[PathBuf]) -> Result<InstallOutcome> {
        let dest_dir = match selector::select_install_dir(search_path, &CANDIDATE_DIRS) {
            Some(dir) => dir,
            None => return Ok(InstallOutcome::NoEligibleDir),
        };

        log::info!("{} found in PATH", dest_dir.display());
        self.install_into(&dest_dir)
    }

    /// Copies the configured artifact into `dest_dir`
    pub fn install_into(&self, dest_dir: &Path) -> Result<InstallOutcome> {
        log::info!("Installing to {}", dest_dir.display());

        if self.config.dry_run {
            return Ok(InstallOutcome::WouldInstall(dest_dir.to_path_buf()));
        }

        match copier::copy_artifact(&self.config.artifact, dest_dir)? {
            CopyStatus::Copied(dest) => Ok(InstallOutcome::Installed(dest)),
            CopyStatus::PermissionDenied => {
                Ok(InstallOutcome::PermissionDenied(dest_dir.to_path_buf()))
            }
        }
    }
}
