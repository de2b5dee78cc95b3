use anyhow::Result;
use msinstall_core::{InstallConfig, InstallEngine, InstallOutcome, ARTIFACT_NAME, CANDIDATE_DIRS};

mod cli;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    if args.dry_run {
        log::info!("Running in DRY-RUN mode - nothing will be copied");
    }

    let config = InstallConfig {
        dry_run: args.dry_run,
        ..InstallConfig::default()
    };
    let engine = InstallEngine::new(config);

    match engine.run()? {
        InstallOutcome::Installed(dest) => {
            println!("Installed to {}", dest.display());
        }
        InstallOutcome::WouldInstall(dest) => {
            println!("[DRY RUN] Would install to {}", dest.display());
        }
        InstallOutcome::PermissionDenied(dest) => {
            eprintln!(
                "Unable to copy to {} due to inadequate permissions.",
                dest.display()
            );
            if running_as_root() {
                eprintln!("Already running as root; the destination may be read-only.");
            } else {
                eprintln!("Try installing as root!");
            }
            std::process::exit(1);
        }
        InstallOutcome::NoEligibleDir => {
            eprintln!("None of the install directories are on your PATH:");
            for dir in CANDIDATE_DIRS {
                eprintln!("  {}", dir);
            }
            eprintln!("Add one of them to PATH and rerun.");
            std::process::exit(1);
        }
        InstallOutcome::Unsupported(platform) => {
            eprintln!(
                "No install procedure for {} yet. Copy '{}' somewhere on your PATH manually.",
                platform, ARTIFACT_NAME
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(unix)]
fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn running_as_root() -> bool {
    false
}
