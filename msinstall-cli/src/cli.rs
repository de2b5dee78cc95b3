use clap::Parser;

/// A utility to install the mrsocko binary onto the PATH
#[derive(Parser, Debug)]
#[command(name = "msinstall")]
#[command(author = "4n6h4x0r")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Copies mrsocko into the first eligible directory on your PATH", long_about = None)]
pub struct Args {
    /// Preview the chosen destination without copying anything
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
