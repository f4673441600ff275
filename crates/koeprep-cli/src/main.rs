mod cmd_clean;
mod cmd_extract;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "koeprep",
    version,
    about = "Batch preparation tools for voice-synthesis corpora"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract spoken-line transcripts from .vvproj project files
    Extract {
        /// Project files; each writes a .txt sibling
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Process every file and report all failures instead of stopping at the first
        #[arg(long)]
        keep_going: bool,
    },
    /// Clean raw Shift-JIS corpus files into UTF-8 text
    Clean {
        /// Raw files; each writes a sibling with the .raw suffix removed
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Process every file and report all failures instead of stopping at the first
        #[arg(long)]
        keep_going: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the `src -> dst` progress lines on stdout
    // stay machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Extract { files, keep_going } => cmd_extract::execute(&files, keep_going),
        Command::Clean { files, keep_going } => cmd_clean::execute(&files, keep_going),
    }
}
