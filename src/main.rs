//! CLI entry point for arbor

use std::ffi::OsString;
use std::io::IsTerminal;
use std::process;

use arbor::{Error, OutputConfig, print_json_tree, print_tree};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Print a directory as an ASCII tree, directories first")]
#[command(version)]
struct Args {
    /// Directory to display
    // Not PathBuf: clap rejects empty paths before the resolver sees them.
    path: Option<OsString>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output the tree as JSON
    #[arg(long = "json")]
    json: bool,
}

/// Logs go to stderr so they never interleave with the tree on stdout.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let result = if args.json {
        print_json_tree(args.path.as_deref())
    } else {
        let config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        print_tree(args.path.as_deref(), &config).map(|_| ())
    };

    match result {
        Ok(()) => {}
        Err(Error::Resolve(e)) => {
            println!("{}", e);
            process::exit(1);
        }
        Err(Error::Io(e)) => {
            eprintln!("arbor: error writing output: {}", e);
            process::exit(1);
        }
    }
}
