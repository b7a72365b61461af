//! slotpress CLI
//!
//! Usage:
//!   slotpress [OPTIONS]
//!
//! Options:
//!   -d, --data <DIR>      Directory of source pages (default: data)
//!   -o, --output <DIR>    Output directory (default: output)
//!   -t, --template <DIR>  Template fragment directory (default: templates)
//!   -s, --static <DIR>    Static assets copied verbatim into the output
//!   -h, --help            Print help
//!   -v, --version         Print version

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use slotpress::site::{generate, FileConfig, Overrides, SiteConfig};

#[derive(Parser)]
#[command(name = "slotpress")]
#[command(about = "Minimal static-site generator with slot-based template substitution")]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Directory of source pages
    #[arg(short = 'd', long = "data", value_name = "DIR")]
    data: Option<PathBuf>,

    /// Directory the generated site is written to
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    output: Option<PathBuf>,

    /// Directory of template fragments (<name>.html)
    #[arg(short = 't', long = "template", value_name = "DIR")]
    template: Option<PathBuf>,

    /// Directory of static assets copied verbatim into the output
    #[arg(short = 's', long = "static", value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() {
    init_logging();

    // The argument list is collected once here and handed to the parser;
    // nothing below main reads process state ambiently.
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = Cli::parse_from(args);

    let file = match FileConfig::discover(Path::new(".")) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = SiteConfig::resolve(
        file,
        Overrides {
            data_dir: cli.data,
            output_dir: cli.output,
            template_dir: cli.template,
            static_dir: cli.static_dir,
        },
    );

    match generate(&config) {
        Ok(summary) => {
            println!(
                "Generated {} page(s) and {} asset(s) into {}",
                summary.pages,
                summary.assets,
                config.output_dir.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
