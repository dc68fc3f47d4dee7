mod site;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use mdtree::{Converter, Options};

#[derive(Parser)]
#[command(name = "mdtree")]
#[command(about = "Build a static page from Markdown")]
#[command(version)]
struct Cli {
    /// Directory of static assets copied into the output directory
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Output directory, recreated on every run
    #[arg(long, default_value = "public")]
    output_dir: PathBuf,

    /// Markdown source of the page
    #[arg(long, default_value = "content/index.md")]
    content: PathBuf,

    /// HTML template containing {{ Title }} and {{ Content }}
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Destination of the generated page [default: <output-dir>/index.html]
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Tag of the element wrapping the page content
    #[arg(long, default_value = "div")]
    root_tag: String,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if let Err(err) = run(cli) {
        error!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dest = cli
        .dest
        .unwrap_or_else(|| cli.output_dir.join("index.html"));
    let converter = Converter::with_options(Options {
        root_tag: cli.root_tag,
    });

    site::copy_static(&cli.static_dir, &cli.output_dir)?;
    site::generate_page(&converter, &cli.content, &cli.template, &dest)?;

    info!(dest = %dest.display(), "site generated");
    Ok(())
}
