use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use udiff::commands::diff::{DiffOptions, parse_timeout, run};

#[derive(Parser)]
#[command(
    name = "udiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files line by line",
    long_about = "Prints the minimal set of line insertions and deletions that turns \
    FILE_A into FILE_B, in unified diff format. \
    The edit script is computed with Myers' algorithm.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, value_name = "FILE_A", help = "The original file")]
    a: PathBuf,
    #[arg(index = 2, value_name = "FILE_B", help = "The modified file")]
    b: PathBuf,
    #[arg(long, help = "Colorize the output")]
    color: bool,
    #[arg(
        long,
        value_parser = parse_timeout,
        help = "Give up after this long (e.g. 500ms, 1.5s, 1m30s, 2h); 0 waits forever"
    )]
    timeout: Option<Duration>,
    #[arg(
        short = 'U',
        long,
        default_value_t = 3,
        help = "Lines of unified context"
    )]
    unified: usize,
    #[arg(long, help = "Never page the output")]
    no_pager: bool,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install the log subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let opts = DiffOptions {
        a_path: cli.a,
        b_path: cli.b,
        context: cli.unified,
        color: cli.color,
        timeout: cli.timeout.filter(|timeout| !timeout.is_zero()),
        paginate: !cli.no_pager,
    };

    if let Err(err) = run(&opts).await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }

    Ok(())
}
