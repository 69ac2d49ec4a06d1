use anyhow::Result;
use clap::Parser;

mod api;
mod classify;
mod config;
mod out;
mod probe;
mod prune;
mod subscription;
mod telemetry;

use api::FeedbinClient;
use config::Credentials;
use probe::HttpProbe;

#[derive(Parser)]
#[command(
    name = "feedprune",
    about = "Remove dead or access-denied subscriptions from a Feedbin account"
)]
struct Cli {
    /// feedbin.com username
    #[arg(long, default_value = "")]
    username: String,
    /// feedbin.com password
    #[arg(long, default_value = "")]
    password: String,
    /// feedbin.com base url for API
    #[arg(long, default_value = "https://api.feedbin.com/v2/")]
    baseurl: String,
    /// Dry run: decide and log removals without deleting anything
    #[arg(short = 'd', long = "dry-run", default_value_t = false)]
    dry_run: bool,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // initialize logging/tracing (stderr). Respect RUST_LOG and FEEDPRUNE_LOG_FORMAT
    telemetry::init_tracing();

    if let Err(err) = run(cli).await {
        eprintln!("Error removing broken subscriptions: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cred = Credentials::new(cli.username, cli.password, cli.baseurl, cli.dry_run);

    let api = FeedbinClient::new(&cred)?;
    let probe = HttpProbe::new()?;

    let summary = prune::run(&api, &probe, &cred).await?;

    if cli.json {
        out::print_result("prune", &summary)?;
    }
    Ok(())
}
