mod app;
mod config;
mod error;
mod github;
mod logging;
mod report;
mod table;
#[cfg(test)]
mod test_utils;

use app::Options;
use clap::Parser;
use config::Config;
use crossterm::tty::IsTty;
use github::client::GitHubClient;

#[derive(Parser)]
#[command(
    name = "ghrepos",
    about = "List the GitHub repositories you own, collaborate on, or reach through an organization",
    after_help = "Reads the access token from the GITHUB_PAT environment variable."
)]
struct Cli {
    #[arg(short = 'f', long = "fields", help = "List the field names and exit")]
    fields: bool,

    #[arg(short = 'g', long = "group", value_name = "FIELD", help = "Group repositories by a field (case-insensitive)")]
    group: Option<String>,

    #[arg(short = 's', long = "sort", help = "Sort by repository name (ignored with --group)")]
    sort: bool,

    #[arg(short = 'v', long = "verbose", help = "Log each fetched page to stderr")]
    verbose: bool,
}

// Pages depend on the previous cursor, so one thread is all the work needs
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = Options {
        list_fields: cli.fields,
        group: cli.group,
        sort: cli.sort,
    };

    let mut stdout = std::io::stdout();
    let result = app::run(&options, Config::load, GitHubClient::new, &mut stdout).await;

    if let Err(e) = result {
        tracing::debug!(error = ?e, "run failed");
        eprintln!("{}", report::error_line(&e, std::io::stderr().is_tty()));
        std::process::exit(1);
    }
}
