use std::io::Write;

use clap::Parser;
use log::debug;

mod cli;
mod commands;
mod config;
mod error;
mod models;
mod providers;
mod utils;

#[cfg(test)]
mod test_support;

use crate::cli::{App, Commands, ImageCommands};
use crate::commands::{console, emit, images, iso};
use crate::error::Result;
use crate::models::download::DownloadRequest;
use crate::providers::api_client::ApiClient;
use crate::providers::edge_client::EdgeClient;
use crate::providers::progress::ConsoleProgress;
use crate::providers::streaming_downloader::StreamingDownloader;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

async fn run(app: App) -> Result<()> {
    let configuration = config::load(app.config.as_deref()).await?;
    debug!("Edge API at {}", configuration.edge_base_url);
    let client = EdgeClient::new(&configuration)?;
    let mut stdout = std::io::stdout();

    let body = match app.cmd {
        Commands::Console(arg) => {
            let url = match arg.url {
                Some(url) => url,
                None => console::console_url(&configuration)?.to_string(),
            };
            return console::open(&url);
        }
        Commands::Images => images::list(&client).await?,
        Commands::Image(ImageCommands::Show(arg)) => images::show(&client, &arg.id).await?,
        Commands::Image(ImageCommands::Repo(arg)) => images::repo(&client, &arg.id).await?,
        Commands::Image(ImageCommands::Status(arg)) => images::status(&client, &arg.id).await?,
        Commands::Image(ImageCommands::Create(arg)) => images::create(&client, &arg.file).await?,
        Commands::Image(ImageCommands::Iso(arg)) => {
            let request = DownloadRequest::from(arg);
            let downloader = StreamingDownloader::new(&client);
            let mut progress = ConsoleProgress::stdout();
            let outcome =
                iso::fetch_iso(&client, &downloader, &request, &mut progress, &mut stdout).await?;
            debug!(
                "Installer {} saved to {:?} ({:?}, sha256 {:?})",
                outcome.installer_url, outcome.destination, outcome.progress, outcome.checksum
            );
            return Ok(());
        }
    };

    emit(&mut stdout, &body)?;
    if !body.ends_with(b"\n") {
        emit(&mut stdout, b"\n")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let app = App::parse();
    init_logging(app.verbose);

    if let Err(e) = run(app).await {
        debug!("{:?}", e);
        let _ = std::io::stdout().flush();
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
