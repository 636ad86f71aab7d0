use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::download::DownloadRequest;

#[derive(Clone, Debug, Parser)]
#[command(name = "ec", version = env!("CARGO_PKG_VERSION"), about = "Edge API command-line client", propagate_version = true)]
pub struct App {
    /// Config file (YAML or JSON); searched for when omitted
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List images
    #[command(alias = "ls", name = "images")]
    Images,
    /// Inspect and create images
    #[command(subcommand, name = "image")]
    Image(ImageCommands),
    /// Open the image management console in a browser
    #[command(name = "console")]
    Console(ConsoleArg),
}

#[derive(Clone, Debug, Subcommand)]
pub enum ImageCommands {
    /// Show an image
    #[command(alias = "get", name = "show")]
    Show(IdArg),
    /// Show the repository of an image
    #[command(name = "repo")]
    Repo(IdArg),
    /// Show the build status of an image
    #[command(name = "status")]
    Status(IdArg),
    /// Request a new image build
    #[command(name = "create")]
    Create(CreateArg),
    /// Print the installer ISO URL and optionally download it
    #[command(name = "iso")]
    Iso(IsoArg),
}

#[derive(Clone, Debug, Args)]
pub struct IdArg {
    /// Image ID
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArg {
    /// JSON file with the image definition
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct IsoArg {
    /// Image ID
    pub id: String,
    /// Download the ISO
    #[arg(long)]
    pub download: bool,
    /// Output directory for the ISO
    #[arg(short = 'd', long = "dir", default_value = "")]
    pub dir: String,
    /// Output file path, overrides --dir
    #[arg(short = 'o', long = "output", default_value = "")]
    pub output: String,
    /// Calculate the sha256 checksum after downloading
    #[arg(long)]
    pub checksum: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ConsoleArg {
    /// Open this URL instead of the one derived from the base URL
    #[arg(long)]
    pub url: Option<String>,
}

impl From<IsoArg> for DownloadRequest {
    fn from(arg: IsoArg) -> Self {
        DownloadRequest {
            image_id: arg.id,
            download: arg.download,
            output_dir: arg.dir,
            output_path: arg.output,
            verify_checksum: arg.checksum,
        }
    }
}
