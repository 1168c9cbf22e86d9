use crate::prelude::*;
use clap::Parser;
use fakku::{ClientConfig, FakkuClient};

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Query the Fakku catalog API for content, comments, pages, downloads and tags"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Catalog API base URL
    #[clap(long, env = "FAKKU_API_BASE_URL", global = true, default_value = fakku_core::API_BASE)]
    base_url: String,

    /// Request timeout in seconds (HTTP client default when unset)
    #[clap(long, env = "FAKKU_TIMEOUT", global = true)]
    timeout: Option<u64>,
}

impl Global {
    pub fn client(&self) -> Result<FakkuClient> {
        let config = ClientConfig::default().with_overrides(Some(self.base_url.clone()), self.timeout);
        FakkuClient::with_config(config).map_err(|err| eyre!(err))
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List all known tags
    Tags(crate::cli::tags::TagsOptions),

    /// Show metadata for a content item
    Content(crate::cli::content::ContentOptions),

    /// Show comments for a content item
    Comments(crate::cli::content::CommentsOptions),

    /// List the reader pages of a content item
    Read(crate::cli::content::ContentOptions),

    /// List download variants of a content item
    Downloads(crate::cli::content::ContentOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Tags(options) => crate::cli::tags::run(options, app.global).await,
        SubCommands::Content(options) => crate::cli::content::run_content(options, app.global).await,
        SubCommands::Comments(options) => {
            crate::cli::content::run_comments(options, app.global).await
        }
        SubCommands::Read(options) => crate::cli::content::run_read(options, app.global).await,
        SubCommands::Downloads(options) => {
            crate::cli::content::run_downloads(options, app.global).await
        }
    }
}
