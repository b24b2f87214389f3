//! chat-mock binary entry point

use chat_mock::{
    cli::Cli,
    logging,
    tui::{self, Theme},
};
use color_eyre::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install error handler
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Set up logging
    if let Some(path) = &cli.log_file {
        logging::init(path, cli.verbose)?;
    }

    tui::run(Theme::default()).await?;

    Ok(())
}
