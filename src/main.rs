use anyhow::Result;
use clap::Parser;

use publication_list::cli::{Cli, Commands};
use publication_list::commands::{run_download, run_list, run_render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => {
            run_render(args)?;
        }
        Commands::List(args) => {
            run_list(args)?;
        }
        Commands::Download(args) => {
            run_download(args)?;
        }
    }

    Ok(())
}
