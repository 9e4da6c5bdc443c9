use clap::Parser;
use color_eyre::Result;
use imgen::{batch, cli::Cli, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let config = Config::resolve(Cli::parse())?;
    let model = config.model.make(config.api_key.clone());
    batch::run(&config, model.as_ref()).await?;

    Ok(())
}
