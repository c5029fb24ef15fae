use clap::Parser;
use log::*;

use commit_mirror::{
    Result,
    cli::Args,
    forge::{github::Github, manager::ForgeManager},
    mirror,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("commit_mirror")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let remote = cli_args.get_remote()?;
    let config = cli_args.get_config()?;

    info!(
        "mirroring translations for {}/{}: branch prefix: {}, label: {}",
        remote.owner, remote.repo, config.translation_branch_prefix, config.label
    );

    let forge = ForgeManager::new(Box::new(Github::new(remote).await?));
    let summary = mirror::run(&forge, &config).await?;

    if summary.dry_run {
        info!(
            "dry run done: translation branch: {}, would mark: {}, pending: {}",
            summary.translation_branch, summary.marked, summary.pending
        );
    } else {
        info!(
            "done: translation branch: {}, marked: {}, pending: {}",
            summary.translation_branch, summary.marked, summary.pending
        );
    }

    Ok(())
}
