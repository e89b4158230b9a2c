use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use pynode_common::util::tracing::setup_tracing;

use crate::{error::PynodeCliResult, init::init_config};

mod build;
mod info;
mod matrix;
mod overrides;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[clap(short('l'), long, value_name("LEVEL"), global = true)]
    pub log_level: Option<LevelFilter>,

    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Parser, Clone)]
pub enum Command {
    #[command(about = "Show information about pynode")]
    Info(info::InfoArgs),
    #[command(about = "Print the build matrix", alias = "m")]
    Matrix(matrix::MatrixArgs),
    #[command(about = "Build and tag every image of the matrix", alias = "b")]
    Build(build::BuildArgs),
}

pub async fn exec() -> PynodeCliResult {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let cfg = init_config(&cli);
    let level = cli
        .log_level
        .or_else(|| cfg.as_ref().ok().map(|cfg| cfg.log_level))
        .unwrap_or(LevelFilter::Info);
    setup_tracing(level);
    let cfg = cfg?;

    match cli.cmd {
        Command::Info(args) => info::run(args, &cfg).await?,
        Command::Matrix(args) => matrix::run(args, &cfg).await?,
        Command::Build(args) => build::run(args, &cfg).await?,
    }
    Ok(())
}
