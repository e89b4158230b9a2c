use clap::Parser;
use pynode_common::settings::Settings;

use crate::error::PynodeCliResult;

#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {}

pub async fn run(_args: InfoArgs, config: &Settings) -> PynodeCliResult<()> {
    let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    println!(
        "{} {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"),
        &sha[..sha.len().min(8)]
    );

    let versions = &config.versions;
    println!(
        "matrix: {} images ({} python x {} node x {} ubuntu) tagged {}",
        versions.matrix_size(),
        versions.python.len(),
        versions.node.len(),
        versions.ubuntu.len(),
        config.tag_prefix
    );
    Ok(())
}
