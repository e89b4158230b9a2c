use pynode_common::{error::PynodeResult, settings::Settings};

use crate::Cli;

pub fn init_config(cli: &Cli) -> PynodeResult<Settings> {
    Settings::load(cli.settings.clone())
}
