use clap::Parser;
use cosmic::app::CosmicFlags;
use cosmic::cosmic_config;

use crate::config::{Config, Favorites};

/// The optional positional argument is a search term or a deep link
/// (`atomicguru://detail/8`, or the share-link form)
#[derive(Debug, Default, Parser)]
pub struct Cli {
    pub subcommand_opt: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Flags {
    pub subcommand_opt: Option<String>,
    pub config_handler: Option<cosmic_config::Config>,
    pub config: Config,
    pub favorites_handler: Option<cosmic_config::Config>,
    pub favorites: Favorites,
}

impl CosmicFlags for Flags {
    type SubCommand = String;
    type Args = Vec<String>;

    fn action(&self) -> Option<&String> {
        self.subcommand_opt.as_ref()
    }
}
