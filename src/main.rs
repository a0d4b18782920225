// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

mod constants;

mod catalog;

mod category;

mod element;

mod pages;

mod ui;

use cosmic::{
    Application,
    app::Settings,
    cosmic_config::{self, CosmicConfigEntry},
    iced::Limits,
};

mod cli;
use cli::{Cli, Flags};

use config::{CONFIG_VERSION, Config, FAVORITES_ID, FAVORITES_VERSION, Favorites};
mod config;

mod key_bind;

mod localize;

mod promotions;
mod scroll_context;
mod search_logic;
mod url_handlers;
mod viewport;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    localize::localize();

    let cli = Cli::parse();

    let (config_handler, config) = match cosmic_config::Config::new(app::App::APP_ID, CONFIG_VERSION)
    {
        Ok(config_handler) => {
            let config = match Config::get_entry(&config_handler) {
                Ok(ok) => ok,
                Err((errs, config)) => {
                    log::info!("errors loading config: {:?}", errs);
                    config
                }
            };
            (Some(config_handler), config)
        }
        Err(err) => {
            log::error!("failed to create config handler: {}", err);
            (None, Config::default())
        }
    };

    let (favorites_handler, favorites) =
        match cosmic_config::Config::new(FAVORITES_ID, FAVORITES_VERSION) {
            Ok(favorites_handler) => {
                let favorites = match Favorites::get_entry(&favorites_handler) {
                    Ok(ok) => ok,
                    Err((errs, favorites)) => {
                        log::info!("errors loading favorites: {:?}", errs);
                        favorites
                    }
                };
                (Some(favorites_handler), favorites)
            }
            Err(err) => {
                log::error!("failed to create favorites handler: {}", err);
                (None, Favorites::default())
            }
        };

    // Apply the persisted language before any localized text renders; a
    // malformed value already fell back to the default locale above
    localize::set_language(config.language);

    let mut settings = Settings::default();
    settings = settings.theme(config.app_theme.theme());
    settings = settings.size_limits(Limits::NONE.min_width(420.0).min_height(300.0));
    settings = settings.exit_on_close(false);

    let flags = Flags {
        subcommand_opt: cli.subcommand_opt,
        config_handler,
        config,
        favorites_handler,
        favorites,
    };

    #[cfg(feature = "single-instance")]
    cosmic::app::run_single_instance::<app::App>(settings, flags)?;

    #[cfg(not(feature = "single-instance"))]
    cosmic::app::run::<app::App>(settings, flags)?;

    Ok(())
}

mod message;
pub use message::{Action, Message};

mod app;
