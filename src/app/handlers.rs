//! Message handler implementations.
//!
//! Each function handles a specific category of messages and is called via
//! thin wrapper methods on the [`App`](crate::app::App) struct.

use crate::app::App;

use crate::config::Favorites;
use crate::constants::{PAN_STEP, ZOOM_STEP};
use crate::message::Message;
use crate::pages::{DialogPage, NavPage};
use crate::url_handlers;
use crate::viewport::{Gesture, ViewportTransform};
use cosmic::app::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::futures::SinkExt;
use cosmic::iced::keyboard::{self, Key};
use cosmic::iced::{Subscription, stream, window};
use cosmic::widget;
use cosmic::{Application, action};
use std::env;
use std::future::pending;
use std::process;

macro_rules! config_set {
    ($app:expr, $name:ident, $value:expr) => {
        match &$app.config_handler {
            Some(config_handler) => {
                match paste::paste! { $app.config.[<set_ $name>](config_handler, $value) } {
                    Ok(_) => {}
                    Err(err) => {
                        log::warn!("failed to save config {:?}: {}", stringify!($name), err);
                    }
                }
            }
            None => {
                $app.config.$name = $value;
                log::warn!(
                    "failed to save config {:?}: no config handler",
                    stringify!($name)
                );
            }
        }
    };
}

macro_rules! favorites_set {
    ($app:expr, $name:ident, $value:expr) => {
        match &$app.favorites_handler {
            Some(favorites_handler) => {
                match paste::paste! { $app.favorites.[<set_ $name>](favorites_handler, $value) } {
                    Ok(_) => {}
                    Err(err) => {
                        log::warn!("failed to save favorites {:?}: {}", stringify!($name), err);
                    }
                }
            }
            None => {
                $app.favorites.$name = $value;
                log::warn!(
                    "failed to save favorites {:?}: no config handler",
                    stringify!($name)
                );
            }
        }
    };
}

pub fn handle_config_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::AppTheme(app_theme) => {
            config_set!(app, app_theme, app_theme);
            app.update_config()
        }
        Message::Config(config) => {
            if config != app.config {
                log::info!("update config");
                let language_changed = config.language != app.config.language;
                app.config = config;
                if language_changed {
                    app.apply_language();
                }
                app.update_config()
            } else {
                Task::none()
            }
        }
        Message::Language(language) => {
            if language != app.config.language {
                config_set!(app, language, language);
                app.apply_language();
            }
            Task::none()
        }
        Message::SystemThemeModeChange(_theme_mode) => app.update_config(),
        Message::Favorites(favorites) => {
            if favorites != app.favorites {
                // External writes may predate the current catalog; keep the
                // in-memory set a subset of it
                app.favorites = Favorites {
                    ids: app.catalog.prune_favorites(&favorites.ids),
                };
            }
            Task::none()
        }
        Message::ToggleFavorite(atomic_number) => {
            let ids = app.favorites.toggled(atomic_number);
            favorites_set!(app, ids, ids);
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn handle_search_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SearchActivate => {
            app.search_active = true;
            widget::text_input::focus(app.search_id.clone())
        }
        Message::SearchClear => {
            app.search_active = false;
            app.search_input.clear();
            if app.search_results.take().is_some() {
                app.update_scroll()
            } else {
                Task::none()
            }
        }
        Message::SearchInput(input) => {
            if input != app.search_input {
                app.search_input = input;
                if !app.search_input.is_empty() {
                    app.search()
                } else {
                    Task::none()
                }
            } else {
                Task::none()
            }
        }
        Message::SearchResults(input, results) => {
            if input == app.search_input {
                app.details_page_opt = None;
                app.search_results = Some((input, results));
                app.update_scroll()
            } else {
                log::warn!(
                    "received {} results for {:?} after search changed to {:?}",
                    results.len(),
                    input,
                    app.search_input
                );
                Task::none()
            }
        }
        Message::SearchSubmit => {
            if !app.search_input.is_empty() {
                app.search()
            } else {
                Task::none()
            }
        }
        _ => Task::none(),
    }
}

pub fn handle_selection_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Select(atomic_number) => app.select(atomic_number),
        Message::SelectNone => {
            app.details_page_opt = None;
            app.update_scroll()
        }
        Message::PromotionImage(_, _) => {
            if let Some(details_page) = &mut app.details_page_opt {
                details_page.update(&message)
            } else {
                Task::none()
            }
        }
        _ => Task::none(),
    }
}

pub fn handle_classic_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ClassicFit => {
            app.classic_transform = ViewportTransform::fit_width(app.classic_viewport());
            app.classic_scroll_task()
        }
        Message::ClassicGesture(gesture) => {
            app.classic_transform.apply(gesture, app.classic_viewport());
            app.classic_scroll_task()
        }
        Message::ClassicScrolled(viewport) => {
            let bounds = viewport.bounds();
            let size = cosmic::iced::Size::new(bounds.width, bounds.height);
            app.classic_size.set(Some(size));
            let offset = viewport.absolute_offset();
            app.classic_transform
                .set_scroll_position(cosmic::iced::Vector::new(offset.x, offset.y), size);
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn handle_dialog_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::DialogCancel => {
            app.dialog_pages.pop_front();
            Task::none()
        }
        Message::DialogConfirm => {
            if let Some(page) = app.dialog_pages.pop_front() {
                match page {
                    DialogPage::LanguageSelect(_) => {
                        config_set!(app, first_launch, false);
                    }
                }
            }
            Task::none()
        }
        Message::DialogLanguage(language) => {
            if let Some(DialogPage::LanguageSelect(selected)) = app.dialog_pages.front_mut() {
                *selected = language;
            }
            // Apply immediately so the dialog itself switches language
            handle_config_message(app, Message::Language(language))
        }
        _ => Task::none(),
    }
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::AppTheme(_)
        | Message::Config(_)
        | Message::Language(_)
        | Message::SystemThemeModeChange(_)
        | Message::Favorites(_)
        | Message::ToggleFavorite(_) => {
            return app.handle_config_message(message);
        }
        Message::DialogCancel | Message::DialogConfirm | Message::DialogLanguage(_) => {
            return app.handle_dialog_message(message);
        }
        Message::SearchActivate
        | Message::SearchClear
        | Message::SearchInput(_)
        | Message::SearchResults(..)
        | Message::SearchSubmit => {
            return app.handle_search_message(message);
        }
        Message::Select(_) | Message::SelectNone | Message::PromotionImage(..) => {
            return app.handle_selection_message(message);
        }
        Message::ClassicFit | Message::ClassicGesture(_) | Message::ClassicScrolled(_) => {
            return app.handle_classic_message(message);
        }
        Message::CatalogLoaded(catalog) => {
            app.catalog = catalog;
            let pruned = app.catalog.prune_favorites(&app.favorites.ids);
            if pruned != app.favorites.ids {
                log::info!(
                    "pruned {} favorite ids not present in the catalog",
                    app.favorites.ids.len() - pruned.len()
                );
                favorites_set!(app, ids, pruned);
            }
            if !app.search_input.is_empty() {
                // Startup argument: a search term or deep link
                return app.search();
            }
        }
        Message::Promotion(promotion) => {
            app.promotion = promotion;
        }
        Message::Key(modifiers, key, text) => {
            if !app.dialog_pages.is_empty() {
                if matches!(key, Key::Named(keyboard::key::Named::Escape))
                    && !modifiers.logo()
                    && !modifiers.control()
                    && !modifiers.alt()
                    && !modifiers.shift()
                {
                    return update(app, Message::DialogCancel);
                }
                return Task::none();
            }

            for (key_bind, action) in app.key_binds.iter() {
                if key_bind.matches(modifiers, &key) {
                    return update(app, action.message());
                }
            }

            let classic_active = app.details_page_opt.is_none()
                && app.search_results.is_none()
                && !app.search_active
                && app.active_nav_page() == NavPage::ClassicTable;
            if classic_active && !modifiers.logo() && !modifiers.control() && !modifiers.alt() {
                let gesture = match &key {
                    Key::Named(keyboard::key::Named::ArrowLeft) => {
                        Some(Gesture::pan(PAN_STEP, 0.0))
                    }
                    Key::Named(keyboard::key::Named::ArrowRight) => {
                        Some(Gesture::pan(-PAN_STEP, 0.0))
                    }
                    Key::Named(keyboard::key::Named::ArrowUp) => Some(Gesture::pan(0.0, PAN_STEP)),
                    Key::Named(keyboard::key::Named::ArrowDown) => {
                        Some(Gesture::pan(0.0, -PAN_STEP))
                    }
                    Key::Character(c) if c == "+" || c == "=" => Some(Gesture::zoom(ZOOM_STEP)),
                    Key::Character(c) if c == "-" => Some(Gesture::zoom(1.0 / ZOOM_STEP)),
                    Key::Character(c) if c == "0" => {
                        return update(app, Message::ClassicFit);
                    }
                    _ => None,
                };
                if let Some(gesture) = gesture {
                    return update(app, Message::ClassicGesture(gesture));
                }
            }

            if !modifiers.logo()
                && !modifiers.control()
                && !modifiers.alt()
                && matches!(key, Key::Character(_))
            {
                if let Some(text) = text {
                    app.search_active = true;
                    app.search_input.push_str(&text);
                    return Task::batch([
                        widget::text_input::focus(app.search_id.clone()),
                        app.search(),
                    ]);
                }
            }
        }
        Message::LaunchUrl(url) => match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                log::warn!("failed to open {:?}: {}", url, err);
            }
        },
        Message::Share(atomic_number) => {
            if let Some(record) = app.catalog.by_number(atomic_number) {
                let url = url_handlers::share_url(record);
                log::info!("copied share link {}", url);
                return cosmic::iced::clipboard::write(url);
            }
        }
        Message::MaybeExit => {
            if app.core.main_window_id().is_none() {
                process::exit(0);
            }
        }
        Message::ScrollView(viewport) => {
            app.scroll_views.insert(app.scroll_context(), viewport);
        }
        Message::ToggleContextPage(context_page) => {
            if app.core.window.show_context && app.context_page == context_page {
                app.core.window.show_context = false;
            } else {
                app.context_page = context_page;
                app.core.window.show_context = true;
            }
        }
        Message::WindowClose => {
            if let Some(window_id) = app.core.main_window_id() {
                app.core.set_main_window_id(None);
                return Task::batch([
                    window::close(window_id),
                    Task::perform(async move { action::app(Message::MaybeExit) }, |x| x),
                ]);
            }
        }
        Message::WindowNew => match env::current_exe() {
            Ok(exe) => match process::Command::new(&exe).spawn() {
                Ok(_child) => {}
                Err(err) => {
                    log::error!("failed to execute {:?}: {}", exe, err);
                }
            },
            Err(err) => {
                log::error!("failed to get current executable path: {}", err);
            }
        },
    }

    Task::none()
}

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![
        cosmic::iced::event::listen_with(|event, status, _window_id| match event {
            cosmic::iced::event::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                key,
                modifiers,
                text,
                ..
            }) => match status {
                cosmic::iced::event::Status::Ignored => Some(Message::Key(modifiers, key, text)),
                cosmic::iced::event::Status::Captured => None,
            },
            _ => None,
        }),
        cosmic::cosmic_config::config_subscription(
            std::any::TypeId::of::<crate::config::Config>(),
            crate::app::App::APP_ID.into(),
            crate::config::CONFIG_VERSION,
        )
        .map(|update| {
            if !update.errors.is_empty() {
                log::debug!("errors loading config: {:?}", update.errors);
            }
            Message::Config(update.config)
        }),
        cosmic::cosmic_config::config_subscription(
            std::any::TypeId::of::<crate::config::Favorites>(),
            crate::config::FAVORITES_ID.into(),
            crate::config::FAVORITES_VERSION,
        )
        .map(|update| {
            if !update.errors.is_empty() {
                log::debug!("errors loading favorites: {:?}", update.errors);
            }
            Message::Favorites(update.config)
        }),
        cosmic::cosmic_config::config_subscription::<_, cosmic::cosmic_theme::ThemeMode>(
            std::any::TypeId::of::<cosmic::cosmic_theme::ThemeMode>(),
            cosmic::cosmic_theme::THEME_MODE_ID.into(),
            cosmic::cosmic_theme::ThemeMode::version(),
        )
        .map(|update| {
            if !update.errors.is_empty() {
                log::debug!("errors loading theme mode: {:?}", update.errors);
            }
            Message::SystemThemeModeChange(update.config)
        }),
    ];

    // Fetch the promotion image once a details page can show it
    if let Some(details_page) = &app.details_page_opt {
        if details_page.promotion_image.is_none() {
            if let Some(promotion) = &app.promotion {
                let url = promotion.image_url.clone();
                subscriptions.push(Subscription::run_with_id(
                    url.clone(),
                    stream::channel(16, move |mut msg_tx| async move {
                        log::info!("fetch promotion image {}", url);
                        match reqwest::get(&url).await {
                            Ok(response) => match response.bytes().await {
                                Ok(bytes) => {
                                    log::info!(
                                        "fetched promotion image from {}: {} bytes",
                                        url,
                                        bytes.len()
                                    );
                                    let _ = msg_tx
                                        .send(Message::PromotionImage(url, bytes.to_vec()))
                                        .await;
                                }
                                Err(err) => {
                                    log::warn!(
                                        "failed to read promotion image from {}: {}",
                                        url,
                                        err
                                    );
                                }
                            },
                            Err(err) => {
                                log::warn!(
                                    "failed to request promotion image from {}: {}",
                                    url,
                                    err
                                );
                            }
                        }
                        pending().await
                    }),
                ));
            }
        }
    }

    Subscription::batch(subscriptions)
}
