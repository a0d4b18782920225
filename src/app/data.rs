//! Background task constructors. Each runs blocking work off the UI thread
//! and rejoins it as a [`Message`].

use cosmic::action;
use cosmic::app::Task;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::message::Message;
use crate::promotions;
use crate::search_logic;
use crate::url_handlers;

/// Decode the bundled catalog. The asset ships with the binary; a decode
/// failure means a broken build, so startup aborts rather than limping on
/// with an empty catalog.
pub fn load_catalog_task() -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                match Catalog::load() {
                    Ok(catalog) => {
                        log::info!(
                            "loaded catalog with {} elements in {:?}",
                            catalog.len(),
                            start.elapsed()
                        );
                        action::app(Message::CatalogLoaded(Arc::new(catalog)))
                    }
                    Err(err) => {
                        log::error!("failed to decode bundled element catalog: {}", err);
                        process::exit(1);
                    }
                }
            })
            .await
            .unwrap_or(action::none())
        },
        |x| x,
    )
}

/// Fetch the optional promotions document, at most once per process.
/// Failure leaves the promotion slot empty.
pub fn load_promotion_task() -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let promotion = promotions::chosen_promotion().cloned();
                action::app(Message::Promotion(promotion))
            })
            .await
            .unwrap_or(action::none())
        },
        |x| x,
    )
}

/// Resolve deep links, then fall back to the plain catalog filter
pub fn search_task(catalog: Arc<Catalog>, input: String) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                if let Some(atomic_number) = url_handlers::resolve_deep_link(&catalog, &input) {
                    log::info!("resolved deep link {:?} to element {}", input, atomic_number);
                    return action::app(Message::Select(atomic_number));
                }
                let results = search_logic::filter_elements(&catalog, &input);
                let duration = start.elapsed();
                log::info!(
                    "searched for {:?} in {:?}, found {} results",
                    input,
                    duration,
                    results.len()
                );
                action::app(Message::SearchResults(input, results))
            })
            .await
            .unwrap_or(action::none())
        },
        |x| x,
    )
}
