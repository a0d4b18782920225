use std::cmp;

use cosmic::iced::Length;
use cosmic::{Element, cosmic_theme, widget};

use crate::catalog::Catalog;
use crate::config::{Favorites, Language};
use crate::constants::MAX_RESULTS;
use crate::fl;
use crate::message::Message;
use crate::pages::{ContextPage, DialogPage};
use crate::ui::cards::element_card_grid;
use crate::ui::element_grid;

pub fn render_header_start<'a>(
    search_active: bool,
    search_input: &'a str,
    search_id: widget::Id,
) -> Vec<Element<'a, Message>> {
    if search_active {
        vec![
            widget::search_input(fl!("search-placeholder"), search_input)
                .width(Length::Fixed(240.0))
                .id(search_id)
                .on_clear(Message::SearchClear)
                .on_input(Message::SearchInput)
                .on_submit(|_| Message::SearchSubmit)
                .into(),
        ]
    } else {
        vec![
            widget::button::icon(widget::icon::from_name("system-search-symbolic").size(16))
                .on_press(Message::SearchActivate)
                .into(),
        ]
    }
}

pub fn render_header_end<'a>() -> Vec<Element<'a, Message>> {
    vec![
        widget::button::icon(widget::icon::from_name("preferences-system-symbolic").size(16))
            .on_press(Message::ToggleContextPage(ContextPage::Settings))
            .into(),
    ]
}

/// The scrolling grid of all elements
pub fn render_grid_page<'a>(
    catalog: &'a Catalog,
    language: Language,
    spacing: cosmic_theme::Spacing,
    grid_width: usize,
) -> Element<'a, Message> {
    let mut column = widget::column::with_capacity(2)
        .padding([0, spacing.space_s, spacing.space_m, spacing.space_s])
        .spacing(spacing.space_xxs)
        .width(Length::Fill);

    if catalog.is_empty() {
        column = column.push(widget::text::body(fl!("loading")));
        return column.into();
    }

    column = column.push(element_grid(
        catalog.elements().iter().collect(),
        language,
        spacing,
        grid_width,
    ));

    column.into()
}

pub fn render_search_results<'a>(
    input: &str,
    results: &[u32],
    catalog: &'a Catalog,
    language: Language,
    favorites: &Favorites,
    spacing: cosmic_theme::Spacing,
    grid_width: usize,
) -> Element<'a, Message> {
    let results_len = cmp::min(results.len(), MAX_RESULTS);

    let mut column = widget::column::with_capacity(2)
        .padding([0, spacing.space_s, spacing.space_m, spacing.space_s])
        .spacing(spacing.space_xxs)
        .width(Length::Fill);

    if results.is_empty() {
        column = column.push(widget::text::body(fl!("no-results", search = input)));
    }

    let records: Vec<_> = results[..results_len]
        .iter()
        .filter_map(|atomic_number| catalog.by_number(*atomic_number))
        .map(|record| (record, favorites.contains(record.atomic_number)))
        .collect();
    column = column.push(element_card_grid(records, language, spacing, grid_width));

    column.into()
}

pub fn render_favorites_page<'a>(
    catalog: &'a Catalog,
    favorites: &Favorites,
    language: Language,
    spacing: cosmic_theme::Spacing,
    grid_width: usize,
) -> Element<'a, Message> {
    let mut column = widget::column::with_capacity(2)
        .padding([0, spacing.space_s, spacing.space_m, spacing.space_s])
        .spacing(spacing.space_xxs)
        .width(Length::Fill);

    let records: Vec<_> = catalog
        .favorites(&favorites.ids)
        .into_iter()
        .map(|record| (record, true))
        .collect();

    if records.is_empty() {
        column = column.push(widget::text::body(fl!("no-favorites")));
        return column.into();
    }

    column = column.push(element_card_grid(records, language, spacing, grid_width));

    column.into()
}

pub fn render_dialog<'a>(dialog_page: &'a DialogPage) -> Option<Element<'a, Message>> {
    match dialog_page {
        DialogPage::LanguageSelect(selected) => {
            let mut choices = widget::column::with_capacity(Language::all().len());
            for language in Language::all() {
                choices = choices.push(widget::radio(
                    language.title(),
                    *language,
                    Some(*selected),
                    Message::DialogLanguage,
                ));
            }
            Some(
                widget::dialog()
                    .title(fl!("welcome"))
                    .body(fl!("select-language"))
                    .control(choices)
                    .primary_action(
                        widget::button::suggested(fl!("continue"))
                            .on_press(Message::DialogConfirm),
                    )
                    .into(),
            )
        }
    }
}
