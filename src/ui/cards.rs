//! Tile and card rendering for elements

use cosmic::iced::{Alignment, Border, Color, Length};
use cosmic::{Element, cosmic_theme, theme, widget};

use crate::category::Category;
use crate::config::Language;
use crate::constants::TILE_SIZE;
use crate::element;
use crate::ui::GridMetrics;

// Import Message type from main
pub use crate::Message;

// Category pastels are light; pin dark text on top of them regardless of theme
const TILE_TEXT: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.14,
    a: 1.0,
};

/// Container class tinting content with an element category color
pub fn category_container(category: Category) -> theme::Container<'static> {
    theme::Container::custom(move |_theme| widget::container::Style {
        icon_color: Some(TILE_TEXT),
        text_color: Some(TILE_TEXT),
        background: Some(category.color().into()),
        border: Border {
            radius: 8.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: cosmic::iced::Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: cosmic::iced::Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
    })
}

/// Small rounded square in a category color, used by legends
pub fn category_swatch<'a>(category: Category) -> Element<'a, Message> {
    widget::container(widget::Space::new(Length::Fixed(12.0), Length::Fixed(12.0)))
        .class(theme::Container::custom(move |_theme| {
            widget::container::Style {
                icon_color: None,
                text_color: None,
                background: Some(category.color().into()),
                border: Border {
                    radius: 6.0.into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
                shadow: cosmic::iced::Shadow::default(),
            }
        }))
        .into()
}

/// A square element tile: atomic number, symbol, localized name
pub fn element_tile<'a>(
    record: &'a element::Element,
    language: Language,
    size: f32,
) -> Element<'a, Message> {
    let name = record.display_name(language);
    widget::container(
        widget::column::with_children(vec![
            widget::text::caption(record.atomic_number.to_string()).into(),
            widget::text::title3(&record.symbol).into(),
            widget::text::caption(name).into(),
        ])
        .align_x(Alignment::Center),
    )
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .class(category_container(record.category()))
    .into()
}

/// A responsive grid of element tiles; clicking a tile opens its detail page
pub fn element_grid<'a>(
    records: Vec<&'a element::Element>,
    language: Language,
    spacing: cosmic_theme::Spacing,
    width: usize,
) -> Element<'a, Message> {
    let GridMetrics {
        cols,
        item_width,
        column_spacing,
    } = GridMetrics::new(
        width,
        usize::from(TILE_SIZE) + 2 * spacing.space_xxs as usize,
        spacing.space_xxs,
    );

    let mut grid = widget::grid();
    let mut col = 0;
    for record in records {
        if col >= cols {
            grid = grid.insert_row();
            col = 0;
        }
        grid = grid.push(
            widget::mouse_area(element_tile(record, language, item_width as f32))
                .on_press(Message::Select(record.atomic_number)),
        );
        col += 1;
    }
    grid.column_spacing(column_spacing)
        .row_spacing(column_spacing)
        .into()
}

/// A wide card for list-style pages (search results, favorites)
pub fn element_card_view<'a>(
    record: &'a element::Element,
    language: Language,
    favorite: bool,
    spacing: &cosmic_theme::Spacing,
    width: usize,
) -> Element<'a, Message> {
    let category = record.category();

    let symbol_tile = widget::container(widget::text::title4(&record.symbol))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(48.0))
        .class(category_container(category));

    let mut name_row: Vec<Element<'a, Message>> = Vec::with_capacity(2);
    name_row.push(
        widget::text::body(record.display_name(language))
            .height(Length::Fixed(20.0))
            .into(),
    );
    if favorite {
        name_row.push(
            widget::icon::from_name("starred-symbolic")
                .size(16)
                .icon()
                .into(),
        );
    }

    widget::container(
        widget::row::with_children(vec![
            symbol_tile.into(),
            widget::column::with_children(vec![
                widget::row::with_children(name_row)
                    .spacing(spacing.space_xxs)
                    .into(),
                widget::text::caption(format!(
                    "{} · {}",
                    record.atomic_number,
                    category.title()
                ))
                .into(),
            ])
            .into(),
        ])
        .align_y(Alignment::Center)
        .spacing(spacing.space_s),
    )
    .align_y(Alignment::Center)
    .width(Length::Fixed(width as f32))
    .height(Length::Fixed(64.0 + (spacing.space_xxs as f32) * 2.0))
    .padding([spacing.space_xxs, spacing.space_s])
    .class(theme::Container::Card)
    .into()
}

/// Grid metrics for the list-style cards
pub fn card_grid_metrics(spacing: &cosmic_theme::Spacing, width: usize) -> GridMetrics {
    GridMetrics::new(width, 240 + 2 * spacing.space_s as usize, spacing.space_xxs)
}

/// A grid of wide cards, used by the search results and favorites pages
pub fn element_card_grid<'a>(
    records: Vec<(&'a element::Element, bool)>,
    language: Language,
    spacing: cosmic_theme::Spacing,
    width: usize,
) -> Element<'a, Message> {
    let GridMetrics {
        cols,
        item_width,
        column_spacing,
    } = card_grid_metrics(&spacing, width);

    let mut grid = widget::grid();
    let mut col = 0;
    for (record, favorite) in records {
        if col >= cols {
            grid = grid.insert_row();
            col = 0;
        }
        grid = grid.push(
            widget::mouse_area(element_card_view(
                record, language, favorite, &spacing, item_width,
            ))
            .on_press(Message::Select(record.atomic_number)),
        );
        col += 1;
    }
    grid.column_spacing(column_spacing)
        .row_spacing(column_spacing)
        .into()
}
