//! The zoomable classic periodic table.
//!
//! The table renders at the transform's current scale inside a
//! both-direction scrollable whose padding carries the asymmetric margins,
//! so the widget's own clamping matches the transform bounds. Zoom and
//! keyboard pans go through [`ViewportTransform::apply`] and are pushed back
//! into the scrollable; native scrolling is adopted into the transform on
//! `on_scroll`.

use cosmic::iced::widget::scrollable::{Direction, Scrollbar};
use cosmic::iced::{Alignment, Length};
use cosmic::{Element, cosmic_theme, widget};

use crate::catalog::Catalog;
use crate::config::Language;
use crate::constants::{
    CELL_SIZE, MARGIN_BOTTOM, MARGIN_END, MARGIN_START, MARGIN_TOP, TABLE_COLS, TABLE_ROWS,
    ZOOM_STEP,
};
use crate::element;
use crate::fl;
use crate::ui::cards::category_container;
use crate::viewport::{Gesture, ViewportTransform};

pub use crate::Message;

/// Zoom controls and the current zoom factor
pub fn classic_toolbar<'a>(
    transform: &ViewportTransform,
    spacing: &cosmic_theme::Spacing,
) -> Element<'a, Message> {
    let icon_button = |name: &'static str, message: Message| {
        widget::button::icon(widget::icon::from_name(name).size(16))
            .on_press(message)
            .into()
    };
    widget::row::with_children(vec![
        icon_button(
            "zoom-out-symbolic",
            Message::ClassicGesture(Gesture::zoom(1.0 / ZOOM_STEP)),
        ),
        icon_button("zoom-fit-best-symbolic", Message::ClassicFit),
        icon_button(
            "zoom-in-symbolic",
            Message::ClassicGesture(Gesture::zoom(ZOOM_STEP)),
        ),
        widget::text::caption(format!("{:.0}%", transform.scale * 100.0)).into(),
        widget::horizontal_space().into(),
        widget::text::caption(fl!("classic-table-hint")).into(),
    ])
    .spacing(spacing.space_xxs)
    .padding([spacing.space_xxs, spacing.space_s])
    .align_y(Alignment::Center)
    .into()
}

fn classic_cell<'a>(
    record: &'a element::Element,
    language: Language,
    scale: f32,
) -> Element<'a, Message> {
    let size = CELL_SIZE * scale;
    let cell = widget::container(
        widget::column::with_children(vec![
            widget::text(record.atomic_number.to_string())
                .size(9.0 * scale)
                .into(),
            widget::text(&record.symbol).size(16.0 * scale).into(),
            widget::text(record.display_name(language))
                .size(7.0 * scale)
                .into(),
        ])
        .align_x(Alignment::Center),
    )
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .width(Length::Fixed(size - 2.0))
    .height(Length::Fixed(size - 2.0))
    .class(category_container(record.category()));

    widget::mouse_area(widget::container(cell).padding(1.0))
        .on_press(Message::Select(record.atomic_number))
        .into()
}

/// The table body at the transform's scale, inside a pannable scrollable
pub fn classic_table<'a>(
    catalog: &'a Catalog,
    language: Language,
    transform: &ViewportTransform,
    classic_id: widget::Id,
) -> Element<'a, Message> {
    let cell = CELL_SIZE * transform.scale;

    let mut rows = widget::column::with_capacity(usize::from(TABLE_ROWS));
    for ypos in 1..=TABLE_ROWS {
        let mut row = widget::row::with_capacity(usize::from(TABLE_COLS));
        for xpos in 1..=TABLE_COLS {
            row = row.push(match catalog.at_cell(xpos, ypos) {
                Some(record) => classic_cell(record, language, transform.scale),
                None => widget::Space::new(Length::Fixed(cell), Length::Fixed(cell)).into(),
            });
        }
        rows = rows.push(row);
    }

    let table =
        widget::container(rows).padding([MARGIN_TOP, MARGIN_END, MARGIN_BOTTOM, MARGIN_START]);

    widget::scrollable(table)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .id(classic_id)
        .on_scroll(Message::ClassicScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
