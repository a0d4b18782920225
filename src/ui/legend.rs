//! Category legend shown under the classic table

use cosmic::iced::Alignment;
use cosmic::{Element, cosmic_theme, widget};

use crate::category::Category;
use crate::ui::cards::category_swatch;

pub use crate::Message;

/// A wrapping row of category swatches with their localized titles
pub fn legend_row<'a>(spacing: &cosmic_theme::Spacing) -> Element<'a, Message> {
    let mut children: Vec<Element<'a, Message>> = Vec::with_capacity(Category::all().len());
    for category in Category::all() {
        children.push(
            widget::row::with_children(vec![
                category_swatch(*category),
                widget::text::caption(category.title()).into(),
            ])
            .spacing(spacing.space_xxs)
            .align_y(Alignment::Center)
            .into(),
        );
    }
    widget::flex_row(children)
        .column_spacing(spacing.space_s)
        .row_spacing(spacing.space_xxs)
        .into()
}
