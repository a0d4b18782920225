//! Element details page module

use cosmic::iced::{Alignment, Length};
use cosmic::{Element, Task, cosmic_theme, widget};

use crate::Message;
use crate::config::Language;
use crate::element;
use crate::fl;
use crate::promotions::Promotion;
use crate::ui::cards::{category_container, category_swatch};

#[derive(Clone, Debug)]
pub struct DetailsPage {
    pub(crate) atomic_number: u32,
    pub(crate) promotion_image: Option<widget::image::Handle>,
}

impl DetailsPage {
    pub fn new(atomic_number: u32) -> Self {
        Self {
            atomic_number,
            promotion_image: None,
        }
    }

    pub fn view<'a>(
        &'a self,
        record: &'a element::Element,
        language: Language,
        favorite: bool,
        promotion: Option<&'a Promotion>,
        spacing: cosmic_theme::Spacing,
        grid_width: usize,
    ) -> Element<'a, Message> {
        let cosmic_theme::Spacing {
            space_m,
            space_s,
            space_xs,
            space_xxs,
            space_xxxs,
            ..
        } = spacing;

        let details = record.details(language);
        let info = &details.general_info;
        let category = record.category();

        let mut column = widget::column::with_capacity(12)
            .padding([0, space_s, space_m, space_s])
            .spacing(space_m)
            .width(Length::Fill);
        column = column.push(
            widget::button::text(fl!("back"))
                .leading_icon(widget::icon::from_name("go-previous-symbolic").size(16).handle())
                .on_press(Message::SelectNone),
        );

        let mut buttons: Vec<Element<'a, Message>> = Vec::with_capacity(3);
        buttons.push(
            if favorite {
                widget::button::standard(fl!("remove-favorite"))
            } else {
                widget::button::suggested(fl!("add-favorite"))
            }
            .on_press(Message::ToggleFavorite(record.atomic_number))
            .into(),
        );
        buttons.push(
            widget::button::standard(fl!("share"))
                .on_press(Message::Share(record.atomic_number))
                .into(),
        );
        buttons.push(
            widget::button::standard(fl!("learn-more-wiki"))
                .on_press(Message::LaunchUrl(record.source.clone()))
                .into(),
        );

        let symbol_tile = widget::container(widget::text::title1(&info.symbol))
            .padding(space_s)
            .class(category_container(category));

        column = column.push(
            widget::row::with_children(vec![
                symbol_tile.into(),
                widget::column::with_children(vec![
                    widget::text::title2(&info.element_name).into(),
                    widget::text::body(category.title()).into(),
                    widget::Space::with_height(Length::Fixed(space_s.into())).into(),
                    widget::row::with_children(buttons).spacing(space_xs).into(),
                ])
                .into(),
            ])
            .align_y(Alignment::Center)
            .spacing(space_m),
        );

        let number_widget = widget::column::with_children(vec![
            widget::text::heading(&info.atomic_number).into(),
            widget::text::body(fl!("atomic-number")).into(),
        ])
        .align_x(Alignment::Center)
        .width(Length::Fill);
        let mass_widget = widget::column::with_children(vec![
            widget::text::heading(&info.atomic_mass).into(),
            widget::text::body(fl!("atomic-mass")).into(),
        ])
        .align_x(Alignment::Center)
        .width(Length::Fill);
        let group_widget = widget::column::with_children(vec![
            widget::text::heading(&info.group_period).into(),
            widget::text::body(fl!("group-period")).into(),
        ])
        .align_x(Alignment::Center)
        .width(Length::Fill);
        if grid_width < 416 {
            column = column.push(
                widget::column::with_capacity(7)
                    .push(widget::divider::horizontal::default())
                    .push(number_widget)
                    .push(widget::divider::horizontal::default())
                    .push(mass_widget)
                    .push(widget::divider::horizontal::default())
                    .push(group_widget)
                    .push(widget::divider::horizontal::default())
                    .spacing(space_xxs),
            );
        } else {
            column = column.push(
                widget::column::with_children(vec![
                    widget::divider::horizontal::default().into(),
                    widget::row::with_capacity(5)
                        .push(number_widget)
                        .push(widget::divider::vertical::default().height(Length::Fixed(32.0)))
                        .push(mass_widget)
                        .push(widget::divider::vertical::default().height(Length::Fixed(32.0)))
                        .push(group_widget)
                        .align_y(Alignment::Center)
                        .into(),
                    widget::divider::horizontal::default().into(),
                ])
                .spacing(space_xxs),
            );
        }

        column = column.push(
            widget::column::with_children(vec![
                widget::text::title4(fl!("about")).into(),
                widget::text::body(&details.detailed_description).into(),
            ])
            .spacing(space_xxxs),
        );

        column = column.push(
            widget::settings::section()
                .title(fl!("general-information"))
                .add(widget::settings::item(
                    fl!("element-appearance"),
                    widget::text::body(&info.appearance),
                ))
                .add(widget::settings::item(
                    fl!("atomic-mass"),
                    widget::text::body(&info.atomic_mass),
                ))
                .add(widget::settings::item(
                    fl!("group-period"),
                    widget::text::body(&info.group_period),
                )),
        );

        let physical = &details.physical_properties;
        column = column.push(
            widget::settings::section()
                .title(fl!("physical-properties"))
                .add(widget::settings::item(
                    fl!("melting-point"),
                    widget::text::body(&physical.melting_point),
                ))
                .add(widget::settings::item(
                    fl!("boiling-point"),
                    widget::text::body(&physical.boiling_point),
                ))
                .add(widget::settings::item(
                    fl!("density"),
                    widget::text::body(&physical.density),
                ))
                .add(widget::settings::item(
                    fl!("malleability-ductility"),
                    widget::text::body(&physical.malleability_ductility),
                ))
                .add(widget::settings::item(
                    fl!("conductivity"),
                    widget::text::body(&physical.conductivity),
                )),
        );

        column = column.push(bulleted_section(
            fl!("chemical-properties"),
            &details.chemical_properties,
            spacing,
        ));
        column = column.push(bulleted_section(
            fl!("occurrence"),
            &details.occurrence,
            spacing,
        ));
        column = column.push(bulleted_section(fl!("uses"), &details.uses, spacing));

        if let Some(promotion) = promotion {
            let mut promo_col = widget::column::with_capacity(2).spacing(space_xxxs);
            promo_col = promo_col.push(widget::text::caption(fl!("sponsored")));
            let content: Element<'a, Message> = match &self.promotion_image {
                Some(image) => widget::container(widget::image(image.clone()))
                    .center_x(Length::Fill)
                    .into(),
                None => widget::text::body(&promotion.alt_text).into(),
            };
            promo_col = promo_col.push(
                widget::mouse_area(
                    widget::container(content)
                        .padding(space_s)
                        .width(Length::Fill)
                        .class(cosmic::theme::Container::Card),
                )
                .on_press(Message::LaunchUrl(promotion.destination_url.clone())),
            );
            column = column.push(promo_col);
        }

        // The category swatch doubles as a color key for the classic view
        column = column.push(
            widget::row::with_children(vec![
                category_swatch(category),
                widget::text::caption(category.title()).into(),
            ])
            .spacing(space_xxs)
            .align_y(Alignment::Center),
        );

        column.into()
    }

    pub fn update(&mut self, message: &Message) -> Task<cosmic::Action<Message>> {
        match message {
            Message::PromotionImage(_url, data) => {
                self.promotion_image = Some(widget::image::Handle::from_bytes(data.clone()));
                Task::none()
            }
            _ => Task::none(),
        }
    }
}

fn bulleted_section<'a>(
    title: String,
    items: &'a [String],
    spacing: cosmic_theme::Spacing,
) -> Element<'a, Message> {
    let mut column = widget::column::with_capacity(items.len() + 1).spacing(spacing.space_xxxs);
    column = column.push(widget::text::title4(title));
    for item in items {
        column = column.push(
            widget::row::with_children(vec![
                widget::text::body("•").into(),
                widget::text::body(item).into(),
            ])
            .spacing(spacing.space_xxs),
        );
    }
    column.into()
}
