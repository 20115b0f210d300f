use iced::widget::{button, column, pick_list, row, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use super::{photo_count_label, picture, year_label};
use crate::media::cache::ImageCache;
use crate::state::data::GallerySummary;
use crate::state::filter::{LocationChoice, YearChoice};
use crate::state::portfolio::Portfolio;
use crate::Message;

const CARD_WIDTH: f32 = 320.0;
const COVER_HEIGHT: f32 = 220.0;

/// Index page: filters above a wrapping grid of gallery cards
pub fn view<'a>(portfolio: &'a Portfolio, thumbnails: &'a ImageCache) -> Element<'a, Message> {
    let filters = row![
        pick_list(
            YearChoice::options(portfolio.facets()),
            Some(YearChoice::from_selection(portfolio.selection())),
            Message::YearSelected,
        ),
        pick_list(
            LocationChoice::options(portfolio.facets()),
            Some(LocationChoice::from_selection(portfolio.selection())),
            Message::LocationSelected,
        ),
        button("Clear Filters")
            .on_press(Message::ClearFilters)
            .style(button::secondary),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let galleries: Element<'a, Message> = if portfolio.visible().is_empty() {
        text("No galleries found matching your criteria.")
            .size(18)
            .into()
    } else {
        Wrap::with_elements(
            portfolio
                .visible()
                .iter()
                .map(|gallery| card(gallery, thumbnails))
                .collect(),
        )
        .spacing(Pixels(24.0))
        .line_spacing(Pixels(24.0))
        .into()
    };

    let content = column![
        text("Photography Portfolio").size(40),
        text("Galleries").size(24),
        filters,
        galleries,
    ]
    .spacing(24)
    .padding(40);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One gallery: cover, name, location, year, photo count
fn card<'a>(gallery: &'a GallerySummary, thumbnails: &ImageCache) -> Element<'a, Message> {
    let cover = picture(
        gallery.card_image(),
        thumbnails,
        Length::Fixed(CARD_WIDTH),
        Length::Fixed(COVER_HEIGHT),
        ContentFit::Cover,
    );

    let meta = row![
        text(gallery.location.as_deref().unwrap_or_default()).size(14),
        text(year_label(gallery.year)).size(14),
        text(photo_count_label(gallery.photo_count())).size(14),
    ]
    .spacing(16);

    let body = column![cover, text(&gallery.name).size(20), meta]
        .spacing(8)
        .width(Length::Fixed(CARD_WIDTH));

    button(body)
        .on_press(Message::OpenGallery(gallery.id.clone()))
        .padding(12)
        .style(button::secondary)
        .into()
}
