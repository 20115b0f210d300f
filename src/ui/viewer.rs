use iced::widget::{button, column, row, scrollable, text};
use iced::{ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use super::{photo_count_label, picture, year_label};
use crate::media::cache::ImageCache;
use crate::state::data::GalleryDetail;
use crate::Message;

const TILE_SIZE: f32 = 240.0;

/// Gallery page: header and a grid of photo thumbnails.
/// Clicking a thumbnail opens the lightbox at that photo.
pub fn view<'a>(detail: &'a GalleryDetail, thumbnails: &'a ImageCache) -> Element<'a, Message> {
    let header = column![
        button("← All galleries")
            .on_press(Message::BackToIndex)
            .style(button::text),
        text(&detail.name).size(36),
        row![
            text(detail.location.as_deref().unwrap_or_default()),
            text(year_label(detail.year)),
            text(photo_count_label(detail.photos.len())),
        ]
        .spacing(16),
        text(&detail.description).size(16),
    ]
    .spacing(12);

    let photos: Element<'a, Message> = if detail.photos.is_empty() {
        text("No photos found in this gallery.").size(18).into()
    } else {
        Wrap::with_elements(
            detail
                .photos
                .iter()
                .enumerate()
                .map(|(index, photo)| {
                    button(picture(
                        photo.grid_image(),
                        thumbnails,
                        Length::Fixed(TILE_SIZE),
                        Length::Fixed(TILE_SIZE),
                        ContentFit::Cover,
                    ))
                    .on_press(Message::OpenPhoto(index))
                    .padding(0)
                    .style(button::text)
                    .into()
                })
                .collect(),
        )
        .spacing(Pixels(12.0))
        .line_spacing(Pixels(12.0))
        .into()
    };

    scrollable(column![header, photos].spacing(32).padding(40))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
