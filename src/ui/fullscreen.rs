use iced::widget::{button, column, container, horizontal_space, mouse_area, opaque, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length};

use super::picture;
use crate::media::cache::{ImageCache, ImageState};
use crate::state::data::GalleryDetail;
use crate::Message;

/// Lightbox over the gallery page.
///
/// The overlay is opaque, so the grid underneath receives no scroll or
/// click events while it is up. Clicking the backdrop closes it; clicking
/// the photo does not.
pub fn view<'a>(
    detail: &'a GalleryDetail,
    index: usize,
    previews: &ImageCache,
    thumbnails: &ImageCache,
) -> Element<'a, Message> {
    let total = detail.photos.len();
    let Some(photo) = detail.photos.get(index) else {
        return column![].into();
    };

    // Show the thumbnail until the full-size image arrives
    let full = photo.image.as_deref();
    let (source, cache) = match full.and_then(|s| previews.get(s)) {
        Some(ImageState::Ready(_)) => (full, previews),
        _ => match photo.grid_image() {
            Some(thumb) if matches!(thumbnails.get(thumb), Some(ImageState::Ready(_))) => {
                (Some(thumb), thumbnails)
            }
            _ => (full, previews),
        },
    };

    let image = mouse_area(picture(
        source,
        cache,
        Length::Fill,
        Length::Fill,
        ContentFit::Contain,
    ))
    .on_press(Message::Ignore);

    let (previous, next) = step_messages(index, total);
    let previous = step_control("‹", previous);
    let next = step_control("›", next);

    let content = column![
        row![
            horizontal_space(),
            button(text("×").size(32))
                .on_press(Message::ClosePhoto)
                .style(button::text),
        ],
        row![previous, image, next]
            .spacing(16)
            .align_y(Alignment::Center)
            .height(Length::Fill),
        column![
            text(photo.display_title()).size(18),
            text(photo.description.as_deref().unwrap_or_default()).size(14),
            text(format!("{} / {}", index + 1, total)).size(14),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    ]
    .spacing(12)
    .padding(24);

    let backdrop = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.92).into()),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        });

    opaque(mouse_area(backdrop).on_press(Message::ClosePhoto))
}

/// Messages for the previous/next controls. At either end the control
/// still takes the click, so it never falls through to the backdrop.
fn step_messages(index: usize, total: usize) -> (Message, Message) {
    let previous = if index > 0 {
        Message::PreviousPhoto
    } else {
        Message::Ignore
    };
    let next = if index + 1 < total {
        Message::NextPhoto
    } else {
        Message::Ignore
    };
    (previous, next)
}

fn step_control<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    let dimmed = matches!(message, Message::Ignore);
    button(text(label).size(40))
        .on_press(message)
        .style(move |theme, status| {
            let style = button::text(theme, status);
            if dimmed {
                button::Style {
                    text_color: style.text_color.scale_alpha(0.3),
                    ..style
                }
            } else {
                style
            }
        })
        .into()
}
