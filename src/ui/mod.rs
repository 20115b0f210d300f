/// Views
///
/// Stateless functions from application state to iced elements:
/// - Gallery index with filters (grid.rs)
/// - Gallery page with its photo grid (viewer.rs)
/// - Lightbox overlay (fullscreen.rs)
/// - Update notification (notification.rs)

pub mod fullscreen;
pub mod grid;
pub mod notification;
pub mod viewer;

use iced::widget::{container, image, text, Image};
use iced::{ContentFit, Element, Length};

use crate::media::cache::{ImageCache, ImageState};
use crate::Message;

/// Cached image for `source`, or a caption while it loads or after it failed
fn picture<'a>(
    source: Option<&str>,
    cache: &ImageCache,
    width: Length,
    height: Length,
    fit: ContentFit,
) -> Element<'a, Message> {
    let caption = match source.and_then(|s| cache.get(s)) {
        Some(ImageState::Ready(path)) => {
            return Image::<image::Handle>::new(image::Handle::from_path(path.clone()))
                .width(width)
                .height(height)
                .content_fit(fit)
                .into();
        }
        Some(ImageState::Failed) => "Image unavailable",
        Some(ImageState::Loading) => "Loading...",
        None if source.is_none() => "No image",
        None => "Loading...",
    };

    container(text(caption).size(14))
        .width(width)
        .height(height)
        .center_x(width)
        .center_y(height)
        .style(container::rounded_box)
        .into()
}

fn year_label(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

fn photo_count_label(count: usize) -> String {
    match count {
        1 => "1 photo".to_string(),
        n => format!("{} photos", n),
    }
}
