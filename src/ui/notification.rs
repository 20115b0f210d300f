use iced::alignment::Horizontal;
use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::state::notice::Notice;
use crate::Message;

/// Toast in the top-right corner with a close button
pub fn view<'a>(notice: &'a Notice) -> Element<'a, Message> {
    let toast = container(
        row![
            text(&notice.message).size(16),
            text(notice.posted_at.format("%H:%M:%S").to_string()).size(12),
            button(text("×").size(18))
                .on_press(Message::DismissNotice)
                .style(button::text),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([10, 16])
    .style(container::rounded_box);

    container(toast)
        .width(Length::Fill)
        .padding(16)
        .align_x(Horizontal::Right)
        .into()
}
