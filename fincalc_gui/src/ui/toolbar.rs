//! Header
//!
//! App title on the left, language picker on the right.

use iced::widget::{pick_list, row, text, Space};
use iced::{Alignment, Element, Length};

use fincalc_core::localization::Translate;

use crate::{App, Message};

/// Render the application header
pub fn view_header(app: &App) -> Element<'_, Message> {
    let t = app.translator();

    row![
        text(t.translate("appTitle")).size(24),
        Space::new().width(Length::Fill),
        text(t.translate("selectLanguage")).size(11),
        Space::new().width(6),
        pick_list(app.languages(), app.language(), Message::LanguageSelected)
            .width(Length::Fixed(160.0))
            .text_size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
