//! Status Bar (Bottom)
//!
//! Displays the active language and currency, and the last status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use fincalc_core::currency::currency_profile;
use fincalc_core::localization::Translate;

use crate::{App, Message};

/// Render the status bar
pub fn view_status_bar(app: &App) -> Element<'_, Message> {
    let language = app.translator().language();
    let currency = currency_profile(language);
    let status_color = if app.session().and_then(|s| s.error()).is_some() {
        [0.8, 0.2, 0.2]
    } else {
        [0.4, 0.4, 0.4]
    };

    row![
        text(format!("{} · {} ({})", language, currency.iso_code, currency.symbol)).size(10),
        Space::new().width(Length::Fill),
        text(app.status()).size(10).color(status_color),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
