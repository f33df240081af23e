//! Calculators Panel (Left Sidebar)
//!
//! One button per calculator, the selected one highlighted.

use iced::widget::{button, column, container, scrollable, text, Column, Space};
use iced::{Element, Length, Padding};

use fincalc_core::calculations::CalculatorKind;
use fincalc_core::localization::Translate;

use crate::{App, Message};

const PANEL_WIDTH: f32 = 220.0;

/// Render the calculators panel (left sidebar)
pub fn view_calculators_panel(app: &App) -> Element<'_, Message> {
    let t = app.translator();

    let mut list: Column<'_, Message> = column![].spacing(2);
    for kind in CalculatorKind::ALL {
        let style = if kind == app.selected() {
            button::primary
        } else {
            button::secondary
        };
        list = list.push(
            button(text(t.translate(kind.title_key())).size(11))
                .on_press(Message::SelectCalculator(kind))
                .padding(Padding::from([4, 8]))
                .style(style)
                .width(Length::Fill),
        );
    }

    let content = column![
        text(t.translate("selectCalculator")).size(12),
        Space::new().height(6),
        list,
    ];

    container(scrollable(content.padding(4)))
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .into()
}
