//! Input Panel (Center)
//!
//! Labelled text inputs for the selected calculator with the unit next to
//! each box, then Calculate and Reset. Currency fields echo thousands
//! separators as the user types.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use fincalc_core::localization::Translate;
use fincalc_core::session::FieldSpec;

use crate::{App, Message};

/// Render the input panel
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let t = app.translator();
    let kind = app.selected();

    let mut fields: Column<'_, Message> = column![].spacing(6);
    if let Some(session) = app.session() {
        for spec in session.fields() {
            let value = session.display_value(spec.id).unwrap_or_default();
            fields = fields.push(labeled_input(app, spec, &value));
        }
    }

    let actions = row![
        button(text(t.translate("calculate")).size(11))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
        button(text(t.translate("reset")).size(11))
            .on_press(Message::Reset)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
    ]
    .spacing(6);

    let panel = column![
        text(t.translate(kind.title_key())).size(14),
        Space::new().height(8),
        fields,
        Space::new().height(12),
        actions,
    ];

    // Scale to 0-100 for FillPortion
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn labeled_input<'a>(app: &'a App, spec: &'static FieldSpec, value: &str) -> Element<'a, Message> {
    let t = app.translator();
    let placeholder = spec.default.map(|d| d.to_string()).unwrap_or_default();
    let id = spec.id;

    row![
        text(t.translate(spec.label_key)).size(11).width(Length::Fixed(200.0)),
        text_input(&placeholder, value)
            .on_input(move |s| Message::FieldChanged(id, s))
            .width(Length::Fill)
            .padding(4)
            .size(11),
        text(spec.unit.suffix(t)).size(11).width(Length::Fixed(40.0)),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
