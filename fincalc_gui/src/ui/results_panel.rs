//! Results Panel (Right)
//!
//! Shows the translated result lines of the selected calculator, the
//! optional monthly breakdown or amortization table, or the validation
//! error from the last Calculate.

use iced::widget::{column, container, row, rule, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

use fincalc_core::localization::Translate;
use fincalc_core::report::{CalculationReport, ScheduleTable};
use fincalc_core::session::SessionState;

use crate::{App, Message};

const ERROR_COLOR: [f32; 3] = [0.8, 0.2, 0.2];
const HINT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Render the results panel
///
/// `input_ratio` is the share already given to the input panel.
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let t = app.translator();

    let body: Element<'_, Message> = match app.session().map(|s| s.state()) {
        Some(SessionState::Computed { report, .. }) => view_report(t.translate("results"), report),
        Some(SessionState::Failed(e)) => column![
            text("Error").size(14).color(ERROR_COLOR),
            Space::new().height(6),
            text(e.to_string()).size(11).color(ERROR_COLOR),
        ]
        .into(),
        _ => text(format!("{} → {}", t.translate("calculate"), t.translate("results")))
            .size(11)
            .color(HINT_COLOR)
            .into(),
    };

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(column![body].padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_report<'a>(heading: String, report: &'a CalculationReport) -> Element<'a, Message> {
    let mut content: Column<'a, Message> = column![text(heading).size(14), Space::new().height(8)].spacing(4);

    for line in &report.lines {
        content = content.push(
            row![
                text(line.label.as_str()).size(11).width(Length::FillPortion(3)),
                text(line.value.as_str()).size(12).width(Length::FillPortion(2)),
            ]
            .spacing(6),
        );
    }

    if let Some(table) = &report.schedule {
        content = content
            .push(Space::new().height(10))
            .push(rule::horizontal(1))
            .push(view_schedule(table));
    }

    content.into()
}

fn view_schedule(table: &ScheduleTable) -> Element<'_, Message> {
    let mut header: Row<'_, Message> = row![].spacing(6);
    for title in &table.headers {
        header = header.push(text(title.as_str()).size(10).color(HINT_COLOR).width(Length::Fill));
    }

    let mut rows: Column<'_, Message> = column![text(table.title.as_str()).size(12), header].spacing(2);
    for line in &table.rows {
        let mut cells = row![text(line.period.to_string()).size(10).width(Length::Fill)].spacing(6);
        for cell in &line.cells {
            cells = cells.push(text(cell.as_str()).size(10).width(Length::Fill));
        }
        rows = rows.push(cells);
    }

    rows.into()
}
