//! Layout primitives shared by the form rows and the calendar overlay.

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use form_core::{
    calendar::{is_selectable, WEEKDAY_LABELS},
    MonthView,
};

pub const LABEL_WIDTH: f32 = 128.0;

/// A right-aligned label column, the control, and an inline error line.
pub fn field_row(
    ui: &mut egui::Ui,
    label: &str,
    required: bool,
    error: Option<&str>,
    add_control: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(LABEL_WIDTH, ui.spacing().interact_size.y),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if required {
                    ui.label(egui::RichText::new("*").color(ui.visuals().error_fg_color));
                }
                ui.label(label);
            },
        );
        add_control(ui);
    });
    error_line(ui, error);
}

/// Checkbox rows have their label beside the box, so the column is left blank.
pub fn checkbox_row(
    ui: &mut egui::Ui,
    error: Option<&str>,
    add_control: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.add_space(LABEL_WIDTH + ui.spacing().item_spacing.x);
        add_control(ui);
    });
    error_line(ui, error);
}

fn error_line(ui: &mut egui::Ui, error: Option<&str>) {
    let Some(message) = error else {
        return;
    };
    ui.horizontal(|ui| {
        ui.add_space(LABEL_WIDTH + ui.spacing().item_spacing.x);
        ui.label(
            egui::RichText::new(message)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    None,
    PrevMonth,
    NextMonth,
    Pick(NaiveDate),
}

/// Month grid with past days disabled. Returns what the user clicked.
pub fn calendar(
    ui: &mut egui::Ui,
    view: MonthView,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> CalendarAction {
    let mut action = CalendarAction::None;

    ui.horizontal(|ui| {
        if ui.small_button("◀").clicked() {
            action = CalendarAction::PrevMonth;
        }
        ui.label(egui::RichText::new(view.title()).strong());
        if ui.small_button("▶").clicked() {
            action = CalendarAction::NextMonth;
        }
    });
    ui.add_space(4.0);

    egui::Grid::new(("appointment_calendar", view.year(), view.month()))
        .num_columns(7)
        .spacing(egui::vec2(4.0, 4.0))
        .show(ui, |ui| {
            for label in WEEKDAY_LABELS {
                ui.label(egui::RichText::new(label).weak());
            }
            ui.end_row();

            for week in view.weeks() {
                for cell in week {
                    let Some(date) = cell else {
                        ui.label("");
                        continue;
                    };
                    let mut text = egui::RichText::new(date.day().to_string());
                    if date == today {
                        text = text.strong();
                    }
                    let button = egui::Button::new(text)
                        .selected(selected == Some(date))
                        .min_size(egui::vec2(28.0, 24.0));
                    if ui
                        .add_enabled(is_selectable(date, today), button)
                        .clicked()
                    {
                        action = CalendarAction::Pick(date);
                    }
                }
                ui.end_row();
            }
        });

    action
}
