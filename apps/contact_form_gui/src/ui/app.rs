use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use form_core::{
    Category, DatePicker, FieldId, FieldValue, FormController, Gender, ResetPolicy,
    SubmitOutcome,
};

use crate::config::Settings;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_ui_event, ReportSink};
use crate::ui::widgets::{calendar, checkbox_row, field_row, CalendarAction};

const UI_EVENT_QUEUE_CAPACITY: usize = 64;
const AGE_HINT: &str = "Enter a whole number of 0 or more";

/// What the raw text of the age box means for the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeInput {
    Unset,
    Years(u32),
    Invalid,
}

pub fn parse_age(raw: &str) -> AgeInput {
    let raw = raw.trim();
    if raw.is_empty() {
        return AgeInput::Unset;
    }
    raw.parse::<u32>()
        .map(AgeInput::Years)
        .unwrap_or(AgeInput::Invalid)
}

/// A click closes the date overlay unless it lands on the overlay itself or
/// on the button that toggles it.
pub fn click_dismisses_overlay(
    click: Option<egui::Pos2>,
    overlay: egui::Rect,
    anchor: Option<egui::Rect>,
) -> bool {
    let Some(pos) = click else {
        return false;
    };
    !overlay.contains(pos) && !anchor.is_some_and(|rect| rect.contains(pos))
}

pub struct ContactFormApp {
    form: FormController,
    picker: DatePicker,
    picker_anchor: Option<egui::Rect>,
    age_draft: String,
    age_hint: Option<&'static str>,
    settings: Settings,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    report: Option<String>,
    status: String,
}

impl ContactFormApp {
    pub fn new(settings: Settings) -> Self {
        let form = FormController::new().with_reset_policy(settings.reset_policy());
        let picker = DatePicker::new(form.today());
        let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
        Self {
            form,
            picker,
            picker_anchor: None,
            age_draft: String::new(),
            age_hint: None,
            settings,
            ui_tx,
            ui_rx,
            report: None,
            status: "Ready".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.status = event.status_line();
            if let UiEvent::Submitted { report } = event {
                self.report = Some(report);
            }
        }
    }

    fn bind(&mut self, field: FieldId, value: FieldValue) {
        if let Err(err) = self.form.set_value(field, value) {
            tracing::warn!(%err, "field binding failed");
        }
    }

    fn error_message(&self, field: FieldId) -> Option<String> {
        self.form.error(field).map(|error| error.message.clone())
    }

    /// Required marker and inline error for a labeled row.
    fn row_state(&self, field: FieldId) -> (bool, Option<String>) {
        (
            self.form.descriptor(field).is_required(),
            self.error_message(field),
        )
    }

    fn submit(&mut self) {
        self.picker.dismiss();
        let outcome = {
            let mut sink = ReportSink {
                ui_tx: &self.ui_tx,
                status: &mut self.status,
            };
            self.form.submit(&mut sink)
        };

        match outcome {
            SubmitOutcome::Submitted(_) => {
                if self.form.reset_policy() == ResetPolicy::ResetToDefaults {
                    self.age_draft.clear();
                    self.age_hint = None;
                }
            }
            SubmitOutcome::Rejected(errors) => {
                let failing = errors.iter().map(|error| error.field).collect();
                dispatch_ui_event(
                    &self.ui_tx,
                    UiEvent::SubmitBlocked { failing },
                    &mut self.status,
                );
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.picker.dismiss();
        self.age_draft.clear();
        self.age_hint = None;
        dispatch_ui_event(
            &self.ui_tx,
            UiEvent::Info("Form cleared".to_string()),
            &mut self.status,
        );
    }

    fn text_field(&mut self, ui: &mut egui::Ui, field: FieldId, hint: &str, multiline: bool) {
        let (required, error) = self.row_state(field);
        let FieldValue::Text(mut text) = self.form.get_value(field) else {
            return;
        };

        let mut changed = false;
        field_row(ui, field.label(), required, error.as_deref(), |ui| {
            let edit = if multiline {
                egui::TextEdit::multiline(&mut text).desired_rows(4)
            } else {
                egui::TextEdit::singleline(&mut text)
            };
            changed = ui
                .add(edit.hint_text(hint).desired_width(f32::INFINITY))
                .changed();
        });

        if changed {
            self.bind(field, FieldValue::Text(text));
        }
    }

    fn age_field(&mut self, ui: &mut egui::Ui) {
        let error = self.error_message(FieldId::Age);
        let mut changed = false;
        field_row(ui, FieldId::Age.label(), false, error.as_deref(), |ui| {
            changed = ui
                .add(
                    egui::TextEdit::singleline(&mut self.age_draft)
                        .hint_text("0")
                        .desired_width(80.0),
                )
                .changed();
            if let Some(hint) = self.age_hint {
                ui.weak(hint);
            }
        });

        if changed {
            self.apply_age_draft();
        }
    }

    /// Binds the age box text. Text that is not a whole number clears the
    /// stored age so the snapshot never carries a value the box no longer shows.
    fn apply_age_draft(&mut self) {
        let age = match parse_age(&self.age_draft) {
            AgeInput::Unset => {
                self.age_hint = None;
                None
            }
            AgeInput::Years(years) => {
                self.age_hint = None;
                Some(years)
            }
            AgeInput::Invalid => {
                self.age_hint = Some(AGE_HINT);
                None
            }
        };
        self.bind(FieldId::Age, FieldValue::Number(age));
    }

    fn gender_field(&mut self, ui: &mut egui::Ui) {
        let (required, error) = self.row_state(FieldId::Gender);
        let current = self.form.values().gender;
        let mut gender = current;
        field_row(ui, FieldId::Gender.label(), required, error.as_deref(), |ui| {
            for option in Gender::ALL {
                ui.radio_value(&mut gender, option, option.label());
            }
        });

        if gender != current {
            self.bind(FieldId::Gender, FieldValue::Gender(gender));
        }
    }

    fn category_field(&mut self, ui: &mut egui::Ui) {
        let error = self.error_message(FieldId::Category);
        let current = self.form.values().category;
        let mut category = current;
        field_row(ui, FieldId::Category.label(), true, error.as_deref(), |ui| {
            egui::ComboBox::from_id_salt("category")
                .selected_text(category.map_or("Choose a category", Category::label))
                .width(200.0)
                .show_ui(ui, |ui| {
                    for option in Category::ALL {
                        ui.selectable_value(&mut category, Some(option), option.label());
                    }
                });
        });

        if category != current {
            self.bind(FieldId::Category, FieldValue::Category(category));
        }
    }

    fn flag_field(&mut self, ui: &mut egui::Ui, field: FieldId) {
        let error = self.error_message(field);
        let FieldValue::Flag(current) = self.form.get_value(field) else {
            return;
        };
        let mut checked = current;
        checkbox_row(ui, error.as_deref(), |ui| {
            ui.checkbox(&mut checked, field.label());
        });

        if checked != current {
            self.bind(field, FieldValue::Flag(checked));
        }
    }

    fn appointment_field(&mut self, ui: &mut egui::Ui) {
        let error = self.error_message(FieldId::AppointmentDate);
        let selected = self.form.values().appointment_date;
        let display = selected
            .map(|date| self.settings.date_format.format(date))
            .unwrap_or_else(|| "Pick a date".to_string());

        let mut toggled = false;
        let mut anchor = None;
        field_row(
            ui,
            FieldId::AppointmentDate.label(),
            true,
            error.as_deref(),
            |ui| {
                let mut text = egui::RichText::new(format!("📅 {display}"));
                if selected.is_none() {
                    text = text.weak();
                }
                let response = ui.add(egui::Button::new(text).min_size(egui::vec2(200.0, 0.0)));
                anchor = Some(response.rect);
                toggled = response.clicked();
            },
        );

        self.picker_anchor = anchor;
        if toggled {
            let today = self.form.today();
            self.picker.toggle(selected, today);
        }
    }

    fn show_date_picker(&mut self, ctx: &egui::Context) {
        if !self.picker.is_open() {
            return;
        }

        let today = self.form.today();
        let selected = self.form.values().appointment_date;
        let view = self.picker.view();
        let mut open = true;
        let mut action = CalendarAction::None;

        let mut window = egui::Window::new("Preferred date")
            .collapsible(false)
            .resizable(false)
            .open(&mut open);
        if let Some(anchor) = self.picker_anchor {
            window = window.fixed_pos(anchor.left_bottom() + egui::vec2(0.0, 4.0));
        }
        let window_rect = window
            .show(ctx, |ui| {
                action = calendar(ui, view, selected, today);
            })
            .map(|shown| shown.response.rect);

        match action {
            CalendarAction::None => {}
            CalendarAction::PrevMonth => self.picker.show_prev_month(),
            CalendarAction::NextMonth => self.picker.show_next_month(),
            CalendarAction::Pick(date) => {
                if let Some(date) = self.picker.select(date, today) {
                    self.bind(FieldId::AppointmentDate, FieldValue::Date(Some(date)));
                }
            }
        }

        let click = ctx.input(|i| {
            if i.pointer.any_click() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        let clicked_outside = window_rect
            .is_some_and(|rect| click_dismisses_overlay(click, rect, self.picker_anchor));
        if !open || clicked_outside || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.picker.dismiss();
        }
    }

    fn show_report(&mut self, ctx: &egui::Context) {
        let Some(report) = self.report.as_deref() else {
            return;
        };

        let mut open = true;
        let mut acknowledged = false;
        egui::Window::new("Submitted")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                ui.monospace(report);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if !open || acknowledged {
            self.report = None;
        }
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let card_width = ui.available_width().clamp(420.0, 620.0);
                ui.vertical_centered(|ui| {
                    ui.set_width(card_width);
                    ui.add_space(12.0);
                    ui.heading("Contact us");
                    ui.add_space(12.0);

                    egui::Frame::NONE
                        .fill(ui.visuals().faint_bg_color)
                        .corner_radius(12.0)
                        .stroke(egui::Stroke::new(
                            1.0,
                            ui.visuals().widgets.noninteractive.bg_stroke.color,
                        ))
                        .inner_margin(egui::Margin::symmetric(20, 18))
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
                                self.show_fields(ui);
                            });
                        });

                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        ui.small("Status:");
                        ui.small(egui::RichText::new(&self.status).weak());
                    });
                });
            });
        });
    }

    fn show_fields(&mut self, ui: &mut egui::Ui) {
        self.text_field(ui, FieldId::Name, "Your name", false);
        self.text_field(ui, FieldId::Email, "email@example.com", false);
        self.age_field(ui);
        self.gender_field(ui);
        self.category_field(ui);
        self.text_field(ui, FieldId::Message, "", true);
        self.flag_field(ui, FieldId::Subscribe);
        self.flag_field(ui, FieldId::Agree);
        self.appointment_field(ui);

        ui.add_space(6.0);
        let submit = egui::Button::new(egui::RichText::new("Submit").strong().size(16.0))
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(submit).clicked() {
            self.submit();
        }
        if ui.small_button("Clear form").clicked() {
            self.reset();
        }
    }
}

impl eframe::App for ContactFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_form(ctx);
        self.show_date_picker(ctx);
        self.show_report(ctx);

        if !self.ui_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
