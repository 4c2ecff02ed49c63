//! Routes submit results from the form controller onto the UI event queue.

use crossbeam_channel::{Sender, TrySendError};
use form_core::{render_report, FormValues, SubmitSink};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    let event_name = match &event {
        UiEvent::Submitted { .. } => "submitted",
        UiEvent::SubmitBlocked { .. } => "submit_blocked",
        UiEvent::Info(_) => "info",
    };

    match ui_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *status = "UI event queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "UI event queue disconnected".to_string();
        }
    }
}

/// Reports a validated snapshot: logs it and queues it for display.
pub struct ReportSink<'a> {
    pub ui_tx: &'a Sender<UiEvent>,
    pub status: &'a mut String,
}

impl SubmitSink for ReportSink<'_> {
    fn deliver(&mut self, snapshot: FormValues) {
        let report = render_report(&snapshot);
        tracing::info!(%report, "contact form submitted");
        dispatch_ui_event(self.ui_tx, UiEvent::Submitted { report }, self.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use form_core::FieldId;

    #[test]
    fn report_sink_queues_json_of_snapshot() {
        let (tx, rx) = bounded::<UiEvent>(4);
        let mut status = String::new();
        let mut sink = ReportSink {
            ui_tx: &tx,
            status: &mut status,
        };

        sink.deliver(FormValues {
            name: "Taro".into(),
            ..FormValues::default()
        });

        match rx.try_recv().expect("event queued") {
            UiEvent::Submitted { report } => {
                assert!(report.contains("\"name\": \"Taro\""));
                assert!(report.contains("\"appointmentDate\": null"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(status.is_empty());
    }

    #[test]
    fn full_queue_surfaces_in_status() {
        let (tx, _rx) = bounded::<UiEvent>(1);
        let mut status = String::new();

        dispatch_ui_event(&tx, UiEvent::Info("first".into()), &mut status);
        dispatch_ui_event(
            &tx,
            UiEvent::SubmitBlocked {
                failing: vec![FieldId::Name],
            },
            &mut status,
        );

        assert_eq!(status, "UI event queue is full; please retry");
    }

    #[test]
    fn disconnected_queue_surfaces_in_status() {
        let (tx, rx) = bounded::<UiEvent>(1);
        drop(rx);
        let mut status = String::new();

        dispatch_ui_event(&tx, UiEvent::Info("hello".into()), &mut status);

        assert_eq!(status, "UI event queue disconnected");
    }

    #[test]
    fn blocked_status_line_counts_fields() {
        let one = UiEvent::SubmitBlocked {
            failing: vec![FieldId::Agree],
        };
        let many = UiEvent::SubmitBlocked {
            failing: vec![FieldId::Name, FieldId::Email],
        };

        assert_eq!(one.status_line(), "1 field needs attention");
        assert_eq!(many.status_line(), "2 fields need attention");
    }
}
