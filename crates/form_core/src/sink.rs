use crate::domain::FormValues;

/// Receives the validated snapshot of a successful submit. Reporting is
/// infallible from the form's point of view.
pub trait SubmitSink {
    fn deliver(&mut self, snapshot: FormValues);
}

impl<F> SubmitSink for F
where
    F: FnMut(FormValues),
{
    fn deliver(&mut self, snapshot: FormValues) {
        self(snapshot)
    }
}

/// Pretty JSON of the full record, every key included.
pub fn render_report(values: &FormValues) -> String {
    serde_json::to_string_pretty(values).unwrap_or_else(|err| format!("{values:?} ({err})"))
}
