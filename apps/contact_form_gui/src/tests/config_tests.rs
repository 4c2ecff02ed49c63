use super::*;

use std::{collections::HashMap, io::Write};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_keep_values_after_submit() {
    let settings = Settings::default();

    assert!(!settings.reset_after_submit);
    assert_eq!(settings.reset_policy(), ResetPolicy::Keep);
    assert_eq!(settings.date_format, DateDisplayFormat::Slash);
}

#[test]
fn reads_partial_settings_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "reset_after_submit = true\ndate_format = \"iso\"").expect("write");

    let settings = load_settings(Some(file.path())).expect("load");

    assert_eq!(settings.reset_policy(), ResetPolicy::ResetToDefaults);
    assert_eq!(settings.date_format, DateDisplayFormat::Iso);
    assert_eq!(settings.window_title, "Contact Form");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");

    let err = load_settings(Some(&missing)).expect_err("missing file");

    assert!(format!("{err:#}").contains("failed to read settings file"));
}

#[test]
fn malformed_file_reports_parse_context() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "date_format = \"julian\"").expect("write");

    let err = read_settings_file(file.path()).expect_err("bad format");

    assert!(format!("{err:#}").contains("failed to parse settings file"));
}

#[test]
fn env_overrides_win_over_file_values() {
    let mut settings = Settings::default();
    let vars = env(&[
        ("APP__RESET_AFTER_SUBMIT", "yes"),
        ("APP__DATE_FORMAT", "us"),
        ("APP__WINDOW_TITLE", "Inquiries"),
    ]);

    apply_env_overrides(&mut settings, |name| vars.get(name).cloned());

    assert!(settings.reset_after_submit);
    assert_eq!(settings.date_format, DateDisplayFormat::Us);
    assert_eq!(settings.window_title, "Inquiries");
}

#[test]
fn unparsable_env_values_are_ignored() {
    let mut settings = Settings::default();
    let vars = env(&[
        ("APP__RESET_AFTER_SUBMIT", "sometimes"),
        ("APP__DATE_FORMAT", "roman"),
        ("APP__WINDOW_TITLE", "   "),
    ]);

    apply_env_overrides(&mut settings, |name| vars.get(name).cloned());

    assert_eq!(settings, Settings::default());
}
