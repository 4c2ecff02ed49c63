use chrono::NaiveDate;
use form_core::{
    render_report, Category, FieldId, FieldValue, FixedClock, FormController, FormValues, Gender,
    SubmitOutcome,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("date")
}

fn taro_form() -> FormController {
    let mut form = FormController::new().with_clock(FixedClock(today()));
    let edits = [
        (FieldId::Name, FieldValue::Text("Taro".into())),
        (FieldId::Email, FieldValue::Text("taro@example.com".into())),
        (FieldId::Age, FieldValue::Number(Some(30))),
        (FieldId::Gender, FieldValue::Gender(Gender::Male)),
        (FieldId::Category, FieldValue::Category(Some(Category::Inquiry))),
        (FieldId::Message, FieldValue::Text("Hello".into())),
        (FieldId::Subscribe, FieldValue::Flag(true)),
        (FieldId::Agree, FieldValue::Flag(true)),
        (FieldId::AppointmentDate, FieldValue::Date(Some(today()))),
    ];
    for (field, value) in edits {
        form.set_value(field, value).expect("bind field");
    }
    form
}

#[test]
fn complete_form_reaches_the_sink_exactly_once() {
    let mut form = taro_form();
    let mut delivered: Vec<FormValues> = Vec::new();

    let outcome = form.submit(&mut |values: FormValues| delivered.push(values));

    let expected = FormValues {
        name: "Taro".into(),
        email: "taro@example.com".into(),
        age: Some(30),
        gender: Gender::Male,
        category: Some(Category::Inquiry),
        message: "Hello".into(),
        subscribe: true,
        agree: true,
        appointment_date: Some(today()),
    };
    assert_eq!(delivered, vec![expected.clone()]);
    assert_eq!(outcome, SubmitOutcome::Submitted(expected));
    assert!(form.errors().is_empty());
}

#[test]
fn empty_form_reports_every_required_field_and_skips_the_sink() {
    let mut form = FormController::new().with_clock(FixedClock(today()));
    let mut calls = 0;

    let outcome = form.submit(&mut |_: FormValues| calls += 1);

    assert_eq!(calls, 0);
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("empty form must not submit");
    };
    let failing: Vec<FieldId> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        failing,
        vec![
            FieldId::Name,
            FieldId::Email,
            FieldId::Category,
            FieldId::Message,
            FieldId::Agree,
            FieldId::AppointmentDate,
        ]
    );
    for field in failing {
        assert!(form.error(field).is_some(), "{field} should show an error");
    }
}

#[test]
fn repeated_submits_each_deliver_once() {
    let mut form = taro_form();
    let mut delivered: Vec<FormValues> = Vec::new();

    for _ in 0..3 {
        let outcome = form.submit(&mut |values: FormValues| delivered.push(values));
        assert!(outcome.is_submitted());
    }

    assert_eq!(delivered.len(), 3);
    assert!(delivered.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn report_contains_every_key_even_when_optional_fields_are_unset() {
    let mut form = taro_form();
    form.set_value(FieldId::Age, FieldValue::Number(None))
        .expect("age");

    let mut report = String::new();
    let outcome = form.submit(&mut |values: FormValues| report = render_report(&values));
    assert!(outcome.is_submitted());

    let parsed: serde_json::Value = serde_json::from_str(&report).expect("json report");
    let object = parsed.as_object().expect("object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    let mut expected: Vec<&str> = FieldId::ALL.iter().map(|f| f.key()).collect();
    expected.sort_unstable();
    let mut keys_sorted = keys.clone();
    keys_sorted.sort_unstable();
    assert_eq!(keys_sorted, expected);

    assert!(object["age"].is_null());
    assert_eq!(object["gender"], "male");
    assert_eq!(object["category"], "inquiry");
    assert_eq!(object["appointmentDate"], "2026-10-17");
}
