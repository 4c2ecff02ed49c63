use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn today_is_selectable_and_yesterday_is_not() {
    let today = day(2026, 10, 17);

    assert!(is_selectable(today, today));
    assert!(is_selectable(day(2027, 1, 1), today));
    assert!(!is_selectable(day(2026, 10, 16), today));
}

#[test]
fn month_grid_places_first_day_in_its_weekday_column() {
    // 2026-10-01 is a Thursday.
    let view = MonthView::containing(day(2026, 10, 17));
    let weeks = view.weeks();

    assert!(weeks[0][..4].iter().all(Option::is_none));
    assert_eq!(weeks[0][4], Some(day(2026, 10, 1)));
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[4][6], Some(day(2026, 10, 31)));
}

#[test]
fn month_grid_lists_every_day_once() {
    let view = MonthView::containing(day(2028, 2, 10));
    let days: Vec<NaiveDate> = view.weeks().iter().flatten().flatten().copied().collect();

    assert_eq!(days.len(), 29);
    assert_eq!(days.first(), Some(&day(2028, 2, 1)));
    assert_eq!(days.last(), Some(&day(2028, 2, 29)));
}

#[test]
fn month_navigation_crosses_year_boundaries() {
    let view = MonthView::containing(day(2026, 12, 5));

    assert_eq!(view.next().first_day(), day(2027, 1, 1));
    assert_eq!(view.next().prev(), view);
    assert_eq!(MonthView::containing(day(2026, 1, 31)).prev().first_day(), day(2025, 12, 1));
    assert_eq!(view.title(), "December 2026");
}

#[test]
fn picker_opens_on_selected_month_or_today() {
    let today = day(2026, 10, 17);
    let mut picker = DatePicker::new(today);
    assert!(!picker.is_open());

    picker.open(Some(day(2027, 3, 2)), today);
    assert!(picker.is_open());
    assert!(picker.view().contains(day(2027, 3, 2)));

    picker.dismiss();
    picker.open(None, today);
    assert!(picker.view().contains(today));
}

#[test]
fn picker_ignores_past_days_and_closes_on_valid_pick() {
    let today = day(2026, 10, 17);
    let mut picker = DatePicker::new(today);
    picker.open(None, today);

    assert_eq!(picker.select(day(2026, 10, 1), today), None);
    assert!(picker.is_open());

    assert_eq!(picker.select(today, today), Some(today));
    assert!(!picker.is_open());
}

#[test]
fn picker_toggle_flips_open_state() {
    let today = day(2026, 10, 17);
    let mut picker = DatePicker::new(today);

    picker.toggle(None, today);
    assert!(picker.is_open());
    picker.show_next_month();
    assert_eq!(picker.view().month(), 11);
    picker.toggle(None, today);
    assert!(!picker.is_open());
}

#[test]
fn formats_dates_per_display_format() {
    let date = day(2026, 3, 7);

    assert_eq!(DateDisplayFormat::Iso.format(date), "2026-03-07");
    assert_eq!(DateDisplayFormat::Slash.format(date), "2026/03/07");
    assert_eq!(DateDisplayFormat::Us.format(date), "03/07/2026");
    assert_eq!("US".parse::<DateDisplayFormat>(), Ok(DateDisplayFormat::Us));
    assert!("julian".parse::<DateDisplayFormat>().is_err());
}
