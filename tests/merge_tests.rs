mod common;
use common::at;

use worktime::core::merge::{merge_daily_record, merge_records_state, merge_settings_state};
use worktime::models::record::{DailyRecord, RecordsState};
use worktime::models::settings::{Lang, SettingsState, SlackSettings};

fn sample_state() -> RecordsState {
    let mut state = RecordsState::new();
    state.insert(
        "20200515".into(),
        DailyRecord {
            starts: vec![at(2020, 5, 15, 9, 0)],
            stops: vec![at(2020, 5, 15, 17, 30)],
            memos: vec!["office".into()],
            break_time_lengths_min: Some(vec![60]),
        },
    );
    state.insert(
        "20200516".into(),
        DailyRecord {
            starts: vec![at(2020, 5, 16, 10, 0)],
            ..DailyRecord::default()
        },
    );
    state
}

#[test]
fn merging_a_state_with_itself_changes_nothing() {
    let state = sample_state();
    assert_eq!(merge_records_state(&state, &state), state);
}

#[test]
fn days_only_on_one_side_are_taken_as_is() {
    let current = sample_state();
    let mut imported = RecordsState::new();
    let extra = DailyRecord {
        stops: vec![at(2020, 6, 1, 18, 0)],
        ..DailyRecord::default()
    };
    imported.insert("20200601".into(), extra.clone());

    let merged = merge_records_state(&current, &imported);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged["20200601"], extra);
    assert_eq!(merged["20200515"], current["20200515"]);
}

#[test]
fn differing_histories_are_concatenated_local_first() {
    let ours = DailyRecord {
        starts: vec![at(2020, 5, 15, 9, 0)],
        stops: vec![at(2020, 5, 15, 17, 30)],
        memos: vec!["office".into()],
        break_time_lengths_min: Some(vec![60]),
    };
    let theirs = DailyRecord {
        starts: vec![at(2020, 5, 15, 9, 15)],
        stops: vec![at(2020, 5, 15, 17, 30)],
        memos: vec!["remote".into()],
        break_time_lengths_min: Some(vec![45]),
    };

    let merged = merge_daily_record(&ours, &theirs);
    assert_eq!(
        merged.starts,
        vec![at(2020, 5, 15, 9, 0), at(2020, 5, 15, 9, 15)]
    );
    // identical lists stay single
    assert_eq!(merged.stops, vec![at(2020, 5, 15, 17, 30)]);
    assert_eq!(merged.memos, vec!["office".to_string(), "remote".to_string()]);
    assert_eq!(merged.break_time_lengths_min, Some(vec![60, 45]));
}

#[test]
fn merge_is_asymmetric() {
    let a = DailyRecord {
        memos: vec!["a".into()],
        ..DailyRecord::default()
    };
    let b = DailyRecord {
        memos: vec!["b".into()],
        ..DailyRecord::default()
    };

    assert_eq!(merge_daily_record(&a, &b).memos, vec!["a", "b"]);
    assert_eq!(merge_daily_record(&b, &a).memos, vec!["b", "a"]);
}

#[test]
fn missing_break_history_is_treated_as_empty() {
    let legacy = DailyRecord {
        starts: vec![at(2020, 5, 15, 9, 0)],
        ..DailyRecord::default()
    };
    let modern = DailyRecord {
        starts: vec![at(2020, 5, 15, 9, 0)],
        break_time_lengths_min: Some(vec![30]),
        ..DailyRecord::default()
    };

    assert_eq!(
        merge_daily_record(&legacy, &modern).break_time_lengths_min,
        Some(vec![30])
    );
    assert_eq!(
        merge_daily_record(&legacy, &legacy).break_time_lengths_min,
        None
    );
}

#[test]
fn settings_keep_local_values_and_fill_gaps() {
    let current = SettingsState {
        send_to_mail_address: "me@example.com".into(),
        slack: SlackSettings {
            incoming_webhook_url: String::new(),
            context: "local".into(),
        },
        lang: Lang::En,
        default_break_time_length_min: None,
    };
    let imported = SettingsState {
        send_to_mail_address: "other@example.com".into(),
        slack: SlackSettings {
            incoming_webhook_url: "https://hooks.example/x".into(),
            context: "remote".into(),
        },
        lang: Lang::Ja,
        default_break_time_length_min: Some(60),
    };

    let merged = merge_settings_state(&current, &imported);
    assert_eq!(merged.send_to_mail_address, "me@example.com");
    assert_eq!(merged.slack.incoming_webhook_url, "https://hooks.example/x");
    assert_eq!(merged.slack.context, "local");
    assert_eq!(merged.lang, Lang::Ja);
    assert_eq!(merged.default_break_time_length_min, Some(60));
}
