mod common;
use common::at;

use worktime::core::latest::{get_latest_of, get_latest_start_time_of};
use worktime::core::reducer::{RecordsAction, SettingsAction, reduce_records, reduce_settings};
use worktime::models::record::{
    DailyLatestRecord, DailyRecord, RecordsState, TargetIndex, is_day_key, make_record_key,
};
use worktime::models::settings::{Lang, SettingsState};

fn record_with_starts(starts: Vec<worktime::models::record::Timestamp>) -> DailyRecord {
    DailyRecord {
        starts,
        ..DailyRecord::default()
    }
}

#[test]
fn record_key_collides_for_same_calendar_day() {
    assert_eq!(make_record_key(&at(2020, 5, 15, 0, 1)), "20200515");
    assert_eq!(
        make_record_key(&at(2020, 5, 15, 0, 1)),
        make_record_key(&at(2020, 5, 15, 23, 59))
    );
    assert_ne!(
        make_record_key(&at(2020, 5, 15, 23, 59)),
        make_record_key(&at(2020, 5, 16, 0, 0))
    );
}

#[test]
fn latest_start_is_last_inserted_not_earliest() {
    let record = record_with_starts(vec![at(2020, 5, 15, 9, 20), at(2020, 5, 15, 9, 0)]);
    assert_eq!(get_latest_start_time_of(&record), Some(at(2020, 5, 15, 9, 0)));
    assert_eq!(get_latest_start_time_of(&DailyRecord::default()), None);
}

#[test]
fn latest_of_missing_record_uses_default_break() {
    assert_eq!(
        get_latest_of(None, Some(45)),
        DailyLatestRecord {
            start: None,
            stop: None,
            memo: String::new(),
            break_time_length_min: Some(45),
        }
    );
    assert_eq!(get_latest_of(None, None).break_time_length_min, None);
}

#[test]
fn break_length_resolution_prefers_record_then_default() {
    let mut record = DailyRecord {
        memos: vec!["a".into(), "b".into()],
        break_time_lengths_min: Some(vec![30, 60]),
        ..DailyRecord::default()
    };
    let latest = get_latest_of(Some(&record), Some(10));
    assert_eq!(latest.break_time_length_min, Some(60));
    assert_eq!(latest.memo, "b");

    record.break_time_lengths_min = Some(vec![]);
    assert_eq!(get_latest_of(Some(&record), Some(10)).break_time_length_min, Some(10));

    // legacy record without the field at all
    record.break_time_lengths_min = None;
    assert_eq!(get_latest_of(Some(&record), Some(10)).break_time_length_min, Some(10));
    assert_eq!(get_latest_of(Some(&record), None).break_time_length_min, None);
}

#[test]
fn new_record_carries_empty_break_history_unlike_default() {
    assert_eq!(DailyRecord::new().break_time_lengths_min, Some(vec![]));
    assert_eq!(DailyRecord::default().break_time_lengths_min, None);

    let fresh = DailyRecord::new();
    assert!(fresh.starts.is_empty() && fresh.stops.is_empty() && fresh.memos.is_empty());
    assert_eq!(get_latest_of(Some(&fresh), Some(30)).break_time_length_min, Some(30));
    assert_eq!(
        get_latest_of(Some(&DailyRecord::default()), Some(30)).break_time_length_min,
        Some(30)
    );
}

#[test]
fn day_key_validation() {
    assert!(is_day_key("20200515"));
    assert!(is_day_key(&make_record_key(&at(2020, 2, 29, 12, 0))));
    assert!(!is_day_key("2020-05-15"));
    assert!(!is_day_key("20200230"));
    assert!(!is_day_key("+2020051"));
    assert!(!is_day_key("202005150"));
}

#[test]
fn start_creates_record_lazily() {
    let now = at(2020, 5, 15, 9, 0);
    let state = reduce_records(RecordsState::new(), RecordsAction::Start { now });

    let record = &state["20200515"];
    assert_eq!(record.starts, vec![now]);
    assert!(record.stops.is_empty());
    assert!(record.memos.is_empty());
    assert_eq!(record.break_time_lengths_min, Some(vec![]));
}

#[test]
fn repeated_start_overwrites_latest_entry() {
    let first = at(2020, 5, 15, 9, 0);
    let second = at(2020, 5, 15, 9, 5);
    let state = reduce_records(RecordsState::new(), RecordsAction::Start { now: first });
    let state = reduce_records(state, RecordsAction::Start { now: second });

    assert_eq!(state["20200515"].starts, vec![second]);
}

#[test]
fn update_at_index_overwrites_or_appends() {
    let t1 = at(2020, 5, 15, 9, 20);
    let t2 = at(2020, 5, 15, 9, 0);
    let t3 = at(2020, 5, 15, 8, 55);

    let state = reduce_records(RecordsState::new(), RecordsAction::Start { now: t1 });
    let state = reduce_records(
        state,
        RecordsAction::UpdateStartTime {
            time: t2,
            target: TargetIndex::At(1),
        },
    );
    assert_eq!(state["20200515"].starts, vec![t1, t2]);

    let state = reduce_records(
        state,
        RecordsAction::UpdateStartTime {
            time: t3,
            target: TargetIndex::At(0),
        },
    );
    assert_eq!(state["20200515"].starts, vec![t3, t2]);

    // far out of range still appends at the end
    let state = reduce_records(
        state,
        RecordsAction::UpdateStartTime {
            time: t1,
            target: TargetIndex::At(42),
        },
    );
    assert_eq!(state["20200515"].starts, vec![t3, t2, t1]);
}

#[test]
fn equal_value_update_is_a_no_op() {
    let now = at(2020, 5, 15, 17, 30);
    let state = reduce_records(RecordsState::new(), RecordsAction::Stop { now });
    let before = state.clone();
    let after = reduce_records(
        state,
        RecordsAction::UpdateStopTime {
            time: now,
            target: TargetIndex::Latest,
        },
    );
    assert_eq!(before, after);
}

#[test]
fn memo_and_break_updates_target_their_own_lists() {
    let day = at(2020, 5, 15, 0, 0);
    let state = reduce_records(
        RecordsState::new(),
        RecordsAction::UpdateMemo {
            date: day,
            memo: "office".into(),
            target: TargetIndex::Latest,
        },
    );
    let state = reduce_records(
        state,
        RecordsAction::UpdateLatestMemo {
            now: at(2020, 5, 15, 12, 0),
            memo: "remote".into(),
        },
    );
    let state = reduce_records(
        state,
        RecordsAction::UpdateBreakTimeLengthMin {
            date: day,
            break_time_length_min: 60,
            target: TargetIndex::Latest,
        },
    );
    let state = reduce_records(
        state,
        RecordsAction::UpdateBreakTimeLengthMin {
            date: day,
            break_time_length_min: 45,
            target: TargetIndex::At(1),
        },
    );

    let record = &state["20200515"];
    assert_eq!(record.memos, vec!["remote".to_string()]);
    assert_eq!(record.break_time_lengths_min, Some(vec![60, 45]));
    assert!(record.starts.is_empty());
}

#[test]
fn break_update_on_legacy_record_starts_a_history() {
    let day = at(2020, 5, 15, 0, 0);
    let mut state = RecordsState::new();
    state.insert(
        "20200515".into(),
        DailyRecord {
            starts: vec![at(2020, 5, 15, 9, 0)],
            ..DailyRecord::default()
        },
    );

    let state = reduce_records(
        state,
        RecordsAction::UpdateBreakTimeLengthMin {
            date: day,
            break_time_length_min: 30,
            target: TargetIndex::Latest,
        },
    );
    assert_eq!(state["20200515"].break_time_lengths_min, Some(vec![30]));
}

#[test]
fn untouched_days_are_preserved() {
    let other = at(2020, 5, 14, 9, 0);
    let state = reduce_records(RecordsState::new(), RecordsAction::Start { now: other });
    let state = reduce_records(
        state,
        RecordsAction::Stop {
            now: at(2020, 5, 15, 18, 0),
        },
    );

    assert_eq!(state.len(), 2);
    assert_eq!(state["20200514"].starts, vec![other]);
}

#[test]
fn settings_reducer_updates_single_fields() {
    let s = SettingsState::default();
    let s = reduce_settings(s, SettingsAction::UpdateSendToMailAddress("me@example.com".into()));
    let s = reduce_settings(
        s,
        SettingsAction::UpdateSlackIncomingWebhookUrl("https://hooks.example/x".into()),
    );
    let s = reduce_settings(s, SettingsAction::UpdateSlackContext("<@U1>".into()));
    let s = reduce_settings(s, SettingsAction::UpdateLang(Lang::Ja));
    let s = reduce_settings(s, SettingsAction::UpdateDefaultBreakTimeLengthMin(60));

    assert_eq!(s.send_to_mail_address, "me@example.com");
    assert_eq!(s.slack.incoming_webhook_url, "https://hooks.example/x");
    assert_eq!(s.slack.context, "<@U1>");
    assert_eq!(s.lang, Lang::Ja);
    assert_eq!(s.default_break_time_length_min, Some(60));

    let s = reduce_settings(s, SettingsAction::ClearDefaultBreakTimeLengthMin);
    assert_eq!(s.default_break_time_length_min, None);
    assert_eq!(s.send_to_mail_address, "me@example.com");
}
