mod common;
use common::at;

use chrono::NaiveDate;
use worktime::core::calculator::monthly::{
    get_days_in_month, get_monthly_records_of, summarize_month,
};
use worktime::core::calculator::working_time::{
    WorkingTimeStats, calc_working_time_min, calc_working_time_stats, get_median_of,
    get_median_time_of,
};
use worktime::models::record::{DailyLatestRecord, DailyRecord, RecordsState};
use worktime::utils::time::{format_clock, format_duration};

fn day(start: (u32, u32), stop: (u32, u32), break_min: Option<u32>) -> DailyLatestRecord {
    DailyLatestRecord {
        start: Some(at(2020, 5, 15, start.0, start.1)),
        stop: Some(at(2020, 5, 15, stop.0, stop.1)),
        memo: String::new(),
        break_time_length_min: break_min,
    }
}

#[test]
fn median_of_odd_and_even_lengths() {
    assert_eq!(get_median_of(&[5, 1, 3]), Some(3));
    assert_eq!(get_median_of(&[4, 1, 3, 2]), Some(2));
    assert_eq!(get_median_of(&[7]), Some(7));
    assert_eq!(get_median_of(&[]), None);
}

#[test]
fn median_is_not_affected_by_input_order() {
    let values = [540, 555, 600, 570, 525, 610];
    let mut reversed = values;
    reversed.reverse();
    assert_eq!(get_median_of(&values), get_median_of(&reversed));
    assert_eq!(get_median_of(&values), Some(562));
}

#[test]
fn median_time_formats_minutes_of_day() {
    let times = [
        at(2020, 5, 1, 9, 0),
        at(2020, 5, 2, 9, 30),
        at(2020, 5, 3, 10, 0),
    ];
    assert_eq!(get_median_time_of(&times), "09:30");
    assert_eq!(get_median_time_of(&[]), "");
}

#[test]
fn working_time_of_a_single_day() {
    assert_eq!(calc_working_time_min(&day((9, 0), (17, 30), Some(60))), Some(450));
    assert_eq!(calc_working_time_min(&day((9, 0), (17, 30), None)), None);

    let mut no_stop = day((9, 0), (17, 30), Some(60));
    no_stop.stop = None;
    assert_eq!(calc_working_time_min(&no_stop), None);

    // stop before start is passed through
    assert_eq!(calc_working_time_min(&day((10, 0), (9, 0), Some(0))), Some(-60));
}

#[test]
fn stats_over_two_days() {
    let days = [day((9, 0), (12, 0), Some(30)), day((10, 0), (11, 0), Some(0))];
    let stats = calc_working_time_stats(&days);
    assert_eq!(
        stats,
        WorkingTimeStats::Computed {
            total_min: 210,
            median_min: 105,
        }
    );
    if let WorkingTimeStats::Computed {
        total_min,
        median_min,
    } = stats
    {
        assert_eq!(format_duration(total_min), "3:30");
        assert_eq!(format_duration(median_min), "1:45");
    }
}

#[test]
fn stats_scenario_two_thirty_and_one_fifteen() {
    let days = [day((9, 0), (11, 0), Some(60)), day((9, 0), (11, 0), Some(30))];
    match calc_working_time_stats(&days) {
        WorkingTimeStats::Computed {
            total_min,
            median_min,
        } => {
            assert_eq!(format_duration(total_min), "2:30");
            assert_eq!(format_duration(median_min), "1:15");
        }
        WorkingTimeStats::NoResult => panic!("expected a result"),
    }
}

#[test]
fn stats_have_no_result_when_a_counted_day_lacks_a_break() {
    let days = [day((9, 0), (17, 0), Some(60)), day((9, 0), (17, 0), None)];
    assert_eq!(calc_working_time_stats(&days), WorkingTimeStats::NoResult);
}

#[test]
fn stats_skip_incomplete_days() {
    let mut only_start = day((9, 0), (17, 0), None);
    only_start.stop = None;
    let days = [only_start, day((9, 0), (17, 0), Some(60))];
    assert_eq!(
        calc_working_time_stats(&days),
        WorkingTimeStats::Computed {
            total_min: 420,
            median_min: 420,
        }
    );
}

#[test]
fn stats_have_no_result_for_empty_or_negative_input() {
    assert_eq!(calc_working_time_stats(&[]), WorkingTimeStats::NoResult);
    assert_eq!(
        calc_working_time_stats(&[day((9, 0), (9, 30), Some(60))]),
        WorkingTimeStats::NoResult
    );
}

#[test]
fn days_in_month_cover_the_whole_month() {
    let may = get_days_in_month(NaiveDate::from_ymd_opt(2020, 5, 1).unwrap());
    assert_eq!(may.len(), 31);
    assert_eq!(may[0], NaiveDate::from_ymd_opt(2020, 5, 1).unwrap());
    assert_eq!(may[30], NaiveDate::from_ymd_opt(2020, 5, 31).unwrap());

    assert_eq!(
        get_days_in_month(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap()).len(),
        29
    );
    assert_eq!(
        get_days_in_month(NaiveDate::from_ymd_opt(2021, 2, 1).unwrap()).len(),
        28
    );
}

#[test]
fn monthly_filter_keeps_only_matching_prefix() {
    let mut state = RecordsState::new();
    for key in ["20200430", "20200501", "20200531", "20200601"] {
        state.insert(key.into(), DailyRecord::default());
    }

    let may = get_monthly_records_of(NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(), &state);
    let keys: Vec<&str> = may.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["20200501", "20200531"]);
}

#[test]
fn monthly_summary_uses_default_break() {
    let mut state = RecordsState::new();
    state.insert(
        "20200515".into(),
        DailyRecord {
            starts: vec![at(2020, 5, 15, 9, 0)],
            stops: vec![at(2020, 5, 15, 17, 0)],
            ..DailyRecord::default()
        },
    );
    state.insert(
        "20200518".into(),
        DailyRecord {
            starts: vec![at(2020, 5, 18, 10, 0)],
            stops: vec![at(2020, 5, 18, 18, 0)],
            memos: vec![],
            break_time_lengths_min: Some(vec![30]),
        },
    );
    let month = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();

    let without_default = summarize_month(month, &state, None);
    assert_eq!(without_default.working_time, WorkingTimeStats::NoResult);
    assert_eq!(without_default.median_start, "09:30");
    assert_eq!(without_default.median_stop, "17:30");

    let with_default = summarize_month(month, &state, Some(60));
    assert_eq!(
        with_default.working_time,
        WorkingTimeStats::Computed {
            total_min: 420 + 450,
            median_min: 435,
        }
    );
}

#[test]
fn clock_and_duration_formats() {
    assert_eq!(format_clock(60), "01:00");
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_duration(450), "7:30");
    assert_eq!(format_duration(5), "0:05");
}
