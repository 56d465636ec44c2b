//! Log file through to published snapshot

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use raven_view::config::AppConfig;
use raven_view::core::{Pipeline, Scheduler, TickOutcome};
use raven_view::sources::LogCursor;
use raven_view_types::{
    ChannelConfig, DisplayConfig, DisplaySource, IndicatorLevel, SoftwareMode, StatusColumns,
    Substate, VisualState,
};

fn append(path: &Path, text: &str) {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    file.write_all(text.as_bytes()).unwrap();
}

fn scheduler_for(config: &AppConfig, path: &Path) -> Scheduler {
    let pipeline = Pipeline::new(config).unwrap();
    Scheduler::new(
        Box::new(LogCursor::new(path)),
        pipeline,
        Duration::from_millis(16),
    )
}

fn three_column_config() -> AppConfig {
    AppConfig {
        row_arity: 3,
        window_capacity: 3,
        channels: vec![ChannelConfig::new("chamber_pressure", "bar", 1, 50.0)],
        indicators: vec![],
        displays: vec![DisplayConfig::new(
            "chamber_pressure",
            "bar",
            DisplaySource::ChannelAverage { channel: 0 },
            10.0,
        )],
        status: StatusColumns::default(),
        ..AppConfig::default()
    }
}

#[test]
fn test_three_line_log_average() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    append(&path, "0,1.0,x\n1,2.0,x\n2,3.0,x\n");

    let mut scheduler = scheduler_for(&three_column_config(), &path);
    assert_eq!(
        scheduler.tick(),
        TickOutcome::Updated {
            decoded: 3,
            rejected: 0
        }
    );
    assert_eq!(scheduler.latest().channels[0].average, 2.0);
}

#[test]
fn test_display_follows_average_per_tick() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let config = AppConfig {
        window_capacity: 1,
        ..three_column_config()
    };
    let mut scheduler = scheduler_for(&config, &path);

    let mut states = Vec::new();
    for value in [5.0, 10.0, 15.0, 3.0] {
        append(&path, &format!("0,{},x\n", value));
        scheduler.tick();
        states.push(scheduler.latest().displays[0].visual);
    }
    assert_eq!(
        states,
        vec![
            VisualState::Normal,
            VisualState::Warning,
            VisualState::Warning,
            VisualState::Normal
        ]
    );
}

#[test]
fn test_quiet_log_publishes_identical_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    append(&path, "0,4.0,x\n");

    let mut scheduler = scheduler_for(&three_column_config(), &path);
    scheduler.tick();
    let cell = scheduler.snapshot_cell();

    assert_eq!(scheduler.tick(), TickOutcome::NoNewRows);
    let first = serde_json::to_vec(&*cell.load()).unwrap();
    assert_eq!(scheduler.tick(), TickOutcome::NoNewRows);
    let second = serde_json::to_vec(&*cell.load()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_then_rotated_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let mut scheduler = scheduler_for(&three_column_config(), &path);

    assert_eq!(scheduler.tick(), TickOutcome::SourceUnavailable);
    assert_eq!(scheduler.latest().channels[0].samples, vec![0.0, 0.0, 0.0]);

    append(&path, "0,1.0,x\n1,2.0,x\n");
    scheduler.tick();

    // Rotated: a shorter file replaces the old one
    fs::write(&path, "0,7.0,x\n").unwrap();
    assert_eq!(
        scheduler.tick(),
        TickOutcome::Updated {
            decoded: 1,
            rejected: 0
        }
    );
    assert_eq!(scheduler.latest().channels[0].samples, vec![1.0, 2.0, 7.0]);
    assert_eq!(scheduler.stats().unavailable_polls, 1);
}

#[test]
fn test_malformed_rows_are_skipped_for_good() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    append(&path, "0,1.0,x\n0,abc,x\n0,2.0\n0,3.0,x\n");

    let mut scheduler = scheduler_for(&three_column_config(), &path);
    assert_eq!(
        scheduler.tick(),
        TickOutcome::Updated {
            decoded: 2,
            rejected: 2
        }
    );
    assert_eq!(scheduler.latest().channels[0].samples, vec![0.0, 1.0, 3.0]);
    assert_eq!(scheduler.tick(), TickOutcome::NoNewRows);
}

#[test]
fn test_raven_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    append(
        &path,
        "1.0,d,5000,61.0,50.3,31.7,812.0,21.5,0,180.2,19.0,240.5,0,1,0,0,1,0,1,4,1,Igniter on\n\
         1.1,d,5016,61.2,50.1,32.0,820.0,21.5,0,181.0,19.0,250.0,0,1,1,0,1,1,1,4,2, \n",
    );

    let config = AppConfig::default();
    let mut scheduler = scheduler_for(&config, &path);
    scheduler.tick();
    let snapshot = scheduler.latest();

    assert_eq!(snapshot.channels.len(), 8);
    let bottle = snapshot.channel("bottle_pressure").unwrap();
    assert_eq!(bottle.samples.len(), 625);
    assert_eq!(bottle.latest(), Some(61.2));
    assert!(bottle.above_warning);

    assert_eq!(
        snapshot.indicator("ignition_relay").unwrap().level,
        IndicatorLevel::On
    );
    assert_eq!(snapshot.status.mode, Some(SoftwareMode::Sequence));
    assert_eq!(snapshot.status.substate, Some(Substate::ValveOn));
    assert_eq!(snapshot.status.controller_time_ms, Some(5016.0));
    assert_eq!(snapshot.status.messages, vec!["Igniter on"]);
}
