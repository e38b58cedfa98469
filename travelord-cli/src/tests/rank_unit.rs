//! End-to-end coverage of the rank command against temporary files.

use super::*;
use crate::rank::{PointRecord, RankConfig, rank_with_config};
use camino::Utf8PathBuf;
use geo::Coord;
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;
use travelord_core::{RankOptions, RankWeights};

const SAMPLE_POINTS: &str = r#"[
  { "lat": 10, "lng": 20 },
  { "lat": 30, "lng": 40 },
  { "lat": 50, "lng": 60 }
]"#;

struct RankFixture {
    _dir: TempDir,
    input: Utf8PathBuf,
    output: Utf8PathBuf,
}

#[fixture]
fn sample_input() -> RankFixture {
    let dir = TempDir::new().expect("tempdir");
    let input = Utf8PathBuf::from_path_buf(dir.path().join("points.json")).expect("utf8 path");
    let output = Utf8PathBuf::from_path_buf(dir.path().join("ranked.json")).expect("utf8 path");
    fs::write(&input, SAMPLE_POINTS).expect("write sample points");
    RankFixture {
        _dir: dir,
        input,
        output,
    }
}

fn reference_config(fixture: &RankFixture, output: Option<Utf8PathBuf>) -> RankConfig {
    RankConfig {
        input: fixture.input.clone(),
        start: Coord { x: 20.0, y: 10.0 },
        end: Coord { x: 60.0, y: 50.0 },
        options: RankOptions {
            weights: RankWeights {
                distance: 0.6,
                bearing: 0.4,
            },
            threshold: 45.0,
        },
        output,
    }
}

#[rstest]
fn ranks_points_to_compact_stdout_json(sample_input: RankFixture) {
    let config = reference_config(&sample_input, None);
    let mut writer = Vec::new();

    rank_with_config(&config, &mut writer).expect("rank succeeds");

    let ranked: Vec<PointRecord> =
        serde_json::from_slice(&writer).expect("stdout payload parses");
    assert_eq!(ranked.len(), 3);
    // The point coincident with the start has zero distance and must rank
    // first.
    assert_eq!(
        ranked.first(),
        Some(&PointRecord {
            lat: 10.0,
            lng: 20.0
        })
    );
}

#[rstest]
fn writes_pretty_output_file_and_reports_counts(sample_input: RankFixture) {
    let output = sample_input.output.clone();
    let config = reference_config(&sample_input, Some(output.clone()));
    let mut writer = Vec::new();

    rank_with_config(&config, &mut writer).expect("rank succeeds");

    let payload = fs::read_to_string(output.as_std_path()).expect("output file exists");
    let ranked: Vec<PointRecord> = serde_json::from_str(&payload).expect("file payload parses");
    assert_eq!(ranked.len(), 3);
    // Pretty printing spreads the array over multiple lines.
    assert!(payload.lines().count() > 3);

    let messages = String::from_utf8(writer).expect("status lines are UTF-8");
    assert!(messages.contains("data written to"));
    assert!(messages.contains("length was 3, now is 3"));
}

#[rstest]
fn surfaces_open_errors_for_missing_input(sample_input: RankFixture) {
    let mut config = reference_config(&sample_input, None);
    config.input = Utf8PathBuf::from_path_buf(sample_input._dir.path().join("absent.json"))
        .expect("utf8 path");
    let mut writer = Vec::new();

    let err = rank_with_config(&config, &mut writer).expect_err("missing input errors");
    match err {
        CliError::OpenInput { path, .. } => assert_eq!(path, config.input),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn surfaces_parse_errors_for_malformed_input(sample_input: RankFixture) {
    fs::write(&sample_input.input, b"{ not json ]").expect("overwrite input");
    let config = reference_config(&sample_input, None);
    let mut writer = Vec::new();

    let err = rank_with_config(&config, &mut writer).expect_err("malformed input errors");
    match err {
        CliError::ParseInput { path, .. } => assert_eq!(path, config.input),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn threshold_filters_points_out_of_the_corridor(sample_input: RankFixture) {
    // A point due east of the start deviates far beyond a tight corridor.
    let points = r#"[
      { "lat": 10, "lng": 20 },
      { "lat": 10, "lng": 45 },
      { "lat": 50, "lng": 60 }
    ]"#;
    fs::write(&sample_input.input, points).expect("overwrite input");
    let mut config = reference_config(&sample_input, None);
    config.options.threshold = 20.0;
    let mut writer = Vec::new();

    rank_with_config(&config, &mut writer).expect("rank succeeds");

    let ranked: Vec<PointRecord> =
        serde_json::from_slice(&writer).expect("stdout payload parses");
    assert_eq!(ranked.len(), 1);
    assert_eq!(
        ranked.first(),
        Some(&PointRecord {
            lat: 50.0,
            lng: 60.0
        })
    );
}
