// SPDX-License-Identifier: MPL-2.0
use chrono::{TimeZone, Utc};
use gpxif::app::{self, RunSummary, TagOptions};
use gpxif::application::port::{MetadataError, MetadataReader, MetadataWriter, ZoneResolver};
use gpxif::application::service::{derive_expected_local_time, TrackSource};
use gpxif::config::{self, Config, TrackSourceConfig};
use gpxif::directory_scanner::PhotoList;
use gpxif::domain::metadata::{ExifField, FieldValue, GpsCoordinates};
use gpxif::domain::track::ResolveError;
use gpxif::error::Error;
use gpxif::infrastructure::TzfZoneResolver;
use gpxif::media::{load_track_index, parse_gpx};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::tempdir;

const TWO_POINT_TRACK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="integration" xmlns="http://www.topografix.com/GPX/1/1">
  <trk><trkseg>
    <trkpt lat="51.56734" lon="-0.13843"><ele>75</ele><time>2022-08-03T01:18:07Z</time></trkpt>
    <trkpt lat="51.56734" lon="-0.13843"><ele>75</ele><time>2022-08-03T23:18:07Z</time></trkpt>
  </trkseg></trk>
</gpx>"#;

#[derive(Default)]
struct InMemoryExif {
    fields: Mutex<HashMap<(PathBuf, ExifField), FieldValue>>,
}

impl InMemoryExif {
    fn insert(&self, path: &Path, field: ExifField, value: &str) {
        self.fields
            .lock()
            .unwrap()
            .insert((path.to_path_buf(), field), FieldValue::from(value));
    }
}

impl MetadataReader for InMemoryExif {
    fn read_field(&self, path: &Path, field: ExifField) -> Result<FieldValue, MetadataError> {
        self.fields
            .lock()
            .unwrap()
            .get(&(path.to_path_buf(), field))
            .cloned()
            .ok_or(MetadataError::FieldNotFound(field))
    }
}

impl MetadataWriter for InMemoryExif {
    fn write_field(
        &self,
        path: &Path,
        field: ExifField,
        value: &FieldValue,
    ) -> Result<(), MetadataError> {
        self.fields
            .lock()
            .unwrap()
            .insert((path.to_path_buf(), field), value.clone());
        Ok(())
    }
}

struct London;

impl ZoneResolver for London {
    fn zone_name(&self, _latitude: f64, _longitude: f64) -> Option<String> {
        Some("Europe/London".to_string())
    }
}

#[test]
fn nearest_point_is_chosen_inside_the_track() {
    let points = parse_gpx(TWO_POINT_TRACK.as_bytes(), "track.gpx").expect("parse");
    let index = gpxif::domain::track::TrackIndex::new(points);

    let point = index
        .resolve(Utc.with_ymd_and_hms(2022, 8, 3, 17, 57, 55).unwrap())
        .expect("resolve");
    assert_eq!(
        point.timestamp(),
        Utc.with_ymd_and_hms(2022, 8, 3, 23, 18, 7).unwrap()
    );
}

#[test]
fn instants_near_the_track_clamp_and_far_ones_fail() {
    let dir = tempdir().expect("temp dir");
    let gpx = dir.path().join("track.gpx");
    fs::write(&gpx, TWO_POINT_TRACK).expect("write gpx");
    let index = load_track_index(&[gpx]).expect("load");

    let clamped = index
        .resolve(Utc.with_ymd_and_hms(2022, 8, 2, 23, 18, 7).unwrap())
        .expect("clamp");
    assert_eq!(
        clamped.timestamp(),
        Utc.with_ymd_and_hms(2022, 8, 3, 1, 18, 7).unwrap()
    );

    assert!(matches!(
        index.resolve(Utc.with_ymd_and_hms(2022, 8, 2, 0, 0, 0).unwrap()),
        Err(ResolveError::OutOfRange { .. })
    ));
}

#[test]
fn config_file_with_track_source_loads() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    let config = Config {
        track_source: Some(TrackSourceConfig {
            url_template: "https://example.com/gpx?from={from}&to={to}".to_string(),
            username: "example".to_string(),
            password: "password".to_string(),
        }),
    };

    config::save_to_path(&config, &path).expect("save");
    assert_eq!(config::load_from_path(&path).expect("load"), config);
}

#[test]
fn scanner_lists_jpegs_in_name_order() {
    let dir = tempdir().expect("temp dir");
    for name in ["b.JPG", "a.jpeg", "c.gpx", "d.png"] {
        fs::write(dir.path().join(name), b"data").expect("write");
    }

    let list = PhotoList::scan_directory(dir.path()).expect("scan");
    let names: Vec<_> = list
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, ["a.jpeg", "b.JPG"]);
}

#[test]
fn offline_zone_lookup_gives_british_summer_time() {
    let derived = derive_expected_local_time(
        &TzfZoneResolver::new(),
        Utc.with_ymd_and_hms(2022, 8, 3, 17, 57, 55).unwrap(),
        GpsCoordinates::new(51.56734, -0.13843),
    )
    .expect("derive");
    assert_eq!(derived.date_time, "2022:08:03 18:57:55");
    assert_eq!(derived.offset, "+01:00");
}

#[test]
fn full_run_is_idempotent() {
    let dir = tempdir().expect("temp dir");
    let gpx = dir.path().join("track.gpx");
    fs::write(&gpx, TWO_POINT_TRACK).expect("write gpx");
    let photo = dir.path().join("IMG_0001.jpg");
    fs::write(&photo, b"jpeg").expect("write photo");

    let codec = InMemoryExif::default();
    codec.insert(&photo, ExifField::DateTimeOriginal, "2022:08:03 17:57:55");
    let options = TagOptions {
        images: dir.path().to_path_buf(),
        source: TrackSource::Files(vec![gpx]),
        config_path: None,
        dry_run: false,
    };

    let first = app::run_with(&codec, &London, &options).expect("first run");
    assert_eq!(first.applied, 3);
    assert_eq!(
        codec.read_text(&photo, ExifField::OffsetTimeOriginal),
        Ok("+01:00".to_string())
    );
    assert_eq!(
        codec.read_text(&photo, ExifField::GpsLongitudeRef),
        Ok("W".to_string())
    );

    let second = app::run_with(&codec, &London, &options).expect("second run");
    assert_eq!(
        second,
        RunSummary {
            processed: 1,
            skipped: 0,
            planned: 0,
            applied: 0,
        }
    );
}

#[test]
fn missing_track_file_aborts_the_run() {
    let dir = tempdir().expect("temp dir");
    let options = TagOptions {
        images: dir.path().to_path_buf(),
        source: TrackSource::Files(vec![dir.path().join("missing.gpx")]),
        config_path: None,
        dry_run: true,
    };

    let err = app::run_with(&InMemoryExif::default(), &London, &options).unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable(_)));
}
