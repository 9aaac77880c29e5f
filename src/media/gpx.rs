// SPDX-License-Identifier: MPL-2.0
//! GPX track file parsing.
//!
//! Collects every timed fix in a GPX 1.0 or 1.1 document: track points
//! (`trkpt`, across all tracks and segments), route points (`rtept`) and
//! waypoints (`wpt`). Fixes without a `<time>` cannot be correlated with a
//! photo and are skipped.

use crate::domain::track::{TrackIndex, TrackPoint};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Fix elements that carry a position.
const POINT_ELEMENTS: [&[u8]; 3] = [b"trkpt", b"rtept", b"wpt"];

/// Child element whose text is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Elevation,
    Time,
}

/// A fix whose children are still being read.
#[derive(Debug, Default)]
struct PendingPoint {
    latitude: f64,
    longitude: f64,
    elevation: Option<f64>,
    time: Option<DateTime<Utc>>,
}

impl PendingPoint {
    fn finish(self) -> Option<TrackPoint> {
        self.time
            .map(|time| TrackPoint::new(time, self.latitude, self.longitude, self.elevation))
    }
}

/// Parses a GPX document into track points, in document order.
///
/// `source` names the document in error messages.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] for malformed XML, a fix without
/// valid `lat`/`lon` attributes, or an unparseable `<time>` or `<ele>`.
pub fn parse_gpx(bytes: &[u8], source: &str) -> Result<Vec<TrackPoint>> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let fail = |message: String| Error::SourceUnavailable(format!("{source}: {message}"));

    let mut buf = Vec::new();
    let mut points = Vec::new();
    let mut pending: Option<PendingPoint> = None;
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Err(e) => {
                return Err(fail(format!(
                    "invalid XML at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            Ok(Event::Start(ref e)) => {
                let name = e.local_name();
                if POINT_ELEMENTS.contains(&name.as_ref()) {
                    pending = Some(read_position(e).map_err(&fail)?);
                } else if pending.is_some() {
                    capture = match name.as_ref() {
                        b"ele" => Some(Capture::Elevation),
                        b"time" => Some(Capture::Time),
                        _ => None,
                    };
                }
            }
            Ok(Event::Empty(ref e)) => {
                // A self-closing fix has no time and is skipped, but its
                // attributes must still be valid.
                if POINT_ELEMENTS.contains(&e.local_name().as_ref()) {
                    read_position(e).map_err(&fail)?;
                }
            }
            Ok(Event::Text(ref e)) => {
                if let (Some(point), Some(kind)) = (pending.as_mut(), capture) {
                    let text = e
                        .unescape()
                        .map_err(|e| fail(format!("invalid text: {e}")))?
                        .trim()
                        .to_string();
                    match kind {
                        Capture::Elevation => {
                            let elevation = text
                                .parse::<f64>()
                                .map_err(|_| fail(format!("invalid elevation {text:?}")))?;
                            point.elevation = Some(elevation);
                        }
                        Capture::Time => {
                            let time = DateTime::parse_from_rfc3339(&text)
                                .map_err(|_| fail(format!("invalid time {text:?}")))?;
                            point.time = Some(time.with_timezone(&Utc));
                        }
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.local_name();
                if POINT_ELEMENTS.contains(&name.as_ref()) {
                    if let Some(point) = pending.take().and_then(PendingPoint::finish) {
                        points.push(point);
                    }
                }
                capture = None;
            }
            Ok(Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(points)
}

/// Reads the required `lat` and `lon` attributes of a fix element.
fn read_position(element: &BytesStart<'_>) -> std::result::Result<PendingPoint, String> {
    let mut latitude = None;
    let mut longitude = None;

    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| format!("invalid attribute: {e}"))?;
        let target = match attribute.key.local_name().as_ref() {
            b"lat" => &mut latitude,
            b"lon" => &mut longitude,
            _ => continue,
        };
        let value = attribute
            .unescape_value()
            .map_err(|e| format!("invalid attribute value: {e}"))?;
        let parsed = value
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid coordinate {value:?}"))?;
        *target = Some(parsed);
    }

    match (latitude, longitude) {
        (Some(latitude), Some(longitude))
            if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) =>
        {
            Ok(PendingPoint {
                latitude,
                longitude,
                ..PendingPoint::default()
            })
        }
        (Some(latitude), Some(longitude)) => Err(format!(
            "coordinate out of range: {latitude}, {longitude}"
        )),
        _ => Err("point without lat/lon".to_string()),
    }
}

/// Reads and parses a GPX file.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be read or parsed.
pub fn read_gpx_file(path: &Path) -> Result<Vec<TrackPoint>> {
    let bytes = fs::read(path)
        .map_err(|e| Error::SourceUnavailable(format!("{}: {e}", path.display())))?;
    parse_gpx(&bytes, &path.display().to_string())
}

/// Loads every file into a single time-ordered index.
///
/// # Errors
///
/// Fails on the first file that cannot be read or parsed.
pub fn load_track_index<P: AsRef<Path>>(paths: &[P]) -> Result<TrackIndex> {
    let sources = paths
        .iter()
        .map(|path| read_gpx_file(path.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let index = TrackIndex::from_sources(sources);
    tracing::info!(files = paths.len(), points = index.len(), "loaded track data");
    Ok(index)
}
