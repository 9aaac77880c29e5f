// SPDX-License-Identifier: MPL-2.0
//! Downloading GPX data for a date range from a configured endpoint.

use crate::config::TrackSourceConfig;
use crate::domain::track::TrackPoint;
use crate::error::{Error, Result};
use crate::media::gpx;
use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Substitutes `{from}` and `{to}` in `template` with UTC dates.
#[must_use]
pub fn expand_url_template(template: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    template
        .replace("{from}", &from.format(DATE_FORMAT).to_string())
        .replace("{to}", &to.format(DATE_FORMAT).to_string())
}

/// Fetches and parses the track covering `from..=to`.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the request fails, the server
/// answers with anything other than `200 OK`, or the body is not valid GPX.
pub fn fetch_track(
    source: &TrackSourceConfig,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<TrackPoint>> {
    let url = expand_url_template(&source.url_template, from, to);
    tracing::info!(%url, "fetching track data");

    let client = reqwest::blocking::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("gpxif/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

    let response = client
        .get(&url)
        .basic_auth(&source.username, Some(&source.password))
        .send()
        .map_err(|e| Error::SourceUnavailable(format!("failed to get GPX data: {e}")))?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(Error::SourceUnavailable(format!(
            "failed to get GPX data, HTTP status: {}",
            response.status()
        )));
    }

    let body = response
        .bytes()
        .map_err(|e| Error::SourceUnavailable(format!("failed to read GPX data: {e}")))?;
    let points = gpx::parse_gpx(&body, &url)?;
    tracing::debug!(points = points.len(), "fetched track data");
    Ok(points)
}
