/* This file is part of the FreeTube Downloader project
*
*  Copyright (C) 2026 FreeTube Downloader contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::cmp::Ordering;

use freetube_api::{NormalizedFormat, VideoMetadata, MAX_FORMATS, STANDARD_LICENSE};
use log::debug;

use crate::{dedupe::FormatKeySet, errors::ParseError, types::{RawFormatDescriptor, RawVideoRecord}};

pub const CC_LICENSE_MARKER: &str = "creative commons";
pub const CC_DESCRIPTION_MARKER: &str = "creative commons attribution";

/// Decides whether a raw format is offered to the user at all.
///
/// Only muxed mp4 and audio-only m4a make it through.
pub fn is_offered(format: &RawFormatDescriptor) -> bool {
    match format.ext.as_str() {
        "mp4" => format.has_audio() && format.has_video(),
        "m4a" => true,
        _ => false,
    }
}

pub fn parse_record(data: &[u8]) -> Result<RawVideoRecord, ParseError> {
    Ok(serde_json::from_slice(data)?)
}

pub fn is_creative_commons(license: Option<&str>, description: Option<&str>) -> bool {
    license.is_some_and(|l| l.to_lowercase().contains(CC_LICENSE_MARKER))
        || description.is_some_and(|d| d.to_lowercase().contains(CC_DESCRIPTION_MARKER))
}

/// Descending height (unknown last), then descending size
fn compare_formats(a: &RawFormatDescriptor, b: &RawFormatDescriptor) -> Ordering {
    b.height.unwrap_or(0).cmp(&a.height.unwrap_or(0))
        .then_with(|| b.filesize.unwrap_or(0.).total_cmp(&a.filesize.unwrap_or(0.)))
}

fn bytes_to_mb(bytes: f64) -> f64 {
    (bytes / 1024. / 1024. * 100.).round() / 100.
}

impl From<&RawFormatDescriptor> for NormalizedFormat {
    fn from(value: &RawFormatDescriptor) -> Self {
        NormalizedFormat {
            id: value.format_id.clone(),
            ext: value.ext.clone(),
            resolution: match value.height {
                Some(h) if h > 0 => format!("{h}p"),
                _ => "Audio".to_owned(),
            },
            note: value.format_note.clone().unwrap_or_default(),
            filesize_approx_mb: match value.filesize {
                Some(size) if size > 0. => bytes_to_mb(size),
                _ => 0.,
            },
        }
    }
}

pub fn normalize_formats(raw: &[RawFormatDescriptor]) -> Vec<NormalizedFormat> {
    let mut candidates: Vec<&RawFormatDescriptor> = raw.iter()
        .filter(|f| is_offered(f))
        .collect();
    // stable, equal keys keep the extractor's order
    candidates.sort_by(|a, b| compare_formats(a, b));

    let mut seen = FormatKeySet::with_capacity(candidates.len());
    let mut formats = Vec::with_capacity(MAX_FORMATS);
    formats.push(NormalizedFormat::mp3_high());
    for format in candidates.into_iter().map(NormalizedFormat::from) {
        if formats.len() == MAX_FORMATS {
            break;
        }
        if seen.insert(&format) {
            formats.push(format);
        }
    }
    debug!("Normalized {} raw formats into {} entries", raw.len(), formats.len());
    formats
}

pub fn normalize(record: &RawVideoRecord) -> VideoMetadata {
    VideoMetadata {
        id: record.id.clone(),
        title: record.title.clone(),
        thumbnail: record.thumbnail.clone(),
        channel: record.uploader.clone(),
        duration: record.duration_string.clone(),
        views: record.view_count,
        upload_date: record.upload_date.clone(),
        license: record.license.clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| STANDARD_LICENSE.to_owned()),
        is_copyright_free: true,
        is_cc: is_creative_commons(record.license.as_deref(), record.description.as_deref()),
        formats: normalize_formats(&record.formats),
        server_offline: None,
    }
}
