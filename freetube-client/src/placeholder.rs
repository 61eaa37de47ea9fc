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

use chrono::{Local, NaiveDate};
use freetube_api::{NormalizedFormat, VideoMetadata, MP3_FORMAT_ID, STANDARD_LICENSE};

use crate::{constants::FALLBACK_VIDEO_ID, youtube::{extract_video_id, thumbnail_url}};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn demo_format(id: &str, ext: &str, resolution: &str, note: &str, filesize_approx_mb: f64) -> NormalizedFormat {
    NormalizedFormat {
        id: id.to_owned(),
        ext: ext.to_owned(),
        resolution: resolution.to_owned(),
        note: note.to_owned(),
        filesize_approx_mb,
    }
}

/// Stand-in result shown while the backend is unreachable, so the UI still has something to render
pub fn placeholder_metadata(url: &str) -> VideoMetadata {
    placeholder_metadata_on(url, Local::now().date_naive())
}

pub fn placeholder_metadata_on(url: &str, today: NaiveDate) -> VideoMetadata {
    let id = extract_video_id(url).unwrap_or(FALLBACK_VIDEO_ID);
    VideoMetadata {
        id: id.to_owned(),
        title: "Demo Video (Backend Offline)".to_owned(),
        thumbnail: Some(thumbnail_url(id)),
        channel: Some("Demo Channel".to_owned()),
        duration: Some("3:45".to_owned()),
        views: Some(1_000_000),
        upload_date: Some(today.format(DATE_FORMAT).to_string()),
        license: STANDARD_LICENSE.to_owned(),
        is_copyright_free: true,
        is_cc: false,
        formats: vec![
            demo_format("mp4-1080p", "mp4", "1080p", "Demo Mode", 150.),
            demo_format("mp4-720p", "mp4", "720p", "Demo Mode", 80.),
            demo_format(MP3_FORMAT_ID, "mp3", "Audio", "High Quality", 5.),
        ],
        server_offline: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn uses_id_from_url() {
        let meta = placeholder_metadata_on("https://youtu.be/abcdefghijk", day());
        assert_eq!(meta.id, "abcdefghijk");
        assert_eq!(meta.thumbnail.as_deref(), Some("https://img.youtube.com/vi/abcdefghijk/maxresdefault.jpg"));
        assert_eq!(meta.upload_date.as_deref(), Some("2026-10-16"));
        assert!(meta.is_offline_placeholder());
        assert!(meta.is_copyright_free);
        assert!(!meta.is_cc);
        assert_eq!(meta.license, STANDARD_LICENSE);
    }

    #[test]
    fn falls_back_to_demo_id() {
        let meta = placeholder_metadata_on("not a url", day());
        assert_eq!(meta.id, FALLBACK_VIDEO_ID);
        assert_eq!(meta.title, "Demo Video (Backend Offline)");
    }

    #[test]
    fn offers_three_demo_formats() {
        let meta = placeholder_metadata("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        let formats: Vec<(&str, f64)> = meta.formats.iter().map(|f| (f.id.as_str(), f.filesize_approx_mb)).collect();
        assert_eq!(formats, [("mp4-1080p", 150.), ("mp4-720p", 80.), ("mp3-high", 5.)]);
        assert_eq!(meta.formats[2].note, "High Quality");
    }
}
