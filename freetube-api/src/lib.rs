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

//! Wire types shared by the backend server and its clients.
//!
//! Field names follow the JSON shape the web UI consumes, which is why most
//! structs carry `camelCase` renames while [`NormalizedFormat`] keeps its
//! snake case `filesize_approx_mb`.

use serde::{Deserialize, Serialize};

/// Format id of the synthetic "convert to mp3" entry
pub const MP3_FORMAT_ID: &str = "mp3-high";
/// License string reported when the extractor has none
pub const STANDARD_LICENSE: &str = "Standard YouTube License";
/// Maximum number of entries in [`VideoMetadata::formats`]
pub const MAX_FORMATS: usize = 12;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NormalizedFormat {
    pub id: String,
    pub ext: String,
    pub resolution: String,
    pub note: String,
    /// 0 means unknown, usually a stream without a reported size
    pub filesize_approx_mb: f64,
}

impl NormalizedFormat {
    /// The converted-on-the-fly audio entry that heads every format list
    pub fn mp3_high() -> NormalizedFormat {
        NormalizedFormat {
            id: MP3_FORMAT_ID.to_owned(),
            ext: "mp3".to_owned(),
            resolution: "Audio".to_owned(),
            note: "High Quality (Converted)".to_owned(),
            filesize_approx_mb: 0.,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<String>,
    pub views: Option<u64>,
    pub upload_date: Option<String>,
    pub license: String,
    /// Always true, downloads are no longer gated by license
    pub is_copyright_free: bool,
    #[serde(rename = "isCC", default)]
    pub is_cc: bool,
    pub formats: Vec<NormalizedFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_offline: Option<bool>,
}

impl VideoMetadata {
    pub fn is_offline_placeholder(&self) -> bool {
        self.server_offline == Some(true)
    }

    /// Canonical watch URL, used to rebuild the download link from a result
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct FetchInfoRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DownloadQuery {
    pub url: Option<String>,
    pub format_id: Option<String>,
    pub title: Option<String>,
}

/// Body of every non-success response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OnlineResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StatusResponse {
    pub server_version: Option<String>,
    pub server_startup_timestamp: Option<i64>,
    pub extractor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_uses_ui_field_names() {
        let meta = VideoMetadata {
            id: "dQw4w9WgXcQ".to_owned(),
            title: "t".to_owned(),
            thumbnail: None,
            channel: Some("c".to_owned()),
            duration: Some("3:32".to_owned()),
            views: Some(10),
            upload_date: Some("20091025".to_owned()),
            license: STANDARD_LICENSE.to_owned(),
            is_copyright_free: true,
            is_cc: false,
            formats: vec![NormalizedFormat::mp3_high()],
            server_offline: None,
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["uploadDate"], "20091025");
        assert_eq!(value["isCopyrightFree"], true);
        assert_eq!(value["isCC"], false);
        assert_eq!(value["formats"][0]["filesize_approx_mb"], 0.0);
        assert!(value.get("serverOffline").is_none());
    }

    #[test]
    fn offline_flag_is_read_back() {
        let value = serde_json::json!({
            "id": "abcdefghijk",
            "title": "Demo",
            "thumbnail": null,
            "channel": null,
            "duration": null,
            "views": null,
            "uploadDate": null,
            "license": STANDARD_LICENSE,
            "isCopyrightFree": true,
            "formats": [],
            "serverOffline": true,
        });
        let meta: VideoMetadata = serde_json::from_value(value).unwrap();
        assert!(meta.is_offline_placeholder());
        assert!(!meta.is_cc);
        assert_eq!(meta.watch_url(), "https://www.youtube.com/watch?v=abcdefghijk");
    }
}
