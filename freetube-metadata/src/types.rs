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

use serde::Deserialize;

/// A single video record as printed by `yt-dlp --dump-json`.
///
/// Only the fields used by the normalizer are modelled, everything else in the
/// (very large) record is ignored.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RawVideoRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub duration_string: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub formats: Vec<RawFormatDescriptor>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RawFormatDescriptor {
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    /// in bytes
    #[serde(default)]
    pub filesize: Option<f64>,
    #[serde(default)]
    pub format_note: Option<String>,
}

impl RawFormatDescriptor {
    /// A missing codec field does not mean the stream is absent, only an explicit `"none"` does
    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }

    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }
}
