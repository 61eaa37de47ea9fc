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

use crate::constants::VIDEO_ID_EXTRACTION_REGEX;

const VIDEO_ID_LEN: usize = 11;

/// Finds the video id in the url formats people usually paste.
///
/// Only ids of the exact YouTube length are accepted.
pub fn extract_video_id(url: &str) -> Option<&str> {
    let id = VIDEO_ID_EXTRACTION_REGEX.captures(url)?.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then_some(id)
}

pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ids() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ#t=1",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn keeps_any_eleven_char_token() {
        assert_eq!(extract_video_id("https://youtu.be/abcdefghijk"), Some("abcdefghijk"));
        assert_eq!(extract_video_id("https://www.youtube.com/u/1/abc-def_ghi"), Some("abc-def_ghi"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQQ"), None);
        assert_eq!(extract_video_id("https://example.com/"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn builds_thumbnail_urls() {
        assert_eq!(thumbnail_url("dQw4w9WgXcQ"), "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg");
    }
}
