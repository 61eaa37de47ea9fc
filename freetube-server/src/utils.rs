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

use actix_web::http::header::{HeaderMap, TryIntoHeaderPair};

const MAX_FILENAME_CHARS: usize = 50;

pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Filename for the `Content-Disposition` header, without the extension
pub fn safe_filename_stem(title: Option<&str>) -> String {
    let title = title.filter(|t| !t.is_empty()).unwrap_or("video");
    title.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_FILENAME_CHARS)
        .collect()
}

pub trait HeaderMapExt {
    fn append_header<H: TryIntoHeaderPair>(&mut self, header: H) -> std::result::Result<(), H::Error>;
}

impl HeaderMapExt for HeaderMap {
    fn append_header<H: TryIntoHeaderPair>(&mut self, header: H) -> std::result::Result<(), H::Error> {
        let (name, value) = header.try_into_pair()?;
        self.append(name, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_youtube_domains() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(!is_youtube_url("https://vimeo.com/123"));
        assert!(!is_youtube_url(""));
    }

    #[test]
    fn sanitizes_titles() {
        assert_eq!(safe_filename_stem(Some("My Video: part 1!")), "My_Video__part_1_");
        assert_eq!(safe_filename_stem(Some("Żółw")), "___w");
        assert_eq!(safe_filename_stem(None), "video");
        assert_eq!(safe_filename_stem(Some("")), "video");
        assert_eq!(safe_filename_stem(Some(&"a".repeat(80))).len(), 50);
    }
}
