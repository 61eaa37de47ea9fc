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

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// `base` with `name` appended as the last path segment
pub fn endpoint(base: &Url, name: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(name);
    }
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Link that makes the backend stream `video_url` in the given format
pub fn build_download_url(base: &Url, video_url: &str, format_id: &str) -> Url {
    let mut url = endpoint(base, "download");
    url.set_query(Some(&format!("url={}&format_id={}", encode_component(video_url), encode_component(format_id))));
    url
}

/// Adds the title the backend names the downloaded file after
pub fn with_title(mut url: Url, title: &str) -> Url {
    let query = match url.query() {
        Some(query) if !query.is_empty() => format!("{query}&title={}", encode_component(title)),
        _ => format!("title={}", encode_component(title)),
    };
    url.set_query(Some(&query));
    url
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
    }

    #[test]
    fn encodes_like_uri_components() {
        assert_eq!(encode_component("https://youtu.be/x?a=1&b=2"), "https%3A%2F%2Fyoutu.be%2Fx%3Fa%3D1%26b%3D2");
        assert_eq!(encode_component("a b+c"), "a%20b%2Bc");
        assert_eq!(encode_component("keep-_.!~*()"), "keep-_.!~*()");
    }

    #[test]
    fn builds_download_url() {
        let base = Url::parse("http://localhost:3001").unwrap();
        let url = build_download_url(&base, "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1", "mp3-high");
        assert_eq!(
            url.as_str(),
            "http://localhost:3001/download?url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ%26t%3D1&format_id=mp3-high",
        );
    }

    #[test]
    fn keeps_base_path() {
        let base = Url::parse("https://example.com/freetube/api/").unwrap();
        assert_eq!(endpoint(&base, "fetch-info").as_str(), "https://example.com/freetube/api/fetch-info");
        let base = Url::parse("https://example.com/freetube/api").unwrap();
        assert_eq!(endpoint(&base, "fetch-info").as_str(), "https://example.com/freetube/api/fetch-info");
    }

    #[test]
    fn parameters_survive_the_trip() {
        let base = Url::parse("http://localhost:3001/").unwrap();
        let video_url = "https://youtu.be/dQw4w9WgXcQ?si=a+b&t=10#frag";
        let title = "Zażółć gęślą jaźń & friends = 100%";
        let url = with_title(build_download_url(&base, video_url, "22"), title);
        let params = query_map(&url);
        assert_eq!(params["url"], video_url);
        assert_eq!(params["format_id"], "22");
        assert_eq!(params["title"], title);
        assert_eq!(url.path(), "/download");
    }

    #[test]
    fn plain_inputs_round_trip() {
        let base = Url::parse("http://localhost:3001").unwrap();
        let params = query_map(&build_download_url(&base, "https://x/y?v=1", "mp4-720p"));
        assert_eq!(params["url"], "https://x/y?v=1");
        assert_eq!(params["format_id"], "mp4-720p");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn title_on_bare_url() {
        let url = with_title(Url::parse("http://localhost:3001/download").unwrap(), "a b");
        assert_eq!(url.query(), Some("title=a%20b"));
    }
}
