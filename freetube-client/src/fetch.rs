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

use std::time::Duration;

use cloneable_errors::{bail, ErrContext, ErrorContext, ResContext};
use freetube_api::{ErrorResponse, FetchInfoRequest, VideoMetadata};
use log::{debug, warn};
use reqwest::{Client, Url};

use crate::{errors::Error, links, placeholder::placeholder_metadata};

/// Result of a metadata lookup
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Real metadata from the backend
    Remote(VideoMetadata),
    /// The backend could not be reached, the metadata is made up
    Placeholder(VideoMetadata),
}

impl FetchOutcome {
    pub fn metadata(&self) -> &VideoMetadata {
        match self {
            FetchOutcome::Remote(meta) | FetchOutcome::Placeholder(meta) => meta,
        }
    }

    pub fn into_metadata(self) -> VideoMetadata {
        match self {
            FetchOutcome::Remote(meta) | FetchOutcome::Placeholder(meta) => meta,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, FetchOutcome::Placeholder(..))
    }
}

/// The request never got a response, ex. refused, reset or timed out connection.
///
/// Builder errors stay errors, they mean the request itself was bad.
fn is_transport_failure(err: &reqwest::Error) -> bool {
    !err.is_builder() && (err.is_connect() || err.is_timeout() || err.is_request())
}

/// Talks to the downloader backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Result<ApiClient, ErrorContext> {
        Self::with_client(base, Client::new())
    }

    /// Client whose requests give up after `timeout`
    pub fn with_timeout(base: Url, timeout: Duration) -> Result<ApiClient, ErrorContext> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client")?;
        Self::with_client(base, client)
    }

    fn with_client(base: Url, client: Client) -> Result<ApiClient, ErrorContext> {
        if base.cannot_be_a_base() {
            bail!("{} cannot be used as the backend base URL", base);
        }
        Ok(ApiClient { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Asks the backend for the metadata of `url`.
    ///
    /// An unreachable backend is not an error, the result is then a [`FetchOutcome::Placeholder`].
    pub async fn fetch_video_info(&self, url: &str) -> Result<FetchOutcome, Error> {
        let request = FetchInfoRequest { url: Some(url.to_owned()) };
        let resp = match self.client.post(links::endpoint(&self.base, "fetch-info")).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) if is_transport_failure(&e) => {
                warn!("Backend at {} is unreachable, falling back to placeholder data: {e}", self.base);
                return Ok(FetchOutcome::Placeholder(placeholder_metadata(url)));
            },
            Err(e) => return Err(e.context("Failed to send the fetch-info request").into()),
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.context("Failed to read the error response")?;
            let message = serde_json::from_slice::<ErrorResponse>(&body).ok()
                .map(|resp| resp.error)
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| format!("Server Error: {}", status.canonical_reason().unwrap_or(status.as_str())));
            debug!("fetch-info for {url} failed with {status}: {message}");
            return Err(Error::Remote(message));
        }

        let metadata = resp.json::<VideoMetadata>().await.context("Failed to deserialize the fetch-info response")?;
        Ok(FetchOutcome::Remote(metadata))
    }

    pub fn download_url(&self, video_url: &str, format_id: &str) -> Url {
        links::build_download_url(&self.base, video_url, format_id)
    }
}
