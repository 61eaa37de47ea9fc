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

use std::{io, path::{Path, PathBuf}, pin::Pin, process::Stdio, sync::Arc, task::{ready, Context, Poll}};

use actix_web::{rt::spawn, web::Bytes};
use cloneable_errors::{bail, ErrorContext, ResContext};
use freetube_api::MP3_FORMAT_ID;
use futures::{Stream, StreamExt};
use log::{debug, info, warn};
use tokio::{io::{AsyncBufReadExt, BufReader}, process::{Child, ChildStderr, ChildStdout, Command}};
use tokio_stream::wrappers::LinesStream;
use tokio_util::io::ReaderStream;

use crate::state::ExtractorConfig;

/// What the extractor is asked to write to stdout during a download
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DownloadKind {
    /// Best audio, converted to mp3 by the extractor
    ConvertedAudio,
    /// A raw extractor format, served as mp4
    Video,
}

impl DownloadKind {
    pub fn for_format(format_id: &str) -> DownloadKind {
        if format_id == MP3_FORMAT_ID {
            DownloadKind::ConvertedAudio
        } else {
            DownloadKind::Video
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DownloadKind::ConvertedAudio => "mp3",
            DownloadKind::Video => "mp4",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            DownloadKind::ConvertedAudio => "audio/mpeg",
            DownloadKind::Video => "video/mp4",
        }
    }
}

/// Handle for spawning the external media extractor
#[derive(Clone, Debug)]
pub struct Extractor {
    binary: PathBuf,
    extra_args: Arc<[String]>,
}

impl From<&ExtractorConfig> for Extractor {
    fn from(value: &ExtractorConfig) -> Self {
        Extractor {
            binary: value.binary.clone(),
            extra_args: value.extra_args.clone().into(),
        }
    }
}

impl Extractor {
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(self.extra_args.iter())
            .stdin(Stdio::null());
        cmd
    }

    /// Runs the extractor in metadata mode and returns its raw stdout
    pub async fn dump_json(&self, url: &str) -> Result<Vec<u8>, ErrorContext> {
        let output = self.command()
            .args(["--dump-json", "--no-playlist", "--", url])
            .kill_on_drop(true)
            .output().await
            .with_context(|| format!("Failed to run the extractor ({})", self.binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("Extractor exited with {}: {}", output.status, stderr.trim());
        }
        Ok(output.stdout)
    }

    pub fn download_args<'a>(url: &'a str, format_id: &'a str) -> Vec<&'a str> {
        let mut args = vec!["--no-playlist", "--output", "-"];
        match DownloadKind::for_format(format_id) {
            DownloadKind::ConvertedAudio => args.extend(["-x", "--audio-format", "mp3"]),
            DownloadKind::Video => args.extend(["-f", format_id]),
        }
        args.extend(["--", url]);
        args
    }

    /// Starts a download, with the media bytes available from the returned stream
    pub fn stream(&self, url: &str, format_id: &str) -> Result<ExtractorStream, ErrorContext> {
        let mut child = self.command()
            .args(Self::download_args(url, format_id))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn the extractor ({})", self.binary.display()))?;

        let stdout = child.stdout.take().context("Extractor stdout was not captured")?;
        if let Some(stderr) = child.stderr.take() {
            spawn(log_stderr(stderr));
        }
        info!("Started {} download of {url} (format {format_id}, pid {:?})", DownloadKind::for_format(format_id), child.id());
        Ok(ExtractorStream {
            child,
            stdout: ReaderStream::new(stdout),
            finished: false,
        })
    }
}

/// Keeps the stderr pipe drained so the extractor never blocks on it
async fn log_stderr(stderr: ChildStderr) {
    let mut lines = LinesStream::new(BufReader::new(stderr).lines());
    while let Some(line) = lines.next().await {
        match line {
            Ok(line) => debug!("extractor: {line}"),
            Err(e) => {
                warn!("Failed to read extractor stderr: {e}");
                break;
            },
        }
    }
}

/// Stdout of a running extractor process.
///
/// Reads happen only when the consumer polls, so a slow client slows the extractor down
/// instead of buffering the whole file. Dropping the stream before the extractor finished
/// writing (ex. because the client disconnected) kills the process.
pub struct ExtractorStream {
    child: Child,
    stdout: ReaderStream<ChildStdout>,
    finished: bool,
}

impl ExtractorStream {
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }
}

impl Stream for ExtractorStream {
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let item = ready!(Pin::new(&mut this.stdout).poll_next(cx));
        if item.is_none() {
            this.finished = true;
        }
        Poll::Ready(item)
    }
}

impl Drop for ExtractorStream {
    fn drop(&mut self) {
        match self.child.try_wait() {
            Ok(Some(status)) if !status.success() => warn!("Download process exited with {status}"),
            Ok(Some(_)) => {},
            // stdout closed, the process is just wrapping up
            Ok(None) if self.finished => {},
            Ok(None) => {
                info!("Client disconnected, terminating the extractor (pid {:?})", self.child.id());
                if let Err(e) = self.child.start_kill() {
                    warn!("Failed to kill the extractor: {e}");
                }
            },
            Err(e) => warn!("Failed to check the extractor status: {e}"),
        }
    }
}
