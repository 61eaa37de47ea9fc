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

use std::{process::ExitCode, time::Duration};

use clap::{Parser, Subcommand};
use cloneable_errors::{ErrorContext, ResContext};
use env_logger::Env;
use freetube_api::VideoMetadata;
use freetube_client::{assistant::LegalAssistant, constants::DEFAULT_BACKEND_URL, links, state::{Action, AppState}, ApiClient};
use log::{debug, error};
use reqwest::Url;

#[derive(Parser)]
#[command(name = "freetube")]
#[command(author, version, about = "Look up YouTube videos and get download links from a FreeTube Downloader backend", long_about = None)]
struct Cli {
    /// Base URL of the backend
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    backend: Url,

    /// Give up on backend requests after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metadata and download links of a video
    Info {
        url: String,
    },

    /// Print the download link for a single format
    Link {
        url: String,
        format_id: String,

        /// Name the downloaded file after this title
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Ask the legal assistant about licensing
    Ask {
        #[arg(required = true)]
        message: Vec<String>,
    },
}

fn api_client(cli: &Cli) -> Result<ApiClient, ErrorContext> {
    match cli.timeout_secs {
        Some(secs) => ApiClient::with_timeout(cli.backend.clone(), Duration::from_secs(secs)),
        None => ApiClient::new(cli.backend.clone()),
    }
}

/// 1234567 -> 1.2M
///
/// Rounds to tenths before picking the unit, so 999950 is 1.0M and not 1000.0K.
fn abbreviate_views(views: u64) -> String {
    let views = u128::from(views);
    if views < 1_000 {
        return views.to_string();
    }
    for (unit, suffix) in [(1_000, 'K'), (1_000_000, 'M')] {
        let tenths = (views * 10 + unit / 2) / unit;
        if tenths < 10_000 {
            return format!("{}.{}{suffix}", tenths / 10, tenths % 10);
        }
    }
    let tenths = (views * 10 + 500_000_000) / 1_000_000_000;
    format!("{}.{}B", tenths / 10, tenths % 10)
}

/// Links point at the canonical watch URL, not whatever was pasted (ex. a playlist link)
fn download_link(meta: &VideoMetadata, client: &ApiClient, format_id: &str) -> Url {
    links::with_title(client.download_url(&meta.watch_url(), format_id), &meta.title)
}

fn print_metadata(meta: &VideoMetadata, client: &ApiClient) {
    println!("{}", meta.title);
    println!("  channel:  {}", meta.channel.as_deref().unwrap_or("unknown"));
    println!("  duration: {}", meta.duration.as_deref().unwrap_or("unknown"));
    if let Some(views) = meta.views {
        println!("  views:    {}", abbreviate_views(views));
    }
    println!("  uploaded: {}", meta.upload_date.as_deref().unwrap_or("unknown"));
    println!("  license:  {}{}", meta.license, if meta.is_cc { " (Creative Commons)" } else { "" });
    println!();

    if meta.is_offline_placeholder() {
        println!("Demo Mode: the backend server is offline, showing placeholder data.");
        println!("Start the backend at {} to enable real downloads.", client.base());
        println!();
    }
    for format in &meta.formats {
        let size = if format.filesize_approx_mb > 0. { format!("~{} MB", format.filesize_approx_mb) } else { "size unknown".to_owned() };
        println!("[{}] {} {} - {} ({size})", format.id, format.resolution, format.ext, format.note);
        if !meta.is_offline_placeholder() {
            println!("    {}", download_link(meta, client, &format.id));
        }
    }
}

async fn run(cli: Cli) -> Result<(), freetube_client::Error> {
    match cli.command {
        Commands::Info { ref url } => {
            let client = api_client(&cli)?;
            let mut state = AppState::default();
            if let Some(url) = state.update(Action::Submit(url.clone())) {
                let outcome = client.fetch_video_info(&url).await.map_err(|e| e.to_string());
                state.update(Action::Finished(outcome));
            }
            debug!("view: {}, loading: {}", state.view, state.loading);
            if let Some(ref err) = state.error {
                return Err(freetube_client::Error::Remote(err.clone()));
            }
            let meta = state.metadata().context("Lookup finished without a result")?;
            print_metadata(meta, &client);
        },
        Commands::Link { ref url, ref format_id, ref title } => {
            let client = api_client(&cli)?;
            let link = client.download_url(url, format_id);
            match title {
                Some(title) => println!("{}", links::with_title(link, title)),
                None => println!("{link}"),
            }
        },
        Commands::Ask { ref message } => {
            let assistant = LegalAssistant::from_env();
            println!("{}", assistant.ask(&message.join(" ")).await);
        },
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_link_command() {
        let cli = Cli::parse_from(["freetube", "--backend", "http://10.0.0.2:3001", "link", "https://youtu.be/dQw4w9WgXcQ", "mp3-high", "-t", "Song"]);
        assert_eq!(cli.backend.as_str(), "http://10.0.0.2:3001/");
        assert!(matches!(cli.command, Commands::Link { ref format_id, title: Some(ref title), .. } if format_id == "mp3-high" && title == "Song"));
    }

    #[test]
    fn abbreviates_views() {
        assert_eq!(abbreviate_views(999), "999");
        assert_eq!(abbreviate_views(1_500), "1.5K");
        assert_eq!(abbreviate_views(1_000_000), "1.0M");
        assert_eq!(abbreviate_views(2_300_000_000), "2.3B");
    }

    #[test]
    fn abbreviation_rounds_into_next_unit() {
        assert_eq!(abbreviate_views(999_949), "999.9K");
        assert_eq!(abbreviate_views(999_950), "1.0M");
        assert_eq!(abbreviate_views(999_999_999), "1.0B");
        assert_eq!(abbreviate_views(u64::MAX), "18446744073.7B");
    }

    #[test]
    fn info_links_use_canonical_watch_url() {
        let client = ApiClient::new(Url::parse("http://localhost:3001").unwrap()).unwrap();
        let meta = freetube_client::placeholder::placeholder_metadata("https://www.youtube.com/watch?v=abcdefghijk&list=PL0123456789");
        let link = download_link(&meta, &client, "18");
        let video_url = link.query_pairs().find(|(k, _)| k == "url").map(|(_, v)| v.into_owned());
        assert_eq!(video_url.as_deref(), Some("https://www.youtube.com/watch?v=abcdefghijk"));
        assert!(!link.as_str().contains("list"));
    }
}
