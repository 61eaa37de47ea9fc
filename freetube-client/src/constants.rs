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

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
/// Used by the offline placeholder when no id can be found in the url
pub const FALLBACK_VIDEO_ID: &str = "dQw4w9WgXcQ";

// URLs

pub static GEMINI_ENDPOINT: LazyLock<Url> = LazyLock::new(|| Url::parse("https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent").expect("should be able to parse the gemini endpoint URL"));

// Regexes

pub static VIDEO_ID_EXTRACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").expect("VIDEO_ID_EXTRACTION_REGEX should be valid"));

// Legal assistant

pub const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];
pub const LEGAL_ASSISTANT_INSTRUCTION: &str = "You are the Legal Assistant for 'FreeTube CC Downloader'. \
Your goal is to educate users about Creative Commons licenses and why downloading copyrighted content is illegal.
Keep your answers concise, friendly, and informative.
If a user asks how to download a copyrighted video, politely explain that this tool restricts that functionality for legal reasons.
Explain the difference between 'Standard YouTube License' and 'Creative Commons Attribution'.";
pub const NO_API_KEY_REPLY: &str = "API Key not configured. Please check environment variables.";
pub const CONNECTION_TROUBLE_REPLY: &str = "Sorry, I'm having trouble connecting to the legal knowledge base right now.";
pub const EMPTY_ANSWER_REPLY: &str = "I couldn't generate a response at the moment.";
