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

pub const ONLINE_MESSAGE: &str = "FreeTube Downloader Backend is Running";

pub const INVALID_URL_MSG: &str = "Please provide a valid YouTube URL.";
pub const FETCH_FAILED_MSG: &str = "Failed to fetch video. Ensure the URL is accessible and valid.";
pub const PROCESS_FAILED_MSG: &str = "Failed to process video metadata.";
pub const MISSING_DOWNLOAD_PARAMS_MSG: &str = "Missing URL or Format ID";
pub const DOWNLOAD_FAILED_MSG: &str = "Failed to start the download.";
