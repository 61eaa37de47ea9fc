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

//! Client side of the downloader: talks to the backend, survives it being
//! offline, builds download links and keeps the view state of a front-end.

pub mod assistant;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod links;
pub mod placeholder;
pub mod state;
pub mod youtube;

pub use errors::Error;
pub use fetch::{ApiClient, FetchOutcome};
