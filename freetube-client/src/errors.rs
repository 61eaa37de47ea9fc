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

use std::fmt::Display;

use cloneable_errors::ErrorContext;

#[derive(Debug, Clone)]
pub enum Error {
    /// The backend answered with an error status, carries the message meant for the user
    Remote(String),
    Other(ErrorContext),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Remote(msg) => write!(f, "{msg}"),
            Error::Other(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Remote(..) => None,
            Error::Other(err) => Some(err),
        }
    }
}

impl From<ErrorContext> for Error {
    fn from(value: ErrorContext) -> Self {
        Error::Other(value)
    }
}
