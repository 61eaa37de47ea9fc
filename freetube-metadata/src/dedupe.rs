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

use std::collections::HashSet;

use freetube_api::NormalizedFormat;

/// Tracks which (resolution, extension) pairs were already emitted into a format list
#[derive(Default, Clone, Debug)]
pub struct FormatKeySet {
    pub set: HashSet<(String, String)>,
}

impl FormatKeySet {
    pub fn with_capacity(capacity: usize) -> FormatKeySet {
        FormatKeySet {
            set: HashSet::with_capacity(capacity),
        }
    }

    /// Returns true if the key of this format was not seen before
    pub fn insert(&mut self, format: &NormalizedFormat) -> bool {
        self.set.insert((format.resolution.clone(), format.ext.clone()))
    }
}
