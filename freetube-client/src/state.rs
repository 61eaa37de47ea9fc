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

use freetube_api::VideoMetadata;

use crate::fetch::FetchOutcome;

const DEFAULT_FETCH_ERROR: &str = "Failed to fetch video info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum View {
    #[default]
    Home,
    Faq,
    Contact,
}

#[derive(Debug, Clone)]
pub enum Action {
    SetView(View),
    /// User submitted a url for lookup
    Submit(String),
    /// A lookup started by [`Action::Submit`] has finished
    Finished(Result<FetchOutcome, String>),
    /// Back to the search form, keeping the current view
    Reset,
}

/// Everything a front-end needs to render the current screen
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<FetchOutcome>,
}

impl AppState {
    /// Applies `action`, returning the url to look up when the action started a lookup
    pub fn update(&mut self, action: Action) -> Option<String> {
        match action {
            Action::SetView(view) => {
                self.view = view;
                self.reset();
            },
            Action::Submit(url) => {
                if self.loading {
                    return None;
                }
                self.loading = true;
                self.reset();
                return Some(url);
            },
            Action::Finished(_) if !self.loading => {},
            Action::Finished(Ok(outcome)) => {
                self.loading = false;
                self.result = Some(outcome);
            },
            Action::Finished(Err(msg)) => {
                self.loading = false;
                self.error = Some(if msg.is_empty() { DEFAULT_FETCH_ERROR.to_owned() } else { msg });
            },
            Action::Reset => self.reset(),
        }
        None
    }

    fn reset(&mut self) {
        self.result = None;
        self.error = None;
    }

    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.result.as_ref().map(FetchOutcome::metadata)
    }

    /// The search form is shown on the home view until a result arrives
    pub fn shows_search_form(&self) -> bool {
        self.view == View::Home && self.result.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::placeholder::placeholder_metadata;

    use super::*;

    const URL: &str = "https://youtu.be/dQw4w9WgXcQ";

    fn finished() -> Action {
        Action::Finished(Ok(FetchOutcome::Placeholder(placeholder_metadata(URL))))
    }

    #[test]
    fn submit_starts_lookup_once() {
        let mut state = AppState::default();
        assert_eq!(state.update(Action::Submit(URL.to_owned())).as_deref(), Some(URL));
        assert!(state.loading);
        assert_eq!(state.update(Action::Submit(URL.to_owned())), None);
    }

    #[test]
    fn finished_lookup_shows_result() {
        let mut state = AppState::default();
        state.update(Action::Submit(URL.to_owned()));
        state.update(finished());
        assert!(!state.loading);
        assert_eq!(state.metadata().map(|m| m.id.as_str()), Some("dQw4w9WgXcQ"));
        assert!(!state.shows_search_form());
    }

    #[test]
    fn failed_lookup_shows_error() {
        let mut state = AppState::default();
        state.update(Action::Submit(URL.to_owned()));
        state.update(Action::Finished(Err("bad url".to_owned())));
        assert_eq!(state.error.as_deref(), Some("bad url"));
        assert!(state.shows_search_form());

        state.update(Action::Submit(URL.to_owned()));
        assert_eq!(state.error, None);
        state.update(Action::Finished(Err(String::new())));
        assert_eq!(state.error.as_deref(), Some(DEFAULT_FETCH_ERROR));
    }

    #[test]
    fn switching_view_clears_result() {
        let mut state = AppState::default();
        state.update(Action::Submit(URL.to_owned()));
        state.update(finished());
        state.update(Action::SetView(View::Faq));
        assert_eq!(state.view, View::Faq);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn stray_results_are_ignored() {
        let mut state = AppState::default();
        state.update(finished());
        assert!(state.result.is_none());
    }

    #[test]
    fn reset_returns_to_search() {
        let mut state = AppState::default();
        state.update(Action::Submit(URL.to_owned()));
        state.update(finished());
        state.update(Action::Reset);
        assert!(state.shows_search_form());
    }
}
