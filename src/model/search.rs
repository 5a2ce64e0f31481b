// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Credit search state.
//!
//! [`SearchState`] is the state machine behind the search screen. A search
//! is validated locally, dispatched as a [`SearchRequest`] tagged with a
//! sequence number, and later completed with the API outcome. Completions
//! for anything but the latest request are dropped, so overlapping searches
//! can never leave stale results on screen.

use tracing::debug;

use crate::{
    client::ClientError,
    model::{Credit, SearchMode},
    util::format::is_numeric_only,
};

pub(crate) const MISSING_TERM: &str = "Informe o número da NFe ou do Crédito.";
pub(crate) const NON_NUMERIC_TERM: &str = "Digite apenas números no campo de pesquisa.";
pub(crate) const NO_RESULTS: &str = "Nenhum crédito encontrado.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SearchPhase {
    #[default]
    Idle,
    /// Rejected by local validation, no request was sent.
    Rejected,
    Loading,
    Success,
    Failed,
}

/// A validated search ready to be sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    pub(crate) seq: u64,
    pub(crate) mode: SearchMode,
    pub(crate) term: String,
}

/// What the API produced for a request, already shaped by mode.
#[derive(Debug)]
pub(crate) enum SearchResponse {
    Credits(Vec<Credit>),
    Credit(Option<Credit>),
}

impl SearchResponse {
    fn into_credits(self) -> Vec<Credit> {
        match self {
            SearchResponse::Credits(credits) => credits,
            SearchResponse::Credit(credit) => credit.into_iter().collect(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SearchState {
    pub(crate) mode: SearchMode,
    pub(crate) term: String,
    phase: SearchPhase,
    error: Option<String>,
    credits: Vec<Credit>,
    last_seq: u64,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn credits(&self) -> &[Credit] {
        &self.credits
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Starts a new search for the current mode and term.
    ///
    /// Prior results and errors are always cleared. Returns the request to
    /// dispatch, or `None` when the term failed local validation, in which
    /// case the validation message is available from [`Self::error`].
    pub(crate) fn submit(&mut self) -> Option<SearchRequest> {
        self.error = None;
        self.credits.clear();

        if self.term.is_empty() {
            return self.reject(MISSING_TERM);
        }

        if !is_numeric_only(&self.term) {
            return self.reject(NON_NUMERIC_TERM);
        }

        self.last_seq += 1;
        self.phase = SearchPhase::Loading;

        Some(SearchRequest {
            seq: self.last_seq,
            mode: self.mode,
            term: self.term.clone(),
        })
    }

    fn reject(&mut self, message: &str) -> Option<SearchRequest> {
        self.phase = SearchPhase::Rejected;
        self.error = Some(message.to_string());
        None
    }

    /// Applies the outcome of request `seq`.
    ///
    /// Returns false, leaving the state untouched, when `seq` is not the most
    /// recently dispatched request.
    pub(crate) fn complete(
        &mut self,
        seq: u64,
        mode: SearchMode,
        outcome: Result<SearchResponse, ClientError>,
    ) -> bool {
        if seq != self.last_seq || !self.is_loading() {
            debug!(seq, latest = self.last_seq, "Dropping stale search completion");
            return false;
        }

        match outcome {
            Ok(response) => {
                self.credits = response.into_credits();
                if self.credits.is_empty() {
                    self.error = Some(NO_RESULTS.to_string());
                }
                self.phase = SearchPhase::Success;
            }

            Err(error) => {
                let message = error
                    .server_message()
                    .unwrap_or_else(|| mode.fallback_error());
                self.error = Some(message.to_string());
                self.credits.clear();
                self.phase = SearchPhase::Failed;
            }
        }

        true
    }
}
