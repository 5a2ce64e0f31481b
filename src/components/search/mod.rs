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

//! Credit search view.
//!
//! This module owns the search screen: the text input holding the search
//! term, the [`SearchState`] machine behind it, and the results table. All
//! validation and outcome handling is delegated to [`SearchState`].

mod event;
mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use tui_input::Input;

use crate::{
    components::CreditTableState,
    events::SearchCompletion,
    model::search::SearchState,
    tasks::AppTask,
};

pub(crate) struct SearchView {
    pub(crate) state: SearchState,
    pub(crate) input: Input,
    pub(crate) credit_table: CreditTableState,
    pub(crate) is_active: bool,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            state: SearchState::new(),
            input: Input::default(),
            credit_table: CreditTableState::new(),
            is_active: false,
        }
    }

    /// Validates the current term and, when valid, dispatches the search to
    /// the task worker.
    pub(crate) fn submit(&mut self, task_tx: &Sender<AppTask>) -> Result<()> {
        self.state.term = self.input.value().to_string();
        let request = self.state.submit();
        self.credit_table.reset_selection(0);

        if let Some(request) = request {
            task_tx.send(AppTask::Search(request))?;
        }

        Ok(())
    }

    pub(crate) fn complete(&mut self, completion: SearchCompletion) {
        let SearchCompletion { request, outcome } = completion;
        if self.state.complete(request.seq, request.mode, outcome) {
            self.credit_table.reset_selection(self.state.credits().len());
        }
    }

    /// Discards all search state, used when the user signs out.
    pub(crate) fn reset(&mut self) {
        let is_active = self.is_active;
        *self = Self::new();
        self.is_active = is_active;
    }
}
