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

//! Credit results table widget and state management.
//!
//! This module separates persistent state (`CreditTableState`) from the
//! transient widget view (`CreditTable`) that borrows the credits currently
//! on screen.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Credit;

pub(crate) struct CreditTableState {
    pub(crate) table_state: TableState,
}

impl CreditTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// Resets the highlighted row, selecting the first row when there is one.
    pub(crate) fn reset_selection(&mut self, len: usize) {
        let selected = if len > 0 { Some(0) } else { None };
        self.table_state = TableState::new().with_selected(selected);
    }

    pub(crate) fn as_widget<'a>(&'a mut self, credits: &'a [Credit]) -> CreditTable<'a> {
        CreditTable {
            credits,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct CreditTable<'a> {
    credits: &'a [Credit],
    table_state: &'a mut TableState,
}

impl<'a> CreditTable<'a> {
    fn goto_next(&mut self) {
        let len = self.credits.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.credits.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.credits.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.credits.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}
