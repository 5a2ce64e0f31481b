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

//! Input handling for the credit table.
//!
//! This module maps raw terminal keyboard events to table navigation:
//! Up/Down (or Ctrl-P/Ctrl-N) move one row and wrap around, PageUp or
//! Ctrl-Home jump to the first row, PageDown or Ctrl-End to the last.
//! Plain Home/End are left to the search term input.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::credit_table::CreditTable;

impl CreditTable<'_> {
    /// Applies a navigation key, returning true when the key was consumed.
    pub(crate) fn process_event(&mut self, event: &Event) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => self.goto_next(),
            (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => self.goto_previous(),
            (KeyCode::PageUp, _) | (KeyCode::Home, KeyModifiers::CONTROL) => self.goto_first(),
            (KeyCode::PageDown, _) | (KeyCode::End, KeyModifiers::CONTROL) => self.goto_last(),

            _ => return false,
        }

        true
    }
}
