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

//! Event routing for the search view.
//!
//! `Tab` toggles the search mode, `Enter` submits, `Ctrl-X` signs out and
//! table navigation keys move through the results. Everything else edits the
//! search term.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::SearchView,
    events::{AppEvent, AppEventProcessor},
    tasks::AppTask,
};

impl AppEventProcessor for SearchView {
    fn process_event(
        &mut self,
        event: Event,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        let Event::Key(key_event) = &event else {
            return Ok(());
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => self.state.toggle_mode(),

            (KeyCode::Enter, _) => self.submit(task_tx)?,

            (KeyCode::Char('x'), KeyModifiers::CONTROL) => event_tx.send(AppEvent::Logout)?,

            _ => {
                let credits = self.state.credits();
                if !self.credit_table.as_widget(credits).process_event(&event) {
                    self.input.handle_event(&event);
                }
            }
        }

        Ok(())
    }
}
