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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App, MainView,
    events::{AppEvent, AppEventProcessor},
};

/// Routes keyboard input to the active view.
///
/// Application-wide keys (`Ctrl-C` and `Esc` to exit) are handled here, all
/// other keys are delegated to the view that is currently shown.
///
/// # Errors
///
/// Returns an error if a task or event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if process_global_key_event(app, key)? {
        return Ok(());
    }

    let event = Event::Key(key);
    match app.main_view {
        MainView::Login => app.login_view.process_event(event, &app.task_tx, &app.event_tx),
        MainView::Search => app.search_view.process_event(event, &app.task_tx, &app.event_tx),
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            Ok(true)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{config::AppConfig, tasks::AppTask};

    #[test]
    fn escape_exits() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);

        process_key_event(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn typing_goes_to_the_login_view() {
        let (task_tx, task_rx) = mpsc::channel::<AppTask>();
        let mut app = App::new(AppConfig::default(), task_tx);

        for c in "ana".chars() {
            process_key_event(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }

        assert_eq!(app.login_view.login_value(), "ana");
        assert!(task_rx.try_recv().is_err());
    }
}
