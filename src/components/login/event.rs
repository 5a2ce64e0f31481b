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

//! Event routing for the sign-in view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{LoginView, login::LoginField},
    events::{AppEvent, AppEventProcessor},
    tasks::AppTask,
};

impl AppEventProcessor for LoginView {
    fn process_event(
        &mut self,
        event: Event,
        task_tx: &Sender<AppTask>,
        _event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        let Event::Key(key_event) = &event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.toggle_focus(),

            KeyCode::Enter => self.submit(task_tx)?,

            _ => {
                let input = match self.focus {
                    LoginField::Login => &mut self.login,
                    LoginField::Password => &mut self.password,
                };
                input.handle_event(&event);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::components::login::MISSING_CREDENTIALS;

    fn press(view: &mut LoginView, task_tx: &Sender<AppTask>, code: KeyCode) {
        let (event_tx, _event_rx) = mpsc::channel();
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        view.process_event(event, task_tx, &event_tx).unwrap();
    }

    fn type_text(view: &mut LoginView, task_tx: &Sender<AppTask>, text: &str) {
        for c in text.chars() {
            press(view, task_tx, KeyCode::Char(c));
        }
    }

    fn active_view() -> LoginView {
        let mut view = LoginView::new();
        view.is_active = true;
        view
    }

    #[test]
    fn submits_credentials_once() {
        let (task_tx, task_rx) = mpsc::channel();
        let mut view = active_view();

        type_text(&mut view, &task_tx, "joaosilva");
        press(&mut view, &task_tx, KeyCode::Tab);
        type_text(&mut view, &task_tx, "123456");
        press(&mut view, &task_tx, KeyCode::Enter);
        press(&mut view, &task_tx, KeyCode::Enter);

        match task_rx.try_recv() {
            Ok(AppTask::Login(credentials)) => {
                assert_eq!(credentials.login, "joaosilva");
                assert_eq!(credentials.password, "123456");
            }
            other => panic!("unexpected task: {other:?}"),
        }
        assert!(task_rx.try_recv().is_err());
        assert!(view.is_pending());
    }

    #[test]
    fn missing_password_is_rejected_locally() {
        let (task_tx, task_rx) = mpsc::channel();
        let mut view = active_view();

        type_text(&mut view, &task_tx, "joaosilva");
        press(&mut view, &task_tx, KeyCode::Enter);

        assert_eq!(view.error(), Some(MISSING_CREDENTIALS));
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn failure_clears_password_and_allows_retry() {
        let (task_tx, task_rx) = mpsc::channel();
        let mut view = active_view();
        type_text(&mut view, &task_tx, "joaosilva");
        press(&mut view, &task_tx, KeyCode::Tab);
        type_text(&mut view, &task_tx, "wrong");
        press(&mut view, &task_tx, KeyCode::Enter);
        let _ = task_rx.try_recv();

        view.fail("Credenciais inválidas".to_string());

        assert!(!view.is_pending());
        assert_eq!(view.password.value(), "");
        assert_eq!(view.login_value(), "joaosilva");
        assert_eq!(view.focus, LoginField::Password);

        type_text(&mut view, &task_tx, "123456");
        press(&mut view, &task_tx, KeyCode::Enter);
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::Login(_))));
    }
}
