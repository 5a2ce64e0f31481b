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

//! Sign-in view.
//!
//! Collects a login and password and hands them to the task worker. The
//! view stays on screen until the worker reports success or failure.

mod event;
mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use tui_input::Input;

use crate::{client::Credentials, tasks::AppTask};

pub(crate) const MISSING_CREDENTIALS: &str = "Informe login e senha.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LoginField {
    #[default]
    Login,
    Password,
}

pub(crate) struct LoginView {
    pub(crate) login: Input,
    pub(crate) password: Input,
    pub(crate) focus: LoginField,
    pub(crate) is_active: bool,
    pending: bool,
    error: Option<String>,
}

impl LoginView {
    pub(crate) fn new() -> Self {
        Self {
            login: Input::default(),
            password: Input::default(),
            focus: LoginField::default(),
            is_active: false,
            pending: false,
            error: None,
        }
    }

    pub(crate) fn login_value(&self) -> &str {
        self.login.value()
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Login => LoginField::Password,
            LoginField::Password => LoginField::Login,
        };
    }

    pub(crate) fn submit(&mut self, task_tx: &Sender<AppTask>) -> Result<()> {
        if self.pending {
            return Ok(());
        }

        self.error = None;
        let login = self.login_value().trim();
        let password = self.password.value();
        if login.is_empty() || password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS.to_string());
            return Ok(());
        }

        task_tx.send(AppTask::Login(Credentials {
            login: login.to_string(),
            password: password.to_string(),
        }))?;
        self.pending = true;

        Ok(())
    }

    /// Shows a failed sign-in attempt, keeping the login but clearing the
    /// password.
    pub(crate) fn fail(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
        self.password.reset();
        self.focus = LoginField::Password;
    }

    pub(crate) fn reset(&mut self) {
        let is_active = self.is_active;
        *self = Self::new();
        self.is_active = is_active;
    }
}
