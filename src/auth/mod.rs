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

//! Session handling.
//!
//! The search screen is only reachable while a [`User`] is signed in. The
//! [`AuthService`] trait is what the rest of the application depends on,
//! [`Session`] is the in-memory implementation used by the TUI.

use tracing::info;

use crate::model::User;

pub(crate) trait AuthService {
    fn current_user(&self) -> Option<&User>;
    fn logout(&mut self);
}

#[derive(Debug, Default)]
pub(crate) struct Session {
    user: Option<User>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sign_in(&mut self, user: User) {
        info!(login = %user.login, "Signed in");
        self.user = Some(user);
    }

    pub(crate) fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

impl AuthService for Session {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(login = %user.login, "Signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            name: "João da Silva".to_string(),
            login: "joaosilva".to_string(),
            token: "token".to_string(),
        }
    }

    #[test]
    fn starts_signed_out() {
        let session = Session::new();

        assert!(!session.is_signed_in());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn sign_in_then_logout() {
        let mut session = Session::new();

        session.sign_in(user());
        assert_eq!(session.current_user(), Some(&user()));

        session.logout();
        assert!(!session.is_signed_in());

        // Logging out twice is harmless.
        session.logout();
        assert!(session.current_user().is_none());
    }
}
