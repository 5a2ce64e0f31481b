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
use tracing::{error, info};

use crate::{
    App, MainView,
    auth::AuthService,
    events::SearchCompletion,
    model::User,
    tasks::AppTask,
};

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    // The search screen requires a signed-in user.
    let main_view = match main_view {
        MainView::Search if !app.session.is_signed_in() => MainView::Login,
        view => view,
    };

    app.login_view.is_active = matches!(main_view, MainView::Login);
    app.search_view.is_active = matches!(main_view, MainView::Search);
    app.main_view = main_view;
}

pub(super) fn handle_api_status(app: &mut App, status: String) {
    info!(%status, "API status");
    app.api_status = Some(status);
}

pub(super) fn handle_logged_in(app: &mut App, user: User) {
    app.session.sign_in(user);
    app.login_view.reset();
    app.status_message = None;
    handle_set_main_view(app, MainView::Search);
}

pub(super) fn handle_login_failed(app: &mut App, message: String) {
    app.login_view.fail(message);
}

pub(super) fn handle_logout(app: &mut App) -> Result<()> {
    app.session.logout();
    app.task_tx.send(AppTask::Logout)?;
    app.search_view.reset();
    handle_set_main_view(app, MainView::Login);

    Ok(())
}

pub(super) fn handle_search_completed(app: &mut App, completion: SearchCompletion) {
    app.search_view.complete(completion);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!("{}", message);
    app.status_message = Some(message);
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::{
        config::AppConfig,
        events::{AppEvent, dispatch_event},
        model::{
            Credit, SearchMode,
            search::{NO_RESULTS, SearchRequest, SearchResponse},
        },
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn user() -> User {
        User {
            name: "João da Silva".to_string(),
            login: "joaosilva".to_string(),
            token: "token".to_string(),
        }
    }

    #[test]
    fn search_view_requires_sign_in() {
        let (mut app, _task_rx) = app();

        dispatch_event(&mut app, AppEvent::SetMainView(MainView::Search)).unwrap();

        assert_eq!(app.main_view, MainView::Login);
        assert!(app.login_view.is_active);
        assert!(!app.search_view.is_active);
    }

    #[test]
    fn login_opens_search_view() {
        let (mut app, _task_rx) = app();

        dispatch_event(&mut app, AppEvent::LoggedIn(user())).unwrap();

        assert_eq!(app.main_view, MainView::Search);
        assert!(app.search_view.is_active);
        assert_eq!(app.session.current_user(), Some(&user()));
    }

    #[test]
    fn logout_clears_session_and_returns_to_login() {
        let (mut app, task_rx) = app();
        dispatch_event(&mut app, AppEvent::LoggedIn(user())).unwrap();

        dispatch_event(&mut app, AppEvent::Logout).unwrap();

        assert_eq!(app.main_view, MainView::Login);
        assert!(app.session.current_user().is_none());
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::Logout)));
    }

    #[test]
    fn login_failure_is_shown_on_login_view() {
        let (mut app, _task_rx) = app();

        dispatch_event(&mut app, AppEvent::LoginFailed("Credenciais inválidas".to_string())).unwrap();

        assert_eq!(app.login_view.error(), Some("Credenciais inválidas"));
    }

    #[test]
    fn search_completion_updates_search_state() {
        let (mut app, _task_rx) = app();
        app.search_view.state.term = "12345".to_string();
        let request = app.search_view.state.submit().unwrap();

        let completion = SearchCompletion {
            request,
            outcome: Ok(SearchResponse::Credits(vec![])),
        };
        dispatch_event(&mut app, AppEvent::SearchCompleted(completion)).unwrap();

        assert_eq!(app.search_view.state.error(), Some(NO_RESULTS));
        assert!(!app.search_view.state.is_loading());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let (mut app, _task_rx) = app();
        app.search_view.state.term = "1".to_string();
        let _pending = app.search_view.state.submit().unwrap();

        let stale = SearchCompletion {
            request: SearchRequest {
                seq: 0,
                mode: SearchMode::Invoice,
                term: "0".to_string(),
            },
            outcome: Ok(SearchResponse::Credits(vec![Credit::default()])),
        };
        dispatch_event(&mut app, AppEvent::SearchCompleted(stale)).unwrap();

        assert!(app.search_view.state.is_loading());
        assert!(app.search_view.state.credits().is_empty());
    }

    #[test]
    fn worker_errors_reach_the_status_bar() {
        let (mut app, _task_rx) = app();

        dispatch_event(&mut app, AppEvent::Error("channel closed".to_string())).unwrap();

        assert_eq!(app.status_message.as_deref(), Some("channel closed"));
    }
}
