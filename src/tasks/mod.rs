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

//! Background task processing.
//!
//! This module implements the command pattern used to keep blocking HTTP
//! calls off the main UI thread. A dedicated worker owns the [`CreditApi`]
//! client, translates each [`AppTask`] into API calls and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block should be implemented as tasks, everything
//! else is handled directly by events.

mod handlers;
use handlers::*;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::warn;

use crate::{
    client::{CreditApi, Credentials},
    events::AppEvent,
    model::search::SearchRequest,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    CheckApiStatus,

    Login(Credentials),
    Logout,

    Search(SearchRequest),
}

/// Spawns a background thread to process application tasks.
///
/// The worker takes ownership of `client` and loops until the task channel
/// is closed.
///
/// # Arguments
///
/// * `client` - The API client used for every request.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker<C>(mut client: C, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>)
where
    C: CreditApi + Send + 'static,
{
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                client: &mut client,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                warn!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    client: &'a mut dyn CreditApi,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::CheckApiStatus => check_api_status(ctx),
        AppTask::Login(credentials) => login(ctx, credentials),
        AppTask::Logout => logout(ctx),
        AppTask::Search(request) => search(ctx, request),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, sync::mpsc};

    use super::*;
    use crate::{
        client::ClientError,
        events::SearchCompletion,
        model::{Credit, SearchMode, User, search::SearchResponse},
    };

    #[derive(Default)]
    struct FakeApi {
        credits: Vec<Credit>,
        failure: Option<(u16, Option<String>)>,
        token: Option<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn outcome<T>(&self, call: String, value: T) -> Result<T, ClientError> {
            self.calls.borrow_mut().push(call);
            match &self.failure {
                Some((status, message)) => Err(ClientError::Status {
                    status: *status,
                    message: message.clone(),
                }),
                None => Ok(value),
            }
        }
    }

    impl CreditApi for FakeApi {
        fn find_by_invoice(&self, invoice_number: &str) -> Result<Vec<Credit>, ClientError> {
            self.outcome(format!("invoice:{invoice_number}"), self.credits.clone())
        }

        fn find_by_credit_number(&self, credit_number: &str) -> Result<Option<Credit>, ClientError> {
            self.outcome(format!("credit:{credit_number}"), self.credits.first().cloned())
        }

        fn login(&mut self, credentials: &Credentials) -> Result<User, ClientError> {
            let user = User {
                name: "Test".to_string(),
                login: credentials.login.clone(),
                token: "token".to_string(),
            };
            let user = self.outcome(format!("login:{}", credentials.login), user)?;
            self.token = Some(user.token.clone());
            Ok(user)
        }

        fn clear_token(&mut self) {
            self.token = None;
        }

        fn api_status(&self) -> Result<String, ClientError> {
            self.outcome("status".to_string(), "API de Créditos funcionando!".to_string())
        }
    }

    fn run(api: &mut FakeApi, task: AppTask) -> Vec<AppEvent> {
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            client: api,
            event_tx: &event_tx,
        };

        handle_task(task, &mut ctx).unwrap();
        drop(event_tx);

        event_rx.iter().collect()
    }

    fn request(mode: SearchMode, term: &str) -> SearchRequest {
        SearchRequest {
            seq: 7,
            mode,
            term: term.to_string(),
        }
    }

    #[test]
    fn invoice_search_calls_invoice_endpoint() {
        let mut api = FakeApi {
            credits: vec![Credit::default(), Credit::default()],
            ..FakeApi::default()
        };

        let events = run(&mut api, AppTask::Search(request(SearchMode::Invoice, "7891011")));

        assert_eq!(*api.calls.borrow(), vec!["invoice:7891011".to_string()]);
        match events.as_slice() {
            [AppEvent::SearchCompleted(completion)] => {
                assert_eq!(completion.request.seq, 7);
                assert!(matches!(&completion.outcome, Ok(SearchResponse::Credits(c)) if c.len() == 2));
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn credit_search_calls_credit_endpoint() {
        let mut api = FakeApi {
            credits: vec![Credit::default()],
            ..FakeApi::default()
        };

        let events = run(&mut api, AppTask::Search(request(SearchMode::Credit, "999")));

        assert_eq!(*api.calls.borrow(), vec!["credit:999".to_string()]);
        assert!(matches!(
            events.as_slice(),
            [AppEvent::SearchCompleted(SearchCompletion { outcome: Ok(SearchResponse::Credit(Some(_))), .. })]
        ));
    }

    #[test]
    fn search_failure_is_passed_through() {
        let mut api = FakeApi {
            failure: Some((404, Some("Not found".to_string()))),
            ..FakeApi::default()
        };

        let events = run(&mut api, AppTask::Search(request(SearchMode::Credit, "1")));

        match events.as_slice() {
            [AppEvent::SearchCompleted(SearchCompletion { outcome: Err(error), .. })] => {
                assert_eq!(error.server_message(), Some("Not found"));
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn login_success_signs_in() {
        let mut api = FakeApi::default();
        let credentials = Credentials {
            login: "joaosilva".to_string(),
            password: "123456".to_string(),
        };

        let events = run(&mut api, AppTask::Login(credentials));

        assert_eq!(api.token.as_deref(), Some("token"));
        assert!(matches!(events.as_slice(), [AppEvent::LoggedIn(user)] if user.login == "joaosilva"));
    }

    #[test]
    fn login_failure_reports_message_or_fallback() {
        let credentials = Credentials {
            login: "joaosilva".to_string(),
            password: "wrong".to_string(),
        };

        let mut api = FakeApi {
            failure: Some((401, Some("Credenciais inválidas".to_string()))),
            ..FakeApi::default()
        };
        let events = run(&mut api, AppTask::Login(credentials.clone()));
        assert!(matches!(events.as_slice(), [AppEvent::LoginFailed(m)] if m == "Credenciais inválidas"));

        let mut api = FakeApi {
            failure: Some((500, None)),
            ..FakeApi::default()
        };
        let events = run(&mut api, AppTask::Login(credentials));
        assert!(matches!(events.as_slice(), [AppEvent::LoginFailed(m)] if m == LOGIN_FAILED));
    }

    #[test]
    fn logout_clears_token() {
        let mut api = FakeApi {
            token: Some("token".to_string()),
            ..FakeApi::default()
        };

        let events = run(&mut api, AppTask::Logout);

        assert!(api.token.is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn api_status_is_reported() {
        let mut api = FakeApi::default();
        let events = run(&mut api, AppTask::CheckApiStatus);
        assert!(matches!(events.as_slice(), [AppEvent::ApiStatus(s)] if s == "API de Créditos funcionando!"));

        let mut api = FakeApi {
            failure: Some((503, None)),
            ..FakeApi::default()
        };
        let events = run(&mut api, AppTask::CheckApiStatus);
        assert!(matches!(events.as_slice(), [AppEvent::ApiStatus(s)] if s.starts_with(API_UNAVAILABLE)));
    }
}
