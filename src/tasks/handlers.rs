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
use tracing::{debug, info, warn};

use crate::{
    client::Credentials,
    events::{AppEvent, SearchCompletion},
    model::{
        SearchMode,
        search::{SearchRequest, SearchResponse},
    },
    tasks::TaskContext,
};

pub(super) const LOGIN_FAILED: &str = "Falha ao autenticar.";
pub(super) const API_UNAVAILABLE: &str = "API indisponível";

pub(super) fn check_api_status(ctx: &mut TaskContext) -> Result<()> {
    let status = match ctx.client.api_status() {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("API status check failed: {}", e);
            format!("{}: {}", API_UNAVAILABLE, e)
        }
    };
    ctx.event_tx.send(AppEvent::ApiStatus(status))?;

    Ok(())
}

pub(super) fn login(ctx: &mut TaskContext, credentials: Credentials) -> Result<()> {
    let event = match ctx.client.login(&credentials) {
        Ok(user) => AppEvent::LoggedIn(user),
        Err(e) => {
            warn!(login = %credentials.login, "Login failed: {}", e);
            AppEvent::LoginFailed(e.server_message().unwrap_or(LOGIN_FAILED).to_string())
        }
    };
    ctx.event_tx.send(event)?;

    Ok(())
}

pub(super) fn logout(ctx: &mut TaskContext) -> Result<()> {
    ctx.client.clear_token();

    Ok(())
}

pub(super) fn search(ctx: &mut TaskContext, request: SearchRequest) -> Result<()> {
    info!(seq = request.seq, mode = ?request.mode, term = %request.term, "Searching credits");

    let outcome = match request.mode {
        SearchMode::Invoice => ctx
            .client
            .find_by_invoice(&request.term)
            .map(SearchResponse::Credits),
        SearchMode::Credit => ctx
            .client
            .find_by_credit_number(&request.term)
            .map(SearchResponse::Credit),
    };

    match &outcome {
        Ok(_) => debug!(seq = request.seq, "Search completed"),
        Err(e) => warn!(seq = request.seq, "Search failed: {}", e),
    }

    ctx.event_tx
        .send(AppEvent::SearchCompleted(SearchCompletion { request, outcome }))?;

    Ok(())
}
