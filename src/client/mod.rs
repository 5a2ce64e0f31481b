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

//! Access to the fiscal credit REST API.
//!
//! The [`CreditApi`] trait is the seam between the task worker and the
//! network. [`http::HttpCreditClient`] is the production implementation, a
//! blocking `reqwest` client intended to live on the worker thread.

mod dto;
pub(crate) mod http;

use thiserror::Error;

use crate::model::{Credit, User};

#[derive(Debug, Error)]
pub(crate) enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The non-empty `message` field of the server's error body, if any.
    pub(crate) fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => {
                message.as_deref().filter(|message| !message.is_empty())
            }
            _ => None,
        }
    }
}

/// Login name and password submitted to the login endpoint.
#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    pub(crate) login: String,
    pub(crate) password: String,
}

pub(crate) trait CreditApi {
    /// `GET {base}/creditos/{invoice_number}`, an empty or `null` body is an
    /// empty list.
    fn find_by_invoice(&self, invoice_number: &str) -> Result<Vec<Credit>, ClientError>;

    /// `GET {base}/creditos/credito/{credit_number}`, an empty or `null` body
    /// is `None`.
    fn find_by_credit_number(&self, credit_number: &str) -> Result<Option<Credit>, ClientError>;

    /// Authenticates and attaches the returned bearer token to later calls.
    fn login(&mut self, credentials: &Credentials) -> Result<User, ClientError>;

    fn clear_token(&mut self);

    /// Plain-text health check of the credit API.
    fn api_status(&self) -> Result<String, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_non_empty_status_bodies() {
        let with_message = ClientError::Status {
            status: 404,
            message: Some("Not found".to_string()),
        };
        let blank = ClientError::Status {
            status: 500,
            message: Some(String::new()),
        };
        let missing = ClientError::Status {
            status: 502,
            message: None,
        };

        assert_eq!(with_message.server_message(), Some("Not found"));
        assert_eq!(blank.server_message(), None);
        assert_eq!(missing.server_message(), None);
    }

    #[test]
    fn decode_errors_carry_no_server_message() {
        let error: ClientError = serde_json::from_str::<Credit>("{").unwrap_err().into();

        assert_eq!(error.server_message(), None);
    }
}
