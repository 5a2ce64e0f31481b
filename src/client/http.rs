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

//! Blocking `reqwest` implementation of [`CreditApi`].
//!
//! This client owns transport details only: URL building, bearer token
//! handling, status mapping and JSON decoding. It performs no retries and
//! uses the default request timeout.

use anyhow::{Context, Result, bail};
use reqwest::{
    StatusCode, Url,
    blocking::{Client, RequestBuilder, Response},
    header::ACCEPT,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    client::{
        ClientError, CreditApi, Credentials,
        dto::{ErrorBody, LoginRequest},
    },
    model::{Credit, User},
};

const USER_AGENT: &str = concat!("creditui/", env!("CARGO_PKG_VERSION"));

pub(crate) struct HttpCreditClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpCreditClient {
    /// Builds a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute hierarchical URL or
    /// if the underlying HTTP client cannot be constructed.
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("API base URL '{}' cannot hold a path", base_url);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Joins `segments` onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorised(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get(&self, segments: &[&str]) -> Result<String, ClientError> {
        let url = self.endpoint(segments);
        debug!(%url, "GET");

        let request = self.client.get(url).header(ACCEPT, "application/json");
        let response = self.authorised(request).send()?;
        read_body(response)
    }
}

impl CreditApi for HttpCreditClient {
    fn find_by_invoice(&self, invoice_number: &str) -> Result<Vec<Credit>, ClientError> {
        let body = self.get(&["creditos", invoice_number])?;
        Ok(decode_optional::<Vec<Credit>>(&body)?.unwrap_or_default())
    }

    fn find_by_credit_number(&self, credit_number: &str) -> Result<Option<Credit>, ClientError> {
        let body = self.get(&["creditos", "credito", credit_number])?;
        decode_optional(&body)
    }

    fn login(&mut self, credentials: &Credentials) -> Result<User, ClientError> {
        let url = self.endpoint(&["usuarios", "login"]);
        debug!(%url, login = %credentials.login, "POST");

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&LoginRequest {
                login: &credentials.login,
                password: &credentials.password,
            })
            .send()?;

        let user: User = serde_json::from_str(&read_body(response)?)?;
        self.token = Some(user.token.clone());

        Ok(user)
    }

    fn clear_token(&mut self) {
        self.token = None;
    }

    fn api_status(&self) -> Result<String, ClientError> {
        let url = self.endpoint(&["creditos", "status"]);
        let response = self.authorised(self.client.get(url)).send()?;
        read_body(response)
    }
}

fn read_body(response: Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(status_error(status, &body));
    }

    Ok(body)
}

fn status_error(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .unwrap_or_default()
        .message
        .filter(|message| !message.is_empty());

    ClientError::Status {
        status: status.as_u16(),
        message,
    }
}

// An empty body decodes like a JSON `null`.
fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ClientError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("http://localhost:8080/api", "http://localhost:8080/api/creditos/7891011")]
    #[case("http://localhost:8080/api/", "http://localhost:8080/api/creditos/7891011")]
    #[case("https://credits.example", "https://credits.example/creditos/7891011")]
    fn joins_segments_onto_base(#[case] base: &str, #[case] expected: &str) {
        let client = HttpCreditClient::new(base).unwrap();

        assert_eq!(client.endpoint(&["creditos", "7891011"]).as_str(), expected);
    }

    #[test]
    fn builds_credit_number_endpoint() {
        let client = HttpCreditClient::new("http://localhost:8080/api").unwrap();

        assert_eq!(
            client.endpoint(&["creditos", "credito", "123456"]).as_str(),
            "http://localhost:8080/api/creditos/credito/123456"
        );
    }

    #[test]
    fn escapes_path_separators_in_terms() {
        let client = HttpCreditClient::new("http://localhost:8080/api").unwrap();

        assert_eq!(
            client.endpoint(&["creditos", "12/34"]).as_str(),
            "http://localhost:8080/api/creditos/12%2F34"
        );
    }

    #[rstest]
    #[case("not a url")]
    #[case("mailto:someone@example.com")]
    fn rejects_unusable_base_urls(#[case] base: &str) {
        assert!(HttpCreditClient::new(base).is_err());
    }

    #[test]
    fn status_error_extracts_server_message() {
        let error = status_error(
            StatusCode::NOT_FOUND,
            r#"{"status":404,"error":"Not Found","message":"Crédito não encontrado com o número: 999"}"#,
        );

        assert_eq!(
            error.server_message(),
            Some("Crédito não encontrado com o número: 999")
        );
        assert!(matches!(error, ClientError::Status { status: 404, .. }));
    }

    #[rstest]
    #[case("")]
    #[case("<html>Bad Gateway</html>")]
    #[case(r#"{"error":"Internal Server Error"}"#)]
    #[case(r#"{"message":""}"#)]
    fn status_error_without_usable_message(#[case] body: &str) {
        let error = status_error(StatusCode::BAD_GATEWAY, body);

        assert_eq!(error.server_message(), None);
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("null")]
    fn empty_bodies_decode_as_none(#[case] body: &str) {
        let decoded = decode_optional::<Credit>(body).unwrap();

        assert_eq!(decoded, None);
    }

    #[test]
    fn decodes_credit_list() {
        let body = r#"[{"numeroCredito":"1","numeroNfse":"7891011"},{"numeroCredito":"2","numeroNfse":"7891011"}]"#;

        let credits = decode_optional::<Vec<Credit>>(body).unwrap().unwrap();

        assert_eq!(credits.len(), 2);
        assert_eq!(credits[1].credit_number.as_deref(), Some("2"));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let error = decode_optional::<Vec<Credit>>("{oops").unwrap_err();

        assert!(matches!(error, ClientError::Decode(_)));
    }
}
