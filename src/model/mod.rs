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

//! Domain models and core data structures.
//!
//! This module defines the entities exchanged with the credit API (credits
//! and the signed-in user) together with the search mode selected on the
//! search screen.

pub(crate) mod search;

use serde::{Deserialize, Serialize};

/// A fiscal credit record as served by the credit API.
///
/// Field names on the wire are part of the server contract, every field may
/// be absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Credit {
    #[serde(rename = "numeroCredito", default)]
    pub(crate) credit_number: Option<String>,

    #[serde(rename = "numeroNfse", default)]
    pub(crate) invoice_number: Option<String>,

    /// ISO-8601 date the credit was constituted.
    #[serde(rename = "dataConstituicao", default)]
    pub(crate) constituted_on: Option<String>,

    #[serde(rename = "valorIssqn", default)]
    pub(crate) tax_amount: Option<f64>,

    #[serde(rename = "tipoCredito", default)]
    pub(crate) category: Option<String>,

    /// Simples Nacional regime flag.
    #[serde(rename = "simplesNacional", default)]
    pub(crate) simplified_regime: Option<bool>,

    #[serde(rename = "aliquota", default)]
    pub(crate) rate: Option<f64>,

    #[serde(rename = "valorFaturado", default)]
    pub(crate) invoiced_amount: Option<f64>,

    #[serde(rename = "valorDeducao", default)]
    pub(crate) deduction_amount: Option<f64>,

    #[serde(rename = "baseCalculo", default)]
    pub(crate) tax_base: Option<f64>,
}

/// The signed-in user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct User {
    #[serde(rename = "nome")]
    pub(crate) name: String,
    pub(crate) login: String,
    pub(crate) token: String,
}

/// Which number the search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SearchMode {
    #[default]
    Invoice,
    Credit,
}

impl SearchMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            SearchMode::Invoice => SearchMode::Credit,
            SearchMode::Credit => SearchMode::Invoice,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SearchMode::Invoice => "NFS-e",
            SearchMode::Credit => "Crédito",
        }
    }

    /// Message shown when a request in this mode fails without a server
    /// supplied message.
    pub(crate) fn fallback_error(self) -> &'static str {
        match self {
            SearchMode::Invoice => "Erro ao buscar créditos.",
            SearchMode::Credit => "Erro ao buscar crédito.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_credit_wire_names() {
        let json = r#"{
            "numeroCredito": "123456",
            "numeroNfse": "7891011",
            "dataConstituicao": "2024-02-25",
            "valorIssqn": 1500.75,
            "tipoCredito": "ISSQN",
            "simplesNacional": true,
            "aliquota": 5.0,
            "valorFaturado": 30000.0,
            "valorDeducao": 5000.0,
            "baseCalculo": 25000.0
        }"#;

        let credit: Credit = serde_json::from_str(json).unwrap();

        assert_eq!(credit.credit_number.as_deref(), Some("123456"));
        assert_eq!(credit.invoice_number.as_deref(), Some("7891011"));
        assert_eq!(credit.constituted_on.as_deref(), Some("2024-02-25"));
        assert_eq!(credit.tax_amount, Some(1500.75));
        assert_eq!(credit.category.as_deref(), Some("ISSQN"));
        assert_eq!(credit.simplified_regime, Some(true));
        assert_eq!(credit.rate, Some(5.0));
        assert_eq!(credit.invoiced_amount, Some(30000.0));
        assert_eq!(credit.deduction_amount, Some(5000.0));
        assert_eq!(credit.tax_base, Some(25000.0));
    }

    #[test]
    fn tolerates_null_and_missing_fields() {
        let credit: Credit =
            serde_json::from_str(r#"{"numeroCredito": "1", "simplesNacional": null}"#).unwrap();

        assert_eq!(credit.credit_number.as_deref(), Some("1"));
        assert_eq!(credit.simplified_regime, None);
        assert_eq!(credit.tax_amount, None);
    }

    #[test]
    fn decodes_login_response() {
        let user: User = serde_json::from_str(
            r#"{"nome": "João da Silva", "login": "joaosilva", "token": "abc"}"#,
        )
        .unwrap();

        assert_eq!(user.name, "João da Silva");
        assert_eq!(user.login, "joaosilva");
        assert_eq!(user.token, "abc");
    }

    #[test]
    fn mode_toggles_between_variants() {
        assert_eq!(SearchMode::default(), SearchMode::Invoice);
        assert_eq!(SearchMode::Invoice.toggled(), SearchMode::Credit);
        assert_eq!(SearchMode::Credit.toggled(), SearchMode::Invoice);
    }
}
