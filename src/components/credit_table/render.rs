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

//! UI rendering logic for the credit table.
//!
//! Every cell is produced by the display formatters, this module only lays
//! out columns and applies the theme.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::credit_table::CreditTable,
    model::Credit,
    render::Render,
    theme::Theme,
    util::format::{
        format_boolean_flag, format_category_code, format_currency, format_date, format_rate,
    },
};

const HEADERS: [&str; 10] = [
    "Crédito",
    "NFS-e",
    "Constituição",
    "Valor ISSQN",
    "Tipo",
    "Simples Nacional",
    "Alíquota",
    "Valor Faturado",
    "Dedução",
    "Base de Cálculo",
];

// Columns holding numbers are right aligned.
const NUMERIC_COLUMNS: [usize; 5] = [3, 6, 7, 8, 9];

impl Render for CreditTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.credits.iter().map(|credit| {
            Row::new(
                credit_cells(credit)
                    .into_iter()
                    .enumerate()
                    .map(|(column, text)| cell(column, text, theme)),
            )
        });

        let header = Row::new(
            HEADERS
                .iter()
                .enumerate()
                .map(|(column, title)| Cell::from(Line::from(*title).alignment(alignment(column)))),
        )
        .style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Min(12),
                Constraint::Length(8),
                Constraint::Length(16),
                Constraint::Length(9),
                Constraint::Min(14),
                Constraint::Min(12),
                Constraint::Min(15),
            ],
        )
        .header(header)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.highlight_fg),
        )
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}

fn credit_cells(credit: &Credit) -> [String; 10] {
    [
        credit.credit_number.clone().unwrap_or_default(),
        credit.invoice_number.clone().unwrap_or_default(),
        format_date(credit.constituted_on.as_deref().unwrap_or_default()),
        format_currency(credit.tax_amount),
        format_category_code(credit.category.as_deref().unwrap_or_default()),
        format_boolean_flag(credit.simplified_regime.unwrap_or(false)),
        format_rate(credit.rate),
        format_currency(credit.invoiced_amount),
        format_currency(credit.deduction_amount),
        format_currency(credit.tax_base),
    ]
}

fn alignment(column: usize) -> Alignment {
    if NUMERIC_COLUMNS.contains(&column) {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn cell(column: usize, text: String, theme: &Theme) -> Cell<'static> {
    let fg = match column {
        0 | 1 => theme.table_number_fg,
        2 => theme.table_date_fg,
        _ if NUMERIC_COLUMNS.contains(&column) => theme.table_amount_fg,
        _ => theme.table_text_fg,
    };

    Cell::from(
        Line::from(text)
            .style(Style::default().fg(fg))
            .alignment(alignment(column)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_rendered_through_formatters() {
        let credit = Credit {
            credit_number: Some("123456".to_string()),
            invoice_number: Some("7891011".to_string()),
            constituted_on: Some("2024-02-25".to_string()),
            tax_amount: Some(1500.75),
            category: Some("issqn".to_string()),
            simplified_regime: Some(true),
            rate: Some(5.0),
            invoiced_amount: Some(30000.0),
            deduction_amount: Some(5000.0),
            tax_base: Some(25000.0),
        };

        assert_eq!(
            credit_cells(&credit),
            [
                "123456",
                "7891011",
                "25/02/2024",
                "R$\u{a0}1.500,75",
                "ISSQN",
                "Sim",
                "5.00%",
                "R$\u{a0}30.000,00",
                "R$\u{a0}5.000,00",
                "R$\u{a0}25.000,00",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn missing_fields_render_empty() {
        let cells = credit_cells(&Credit::default());

        assert_eq!(cells[5], "Não");
        assert!(cells.iter().enumerate().all(|(i, c)| i == 5 || c.is_empty()));
    }
}
