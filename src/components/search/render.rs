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

//! Rendering for the search view: mode selector, term input, status line
//! and the results table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::SearchView,
    model::{SearchMode, search::SearchPhase},
    render::{Render, draw_input},
    theme::Theme,
};

impl Render for SearchView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_mode_selector(f, layout[0], theme);

        let title = match self.state.mode {
            SearchMode::Invoice => " Número da NFS-e ",
            SearchMode::Credit => " Número do Crédito ",
        };
        draw_input(f, layout[1], &self.input, title, self.is_active, false, theme);

        self.draw_status_line(f, layout[2], theme);

        let results = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour))
            .title(format!(" Resultados ({}) ", self.state.credits().len()));
        let inner = results.inner(layout[3]);
        f.render_widget(results, layout[3]);

        let credits = self.state.credits();
        self.credit_table.as_widget(credits).draw(f, inner, theme);
    }
}

impl SearchView {
    fn draw_mode_selector(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![Span::raw("Buscar por: ")];
        for mode in [SearchMode::Invoice, SearchMode::Credit] {
            let style = if mode == self.state.mode {
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme.muted_colour)
            };
            spans.push(Span::styled(format!(" {} ", mode.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("(Tab alterna)", Style::default().fg(theme.muted_colour)));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_status_line(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = match (self.state.phase(), self.state.error()) {
            (SearchPhase::Loading, _) => {
                Line::styled("Buscando...", Style::default().fg(theme.accent_colour))
            }
            (SearchPhase::Idle, _) => Line::styled(
                "Digite o número e pressione Enter",
                Style::default().fg(theme.muted_colour),
            ),
            (_, Some(error)) => {
                Line::styled(error.to_string(), Style::default().fg(theme.error_colour))
            }
            (_, None) => Line::default(),
        };

        f.render_widget(Paragraph::new(line), area);
    }
}
