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

//! Render the status bar.
//!
//! The bar shows key hints for the active view, the last worker error if
//! any, and the API health reported at startup.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{App, MainView};

pub(crate) fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let api = match &app.api_status {
        Some(status) => format!("{} | {}", app.config.api_base_url, status),
        None => app.config.api_base_url.clone(),
    };

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(api.chars().count() as u16 + 1)])
        .horizontal_margin(1)
        .split(area);

    let left = match &app.status_message {
        Some(message) => {
            Line::styled(message.clone(), Style::default().fg(app.theme.error_colour))
        }
        None => Line::from(key_hints(app.main_view)),
    };

    let style = Style::default()
        .fg(app.theme.muted_colour)
        .bg(app.theme.status_bar_bg);

    f.render_widget(Paragraph::new(left).style(style), container[0]);
    f.render_widget(
        Paragraph::new(Line::from(api).right_aligned()).style(style),
        container[1],
    );
}

fn key_hints(view: MainView) -> &'static str {
    match view {
        MainView::Login => "Enter entrar  Tab campo  Esc sair",
        MainView::Search => {
            "Enter buscar  Tab NFS-e/Crédito  ↑↓ resultados  Ctrl-X sair da conta  Esc sair"
        }
    }
}
