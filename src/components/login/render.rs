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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{LoginView, login::LoginField},
    render::{Render, draw_input},
    theme::Theme,
};

const FORM_WIDTH: u16 = 48;
const FORM_HEIGHT: u16 = 12;

impl Render for LoginView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [form] = Layout::vertical([Constraint::Length(FORM_HEIGHT)])
            .flex(Flex::Center)
            .areas(column);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Entrar ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(form);
        f.render_widget(block, form);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let login_focused = self.is_active && self.focus == LoginField::Login;
        let password_focused = self.is_active && self.focus == LoginField::Password;
        draw_input(f, rows[0], &self.login, " Login ", login_focused, false, theme);
        draw_input(f, rows[1], &self.password, " Senha ", password_focused, true, theme);

        let message = if self.is_pending() {
            Line::styled("Autenticando...", Style::default().fg(theme.accent_colour))
        } else if let Some(error) = self.error() {
            Line::styled(error.to_string(), Style::default().fg(theme.error_colour))
        } else {
            Line::styled(
                "Tab alterna campo, Enter entra",
                Style::default().fg(theme.muted_colour),
            )
        };
        f.render_widget(Paragraph::new(message), rows[3]);
    }
}
