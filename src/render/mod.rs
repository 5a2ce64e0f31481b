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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

use crate::{
    App, MainView,
    auth::AuthService,
    render::status::draw_status_bar,
    theme::Theme,
};

const MASK_CHAR: char = '•';

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a header showing the signed-in user, the active
/// view, and a one-line status bar.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing views
///   to update internal widget state (like table scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0)])
        .horizontal_margin(1)
        .split(outer[1]);

    match app.main_view {
        MainView::Login => app.login_view.draw(f, main[0], &app.theme),
        MainView::Search => app.search_view.draw(f, main[0], &app.theme),
    }

    draw_status_bar(f, outer[2], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Créditos Fiscais ",
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(user) = app.session.current_user() {
        spans.push(Span::styled(
            format!("| {} ({}) ", user.name, user.login),
            Style::default().fg(app.theme.muted_colour),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draws a bordered single-line text input and, when focused, places the
/// terminal cursor inside it.
///
/// Masked inputs render one bullet per character.
pub(crate) fn draw_input(
    f: &mut Frame,
    area: Rect,
    input: &Input,
    title: &str,
    focused: bool,
    masked: bool,
    theme: &Theme,
) {
    let border_colour = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    // Borders take one column either side, keep one spare for the cursor.
    let width = area.width.saturating_sub(3).max(1) as usize;
    let scroll = input.visual_scroll(width);

    let text = if masked {
        MASK_CHAR.to_string().repeat(input.value().chars().count())
    } else {
        input.value().to_string()
    };

    let paragraph = Paragraph::new(text)
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_colour))
                .title(title.to_string()),
        );
    f.render_widget(paragraph, area);

    if focused {
        let cursor_x = area.x + (input.visual_cursor().max(scroll) - scroll) as u16 + 1;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
