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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) status_bar_bg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) table_number_fg: Color,
    pub(crate) table_date_fg: Color,
    pub(crate) table_amount_fg: Color,
    pub(crate) table_text_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 32, 38),
            accent_colour: Color::Rgb(102, 204, 153),
            border_colour: Color::Rgb(102, 102, 102),
            error_colour: Color::Rgb(240, 113, 103),
            muted_colour: Color::Rgb(162, 161, 166),
            status_bar_bg: Color::Rgb(28, 46, 54),

            highlight_bg: Color::Rgb(40, 80, 110),
            highlight_fg: Color::Rgb(255, 255, 255),

            table_number_fg: Color::Rgb(255, 215, 0),
            table_date_fg: Color::Rgb(162, 161, 166),
            table_amount_fg: Color::Rgb(179, 219, 157),
            table_text_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background color via
    /// escape sequences. Non-RGB colours map to black.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => "#000000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(18, 32, 38)), "#122026");
        assert_eq!(Theme::to_hex(Color::Reset), "#000000");
    }
}
