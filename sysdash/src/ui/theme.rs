//! Shared UI theme constants.

use ratatui::style::Color;

pub const RX: Color = Color::Red;
pub const TX: Color = Color::Green;
pub const MEM_BAR: Color = Color::Magenta;
pub const PANEL_PAUSED: Color = Color::Yellow;

/// Gauge colour for a CPU load band.
pub fn load_color(pct: u16) -> Color {
    match pct {
        p if p < 25 => Color::Green,
        p if p < 60 => Color::Yellow,
        _ => Color::Red,
    }
}
