//! Common styling for the chart viewer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for warnings
pub const WARNING_COLOR: Color = Color::Yellow;

/// Line colors, cycled by trace index within a panel
pub const TRACE_COLORS: [Color; 4] = [Color::Green, Color::Magenta, Color::Cyan, Color::Yellow];

/// Color for the `index`th trace of a panel
pub fn trace_color(index: usize) -> Color {
    TRACE_COLORS[index % TRACE_COLORS.len()]
}

/// Bordered block for one chart panel
pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(HEADER_COLOR))
}
