// Panels drawn by `render_frame`. Each module exposes a `render` function.

pub mod detail;
pub mod draft_log;
pub mod filters;
pub mod grid;
pub mod quit_confirm;
pub mod status_bar;
pub mod summary;

use ratatui::style::{Color, Style};

use ffdash_core::style::{CellStyle, Tone};

/// Terminal color for a classifier tone.
pub fn tone_color(tone: Tone) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb(r, g, b)
}

pub fn cell_style_to_ratatui(style: CellStyle) -> Style {
    Style::default()
        .fg(tone_color(style.fg))
        .bg(tone_color(style.bg))
}
