// Rating classifier and host-side cell styling.
//
// The grid never runs injected code: renderers call `cell_style` for each
// cell and map the returned tones to their own colors.

use crate::grid::Column;
use crate::record::{DraftStatus, PlayerRecord};

/// Named colors used by the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    White,
    Black,
    DarkGreen,
    LightGreen,
    LightCoral,
    DarkRed,
    LightBlue,
    DarkGray,
}

impl Tone {
    /// sRGB components, matching the CSS named colors.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Tone::White => (255, 255, 255),
            Tone::Black => (0, 0, 0),
            Tone::DarkGreen => (0, 100, 0),
            Tone::LightGreen => (144, 238, 144),
            Tone::LightCoral => (240, 128, 128),
            Tone::DarkRed => (139, 0, 0),
            Tone::LightBlue => (173, 216, 230),
            Tone::DarkGray => (169, 169, 169),
        }
    }
}

/// Foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Tone,
    pub bg: Tone,
}

impl CellStyle {
    pub const fn new(fg: Tone, bg: Tone) -> Self {
        CellStyle { fg, bg }
    }
}

pub const MEGA_BULLISH: CellStyle = CellStyle::new(Tone::White, Tone::DarkGreen);
pub const BULLISH: CellStyle = CellStyle::new(Tone::Black, Tone::LightGreen);
pub const BEARISH: CellStyle = CellStyle::new(Tone::Black, Tone::LightCoral);
pub const MEGA_BEARISH: CellStyle = CellStyle::new(Tone::White, Tone::DarkRed);
pub const NEUTRAL: CellStyle = CellStyle::new(Tone::Black, Tone::White);

/// A rating as it appears in either dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValue<'a> {
    /// Numeric 1-5 analyst rating.
    Score(i64),
    /// Categorical label such as "mega bullish".
    Label(&'a str),
}

/// Map a rating to its style. Anything outside the known set, including a
/// neutral 3, gets black on white.
pub fn classify(rating: RatingValue<'_>) -> CellStyle {
    match rating {
        RatingValue::Score(5) => MEGA_BULLISH,
        RatingValue::Score(4) => BULLISH,
        RatingValue::Score(2) => BEARISH,
        RatingValue::Score(1) => MEGA_BEARISH,
        RatingValue::Score(_) => NEUTRAL,
        RatingValue::Label(label) => match label.trim() {
            "mega bullish" => MEGA_BULLISH,
            "bullish" => BULLISH,
            "bearish" => BEARISH,
            "mega bearish" => MEGA_BEARISH,
            _ => NEUTRAL,
        },
    }
}

/// Style of the Drafted cell for a given status; undrafted rows are plain.
pub fn drafted_style(status: DraftStatus) -> Option<CellStyle> {
    match status {
        DraftStatus::Undrafted => None,
        DraftStatus::MyTeam => Some(CellStyle::new(Tone::Black, Tone::LightBlue)),
        DraftStatus::OtherTeam => Some(CellStyle::new(Tone::DarkGray, Tone::Black)),
    }
}

/// Style lookup for one grid cell, identified by its column and row.
/// Returns `None` for cells that render with the grid's default style.
pub fn cell_style(column: Column, record: &PlayerRecord) -> Option<CellStyle> {
    match column {
        Column::RatingLabel => Some(classify(RatingValue::Label(
            record.rating_label.as_deref().unwrap_or(""),
        ))),
        Column::Rating => record.rating.map(|r| classify(RatingValue::Score(r))),
        Column::Drafted => drafted_style(record.drafted),
        _ => None,
    }
}
