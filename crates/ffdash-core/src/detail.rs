// Detail panel content for the selected player.

use crate::app::AppKind;
use crate::record::PlayerRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetailError {
    /// The selected record has no value for the panel's text field.
    #[error("No {field} found for player: {player}")]
    MissingField { player: String, field: &'static str },
}

/// What the detail panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    /// Nothing selected.
    Prompt(String),
    Player { name: String, text: String },
    /// Selection exists but lacks the text field; shown inline.
    Missing(DetailError),
}

impl DetailPanel {
    pub fn is_error(&self) -> bool {
        matches!(self, DetailPanel::Missing(_))
    }
}

/// Build the panel for `selected`.
pub fn detail_for(kind: AppKind, selected: Option<&PlayerRecord>) -> DetailPanel {
    let noun = kind.detail_noun();
    let Some(record) = selected else {
        return DetailPanel::Prompt(format!("Select a player to view their {noun}."));
    };
    match record.narrative.as_deref() {
        Some(text) => DetailPanel::Player {
            name: record.name.clone(),
            text: text.to_string(),
        },
        None => DetailPanel::Missing(DetailError::MissingField {
            player: record.name.clone(),
            field: noun,
        }),
    }
}
