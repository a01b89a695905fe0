// Player rows and the drafted-status annotation.

use std::fmt;

// ---------------------------------------------------------------------------
// DraftStatus
// ---------------------------------------------------------------------------

/// Tri-state annotation a user applies to a player during a live draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DraftStatus {
    #[default]
    Undrafted,
    MyTeam,
    OtherTeam,
}

impl DraftStatus {
    /// Parse the text stored in the `Drafted` column.
    ///
    /// Accepts "False"/"Undrafted"/"" for undrafted, "My Team" and
    /// "Other Team" (trimmed, ASCII case-insensitive). Anything else is
    /// treated as undrafted.
    pub fn from_label(s: &str) -> Self {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "my team" | "myteam" | "mine" => DraftStatus::MyTeam,
            "other team" | "otherteam" | "other" => DraftStatus::OtherTeam,
            _ => DraftStatus::Undrafted,
        }
    }

    /// The label written into the grid's Drafted column.
    pub fn label(&self) -> &'static str {
        match self {
            DraftStatus::Undrafted => "False",
            DraftStatus::MyTeam => "My Team",
            DraftStatus::OtherTeam => "Other Team",
        }
    }

    /// Next status in the editor's cycle: Undrafted -> My Team -> Other Team.
    pub fn cycle(&self) -> Self {
        match self {
            DraftStatus::Undrafted => DraftStatus::MyTeam,
            DraftStatus::MyTeam => DraftStatus::OtherTeam,
            DraftStatus::OtherTeam => DraftStatus::Undrafted,
        }
    }

    pub fn is_drafted(&self) -> bool {
        !matches!(self, DraftStatus::Undrafted)
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord
// ---------------------------------------------------------------------------

/// One player row. Both apps share this shape; columns an app's CSV does not
/// carry are left as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// Player name; the dataset key.
    pub name: String,
    pub position: String,
    pub team: String,
    pub rank: Option<u32>,
    /// Suggested draft round.
    pub round: Option<u32>,
    pub tier: Option<u32>,
    /// Auction/draft value.
    pub value: Option<f64>,
    pub vbd: Option<f64>,
    /// Projected fantasy points (stats app).
    pub weighted_mean: Option<f64>,
    pub ci_lower: Option<f64>,
    pub ci_upper: Option<f64>,
    /// Numeric 1-5 rating (draft app).
    pub rating: Option<i64>,
    /// Categorical rating such as "bullish" (stats app).
    pub rating_label: Option<String>,
    /// Free-text rating or analyst write-up shown in the detail panel.
    pub narrative: Option<String>,
    pub rookie: Option<bool>,
    pub drafted: DraftStatus,
}

impl PlayerRecord {
    /// A record with only identity and position filled in.
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        PlayerRecord {
            name: name.into(),
            position: position.into(),
            team: String::new(),
            rank: None,
            round: None,
            tier: None,
            value: None,
            vbd: None,
            weighted_mean: None,
            ci_lower: None,
            ci_upper: None,
            rating: None,
            rating_label: None,
            narrative: None,
            rookie: None,
            drafted: DraftStatus::Undrafted,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
