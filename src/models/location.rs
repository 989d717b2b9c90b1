use serde::{Deserialize, Serialize};

/// Where a clock event was recorded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    #[serde(rename = "presencial")]
    OnSite,
    #[serde(rename = "remoto")]
    Remote,
}

impl Location {
    /// Helper: convert input code from CLI (lowercase or uppercase, short or long)
    pub fn from_input(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "o" | "onsite" | "on-site" | "office" | "presencial" => Some(Location::OnSite),
            "r" | "remote" | "remoto" => Some(Location::Remote),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::OnSite => "On-site",
            Location::Remote => "Remote",
        }
    }
}
