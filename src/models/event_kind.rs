use serde::{Deserialize, Serialize};

/// Attendance action recorded by a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "entrada")]
    ClockIn,
    #[serde(rename = "saida_almoco")]
    LunchOut,
    #[serde(rename = "retorno_almoco")]
    LunchIn,
    #[serde(rename = "saida")]
    ClockOut,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::ClockIn,
        EventKind::LunchOut,
        EventKind::LunchIn,
        EventKind::ClockOut,
    ];

    /// Convert enum → wire string
    pub fn to_wire_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "entrada",
            EventKind::LunchOut => "saida_almoco",
            EventKind::LunchIn => "retorno_almoco",
            EventKind::ClockOut => "saida",
        }
    }

    /// Convert wire string → enum
    pub fn from_wire_str(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(EventKind::ClockIn),
            "saida_almoco" => Some(EventKind::LunchOut),
            "retorno_almoco" => Some(EventKind::LunchIn),
            "saida" => Some(EventKind::ClockOut),
            _ => None,
        }
    }

    /// Helper: accept CLI spellings (`in`, `lunch-out`, ...) as well as wire names.
    pub fn from_input(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "in" | "clock-in" => Some(EventKind::ClockIn),
            "lunch-out" => Some(EventKind::LunchOut),
            "lunch-in" => Some(EventKind::LunchIn),
            "out" | "clock-out" => Some(EventKind::ClockOut),
            _ => Self::from_wire_str(&normalized.replace('-', "_")),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "Clock in",
            EventKind::LunchOut => "Lunch out",
            EventKind::LunchIn => "Lunch in",
            EventKind::ClockOut => "Clock out",
        }
    }
}
