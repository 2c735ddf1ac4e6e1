use serde_derive::{Deserialize, Serialize};
use std::fmt::Display;

/// Match indicators, listed in the order they are computed and shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    OnRegistry,
    Gtin,
    AllIsrcs,
    Trackcount,
    Tracklengths,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 5] = [
        IndicatorKind::OnRegistry,
        IndicatorKind::Gtin,
        IndicatorKind::AllIsrcs,
        IndicatorKind::Trackcount,
        IndicatorKind::Tracklengths,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::OnRegistry => "On MB",
            IndicatorKind::Gtin => "GTIN",
            IndicatorKind::AllIsrcs => "All ISRCs",
            IndicatorKind::Trackcount => "Trackcount",
            IndicatorKind::Tracklengths => "Tracklengths",
        }
    }
}

impl Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorKind::OnRegistry => write!(f, "OnRegistry"),
            IndicatorKind::Gtin => write!(f, "GTIN"),
            IndicatorKind::AllIsrcs => write!(f, "AllISRCs"),
            IndicatorKind::Trackcount => write!(f, "Trackcount"),
            IndicatorKind::Tracklengths => write!(f, "Tracklengths"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub passed: bool,
}

/// The ordered indicator list of one reconciliation. Its absence (rather than
/// an all-false list) is what marks an album the checks do not apply to.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators(pub Vec<Indicator>);

impl Indicators {
    pub fn get(&self, kind: IndicatorKind) -> Option<bool> {
        self.0.iter().find(|i| i.kind == kind).map(|i| i.passed)
    }

    pub fn passed(&self, kind: IndicatorKind) -> bool {
        self.get(kind).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.0.iter()
    }
}
