use serde::{Deserialize, Serialize};

/// The fixed set of expense classifications. Declaration order is display order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    #[default]
    Materials,
    Labor,
    Equipment,
    Permits,
    Subcontractors,
    Other,
}

impl Category {
    /// Stored key, as written to the persisted slot.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Materials => "materials",
            Self::Labor => "labor",
            Self::Equipment => "equipment",
            Self::Permits => "permits",
            Self::Subcontractors => "subcontractors",
            Self::Other => "other",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Materials => "Materials",
            Self::Labor => "Labor",
            Self::Equipment => "Equipment",
            Self::Permits => "Permits",
            Self::Subcontractors => "Subcontractors",
            Self::Other => "Other",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "materials" | "material" => Some(Self::Materials),
            "labor" | "labour" => Some(Self::Labor),
            "equipment" => Some(Self::Equipment),
            "permits" | "permit" => Some(Self::Permits),
            "subcontractors" | "subcontractor" | "subs" => Some(Self::Subcontractors),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Materials,
            Self::Labor,
            Self::Equipment,
            Self::Permits,
            Self::Subcontractors,
            Self::Other,
        ]
    }

    /// Cycle through `all()` in either direction, wrapping at the ends.
    pub(crate) fn step(&self, delta: i32) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0) as i32;
        let len = all.len() as i32;
        all[(idx + delta).rem_euclid(len) as usize]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
