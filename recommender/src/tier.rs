pub const HIGH_THRESHOLD: u8 = 80;
pub const MEDIUM_THRESHOLD: u8 = 60;

/// Coarse bucket of a match score. Only decides the accent colour of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    High,
    Medium,
    Low,
}

/// Lower bounds are inclusive: 80 is high, 60 is medium
pub fn tier(score: u8) -> Tier {
    if score >= HIGH_THRESHOLD {
        Tier::High
    } else if score >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}

impl Tier {
    pub fn accent(&self) -> &'static str {
        match self {
            Tier::High => "#10b981",
            Tier::Medium => "#f59e0b",
            Tier::Low => "#6b7280",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}
