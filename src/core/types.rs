use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Balanced,
        RiskProfile::Aggressive,
    ];

    /// Number the stock share is derived from: `multiplier - age`.
    pub const fn multiplier(self) -> u32 {
        match self {
            RiskProfile::Conservative => 100,
            RiskProfile::Balanced => 120,
            RiskProfile::Aggressive => 140,
        }
    }

    /// Maps the 1..=3 risk slider onto a profile. Anything else has no profile.
    pub const fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(RiskProfile::Conservative),
            2 => Some(RiskProfile::Balanced),
            3 => Some(RiskProfile::Aggressive),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Balanced => "Balanced",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SimplicityLevel {
    Simple,
    Moderate,
    Diversified,
}

impl SimplicityLevel {
    /// Slider values outside 1..=3 fall back to `Simple`.
    pub const fn from_level(level: i64) -> Self {
        match level {
            2 => SimplicityLevel::Moderate,
            3 => SimplicityLevel::Diversified,
            _ => SimplicityLevel::Simple,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stock,
    Bond,
}

impl AssetClass {
    pub const fn style_tag(self) -> &'static str {
        match self {
            AssetClass::Stock => "stock",
            AssetClass::Bond => "bond",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundEntry {
    pub display_name: &'static str,
    pub ticker: &'static str,
    /// Percentage of the fund's own asset class, 0..=100.
    pub share_of_asset_class: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundSet {
    pub stocks: &'static [FundEntry],
    pub bonds: &'static [FundEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationInput {
    pub age: u32,
    pub risk_profile: RiskProfile,
    pub fund_set: &'static FundSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundAllocation {
    pub display_name: &'static str,
    pub ticker: &'static str,
    pub percent_of_total_portfolio: f64,
    pub asset_class: AssetClass,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub stock_share: f64,
    pub bond_share: f64,
    pub funds: Vec<FundAllocation>,
}
