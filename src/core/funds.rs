use super::types::{FundEntry, FundSet, SimplicityLevel};

const TOTAL_MARKET: &str = "Fidelity ZERO Total Market Index Fund";
const INTERNATIONAL: &str = "Fidelity ZERO International Index Fund";
const REAL_ESTATE: &str = "Fidelity® Real Estate Index Fund";
const US_BOND: &str = "Fidelity® US Bond Index Fund";
const INFLATION_PROTECTED: &str = "Fidelity Inflation-Protected Bond Fund";

const fn fund(display_name: &'static str, ticker: &'static str, share: u32) -> FundEntry {
    FundEntry {
        display_name,
        ticker,
        share_of_asset_class: share,
    }
}

pub static SIMPLE: FundSet = FundSet {
    stocks: &[fund(TOTAL_MARKET, "FZROX", 100)],
    bonds: &[fund(US_BOND, "FXNAX", 100)],
};

/// Adds international equity.
pub static MODERATE: FundSet = FundSet {
    stocks: &[
        fund(TOTAL_MARKET, "FZROX", 75),
        fund(INTERNATIONAL, "FZILX", 25),
    ],
    bonds: &[fund(US_BOND, "FXNAX", 100)],
};

/// Adds real estate and inflation-protected bonds.
pub static DIVERSIFIED: FundSet = FundSet {
    stocks: &[
        fund(TOTAL_MARKET, "FZROX", 60),
        fund(INTERNATIONAL, "FZILX", 25),
        fund(REAL_ESTATE, "FSRNX", 15),
    ],
    bonds: &[
        fund(US_BOND, "FXNAX", 67),
        fund(INFLATION_PROTECTED, "FIPSX", 33),
    ],
};

pub fn fund_set(level: SimplicityLevel) -> &'static FundSet {
    match level {
        SimplicityLevel::Simple => &SIMPLE,
        SimplicityLevel::Moderate => &MODERATE,
        SimplicityLevel::Diversified => &DIVERSIFIED,
    }
}
