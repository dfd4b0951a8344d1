use super::funds;
use super::types::{
    AllocationInput, AllocationResult, AssetClass, FundAllocation, FundEntry, FundSet,
    RiskProfile, SimplicityLevel,
};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;

/// Percentage of the portfolio held in stocks.
///
/// Only defined for `MIN_AGE..=MAX_AGE`; callers validate the age first.
pub fn stock_share(age: u32, risk_profile: RiskProfile) -> f64 {
    let raw = i64::from(risk_profile.multiplier()) - i64::from(age);
    raw.clamp(0, 100) as f64
}

pub fn bond_share(stock_share: f64) -> f64 {
    100.0 - stock_share
}

pub fn select_fund_set(simplicity_level: i64) -> &'static FundSet {
    funds::fund_set(SimplicityLevel::from_level(simplicity_level))
}

/// Spreads each asset-class share over its funds, stocks first.
///
/// Entries allocated 0% are kept; hiding them is up to the display.
pub fn build_breakdown(stock_share: f64, bond_share: f64, fund_set: &FundSet) -> AllocationResult {
    let stocks = fund_set
        .stocks
        .iter()
        .map(|entry| allocate_entry(entry, stock_share, AssetClass::Stock));
    let bonds = fund_set
        .bonds
        .iter()
        .map(|entry| allocate_entry(entry, bond_share, AssetClass::Bond));

    AllocationResult {
        stock_share,
        bond_share,
        funds: stocks.chain(bonds).collect(),
    }
}

pub fn allocate(input: &AllocationInput) -> AllocationResult {
    let stocks = stock_share(input.age, input.risk_profile);
    build_breakdown(stocks, bond_share(stocks), input.fund_set)
}

fn allocate_entry(entry: &FundEntry, class_share: f64, asset_class: AssetClass) -> FundAllocation {
    FundAllocation {
        display_name: entry.display_name,
        ticker: entry.ticker,
        percent_of_total_portfolio: class_share * f64::from(entry.share_of_asset_class) / 100.0,
        asset_class,
    }
}
