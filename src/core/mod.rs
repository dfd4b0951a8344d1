mod engine;
mod funds;
mod types;

pub use engine::{
    MAX_AGE, MIN_AGE, allocate, bond_share, build_breakdown, select_fund_set, stock_share,
};
pub use funds::{DIVERSIFIED, MODERATE, SIMPLE, fund_set};
pub use types::{
    AllocationInput, AllocationResult, AssetClass, FundAllocation, FundEntry, FundSet,
    RiskProfile, SimplicityLevel,
};
