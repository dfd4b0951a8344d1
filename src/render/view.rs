use serde::Serialize;

use crate::core::{AllocationResult, AssetClass, FundAllocation};

pub const STOCK_COLORS: [&str; 3] = ["#3498db", "#2980b9", "#1f77b4"];
pub const BOND_COLORS: [&str; 3] = ["#e74c3c", "#c0392b", "#d62728"];

const SLICE_BORDER_COLOR: &str = "#ffffff";
const SLICE_BORDER_WIDTH: u32 = 2;

/// One row of the fund list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub name: String,
    pub ticker: String,
    pub allocation_percent_text: String,
    pub style_tag: &'static str,
}

/// Everything the pie chart needs; index `i` of each vector describes one slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub tooltips: Vec<String>,
    pub border_color: &'static str,
    pub border_width: u32,
    pub legend_position: &'static str,
}

impl ChartConfig {
    pub fn tooltip_label(&self, index: usize) -> Option<&str> {
        self.tooltips.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub stock_label: String,
    pub bond_label: String,
    pub funds: Vec<DisplayRecord>,
    pub chart: ChartConfig,
}

/// Formats to one decimal the way a browser's `toFixed(1)` does: values
/// exactly halfway between two tenths round up, not to even.
pub fn format_percent(value: f64) -> String {
    let scaled = value * 10.0;
    let exact_tie = (value * 4.0).fract() == 0.0 && scaled.fract().abs() == 0.5;
    if exact_tie {
        format!("{:.1}", scaled.round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

pub fn share_label(share: f64) -> String {
    format!("{share:.0}%")
}

pub fn displayed_funds(result: &AllocationResult) -> impl Iterator<Item = &FundAllocation> {
    result
        .funds
        .iter()
        .filter(|fund| fund.percent_of_total_portfolio > 0.0)
}

/// Colors for the displayed funds, cycling each palette by position among
/// the displayed funds of the same asset class.
pub fn slice_colors<'a>(funds: impl IntoIterator<Item = &'a FundAllocation>) -> Vec<&'static str> {
    let mut stock_index = 0;
    let mut bond_index = 0;
    funds
        .into_iter()
        .map(|fund| match fund.asset_class {
            AssetClass::Stock => {
                let color = STOCK_COLORS[stock_index % STOCK_COLORS.len()];
                stock_index += 1;
                color
            }
            AssetClass::Bond => {
                let color = BOND_COLORS[bond_index % BOND_COLORS.len()];
                bond_index += 1;
                color
            }
        })
        .collect()
}

pub fn build_view(result: &AllocationResult) -> PortfolioView {
    let shown: Vec<&FundAllocation> = displayed_funds(result).collect();
    let colors = slice_colors(shown.iter().copied());

    let funds = shown
        .iter()
        .map(|fund| DisplayRecord {
            name: fund.display_name.to_string(),
            ticker: fund.ticker.to_string(),
            allocation_percent_text: format_percent(fund.percent_of_total_portfolio),
            style_tag: fund.asset_class.style_tag(),
        })
        .collect();

    let chart = ChartConfig {
        labels: shown.iter().map(|fund| fund.ticker.to_string()).collect(),
        values: shown
            .iter()
            .map(|fund| fund.percent_of_total_portfolio)
            .collect(),
        colors: colors.into_iter().map(str::to_string).collect(),
        tooltips: shown
            .iter()
            .map(|fund| {
                format!(
                    "{}: {}%",
                    fund.display_name,
                    format_percent(fund.percent_of_total_portfolio)
                )
            })
            .collect(),
        border_color: SLICE_BORDER_COLOR,
        border_width: SLICE_BORDER_WIDTH,
        legend_position: "bottom",
    };

    PortfolioView {
        stock_label: share_label(result.stock_share),
        bond_label: share_label(result.bond_share),
        funds,
        chart,
    }
}
