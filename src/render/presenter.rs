use crate::core::allocate;

use super::input::{InputError, RawInputs, parse_inputs};
use super::view::{ChartConfig, DisplayRecord, PortfolioView, build_view};

/// Draws pie charts. The chart handle returned by `create_chart` stays live
/// until it is handed back to `destroy_chart`.
pub trait ChartSurface {
    type Chart;

    fn create_chart(&mut self, config: &ChartConfig) -> Self::Chart;
    fn destroy_chart(&mut self, chart: Self::Chart);
}

/// Shows the stock/bond headline and the fund rows.
pub trait FundListSurface {
    fn show_split(&mut self, stock_label: &str, bond_label: &str);
    fn show_funds(&mut self, funds: &[DisplayRecord]);
}

/// Recomputes and redraws the portfolio on every input change.
///
/// Holds at most one live chart. Each successful update destroys it before
/// creating the replacement; a rejected update touches nothing.
pub struct Presenter<C: ChartSurface, L: FundListSurface> {
    chart_surface: C,
    list_surface: L,
    chart: Option<C::Chart>,
}

impl<C: ChartSurface, L: FundListSurface> Presenter<C, L> {
    pub fn new(chart_surface: C, list_surface: L) -> Self {
        Self {
            chart_surface,
            list_surface,
            chart: None,
        }
    }

    pub fn update(&mut self, raw: &RawInputs<'_>) -> Result<PortfolioView, InputError> {
        let input = match parse_inputs(raw) {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(error = %err, "inputs rejected, keeping previous display");
                return Err(err);
            }
        };

        let view = build_view(&allocate(&input));
        self.list_surface
            .show_split(&view.stock_label, &view.bond_label);
        self.list_surface.show_funds(&view.funds);
        self.replace_chart(&view.chart);

        tracing::debug!(
            age = input.age,
            risk = input.risk_profile.name(),
            funds = view.funds.len(),
            "portfolio updated"
        );
        Ok(view)
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn chart_surface(&self) -> &C {
        &self.chart_surface
    }

    pub fn list_surface(&self) -> &L {
        &self.list_surface
    }

    /// Releases the live chart, if any.
    pub fn clear(&mut self) {
        if let Some(old) = self.chart.take() {
            self.chart_surface.destroy_chart(old);
        }
    }

    fn replace_chart(&mut self, config: &ChartConfig) {
        self.clear();
        self.chart = Some(self.chart_surface.create_chart(config));
    }
}

impl<C: ChartSurface, L: FundListSurface> Drop for Presenter<C, L> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Handle to a chart drawn by [`ChartCapture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartId(u64);

/// In-memory chart surface: keeps the configuration of every live chart.
#[derive(Debug, Default)]
pub struct ChartCapture {
    next_id: u64,
    live: Vec<(ChartId, ChartConfig)>,
    destroyed: usize,
}

impl ChartCapture {
    pub fn live_charts(&self) -> usize {
        self.live.len()
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub fn current(&self) -> Option<&ChartConfig> {
        self.live.last().map(|(_, config)| config)
    }
}

impl ChartSurface for ChartCapture {
    type Chart = ChartId;

    fn create_chart(&mut self, config: &ChartConfig) -> ChartId {
        let id = ChartId(self.next_id);
        self.next_id += 1;
        self.live.push((id, config.clone()));
        id
    }

    fn destroy_chart(&mut self, chart: ChartId) {
        self.live.retain(|(id, _)| *id != chart);
        self.destroyed += 1;
    }
}

/// In-memory list surface: keeps what was last shown.
#[derive(Debug, Default)]
pub struct ListCapture {
    pub stock_label: String,
    pub bond_label: String,
    pub funds: Vec<DisplayRecord>,
}

impl FundListSurface for ListCapture {
    fn show_split(&mut self, stock_label: &str, bond_label: &str) {
        self.stock_label = stock_label.to_string();
        self.bond_label = bond_label.to_string();
    }

    fn show_funds(&mut self, funds: &[DisplayRecord]) {
        self.funds = funds.to_vec();
    }
}
