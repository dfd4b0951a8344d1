mod input;
mod presenter;
mod view;

pub use input::{InputError, RawInputs, parse_age, parse_inputs, parse_int, parse_risk_level};
pub use presenter::{ChartCapture, ChartId, ChartSurface, FundListSurface, ListCapture, Presenter};
pub use view::{
    BOND_COLORS, ChartConfig, DisplayRecord, PortfolioView, STOCK_COLORS, build_view,
    displayed_funds, format_percent, share_label, slice_colors,
};
