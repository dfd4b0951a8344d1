use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::render::{ChartCapture, InputError, ListCapture, Presenter, RawInputs};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-builder",
    about = "Stock/bond allocation across a fixed set of index funds from age and risk level"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the web page and the JSON API
    Serve(ServeArgs),
    /// Print one allocation
    Allocate(AllocateArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl ServeArgs {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct AllocateArgs {
    #[arg(long, help = "Investor age, 18 to 100")]
    pub age: String,
    #[arg(
        long,
        default_value = "1",
        help = "1 = simple, 2 = moderate, 3 = diversified; anything else is simple"
    )]
    pub simplicity: String,
    #[arg(
        long,
        default_value = "2",
        help = "1 = conservative, 2 = balanced, 3 = aggressive"
    )]
    pub risk_level: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Error)]
pub enum AllocateError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to encode allocation: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn run_allocate(args: &AllocateArgs) -> Result<String, AllocateError> {
    let mut presenter = Presenter::new(ChartCapture::default(), ListCapture::default());
    let view = presenter.update(&RawInputs {
        age: &args.age,
        simplicity: &args.simplicity,
        risk_level: &args.risk_level,
    })?;

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        OutputFormat::Table => Ok(render_table(presenter.list_surface())),
    }
}

fn render_table(list: &ListCapture) -> String {
    let mut out = format!("Stocks {}  Bonds {}\n", list.stock_label, list.bond_label);
    for fund in &list.funds {
        let percent = format!("{}%", fund.allocation_percent_text);
        out.push_str(&format!(
            "{:<6} {:<5} {:>6}  {}\n",
            fund.ticker, fund.style_tag, percent, fund.name
        ));
    }
    out
}
