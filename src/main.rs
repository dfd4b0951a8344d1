use clap::Parser;
use portfolio_builder::cli::{Cli, Command, run_allocate};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    portfolio_builder::logging::init_tracing();

    match cli.command {
        Command::Serve(args) => {
            if let Err(e) = portfolio_builder::api::run_http_server(args.addr()).await {
                tracing::error!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Allocate(args) => match run_allocate(&args) {
            Ok(output) => print!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
    }
}
