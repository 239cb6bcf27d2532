use clap::{Parser, Subcommand};

mod commands;
mod util;

#[derive(Parser)]
#[command(
    name = "shutterdesk",
    version,
    about = "Shutterdesk CLI — aggregated calendar and dashboard payloads from the studio backend"
)]
struct Cli {
    /// API base URL
    #[arg(long, env = "SHUTTERDESK_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Day-indexed shoot events for one month
    Calendar {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// Rolling chart payloads for the dashboard
    Dashboard,
    /// Filtered project listing
    Projects {
        /// Case-insensitive text query across name, code, status and client
        #[arg(long, default_value = "")]
        query: String,
        /// Filters, OR'd together: active, pending, completed, high_value, outsourced
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Commands::Calendar { year, month } => {
            commands::calendar::run(&cli.api_url, year, month).await
        }
        Commands::Dashboard => commands::dashboard::run(&cli.api_url).await,
        Commands::Projects { query, filters } => {
            commands::projects::run(&cli.api_url, &query, &filters).await
        }
    };
    std::process::exit(exit_code);
}
