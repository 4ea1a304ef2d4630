use clap::Parser;
use claimcheck::Profile;
use claimcheck::core::config::{self, ClaimCheckConfig, CliOverrides};
use claimcheck::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "claimcheck", about = "Submit claims to a claim-processing service")]
struct Args {
    /// Service profile (endpoint, result field, echo behaviour)
    #[arg(short, long, value_enum)]
    profile: Option<Profile>,

    /// Base URL of the claim service, e.g. http://127.0.0.1:8000
    #[arg(short, long)]
    base_url: Option<String>,

    /// Echo the claim with a typing effect while waiting
    #[arg(long, conflicts_with = "no_echo")]
    echo: bool,

    /// Disable the echo typing effect
    #[arg(long)]
    no_echo: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        let echo_reveal = match (self.echo, self.no_echo) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CliOverrides {
            profile: self.profile,
            base_url: self.base_url.clone(),
            echo_reveal,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to claimcheck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("claimcheck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        ClaimCheckConfig::default()
    });
    let resolved = config::resolve(&file_config, &args.overrides());

    log::info!(
        "claimcheck starting up with profile {} against {}",
        resolved.profile.label(),
        resolved.base_url
    );

    tui::run(resolved)
}
