#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use releve::{run_swap, ApiConfig, PagerDutyClient, SwapOutcome, SwapRequest};
use std::time::Duration;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Échange les semaines d'astreinte de l'utilisateur courant et d'un autre
/// utilisateur sur un planning PagerDuty.
///
/// Le jeton d'API est lu depuis la variable d'environnement `API_TOKEN` ;
/// la verbosité depuis `LOG_LEVEL` (défaut: info).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Nom du planning (recherche floue, premier résultat retenu)
    #[arg(long)]
    schedule: String,

    /// Début de la semaine de l'utilisateur courant (YYYY-MM-DD, UTC)
    #[arg(long = "current_user_week")]
    current_user_week: NaiveDate,

    /// Nom ou email de l'autre utilisateur (recherche floue)
    #[arg(long = "other_username")]
    other_username: String,

    /// Début de la semaine de l'autre utilisateur (YYYY-MM-DD, UTC)
    #[arg(long = "other_user_week")]
    other_user_week: NaiveDate,

    /// Journalise les overrides sans les soumettre
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Timeout HTTP en secondes
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = Subscriber::builder().with_env_filter(filter).try_init();

    let config = ApiConfig::from_env()?.with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = PagerDutyClient::new(config)?;

    let request = SwapRequest {
        schedule: cli.schedule,
        current_user_week: cli.current_user_week,
        other_username: cli.other_username,
        other_user_week: cli.other_user_week,
        dry_run: cli.dry_run,
    };

    // Les échecs de résolution sont déjà journalisés par l'orchestrateur et
    // sortent proprement ; seules les erreurs API font échouer le process.
    let code = match run_swap(&client, &request)? {
        SwapOutcome::Completed { overrides } => {
            println!(
                "{} override(s) {}",
                overrides,
                if cli.dry_run { "simulated (dry-run)" } else { "created" }
            );
            0
        }
        SwapOutcome::UserNotFound(_) | SwapOutcome::ScheduleNotFound(_) => 0,
    };

    std::process::exit(code);
}
