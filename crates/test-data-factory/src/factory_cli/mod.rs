//! Command-line front end for the factory.
//!
//! The binary parses [`Cli`] and delegates to [`run`], which returns the
//! output text so the whole flow can be exercised without spawning a
//! process.

mod error;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::locale::Locale;
use crate::presentation::{Action, KEYBOARD, Reply, welcome_text};
use crate::settings::FactorySettings;

pub use error::CliError;

/// `test-data-factory` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "test-data-factory",
    about = "Generate synthetic test data: identities, cards, boundary strings and temp emails",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Fixed RNG seed for reproducible output.
    #[arg(long, global = true, value_name = "n")]
    pub seed: Option<u64>,
    /// Characters shown per boundary value before truncation.
    #[arg(long = "preview-limit", global = true, value_name = "n")]
    pub preview_limit: Option<usize>,
    /// Print records as JSON instead of chat Markdown.
    #[arg(long, global = true)]
    pub json: bool,
    /// What to generate.
    #[command(subcommand)]
    pub command: Command,
}

/// Generation commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Full name, postal address and phone number.
    Identity {
        /// Locale tag (`ru` or `en`); anything else means `ru`.
        #[arg(long, value_name = "tag")]
        locale: Option<String>,
    },
    /// Luhn-valid test card.
    Card,
    /// Boundary and injection test strings.
    Boundary,
    /// Disposable email address.
    Email,
    /// Usage help as shown in chat.
    Help,
    /// Greeting as shown on `/start`.
    Start,
    /// Keyboard layout.
    Keyboard,
    /// Dispatch a keyboard button label.
    Press {
        /// Exact button label, e.g. "💳 Номер карты".
        label: String,
    },
}

/// Runs `cli` against `settings` and returns the text to print.
///
/// Flags take precedence over settings.
///
/// # Errors
///
/// Returns [`CliError`] when the preview limit is zero, a pressed label is
/// unknown, or JSON encoding fails.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use test_data_factory::factory_cli::{Cli, run};
/// use test_data_factory::settings::FactorySettings;
///
/// let cli = Cli::parse_from(["test-data-factory", "--seed", "7", "card"]);
/// let settings = FactorySettings { locale: None, preview_limit: 100, seed: None };
///
/// let first = run(&cli, &settings).expect("card renders");
/// let second = run(&cli, &settings).expect("card renders");
/// assert_eq!(first, second);
/// ```
pub fn run(cli: &Cli, settings: &FactorySettings) -> Result<String, CliError> {
    let effective = FactorySettings {
        locale: settings.locale.clone(),
        preview_limit: cli.preview_limit.unwrap_or(settings.preview_limit),
        seed: cli.seed.or(settings.seed),
    };
    effective.validate()?;

    let mut rng = effective.seed.map_or_else(
        || ChaCha8Rng::from_rng(&mut rand::rng()),
        ChaCha8Rng::seed_from_u64,
    );
    let reply = reply_for(&cli.command, &effective, &mut rng)?;
    info!(command = ?cli.command, seeded = effective.seed.is_some(), "generated reply");

    if cli.json {
        serde_json::to_string_pretty(&reply).map_err(|err| CliError::Serialization {
            message: err.to_string(),
        })
    } else {
        Ok(reply.render(effective.preview_limit))
    }
}

fn reply_for(
    command: &Command,
    settings: &FactorySettings,
    rng: &mut ChaCha8Rng,
) -> Result<Reply, CliError> {
    let reply = match command {
        Command::Identity { locale } => {
            let resolved = locale
                .as_deref()
                .map_or_else(|| settings.locale(), Locale::from_tag);
            Action::Identity(resolved).generate(rng)
        }
        Command::Card => Action::Card.generate(rng),
        Command::Boundary => Action::Boundary.generate(rng),
        Command::Email => Action::TempEmail.generate(rng),
        Command::Help => Action::Help.generate(rng),
        Command::Start => Reply::Text(welcome_text()),
        Command::Keyboard => Reply::Keyboard(&KEYBOARD),
        Command::Press { label } => Action::from_label(label)
            .ok_or_else(|| CliError::UnknownButton {
                label: label.clone(),
            })?
            .generate(rng),
    };
    Ok(reply)
}
