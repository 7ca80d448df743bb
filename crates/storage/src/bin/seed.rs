use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rosary_core::model::{IntentionText, Section};
use storage::repository::{NewIntentionRecord, NewPrayerRecord, NewUserRecord, Storage};

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    username: String,
    password: String,
    intentions: u32,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidUsername { raw: String },
    InvalidIntentions { raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidUsername { raw } => write!(f, "invalid --username value: {raw:?}"),
            ArgsError::InvalidIntentions { raw } => {
                write!(f, "invalid --intentions value: {raw}")
            }
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url =
            std::env::var("ROSARY_DB_URL").unwrap_or_else(|_| "sqlite:rosary.sqlite3".into());
        let mut username = std::env::var("ROSARY_SEED_USER").unwrap_or_else(|_| "peregrinus".into());
        let mut password =
            std::env::var("ROSARY_SEED_PASSWORD").unwrap_or_else(|_| "ave-maria".into());
        let mut intentions = std::env::var("ROSARY_SEED_INTENTIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(3);
        let mut now: Option<DateTime<Utc>> = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--username" => {
                    let value = require_value(&mut args, "--username")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidUsername { raw: value });
                    }
                    username = value.trim().to_owned();
                }
                "--password" => {
                    password = require_value(&mut args, "--password")?;
                }
                "--intentions" => {
                    let value = require_value(&mut args, "--intentions")?;
                    intentions = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidIntentions { raw: value.clone() })?;
                }
                "--now" => {
                    let value = require_value(&mut args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            username,
            password,
            intentions,
            now,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite:rosary.sqlite3)");
    eprintln!("  --username <name>         Demo account name (default: peregrinus)");
    eprintln!("  --password <text>         Demo account password (default: ave-maria)");
    eprintln!("  --intentions <n>          Number of sample intentions to add (default: 3)");
    eprintln!("  --now <rfc3339>           Fixed current time for deterministic seeding");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!(
        "  ROSARY_DB_URL, ROSARY_SEED_USER, ROSARY_SEED_PASSWORD, ROSARY_SEED_INTENTIONS"
    );
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::sqlite(&args.db_url).await?;
    let now = args.now.unwrap_or_else(Utc::now);

    let user = match storage.users.find_by_username(&args.username).await? {
        Some(user) => user,
        None => {
            storage
                .users
                .insert_user(NewUserRecord {
                    username: args.username.clone(),
                    password: args.password.clone(),
                    created_at: now,
                })
                .await?
        }
    };

    let samples = [
        "For my family",
        "For the sick and the dying",
        "For peace in the world",
        "For the souls in purgatory",
    ];
    for i in 0..args.intentions {
        let idx = (i as usize) % samples.len();
        let text = IntentionText::new(samples[idx])?;
        storage
            .intentions
            .insert_intention(NewIntentionRecord {
                user_id: user.id(),
                text,
                created_at: now + Duration::seconds(i64::from(i)),
            })
            .await?;
    }

    for (offset, section) in Section::MYSTERIES.into_iter().enumerate() {
        let days_ago = i64::try_from(offset).unwrap_or(0) + 1;
        storage
            .prayers
            .insert_prayer(NewPrayerRecord {
                user_id: user.id(),
                section,
                completed: true,
                created_at: now - Duration::days(days_ago),
            })
            .await?;
    }

    println!(
        "Seeded user {} ({}) with {} intentions into {}",
        user.username(),
        user.id(),
        args.intentions,
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
