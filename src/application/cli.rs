use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::HistoryRecord;
use crate::domain::services::actions::help_text;
use crate::domain::services::History;
use crate::domain::services::ResultPresenter;
use crate::infrastructure::api::ServiceManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_record(record: &HistoryRecord) -> String {
    return format!(
        "- (ID: {}) {}, {} {}, Score: {}%",
        record.id,
        record.display_date,
        ResultPresenter::severity_icon(record.level),
        record.level,
        ResultPresenter::score_percent(record.score),
    );
}

async fn fetch_history() -> Result<History> {
    let payload = ServiceManager::get().history().await?;
    return Ok(History::from_payload(&payload));
}

async fn print_history_list() -> Result<()> {
    let history = fetch_history().await?;

    if history.records.is_empty() {
        println!("There are no completed assessments yet. You should take your first one!");
        return Ok(());
    }

    let listing = history
        .records
        .iter()
        .map(format_record)
        .collect::<Vec<String>>()
        .join("\n");

    println!("{listing}");
    return Ok(());
}

async fn delete_record(session_id: i64) -> Result<()> {
    let history = fetch_history().await?;
    let record = match history.get(session_id) {
        Some(record) => record,
        None => bail!(format!("No completed session with ID {session_id}")),
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Permanently delete this session?\n  {}",
            format_record(record)
        ))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Kept session {session_id}");
        return Ok(());
    }

    ServiceManager::get().delete_session(session_id).await?;
    println!("Deleted session {session_id}");
    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Wellcheck")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Wellcheck with environment variable RUST_LOG=wellcheck")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_sessions_delete() -> Command {
    return Command::new("delete")
        .about("Delete a past assessment session.")
        .arg(
            clap::Arg::new("session-id")
                .short('i')
                .long("id")
                .help("Session ID")
                .value_parser(value_parser!(i64))
                .required(true),
        );
}

fn arg_service_url() -> Arg {
    return Arg::new(ConfigKey::ServiceURL.to_string())
        .short('u')
        .long(ConfigKey::ServiceURL.to_string())
        .env("WELLCHECK_SERVICE_URL")
        .num_args(1)
        .help(format!(
            "The assessment service base URL. [default: {}]",
            Config::default(ConfigKey::ServiceURL)
        ));
}

fn arg_service_timeout() -> Arg {
    return Arg::new(ConfigKey::ServiceTimeout.to_string())
        .long(ConfigKey::ServiceTimeout.to_string())
        .env("WELLCHECK_SERVICE_TIMEOUT")
        .num_args(1)
        .help(format!(
            "Time to wait in milliseconds before timing out when doing a healthcheck against the service. [default: {}]",
            Config::default(ConfigKey::ServiceTimeout)
        ));
}

fn arg_session_cookie() -> Arg {
    return Arg::new(ConfigKey::SessionCookie.to_string())
        .long(ConfigKey::SessionCookie.to_string())
        .env("WELLCHECK_SESSION_COOKIE")
        .num_args(1)
        .help("Session cookie used to authenticate against the service.");
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start a new assessment session.")
        .arg(arg_service_url())
        .arg(arg_service_timeout())
        .arg(arg_session_cookie());
}

fn subcommand_sessions() -> Command {
    return Command::new("sessions")
        .about("Manage past assessment sessions.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List all completed sessions with their ids, dates, and scores."),
        )
        .subcommand(subcommand_sessions_delete());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}")).underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("wellcheck")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_sessions())
        .arg(arg_service_url())
        .arg(arg_service_timeout())
        .arg(arg_session_cookie())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("WELLCHECK_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .long(ConfigKey::Username.to_string())
                .env("WELLCHECK_USERNAME")
                .num_args(1)
                .help("Your name as displayed in your answer bubbles. Defaults to your system user.")
                .global(true),
        );
}

async fn load_config(matches: Vec<&ArgMatches>) -> Result<()> {
    return Config::load(build(), matches).await;
}

/// Returns true when the chat UI should start, false when the invocation was
/// fully handled here.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir().unwrap().join("wellcheck/debug.log");
                    println!("{}", log_path.to_str().unwrap());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            load_config(vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("sessions", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("list", _)) => {
                load_config(vec![&matches, subcmd_matches]).await?;
                print_history_list().await?;
                return Ok(false);
            }
            Some(("delete", delete_matches)) => {
                load_config(vec![&matches, delete_matches]).await?;
                let session_id = delete_matches.get_one::<i64>("session-id").unwrap();
                delete_record(*session_id).await?;
                return Ok(false);
            }
            _ => {
                subcommand_sessions().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            load_config(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
