/*
[INPUT]:  CLI arguments, YAML settings file
[OUTPUT]: JSON responses of feed and direct thread calls on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI commands or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use igpapi_android::{Feed, IgpapiClient, Recipients, SessionSigningKey, Settings, collect_all};

#[derive(Parser, Debug)]
#[command(name = "igpapi", version, about = "Mobile API client: feeds and direct threads")]
struct Cli {
    /// Settings file; required by every command except `keygen`
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the active story items of a user
    Story { user_id: String },
    /// Print blocked users (first page unless --all)
    Blocked {
        #[arg(long)]
        all: bool,
    },
    /// Direct thread actions
    Thread {
        #[command(subcommand)]
        action: ThreadAction,
    },
    /// Send a text message to a thread or a user
    SendText {
        #[arg(long, conflicts_with = "user_id", required_unless_present = "user_id")]
        thread_id: Option<String>,
        #[arg(long)]
        user_id: Option<String>,
        text: String,
    },
    /// Print a new base64 signing key for the `signing_key` setting
    Keygen,
}

#[derive(Subcommand, Debug)]
enum ThreadAction {
    Approve { thread_id: String },
    Decline { thread_id: String },
    Mute { thread_id: String },
    Unmute { thread_id: String },
    Leave { thread_id: String },
    Hide { thread_id: String },
    Title { thread_id: String, title: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Keygen = args.command {
        return print_json(&keygen());
    }

    let config_path = args
        .config_path
        .context("--config is required for this command")?;
    info!(config_path = %config_path.display(), "starting igpapi");

    let settings = Settings::from_file(&config_path).context("load settings")?;
    let client = IgpapiClient::from_settings(settings).context("build client")?;

    run(&client, args.command).await
}

async fn run(client: &IgpapiClient, command: Command) -> Result<()> {
    match command {
        Command::Story { user_id } => {
            let mut feed = client.user_story_feed(user_id);
            let items = collect_all(&mut feed).await.context("fetch user story")?;
            info!(count = items.len(), "story items fetched");
            print_json(&items)
        }
        Command::Blocked { all } => {
            let mut feed = client.blocked_users_feed();
            let users = if all {
                collect_all(&mut feed).await
            } else {
                feed.items_page().await
            }
            .context("fetch blocked users")?;
            info!(
                count = users.len(),
                more_available = feed.is_more_available(),
                "blocked users fetched"
            );
            print_json(&users)
        }
        Command::Thread { action } => run_thread_action(client, action).await,
        Command::Keygen => print_json(&keygen()),
        Command::SendText {
            thread_id,
            user_id,
            text,
        } => {
            let recipients = match (thread_id, user_id) {
                (Some(thread_id), None) => Recipients::thread(thread_id),
                (None, Some(user_id)) => Recipients::user(user_id),
                _ => return Err(anyhow!("exactly one of --thread-id or --user-id is required")),
            };
            let response = client
                .direct_thread()
                .broadcast_text(recipients, text)
                .await
                .context("send text")?;
            print_json(&response)
        }
    }
}

async fn run_thread_action(client: &IgpapiClient, action: ThreadAction) -> Result<()> {
    let threads = client.direct_thread();
    match action {
        ThreadAction::Approve { thread_id } => print_json(&threads.approve(thread_id).await?),
        ThreadAction::Decline { thread_id } => print_json(&threads.decline(thread_id).await?),
        ThreadAction::Mute { thread_id } => print_json(&threads.mute(thread_id).await?),
        ThreadAction::Unmute { thread_id } => print_json(&threads.unmute(thread_id).await?),
        ThreadAction::Leave { thread_id } => print_json(&threads.leave(thread_id).await?),
        ThreadAction::Hide { thread_id } => print_json(&threads.hide(thread_id).await?),
        ThreadAction::Title { thread_id, title } => {
            print_json(&threads.update_title(thread_id, title).await?)
        }
    }
}

#[derive(Debug, Serialize)]
struct GeneratedKey {
    signing_key: String,
    public_key: String,
}

fn keygen() -> GeneratedKey {
    let key = SessionSigningKey::random();
    GeneratedKey {
        signing_key: key.to_base64(),
        public_key: key.public_key_base64(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
