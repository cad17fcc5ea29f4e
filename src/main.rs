use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use chat_overlay::{default_steps, ChatDisplayHarness, Config, TextInput};

#[tokio::main]
async fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = match Config::load_with_env(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = chat_overlay::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        let _ = chat_overlay::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> chat_overlay::Result<()> {
    info!(
        "Chat overlay on {} ({}) as {}",
        config.channel.name, config.channel.topic, config.chat.username
    );

    let mut harness = ChatDisplayHarness::setup(config).await?;
    harness.run_all(&default_steps())?;

    let mut printed = print_new_lines(&harness, 0).await?;

    if config.harness.interactive {
        let mut input = TextInput::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            input.set_text(line);
            harness.overlay().commit(&mut input)?;
            printed += print_new_lines(&harness, printed).await?;
        }
    }

    let channels = harness.shutdown().await?;
    info!("Worker stopped with {} channel(s)", channels.channel_count());
    Ok(())
}

/// Print transcript lines past `already_printed`, returning how many were printed.
async fn print_new_lines(
    harness: &ChatDisplayHarness,
    already_printed: usize,
) -> chat_overlay::Result<usize> {
    let transcript = harness.transcript().await?;
    let new_lines = transcript.get(already_printed..).unwrap_or_default();
    for line in new_lines {
        println!("{line}");
    }
    Ok(new_lines.len())
}
