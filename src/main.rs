mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use post_pulse::config::ScoringConfig;
use post_pulse::scoring::tips;
use post_pulse::ScoreEngine;

#[derive(Parser)]
#[command(name = "post-pulse", about = "Post engagement scorer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Score(ScoreArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ScoreArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Score(ScoreArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_score(args: ScoreArgs) -> Result<(), String> {
    let text = read_text(args.text)?;
    let (config, _) = ScoringConfig::load(None)?;
    let engine = ScoreEngine::new(config)?;
    let result = engine.score(&text);

    if args.json {
        let payload = serde_json::to_string_pretty(&result)
            .map_err(|err| format!("failed to serialize result: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!("Overall score: {}/100", result.overall);
    println!(
        "Factors: likeability {:.0} | reply potential {:.0} | shareability {:.0} | dwell time {:.0} | hook strength {:.0}",
        result.factors.likeability,
        result.factors.reply_potential,
        result.factors.shareability,
        result.factors.dwell_time,
        result.factors.hook_strength
    );

    let shown = if args.details {
        &result.tips[..]
    } else {
        tips::display_tips(&result.tips)
    };
    if !shown.is_empty() {
        println!("\nTips:");
        for tip in shown {
            println!("- {}", tip);
        }
    }

    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing post text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
