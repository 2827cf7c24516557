//! Sauda - Voice Shopping Assistant
//!
//! Bilingual (English/Hindi) shopping list management from spoken commands.
//! Audio goes through the transcription service; text commands work
//! directly, including an interactive prompt.

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use sauda::config::Config;
use sauda::language::Language;
use sauda::session::{Outcome, Session};
use sauda::transcribe::{HttpTranscriber, Transcriber};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Language tag for interpretation (en or hi)
    #[arg(short, long)]
    language: Option<String>,

    /// Transcribe this audio file and run the result as a command
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Run a single text command and exit
    #[arg(short, long)]
    command: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🛒 sauda v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let lang = Language::from_tag(args.language.as_deref().unwrap_or(&config.language));
    info!("🌐 Interpreting as {}", lang.name());

    let mut session = Session::open(
        Path::new(&config.list_path),
        Path::new(&config.history_db_path),
    )?;

    if let Some(audio_path) = args.audio {
        let audio = std::fs::read(&audio_path)?;
        let transcriber = HttpTranscriber::new(&config.transcribe_url, &config.transcribe_api_key)?;
        match transcriber.transcribe(&STANDARD.encode(&audio), lang).await {
            Ok(text) if !text.is_empty() => {
                println!("heard: {}", text);
                let outcome = session.handle(&text, lang)?;
                render(&session, &outcome)?;
            }
            Ok(_) => println!("No text detected. Please try speaking more clearly."),
            Err(e) => {
                // A failed transcription is just "nothing to parse"
                warn!("transcription failed: {}", e);
                println!("Could not transcribe audio: {}", e);
            }
        }
        return Ok(());
    }

    if let Some(text) = args.command {
        let outcome = session.handle(&text, lang)?;
        render(&session, &outcome)?;
        return Ok(());
    }

    repl(&mut session, lang)
}

/// Interactive prompt. Besides spoken-style commands, a few direct words
/// inspect the session: "list", "suggest", "categories", "quit".
fn repl(session: &mut Session, lang: Language) -> Result<()> {
    println!("sauda ready - type a command, or 'quit' to exit");
    println!("  try: 'add 2 bottles of water', 'remove last', 'search for bread under $5'");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "list" => print_list(session),
            "suggest" | "suggestions" => print_suggestions(session)?,
            "categories" => print_categories(),
            _ => {
                let outcome = session.handle(line, lang)?;
                render(session, &outcome)?;
            }
        }
    }
    Ok(())
}

/// Print the outcome of one command, plus fresh suggestions after mutations
fn render(session: &Session, outcome: &Outcome) -> Result<()> {
    println!("{}", outcome.message());

    match outcome {
        Outcome::Search { items, .. }
        | Outcome::Stock { items, .. }
        | Outcome::CategoryItems { items, .. } => {
            for item in items {
                println!(
                    "  {:<14} ${:<6.2} {:<12} ({})",
                    item.name,
                    item.price,
                    if item.available { "in stock" } else { "out of stock" },
                    item.location
                );
            }
        }
        Outcome::Added(_) | Outcome::Removed(_) => {
            print_suggestions(session)?;
        }
        _ => {}
    }
    Ok(())
}

fn print_list(session: &Session) {
    let rows = session.consolidated();
    if rows.is_empty() {
        println!("List is empty. Try: add 2 bottles of water / दो बोतल पानी जोड़ो");
        return;
    }
    println!("Shopping list ({} items):", session.list().len());
    for row in rows {
        let unit = row.unit.as_deref().unwrap_or("");
        let dup = if row.count > 1 {
            format!(" (added {}x)", row.count)
        } else {
            String::new()
        };
        println!("  {} x{} {} [{}]{}", row.name, row.quantity, unit, row.category, dup);
    }
}

fn print_suggestions(session: &Session) -> Result<()> {
    let suggestions = session.suggestions()?;
    if suggestions.is_empty() {
        return Ok(());
    }
    let rendered: Vec<String> = suggestions
        .iter()
        .map(|s| format!("{} ({})", s.name, s.source.label()))
        .collect();
    println!("suggestions: {}", rendered.join(", "));
    Ok(())
}

fn print_categories() {
    for category in sauda::catalog::categories() {
        println!(
            "  {:<10} {} (e.g. {})",
            category.name,
            category.description,
            category.examples[..3.min(category.examples.len())].join(", ")
        );
    }
}
