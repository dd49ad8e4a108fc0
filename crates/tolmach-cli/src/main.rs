use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use tolmach_core::{DEFAULT_BASENAME, HttpBackend, Workflow, default_output_dir, deliver};

#[derive(Parser)]
#[command(name = "tolmach")]
#[command(about = "Upload media or text, pull captions from the indexing backend, and download translations")]
struct Cli {
    /// Base URL of the indexing/translation backend
    #[arg(long, env = "TOLMACH_API_URL")]
    api_url: String,

    /// Directory the translated file is written to (default: downloads)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Basename for the delivered file (".txt" is appended)
    #[arg(short, long, default_value = DEFAULT_BASENAME)]
    name: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload an audio/video file, wait for indexing, translate the captions
    Media { file: PathBuf },

    /// Translate the contents of a text file directly
    Text { file: PathBuf },

    /// List the jobs the backend already knows about
    List,

    /// Translate the captions of an already-indexed job by id
    Pick { id: String },
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let backend = Arc::new(HttpBackend::new(&cli.api_url));
    let workflow = Workflow::new(backend);
    let out_dir = cli.output.unwrap_or_else(default_output_dir);

    match cli.command {
        Command::Media { file } => {
            let payload = fs::read(&file).await?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());

            let spinner = create_spinner("Uploading and indexing...");
            let transcript = workflow.ingest_media(&file_name, payload).await?;
            spinner.finish_with_message(format!(
                "{} Indexed: {} characters of captions",
                style("✓").green().bold(),
                transcript.chars().count()
            ));

            translate_and_deliver(&workflow, &cli.name, &out_dir).await?;
        }
        Command::Text { file } => {
            let text = fs::read_to_string(&file).await?;
            workflow.ingest_text(text);
            println!(
                "{} Text loaded: {}",
                style("✓").green().bold(),
                style(file.display()).dim()
            );

            translate_and_deliver(&workflow, &cli.name, &out_dir).await?;
        }
        Command::List => {
            let listing = workflow.list_videos().await?;
            if listing.is_empty() {
                println!("No indexed jobs on the backend yet.");
            }
            for entry in listing {
                println!("{}  {}", style(&entry.id).yellow(), entry.name);
            }
        }
        Command::Pick { id } => {
            let spinner = create_spinner("Fetching captions...");
            let transcript = workflow.ingest_listed(&id).await?;
            spinner.finish_with_message(format!(
                "{} Captions loaded: {} characters",
                style("✓").green().bold(),
                transcript.chars().count()
            ));

            translate_and_deliver(&workflow, &cli.name, &out_dir).await?;
        }
    }

    Ok(())
}

async fn translate_and_deliver(workflow: &Workflow, name: &str, out_dir: &Path) -> Result<()> {
    let spinner = create_spinner("Translating...");
    let translated = workflow.translate().await?;
    spinner.finish_with_message(format!("{} Translated", style("✓").green().bold()));

    let path = deliver(&translated, name, out_dir).await?;
    println!(
        "{} Saved to {}",
        style("✓").green().bold(),
        style(path.display()).dim()
    );
    Ok(())
}
