use clap::{Parser, Subcommand};
use colored::Colorize;
use quizmark::commands;
use quizmark::config::{AppContext, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizmark")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Markdown quiz study tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract questions from a markdown document into a CSV file
    Extract {
        /// Markdown document with ### question blocks
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "questions.csv")]
        output: PathBuf,

        /// Generate an explanation for every question (requires OPENAI_API_KEY)
        #[arg(long)]
        explain: bool,

        /// Slide deck PDF used as reference material for explanations
        #[arg(long)]
        slides: Option<PathBuf>,
    },

    /// Take a randomized practice exam in the terminal
    Quiz {
        /// Markdown document or previously extracted CSV
        input: PathBuf,

        /// Limit the number of questions asked
        #[arg(short, long)]
        limit: Option<usize>,

        /// Seed for reproducible shuffling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Browse questions and explanations interactively
    Browse {
        /// CSV produced by `quizmark extract`
        input: PathBuf,

        /// Explanations JSON produced by a previous browse session
        #[arg(long)]
        explanations: Option<PathBuf>,

        /// Slide deck PDF used as reference material for explanations
        #[arg(long)]
        slides: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    quizmark::init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(Config::from_env());

    match cli.command {
        Commands::Extract {
            input,
            output,
            explain,
            slides,
        } => commands::extract::run(&ctx, &input, &output, explain, slides.as_deref()).await,

        Commands::Quiz { input, limit, seed } => commands::quiz::run(&input, limit, seed),

        Commands::Browse {
            input,
            explanations,
            slides,
        } => commands::browse::run(&ctx, &input, explanations.as_deref(), slides.as_deref()).await,
    }
}
