use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::io::Write;

use hollow_bot::application::errors::StorageError;
use hollow_bot::application::services::ChatService;
use hollow_bot::domain::entities::ChatbotModel;
use hollow_bot::infrastructure::config::Config;
use hollow_bot::infrastructure::storage::ModelStore;

#[derive(Parser)]
#[command(name = "hollow-bot")]
#[command(about = "A deliberately backdoored chatbot model (deserialization supply-chain demo)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a model with an embedded payload command and save it
    Build,
    /// Load a saved model and run a prompt through it
    Run {
        /// Path to the serialized model
        model_path: String,
        /// Prompt text to feed the model
        prompt: String,
    },
    /// Show version
    Version,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // clap exits 2 on bad arguments by default; the contract here is a
    // usage message and exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            print!("{}", e.render());
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    };

    match cli.command {
        Commands::Build => {
            build_model(&cli.config);
        }
        Commands::Run { model_path, prompt } => {
            run_model(&model_path, &prompt);
        }
        Commands::Version => {
            println!("hollow-bot v{}", env!("CARGO_PKG_VERSION"));
        }
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn build_model(config_path: &str) {
    let config = load_config(config_path);
    tracing::debug!("Building model for {}", config.bot.name);

    print!("Enter the command to execute on trigger: ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        println!("Error: Failed to read command from stdin.");
        std::process::exit(1);
    }
    let payload = line.trim();
    let payload = (!payload.is_empty()).then(|| payload.to_string());

    let model = ChatbotModel::new(config.model.vocab_size, config.model.hidden_size, payload);

    let store = ModelStore::new();
    if let Err(e) = store.save(&model, &config.model.path) {
        println!("Error: Failed to save model. {}", e);
        std::process::exit(1);
    }

    tracing::debug!("Model {} written to {}", model.id, config.model.path);
    println!(
        "Malicious chatbot model has been saved with command '{}'.",
        model.payload_command()
    );
}

fn run_model(model_path: &str, prompt: &str) {
    let store = ModelStore::new();
    let model = match store.load(model_path) {
        Ok(model) => model,
        Err(StorageError::NotFound(path)) => {
            println!("Error: Model file '{}' not found.", path);
            std::process::exit(1);
        }
        Err(e) => {
            println!("Error: Failed to run chatbot. {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "Loaded model {} (vocab={}, hidden={})",
        model.id,
        model.vocab_size,
        model.hidden_size
    );

    let service = ChatService::new(model);
    match service.process(prompt) {
        Ok(reply) => println!("{}", reply),
        Err(e) => {
            println!("Error: Failed to run chatbot. {}", e);
            std::process::exit(1);
        }
    }
}
