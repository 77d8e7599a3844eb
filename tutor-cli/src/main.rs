use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tutor_core::{AskRequest, Config, client};

#[derive(Parser)]
#[command(name = "tutor")]
#[command(about = "AI education tutor CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the tutor backend a question
    Ask {
        /// The question text
        question: String,

        /// Education level (e.g. "Class 10")
        #[arg(short, long, default_value = "")]
        level: String,

        /// Subject (e.g. "Math")
        #[arg(short, long, default_value = "")]
        subject: String,
    },

    /// Send a raw JSON payload to the chat endpoint
    Chat {
        /// Payload: parsed as JSON if possible, otherwise sent as a string
        payload: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            level,
            subject,
        } => {
            ask_command(level, subject, question, &config).await?;
        }
        Commands::Chat { payload } => {
            chat_command(payload, &config).await?;
        }
    }

    Ok(())
}

async fn ask_command(level: String, subject: String, question: String, config: &Config) -> Result<()> {
    info!("Asking tutor backend at {}", config.ask_url());

    let request = AskRequest::new(level, subject, question);
    let response = client::ask(&request, config).await?;

    println!("{}", response.answer_or_default());
    Ok(())
}

async fn chat_command(payload: String, config: &Config) -> Result<()> {
    // Accept either a JSON document or plain text
    let payload = serde_json::from_str(&payload)
        .unwrap_or_else(|_| serde_json::Value::String(payload));

    info!("Sending payload to {}", config.chat_url());

    let reply = client::send_message(&payload, config).await?;

    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
