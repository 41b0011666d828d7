use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use healthqa::{AskQuestionUseCase, GroqChatClient, Question, SubmissionOutcome};

const PROMPT_LABEL: &str = "Enter your healthcare-related question:";
const PLACEHOLDER: &str = "Example: What are common symptoms of iron deficiency anemia?";
const EMPTY_INPUT_WARNING: &str = "Please enter a question before submitting.";
const FAILURE_NOTICE: &str = "Something went wrong while generating the response.";
const FOOTER_DISCLAIMER: &str =
    "This tool provides informational support only and is not a substitute for professional medical advice.";

#[derive(Parser)]
#[command(name = "healthqa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a single question and print the answer
    Ask { question: String },

    /// Read questions interactively, one per line (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let chat_client = match GroqChatClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            println!("{FAILURE_NOTICE}");
            println!("  {e}");
            print_footer();
            return Err(e.into());
        }
    };

    info!("Using model {}", GroqChatClient::model());

    let use_case = AskQuestionUseCase::new(chat_client);

    match cli.command {
        Some(Commands::Ask { question }) => {
            let outcome = submit(&use_case, &question).await;
            render_outcome(&outcome);
            print_footer();
        }

        Some(Commands::Interactive) | None => {
            run_interactive(&use_case).await?;
        }
    }

    Ok(())
}

/// Run one submission with a spinner while the call is in flight.
async fn submit(use_case: &AskQuestionUseCase, input: &str) -> SubmissionOutcome {
    let question = Question::new(input);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Generating response...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = use_case.execute(&question).await;

    spinner.finish_and_clear();
    outcome
}

/// Print exactly one of the three terminal banners.
fn render_outcome(outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Rejected => {
            println!("{EMPTY_INPUT_WARNING}");
        }
        SubmissionOutcome::Succeeded(answer) => {
            println!("Answer:");
            println!("{answer}");
        }
        SubmissionOutcome::Failed { detail } => {
            println!("{FAILURE_NOTICE}");
            println!("  {detail}");
        }
    }
}

fn print_footer() {
    println!("---");
    println!("{FOOTER_DISCLAIMER}");
}

async fn run_interactive(use_case: &AskQuestionUseCase) -> Result<()> {
    println!("Healthcare GenAI QA Assistant");
    println!("Ask evidence-based healthcare questions and receive concise, safe answers.");
    println!();

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        println!("{PROMPT_LABEL}");
        println!("  ({PLACEHOLDER})");
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session.
            break;
        }

        // Strip the line terminator only; any other whitespace stays in
        // the payload.
        let input = line.strip_suffix('\n').unwrap_or(&line);
        let input = input.strip_suffix('\r').unwrap_or(input);

        let outcome = submit(use_case, input).await;
        render_outcome(&outcome);
        print_footer();
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn ask_takes_a_single_question_argument() {
        let cli = Cli::try_parse_from(["healthqa", "ask", "What causes anemia?"]).unwrap();
        match cli.command {
            Some(Commands::Ask { question }) => assert_eq!(question, "What causes anemia?"),
            _ => panic!("expected the ask subcommand"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["healthqa"]).unwrap();
        assert!(cli.command.is_none());
    }
}
