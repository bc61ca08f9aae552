use crate::demo::{run_demo, run_quiz, run_score, DemoArgs, QuizArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use homecoming::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Homecoming",
    about = "Score characters, classify archetypes, and serve the Homecoming API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single attribute allocation
    Score(ScoreArgs),
    /// Classify a 20-letter answer sheet
    Quiz(QuizArgs),
    /// Walk through a full character, bonus, and quiz session
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Quiz(args) => run_quiz(args),
        Command::Demo(args) => run_demo(args),
    }
}
