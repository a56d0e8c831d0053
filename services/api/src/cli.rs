use crate::report::{run_catalog, run_letter, run_score, LetterArgs, ScoreArgs};
use crate::server;
use assess_align::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Assess & Align",
    about = "Score research partnership proposals against the equity rubric and draft feedback letters",
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
    /// Print the rubric questions grouped by dimension
    Catalog,
    /// Score an answers file and print the dimension ratings
    Score(ScoreArgs),
    /// Print only the feedback letter for an answers file
    Letter(LetterArgs),
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
        Command::Catalog => run_catalog(),
        Command::Score(args) => run_score(args),
        Command::Letter(args) => run_letter(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["assess-align"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_answers_path_and_letter_flag() {
        let cli = Cli::try_parse_from(["assess-align", "score", "--answers", "a.json", "--letter"])
            .expect("parses");
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers.to_string_lossy(), "a.json");
                assert!(args.letter);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }
}
