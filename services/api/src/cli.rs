use crate::infra::{build_engine, cli_config, parse_answer};
use crate::quiz::run_quiz_with;
use crate::report::{
    write_candidate_detail, write_candidates, write_questions, write_recommendations,
    OutputFormat,
};
use crate::server;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use stack_advisor::advisor::{AnswerSet, AnswerValidation};
use stack_advisor::error::AppError;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(
    name = "Stack Advisor",
    about = "Recommend a React state management library from a short questionnaire",
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
    /// Print the questionnaire with every option value
    Questions,
    /// List the catalog, or show one library in detail
    Candidates(CandidatesArgs),
    /// Score a set of answers without the interactive questionnaire
    Recommend(RecommendArgs),
    /// Answer the questionnaire interactively on stdin
    Quiz(QuizArgs),
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

#[derive(Args, Debug)]
struct CandidatesArgs {
    /// Library identifier, e.g. zustand
    id: Option<String>,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Answer as QUESTION=VALUE; repeat for each question
    #[arg(long = "answer", short = 'a', value_parser = parse_answer)]
    answers: Vec<(String, String)>,
    /// Number of libraries to return (defaults to ADVISOR_TOP_N)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    top: Option<usize>,
    /// Reject unknown questions or option values instead of ignoring them
    #[arg(long)]
    strict: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct QuizArgs {
    /// Number of libraries to return (defaults to ADVISOR_TOP_N)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    top: Option<usize>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions => run_questions(),
        Command::Candidates(args) => run_candidates(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Quiz(args) => run_quiz(args),
    }
}

fn run_questions() -> Result<(), AppError> {
    let config = cli_config()?;
    let engine = build_engine(config.advisor)?;
    let mut stdout = io::stdout().lock();
    write_questions(&mut stdout, engine.questions().questions())?;
    Ok(())
}

fn run_candidates(args: CandidatesArgs) -> Result<(), AppError> {
    let config = cli_config()?;
    let engine = build_engine(config.advisor)?;
    let mut stdout = io::stdout().lock();

    match args.id {
        Some(id) => {
            let candidate = engine
                .catalog()
                .get(&id)
                .ok_or_else(|| AppError::UnknownCandidate(id.clone()))?;
            write_candidate_detail(&mut stdout, candidate)?;
        }
        None => write_candidates(&mut stdout, engine.catalog().candidates())?,
    }
    Ok(())
}

fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        answers,
        top,
        strict,
        format,
    } = args;

    let config = cli_config()?;
    let mut engine_config = config.advisor;
    if let Some(top) = top {
        engine_config.top_n = top;
    }
    let engine = build_engine(engine_config)?;

    let answers: AnswerSet = answers.into_iter().collect();
    let validation = if strict {
        AnswerValidation::Strict
    } else {
        engine_config.validation
    };
    let recommendations = engine.recommend_with(&answers, validation)?;
    let missing = engine.missing_questions(&answers);

    let mut stdout = io::stdout().lock();
    write_recommendations(&mut stdout, &recommendations, &missing, format)?;
    stdout.flush()?;
    Ok(())
}

fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let config = cli_config()?;
    let mut engine_config = config.advisor;
    if let Some(top) = args.top {
        engine_config.top_n = top;
    }
    let engine = build_engine(engine_config)?;

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_quiz_with(engine, &mut stdin, &mut stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_arguments_parse_answers_and_format() {
        let cli = Cli::try_parse_from([
            "stack-advisor-api",
            "recommend",
            "--answer",
            "projectSize=large",
            "-a",
            "primaryUse=api-data",
            "--top",
            "2",
            "--strict",
            "--format",
            "csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(
                    args.answers,
                    vec![
                        ("projectSize".to_string(), "large".to_string()),
                        ("primaryUse".to_string(), "api-data".to_string()),
                    ]
                );
                assert_eq!(args.top, Some(2));
                assert!(args.strict);
                assert_eq!(args.format, OutputFormat::Csv);
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn malformed_answer_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["stack-advisor-api", "recommend", "--answer", "large"]);

        assert!(result.is_err());
    }

    #[test]
    fn zero_top_is_rejected_by_the_parser() {
        for command in ["recommend", "quiz"] {
            let result = Cli::try_parse_from(["stack-advisor-api", command, "--top", "0"]);

            let err = result.expect_err("zero top rejected");
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn quiz_accepts_positive_top() {
        let cli = Cli::try_parse_from(["stack-advisor-api", "quiz", "--top", "4"])
            .expect("arguments parse");

        match cli.command {
            Some(Command::Quiz(args)) => assert_eq!(args.top, Some(4)),
            other => panic!("expected quiz command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["stack-advisor-api"]).expect("arguments parse");

        assert!(cli.command.is_none());
    }
}
