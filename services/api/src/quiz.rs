use crate::report::{write_recommendations, OutputFormat};
use stack_advisor::advisor::{FlowState, Question, QuestionFlow, RecommendationEngine};
use stack_advisor::error::AppError;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::debug;

enum Reply {
    Choose(&'static str),
    Back,
    Quit,
    Invalid,
}

/// Walks the questionnaire on `input`, echoing prompts and results to `output`.
/// Returns the final flow so callers can inspect the answers.
pub(crate) fn run_quiz_with<R, W>(
    engine: Arc<RecommendationEngine>,
    input: &mut R,
    output: &mut W,
) -> Result<QuestionFlow, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut flow = QuestionFlow::new(engine);
    writeln!(output, "Find your state management library ('b' goes back, 'q' quits)")?;

    loop {
        let Some(question) = flow.current().cloned() else {
            break;
        };
        let progress = flow.progress();
        writeln!(
            output,
            "\n[{}/{}] {}% {}",
            progress.step, progress.total, progress.percent, question.prompt
        )?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {} {}", index + 1, option.glyph, option.label)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::Usage(
                "questionnaire ended before every question was answered".to_string(),
            ));
        }

        match parse_reply(&question, &line) {
            Reply::Choose(value) => {
                debug!(question = question.id, value, "answer recorded");
                if let FlowState::Complete { recommendations } = flow.advance(question.id, value)? {
                    writeln!(output)?;
                    write_recommendations(output, &recommendations, &[], OutputFormat::Text)?;
                }
            }
            Reply::Back => {
                flow.back();
            }
            Reply::Quit => {
                return Err(AppError::Usage("questionnaire cancelled".to_string()));
            }
            Reply::Invalid => {
                writeln!(
                    output,
                    "Pick 1-{} or one of: {}",
                    question.options.len(),
                    question.option_values().join(", ")
                )?;
            }
        }
    }

    Ok(flow)
}

fn parse_reply(question: &Question, line: &str) -> Reply {
    let reply = line.trim();
    match reply.to_ascii_lowercase().as_str() {
        "b" | "back" => return Reply::Back,
        "q" | "quit" => return Reply::Quit,
        _ => {}
    }

    if let Ok(choice) = reply.parse::<usize>() {
        return choice
            .checked_sub(1)
            .and_then(|index| question.options.get(index))
            .map_or(Reply::Invalid, |option| Reply::Choose(option.value));
    }

    question
        .option(reply)
        .map_or(Reply::Invalid, |option| Reply::Choose(option.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stack_advisor::advisor::EngineConfig;
    use std::io::Cursor;

    fn engine() -> Arc<RecommendationEngine> {
        Arc::new(RecommendationEngine::standard(EngineConfig::default()).expect("standard engine"))
    }

    fn run(script: &str) -> (Result<QuestionFlow, AppError>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_quiz_with(engine(), &mut input, &mut output);
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn numbered_choices_complete_the_questionnaire() {
        let (result, output) = run("1\n1\n1\n1\n1\n1\n");

        let flow = result.expect("quiz completes");
        assert!(flow.is_complete());
        assert_eq!(flow.answers().get("primaryUse"), Some("forms"));
        assert!(output.contains("1. React Context API - 58% match"));
    }

    #[test]
    fn back_and_option_values_are_accepted() {
        let (result, _) = run("large\nb\nsmall\nexpert\ncomplex\nshared-state\ncritical\nwilling\n");

        let flow = result.expect("quiz completes");
        assert_eq!(flow.answers().get("projectSize"), Some("small"));
        assert_eq!(flow.answers().get("teamExperience"), Some("expert"));
    }

    #[test]
    fn invalid_replies_reprompt_the_same_question() {
        let (result, output) = run("9\nhuge\nmedium\nintermediate\nmoderate\napi-data\nimportant\nwilling\n");

        let flow = result.expect("quiz completes");
        assert!(output.contains("Pick 1-3"));
        assert_eq!(
            flow.recommendations().map(|recs| recs[0].candidate.id),
            Some("zustand")
        );
    }

    #[test]
    fn running_out_of_input_is_a_usage_error() {
        let (result, _) = run("small\n");

        assert!(matches!(result, Err(AppError::Usage(_))));
    }
}
