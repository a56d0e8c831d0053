use assess_align::assessment::{
    generate_feedback, score_all, AnswerMap, AssessmentProgress, AssessmentSummary,
    QuestionCatalog,
};
use assess_align::error::AppError;
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping question ids to green/amber/red ("-" reads stdin)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Append the generated feedback letter
    #[arg(long)]
    pub(crate) letter: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LetterArgs {
    /// JSON file mapping question ids to green/amber/red ("-" reads stdin)
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    println!("Assess & Align rubric ({} questions)", catalog.total_questions());

    for dimension in catalog.dimensions() {
        println!(
            "\n{} {} [{}]",
            dimension.icon, dimension.title, dimension.id
        );
        println!("  {}", dimension.description);
        for question in &dimension.questions {
            println!("  - {}: {}", question.id, question.text);
            if let Some(hint) = question.hint {
                println!("      hint: {hint}");
            }
        }
    }

    let options: Vec<String> = catalog
        .answer_options()
        .iter()
        .map(|option| format!("{} = {} ({})", option.value, option.label, option.score))
        .collect();
    println!("\nAnswer options: {}", options.join(", "));
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers = load_answers(&args.answers)?;
    let progress = AssessmentProgress::measure(QuestionCatalog::standard(), &answers);
    let result = score_all(&answers);

    println!("Assess & Align results");
    println!("Answers: {}", progress.status_line());
    render_summary(&result.summary());

    if args.letter {
        let letter = generate_feedback(&result)?;
        println!("\nFeedback letter\n");
        println!("{letter}");
    }

    Ok(())
}

pub(crate) fn run_letter(args: LetterArgs) -> Result<(), AppError> {
    let answers = load_answers(&args.answers)?;
    let letter = generate_feedback(&score_all(&answers))?;
    println!("{letter}");
    Ok(())
}

fn render_summary(summary: &AssessmentSummary) {
    let overall = &summary.overall;
    println!(
        "\n{} {} (overall {:.2}, {})",
        overall.glyph, overall.heading, overall.score, overall.rating_label
    );
    println!("{}", overall.body);

    println!("\nDimensions");
    for card in &summary.dimensions {
        println!(
            "- {}: {:.2} {} [{}]",
            card.title, card.score, card.rating_label, card.rating
        );
    }
}

pub(crate) fn load_answers(path: &Path) -> Result<AnswerMap, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "assess-align-{}-{name}",
            std::process::id()
        ));
        fs::write(&path, contents).expect("temp file written");
        path
    }

    #[test]
    fn load_answers_reads_json_files() {
        let path = write_temp("answers.json", r#"{"cv-1":"green","cv-2":"amber"}"#);

        let answers = load_answers(&path).expect("answers load");
        fs::remove_file(&path).ok();

        assert_eq!(answers.get("cv-1"), Some("green"));
        assert_eq!(answers.get("cv-2"), Some("amber"));
    }

    #[test]
    fn load_answers_rejects_non_object_json() {
        let path = write_temp("list.json", r#"["green"]"#);

        let error = load_answers(&path).expect_err("a list is not an answer map");
        fs::remove_file(&path).ok();

        assert!(matches!(error, AppError::Input(_)));
    }

    #[test]
    fn missing_answers_file_is_an_io_error() {
        let error = load_answers(Path::new("/definitely/not/here.json")).expect_err("missing");
        assert!(matches!(error, AppError::Io(_)));
    }
}
