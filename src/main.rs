use clap::Parser;
use quiz_model::utils::error::ErrorSeverity;
use quiz_model::utils::{logger, validation::Validate};
use quiz_model::{CliConfig, Question, QuestionLimits, QuizError, TomlConfig};

fn load_limits(path: Option<&str>) -> quiz_model::Result<QuestionLimits> {
    let limits = match path {
        Some(path) => {
            tracing::info!("📁 Loading limits from: {}", path);
            TomlConfig::from_file(path)?.limits()
        }
        None => QuestionLimits::default(),
    };
    limits.validate()?;
    Ok(limits)
}

fn run(config: &CliConfig) -> quiz_model::Result<()> {
    let limits = load_limits(config.config.as_deref())?;

    let mut question = Question::with_limits(
        config.title.as_str(),
        config.points.unwrap_or(limits.default_points),
        config.max_selections.unwrap_or(limits.default_max_selections),
        limits,
    )?;

    for text in &config.choices {
        question.add_choice(text.as_str(), false)?;
    }
    question.set_correct_choices(&config.correct);

    println!("{}", question);
    for choice in question.choices() {
        println!("  {}", choice);
    }

    if !config.select.is_empty() {
        let correct = question.select_choices(&config.select)?;
        tracing::info!(
            selected = config.select.len(),
            correct = correct.len(),
            "selection checked"
        );
        println!("Selected: {:?}", config.select);
        println!("Correct:  {:?}", correct);
    }

    Ok(())
}

fn exit_code(e: &QuizError) -> i32 {
    match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }
}
