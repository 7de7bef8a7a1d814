use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "quiz-model")]
#[command(about = "Build a quiz question, mark its answers and check a selection")]
pub struct CliConfig {
    /// Question title
    #[arg(long)]
    pub title: String,

    /// Points awarded for the question (defaults to the configured value)
    #[arg(long)]
    pub points: Option<u32>,

    /// How many choices may be selected at once (defaults to the configured value)
    #[arg(long)]
    pub max_selections: Option<usize>,

    /// Choice text; repeat to add several, ids are assigned from 1 in order
    #[arg(long = "choice")]
    pub choices: Vec<String>,

    /// Comma-separated ids of the correct choices
    #[arg(long, value_delimiter = ',')]
    pub correct: Vec<u32>,

    /// Comma-separated ids to select
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<u32>,

    /// Optional TOML file with a [limits] table
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
