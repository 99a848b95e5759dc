use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use coherence_assessment::config;
use coherence_assessment::questions::{LIKERT_OPTIONS, QUESTIONS};
use coherence_assessment::scoring::PhasePolicy;
use coherence_assessment::state::AssessmentState;
use coherence_assessment::{engine, storage, submit, AssessmentResults};
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "coherence-assessment",
    about = "Self-assessment scoring: dimensional scores, phase classification and time estimates",
    version
)]
struct Cli {
    /// Config file (defaults to .coherence-assessment.toml in the cwd)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the assessment snapshot
    #[arg(long, global = true, env = "COHERENCE_ASSESSMENT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the question catalog
    Questions {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Record a Likert response (0-4) for a question
    Answer { question_id: u32, value: u8 },
    /// Record freeform text for a question
    Freeform { question_id: u32, text: String },
    /// Show progress and completion status
    Status,
    /// Score the assessment and print results
    Score {
        /// Score a JSON response map instead of the stored session
        #[arg(long)]
        input: Option<PathBuf>,
        /// Override the configured phase policy
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Discard the stored session
    Reset,
    /// Submit computed results to the remote endpoint
    Submit {
        #[arg(long)]
        email: String,
        /// Override the configured endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    MinTriple,
    SingleGate,
}

impl From<PolicyArg> for PhasePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::MinTriple => PhasePolicy::MinTriple,
            PolicyArg::SingleGate => PhasePolicy::SingleGate,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => config::try_load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load_config(None),
    };
    let snapshot_path =
        storage::storage_path(cli.data_dir.as_deref().or(config.data_dir.as_deref()));

    match cli.command {
        Commands::Questions { format } => print_questions(format),
        Commands::Answer { question_id, value } => {
            let mut state = storage::load(&snapshot_path);
            if state.start_time.is_none() {
                state.start();
            }
            if state.set_response(question_id, value) {
                storage::save(&state, &snapshot_path)?;
                println!("Recorded question {question_id} = {value}");
            } else {
                // Invalid input is ignored by design; tell the human anyway.
                println!(
                    "{} question {} / value {} not accepted (value must be 0-4)",
                    "ignored:".yellow(),
                    question_id,
                    value
                );
            }
            Ok(())
        }
        Commands::Freeform { question_id, text } => {
            let mut state = storage::load(&snapshot_path);
            state.set_freeform_response(question_id, &text);
            storage::save(&state, &snapshot_path)?;
            println!("Recorded freeform response for question {question_id}");
            Ok(())
        }
        Commands::Status => {
            let state = storage::load(&snapshot_path);
            print_status(&state);
            Ok(())
        }
        Commands::Score {
            input,
            policy,
            format,
        } => {
            let policy = policy.map(PhasePolicy::from).unwrap_or(config.phase_policy);
            let results = match input {
                Some(path) => score_response_file(&path, policy)?,
                None => score_stored(&snapshot_path, policy)?,
            };
            print_results(&results, format)
        }
        Commands::Reset => {
            storage::clear(&snapshot_path)?;
            println!("Assessment state cleared");
            Ok(())
        }
        Commands::Submit { email, endpoint } => {
            let state = storage::load(&snapshot_path);
            let endpoint = endpoint.unwrap_or(config.submission_endpoint);
            submit::submit_results(&endpoint, &email, &state)
                .with_context(|| format!("submitting assessment to {endpoint}"))?;
            println!("{}", "Assessment submitted".green());
            Ok(())
        }
    }
}

fn print_questions(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&QUESTIONS[..])?),
        OutputFormat::Text => {
            for q in &QUESTIONS {
                let dims: Vec<&str> = q.dimensions.iter().map(|d| d.key()).collect();
                let tag = if q.is_freeform() {
                    "freeform".to_string()
                } else if q.reverse {
                    format!("[{}] reverse", dims.join(","))
                } else {
                    format!("[{}]", dims.join(","))
                };
                println!("{:>3}. {} {}", q.id, q.text, tag.dimmed());
            }
            println!("\nScale: {}", LIKERT_OPTIONS.join(" / "));
        }
    }
    Ok(())
}

fn print_status(state: &AssessmentState) {
    let status = state.validate_completion();
    println!(
        "Question {}/{} ({:.0}%)",
        state.current_question + 1,
        state.total_questions(),
        state.progress_percentage()
    );
    if status.is_valid {
        println!("{}", "All required questions answered".green());
    } else {
        println!(
            "{} {} unanswered: {:?}",
            "incomplete:".yellow(),
            status.missing_count(),
            status.unanswered
        );
    }
}

fn score_stored(snapshot_path: &Path, policy: PhasePolicy) -> Result<AssessmentResults> {
    let mut state = storage::load(snapshot_path);
    if !state.complete(policy) {
        anyhow::bail!(
            "{}",
            state
                .error
                .unwrap_or_else(|| "assessment validation failed".to_string())
        );
    }
    storage::save(&state, snapshot_path)?;
    state
        .results
        .ok_or_else(|| anyhow::anyhow!("scoring produced no results"))
}

fn score_response_file(path: &Path, policy: PhasePolicy) -> Result<AssessmentResults> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading responses from {}", path.display()))?;
    let parsed: BTreeMap<u32, u8> =
        serde_json::from_str(&raw).context("responses must be a JSON map of question id to 0-4")?;

    let mut state = AssessmentState::new();
    for (id, value) in parsed {
        state.set_response(id, value);
    }

    let status = engine::validate_completion(&state.responses);
    if !status.is_valid {
        anyhow::bail!(status.error.unwrap_or_default());
    }
    Ok(engine::calculate_results(&state.responses, policy))
}

fn print_results(results: &AssessmentResults, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Text => {
            let terrain = &results.score_labels.terrain;
            let coherence = &results.score_labels.coherence;
            println!(
                "{} Terrain score:   {:>5.1}  {}",
                terrain.emoji,
                results.terrain_score,
                terrain.label.bold()
            );
            println!(
                "{} Coherence score: {:>5.1}  {}",
                coherence.emoji,
                results.coherence_score,
                coherence.label.bold()
            );
            println!();
            for (dimension, score) in results.dimensional_scores.iter() {
                println!(
                    "  {:<4} {:<22} {:>5.1}",
                    dimension.key(),
                    dimension.name(),
                    score
                );
            }
            println!();
            println!(
                "Phase {} ({}): {}",
                results.phase.label().bold(),
                results.phase.name(),
                results.phase.description()
            );
            println!(
                "Estimated time: {}-{} weeks (severity multiplier {:.2})",
                results.time_estimate.min, results.time_estimate.max, results.multiplier
            );
        }
    }
    Ok(())
}
