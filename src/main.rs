//! Resume screener: priority-weighted resume-to-JD matching with outreach drafts

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod processing;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use error::{Result, ScreenerError};
use indicatif::{ProgressBar, ProgressStyle};
use input::Normalizer;
use llm::extractor::KeywordExtractor;
use llm::GeminiClient;
use log::{error, info};
use processing::keywords::KeywordSet;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use workflow::batch::{BatchProcessor, CandidateRecord, JobDescription, ResumeInput};
use workflow::WorkflowState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            jd,
            resumes,
            days,
            high,
            medium,
            no_review,
            output,
        } => {
            run_screen(
                &config, jd, resumes, days, high, medium, no_review, output,
            )
            .await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("LLM Model: {}", config.llm.model);
                println!("Temperature: {}", config.llm.temperature);
                println!("Max Output Tokens: {}", config.llm.max_output_tokens);
                println!("Max Retries: {}", config.llm.max_retries);
                println!("\nPreferred Regions:");
                for rule in &config.location.preferred_regions {
                    println!("  • {} → {:.2}", rule.substring, rule.score);
                }
                println!("\nBatch Label: {}", config.output.batch_label);
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_screen(
    config: &Config,
    jd_path: PathBuf,
    resume_paths: Vec<PathBuf>,
    days: Vec<u16>,
    high: Option<String>,
    medium: Option<String>,
    no_review: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    if !config.output.color_output {
        colored::control::set_override(false);
    }

    let allowed = ["pdf", "docx", "md"];
    cli::validate_file_extension(&jd_path, &allowed)
        .map_err(|e| ScreenerError::InvalidInput(format!("Job description file: {}", e)))?;
    for resume in &resume_paths {
        cli::validate_file_extension(resume, &allowed)
            .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
    }

    let mut resume_inputs = Vec::with_capacity(resume_paths.len());
    for (i, path) in resume_paths.into_iter().enumerate() {
        let day = days.get(i).copied().unwrap_or(1);
        resume_inputs.push(ResumeInput::new(path, day)?);
    }

    let api_key = Config::api_key()?;
    let client = GeminiClient::new(&config.llm, api_key);

    println!("📄 Job Description: {}", jd_path.display());
    println!("🗂  Resumes: {}", resume_inputs.len());

    // Job description upload and keyword extraction.
    let progress = spinner("Extracting keywords from job description...");
    let jd = load_job_description(&client, &jd_path).await?;
    progress.finish_with_message(format!(
        "Extracted {} keywords from the job description",
        jd.keywords.len()
    ));

    let state = WorkflowState::new().upload_jd(jd)?;

    // Two-stage priority selection.
    let high_picks = match high {
        Some(raw) => cli::parse_keyword_list(&raw),
        None => prompt_picks(
            "HIGH",
            state
                .current_choices()
                .expect("high selection offers choices"),
        )?,
    };
    let state = state.confirm_high(high_picks)?;

    let medium_picks = match medium {
        Some(raw) => cli::parse_keyword_list(&raw),
        None => prompt_picks(
            "MEDIUM",
            state
                .current_choices()
                .expect("medium selection offers choices"),
        )?,
    };
    let state = state.confirm_medium(medium_picks)?;

    if let WorkflowState::PrioritiesConfirmed { tiers, .. } = &state {
        println!("\n{}", "Priority selection done!".green());
        println!("  High:   {}", tiers.high().joined());
        println!("  Medium: {}", tiers.medium().joined());
        println!("  Low:    {}", tiers.low().joined());
    }

    // Batch processing: strictly sequential, aborts on first failure.
    let state = state.start_batch()?;
    let records = match &state {
        WorkflowState::BatchProcessing { jd, tiers } => {
            let processor = BatchProcessor::new(&client, config);
            let progress = spinner("Processing resumes...");
            let records = processor.run(&resume_inputs, jd, tiers).await?;
            progress.finish_with_message(format!("Processed {} resumes", records.len()));
            records
        }
        _ => unreachable!("start_batch yields BatchProcessing"),
    };
    let state = state.complete_batch(records)?;

    // Manual location-score review.
    let overrides = if no_review {
        Vec::new()
    } else if let WorkflowState::LocationReview { records, .. } = &state {
        prompt_location_overrides(records)?
    } else {
        Vec::new()
    };
    let state = state.finalize(&overrides)?;

    let ranked = match state {
        WorkflowState::Finalized { ranked } => ranked,
        _ => unreachable!("finalize yields Finalized"),
    };

    println!("\n🔎 {}", "Final Results (sorted by weighted score)".bold());
    for (i, record) in ranked.records().iter().enumerate() {
        println!(
            "  {}. {} — score {}, location {} ({:.2}), available in {} days",
            i + 1,
            record.resume_file.bold(),
            record.weighted_score.to_string().green(),
            record.location,
            record.location_score,
            record.days_available
        );
    }

    if let Some(path) = output {
        ranked.write_csv_file(&path)?;
        println!("\n💾 Ranked results written to {}", path.display());
    }

    Ok(())
}

async fn load_job_description(client: &GeminiClient, path: &PathBuf) -> Result<JobDescription> {
    let normalizer = Normalizer::new()?;
    let text = normalizer.normalize(path).await?.into_string();

    let keywords = KeywordExtractor::new(client)
        .extract(&text)
        .await?
        .into_keywords();
    info!("Job description yielded {} keywords", keywords.len());

    if keywords.is_empty() {
        return Err(ScreenerError::InvalidInput(
            "No keywords could be extracted from the job description".to_string(),
        ));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(JobDescription {
        file_name,
        text,
        keywords,
    })
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Numbered multi-select on stdin: the reviewer enters comma-separated
/// indices, or nothing to pick none.
fn prompt_picks(tier: &str, choices: &KeywordSet) -> Result<Vec<String>> {
    println!(
        "\nSelect {} priority keywords (comma-separated numbers, empty for none):",
        tier.bold()
    );
    let indexed: Vec<&str> = choices.iter().collect();
    for (i, keyword) in indexed.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, keyword);
    }

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        let line = line.trim();
        if line.is_empty() {
            return Ok(Vec::new());
        }

        let mut picks = Vec::new();
        let mut valid = true;
        for token in line.split(',') {
            match token.trim().parse::<usize>() {
                Ok(n) if n >= 1 && n <= indexed.len() => picks.push(indexed[n - 1].to_string()),
                _ => {
                    println!(
                        "{}",
                        format!("Enter numbers between 1 and {}", indexed.len()).yellow()
                    );
                    valid = false;
                    break;
                }
            }
        }
        if valid {
            return Ok(picks);
        }
    }
}

/// Per-record location-score review: enter a new value in 0.0–1.0 or press
/// enter to keep the computed score.
fn prompt_location_overrides(records: &[CandidateRecord]) -> Result<Vec<(usize, f32)>> {
    println!("\n🔄 {}", "Location Score Review".bold());
    let mut overrides = Vec::new();

    for (i, record) in records.iter().enumerate() {
        print!(
            "Location Score for {} (current: {:.2}, location: {}): ",
            record.resume_file, record.location_score, record.location
        );
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<f32>() {
            Ok(score) if (0.0..=1.0).contains(&score) => overrides.push((i, score)),
            _ => {
                println!(
                    "{}",
                    "Invalid score, keeping the computed value (must be 0.0-1.0)".yellow()
                );
            }
        }
    }

    Ok(overrides)
}
