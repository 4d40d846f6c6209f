//! skill-fit: score resumes against job postings

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use skill_fit::cli::{self, Cli, Commands, ConfigAction};
use skill_fit::config::{Config, OutputFormat};
use skill_fit::input::file_detector::FileType;
use skill_fit::input::InputManager;
use skill_fit::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use skill_fit::output::{ExtractionReport, MatchReport};
use skill_fit::processing::classifier::JdRequirement;
use skill_fit::processing::tables::SkillTables;
use skill_fit::{AnalysisEngine, MatchType, Result, SkillFitError};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env = env_logger::Env::default().default_filter_or(log_level(cli.verbose));
    env_logger::Builder::from_env(env).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn build_engine(config: &Config) -> Result<AnalysisEngine> {
    let tables = SkillTables::builtin()?;
    Ok(AnalysisEngine::new(Arc::new(tables), config.engine.clone()))
}

fn spinner(enabled: bool, message: &str) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    cli::parse_output_format(value).map_err(SkillFitError::InvalidInput)
}

async fn run_command(
    command: Commands,
    config: Config,
    config_path: Option<PathBuf>,
) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            cli::validate_file_extension(&resume, FileType::supported_extensions())
                .map_err(|e| SkillFitError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, FileType::supported_extensions())
                .map_err(|e| SkillFitError::InvalidInput(format!("Job posting file: {}", e)))?;
            if cli::is_stdin(&resume) && cli::is_stdin(&job) {
                return Err(SkillFitError::InvalidInput(
                    "Only one of --resume and --job can read from stdin".to_string(),
                ));
            }

            let format = match output {
                Some(value) => parse_format(&value)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let show_progress = format == OutputFormat::Console && save.is_none();
            let progress = spinner(show_progress, "Reading documents...");

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;
            info!(
                "Read resume ({} chars) and job posting ({} chars)",
                resume_text.len(),
                job_text.len()
            );

            if let Some(bar) = &progress {
                bar.set_message("Scoring fit...");
            }
            let engine = build_engine(&config)?;
            let mentions = engine.extract_skills_from_text(&resume_text);
            let requirements = engine.classify_requirements(&job_text);
            let result = engine.score_requirements(&mentions, &requirements);
            if let Some(bar) = progress {
                bar.finish_and_clear();
            }

            let report = MatchReport::new(
                result,
                requirements,
                resume.display().to_string(),
                job.display().to_string(),
            );
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let content = generator.generate_report(&report, format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&content, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Extract { path, output } => {
            cli::validate_file_extension(&path, FileType::supported_extensions())
                .map_err(SkillFitError::InvalidInput)?;
            let format = parse_format(&output)?;

            let text = InputManager::new().extract_text(&path).await?;
            let engine = build_engine(&config)?;
            let report = ExtractionReport::new(
                path.display().to_string(),
                engine.extract_skills_from_text(&text),
                engine.detect_archetypes(&text),
            );

            let generator =
                ReportGenerator::with_options(config.output.color_output, false, true, true);
            match format {
                OutputFormat::Json => println!("{}", generator.json().to_json(&report)?),
                OutputFormat::Console => {
                    println!("{}", generator.console().format_extraction(&report))
                }
                other => {
                    return Err(SkillFitError::InvalidInput(format!(
                        "extract supports console or json output, not {:?}",
                        other
                    )))
                }
            }
        }

        Commands::Requirements { path, output } => {
            cli::validate_file_extension(&path, FileType::supported_extensions())
                .map_err(SkillFitError::InvalidInput)?;
            let format = parse_format(&output)?;

            let text = InputManager::new().extract_text(&path).await?;
            let engine = build_engine(&config)?;
            let requirements: Vec<JdRequirement> =
                engine.classify_requirements(&text).into_values().collect();

            let generator =
                ReportGenerator::with_options(config.output.color_output, false, true, true);
            match format {
                OutputFormat::Json => println!("{}", generator.json().to_json(&requirements)?),
                OutputFormat::Console => println!(
                    "{}",
                    generator
                        .console()
                        .format_requirements(&path.display().to_string(), &requirements)
                ),
                other => {
                    return Err(SkillFitError::InvalidInput(format!(
                        "requirements supports console or json output, not {:?}",
                        other
                    )))
                }
            }
        }

        Commands::Credit { required, candidate } => {
            let engine = build_engine(&config)?;
            let ontology = &engine.tables().ontology;
            for skill in [&required, &candidate] {
                if ontology.canonical_id(skill).is_none() {
                    let suggestions = ontology.suggest(skill, 3);
                    if suggestions.is_empty() {
                        println!("Unknown skill: {}", skill);
                    } else {
                        println!(
                            "Unknown skill: {} (did you mean {}?)",
                            skill,
                            suggestions.join(", ")
                        );
                    }
                }
            }

            let credit = engine.get_match_credit(&required, &candidate);
            if credit.match_type == MatchType::None {
                println!("{} -> {}: no credit", candidate, required);
            } else {
                println!(
                    "{} -> {}: {:.2} ({})",
                    candidate, required, credit.credit, credit.match_type
                );
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| SkillFitError::Configuration(e.to_string()))?;
                    println!("{}", content);
                }

                Some(ConfigAction::Path) => println!("{}", path.display()),

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults");
                }

                Some(ConfigAction::Set { key, value }) => {
                    let mut config = config;
                    config.set_value(&key, &value)?;
                    config.validate()?;
                    config.save_to(&path)?;
                    println!("Set {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_defaults_to_info() {
        assert_eq!(log_level(false), "info");
        assert_eq!(log_level(true), "debug");
    }
}
