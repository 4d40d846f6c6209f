//! CLI interface for skill-fit

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

/// Path argument meaning "read from standard input".
pub const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "skill-fit")]
#[command(about = "Skill extraction and job-fit scoring for resumes and job postings")]
#[command(
    long_about = "Extract skills from resumes, tier the requirements of a job posting, and score \
                  how well the two fit using a weighted skill ontology"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job posting
    Match {
        /// Path to resume file (PDF, TXT, MD) or "-" for stdin
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job posting file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Include per-requirement details
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the skills found in a document
    Extract {
        /// Path to document (PDF, TXT, MD) or "-" for stdin
        path: PathBuf,

        /// Output format: console or json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show how each skill in a job posting was tiered
    Requirements {
        /// Path to job posting file (TXT, MD, PDF) or "-" for stdin
        path: PathBuf,

        /// Output format: console or json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show the credit one skill earns toward another
    Credit {
        /// Skill the job asks for
        required: String,

        /// Skill the resume has
        candidate: String,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.required_weight")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension; "-" (stdin) is always accepted
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    if is_stdin(path) {
        return Ok(());
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from([
            "skill-fit", "match", "--resume", "cv.pdf", "--job", "job.md", "--output", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Match { resume, output, detailed, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(!detailed);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["txt", "md"];
        assert!(validate_file_extension(Path::new("job.TXT"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("job.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("job"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("-"), &allowed).is_ok());
    }

    #[test]
    fn test_every_readable_extension_passes_validation() {
        use crate::input::file_detector::FileType;

        let allowed = FileType::supported_extensions();
        for name in ["cv.pdf", "cv.txt", "cv.text", "job.md", "job.markdown"] {
            assert!(validate_file_extension(Path::new(name), allowed).is_ok(), "{}", name);
        }
        assert!(validate_file_extension(Path::new("cv.docx"), allowed).is_err());
    }
}
