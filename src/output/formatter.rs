//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{Result, SkillFitError};
use crate::output::report::{ExtractionReport, MatchReport};
use crate::processing::analyzer::MatchDetail;
use crate::processing::classifier::{JdRequirement, RequirementTier};
use crate::processing::ontology::MatchType;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skill Fit Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-high { background: #28a745; }
        .score-mid { background: #ffc107; color: #000; }
        .score-low { background: #dc3545; }
        .coverage {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
        }
        .coverage div {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #e9ecef; }
        .tier-required { font-weight: bold; }
        .missing { color: #dc3545; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Skill Fit Report</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>

        <h2>Score: {{ score }} <span class="score-badge {{ score_class }}">{{ score_label }}</span></h2>
        <p><strong>Verdict:</strong> {{ verdict }}</p>

        <div class="coverage">
            <div><h4>Required coverage</h4><p><strong>{{ required_coverage }}%</strong></p></div>
            <div><h4>Preferred coverage</h4><p><strong>{{ preferred_coverage }}%</strong></p></div>
            <div><h4>Keyword score</h4><p><strong>{{ keyword_score }}%</strong></p></div>
        </div>

        {% if !top_gaps.is_empty() %}
        <h2>Top gaps</h2>
        <ol>
            {% for gap in top_gaps %}
            <li>{{ gap }}</li>
            {% endfor %}
        </ol>
        {% endif %}

        <h2>Requirements</h2>
        <table>
            <tr><th>Skill</th><th>Tier</th><th>Credit</th><th>Matched by</th><th>Match</th></tr>
            {% for row in rows %}
            <tr class="{{ row.row_class }}">
                <td>{{ row.skill }}</td>
                <td class="tier-{{ row.tier }}">{{ row.tier }}</td>
                <td>{{ row.credit }}</td>
                <td>{{ row.matched_by }}</td>
                <td>{{ row.match_type }}</td>
            </tr>
            {% endfor %}
        </table>

        <div class="metadata">
            <p><strong>Generated by skill-fit v{{ version }}</strong></p>
            <p><strong>Resume:</strong> {{ resume_source }} | <strong>Job:</strong> {{ job_source }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    score: u8,
    score_class: &'static str,
    score_label: String,
    verdict: String,
    required_coverage: u32,
    preferred_coverage: u32,
    keyword_score: u32,
    top_gaps: Vec<String>,
    rows: Vec<HtmlRow>,
    version: String,
    resume_source: String,
    job_source: String,
}

struct HtmlRow {
    skill: String,
    tier: String,
    credit: String,
    matched_by: String,
    match_type: String,
    row_class: &'static str,
}

fn percent(value: f32) -> u32 {
    (value * 100.0).round() as u32
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Pad before coloring so escape codes never count toward the column width.
    fn colorize_padded(&self, text: &str, width: usize, color: Color) -> String {
        self.colorize(&format!("{:<width$}", text, width = width), color)
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8, label: &str) -> String {
        let color = match score {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            _ => Color::Red,
        };
        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_tier(&self, tier: RequirementTier) -> String {
        match tier {
            RequirementTier::Required => self.colorize_padded("required", 9, Color::Red),
            RequirementTier::Preferred => self.colorize_padded("preferred", 9, Color::Cyan),
            RequirementTier::Unlabeled => self.colorize_padded("unlabeled", 9, Color::BrightBlack),
        }
    }

    fn format_evidence(&self, requirement: &JdRequirement) -> String {
        let evidence = &requirement.evidence;
        let mut notes = Vec::new();
        if let Some(section) = &evidence.section {
            notes.push(format!("section \"{}\"", section));
        }
        if let Some(marker) = &evidence.marker {
            notes.push(format!("marker \"{}\"", marker));
        }
        notes.push(format!("weight {}", requirement.base_weight));
        notes.push(format!("seen {}x", evidence.occurrences));
        self.colorize(&format!("  [{}]", notes.join(", ")), Color::BrightBlack)
    }

    fn format_detail(&self, detail: &MatchDetail, requirement: Option<&JdRequirement>) -> String {
        let credit_color = if detail.match_type == MatchType::None {
            Color::Red
        } else {
            Color::Green
        };
        let credit = self.colorize(&format!("{:.2}", detail.credit), credit_color);

        let mut line = format!(
            "  {} {} {}",
            self.format_tier(detail.tier),
            self.colorize_padded(&detail.skill, 28, Color::White),
            credit
        );
        if let Some(matched_by) = &detail.matched_by {
            line.push_str(&format!(" via {} ({})", matched_by, detail.match_type));
        }
        if let Some(requirement) = requirement {
            line.push_str(&self.format_evidence(requirement));
        }
        line.push('\n');
        line
    }

    pub fn format_extraction(&self, report: &ExtractionReport) -> String {
        let mut output = self.format_header(&format!("Skills in {}", report.source), 1);

        if report.skills.is_empty() {
            output.push_str("  No skills found\n");
        }
        for skill in &report.skills {
            output.push_str(&format!(
                "  {} weight {:>2}  {:<22} {}\n",
                self.colorize_padded(&skill.skill_id, 28, Color::White),
                skill.weight,
                skill.category.to_string(),
                self.colorize(
                    &format!("{:?} {:.2}", skill.provenance, skill.confidence).to_lowercase(),
                    Color::BrightBlack
                )
            ));
        }

        if !report.archetypes.is_empty() {
            output.push_str(&self.format_header("Role archetypes", 2));
            for archetype in &report.archetypes {
                output.push_str(&format!(
                    "  {} (from \"{}\")\n",
                    self.colorize(&archetype.name, Color::Cyan),
                    archetype.title
                ));
            }
        }
        output
    }

    pub fn format_requirements(&self, source: &str, requirements: &[JdRequirement]) -> String {
        let mut output = self.format_header(&format!("Requirements in {}", source), 1);
        if requirements.is_empty() {
            output.push_str("  No skills found\n");
        }

        let mut sorted: Vec<&JdRequirement> = requirements.iter().collect();
        sorted.sort_by(|a, b| {
            a.tier
                .priority()
                .cmp(&b.tier.priority())
                .then_with(|| b.base_weight.cmp(&a.base_weight))
                .then_with(|| a.skill_id.cmp(&b.skill_id))
        });
        for requirement in sorted {
            output.push_str(&format!(
                "  {} {}{}\n",
                self.format_tier(requirement.tier),
                self.colorize_padded(&requirement.skill_id, 28, Color::White),
                self.format_evidence(requirement)
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("SKILL FIT", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Score: {} {}\n",
            result.score,
            self.format_score_badge(result.score, &report.summary.score_label)
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));
        output.push_str(&format!(
            "Requirements: {} required, {} preferred, {} unlabeled\n",
            report.summary.required_count,
            report.summary.preferred_count,
            report.summary.unlabeled_count
        ));

        output.push_str(&self.format_header("Coverage", 3));
        output.push_str(&format!("  Required:  {}%\n", percent(result.required_coverage)));
        output.push_str(&format!("  Preferred: {}%\n", percent(result.preferred_coverage)));
        output.push_str(&format!("  Keywords:  {}%\n", percent(result.keyword_score)));

        if !result.matched_skills.is_empty() {
            output.push_str(&self.format_header("Matched", 3));
            let matched = self.colorize(&result.matched_skills.join(", "), Color::Green);
            output.push_str(&format!("  {}\n", matched));
        }

        if !result.top_gaps.is_empty() {
            output.push_str(&self.format_header("Top gaps", 3));
            for (i, gap) in result.top_gaps.iter().enumerate() {
                let tier = report
                    .requirement(gap)
                    .map(|r| r.tier.to_string())
                    .unwrap_or_default();
                output.push_str(&format!(
                    "  {}. {} ({})\n",
                    i + 1,
                    self.colorize(gap, Color::Yellow),
                    tier
                ));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Requirement details", 2));
            for detail in &result.match_details {
                output.push_str(&self.format_detail(detail, report.requirement(&detail.skill)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::from("# Skill Fit Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {}  \n**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.resume_source,
                report.metadata.job_source
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Score:** {} ({})\n\n**Verdict:** {}\n\n",
            result.score, report.summary.score_label, report.summary.verdict
        ));

        output.push_str("| Component | Coverage |\n|-----------|----------|\n");
        output.push_str(&format!("| Required | {}% |\n", percent(result.required_coverage)));
        output.push_str(&format!("| Preferred | {}% |\n", percent(result.preferred_coverage)));
        output.push_str(&format!("| Keywords | {}% |\n\n", percent(result.keyword_score)));

        if !result.top_gaps.is_empty() {
            output.push_str("## Top Gaps\n\n");
            for (i, gap) in result.top_gaps.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, gap));
            }
            output.push('\n');
        }

        if !result.match_details.is_empty() {
            output.push_str("## Requirements\n\n");
            output.push_str("| Skill | Tier | Credit | Matched by | Match |\n");
            output.push_str("|-------|------|--------|------------|-------|\n");
            for detail in &result.match_details {
                output.push_str(&format!(
                    "| {} | {} | {:.2} | {} | {} |\n",
                    detail.skill,
                    detail.tier,
                    detail.credit,
                    detail.matched_by.as_deref().unwrap_or("-"),
                    detail.match_type
                ));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &MatchReport) -> HtmlTemplate {
        let result = &report.result;
        let score_class = match result.score {
            75..=100 => "score-high",
            50..=74 => "score-mid",
            _ => "score-low",
        };

        let rows = result
            .match_details
            .iter()
            .map(|detail| HtmlRow {
                skill: detail.skill.clone(),
                tier: detail.tier.to_string(),
                credit: format!("{:.2}", detail.credit),
                matched_by: detail.matched_by.clone().unwrap_or_else(|| "-".to_string()),
                match_type: detail.match_type.to_string(),
                row_class: if result.missing_skills.contains(&detail.skill) {
                    "missing"
                } else {
                    "matched"
                },
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            score: result.score,
            score_class,
            score_label: report.summary.score_label.clone(),
            verdict: report.summary.verdict.clone(),
            required_coverage: percent(result.required_coverage),
            preferred_coverage: percent(result.preferred_coverage),
            keyword_score: percent(result.keyword_score),
            top_gaps: result.top_gaps.clone(),
            rows,
            version: report.metadata.engine_version.clone(),
            resume_source: report.metadata.resume_source.clone(),
            job_source: report.metadata.job_source.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| SkillFitError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        formatter.format_report(report)
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }

    pub fn json(&self) -> &JsonFormatter {
        &self.json_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty() && stem != "-")
        .unwrap_or_else(|| "resume".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}_fit{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::AnalysisEngine;

    const JD: &str = "Requirements:\n- Python\n- Kubernetes\n\nNice to have:\n- Docker";

    fn report() -> MatchReport {
        let engine = AnalysisEngine::builtin().unwrap();
        let result = engine.quick_match("Python", JD);
        MatchReport::new(result, engine.classify_requirements(JD), "resume.txt", "job.txt")
    }

    #[test]
    fn test_console_plain_output() {
        let output = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();
        assert!(output.contains("Top gaps"));
        assert!(output.contains("1. Kubernetes (required)"));
        assert!(output.contains("Requirement details"));
        assert!(output.contains("via Python (exact)"));
    }

    fn strip_ansi(text: &str) -> String {
        regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap().replace_all(text, "").to_string()
    }

    #[test]
    fn test_colored_columns_stay_aligned() {
        colored::control::set_override(true);
        let engine = AnalysisEngine::builtin().unwrap();
        let text = "Python, Kubernetes and SQL";
        let extraction =
            ExtractionReport::new("cv.txt", engine.extract_skills_from_text(text), Vec::new());
        let colored_output = ConsoleFormatter::new(true, true).format_extraction(&extraction);
        let details = ConsoleFormatter::new(true, true).format_report(&report()).unwrap();
        colored::control::unset_override();

        assert!(colored_output.contains('\x1b'));
        let columns: Vec<usize> = strip_ansi(&colored_output)
            .lines()
            .filter_map(|line| line.find(" weight "))
            .collect();
        assert!(columns.len() >= 3);
        assert!(columns.iter().all(|&c| c == columns[0]), "{:?}", columns);

        let credit_columns: Vec<usize> = strip_ansi(&details)
            .lines()
            .filter(|line| line.contains("[section"))
            .filter_map(|line| line.find(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(credit_columns.len(), 3);
        assert!(credit_columns.iter().all(|&c| c == credit_columns[0]), "{:?}", credit_columns);
    }

    #[test]
    fn test_json_round_trips_result() {
        let report = report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result.score, report.result.score);
        assert_eq!(parsed.result.top_gaps, report.result.top_gaps);
        assert!(json.contains("\"required_coverage\""));
        assert!(json.contains("\"match_type\":\"exact\""));
    }

    #[test]
    fn test_markdown_has_requirement_table() {
        let output = MarkdownFormatter::new(false).format_report(&report()).unwrap();
        assert!(output.starts_with("# Skill Fit Report"));
        assert!(output.contains("| Kubernetes | required | 0.00 | - | none |"));
    }

    #[test]
    fn test_html_renders_without_styles() {
        let output = HtmlFormatter::new(false).format_report(&report()).unwrap();
        assert!(output.contains("<title>Skill Fit Report</title>"));
        assert!(output.contains("Kubernetes"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, false);
        let json = generator.generate_report(&report(), OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(OutputFormat::Json, "docs/jane.pdf", false), "jane_fit.json");
        assert_eq!(suggest_filename(OutputFormat::Html, "-", false), "resume_fit.html");
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.md");
        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}
