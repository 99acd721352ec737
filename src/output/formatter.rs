//! Output formatters for batch screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::highlight::render_segments;
use crate::output::report::{BatchReport, CandidateEntry};
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for formatting batch reports
pub trait OutputFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and text skill charts
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with a simple stylesheet
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

const CHART_WIDTH: usize = 30;

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Screening Report: {{ role }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #2c3e50;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: linear-gradient(120deg, #fdfbfb 0%, #ebedee 100%);
        }
        .container {
            background: rgba(255, 255, 255, 0.8);
            padding: 30px;
            border-radius: 15px;
            box-shadow: 0 0 10px rgba(0,0,0,0.1);
        }
        .candidate {
            border-top: 1px solid #e9ecef;
            margin-top: 25px;
            padding-top: 10px;
        }
        .eligible { color: #28a745; font-weight: bold; }
        .not-eligible { color: #dc3545; font-weight: bold; }
        .bar { display: inline-block; height: 14px; }
        .bar-matched { background: #28a745; }
        .bar-unmatched { background: #dc3545; }
        mark { background: #c3f0ca; font-weight: bold; }
        pre { white-space: pre-wrap; background: #f8f9fa; padding: 15px; border-radius: 6px; }
        .metadata { font-size: 0.9em; color: #6c757d; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>Resume Screening Report</h1>
        <p><strong>Job Role:</strong> {{ role }} | <strong>Eligibility threshold:</strong> {{ threshold }}%</p>
        {% if has_best %}
        <h2>Best Candidate: {{ best_name }} with {{ best_score }} / 100</h2>
        {% else %}
        <h2>No resumes analyzed</h2>
        {% endif %}
        {% for candidate in candidates %}
        <div class="candidate">
            <h3>Candidate {{ candidate.rank }}: {{ candidate.name }}</h3>
            <p><strong>Matching Score:</strong> {{ candidate.score }} / 100</p>
            {% if candidate.eligible %}
            <p class="eligible">Eligible: Good match ({{ candidate.matched_percentage }}% skills matched)</p>
            {% else %}
            <p class="not-eligible">Not Eligible: Only {{ candidate.matched_percentage }}% of skills matched</p>
            {% endif %}
            <h4>Missing Skills</h4>
            <p>{{ candidate.missing_skills }}</p>
            <h4>Skill Match</h4>
            <p>Matched: {{ candidate.matched }} <span class="bar bar-matched" style="width: {{ candidate.matched_width }}px"></span></p>
            <p>Unmatched: {{ candidate.unmatched }} <span class="bar bar-unmatched" style="width: {{ candidate.unmatched_width }}px"></span></p>
            {% if candidate.has_highlight %}
            <details>
                <summary>Resume text with highlights</summary>
                <pre>{{ candidate.highlighted_html|safe }}</pre>
            </details>
            {% endif %}
        </div>
        {% endfor %}
        <div class="metadata">
            <p>Generated by Resume Screener v{{ version }} at {{ generated_at }} ({{ processing_time }}ms)</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    role: String,
    threshold: String,
    has_best: bool,
    best_name: String,
    best_score: String,
    candidates: Vec<HtmlCandidate>,
    version: String,
    generated_at: String,
    processing_time: u64,
}

#[derive(Debug, Clone)]
struct HtmlCandidate {
    rank: usize,
    name: String,
    score: String,
    eligible: bool,
    matched_percentage: String,
    missing_skills: String,
    matched: usize,
    unmatched: usize,
    matched_width: usize,
    unmatched_width: usize,
    has_highlight: bool,
    highlighted_html: String,
}

fn missing_skills_text(entry: &CandidateEntry) -> String {
    if entry.result.missing_skills.is_empty() {
        "No major skills missing!".to_string()
    } else {
        entry.result.missing_skills.join(", ")
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
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

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 90.0 => ("EXCELLENT", Color::Green),
            s if s >= 75.0 => ("STRONG", Color::BrightGreen),
            s if s >= 60.0 => ("GOOD", Color::Yellow),
            s if s >= 40.0 => ("FAIR", Color::BrightYellow),
            _ => ("WEAK", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_candidate(&self, entry: &CandidateEntry) -> String {
        let result = &entry.result;
        let mut output = self.format_header(&format!("Candidate {}: {}", entry.rank, result.name), 2);

        output.push_str(&format!(
            "Matching Score: {:.2} / 100 {}\n",
            result.score,
            self.format_score_badge(result.score)
        ));

        if result.eligible {
            output.push_str(&self.colorize(
                &format!("✅ Eligible: Good match ({:.1}% skills matched)\n", result.matched_percentage),
                Color::Green,
            ));
        } else {
            output.push_str(&self.colorize(
                &format!("⚠️  Not Eligible: Only {:.1}% of skills matched\n", result.matched_percentage),
                Color::Yellow,
            ));
        }
        if result.degenerate_input {
            output.push_str(&self.colorize("Resume or role keywords were empty\n", Color::Red));
        }

        output.push_str(&self.format_header("Missing Skills", 3));
        output.push_str(&missing_skills_text(entry));
        output.push('\n');

        output.push_str(&self.format_header("Skill Match Chart", 3));
        let (matched_bar, unmatched_bar) = entry.skill_match.bars(CHART_WIDTH);
        output.push_str(&format!(
            "Matched   {} {} ({:.1}%)\n",
            self.colorize(&matched_bar, Color::Green),
            entry.skill_match.matched,
            entry.skill_match.matched_share()
        ));
        output.push_str(&format!(
            "Unmatched {} {} ({:.1}%)\n",
            self.colorize(&unmatched_bar, Color::Red),
            entry.skill_match.unmatched,
            entry.skill_match.unmatched_share()
        ));

        if self.detailed {
            if let Some(segments) = &entry.highlighted_resume {
                output.push_str(&self.format_header("Resume Text with Highlights", 3));
                let highlighted = render_segments(segments, |word| {
                    if self.use_colors {
                        word.green().bold().to_string()
                    } else {
                        format!("[{}]", word)
                    }
                });
                output.push_str(&highlighted);
                output.push('\n');
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 RESUME SCREENING REPORT", 1));
        output.push_str(&format!(
            "Job Role: {} | Generated: {} | Processing time: {}ms\n",
            report.role,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.processing_time_ms
        ));

        match report.best_candidate() {
            Some(best) => output.push_str(&format!(
                "\n🏆 Best Candidate: {} with {:.2} / 100\n",
                self.colorize(&best.result.name, Color::Cyan),
                best.result.score
            )),
            None => output.push_str("\nNo resumes analyzed\n"),
        }
        output.push_str(&format!(
            "Eligible: {} of {} (threshold {:.1}%)\n",
            report.eligible_count(),
            report.candidates.len(),
            report.eligibility_threshold
        ));

        for entry in &report.candidates {
            output.push_str(&self.format_candidate(entry));
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
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
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
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# 📄 Resume Screening Report: {}\n\n", report.role));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms | **Eligibility Threshold:** {:.1}%\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.processing_time_ms,
                report.eligibility_threshold
            ));
        }

        if let Some(best) = report.best_candidate() {
            output.push_str(&format!(
                "## 🏆 Best Candidate: `{}` with **{:.2} / 100**\n\n",
                best.result.name, best.result.score
            ));
        }

        output.push_str("| Rank | Candidate | Score | Skills Matched | Eligible |\n");
        output.push_str("|------|-----------|-------|----------------|----------|\n");
        for entry in &report.candidates {
            output.push_str(&format!(
                "| {} | `{}` | {:.2} | {:.1}% | {} |\n",
                entry.rank,
                entry.result.name,
                entry.result.score,
                entry.result.matched_percentage,
                if entry.result.eligible { "✅" } else { "❌" }
            ));
        }
        output.push('\n');

        for entry in &report.candidates {
            output.push_str(&format!("---\n### 📌 Candidate {}: `{}`\n\n", entry.rank, entry.result.name));
            output.push_str(&format!("**Matching Score:** {:.2} / 100\n\n", entry.result.score));
            if entry.result.eligible {
                output.push_str(&format!(
                    "✅ Eligible: Good match ({:.1}% skills matched)\n\n",
                    entry.result.matched_percentage
                ));
            } else {
                output.push_str(&format!(
                    "⚠️ Not Eligible: Only {:.1}% of skills matched\n\n",
                    entry.result.matched_percentage
                ));
            }
            output.push_str("#### 📋 Missing Skills\n\n");
            output.push_str(&missing_skills_text(entry));
            output.push_str("\n\n");
            output.push_str(&format!(
                "**Skill Match:** ✅ Matched: {} | ❌ Unmatched: {}\n\n",
                entry.skill_match.matched, entry.skill_match.unmatched
            ));

            if let Some(segments) = &entry.highlighted_resume {
                output.push_str("<details><summary>Resume text with highlights</summary>\n\n");
                output.push_str(&render_segments(segments, |word| format!("**{}**", word)));
                output.push_str("\n\n</details>\n\n");
            }
        }

        if self.include_metadata {
            output.push_str(&format!("\n*Generated by Resume Screener v{}*\n", report.screener_version));
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

    fn create_template_data(&self, report: &BatchReport) -> HtmlTemplate {
        let candidates = report
            .candidates
            .iter()
            .map(|entry| {
                let (matched_bar, unmatched_bar) = entry.skill_match.bars(CHART_WIDTH);
                let highlighted_html = entry
                    .highlighted_resume
                    .as_ref()
                    .map(|segments| {
                        segments
                            .iter()
                            .map(|segment| {
                                if segment.matched {
                                    format!("<mark>{}</mark>", escape_html(&segment.text))
                                } else {
                                    escape_html(&segment.text)
                                }
                            })
                            .collect::<String>()
                    })
                    .unwrap_or_default();

                HtmlCandidate {
                    rank: entry.rank,
                    name: entry.result.name.clone(),
                    score: format!("{:.2}", entry.result.score),
                    eligible: entry.result.eligible,
                    matched_percentage: format!("{:.1}", entry.result.matched_percentage),
                    missing_skills: missing_skills_text(entry),
                    matched: entry.skill_match.matched,
                    unmatched: entry.skill_match.unmatched,
                    matched_width: matched_bar.chars().count() * 10,
                    unmatched_width: unmatched_bar.chars().count() * 10,
                    has_highlight: entry.highlighted_resume.is_some(),
                    highlighted_html,
                }
            })
            .collect();

        let best = report.best_candidate();

        HtmlTemplate {
            include_styles: self.include_styles,
            role: report.role.clone(),
            threshold: format!("{:.1}", report.eligibility_threshold),
            has_best: best.is_some(),
            best_name: best.map(|b| b.result.name.clone()).unwrap_or_default(),
            best_score: best.map(|b| format!("{:.2}", b.result.score)).unwrap_or_default(),
            candidates,
            version: report.screener_version.clone(),
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            processing_time: report.processing_time_ms,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
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

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &BatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, role: &str, timestamp: bool) -> String {
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

    format!("{}_screening{}.{}", role, timestamp_suffix, extension)
}

/// Where `--save` writes: the path itself, or a suggested file inside it when
/// it names an existing directory
pub fn resolve_save_path(path: &Path, format: &OutputFormat, role: &str) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, role, true))
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ResumeAnalyzer;
    use crate::processing::document::{KeywordSet, ResumeDocument};

    fn report(include_highlights: bool) -> BatchReport {
        let keywords = KeywordSet::from_text("backend", "python sql docker aws linux");
        let resumes = vec![
            ResumeDocument::new("a.pdf", "Java <developer>"),
            ResumeDocument::new("b.pdf", "Python SQL Docker on Linux"),
            ResumeDocument::new("c.pdf", "python aws docker sql linux"),
        ];
        let run = ResumeAnalyzer::default().analyze_batch(&keywords, &resumes);
        BatchReport::new(&run, &resumes, include_highlights)
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&report(true)).unwrap();

        assert!(output.contains("Best Candidate: c.pdf with 100.00 / 100"));
        assert!(output.contains("Eligible: Good match (100.0% skills matched)"));
        assert!(output.contains("Not Eligible: Only 0.0% of skills matched"));
        assert!(output.contains("No major skills missing!"));
        assert!(output.contains("[Python] [SQL] [Docker] on [Linux]"));
    }

    #[test]
    fn test_console_hides_highlights_unless_detailed() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&report(true)).unwrap();

        assert!(!output.contains("Resume Text with Highlights"));
    }

    #[test]
    fn test_json_output() {
        let output = JsonFormatter::new(false).format_report(&report(false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["role"], "backend");
        assert_eq!(value["candidates"][0]["name"], "c.pdf");
        assert_eq!(value["candidates"][0]["rank"], 1);
        assert_eq!(value["candidates"][2]["missing_skills"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(true).format_report(&report(true)).unwrap();

        assert!(output.contains("## 🏆 Best Candidate: `c.pdf`"));
        assert!(output.contains("| 1 | `c.pdf` | 100.00 | 100.0% | ✅ |"));
        assert!(output.contains("**Python** **SQL** **Docker** on **Linux**"));
    }

    #[test]
    fn test_html_output_escapes_resume_text() {
        let output = HtmlFormatter::new(false).format_report(&report(true)).unwrap();

        assert!(output.contains("Best Candidate: c.pdf"));
        assert!(output.contains("<mark>Python</mark>"));
        assert!(output.contains("&lt;developer&gt;"));
        assert!(!output.contains("<developer>"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Html, "backend", false), "backend_screening.html");
        assert!(suggest_filename(&OutputFormat::Json, "qa", true).ends_with(".json"));
    }

    #[test]
    fn test_resolve_save_path_into_directory() {
        let dir = tempfile::TempDir::new().unwrap();

        let path = resolve_save_path(dir.path(), &OutputFormat::Markdown, "backend");
        assert_eq!(path.parent().unwrap(), dir.path());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("backend_screening_"));
        assert!(name.ends_with(".md"));

        let file = dir.path().join("report.json");
        assert_eq!(resolve_save_path(&file, &OutputFormat::Json, "backend"), file);
    }
}
