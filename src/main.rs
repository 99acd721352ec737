//! Resume screener: score resumes against job role keywords and rank candidates

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_screener::cli::{self, Cli, Commands, ConfigAction, RoleAction};
use resume_screener::config::{self, Config};
use resume_screener::input::file_detector::FileType;
use resume_screener::input::InputManager;
use resume_screener::keywords::{DirectoryKeywordSource, KeywordSource};
use resume_screener::output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use resume_screener::output::pdf::FeedbackPdfWriter;
use resume_screener::output::report::{BatchReport, FeedbackReport};
use resume_screener::processing::analyzer::ResumeAnalyzer;
use resume_screener::processing::eligibility::EligibilityClassifier;
use resume_screener::ScreenerError;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            role,
            resumes,
            roles_dir,
            threshold,
            output,
            save,
            feedback,
            feedback_dir,
            detailed,
            sequential,
        } => {
            for resume in &resumes {
                cli::validate_file_extension(resume, &FileType::SUPPORTED_EXTENSIONS)
                    .map_err(|e| ScreenerError::InvalidInput(format!("{}: {}", resume.display(), e)))?;
            }

            let threshold = threshold.unwrap_or(config.scoring.eligibility_threshold);
            config::validate_threshold(threshold)?;

            let output_format = match output {
                Some(format) => config::parse_output_format(&format).map_err(ScreenerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let source = DirectoryKeywordSource::new(roles_dir.unwrap_or(config.keywords.roles_dir.clone()));
            let keywords = match source.load(&role) {
                Ok(keywords) => keywords,
                Err(ScreenerError::RoleNotFound(role)) => {
                    println!("❌ Job role not found: {}", role);
                    if let Ok(roles) = source.roles() {
                        if !roles.is_empty() {
                            println!("💡 Available roles: {}", roles.join(", "));
                        }
                    }
                    bail!(ScreenerError::RoleNotFound(role));
                }
                Err(e) => return Err(e).context("Failed to load role keywords"),
            };

            info!("Screening {} resume(s) for role '{}'", resumes.len(), role);

            let mut input_manager = InputManager::new().with_cache(config.processing.enable_caching);
            let progress = ProgressBar::new(resumes.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let mut documents = Vec::with_capacity(resumes.len());
            for path in &resumes {
                progress.set_message(path.display().to_string());
                let document = input_manager
                    .load_resume(path)
                    .await
                    .with_context(|| format!("Failed to read resume {}", path.display()))?;
                documents.push(document);
                progress.inc(1);
            }
            progress.finish_and_clear();

            let analyzer = ResumeAnalyzer::new(EligibilityClassifier::new(threshold))
                .with_parallel(config.processing.parallel && !sequential);
            let run = analyzer.analyze_batch(&keywords, &documents);
            let report = BatchReport::new(&run, &documents, detailed);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed,
                true,
                true,
            );
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = resolve_save_path(&path, &output_format, &run.role);
                    save_report_to_file(&content, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }

            if feedback || feedback_dir.is_some() {
                let dir = feedback_dir.unwrap_or(config.output.reports_dir.clone());
                write_feedback_reports(&run.role, &run.candidates, &dir)?;
            }
        }

        Commands::Roles { action } => match action {
            RoleAction::List { roles_dir } => {
                let dir = roles_dir.unwrap_or(config.keywords.roles_dir.clone());
                let source = DirectoryKeywordSource::new(dir);
                let roles = source.roles()?;

                println!("💼 Job roles in {}:", source.roles_dir().display());
                if roles.is_empty() {
                    println!("  (none) add <role>.txt files with one skill per line");
                }
                for role in roles {
                    println!("  • {}", role);
                }
            }

            RoleAction::Show { role, roles_dir } => {
                let dir = roles_dir.unwrap_or(config.keywords.roles_dir.clone());
                let keywords = DirectoryKeywordSource::new(dir).load(&role)?;

                println!("💼 {} ({} keywords)", keywords.role, keywords.len());
                println!("{}", keywords.unique_tokens().join(", "));
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("{}", toml::to_string_pretty(&config).context("Failed to render configuration")?);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn write_feedback_reports(
    role: &str,
    candidates: &[resume_screener::CandidateResult],
    dir: &Path,
) -> anyhow::Result<()> {
    let writer = FeedbackPdfWriter::default();

    for (position, candidate) in candidates.iter().enumerate() {
        let feedback = FeedbackReport::from_candidate(role, position + 1, candidate);
        match writer.write(&feedback, dir) {
            Ok(path) => println!("📥 Feedback report for {}: {}", candidate.name, path.display()),
            Err(e) => {
                warn!("Failed to write feedback report for {}: {}", candidate.name, e);
                return Err(e).context("Failed to write feedback reports");
            }
        }
    }

    Ok(())
}
