//! Axiom Linter CLI

use axl_core::report::{self, ComplianceReport, ReportFormat};
use axl_core::templates;
use axl_core::{AnalyzerConfig, PolicyAnalyzer};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "axl")]
#[command(about = "Axiom-based AI policy compliance linter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a policy document against a set of axioms
    Analyze {
        /// Path to the policy text file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Compliance template id (healthcare, gdpr, finance)
        #[arg(short, long)]
        template: Option<String>,

        /// Path to an axiom file, one axiom per line
        #[arg(short, long)]
        axioms: Option<PathBuf>,

        /// Violation-rate threshold for the compliance verdict
        #[arg(long)]
        threshold: Option<f64>,

        /// Disable contradiction-pair checking
        #[arg(long)]
        no_semantic: bool,

        /// Output format (json, markdown)
        #[arg(short, long, default_value = "markdown")]
        output: String,

        /// Output file (defaults to stdout)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// List available compliance templates
    Templates,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    match cli.command {
        Commands::Analyze {
            file,
            template,
            axioms,
            threshold,
            no_semantic,
            output,
            output_file,
        } => {
            cmd_analyze(file, template, axioms, threshold, no_semantic, output, output_file);
        }
        Commands::Templates => {
            cmd_templates();
        }
    }
}

fn cmd_analyze(
    file: Option<PathBuf>,
    template: Option<String>,
    axioms: Option<PathBuf>,
    threshold: Option<f64>,
    no_semantic: bool,
    output_format: String,
    output_file: Option<PathBuf>,
) {
    let policy = match &file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read policy file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut text = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut text) {
                error!("Failed to read policy from stdin: {}", e);
                std::process::exit(1);
            }
            text
        }
    };

    let analyzer = match (&template, &axioms) {
        (Some(id), _) => {
            let Some(preset) = templates::find_template(id) else {
                error!("Unknown template: {}", id);
                std::process::exit(1);
            };
            info!("Using template: {}", preset.name);
            PolicyAnalyzer::with_config(
                preset.axioms.clone(),
                AnalyzerConfig {
                    threshold: threshold.unwrap_or(preset.threshold),
                    enable_semantic: !no_semantic,
                    ..Default::default()
                },
            )
        }
        (None, Some(path)) => {
            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    error!("Failed to read axiom file {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            PolicyAnalyzer::with_config(
                parse_axiom_file(&content),
                AnalyzerConfig {
                    threshold: threshold.unwrap_or(0.3),
                    enable_semantic: !no_semantic,
                    ..Default::default()
                },
            )
        }
        (None, None) => {
            error!("Either --template or --axioms is required");
            std::process::exit(1);
        }
    };

    let result = analyzer.analyze(&policy);
    info!(
        "Analysis complete: {} violations across {} axioms ({} risk)",
        result.total_violations, result.axioms_checked, result.risk_level
    );

    let compliant = result.is_compliant;
    let audit = ComplianceReport::new(&policy, result);

    let format = match output_format.to_lowercase().as_str() {
        "json" => ReportFormat::Json,
        _ => ReportFormat::Markdown,
    };

    match report::generate_report(&audit, format) {
        Ok(content) => {
            if let Some(out_path) = output_file {
                if let Err(e) = std::fs::write(&out_path, &content) {
                    error!("Failed to write report to {}: {}", out_path.display(), e);
                    std::process::exit(1);
                }
                info!("Report written to: {}", out_path.display());
            } else {
                println!("{}", content);
            }
        }
        Err(e) => {
            error!("Failed to generate report: {}", e);
            std::process::exit(1);
        }
    }

    if !compliant {
        std::process::exit(1);
    }
}

fn cmd_templates() {
    println!("\nAvailable Compliance Templates\n{}", "=".repeat(50));

    for template in templates::templates() {
        println!("\n{} ({})", template.name, template.id);
        println!("  Threshold: {}", template.threshold);
        println!("  Axioms:");
        for axiom in &template.axioms {
            println!("    - {}", axiom);
        }
    }
}

/// One axiom per line; blank lines and `#` comments are skipped
fn parse_axiom_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axiom_file() {
        let content = "\
# Core principles
AI must not deceive users

AI must protect privacy
";
        let axioms = parse_axiom_file(content);
        assert_eq!(
            axioms,
            vec!["AI must not deceive users", "AI must protect privacy"]
        );
    }
}
