use clap::{Parser, Subcommand};
use rogo_cli::prompt::parse_yes_no;
use rogo_cli::report::{format_report, format_results, save_report, DEFAULT_REPORT_FILENAME};
use rogo_cli::startup::{init_tracing, resolve_config};
use rogo_cli::text::{ABOUT, DISCLAIMER};
use rogo_cli::Shell;
use rogo_core::{knowledge, SymptomAnswers, SymptomChecker, SymptomId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rogo")]
#[command(about = "Rule-based symptom checker (educational, not medical advice)")]
struct Cli {
    /// Alternative knowledge-base YAML file (overrides ROGO_KNOWLEDGE_BASE)
    #[arg(long, global = true)]
    knowledge_base: Option<PathBuf>,
    /// Number of conditions to shortlist (overrides ROGO_TOP_N)
    #[arg(long, global = true)]
    top: Option<usize>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu {
        /// Where a saved report is written
        #[arg(long, default_value = DEFAULT_REPORT_FILENAME)]
        report: PathBuf,
    },
    /// Run one interactive check
    Check {
        /// Where a saved report is written
        #[arg(long, default_value = DEFAULT_REPORT_FILENAME)]
        report: PathBuf,
    },
    /// Evaluate symptoms given on the command line
    Evaluate {
        /// Present symptoms (comma-separated ids, e.g. fever,dry_cough)
        #[arg(long, value_delimiter = ',')]
        yes: Vec<String>,
        /// Explicit answers as id=yes|no (repeatable)
        #[arg(long = "answer")]
        answers: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write a text report to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// List the symptom catalog
    Symptoms,
    /// List the condition profiles
    Conditions,
    /// Load and validate the knowledge base
    Validate,
    /// About this program
    About,
}

fn parse_answer(raw: &str) -> anyhow::Result<(String, bool)> {
    let (id, reply) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected id=yes|no, got {raw:?}"))?;
    let present = parse_yes_no(reply)
        .ok_or_else(|| anyhow::anyhow!("expected yes or no for {id}, got {reply:?}"))?;
    Ok((id.trim().to_string(), present))
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let config = resolve_config(cli.top, cli.knowledge_base)?;
    let kb = knowledge::load(&config)?;
    let checker = SymptomChecker::new(&kb, config.top_n());

    match cli.command {
        Some(Commands::Menu { report }) => {
            let stdin = std::io::stdin();
            Shell::new(checker, stdin.lock(), std::io::stdout(), report).run()?;
        }
        None => {
            let stdin = std::io::stdin();
            Shell::new(
                checker,
                stdin.lock(),
                std::io::stdout(),
                PathBuf::from(DEFAULT_REPORT_FILENAME),
            )
            .run()?;
        }
        Some(Commands::Check { report }) => {
            let stdin = std::io::stdin();
            Shell::new(checker, stdin.lock(), std::io::stdout(), report).run_check()?;
        }
        Some(Commands::Evaluate {
            yes,
            answers,
            json,
            save,
        }) => {
            let mut pairs: Vec<(String, bool)> = yes
                .iter()
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(|id| (id.to_string(), true))
                .collect();
            for raw in &answers {
                pairs.push(parse_answer(raw)?);
            }
            let answers =
                SymptomAnswers::from_pairs(pairs.iter().map(|(id, v)| (id.as_str(), *v)))?;
            let assessment = checker.evaluate(&answers);

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                println!("{}", format_results(&assessment));
                println!();
                println!("{DISCLAIMER}");
            }

            if let Some(path) = save {
                let text = format_report(&kb, &answers, &assessment, &chrono::Local::now());
                let path = save_report(&path, &text)?;
                eprintln!("Report saved: {}", path.display());
            }
        }
        Some(Commands::Symptoms) => {
            for entry in kb.catalog() {
                println!("{:<18} {}", entry.id.as_str(), entry.question);
            }
        }
        Some(Commands::Conditions) => {
            for profile in kb.conditions() {
                println!("{} (severity: {})", profile.name(), profile.severity());
                for (id, weight) in profile.weights() {
                    println!("    {:<18} {weight}", id.as_str());
                }
                println!("  Advice: {}", profile.advice());
            }
            if !kb.red_flags().is_empty() {
                println!();
                println!("Red flags:");
                for rule in kb.red_flags() {
                    println!("  - {rule}");
                }
            }
        }
        Some(Commands::Validate) => {
            println!(
                "Knowledge base OK: {} symptoms, {} conditions, {} red flags",
                kb.catalog().len(),
                kb.conditions().len(),
                kb.red_flags().len()
            );
            let unused: Vec<&str> = SymptomId::ALL
                .into_iter()
                .filter(|id| {
                    !kb.conditions().iter().any(|c| c.weight(*id).is_some())
                        && !kb.red_flags().iter().any(|r| r.contains(*id))
                })
                .map(SymptomId::as_str)
                .collect();
            if !unused.is_empty() {
                println!("Asked but never weighted: {}", unused.join(", "));
            }
        }
        Some(Commands::About) => {
            println!("{ABOUT}");
        }
    }

    Ok(())
}
