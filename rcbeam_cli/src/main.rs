//! # rcbeam CLI
//!
//! Runs the RC beam bending design on a JSON input file and prints the
//! design report. The file holds either a single beam or a whole project.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rcbeam_core::calculations::rc_beam::RcBeamInput;
use rcbeam_core::materials::ConcreteClass;
use rcbeam_core::project::Project;
use rcbeam_core::{design_report, CalcError, CalculationItem, CalculationOutput};
use tracing::info;

#[derive(Parser)]
#[command(name = "rcbeam")]
#[command(about = "Rectangular RC beam bending design (EN 1992-1-1)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Design the beam(s) in an input file and print the report
    Design(InputArgs),
    /// Validate an input file without running the design
    Check(InputArgs),
    /// List the available concrete classes
    Classes,
}

#[derive(Args)]
struct InputArgs {
    /// Beam or project JSON file
    input: PathBuf,
    /// Print results as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Design(args) => design(args),
        Command::Check(args) => check(args),
        Command::Classes => {
            for (index, class) in ConcreteClass::ALL.iter().enumerate() {
                println!("{:>2}  {:<7} f_ck = {:>4.0} MPa", index, class, class.fck_mpa());
            }
            Ok(())
        }
    }
}

fn design(args: InputArgs) -> Result<()> {
    let project = load_input(&args.input)?;
    info!(path = %args.input.display(), beams = project.item_count(), "loaded input");

    let mut failures = 0;
    let mut outputs = Vec::with_capacity(project.item_count());

    for (_, item, output) in project.calculate_all() {
        match output {
            Ok(output) => {
                if !output.passes() {
                    failures += 1;
                }
                if args.json {
                    outputs.push(output);
                } else {
                    print_report(item, &output);
                }
            }
            Err(e) => {
                failures += 1;
                print_error(item.label(), &e);
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&outputs).context("failed to serialize results")?;
        println!("{}", json);
    }

    if failures > 0 {
        bail!("{} beam(s) failed", failures);
    }
    Ok(())
}

fn check(args: InputArgs) -> Result<()> {
    let project = load_input(&args.input)?;
    let mut failures = 0;

    for (_, item) in project.items_by_label() {
        match item.validate() {
            Ok(()) => println!("{}: OK", item.label()),
            Err(e) => {
                failures += 1;
                print_error(item.label(), &e);
            }
        }
    }

    if failures > 0 {
        bail!("{} beam(s) have invalid input", failures);
    }
    Ok(())
}

fn load_input(path: &Path) -> Result<Project> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_input(&text).with_context(|| format!("invalid input file {}", path.display()))
}

/// A file with a `meta` header is a project; anything else is a single beam,
/// wrapped in a project so both run the same way.
fn parse_input(text: &str) -> Result<Project> {
    let value: serde_json::Value = serde_json::from_str(text).context("not valid JSON")?;

    if value.get("meta").is_some() {
        let project: Project = serde_json::from_str(text).context("not a valid project")?;
        Ok(project)
    } else {
        let beam: RcBeamInput = serde_json::from_str(text).context("not a valid beam")?;
        let mut project = Project::default();
        project.add_item(CalculationItem::RcBeam(beam));
        Ok(project)
    }
}

fn print_report(item: &CalculationItem, output: &CalculationOutput) {
    let (CalculationItem::RcBeam(beam), CalculationOutput::RcBeam(result)) = (item, output);

    println!("═══════════════════════════════════════════════════════════");
    println!("  {}", beam.label);
    println!("═══════════════════════════════════════════════════════════");
    for line in design_report(beam, result) {
        println!("  {}", line);
    }
    println!("───────────────────────────────────────────────────────────");
    println!(
        "  RESULT: {} ({})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.section_type()
    );
    println!();
}

fn print_error(label: &str, e: &CalcError) {
    eprintln!("{}: error: {}", label, e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("{}", json);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
