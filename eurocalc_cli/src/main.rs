//! # Eurocalc CLI
//!
//! Command line front end for the formula catalog: list and document
//! clauses, evaluate them from `name=value` inputs, and browse the steel
//! profile tables.
//!
//! ```bash
//! eurocalc eval en-1993-1-1 5.7 h_ed=50000 v_ed=100000
//! eurocalc eval en-1992-1-1 6.58 c=50 h=100 n_ed=200 --json
//! eurocalc profile "IPE 300"
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use eurocalc_core::profiles::{all_profiles, ProfileSeries, SteelProfile};
use eurocalc_core::registry::{Clause, Evaluation, Inputs, ALL_CLAUSES};
use eurocalc_core::{CalcError, CalcResult, SourceDocument};

#[derive(Parser)]
#[command(name = "eurocalc")]
#[command(about = "Eurocalc - Eurocode formula catalog", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List clauses in the catalog
    List {
        /// Only list clauses of this document (e.g., en-1992-1-1)
        #[arg(short, long)]
        document: Option<String>,
    },
    /// Show the formula, symbols and assumptions of a clause
    Show {
        /// Source document (e.g., en-1993-1-1)
        document: String,
        /// Equation number (e.g., 5.7)
        label: String,
    },
    /// Evaluate a clause and print its derivation
    Eval {
        /// Source document (e.g., en-1993-1-1)
        document: String,
        /// Equation number (e.g., 5.7)
        label: String,
        /// Inputs as name=value (e.g., h_ed=50000)
        #[arg(value_parser = parse_input)]
        inputs: Vec<(String, f64)>,
    },
    /// List steel profiles
    Profiles {
        /// Only list one series (IPE, HEA or HEB)
        #[arg(short, long)]
        series: Option<String>,
    },
    /// Show the dimensions and derived properties of one profile
    Profile {
        /// Designation (e.g., "IPE 300" or ipe300)
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List { document } => cmd_list(document.as_deref(), cli.json).map_err(|e| (e, None)),
        Commands::Show { document, label } => cmd_show(&document, &label, cli.json).map_err(|e| (e, None)),
        Commands::Eval { document, label, inputs } => collect_inputs(inputs)
            .and_then(|inputs| cmd_eval(&document, &label, inputs, cli.json))
            .map_err(|e| {
                let hint = eval_hint(&e, &document, &label);
                (e, hint)
            }),
        Commands::Profiles { series } => cmd_profiles(series.as_deref(), cli.json).map_err(|e| (e, None)),
        Commands::Profile { name } => cmd_profile(&name, cli.json).map_err(|e| (e, None)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err((e, hint)) => {
            report_error(&e, hint.as_deref(), cli.json);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_input(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", arg))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((name.trim().to_string(), value))
}

/// Build the inputs map, rejecting a name given more than once
fn collect_inputs(pairs: Vec<(String, f64)>) -> CalcResult<Inputs> {
    let mut inputs = Inputs::new();
    for (name, value) in pairs {
        if inputs.contains_key(&name) {
            return Err(CalcError::invalid_input(name, value.to_string(), "given more than once"));
        }
        inputs.insert(name, value);
    }
    Ok(inputs)
}

/// Point input errors of `eval` at the clause's input list
fn eval_hint(error: &CalcError, document: &str, label: &str) -> Option<String> {
    error
        .is_input_error()
        .then(|| format!("Run 'eurocalc show {} {}' to list the inputs", document, label))
}

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_error(error: &CalcError, hint: Option<&str>, json: bool) {
    eprintln!("Error: {}", error);
    if let Some(hint) = hint {
        eprintln!("{}", hint);
    }
    if json {
        if let Ok(json) = serde_json::to_string_pretty(error) {
            eprintln!("{}", json);
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

// ============================================================================
// Clauses
// ============================================================================

#[derive(Serialize)]
struct ClauseSummary {
    document: SourceDocument,
    label: &'static str,
    name: &'static str,
    category: &'static str,
}

fn cmd_list(document: Option<&str>, json: bool) -> CalcResult<()> {
    let clauses = match document {
        Some(document) => Clause::in_document(document.parse()?),
        None => ALL_CLAUSES.to_vec(),
    };

    if json {
        let summaries: Vec<ClauseSummary> = clauses
            .iter()
            .map(|clause| {
                let meta = clause.metadata();
                ClauseSummary {
                    document: clause.document(),
                    label: clause.label(),
                    name: meta.name,
                    category: meta.category.display_name(),
                }
            })
            .collect();
        return print_json(&summaries);
    }

    let mut current = None;
    for clause in &clauses {
        if current != Some(clause.document()) {
            if current.is_some() {
                println!();
            }
            println!("{} ({})", clause.document().citation(), clause.document().slug());
            println!("  {:<10} {:<36} Category", "Label", "Name");
            current = Some(clause.document());
        }
        let meta = clause.metadata();
        println!("  {:<10} {:<36} {}", clause.label(), meta.name, meta.category.display_name());
    }
    Ok(())
}

fn cmd_show(document: &str, label: &str, json: bool) -> CalcResult<()> {
    let clause = Clause::find(document.parse()?, label)?;
    let meta = clause.metadata();

    if json {
        return print_json(&meta);
    }

    println!("{}: {}", clause.reference(), meta.name);
    println!();
    println!("  {}", meta.description);
    println!();
    println!("  Formula: {}", meta.formula_plain);
    println!("  Result:  {}", meta.result);
    println!();
    println!("  Inputs:");
    for var in &meta.variables {
        println!("    {:<12} {:<12} {} [{}]", var.name, var.symbol, var.description, var.units);
    }
    if !meta.assumptions.is_empty() {
        println!();
        println!("  Assumptions:");
        for assumption in &meta.assumptions {
            println!("    - {}", assumption);
        }
    }
    Ok(())
}

fn cmd_eval(document: &str, label: &str, inputs: Inputs, json: bool) -> CalcResult<()> {
    let clause = Clause::find(document.parse()?, label)?;
    let evaluation: Evaluation = clause.evaluate(&inputs)?;

    if json {
        return print_json(&evaluation);
    }

    let meta = clause.metadata();
    println!("{}: {}", clause.reference(), meta.name);
    println!();
    println!("  Complete: {}", evaluation.latex_complete);
    println!("  Short:    {}", evaluation.latex_short);
    println!();
    match evaluation.passes() {
        Some(passes) => println!("  Result:   {} {}", passes, status_icon(passes)),
        None => println!("  Result:   {}", evaluation.value),
    }
    if let Some(unity) = evaluation.unity_check {
        println!("  Unity:    {:.3}", unity);
    }
    Ok(())
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Serialize)]
struct ProfileReport<'a> {
    #[serde(flatten)]
    profile: &'a SteelProfile,
    area: f64,
    shear_area: f64,
    weight_per_metre: f64,
}

impl<'a> From<&'a SteelProfile> for ProfileReport<'a> {
    fn from(profile: &'a SteelProfile) -> Self {
        Self {
            profile,
            area: profile.area(),
            shear_area: profile.shear_area(1.0),
            weight_per_metre: profile.weight_per_metre(),
        }
    }
}

fn cmd_profiles(series: Option<&str>, json: bool) -> CalcResult<()> {
    let profiles: Vec<&SteelProfile> = match series {
        Some(series) => series.parse::<ProfileSeries>()?.profiles().iter().collect(),
        None => all_profiles().collect(),
    };

    if json {
        let reports: Vec<ProfileReport> = profiles.iter().map(|p| ProfileReport::from(*p)).collect();
        return print_json(&reports);
    }

    println!(
        "{:<10} {:>7} {:>7} {:>6} {:>6} {:>5} {:>9} {:>8}",
        "Profile", "h", "b", "tw", "tf", "r", "A [mm²]", "G [kg/m]"
    );
    for p in profiles {
        println!(
            "{:<10} {:>7} {:>7} {:>6} {:>6} {:>5} {:>9.0} {:>8.1}",
            p.name,
            p.h,
            p.b,
            p.t_w,
            p.t_f,
            p.r,
            p.area(),
            p.weight_per_metre()
        );
    }
    Ok(())
}

fn cmd_profile(name: &str, json: bool) -> CalcResult<()> {
    let profile = SteelProfile::lookup(name)?;

    if json {
        return print_json(&ProfileReport::from(profile));
    }

    println!("{} ({} series)", profile.name, profile.series);
    println!();
    println!("  h   = {:>8.1} mm", profile.h);
    println!("  b   = {:>8.1} mm", profile.b);
    println!("  t_w = {:>8.1} mm", profile.t_w);
    println!("  t_f = {:>8.1} mm", profile.t_f);
    println!("  r   = {:>8.1} mm", profile.r);
    println!("  h_w = {:>8.1} mm", profile.web_height());
    println!("  d   = {:>8.1} mm", profile.straight_web_depth());
    println!();
    println!("  A   = {:>8.0} mm²", profile.area());
    println!("  A_v = {:>8.0} mm² (η = 1.0)", profile.shear_area(1.0));
    println!("  G   = {:>8.1} kg/m", profile.weight_per_metre());
    Ok(())
}
