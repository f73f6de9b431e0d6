//! CareFinder — command-line symptom triage
//!
//! Answers the CareFinder questionnaire from the command line and prints the
//! recommended care pathway, or prints the service guide and the active
//! triage rules.
//!
//! Usage:
//!   cargo run -p carefinder-cli -- assess --severity moderate --duration more-than-three-days
//!   cargo run -p carefinder-cli -- assess --red-flag breathing --severity mild --duration less-than-a-day
//!   cargo run -p carefinder-cli -- assess --input answers.json --json
//!   cargo run -p carefinder-cli -- guidance
//!   cargo run -p carefinder-cli -- rules --rules policies/triage.toml

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use carefinder_contracts::{
    assessment::{Assessment, FALLBACK_RULE_ID},
    error::{CareFinderError, CareFinderResult},
    form::SymptomForm,
    guidance::{GUIDANCE, GUIDANCE_INTRO, GUIDANCE_TITLE},
    recommendation::{DISCLAIMER, SAFETY_NET},
    report::{Duration, RedFlag, Severity},
};
use carefinder_core::Assessor;
use carefinder_rules::RuleEngine;

// ── CLI definition ────────────────────────────────────────────────────────────

/// CareFinder — decide between A&E, a GP appointment, or a pharmacy.
#[derive(Parser)]
#[command(
    name = "carefinder",
    about = "CareFinder symptom triage",
    long_about = "Answers the CareFinder symptom questionnaire and recommends A&E, a GP\n\
                  appointment, or a pharmacy. General guidance only, not a diagnosis."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Triage one set of symptoms.
    Assess(AssessArgs),
    /// Print the guide to choosing the right NHS service.
    Guidance,
    /// Print the active triage rules in evaluation order.
    Rules {
        /// Load rules from this TOML file instead of the built-in set.
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,
    },
}

#[derive(Args)]
struct AssessArgs {
    /// Emergency symptom present. Repeat for several: chest-pain, breathing,
    /// stroke, bleeding, head-injury, seizures.
    #[arg(long = "red-flag", value_name = "FLAG")]
    red_flags: Vec<RedFlag>,

    /// How severe the main symptom is: mild, moderate, severe.
    #[arg(long)]
    severity: Option<Severity>,

    /// How long it has lasted: less-than-a-day, one-to-three-days,
    /// more-than-three-days.
    #[arg(long)]
    duration: Option<Duration>,

    /// Start from answers in a JSON file. Flags given alongside it add to or
    /// replace its answers.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Load rules from this TOML file instead of the built-in set.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Print the assessment as JSON.
    #[arg(long)]
    json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Assess(args) => run_assess(args),
        Command::Guidance => {
            print_guidance();
            Ok(())
        }
        Command::Rules { rules } => run_rules(rules.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("carefinder: {}", e);
        if let CareFinderError::InvalidReport { field, .. } = &e {
            if field == "severity" || field == "duration" {
                eprintln!("Answer every question (--severity and --duration) and try again.");
            }
        }
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_assess(args: AssessArgs) -> CareFinderResult<()> {
    let engine = load_engine(args.rules.as_deref())?;
    let assessor = Assessor::new(Box::new(engine));

    let form = build_form(&args)?;
    let assessment = assessor.assess(&form)?;

    if args.json {
        match serde_json::to_string_pretty(&assessment) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("carefinder: failed to encode assessment as JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_assessment(&assessment);
    }
    Ok(())
}

fn run_rules(path: Option<&Path>) -> CareFinderResult<()> {
    let engine = load_engine(path)?;
    let rules = engine.rules();

    println!("Triage rules (first match wins):");
    println!();
    for (i, rule) in rules.rules.iter().enumerate() {
        println!(
            "  {}. {:<22} {:<58} → {}",
            i + 1,
            rule.id,
            rule.when.to_string(),
            rule.recommend
        );
        println!("     {}", rule.description);
    }
    println!("  *  {:<22} {:<58} → {}", FALLBACK_RULE_ID, "otherwise", rules.fallback);
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_engine(path: Option<&Path>) -> CareFinderResult<RuleEngine> {
    match path {
        Some(path) => RuleEngine::from_file(path),
        None => Ok(RuleEngine::standard()),
    }
}

/// Start from the `--input` draft, if any, then apply the flags on top:
/// `--red-flag` adds to the draft's flags, `--severity` and `--duration`
/// replace its answers.
fn build_form(args: &AssessArgs) -> CareFinderResult<SymptomForm> {
    let mut form = match &args.input {
        Some(path) => read_form(path)?,
        None => SymptomForm::new(),
    };
    for flag in &args.red_flags {
        form.red_flags.insert(*flag);
    }
    if let Some(severity) = args.severity {
        form.set_severity(severity);
    }
    if let Some(duration) = args.duration {
        form.set_duration(duration);
    }
    Ok(form)
}

/// Read a JSON draft. Severity and duration may be missing here; `submit()`
/// decides what is missing.
fn read_form(path: &Path) -> CareFinderResult<SymptomForm> {
    let contents = std::fs::read_to_string(path).map_err(|e| CareFinderError::InvalidReport {
        field: "input".to_string(),
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    let form = parse_form(&contents, &path.display().to_string())?;
    debug!(path = %path.display(), "loaded answers from file");
    Ok(form)
}

fn parse_form(contents: &str, origin: &str) -> CareFinderResult<SymptomForm> {
    serde_json::from_str(contents).map_err(|e| CareFinderError::InvalidReport {
        field: "input".to_string(),
        reason: format!("failed to parse '{}': {}", origin, e),
    })
}

fn print_assessment(assessment: &Assessment) {
    let rec = assessment.recommendation;
    println!();
    println!("{}", rec.headline());
    println!("{}", rec.advice());
    println!();
    println!("{}", SAFETY_NET);
    print_disclaimer();
}

fn print_guidance() {
    println!();
    println!("{}", GUIDANCE_TITLE);
    println!("{}", "=".repeat(GUIDANCE_TITLE.len()));
    println!("{}", GUIDANCE_INTRO);
    for section in GUIDANCE.iter() {
        println!();
        println!("{}", section.title);
        println!("{}", section.summary);
        for item in section.items {
            println!("  - {}", item);
        }
    }
    print_disclaimer();
}

fn print_disclaimer() {
    println!();
    println!("---");
    println!("{}", DISCLAIMER);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use carefinder_contracts::recommendation::Recommendation;

    use super::*;

    fn assess_args(argv: &[&str]) -> AssessArgs {
        let mut full = vec!["carefinder", "assess"];
        full.extend_from_slice(argv);
        let cli = Cli::try_parse_from(full)
            .unwrap_or_else(|e| panic!("argument parsing failed: {e}"));
        match cli.command {
            Command::Assess(args) => args,
            _ => panic!("expected the assess subcommand"),
        }
    }

    /// Write `contents` to a per-test file under the system temp directory.
    fn draft_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "carefinder-cli-{}-{}.json",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn assess(form: &SymptomForm) -> CareFinderResult<Assessment> {
        Assessor::new(Box::new(RuleEngine::standard())).assess(form)
    }

    fn expect_invalid(result: CareFinderResult<impl std::fmt::Debug>, expected: &str) {
        match result {
            Err(CareFinderError::InvalidReport { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidReport for {expected}, got {:?}", other),
        }
    }

    #[test]
    fn flags_alone_build_a_complete_form() {
        let args = assess_args(&[
            "--red-flag",
            "stroke",
            "--severity",
            "mild",
            "--duration",
            "less-than-a-day",
        ]);
        let form = build_form(&args).unwrap();

        assert!(form.red_flags.contains(RedFlag::Stroke));
        assert_eq!(
            assess(&form).unwrap().recommendation,
            Recommendation::EmergencyCare
        );
    }

    #[test]
    fn flags_replace_draft_answers() {
        let path = draft_file(
            "override",
            r#"{ "red_flags": [], "severity": "mild", "duration": "less-than-a-day" }"#,
        );
        let input = path.display().to_string();
        let args = assess_args(&[
            "--input",
            &input,
            "--severity",
            "moderate",
            "--duration",
            "more-than-three-days",
        ]);
        let form = build_form(&args).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(form.severity, Some(Severity::Moderate));
        assert_eq!(form.duration, Some(Duration::MoreThanThreeDays));
        assert_eq!(
            assess(&form).unwrap().recommendation,
            Recommendation::GpAppointment
        );
    }

    #[test]
    fn repeated_red_flags_add_to_draft_flags() {
        let path = draft_file(
            "add-flags",
            r#"{ "red_flags": ["bleeding"], "severity": "mild", "duration": "less-than-a-day" }"#,
        );
        let input = path.display().to_string();
        let args = assess_args(&[
            "--input",
            &input,
            "--red-flag",
            "seizures",
            "--red-flag",
            "head-injury",
        ]);
        let form = build_form(&args).unwrap();
        fs::remove_file(&path).ok();

        let flags: Vec<RedFlag> = form.red_flags.iter().collect();
        assert_eq!(
            flags,
            vec![RedFlag::Bleeding, RedFlag::HeadInjury, RedFlag::Seizures]
        );
        assert_eq!(form.severity, Some(Severity::Mild));
    }

    #[test]
    fn draft_answers_kept_when_no_flags_given() {
        let path = draft_file(
            "keep",
            r#"{ "red_flags": [], "severity": "severe", "duration": "one-to-three-days" }"#,
        );
        let input = path.display().to_string();
        let form = build_form(&assess_args(&["--input", &input])).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            assess(&form).unwrap().recommendation,
            Recommendation::GpAppointment
        );
    }

    #[test]
    fn malformed_draft_is_invalid_input() {
        expect_invalid(parse_form("{ not json", "draft.json"), "input");
        expect_invalid(
            parse_form(r#"{ "red_flags": [], "severity": "agonising" }"#, "draft.json"),
            "input",
        );
    }

    #[test]
    fn missing_draft_file_is_invalid_input() {
        let path = std::env::temp_dir().join("carefinder-cli-no-such-draft.json");
        let input = path.display().to_string();
        expect_invalid(build_form(&assess_args(&["--input", &input])), "input");
    }

    #[test]
    fn incomplete_draft_is_not_assessed() {
        let form = parse_form(r#"{ "red_flags": ["breathing"], "severity": "mild" }"#, "draft.json")
            .unwrap();
        expect_invalid(assess(&form), "duration");
    }

    #[test]
    fn incomplete_flags_are_not_assessed() {
        let form = build_form(&assess_args(&["--duration", "less-than-a-day"])).unwrap();
        expect_invalid(assess(&form), "severity");
    }

    #[test]
    fn misspelled_red_flags_key_in_draft_is_rejected() {
        let path = draft_file(
            "misspelled",
            r#"{ "redFlags": ["chest-pain"], "severity": "mild", "duration": "less-than-a-day" }"#,
        );
        let input = path.display().to_string();
        let result = build_form(&assess_args(&["--input", &input]));
        fs::remove_file(&path).ok();

        expect_invalid(result, "input");
    }

    #[test]
    fn unknown_red_flag_argument_is_rejected_by_clap() {
        let result = Cli::try_parse_from([
            "carefinder",
            "assess",
            "--red-flag",
            "headache",
            "--severity",
            "mild",
            "--duration",
            "less-than-a-day",
        ]);
        assert!(result.is_err());
    }
}
