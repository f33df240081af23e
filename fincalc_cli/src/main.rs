//! # Fincalc CLI Application
//!
//! Command-line front end for the financial calculators. Each calculator is a
//! subcommand taking its fields as options; values are read the way a text
//! field reads them, so `--principal 250,000` works.
//!
//! ```text
//! fincalc --lang en compound --principal 1000 --rate 12 --months 12 --schedule
//! fincalc loan --loan-amount 250,000 --interest-rate 6.5 --loan-term 30 --json
//! fincalc interactive retirement
//! fincalc meta break-even
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use fincalc_core::calculations::CalculatorKind;
use fincalc_core::currency::is_supported;
use fincalc_core::errors::{CalcError, CalcResult};
use fincalc_core::localization::{detect_language, supported_languages, Language, Localizer, Translate};
use fincalc_core::report::{CalculationReport, ScheduleTable};
use fincalc_core::seo::page_metadata;
use fincalc_core::session::{CalculatorSession, SessionState};
use fincalc_core::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "fincalc", about = "Multi-language financial calculator", version)]
struct Cli {
    /// Language for labels and currency (e.g. en, ko, de-DE)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the typed result as JSON instead of translated lines
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compound interest with monthly contributions
    Compound(CompoundArgs),

    /// Simple interest
    Simple(SimpleArgs),

    /// Monthly contribution needed to reach a savings goal
    Savings(SavingsArgs),

    /// Return on investment
    Roi(RoiArgs),

    /// Monthly loan payment
    Loan(LoanArgs),

    /// Retirement savings projection
    Retirement(RetirementArgs),

    /// Future cost under inflation
    Inflation(InflationArgs),

    /// Break-even units and revenue
    #[command(name = "break-even")]
    BreakEven(BreakEvenArgs),

    /// Prompt for each field of a calculator
    Interactive {
        /// Calculator slug (compound, simple, savings, roi, loan, retirement, inflation, break-even)
        calculator: String,

        /// Also print the monthly breakdown, if the calculator has one
        #[arg(long, default_value_t = false)]
        schedule: bool,
    },

    /// List supported languages
    Languages,

    /// Print page metadata for a calculator (or the landing page)
    Meta {
        calculator: Option<String>,
    },
}

#[derive(Debug, Args)]
struct CompoundArgs {
    #[arg(long)]
    principal: Option<String>,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<String>,
    #[arg(long)]
    months: Option<String>,
    #[arg(long)]
    contribution: Option<String>,
    /// Print the month-by-month breakdown
    #[arg(long, default_value_t = false)]
    schedule: bool,
}

#[derive(Debug, Args)]
struct SimpleArgs {
    #[arg(long)]
    principal: Option<String>,
    #[arg(long)]
    rate: Option<String>,
    #[arg(long)]
    years: Option<String>,
}

#[derive(Debug, Args)]
struct SavingsArgs {
    #[arg(long)]
    target: Option<String>,
    #[arg(long)]
    principal: Option<String>,
    #[arg(long)]
    years: Option<String>,
    #[arg(long)]
    rate: Option<String>,
}

#[derive(Debug, Args)]
struct RoiArgs {
    #[arg(long)]
    initial_investment: Option<String>,
    #[arg(long)]
    final_value: Option<String>,
}

#[derive(Debug, Args)]
struct LoanArgs {
    #[arg(long)]
    loan_amount: Option<String>,
    #[arg(long)]
    interest_rate: Option<String>,
    /// Term in years
    #[arg(long)]
    loan_term: Option<String>,
    /// Print the amortization schedule
    #[arg(long, default_value_t = false)]
    schedule: bool,
}

#[derive(Debug, Args)]
struct RetirementArgs {
    #[arg(long)]
    current_age: Option<String>,
    #[arg(long)]
    retirement_age: Option<String>,
    #[arg(long)]
    current_savings: Option<String>,
    #[arg(long)]
    monthly_contribution: Option<String>,
    #[arg(long)]
    annual_return: Option<String>,
}

#[derive(Debug, Args)]
struct InflationArgs {
    #[arg(long)]
    initial_amount: Option<String>,
    #[arg(long)]
    inflation_rate: Option<String>,
    #[arg(long)]
    years: Option<String>,
}

#[derive(Debug, Args)]
struct BreakEvenArgs {
    #[arg(long)]
    fixed_costs: Option<String>,
    #[arg(long)]
    variable_cost_per_unit: Option<String>,
    #[arg(long)]
    price_per_unit: Option<String>,
}

/// A calculator subcommand resolved to its kind, field values and schedule flag
struct CalculatorRequest<'a> {
    kind: CalculatorKind,
    values: Vec<(&'static str, &'a Option<String>)>,
    schedule: bool,
}

impl Commands {
    fn calculator_request(&self) -> Option<CalculatorRequest<'_>> {
        let (kind, values, schedule) = match self {
            Commands::Compound(a) => (
                CalculatorKind::CompoundInterest,
                vec![
                    ("principal", &a.principal),
                    ("rate", &a.rate),
                    ("months", &a.months),
                    ("contribution", &a.contribution),
                ],
                a.schedule,
            ),
            Commands::Simple(a) => (
                CalculatorKind::SimpleInterest,
                vec![("principal", &a.principal), ("rate", &a.rate), ("years", &a.years)],
                false,
            ),
            Commands::Savings(a) => (
                CalculatorKind::SavingsGoal,
                vec![
                    ("target", &a.target),
                    ("principal", &a.principal),
                    ("years", &a.years),
                    ("rate", &a.rate),
                ],
                false,
            ),
            Commands::Roi(a) => (
                CalculatorKind::Roi,
                vec![("initialInvestment", &a.initial_investment), ("finalValue", &a.final_value)],
                false,
            ),
            Commands::Loan(a) => (
                CalculatorKind::Loan,
                vec![
                    ("loanAmount", &a.loan_amount),
                    ("interestRate", &a.interest_rate),
                    ("loanTerm", &a.loan_term),
                ],
                a.schedule,
            ),
            Commands::Retirement(a) => (
                CalculatorKind::Retirement,
                vec![
                    ("currentAge", &a.current_age),
                    ("retirementAge", &a.retirement_age),
                    ("currentSavings", &a.current_savings),
                    ("monthlyContribution", &a.monthly_contribution),
                    ("annualReturn", &a.annual_return),
                ],
                false,
            ),
            Commands::Inflation(a) => (
                CalculatorKind::Inflation,
                vec![
                    ("initialAmount", &a.initial_amount),
                    ("inflationRate", &a.inflation_rate),
                    ("years", &a.years),
                ],
                false,
            ),
            Commands::BreakEven(a) => (
                CalculatorKind::BreakEven,
                vec![
                    ("fixedCosts", &a.fixed_costs),
                    ("variableCostPerUnit", &a.variable_cost_per_unit),
                    ("pricePerUnit", &a.price_per_unit),
                ],
                false,
            ),
            Commands::Interactive { .. } | Commands::Languages | Commands::Meta { .. } => return None,
        };
        Some(CalculatorRequest { kind, values, schedule })
    }
}

impl CalculatorRequest<'_> {
    /// Session with every given option stored; omitted options stay blank
    fn session(&self) -> CalcResult<CalculatorSession> {
        let mut session = CalculatorSession::new(self.kind);
        for (id, value) in &self.values {
            if let Some(raw) = value {
                session.set_field(id, raw)?;
            }
        }
        Ok(session)
    }
}

fn load_settings(cli: &Cli) -> CalcResult<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    Ok(match &cli.lang {
        Some(lang) => {
            if !is_supported(lang) {
                log::warn!("Unsupported language '{}'", lang);
            }
            settings.with_language(detect_language(Some(lang)))
        }
        None => settings,
    })
}

fn prompt_text(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_session(kind: CalculatorKind, t: &dyn Translate) -> CalcResult<CalculatorSession> {
    let mut session = CalculatorSession::new(kind);
    println!("{}", t.translate(kind.title_key()));
    println!();

    for spec in session.fields() {
        let suffix = spec.unit.suffix(t);
        let unit = if suffix.is_empty() { String::new() } else { format!(" ({})", suffix) };
        let default = spec
            .default
            .map(|d| format!(" [{}]", d))
            .unwrap_or_default();
        let prompt = format!("{}{}{}: ", t.translate(spec.label_key), unit, default);

        if let Some(raw) = prompt_text(&prompt) {
            session.set_field(spec.id, &raw)?;
        }
    }
    println!();
    Ok(session)
}

fn write_report(out: &mut impl Write, title: &str, report: &CalculationReport, show_schedule: bool) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count().max(8)))?;

    let width = report
        .lines
        .iter()
        .map(|line| line.label.chars().count())
        .max()
        .unwrap_or(0);
    for line in &report.lines {
        let pad = width - line.label.chars().count();
        writeln!(out, "  {}{}  {}", line.label, " ".repeat(pad), line.value)?;
    }

    if show_schedule {
        if let Some(table) = &report.schedule {
            writeln!(out)?;
            write_schedule(out, table)?;
        }
    }
    Ok(())
}

fn write_schedule(out: &mut impl Write, table: &ScheduleTable) -> io::Result<()> {
    writeln!(out, "{}", table.title)?;

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        let period_len = row.period.to_string().len();
        if let Some(w) = widths.first_mut() {
            *w = (*w).max(period_len);
        }
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i + 1) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:>w$}", h, w = *w))
        .collect();
    writeln!(out, "  {}", header.join("  "))?;

    for row in &table.rows {
        let mut cells = vec![format!("{:>w$}", row.period, w = widths.first().copied().unwrap_or(0))];
        for (i, cell) in row.cells.iter().enumerate() {
            let w = widths.get(i + 1).copied().unwrap_or(0);
            cells.push(format!("{:>w$}", cell, w = w));
        }
        writeln!(out, "  {}", cells.join("  "))?;
    }
    Ok(())
}

/// One line per language; `*` marks the active one, and languages without
/// their own labels are flagged.
fn write_languages(out: &mut impl Write, languages: &[Language], active: &str) -> io::Result<()> {
    for language in languages {
        let marker = if language.code == active { "*" } else { " " };
        let note = if language.translated { "" } else { "  (labels in English)" };
        writeln!(out, "{} {:<3} {}{}", marker, language.code, language, note)?;
    }
    Ok(())
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_calculation(
    mut session: CalculatorSession,
    show_schedule: bool,
    json: bool,
    settings: &Settings,
    t: &dyn Translate,
) -> CalcResult<()> {
    let kind = session.kind();
    match session.calculate(settings, t) {
        SessionState::Computed { output, report } => {
            if json {
                print_json(output)
            } else {
                let title = t.translate(kind.title_key());
                write_report(&mut io::stdout().lock(), &title, report, show_schedule)
                    .map_err(|e| CalcError::SerializationError { reason: e.to_string() })
            }
        }
        SessionState::Failed(e) => Err(e.clone()),
        SessionState::Idle => Ok(()),
    }
}

fn run(cli: &Cli) -> CalcResult<()> {
    let settings = load_settings(cli)?;
    let t = Localizer::load(&settings.language);
    log::debug!("Using language {}", t.language());

    if let Some(request) = cli.command.calculator_request() {
        let session = request.session()?;
        return run_calculation(session, request.schedule, cli.json, &settings, &t);
    }

    match &cli.command {
        Commands::Interactive { calculator, schedule } => {
            let kind = CalculatorKind::from_slug(calculator)?;
            let session = prompt_session(kind, &t)?;
            run_calculation(session, *schedule, cli.json, &settings, &t)
        }
        Commands::Languages => {
            let languages = supported_languages();
            if cli.json {
                return print_json(&languages);
            }
            write_languages(&mut io::stdout().lock(), &languages, t.language())
                .map_err(|e| CalcError::SerializationError { reason: e.to_string() })
        }
        Commands::Meta { calculator } => {
            let kind = calculator.as_deref().map(CalculatorKind::from_slug).transpose()?;
            print_json(&page_metadata(&settings.language, kind)?)
        }
        _ => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Parsed arguments: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
