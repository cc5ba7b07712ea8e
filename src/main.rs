mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use kader_matrisi::compat::love::LoveCompatibilityResult;
use kader_matrisi::compat::wealth::WealthAnalysisResult;
use kader_matrisi::config::EngineConfig;
use kader_matrisi::date::check_target_year;
use kader_matrisi::prompt::{build_completion_request, PromptRequest};
use kader_matrisi::{
    calculate_career_reading, calculate_love_compatibility, calculate_numerology,
    calculate_wealth_analysis, Business, CareerReading, NumerologyReport, Person, ReadingOptions,
};

#[derive(Parser)]
#[command(name = "kader-matrisi", about = "Numerology readings and compatibility engine")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Personal(PersonalArgs),
    Love(LoveArgs),
    Wealth(WealthArgs),
    Career(CareerArgs),
    Prompt(PromptArgs),
    InitConfig(InitConfigArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct ReadingArgs {
    #[arg(long)]
    target_year: Option<u32>,
    #[arg(long)]
    month: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct PersonalArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long)]
    birth_date: String,
    #[command(flatten)]
    reading: ReadingArgs,
}

#[derive(Args, Debug, Clone)]
struct LoveArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long)]
    birth_date: String,
    #[arg(long)]
    partner_first_name: String,
    #[arg(long, default_value = "")]
    partner_last_name: String,
    #[arg(long)]
    partner_birth_date: String,
    #[command(flatten)]
    reading: ReadingArgs,
}

#[derive(Args, Debug, Clone)]
struct WealthArgs {
    #[arg(long)]
    founder_first_name: String,
    #[arg(long, default_value = "")]
    founder_last_name: String,
    #[arg(long)]
    company_name: String,
    #[arg(long)]
    registration_date: String,
    #[command(flatten)]
    reading: ReadingArgs,
}

#[derive(Args, Debug, Clone)]
struct CareerArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long)]
    birth_date: String,
    #[arg(long)]
    company_name: Option<String>,
    #[command(flatten)]
    reading: ReadingArgs,
}

#[derive(Args, Debug, Clone)]
struct PromptArgs {
    /// JSON prompt request; read from stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/kader.toml")]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        return Err("missing command: try `kader-matrisi --help`".to_string());
    };

    if let Command::InitConfig(args) = &command {
        return run_init_config(args);
    }

    let (config, config_path) =
        EngineConfig::load(cli.config).map_err(|err| format!("config error: {}", err))?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::info!(path = %path.display(), "loaded config");
    }

    match command {
        Command::Personal(args) => run_personal(args, &config, cli.json),
        Command::Love(args) => run_love(args, &config, cli.json),
        Command::Wealth(args) => run_wealth(args, &config, cli.json),
        Command::Career(args) => run_career(args, &config, cli.json),
        Command::Prompt(args) => run_prompt(args, &config),
        Command::Serve(args) => server::serve(args, config).await,
        Command::InitConfig(_) => Ok(()),
    }
}

fn run_personal(args: PersonalArgs, config: &EngineConfig, json: bool) -> Result<(), String> {
    let options = reading_options(&args.reading, config)?;
    let person = Person::new(args.first_name, args.last_name, args.birth_date);
    let report = calculate_numerology(&person, &options).map_err(|err| err.to_string())?;
    if json {
        return print_json(&report);
    }
    print_personal(&report);
    Ok(())
}

fn run_love(args: LoveArgs, config: &EngineConfig, json: bool) -> Result<(), String> {
    let options = reading_options(&args.reading, config)?;
    let user = Person::new(args.first_name, args.last_name, args.birth_date);
    let partner = Person::new(
        args.partner_first_name,
        args.partner_last_name,
        args.partner_birth_date,
    );
    let result = calculate_love_compatibility(&user, &partner, &options, &config.love)
        .map_err(|err| err.to_string())?;
    if json {
        return print_json(&result);
    }
    print_love(&result);
    Ok(())
}

fn run_wealth(args: WealthArgs, config: &EngineConfig, json: bool) -> Result<(), String> {
    let options = reading_options(&args.reading, config)?;
    let business = Business {
        founder_first_name: args.founder_first_name,
        founder_last_name: args.founder_last_name,
        company_name: args.company_name,
        registration_date: args.registration_date,
    };
    let result = calculate_wealth_analysis(&business, &options).map_err(|err| err.to_string())?;
    if json {
        return print_json(&result);
    }
    print_wealth(&result);
    Ok(())
}

fn run_career(args: CareerArgs, config: &EngineConfig, json: bool) -> Result<(), String> {
    let options = reading_options(&args.reading, config)?;
    let person = Person::new(args.first_name, args.last_name, args.birth_date);
    let reading = calculate_career_reading(&person, args.company_name.as_deref(), &options)
        .map_err(|err| err.to_string())?;
    if json {
        return print_json(&reading);
    }
    print_career(&reading);
    Ok(())
}

fn run_prompt(args: PromptArgs, config: &EngineConfig) -> Result<(), String> {
    let raw = match args.input {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|err| format!("failed reading {}: {}", path.display(), err))?,
        None => read_stdin()?,
    };
    let request: PromptRequest =
        serde_json::from_str(&raw).map_err(|err| format!("invalid prompt request: {}", err))?;
    let completion = build_completion_request(&request, &config.prompt);
    print_json(&completion)
}

fn run_init_config(args: &InitConfigArgs) -> Result<(), String> {
    if args.path.exists() && !args.force {
        return Err(format!(
            "{} already exists (pass --force to overwrite)",
            args.path.display()
        ));
    }
    EngineConfig::default()
        .write(&args.path)
        .map_err(|err| err.to_string())?;
    println!("Wrote default config to {}", args.path.display());
    Ok(())
}

fn reading_options(args: &ReadingArgs, config: &EngineConfig) -> Result<ReadingOptions, String> {
    let mut options = ReadingOptions::now(config);
    if let Some(year) = args.target_year {
        options.target_year = check_target_year(year).map_err(|err| err.to_string())?;
    }
    if let Some(month) = args.month {
        if !(1..=12).contains(&month) {
            return Err(format!("invalid month (1-12): {}", month));
        }
        options.current_month = month;
    }
    if let Some(seed) = args.seed {
        options.variant_seed = Some(seed);
    }
    Ok(options)
}

fn print_personal(report: &NumerologyReport) {
    let profile = &report.profile;
    println!("{} ({})", report.full_name, report.target_year);
    println!("Expression: {}  [{}]", profile.expression.number, profile.expression.trail);
    println!("Soul urge: {}  [{}]", profile.soul_urge.number, profile.soul_urge.trail);
    println!("Personality: {}  [{}]", profile.personality.number, profile.personality.trail);
    println!("Life path: {}  [{}]", profile.life_path.number, profile.life_path.trail);
    println!(
        "Personal year: {}  [{}]",
        profile.personal_year.number, profile.personal_year.trail
    );

    let sections = [
        ("Expression", &report.interpretations.expression),
        ("Soul urge", &report.interpretations.soul_urge),
        ("Personality", &report.interpretations.personality),
        ("Life path", &report.interpretations.life_path),
        ("Personal year", &report.interpretations.personal_year),
        ("Synthesis", &report.synthesis),
        ("Karmic cycle", &report.karmic_cycle),
        ("Future shadow", &report.future_shadow),
        ("Did you mean?", &report.did_you_mean),
    ];
    for (title, body) in sections {
        println!("\n## {}\n{}", title, body);
    }
}

fn print_love(result: &LoveCompatibilityResult) {
    println!("Overall compatibility: {}%", result.overall_score);
    println!(
        "Soul {} | destiny {} | chemistry {}",
        result.soul_connection, result.destiny_alignment, result.physical_chemistry
    );
    println!(
        "Personal years: {} and {}",
        result.user_personal_year, result.partner_personal_year
    );
    if let Some(warning) = &result.year_cycle_warning {
        println!("{}", warning);
    }
    println!("\nConflicts:");
    for conflict in &result.conflict_analysis {
        println!("- [{:?}] {}: {}", conflict.severity, conflict.title, conflict.description);
    }
    println!("\nSexual resonance: {}", result.sexual_resonance);
    println!("Emotional resonance: {}", result.emotional_resonance);
    println!("\n{}\n\n{}\n\n{}", result.karmic_connection, result.love_forecast, result.challenges);
}

fn print_wealth(result: &WealthAnalysisResult) {
    println!(
        "Company number: {}  [{}]",
        result.company_number, result.calculations.company_name.trail
    );
    println!("Founder expression: {}", result.calculations.founder_expression);
    println!(
        "Registration energy: {}  [{}]",
        result.registration_energy, result.calculations.registration_date.trail
    );
    println!(
        "Status: {:?} - {}",
        result.compatibility_status, result.compatibility_message
    );
    println!(
        "Scores: prosperity {} | money {} | stability {} | growth {}",
        result.scores.prosperity,
        result.scores.money_attraction,
        result.scores.stability,
        result.scores.growth
    );
    println!("\nRisks:");
    for risk in &result.risk_factors {
        println!("- [{:?}] {}: {}", risk.severity, risk.title, risk.description);
    }
    if result.name_change_suggestion.recommended {
        println!("\nName change: {}", result.name_change_suggestion.reason);
        for alternative in &result.name_change_suggestion.alternative_names {
            println!("- {} ({})", alternative.name, alternative.number);
        }
    }
    println!(
        "\n{}\n\n{}",
        result.company_interpretation, result.registration_interpretation
    );
}

fn print_career(reading: &CareerReading) {
    println!(
        "Expression {} | life path {} | personal year {}",
        reading.expression, reading.life_path, reading.personal_year
    );
    if let Some(company) = &reading.company {
        println!("Company number {}: {}", company.number, company.vibration);
    }
    let sections = [
        &reading.wealth_potential,
        &reading.career_path,
        &reading.challenges,
        &reading.opportunities,
        &reading.timing.narrative,
        &reading.future_shadow,
    ];
    for body in sections {
        println!("\n{}", body);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let payload =
        serde_json::to_string_pretty(value).map_err(|err| format!("failed to encode JSON: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing prompt request: pass --input or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
