//! wp - daily workout plan generator
//!
//! CLI entry point: loads config and plan data, then prints plans.

use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use workplan::cli::{Cli, Command, OutputFormat};
use workplan::config::Config;
use workplan::{PlanError, PlanGenerator, Weekday, weather};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN, so stdout stays clean by default
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") | None => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            tracing::Level::WARN
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!(e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn fail(err: &PlanError) -> ! {
    eprintln!("{} {}", "✗".red(), err.to_string().red());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    info!(provider = ?config.weather.provider, "workplan loaded config");

    let gateway = weather::create_gateway(&config.weather).context("Failed to create weather gateway")?;
    let (planner, failures) = PlanGenerator::load(&config.data, config.seed, gateway);
    for failure in &failures {
        warn!(%failure, "Plan data unavailable, continuing with none");
    }

    let command = cli.command.unwrap_or(Command::Plan {
        date: None,
        location: None,
        format: OutputFormat::Text,
    });
    debug!(?command, "main: dispatching command");

    match command {
        Command::Plan { date, location, format } => {
            let location = location.unwrap_or_else(|| config.default_location.clone());
            cmd_plan(&planner, date.unwrap_or_else(today), &location, format).await
        }
        Command::Week { start, location } => {
            let location = location.unwrap_or_else(|| config.default_location.clone());
            cmd_week(&planner, start.unwrap_or_else(today), &location).await
        }
        Command::Roster { weekday } => cmd_roster(&planner, weekday),
        Command::Templates => cmd_templates(&planner),
    }
}

async fn cmd_plan(planner: &PlanGenerator, date: NaiveDate, location: &str, format: OutputFormat) -> Result<()> {
    debug!(%date, %location, ?format, "cmd_plan: called");
    let plan = match planner.generate(date, location).await {
        Ok(plan) => plan,
        Err(e) => fail(&e),
    };
    match format {
        OutputFormat::Text => println!("{}", plan.summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

async fn cmd_week(planner: &PlanGenerator, start: NaiveDate, location: &str) -> Result<()> {
    debug!(%start, %location, "cmd_week: called");
    let plans = match planner.generate_week(start, location).await {
        Ok(plans) => plans,
        Err(e) => fail(&e),
    };
    let end = plans.last().map(|p| p.date.clone()).unwrap_or_default();
    println!("Weekly Overview ({} to {}):\n", start, end);
    for plan in &plans {
        let present = plan.session.as_ref().map(|s| s.present_count()).unwrap_or(0);
        println!(
            "{:10} | {:25} | Attendance: {:2} | Duration: {:3} min | Intensity: {:6}",
            plan.weekday.to_string(),
            plan.template.title,
            present,
            plan.template.duration_minutes,
            plan.template.intensity.to_string()
        );
    }
    Ok(())
}

fn cmd_roster(planner: &PlanGenerator, weekday: Weekday) -> Result<()> {
    debug!(%weekday, "cmd_roster: called");
    let Some(session) = planner.sessions().get_for_weekday(weekday) else {
        println!("No class scheduled on {}", weekday);
        return Ok(());
    };
    let location = session.location.map(|l| l.label()).unwrap_or("no location");
    println!(
        "{} {} ({}, {})",
        session.session_name.cyan(),
        session.time,
        weekday,
        location
    );
    let present = planner.sessions().get_present(weekday);
    if present.is_empty() {
        println!("  No attendees");
    }
    for record in present {
        println!("  {} {}", "✓".green(), record.name);
    }
    Ok(())
}

fn cmd_templates(planner: &PlanGenerator) -> Result<()> {
    debug!("cmd_templates: called");
    let all = planner.templates().get_all();
    if all.is_empty() {
        println!("No routine templates loaded");
        return Ok(());
    }
    for (weekday, template) in all {
        let key = planner.templates().key_for(weekday).unwrap_or("?");
        println!(
            "{:10} [{}] {} - {} min, {}",
            weekday.to_string(),
            key.yellow(),
            template.title,
            template.duration_minutes,
            template.intensity
        );
    }
    Ok(())
}
