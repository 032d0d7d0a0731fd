mod cli;

use registrar::{
    config::{self, Config},
    report::{self, OutputFormat},
    routine,
};
use registrar_db::seed::sample_dataset;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "registrar=debug,registrar_db=debug".to_string()
        } else {
            "registrar=info,registrar_db=info".to_string()
        }
    });

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => run(&cli, OutputFormat::Text),
        Some(Commands::Run { json }) => run(&cli, format(json)),
        Some(Commands::Report { json }) => report(&cli, format(json)),
        Some(Commands::Verify) => verify(&cli),
        Some(Commands::Validate { ref file }) => {
            let path = file.as_deref().or(cli.config.as_deref());
            validate_config(path)
        }
        Some(Commands::Version) => {
            println!("registrar {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

/// Load config and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = config::load_config_or_default(cli.config.as_deref())?;

    if let Some(ref path) = cli.database {
        config.database.path = path.clone();
        config.database.in_memory = false;
    }
    if cli.in_memory {
        config.database.in_memory = true;
    }

    config::validate_config(&config)?;
    Ok(config)
}

fn run(cli: &Cli, format: OutputFormat) -> Result<()> {
    let config = load_config(cli)?;

    tracing::info!("Seeding {}", routine::describe_target(&config));
    let conn = routine::open_database(&config)?;

    let stdout = std::io::stdout();
    let summary = routine::seed_and_report(&conn, &sample_dataset(), format, &mut stdout.lock())?;

    tracing::info!("Reported {} rows", summary.rows_reported);
    Ok(())
}

fn report(cli: &Cli, format: OutputFormat) -> Result<()> {
    let config = load_config(cli)?;

    tracing::info!("Reading {}", routine::describe_target(&config));
    let conn = routine::open_database(&config)?;

    let stdout = std::io::stdout();
    let rows = routine::report(&conn, format, &mut stdout.lock())?;

    tracing::debug!("Reported {} rows", rows);
    Ok(())
}

fn verify(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let conn = routine::open_database(&config)?;

    let verification = routine::verify(&conn, &sample_dataset())?;
    let (expected, actual) = (verification.expected, verification.actual);

    println!("Checking {}\n", routine::describe_target(&config));
    for (table, expected, actual) in [
        ("Student", expected.students, actual.students),
        ("Course", expected.courses, actual.courses),
        ("Registration", expected.registrations, actual.registrations),
    ] {
        let status = if expected == actual { "✓" } else { "✗" };
        println!("{} {}: {} rows (expected {})", status, table, actual, expected);
    }

    if verification.orphans.is_empty() {
        println!("✓ All registrations reference existing courses and students");
    } else {
        for orphan in &verification.orphans {
            println!(
                "✗ Registration {} references missing course {} or student {}",
                orphan.id,
                report::or_null(&orphan.course_id),
                report::or_null(&orphan.student_id)
            );
        }
    }

    if !verification.is_ok() {
        anyhow::bail!("Database does not match the sample dataset");
    }

    println!("\nDatabase matches the sample dataset");
    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Database: {}", routine::describe_target(&config));
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            println!("Default config:");
            println!("  Database: {}", routine::describe_target(&config));
        }
    }

    Ok(())
}
