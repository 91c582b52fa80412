//! Command-line front end over the student repository.
//!
//! # Responsibility
//! - Load connection settings and run one repository operation per invocation.
//! - Print results in a stable, script-friendly form.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use student_core::db::{init_schema, open_connection};
use student_core::{
    default_log_level, init_logging, DaoError, DbConfig, SqliteStudentRepository, Student,
    StudentId, StudentRepository,
};

#[derive(Parser)]
#[command(name = "student-cli")]
#[command(about = "Insert, fetch, update and delete student records", version)]
struct Cli {
    /// TOML file with a `[db]` table (url, username, password)
    #[arg(long, env = "STUDENT_DB_CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

// Ids may be negative, so `-5` must parse as a value rather than a flag.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Create the students table if it does not exist
    Init,
    /// Insert a new student row
    Insert {
        #[arg(allow_negative_numbers = true)]
        id: StudentId,
        first_name: String,
        last_name: String,
    },
    /// Print the student stored under an id
    Fetch {
        #[arg(allow_negative_numbers = true)]
        id: StudentId,
    },
    /// Delete the student stored under an id
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: StudentId,
    },
    /// Overwrite a student's first name
    UpdateFirstName {
        #[arg(allow_negative_numbers = true)]
        id: StudentId,
        first_name: String,
    },
    /// Overwrite a student's last name
    UpdateLastName {
        #[arg(allow_negative_numbers = true)]
        id: StudentId,
        last_name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let config = DbConfig::load(&cli.config)
        .with_context(|| format!("failed to load config `{}`", cli.config.display()))?;

    let repo = SqliteStudentRepository::new(config);
    match cli.command {
        Commands::Init => {
            let conn = open_connection(repo.config())?;
            init_schema(&conn).context("failed to create students table")?;
            println!("ok");
        }
        Commands::Insert {
            id,
            first_name,
            last_name,
        } => {
            let student = Student::new(id, first_name, last_name);
            println!("{}", repo.insert_student(Some(&student))?);
        }
        Commands::Fetch { id } => match repo.fetch_student(id) {
            Ok(student) => println!("{student}"),
            Err(DaoError::NotFound(_)) => anyhow::bail!("student {id} not found"),
            Err(err) => return Err(err).context("fetch failed"),
        },
        Commands::Delete { id } => println!("{}", repo.delete_student(id)?),
        Commands::UpdateFirstName { id, first_name } => {
            println!("{}", repo.update_student_first_name(id, &first_name)?);
        }
        Commands::UpdateLastName { id, last_name } => {
            println!("{}", repo.update_student_last_name(id, &last_name)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> Commands {
        let argv = std::iter::once("student-cli").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn negative_ids_parse_as_values() {
        assert_eq!(parse(&["fetch", "-5"]), Commands::Fetch { id: -5 });
        assert_eq!(parse(&["delete", "-5"]), Commands::Delete { id: -5 });
        assert_eq!(
            parse(&["insert", "-5", "Navya", "Bade"]),
            Commands::Insert {
                id: -5,
                first_name: "Navya".to_string(),
                last_name: "Bade".to_string(),
            }
        );
        assert_eq!(
            parse(&["update-first-name", "-6", "Teja"]),
            Commands::UpdateFirstName {
                id: -6,
                first_name: "Teja".to_string(),
            }
        );
        assert_eq!(
            parse(&["update-last-name", "-6", "Badeeeee"]),
            Commands::UpdateLastName {
                id: -6,
                last_name: "Badeeeee".to_string(),
            }
        );
    }

    #[test]
    fn global_options_and_positive_ids_parse() {
        let cli = Cli::try_parse_from([
            "student-cli",
            "--config",
            "/etc/students.toml",
            "--log-level",
            "warn",
            "fetch",
            "1026",
        ])
        .unwrap();

        assert_eq!(cli.config.to_str(), Some("/etc/students.toml"));
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
        assert_eq!(cli.command, Commands::Fetch { id: 1026 });
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let argv = ["student-cli", "fetch", "abc"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
