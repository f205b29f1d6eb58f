//! IntelliSQL - query a SQLite database in plain English.

mod cli;

use cli::{join_instruction, Cli, Command};
use intellisql::assistant::{
    execution_outputs, AssistantCommand, AssistantOutput, QueryAssistant, ABOUT_TEXT, HOME_TEXT,
};
use intellisql::config::Config;
use intellisql::error::{IntelliSqlError, Result};
use intellisql::llm::Translator;
use intellisql::logging::{self, LogTarget};
use intellisql::query::QueryExecutor;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

const PROMPT: &str = "intellisql> ";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let command = cli.command();

    let target = log_target(&command);
    if let Some(path) = logging::init(target) {
        info!("Logging to {}", path.display());
    }

    if let Err(e) = run(&cli, command).await {
        report_error(target, &e);
        std::process::exit(1);
    }
}

fn log_target(command: &Command) -> LogTarget {
    match command {
        Command::Assistant => LogTarget::File,
        _ => LogTarget::Stderr,
    }
}

/// Shows a fatal error on stderr once, and in the log file when there is one.
fn report_error(target: LogTarget, e: &IntelliSqlError) {
    if target.is_file() {
        error!("{}: {}", e.category(), e);
    }
    eprintln!("{e}");
}

async fn run(cli: &Cli, command: Command) -> Result<()> {
    if command == Command::About {
        println!("{ABOUT_TEXT}");
        return Ok(());
    }

    let config = resolve_config(cli)?;
    info!(
        "Database: {}, provider: {}",
        config.database.path.display(),
        config.llm.provider
    );

    let executor = QueryExecutor::new(&config.database);

    match command {
        Command::Execute { sql } => report(execution_outputs(executor.execute(&sql).await)),
        Command::Generate { instruction } => {
            let translator = Translator::from_config(&config.llm)?;
            let sql = translator.translate(&join_instruction(&instruction)).await?;
            println!("{sql}");
            Ok(())
        }
        Command::Ask {
            instruction,
            execute,
        } => {
            let translator = Translator::from_config(&config.llm)?;
            let sql = translator.translate(&join_instruction(&instruction)).await?;
            println!("{}", AssistantOutput::Sql(sql.clone()).render());
            if execute {
                report(execution_outputs(executor.execute(&sql).await))?;
            }
            Ok(())
        }
        Command::Assistant | Command::About => {
            let translator = Translator::from_config(&config.llm)?;
            run_assistant(QueryAssistant::new(translator, executor)).await
        }
    }
}

/// Builds the effective configuration.
///
/// Precedence, highest first: command line, config file, environment,
/// built-in defaults.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());

    let mut config = Config::load_from_file(&config_path)?;
    cli.apply_overrides(&mut config);
    config.llm.apply_env_defaults();

    Ok(config)
}

/// Prints one-shot outputs, failing if any of them is an error.
fn report(outputs: Vec<AssistantOutput>) -> Result<()> {
    let mut failure = None;
    for output in outputs {
        match output {
            AssistantOutput::Error(msg) => failure = Some(msg),
            other => println!("{}", other.render()),
        }
    }

    match failure {
        Some(msg) => Err(IntelliSqlError::execution(
            msg.strip_prefix("Error: ").unwrap_or(&msg),
        )),
        None => Ok(()),
    }
}

async fn run_assistant(mut assistant: QueryAssistant) -> Result<()> {
    println!("{HOME_TEXT}\n");
    println!("Type /help for commands.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{PROMPT}");
        std::io::stdout()
            .flush()
            .map_err(|e| IntelliSqlError::internal(format!("Failed to write prompt: {e}")))?;

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| IntelliSqlError::internal(format!("Failed to read input: {e}")))?
        else {
            // EOF
            println!();
            return Ok(());
        };

        if matches!(AssistantCommand::parse(&line), AssistantCommand::Generate(_)) {
            println!("Generating SQL...");
        }

        for output in assistant.handle_input(&line).await {
            match output {
                AssistantOutput::Exit => return Ok(()),
                AssistantOutput::Error(_) => eprintln!("{}\n", output.render()),
                other => println!("{}\n", other.render()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_assistant_logs_to_a_file() {
        assert_eq!(log_target(&Command::Assistant), LogTarget::File);
        assert_eq!(log_target(&Command::About), LogTarget::Stderr);
        assert_eq!(
            log_target(&Command::Execute {
                sql: "SELECT 1".to_string()
            }),
            LogTarget::Stderr
        );
    }
}
