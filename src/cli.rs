//! Command-line argument parsing for IntelliSQL.

use clap::{Parser, Subcommand};
use intellisql::config::Config;
use std::path::PathBuf;

/// Query a SQLite database in plain English.
#[derive(Parser, Debug)]
#[command(name = "intellisql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database file (created if missing)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// LLM provider: gemini, openai, ollama or mock
    #[arg(long, global = true, value_name = "PROVIDER")]
    pub llm: Option<String>,

    /// Model name for the selected provider
    #[arg(long, global = true, value_name = "NAME")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What to do once configuration is resolved.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive Query Assistant (default)
    Assistant,

    /// Translate an instruction into SQL and print it
    Generate {
        /// Instruction in plain English
        #[arg(required = true, num_args = 1..)]
        instruction: Vec<String>,
    },

    /// Execute a SQL statement and print the result
    Execute {
        /// SQL statement, passed verbatim to SQLite
        sql: String,
    },

    /// Translate an instruction, print the SQL, and optionally run it
    Ask {
        /// Instruction in plain English
        #[arg(required = true, num_args = 1..)]
        instruction: Vec<String>,

        /// Execute the generated SQL
        #[arg(short = 'x', long)]
        execute: bool,
    },

    /// Show information about IntelliSQL
    About,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the subcommand, defaulting to the interactive assistant.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Assistant)
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Applies command-line overrides on top of the loaded file config.
    ///
    /// Switching provider without naming a model drops the file's model,
    /// since it belongs to the other provider.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(db) = &self.db {
            config.database.path = db.clone();
        }

        if let Some(llm) = &self.llm {
            if !llm.eq_ignore_ascii_case(&config.llm.provider) && self.model.is_none() {
                config.llm.model = None;
            }
            config.llm.provider = llm.to_lowercase();
        }

        if let Some(model) = &self.model {
            config.llm.model = Some(model.clone());
        }
    }
}

/// Joins instruction words given as separate arguments.
pub fn join_instruction(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_default_command_is_assistant() {
        let cli = parse_args(&["intellisql"]);
        assert_eq!(cli.command(), Command::Assistant);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = parse_args(&[
            "intellisql",
            "--db",
            "school.db",
            "--llm",
            "ollama",
            "--model",
            "llama3.2:3b",
            "--config",
            "/path/to/config.toml",
        ]);

        assert_eq!(cli.db, Some(PathBuf::from("school.db")));
        assert_eq!(cli.llm, Some("ollama".to_string()));
        assert_eq!(cli.model, Some("llama3.2:3b".to_string()));
        assert_eq!(cli.config_path(), PathBuf::from("/path/to/config.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse_args(&["intellisql", "execute", "SELECT 1", "--db", "x.db"]);

        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        assert_eq!(
            cli.command(),
            Command::Execute {
                sql: "SELECT 1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_generate_words() {
        let cli = parse_args(&["intellisql", "generate", "show", "all", "students"]);

        match cli.command() {
            Command::Generate { instruction } => {
                assert_eq!(join_instruction(&instruction), "show all students");
            }
            other => panic!("Expected Generate, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_requires_instruction() {
        assert!(Cli::try_parse_from(["intellisql", "generate"]).is_err());
    }

    #[test]
    fn test_parse_ask_with_execute() {
        let cli = parse_args(&["intellisql", "ask", "--execute", "count", "students"]);

        assert_eq!(
            cli.command(),
            Command::Ask {
                instruction: vec!["count".to_string(), "students".to_string()],
                execute: true,
            }
        );
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        config.llm.model = Some("gemini-1.5-pro".to_string());

        let cli = parse_args(&["intellisql", "--db", "other.db", "--llm", "OpenAI"]);
        cli.apply_overrides(&mut config);

        assert_eq!(config.database.path, PathBuf::from("other.db"));
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, None);
    }

    #[test]
    fn test_apply_overrides_keeps_model_for_same_provider() {
        let mut config = Config::default();
        config.llm.model = Some("gemini-1.5-pro".to_string());

        let cli = parse_args(&["intellisql", "--llm", "gemini"]);
        cli.apply_overrides(&mut config);

        assert_eq!(config.llm.model, Some("gemini-1.5-pro".to_string()));
    }

    #[test]
    fn test_apply_overrides_model() {
        let mut config = Config::default();

        let cli = parse_args(&["intellisql", "--llm", "mock", "--model", "canned"]);
        cli.apply_overrides(&mut config);

        assert_eq!(config.llm.provider, "mock");
        assert_eq!(config.llm.model, Some("canned".to_string()));
    }
}
