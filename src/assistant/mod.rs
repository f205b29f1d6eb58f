//! Interactive Query Assistant session.
//!
//! Plain text is translated into SQL, which is held as the pending statement
//! until the user asks for it to be executed. Slash commands drive everything
//! else. The session never prints; it returns [`AssistantOutput`] values.

mod output;
mod views;

pub use output::{render_table, AssistantOutput};
pub use views::{ABOUT_TEXT, HELP_TEXT, HOME_TEXT};

use tracing::{debug, info};

use crate::llm::Translator;
use crate::query::{ExecutionResult, QueryExecutor};

/// Shown after a SELECT completes, with or without rows.
pub const QUERY_SUCCESS_MESSAGE: &str = "Query executed successfully!";

/// One parsed line of assistant input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantCommand {
    /// Blank input.
    Empty,
    /// Natural-language instruction to translate.
    Generate(String),
    /// Run the pending statement.
    Execute,
    /// Replace the pending statement with hand-written SQL.
    Sql(String),
    /// Show the pending statement.
    Show,
    Home,
    About,
    Help,
    Quit,
    /// Unrecognized slash command.
    Unknown(String),
}

impl AssistantCommand {
    /// Parses one line of input.
    ///
    /// An instruction is passed through exactly as typed; trimming only
    /// decides whether the line is blank or a command.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Generate(input.to_string());
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name.to_lowercase().as_str() {
            "execute" | "run" => Self::Execute,
            "sql" => Self::Sql(args.to_string()),
            "show" => Self::Show,
            "home" => Self::Home,
            "about" => Self::About,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// Converts an execution result into assistant output.
///
/// A SELECT always reports success; the table follows only when rows came
/// back.
pub fn execution_outputs(result: ExecutionResult) -> Vec<AssistantOutput> {
    match result {
        ExecutionResult::Rows { data, columns } => {
            let mut outputs = vec![AssistantOutput::success(QUERY_SUCCESS_MESSAGE)];
            if !data.is_empty() {
                outputs.push(AssistantOutput::Table {
                    columns,
                    rows: data,
                });
            }
            outputs
        }
        ExecutionResult::Status { message } => vec![AssistantOutput::success(message)],
        ExecutionResult::Failure { message } => vec![AssistantOutput::error(message)],
    }
}

/// A Query Assistant session.
pub struct QueryAssistant {
    translator: Translator,
    executor: QueryExecutor,
    pending_sql: Option<String>,
}

impl QueryAssistant {
    /// Creates a session with nothing pending.
    pub fn new(translator: Translator, executor: QueryExecutor) -> Self {
        Self {
            translator,
            executor,
            pending_sql: None,
        }
    }

    /// The statement that /execute would run.
    pub fn pending_sql(&self) -> Option<&str> {
        self.pending_sql.as_deref()
    }

    /// Handles one line of input.
    pub async fn handle_input(&mut self, input: &str) -> Vec<AssistantOutput> {
        let command = AssistantCommand::parse(input);
        debug!("Assistant command: {:?}", command);

        match command {
            AssistantCommand::Empty => vec![],
            AssistantCommand::Generate(instruction) => self.generate(&instruction).await,
            AssistantCommand::Execute => self.execute_pending().await,
            AssistantCommand::Sql(sql) if sql.is_empty() => {
                vec![AssistantOutput::error("Usage: /sql <query>")]
            }
            AssistantCommand::Sql(sql) => {
                self.pending_sql = Some(sql.clone());
                vec![
                    AssistantOutput::Sql(sql),
                    AssistantOutput::info("Type /execute to run it."),
                ]
            }
            AssistantCommand::Show => match &self.pending_sql {
                Some(sql) => vec![AssistantOutput::Sql(sql.clone())],
                None => vec![AssistantOutput::info("No SQL generated yet.")],
            },
            AssistantCommand::Home => vec![AssistantOutput::info(HOME_TEXT)],
            AssistantCommand::About => vec![AssistantOutput::info(ABOUT_TEXT)],
            AssistantCommand::Help => vec![AssistantOutput::info(HELP_TEXT)],
            AssistantCommand::Quit => vec![AssistantOutput::Exit],
            AssistantCommand::Unknown(name) => vec![AssistantOutput::error(format!(
                "Unknown command: /{name}. Type /help for available commands."
            ))],
        }
    }

    async fn generate(&mut self, instruction: &str) -> Vec<AssistantOutput> {
        info!("Generating SQL");
        match self.translator.translate(instruction).await {
            Ok(sql) => {
                self.pending_sql = Some(sql.clone());
                vec![
                    AssistantOutput::Sql(sql),
                    AssistantOutput::info("Type /execute to run it."),
                ]
            }
            Err(e) => {
                self.pending_sql = None;
                vec![AssistantOutput::error(format!(
                    "Failed to generate SQL: {}",
                    e.message()
                ))]
            }
        }
    }

    async fn execute_pending(&self) -> Vec<AssistantOutput> {
        let Some(sql) = &self.pending_sql else {
            return vec![AssistantOutput::error(
                "Nothing to execute. Type an instruction to generate SQL first.",
            )];
        };

        info!("Executing pending SQL");
        execution_outputs(self.executor.execute(sql).await)
    }
}

impl std::fmt::Debug for QueryAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryAssistant")
            .field("executor", &self.executor)
            .field("pending_sql", &self.pending_sql)
            .finish_non_exhaustive()
    }
}
