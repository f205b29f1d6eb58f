//! Static text views for the Query Assistant.

/// Landing view shown at startup and for /home.
pub const HOME_TEXT: &str = r#"Welcome to IntelliSQL!
Query your database using natural language.

Key features:
  - Natural language to SQL conversion
  - Real-time query execution
  - Tabular results display
  - Local SQLite database support

Getting started:
  1. Type your request in plain English
  2. Review the generated SQL
  3. Run it with /execute
  4. See results instantly

Try asking things like:
  "Show all customers from New York"
  "Create a products table with name, price and category""#;

/// Shown for /about and the `about` subcommand.
pub const ABOUT_TEXT: &str = r#"IntelliSQL turns plain English instructions into SQLite statements
using a large language model, then runs them against a local database file.

Generated SQL is never executed on its own: it is shown first and only runs
when you ask for it. Each statement runs on a fresh connection and is
committed as soon as it succeeds."#;

/// Help text displayed for the /help command.
pub const HELP_TEXT: &str = r#"Type an instruction in plain English to generate SQL.

Commands:
  /execute, /run   - Execute the generated SQL
  /sql <query>     - Use a hand-written statement instead
  /show            - Show the SQL waiting to be executed
  /home            - Show the welcome screen
  /about           - About IntelliSQL
  /help            - Show this help message
  /quit, /exit     - Exit the application"#;
