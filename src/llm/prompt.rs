//! Prompt construction for translation requests.
//!
//! The prompt is a fixed few-shot template: a role instruction, two worked
//! examples, and the user's instruction as the final unanswered example.

/// Placeholder replaced with the user's instruction.
const INSTRUCTION_PLACEHOLDER: &str = "{instruction}";

/// Few-shot template for English-to-SQL translation.
const PROMPT_TEMPLATE: &str = r#"You are an expert in SQL. Convert the user's English instruction into a correct SQLite SQL statement.
The response must contain only the SQL code without any extra comments, markdown, or explanation.

Examples:
Q: Show all students.
A: SELECT * FROM STUDENTS;

Q: Create a table named EMPLOYEE with name, age and salary.
A: CREATE TABLE EMPLOYEE (Name TEXT, Age INTEGER, Salary REAL);

Now convert this:
Q: {instruction}
A:"#;

/// Builds the complete prompt for a single instruction.
///
/// The instruction is embedded verbatim; only this slot varies between calls.
pub fn build_prompt(instruction: &str) -> String {
    PROMPT_TEMPLATE.replace(INSTRUCTION_PLACEHOLDER, instruction)
}

/// Extracts the instruction from a prompt built by [`build_prompt`].
///
/// Returns the text between the final `Q:` marker and the trailing `A:`.
pub fn extract_instruction(prompt: &str) -> Option<&str> {
    let start = prompt.rfind("\nQ: ")? + "\nQ: ".len();
    let end = prompt.rfind("\nA:")?;
    (start <= end).then(|| &prompt[start..end])
}
