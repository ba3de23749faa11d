//! Escaping and pre-dispatch validation
//!
//! User-supplied values reach the database as bound parameters wherever
//! possible; the helpers here cover the two remaining gaps. `quote_literal`
//! makes the inline preview rendering safe against embedded quotes, and
//! `validate_single_statement` rejects text that smuggles a second statement
//! past the single-statement contract with the execution engine.

use crate::error::{QueryError, QueryResult};

/// Quote a string value as a SQL literal, doubling embedded single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Reject statement text containing more than one statement.
///
/// Called on the parameterized rendering, where values live in the bound
/// parameter list and the text itself only carries identifiers and
/// placeholders, so a semicolon anywhere but the tail is never legitimate.
pub fn validate_single_statement(sql: &str) -> QueryResult<()> {
    let trimmed = sql.trim_end();
    for (index, _) in trimmed.match_indices(';') {
        if index != trimmed.len() - 1 {
            return Err(QueryError::Validation(
                "multiple SQL statements are not allowed".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_literal_doubles_embedded_quotes() {
        assert_eq!(quote_literal("admin"), "'admin'");
        assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
        assert_eq!(quote_literal("'; DROP TABLE users; --"), "'''; DROP TABLE users; --'");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn single_statement_passes() {
        assert!(validate_single_statement("SELECT *\nFROM users").is_ok());
        assert!(validate_single_statement("SELECT 1;").is_ok());
        assert!(validate_single_statement("").is_ok());
    }

    #[test]
    fn embedded_statement_is_rejected() {
        assert!(validate_single_statement("SELECT 1; DROP TABLE users").is_err());
        assert!(validate_single_statement("SELECT 1; SELECT 2;").is_err());
    }
}
