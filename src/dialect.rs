//! Database-specific syntax rules consumed by the renderer.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for the parameter at `index` (zero-based).
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn placeholder(&self, index: usize) -> String;

    /// Returns the column modifier that makes an integer column
    /// auto-incrementing.
    fn auto_increment(&self) -> &str;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident)
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn auto_increment(&self) -> &str {
        "GENERATED BY DEFAULT AS IDENTITY"
    }

    fn name(&self) -> &str {
        "PostgreSQL"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident)
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn auto_increment(&self) -> &str {
        "AUTO_INCREMENT"
    }

    fn name(&self) -> &str {
        "MySQL"
    }
}
