/// Builds the parameterized statements used by `Repository`. Identifiers are
/// always quoted since every table and column is upper-case.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    table: &'a str,
    id_column: &'a str,
}

/// How a search term is compared against its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// `UPPER(column) LIKE %TERM%`
    CaseInsensitive,
    /// `column LIKE %term%`
    CaseSensitive,
}

impl SearchMode {
    /// LIKE pattern for a raw search term
    pub fn pattern(self, term: &str) -> String {
        match self {
            SearchMode::CaseInsensitive => format!("%{}%", term.to_uppercase()),
            SearchMode::CaseSensitive => format!("%{}%", term),
        }
    }
}

impl<'a> QueryBuilder<'a> {
    pub fn new(table: &'a str, id_column: &'a str) -> Self {
        Self { table, id_column }
    }

    pub fn select_all(&self) -> String {
        format!("SELECT * FROM {}", quote_identifier(self.table))
    }

    pub fn select_by_id(&self) -> String {
        format!("{} WHERE {} = $1", self.select_all(), quote_identifier(self.id_column))
    }

    pub fn search(&self, column: &str, mode: SearchMode) -> String {
        let column = quote_identifier(column);
        let lhs = match mode {
            SearchMode::CaseInsensitive => format!("UPPER({})", column),
            SearchMode::CaseSensitive => column,
        };
        format!("{} WHERE {} LIKE $1", self.select_all(), lhs)
    }

    pub fn insert(&self, columns: &[&str]) -> String {
        let names: Vec<String> = columns.iter().map(|c| quote_identifier(c)).collect();
        let params: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            quote_identifier(self.table),
            names.join(", "),
            params.join(", ")
        )
    }

    /// The id is bound last, after every column value.
    pub fn update(&self, columns: &[&str]) -> String {
        let assignments: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ${}", quote_identifier(c), i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
            quote_identifier(self.table),
            assignments.join(", "),
            quote_identifier(self.id_column),
            columns.len() + 1
        )
    }

    pub fn delete(&self) -> String {
        format!(
            "DELETE FROM {} WHERE {} = $1",
            quote_identifier(self.table),
            quote_identifier(self.id_column)
        )
    }
}

/// Quote SQL identifier to prevent injection
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
