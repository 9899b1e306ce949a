//! Declarative description of the stored tables.
//!
//! A [`TableSchema`] only ever renders `CREATE ... IF NOT EXISTS` statements,
//! so applying it repeatedly is safe and never touches existing structures.

/// A single column definition.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
    /// Constraints and defaults, e.g. `NOT NULL DEFAULT FALSE`.
    pub constraints: &'static str,
}

/// A named single-table index.
#[derive(Debug, Clone, Copy)]
pub struct Index {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Stored shape of one table.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub indexes: &'static [Index],
}

/// The `items` table.
pub const ITEMS_TABLE: TableSchema = TableSchema {
    name: "items",
    columns: &[
        Column {
            name: "id",
            sql_type: "SERIAL",
            constraints: "PRIMARY KEY",
        },
        Column {
            name: "text",
            sql_type: "VARCHAR",
            constraints: "NOT NULL",
        },
        Column {
            name: "is_done",
            sql_type: "BOOLEAN",
            constraints: "NOT NULL DEFAULT FALSE",
        },
    ],
    indexes: &[
        Index {
            name: "ix_items_id",
            columns: &["id"],
        },
        Index {
            name: "ix_items_text",
            columns: &["text"],
        },
    ],
};

impl TableSchema {
    /// Statements creating the table and its indexes if absent, in execution order.
    pub fn create_statements(&self) -> Vec<String> {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                if c.constraints.is_empty() {
                    format!("{} {}", c.name, c.sql_type)
                } else {
                    format!("{} {} {}", c.name, c.sql_type, c.constraints)
                }
            })
            .collect::<Vec<_>>()
            .join(",\n    ");

        let mut statements = vec![format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name, columns
        )];

        statements.extend(self.indexes.iter().map(|index| {
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                index.name,
                self.name,
                index.columns.join(", ")
            )
        }));

        statements
    }
}
