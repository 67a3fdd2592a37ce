//! 按表生成 INSERT / UPDATE / DELETE / SELECT * 语句模板。
//!
//! 模板使用 `%(列名)s` 命名占位符，标识符按方言加引用符；实际值绑定
//! 交给 [`translate`](crate::translate::translate)。

use crate::dialect::{Dialect, default_dialect};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::string_builder::StringBuilder;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    /// INSERT/UPDATE 需要至少一列。
    #[error("{verb} requires at least one column")]
    EmptyColumns { verb: &'static str },
}

/// 面向单张表的语句模板构建器。
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    table: String,
    dialect: Dialect,
}

impl StatementBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self::with_dialect(table, default_dialect())
    }

    pub fn with_dialect(table: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            table: table.into(),
            dialect,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// `INSERT INTO "t" ("a", "b") VALUES (%(a)s, %(b)s)`，按列序一列一个占位符。
    ///
    /// 批量时以首行列集为准（全部行同列集是调用方前置条件）。
    pub fn insert<T: IntoStrings>(&self, columns: T) -> Result<String, BuildError> {
        let columns = collect_into_strings(columns);
        if columns.is_empty() {
            return Err(BuildError::EmptyColumns { verb: "insert" });
        }

        let mut buf = StringBuilder::new();
        buf.write_str("INSERT INTO ");
        buf.write_str(&self.dialect.quote(&self.table));
        buf.write_str(" (");
        let quoted: Vec<String> = columns.iter().map(|c| self.dialect.quote(c)).collect();
        buf.write_strings(&quoted, ", ");
        buf.write_str(") VALUES (");
        let placeholders: Vec<String> = columns.iter().map(|c| format!("%({c})s")).collect();
        buf.write_strings(&placeholders, ", ");
        buf.write_char(')');
        Ok(buf.into_string())
    }

    /// `UPDATE "t" SET "a" = %(a)s, "b" = %(b)s`。
    pub fn update<T: IntoStrings>(&self, columns: T) -> Result<String, BuildError> {
        let columns = collect_into_strings(columns);
        if columns.is_empty() {
            return Err(BuildError::EmptyColumns { verb: "update" });
        }

        let mut buf = StringBuilder::new();
        buf.write_str("UPDATE ");
        buf.write_str(&self.dialect.quote(&self.table));
        buf.write_str(" SET ");
        let assignments: Vec<String> = columns
            .iter()
            .map(|c| format!("{} = %({c})s", self.dialect.quote(c)))
            .collect();
        buf.write_strings(&assignments, ", ");
        Ok(buf.into_string())
    }

    /// `DELETE FROM "t"`，不带尾随子句（WHERE 由调用方追加）。
    pub fn delete(&self) -> String {
        format!("DELETE FROM {}", self.dialect.quote(&self.table))
    }

    /// `SELECT * FROM "t"`。
    pub fn select_all(&self) -> String {
        format!("SELECT * FROM {}", self.dialect.quote(&self.table))
    }
}
