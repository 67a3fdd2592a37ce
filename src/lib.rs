//! qmark-dao：方言感知的 SQL 语句构建与 `%(name)s` → qmark 位置参数改写库。
//!
//! 面向只接受位置参数绑定（`?`）的驱动：上层以命名占位符书写语句与
//! 动态过滤条件，本 crate 确定性地改写为位置参数语句加有序值序列，
//! 并可经由 [`Driver`] 契约直接执行。
//!
//! 数据流：[`StatementBuilder`] / [`build_where`] → 命名占位符模板 →
//! [`translate`]（给定实际值）→ 位置参数语句 + 有序值序列 → 驱动执行。

pub mod dao;
pub mod dialect;
pub mod driver;
pub mod macros;
pub use crate::macros::*;
pub mod row;
pub mod statement;
#[cfg(test)]
mod statement_tests;
pub mod string_builder;
pub mod translate;
pub mod value;
pub mod where_clause;
#[cfg(test)]
mod where_clause_tests;

pub use crate::dao::{Dao, DaoError, PrimaryKey};
pub use crate::dialect::{
    Dialect, default_dialect, set_default_dialect, set_default_dialect_scoped,
};
pub use crate::driver::{Driver, DriverError, QueryResult};
pub use crate::row::{Payload, Row};
pub use crate::statement::{BuildError, StatementBuilder};
pub use crate::translate::{
    BatchStatement, BoundParams, BoundStatement, TranslateError, translate, translate_batch,
};
pub use crate::value::SqlValue;
pub use crate::where_clause::{
    Condition, ConditionValue, LogicalOp, WhereClause, build_where, build_where_with_dialect,
};
