//! 动态 WHERE 子句合成：IN 列表展开、空值省略、别名去重。
//!
//! 条件按给定顺序与各自的连接词从左到右组合，不做重排或优先级推断。
//! 产出的模板使用 `%(name)s` 命名占位符，随后交给
//! [`translate`](crate::translate::translate) 绑定实际值。

use crate::dialect::{Dialect, default_dialect};
use crate::row::Row;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 条件之间的逻辑连接词。`None` 仅允许出现在第一个条件上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicalOp {
    #[default]
    None,
    And,
    Or,
}

impl LogicalOp {
    fn token(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::And => Some("AND"),
            Self::Or => Some("OR"),
        }
    }
}

/// 条件值：单值（含 NULL）或列表。
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    Single(SqlValue),
    List(Vec<SqlValue>),
}

impl ConditionValue {
    pub fn null() -> Self {
        Self::Single(SqlValue::Null)
    }
}

impl From<SqlValue> for ConditionValue {
    fn from(v: SqlValue) -> Self {
        Self::Single(v)
    }
}

impl From<bool> for ConditionValue {
    fn from(v: bool) -> Self {
        Self::Single(v.into())
    }
}

impl From<i32> for ConditionValue {
    fn from(v: i32) -> Self {
        Self::Single(v.into())
    }
}

impl From<i64> for ConditionValue {
    fn from(v: i64) -> Self {
        Self::Single(v.into())
    }
}

impl From<u64> for ConditionValue {
    fn from(v: u64) -> Self {
        Self::Single(v.into())
    }
}

impl From<f64> for ConditionValue {
    fn from(v: f64) -> Self {
        Self::Single(v.into())
    }
}

impl From<&'static str> for ConditionValue {
    fn from(v: &'static str) -> Self {
        Self::Single(v.into())
    }
}

impl From<String> for ConditionValue {
    fn from(v: String) -> Self {
        Self::Single(v.into())
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for ConditionValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for ConditionValue {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// WHERE 子句中的一个谓词。
///
/// `comparison_op` 原样进入模板：NULL 值条件应把空值语义写进算子本身
/// （例如 `IS NULL`）；列表值条件的算子会被强制为 `IN`，除非显式给出
/// `NOT IN`。
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub param_name: String,
    pub logical_op: LogicalOp,
    pub comparison_op: String,
    pub value: ConditionValue,
}

impl Condition {
    pub fn new(
        param_name: impl Into<String>,
        logical_op: LogicalOp,
        comparison_op: impl Into<String>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            param_name: param_name.into(),
            logical_op,
            comparison_op: comparison_op.into(),
            value: value.into(),
        }
    }

    /// 首条件：无前置连接词。
    pub fn first(
        param_name: impl Into<String>,
        comparison_op: impl Into<String>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self::new(param_name, LogicalOp::None, comparison_op, value)
    }

    pub fn and(
        param_name: impl Into<String>,
        comparison_op: impl Into<String>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self::new(param_name, LogicalOp::And, comparison_op, value)
    }

    pub fn or(
        param_name: impl Into<String>,
        comparison_op: impl Into<String>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self::new(param_name, LogicalOp::Or, comparison_op, value)
    }
}

/// 合成结果：`WHERE ...` 模板与其引入的命名参数（按出现顺序）。
///
/// `params` 的键即模板中的占位符名：标量条件为 `param_<列名>`，列表
/// 条件为合成别名 `param_<列名>_<k>`。把它原样交给翻译即可完成绑定。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub params: Row,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// 按全局默认方言合成 WHERE 子句。
pub fn build_where(conditions: &[Condition]) -> WhereClause {
    build_where_with_dialect(default_dialect(), conditions)
}

/// 合成 WHERE 子句（指定方言）。
///
/// 空条件列表产出空子句（调用方不追加任何内容）。别名唯一性簿记
/// 仅存在于本次调用内部，重复调用产出逐字节相同的结果。
pub fn build_where_with_dialect(dialect: Dialect, conditions: &[Condition]) -> WhereClause {
    if conditions.is_empty() {
        return WhereClause::default();
    }

    let mut buf = StringBuilder::new();
    buf.write_str("WHERE");
    let mut params = Row::new();

    for cond in conditions {
        if let Some(token) = cond.logical_op.token() {
            buf.write_char(' ');
            buf.write_str(token);
        }

        match &cond.value {
            ConditionValue::List(values) if values.is_empty() => {
                // 空列表退化为恒真片段，保持相邻连接词语法有效
                buf.write_str(" 1 = 1");
            }
            ConditionValue::List(values) => {
                let op = if cond.comparison_op == "NOT IN" {
                    "NOT IN"
                } else {
                    "IN"
                };
                buf.write_char(' ');
                buf.write_str(&dialect.quote(&cond.param_name));
                buf.write_char(' ');
                buf.write_str(op);
                buf.write_str(" (");

                // 同列多个 IN 条件时别名在整个子句内续编，不重新从 0 起
                let mut next = 0usize;
                while params.contains(&format!("param_{}_{}", cond.param_name, next)) {
                    next += 1;
                }
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        buf.write_str(", ");
                    }
                    let alias = format!("param_{}_{}", cond.param_name, next + i);
                    buf.write_str("%(");
                    buf.write_str(&alias);
                    buf.write_str(")s");
                    params.insert(alias, value.clone());
                }
                buf.write_char(')');
            }
            ConditionValue::Single(SqlValue::Null) => {
                // 空值语义由算子本身承载（如 IS NULL），不产生占位符与绑定
                buf.write_char(' ');
                buf.write_str(&dialect.quote(&cond.param_name));
                buf.write_char(' ');
                buf.write_str(&cond.comparison_op);
            }
            ConditionValue::Single(value) => {
                let alias = format!("param_{}", cond.param_name);
                buf.write_char(' ');
                buf.write_str(&dialect.quote(&cond.param_name));
                buf.write_char(' ');
                buf.write_str(&cond.comparison_op);
                buf.write_str(" %(");
                buf.write_str(&alias);
                buf.write_str(")s");
                params.insert(alias, value.clone());
            }
        }
    }

    WhereClause {
        sql: buf.into_string(),
        params,
    }
}
