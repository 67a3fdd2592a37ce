//! 把 `%(name)s` 命名占位符改写为 qmark（`?`）位置参数。
//!
//! 上层以命名占位符书写语句模板，驱动只接受位置参数；本模块从左到右
//! 扫描模板，把每个占位符替换为 `?`，同时按出现顺序从命名值源取值，
//! 保证第 i 个 `?` 对应输出序列的第 i 个值。

use crate::row::Row;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranslateError {
    /// 模板引用了值源中不存在的名字。在翻译期立即失败，不会提交到驱动。
    #[error("parameter '{name}' not found for SQL: {sql}")]
    MissingParameter { name: String, sql: String },
}

/// 翻译结果的参数部分。
#[derive(Debug, Clone, PartialEq)]
pub enum BoundParams {
    /// 无参数执行。
    None,
    /// 已改写为位置参数，按 `?` 出现顺序绑定。
    Positional(Vec<SqlValue>),
    /// 语句不含命名占位符：值源原样返回，由调用方决定如何传递。
    PassThrough(Row),
}

/// 翻译后的语句：`sql` 中第 i 个 `?` 对应 `Positional` 序列的第 i 个值。
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    pub sql: String,
    pub params: BoundParams,
}

impl BoundStatement {
    /// 将要绑定的参数个数（PassThrough 按值源长度计）。
    pub fn param_count(&self) -> usize {
        match &self.params {
            BoundParams::None => 0,
            BoundParams::Positional(values) => values.len(),
            BoundParams::PassThrough(row) => row.len(),
        }
    }
}

/// 批量翻译结果；`rows` 为 `None` 表示语句不含命名占位符，行原样传递。
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatement {
    pub sql: String,
    pub rows: Option<Vec<Vec<SqlValue>>>,
}

/// 从 `from` 起找下一个 `%(name)s`，返回（起点、终点后一位、名字）。
///
/// 名字是 `%(` 与 `)` 之间任意非空字符串；未闭合或空名的片段按字面量
/// 处理，继续向后扫描。
fn find_placeholder(sql: &str, from: usize) -> Option<(usize, usize, &str)> {
    let mut search = from;
    while let Some(rel) = sql[search..].find("%(") {
        let start = search + rel;
        let name_start = start + 2;
        if let Some(close_rel) = sql[name_start..].find(')') {
            let name_end = name_start + close_rel;
            let name = &sql[name_start..name_end];
            if !name.is_empty() && sql.as_bytes().get(name_end + 1) == Some(&b's') {
                return Some((start, name_end + 2, name));
            }
        }
        search = start + 2;
    }
    None
}

/// 单语句翻译。
///
/// - 值源为空或缺失：原样返回，无参数执行；
/// - 模板不含 `%(`：原样返回，值源透传；
/// - 否则逐个占位符改写为 `?` 并按出现顺序取值，名字缺失立即报
///   [`TranslateError::MissingParameter`]。
///
/// 同名占位符出现几次就绑定几次，每次独立从值源取同一个值。
pub fn translate(sql: &str, params: Option<&Row>) -> Result<BoundStatement, TranslateError> {
    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return Ok(BoundStatement {
            sql: sql.to_string(),
            params: BoundParams::None,
        });
    };

    if !sql.contains("%(") {
        return Ok(BoundStatement {
            sql: sql.to_string(),
            params: BoundParams::PassThrough(params.clone()),
        });
    }

    let mut buf = StringBuilder::new();
    let mut values = Vec::new();
    let mut last = 0usize;
    while let Some((start, end, name)) = find_placeholder(sql, last) {
        buf.write_str(&sql[last..start]);
        buf.write_char('?');
        let value = params
            .get(name)
            .ok_or_else(|| TranslateError::MissingParameter {
                name: name.to_string(),
                sql: sql.to_string(),
            })?;
        values.push(value.clone());
        last = end;
    }
    buf.write_str(&sql[last..]);

    Ok(BoundStatement {
        sql: buf.into_string(),
        params: BoundParams::Positional(values),
    })
}

/// 批量翻译（批量 INSERT 用）。
///
/// 名字顺序由模板中占位符的出现顺序一次性定型；每一行都按这一固定
/// 顺序产出位置值元组，与行内部的键序无关。任何一行缺名都立即失败。
/// 模板不含命名占位符时 `rows` 为 `None`，行原样交给批量执行。
pub fn translate_batch(sql: &str, rows: &[Row]) -> Result<BatchStatement, TranslateError> {
    let mut names = Vec::new();
    let mut buf = StringBuilder::new();
    let mut last = 0usize;
    while let Some((start, end, name)) = find_placeholder(sql, last) {
        buf.write_str(&sql[last..start]);
        buf.write_char('?');
        names.push(name);
        last = end;
    }

    if names.is_empty() {
        return Ok(BatchStatement {
            sql: sql.to_string(),
            rows: None,
        });
    }
    buf.write_str(&sql[last..]);

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut tuple = Vec::with_capacity(names.len());
        for &name in &names {
            let value = row
                .get(name)
                .ok_or_else(|| TranslateError::MissingParameter {
                    name: name.to_string(),
                    sql: sql.to_string(),
                })?;
            tuple.push(value.clone());
        }
        out.push(tuple);
    }

    Ok(BatchStatement {
        sql: buf.into_string(),
        rows: Some(out),
    })
}
