//! Row：保持插入顺序的列名 → 值映射，以及单行/批量负载。

use crate::value::SqlValue;

/// 一行记录：列名到值的有序关联。
///
/// 既作为 INSERT/UPDATE 的数据载体，也作为占位符翻译的命名值源。
/// 迭代顺序即插入顺序；按已有列名再次 `insert` 只替换值，不改变位置。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, SqlValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 列名，按插入顺序。
    pub fn columns(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    /// 值，按插入顺序。
    pub fn values(&self) -> Vec<SqlValue> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// 把 `other` 的所有条目并入本行（同名列取 `other` 的值）。
    pub fn merge(&mut self, other: &Row) -> &mut Self {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
        self
    }
}

impl FromIterator<(String, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.insert(name, value);
        }
        row
    }
}

/// 写入负载：单行或批量，在调用边界一次性定型。
///
/// 批量的全部行必须具有相同的列集（以首行为准生成语句模板），这是
/// 调用方前置条件，此处不做校验。
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Single(Row),
    Batch(Vec<Row>),
}

impl From<Row> for Payload {
    fn from(row: Row) -> Self {
        Self::Single(row)
    }
}

impl From<Vec<Row>> for Payload {
    fn from(rows: Vec<Row>) -> Self {
        Self::Batch(rows)
    }
}
