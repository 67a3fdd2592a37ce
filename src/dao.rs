//! 数据访问 facade：组合语句模板、WHERE 合成与占位符翻译，经由
//! [`Driver`] 执行。
//!
//! 高层操作（`create`/`read`/`update`/`delete`）按表名与条件列表工作；
//! 模板级操作（`*_template`）接受任意命名占位符模板，供上层自行组合。
//! 构建期校验失败（缺参、空列集、空批量）在任何内容提交到驱动之前
//! 就返回错误。

use crate::dialect::{Dialect, default_dialect};
use crate::driver::{Driver, DriverError, QueryResult};
use crate::row::{Payload, Row};
use crate::statement::{BuildError, StatementBuilder};
use crate::translate::{
    BoundParams, BoundStatement, TranslateError, translate, translate_batch,
};
use crate::value::SqlValue;
use crate::where_clause::{Condition, build_where_with_dialect};
use tracing::debug;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DaoError {
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Driver(#[from] DriverError),
    /// 批量负载至少要有一行。
    #[error("batch payload must contain at least one row")]
    EmptyBatch,
}

/// 表主键：单列或按键段位置排序的复合键。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryKey {
    Single(String),
    Composite(Vec<String>),
}

/// 数据访问 facade。
///
/// 同步阻塞；不可跨线程并发使用（与底层驱动一致，由调用方同步）。
pub struct Dao<D: Driver> {
    driver: D,
    dialect: Dialect,
    autocommit: bool,
}

impl<D: Driver> Dao<D> {
    /// 以全局默认方言、自动提交开启创建。
    pub fn new(driver: D) -> Self {
        Self::with_dialect(driver, default_dialect())
    }

    pub fn with_dialect(driver: D, dialect: Dialect) -> Self {
        Self {
            driver,
            dialect,
            autocommit: true,
        }
    }

    pub fn set_autocommit(&mut self, autocommit: bool) -> &mut Self {
        self.autocommit = autocommit;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    fn builder(&self, table: &str) -> StatementBuilder {
        StatementBuilder::with_dialect(table, self.dialect)
    }

    /// 把 WHERE 子句拼到语句尾部，返回完整模板与其值源。
    fn append_where(&self, mut sql: String, conditions: &[Condition]) -> (String, Row) {
        let clause = build_where_with_dialect(self.dialect, conditions);
        if !clause.is_empty() {
            sql.push(' ');
            sql.push_str(&clause.sql);
        }
        (sql, clause.params)
    }

    fn execute_bound(&mut self, bound: &BoundStatement) -> Result<u64, DaoError> {
        debug!(sql = %bound.sql, params = bound.param_count(), "execute");
        let affected = match &bound.params {
            BoundParams::None => self.driver.execute(&bound.sql, None)?,
            BoundParams::Positional(values) => self.driver.execute(&bound.sql, Some(values))?,
            BoundParams::PassThrough(row) => self.driver.execute(&bound.sql, Some(&row.values()))?,
        };
        Ok(affected)
    }

    fn query_bound(&mut self, bound: &BoundStatement) -> Result<QueryResult, DaoError> {
        debug!(sql = %bound.sql, params = bound.param_count(), "query");
        let result = match &bound.params {
            BoundParams::None => self.driver.query(&bound.sql, None)?,
            BoundParams::Positional(values) => self.driver.query(&bound.sql, Some(values))?,
            BoundParams::PassThrough(row) => self.driver.query(&bound.sql, Some(&row.values()))?,
        };
        Ok(result)
    }

    /// INSERT：模板由负载列集生成，单行/批量各走对应的翻译路径。
    ///
    /// 成功后在自动提交模式下提交，并返回驱动报告的最近插入标识
    /// （是否有值取决于驱动与方言）。
    pub fn create(&mut self, table: &str, payload: &Payload) -> Result<Option<i64>, DaoError> {
        let columns = match payload {
            Payload::Single(row) => row.columns(),
            Payload::Batch(rows) => rows.first().ok_or(DaoError::EmptyBatch)?.columns(),
        };
        let sql = self.builder(table).insert(columns)?;
        self.create_template(&sql, payload)
    }

    /// 模板级 INSERT：对任意模板执行单行或批量插入。
    pub fn create_template(
        &mut self,
        sql: &str,
        payload: &Payload,
    ) -> Result<Option<i64>, DaoError> {
        match payload {
            Payload::Single(row) => {
                let bound = translate(sql, Some(row))?;
                self.execute_bound(&bound)?;
            }
            Payload::Batch(rows) => {
                if rows.is_empty() {
                    return Err(DaoError::EmptyBatch);
                }
                let batch = translate_batch(sql, rows)?;
                // 无命名占位符时按每行自身的键序传值
                let bound_rows = match batch.rows {
                    Some(bound) => bound,
                    None => rows.iter().map(Row::values).collect(),
                };
                debug!(sql = %batch.sql, rows = bound_rows.len(), "execute batch");
                self.driver.execute_batch(&batch.sql, &bound_rows)?;
            }
        }

        let last_id = self.driver.last_insert_id();
        if self.autocommit {
            self.driver.commit()?;
        }
        Ok(last_id)
    }

    /// SELECT * + 可选 WHERE，结果行映射为 [`Row`] 记录。
    pub fn read(&mut self, table: &str, conditions: &[Condition]) -> Result<Vec<Row>, DaoError> {
        let sql = self.builder(table).select_all();
        let (sql, params) = self.append_where(sql, conditions);
        self.query_template(&sql, Some(&params))
    }

    /// 同 [`read`](Self::read)，只取第一行；空结果为 `None`。
    pub fn read_first(
        &mut self,
        table: &str,
        conditions: &[Condition],
    ) -> Result<Option<Row>, DaoError> {
        Ok(self.read(table, conditions)?.into_iter().next())
    }

    /// UPDATE：SET 模板来自数据行的列集，值源 = 数据行 ∪ WHERE 参数。
    pub fn update(
        &mut self,
        table: &str,
        data: &Row,
        conditions: &[Condition],
    ) -> Result<u64, DaoError> {
        let sql = self.builder(table).update(data.columns())?;
        let (sql, where_params) = self.append_where(sql, conditions);
        let mut params = data.clone();
        params.merge(&where_params);
        self.execute_template(&sql, Some(&params))
    }

    /// DELETE + 可选 WHERE。
    pub fn delete(&mut self, table: &str, conditions: &[Condition]) -> Result<u64, DaoError> {
        let sql = self.builder(table).delete();
        let (sql, params) = self.append_where(sql, conditions);
        self.execute_template(&sql, Some(&params))
    }

    /// 模板级 DML 执行：翻译、执行、按需自动提交，返回受影响行数。
    pub fn execute_template(
        &mut self,
        sql: &str,
        params: Option<&Row>,
    ) -> Result<u64, DaoError> {
        let affected = self.execute_bound(&translate(sql, params)?)?;
        if self.autocommit {
            self.driver.commit()?;
        }
        Ok(affected)
    }

    /// 模板级查询：翻译、执行，结果行映射为 [`Row`] 记录。
    pub fn query_template(
        &mut self,
        sql: &str,
        params: Option<&Row>,
    ) -> Result<Vec<Row>, DaoError> {
        let bound = translate(sql, params)?;
        let result = self.query_bound(&bound)?;
        Ok(map_rows(result))
    }

    pub fn commit(&mut self) -> Result<(), DaoError> {
        Ok(self.driver.commit()?)
    }

    pub fn rollback(&mut self) -> Result<(), DaoError> {
        Ok(self.driver.rollback()?)
    }

    /// 主键内省：无主键为 `None`，单列为 `Single`，复合键按键段位置排序。
    pub fn primary_key(&mut self, table: &str) -> Result<Option<PrimaryKey>, DaoError> {
        let sql = self.dialect.primary_key_query();
        debug!(sql = %sql, table = %table, "primary key lookup");
        let result = self
            .driver
            .query(sql, Some(&[SqlValue::from(table.to_string())]))?;

        let mut cols = Vec::new();
        for row in result.rows {
            if let Some(SqlValue::String(name)) = row.into_iter().next() {
                cols.push(name.trim().to_string());
            }
        }

        if cols.is_empty() {
            Ok(None)
        } else if cols.len() == 1 {
            Ok(Some(PrimaryKey::Single(cols.remove(0))))
        } else {
            Ok(Some(PrimaryKey::Composite(cols)))
        }
    }
}

impl<D: Driver> Drop for Dao<D> {
    fn drop(&mut self) {
        // 处置路径：关闭失败只记录，不向外传播
        if let Err(err) = self.driver.close() {
            debug!(error = %err, "close suppressed during drop");
        }
    }
}

/// 结果行 → 记录：列名裁剪两侧空白后作为键（大小写按驱动报告保留）。
fn map_rows(result: QueryResult) -> Vec<Row> {
    let columns: Vec<String> = result
        .columns
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    result
        .rows
        .into_iter()
        .map(|values| columns.iter().cloned().zip(values).collect::<Row>())
        .collect()
}
