//! 驱动边界：facade 依赖的同步 qmark 驱动契约。

use crate::value::SqlValue;

/// 驱动侧失败（约束冲突、语法错误、连接断开等）。
///
/// 对本 crate 不透明：原样向上传播，不重试、不掩盖。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DriverError {
    pub message: String,
}

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 查询结果：驱动报告的列名与行数据。
///
/// 列名原样保留（Firebird 等驱动可能带空白填充），由 facade 归一化。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

/// 同步阻塞的 qmark 位置参数驱动。
///
/// 实现约定（本 crate 不加锁、不校验）：
/// - 一个连接同时最多持有一个打开的游标；开始新语句会隐式收回上一个。
/// - 驱动对象不可跨线程并发使用，需要调用方自行同步。
/// - 没有取消或超时机制，执行阻塞到驱动返回或报错。
pub trait Driver {
    /// 执行一条 DML，返回受影响行数。`params` 按 `?` 出现顺序绑定。
    fn execute(&mut self, sql: &str, params: Option<&[SqlValue]>) -> Result<u64, DriverError>;

    /// 同一语句对每行参数各执行一次（批量 INSERT）。
    fn execute_batch(&mut self, sql: &str, rows: &[Vec<SqlValue>]) -> Result<u64, DriverError>;

    /// 执行查询并取回全部行。
    fn query(
        &mut self,
        sql: &str,
        params: Option<&[SqlValue]>,
    ) -> Result<QueryResult, DriverError>;

    /// 最近插入行的标识；是否可用取决于驱动与方言，不作保证。
    fn last_insert_id(&mut self) -> Option<i64>;

    fn commit(&mut self) -> Result<(), DriverError>;

    fn rollback(&mut self) -> Result<(), DriverError>;

    /// 释放连接资源；之后对象不再可用。
    fn close(&mut self) -> Result<(), DriverError>;
}
