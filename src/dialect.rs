//! SQL 方言：控制标识符 Quote 与主键内省语句。

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 目标数据库方言。影响标识符引用符与主键内省语句；
/// 占位符翻译不受方言影响（驱动边界固定为 qmark `?`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Firebird,
    SQLite,
    MySQL,
    PostgreSQL,
}

static DEFAULT_DIALECT: AtomicU8 = AtomicU8::new(Dialect::Firebird as u8);
static DEFAULT_DIALECT_LOCK: Mutex<()> = Mutex::new(());

impl Dialect {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Firebird,
            1 => Self::SQLite,
            2 => Self::MySQL,
            3 => Self::PostgreSQL,
            _ => Self::Firebird,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }
}

/// 获取当前全局默认方言。
pub fn default_dialect() -> Dialect {
    Dialect::from_u8(DEFAULT_DIALECT.load(Ordering::Relaxed))
}

/// 设置全局默认方言，返回旧值。
pub fn set_default_dialect(dialect: Dialect) -> Dialect {
    let old = DEFAULT_DIALECT.swap(dialect.to_u8(), Ordering::Relaxed);
    Dialect::from_u8(old)
}

/// 修改全局默认方言的 RAII guard（持有一个全局锁，避免并行测试互相干扰）。
pub struct DefaultDialectGuard {
    _lock: MutexGuard<'static, ()>,
    old: Dialect,
}

impl Drop for DefaultDialectGuard {
    fn drop(&mut self) {
        set_default_dialect(self.old);
    }
}

/// 在一个作用域内临时设置默认方言，退出作用域后自动恢复。
pub fn set_default_dialect_scoped(dialect: Dialect) -> DefaultDialectGuard {
    let lock = DEFAULT_DIALECT_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_dialect(dialect);
    DefaultDialectGuard { _lock: lock, old }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Firebird => "Firebird",
            Self::SQLite => "SQLite",
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
        };
        f.write_str(s)
    }
}

impl Dialect {
    /// 为标识符加引用符。不处理标识符内部嵌入的引用符（调用方错误）。
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::MySQL => format!("`{name}`"),
            Self::Firebird | Self::SQLite | Self::PostgreSQL => format!("\"{name}\""),
        }
    }

    /// 主键内省语句：一个 `?` 参数（表名），返回按键段位置排序的主键列名。
    pub fn primary_key_query(self) -> &'static str {
        match self {
            Self::Firebird => {
                "SELECT TRIM(seg.RDB$FIELD_NAME) \
                 FROM RDB$RELATION_CONSTRAINTS rc \
                 JOIN RDB$INDEX_SEGMENTS seg ON seg.RDB$INDEX_NAME = rc.RDB$INDEX_NAME \
                 WHERE rc.RDB$CONSTRAINT_TYPE = 'PRIMARY KEY' \
                 AND rc.RDB$RELATION_NAME = UPPER(?) \
                 ORDER BY seg.RDB$FIELD_POSITION"
            }
            Self::SQLite => {
                "SELECT name FROM pragma_table_info(?) WHERE pk > 0 ORDER BY pk"
            }
            Self::MySQL => {
                "SELECT COLUMN_NAME \
                 FROM information_schema.KEY_COLUMN_USAGE \
                 WHERE TABLE_SCHEMA = DATABASE() \
                 AND TABLE_NAME = ? \
                 AND CONSTRAINT_NAME = 'PRIMARY' \
                 ORDER BY ORDINAL_POSITION"
            }
            Self::PostgreSQL => {
                "SELECT kcu.column_name \
                 FROM information_schema.table_constraints tc \
                 JOIN information_schema.key_column_usage kcu \
                 ON kcu.constraint_name = tc.constraint_name \
                 AND kcu.table_schema = tc.table_schema \
                 WHERE tc.constraint_type = 'PRIMARY KEY' \
                 AND tc.table_name = ? \
                 ORDER BY kcu.ordinal_position"
            }
        }
    }
}
