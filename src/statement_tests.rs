#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::row;
    use crate::statement::{BuildError, StatementBuilder};
    use crate::translate::{BoundParams, translate};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    fn firebird(table: &str) -> StatementBuilder {
        StatementBuilder::with_dialect(table, Dialect::Firebird)
    }

    #[test]
    fn insert_emits_one_placeholder_per_column() {
        let sql = firebird("user").insert(["id", "name"]).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO \"user\" (\"id\", \"name\") VALUES (%(id)s, %(name)s)"
        );
    }

    #[test]
    fn insert_single_column() {
        let sql = firebird("tag").insert(["label"]).unwrap();
        assert_eq!(sql, "INSERT INTO \"tag\" (\"label\") VALUES (%(label)s)");
    }

    #[test]
    fn insert_keeps_column_order() {
        let sql = firebird("t").insert(["b", "a", "c"]).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO \"t\" (\"b\", \"a\", \"c\") VALUES (%(b)s, %(a)s, %(c)s)"
        );
    }

    #[test]
    fn update_emits_assignment_per_column() {
        let sql = firebird("user").update(["name", "age"]).unwrap();
        assert_eq!(sql, "UPDATE \"user\" SET \"name\" = %(name)s, \"age\" = %(age)s");
    }

    #[test]
    fn delete_has_no_trailing_clause() {
        assert_eq!(firebird("user").delete(), "DELETE FROM \"user\"");
    }

    #[test]
    fn select_all() {
        assert_eq!(firebird("user").select_all(), "SELECT * FROM \"user\"");
    }

    #[test]
    fn empty_columns_fail() {
        let none = Vec::<String>::new();
        assert_eq!(
            firebird("user").insert(none.clone()),
            Err(BuildError::EmptyColumns { verb: "insert" })
        );
        assert_eq!(
            firebird("user").update(none),
            Err(BuildError::EmptyColumns { verb: "update" })
        );
    }

    #[test]
    fn mysql_quotes_with_backticks() {
        let builder = StatementBuilder::with_dialect("user", Dialect::MySQL);
        assert_eq!(
            builder.insert(["id"]).unwrap(),
            "INSERT INTO `user` (`id`) VALUES (%(id)s)"
        );
        assert_eq!(builder.select_all(), "SELECT * FROM `user`");
    }

    #[test]
    fn rebuilding_is_byte_identical() {
        let builder = firebird("user");
        assert_eq!(builder.insert(["a", "b"]), builder.insert(["a", "b"]));
        assert_eq!(builder.update(["a"]), builder.update(["a"]));
    }

    #[test]
    fn insert_template_round_trips_through_translate() {
        let sql = firebird("user").insert(["id", "name"]).unwrap();
        let params = row! { "name" => "ada", "id" => 1_i64 };
        let bound = translate(&sql, Some(&params)).unwrap();
        assert_eq!(bound.sql, "INSERT INTO \"user\" (\"id\", \"name\") VALUES (?, ?)");
        assert_eq!(
            bound.params,
            BoundParams::Positional(vec![SqlValue::I64(1), SqlValue::String("ada".into())])
        );
    }
}
