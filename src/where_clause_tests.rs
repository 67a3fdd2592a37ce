#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::translate::{BoundParams, translate};
    use crate::value::SqlValue;
    use crate::where_clause::{
        Condition, ConditionValue, LogicalOp, build_where, build_where_with_dialect,
    };
    use pretty_assertions::assert_eq;

    fn firebird(conditions: &[Condition]) -> crate::where_clause::WhereClause {
        build_where_with_dialect(Dialect::Firebird, conditions)
    }

    #[test]
    fn scalar_condition() {
        let clause = firebird(&[Condition::first("name", "=", "ada")]);
        assert_eq!(clause.sql, "WHERE \"name\" = %(param_name)s");
        assert_eq!(clause.params.columns(), vec!["param_name"]);
        assert_eq!(
            clause.params.get("param_name"),
            Some(&SqlValue::String("ada".into()))
        );
    }

    #[test]
    fn connectives_combine_left_to_right() {
        let clause = firebird(&[
            Condition::first("a", "=", 1_i64),
            Condition::and("b", "!=", 2_i64),
            Condition::or("c", ">", 3_i64),
        ]);
        assert_eq!(
            clause.sql,
            "WHERE \"a\" = %(param_a)s AND \"b\" != %(param_b)s OR \"c\" > %(param_c)s"
        );
        assert_eq!(clause.params.columns(), vec!["param_a", "param_b", "param_c"]);
    }

    #[test]
    fn in_list_expansion_binds_in_order() {
        // 算子给的是 "="，列表值强制为 IN
        let clause = firebird(&[Condition::first("id", "=", vec![1_i64, 2, 3])]);
        assert_eq!(
            clause.sql,
            "WHERE \"id\" IN (%(param_id_0)s, %(param_id_1)s, %(param_id_2)s)"
        );
        assert_eq!(
            clause.params.columns(),
            vec!["param_id_0", "param_id_1", "param_id_2"]
        );
        assert_eq!(
            clause.params.values(),
            vec![SqlValue::I64(1), SqlValue::I64(2), SqlValue::I64(3)]
        );
    }

    #[test]
    fn not_in_is_preserved() {
        let clause = firebird(&[Condition::first("id", "NOT IN", vec![1_i64, 2])]);
        assert_eq!(
            clause.sql,
            "WHERE \"id\" NOT IN (%(param_id_0)s, %(param_id_1)s)"
        );
    }

    #[test]
    fn empty_list_degenerates_to_tautology() {
        let clause = firebird(&[
            Condition::first("a", "=", 5_i64),
            Condition::and("id", "IN", Vec::<i64>::new()),
        ]);
        assert_eq!(clause.sql, "WHERE \"a\" = %(param_a)s AND 1 = 1");
        assert_eq!(clause.params.columns(), vec!["param_a"]);
    }

    #[test]
    fn empty_list_alone_is_still_valid() {
        let clause = firebird(&[Condition::first("id", "NOT IN", Vec::<i64>::new())]);
        assert_eq!(clause.sql, "WHERE 1 = 1");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn null_value_emits_no_placeholder() {
        let clause = firebird(&[Condition::first("deleted_at", "IS NULL", SqlValue::Null)]);
        assert_eq!(clause.sql, "WHERE \"deleted_at\" IS NULL");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn null_helper_matches_explicit_null() {
        let a = firebird(&[Condition::first("x", "IS NOT NULL", ConditionValue::null())]);
        let b = firebird(&[Condition::first("x", "IS NOT NULL", SqlValue::Null)]);
        assert_eq!(a, b);
    }

    #[test]
    fn aliases_continue_across_conditions() {
        // 同列两个 IN 条件：别名续编，不回到 0
        let clause = firebird(&[
            Condition::first("id", "IN", vec![1_i64, 2]),
            Condition::or("id", "IN", vec![3_i64, 4]),
        ]);
        assert_eq!(
            clause.sql,
            "WHERE \"id\" IN (%(param_id_0)s, %(param_id_1)s) \
             OR \"id\" IN (%(param_id_2)s, %(param_id_3)s)"
        );
        assert_eq!(
            clause.params.values(),
            vec![
                SqlValue::I64(1),
                SqlValue::I64(2),
                SqlValue::I64(3),
                SqlValue::I64(4)
            ]
        );
    }

    #[test]
    fn mysql_dialect_quotes_with_backticks() {
        let clause = build_where_with_dialect(
            Dialect::MySQL,
            &[Condition::first("name", "=", "ada")],
        );
        assert_eq!(clause.sql, "WHERE `name` = %(param_name)s");
    }

    #[test]
    fn default_dialect_is_used_without_override() {
        let _g = crate::dialect::set_default_dialect_scoped(Dialect::Firebird);
        let clause = build_where(&[Condition::first("name", "=", "ada")]);
        assert_eq!(clause.sql, "WHERE \"name\" = %(param_name)s");
    }

    #[test]
    fn empty_conditions_build_empty_clause() {
        let clause = firebird(&[]);
        assert!(clause.is_empty());
        assert_eq!(clause.sql, "");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn rebuilding_is_byte_identical() {
        let conditions = vec![
            Condition::first("id", "=", vec![1_i64, 2]),
            Condition::and("status", "=", "on"),
            Condition::or("deleted_at", "IS NULL", SqlValue::Null),
        ];
        let a = firebird(&conditions);
        let b = firebird(&conditions);
        assert_eq!(a.sql, b.sql);
        assert_eq!(a.params, b.params);
    }

    #[test]
    fn clause_translates_with_its_own_params() {
        let clause = firebird(&[
            Condition::first("id", "=", vec![1_i64, 2, 3]),
            Condition::and("status", "=", "on"),
        ]);
        let sql = format!("SELECT * FROM \"t\" {}", clause.sql);
        let bound = translate(&sql, Some(&clause.params)).unwrap();
        assert_eq!(
            bound.sql,
            "SELECT * FROM \"t\" WHERE \"id\" IN (?, ?, ?) AND \"status\" = ?"
        );
        assert_eq!(
            bound.params,
            BoundParams::Positional(vec![
                SqlValue::I64(1),
                SqlValue::I64(2),
                SqlValue::I64(3),
                SqlValue::String("on".into())
            ])
        );
    }

    #[test]
    fn logical_op_default_is_none() {
        assert_eq!(LogicalOp::default(), LogicalOp::None);
    }
}
