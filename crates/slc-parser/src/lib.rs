pub mod expr;
pub mod parser;

pub use parser::{parse, Parser};

#[cfg(test)]
mod tests {
    use super::*;
    use slc_lexer::Lexer;
    use slc_syntax::ast::*;
    use slc_syntax::error::{Error, ErrorKind};

    fn parser_for(input: &str) -> Parser {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.scan().expect("Lexing should succeed");
        Parser::new(tokens)
    }

    fn parse_expr_str(input: &str) -> Expr {
        parser_for(input).parse_expr().expect("Parsing should succeed")
    }

    fn parse_stmt_str(input: &str) -> Stmt {
        parser_for(input).parse_stmt().expect("Parsing should succeed")
    }

    fn parse_program_str(input: &str) -> Program {
        parser_for(input).parse_program().expect("Parsing should succeed")
    }

    fn parse_error(input: &str) -> Error {
        parser_for(input).parse_program().expect_err("Parsing should fail")
    }

    fn int(n: i64) -> Box<Expr> {
        Box::new(Expr::Int(n))
    }

    fn var(name: &str) -> Box<Expr> {
        Box::new(Expr::GetVariable(name.to_string()))
    }

    #[test]
    fn test_literal_expressions() {
        assert_eq!(parse_expr_str("42"), Expr::Int(42));
        assert_eq!(parse_expr_str("2.5"), Expr::Double(2.5));
        assert_eq!(parse_expr_str("\"hello\""), Expr::String("hello".to_string()));
        assert_eq!(parse_expr_str("true"), Expr::Bool(true));
        assert_eq!(parse_expr_str("false"), Expr::Bool(false));
        assert_eq!(parse_expr_str("null"), Expr::Null);
        assert_eq!(parse_expr_str("void"), Expr::Void);
        assert_eq!(parse_expr_str("[8]"), Expr::Array(8));
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let stmt = parse_stmt_str("int x = 1 + 2 * 3;");
        let expected = Stmt::VariableDecl(VariableDecl {
            ty: TypeTag::Int,
            name: "x".to_string(),
            init: Expr::Arithmetic {
                op: ArithOp::Add,
                lhs: int(1),
                rhs: Box::new(Expr::Arithmetic {
                    op: ArithOp::Mul,
                    lhs: int(2),
                    rhs: int(3),
                }),
            },
        });
        assert_eq!(stmt, expected);
    }

    #[test]
    fn test_and_binds_looser_than_equality() {
        let expected = Expr::And(
            Box::new(Expr::Relational { op: RelOp::Eq, lhs: var("a"), rhs: int(1) }),
            Box::new(Expr::Relational { op: RelOp::Eq, lhs: var("b"), rhs: int(2) }),
        );
        assert_eq!(parse_expr_str("a == 1 && b == 2"), expected);
    }

    #[test]
    fn test_or_binds_loosest() {
        assert!(matches!(parse_expr_str("a || b && c"), Expr::Or(_, rhs) if matches!(*rhs, Expr::And(_, _))));
    }

    #[test]
    fn test_left_associativity() {
        let expected = Expr::Arithmetic {
            op: ArithOp::Sub,
            lhs: Box::new(Expr::Arithmetic { op: ArithOp::Sub, lhs: int(10), rhs: int(4) }),
            rhs: int(3),
        };
        assert_eq!(parse_expr_str("10 - 4 - 3"), expected);
        assert!(matches!(
            parse_expr_str("8 / 4 % 3"),
            Expr::Arithmetic { op: ArithOp::Mod, lhs, .. } if matches!(*lhs, Expr::Arithmetic { op: ArithOp::Div, .. })
        ));
    }

    #[test]
    fn test_comparison_operations() {
        for (src, op) in [
            ("1 == 2", RelOp::Eq),
            ("1 != 2", RelOp::Ne),
            ("1 < 2", RelOp::Lt),
            ("1 > 2", RelOp::Gt),
            ("1 <= 2", RelOp::Le),
            ("1 >= 2", RelOp::Ge),
        ] {
            assert!(matches!(parse_expr_str(src), Expr::Relational { op: o, .. } if o == op), "{}", src);
        }
    }

    #[test]
    fn test_unary_and_grouping() {
        assert_eq!(
            parse_expr_str("-x"),
            Expr::Unary { op: UnaryOp::Minus, operand: var("x") }
        );
        assert_eq!(
            parse_expr_str("- -1"),
            Expr::Unary {
                op: UnaryOp::Minus,
                operand: Box::new(Expr::Unary { op: UnaryOp::Minus, operand: int(1) }),
            }
        );
        assert!(matches!(
            parse_expr_str("(1 + 2) * 3"),
            Expr::Arithmetic { op: ArithOp::Mul, lhs, .. } if matches!(*lhs, Expr::Arithmetic { op: ArithOp::Add, .. })
        ));
    }

    #[test]
    fn test_assignment_targets() {
        assert_eq!(
            parse_expr_str("x = y = 3"),
            Expr::SetVariable {
                name: "x".to_string(),
                value: Box::new(Expr::SetVariable { name: "y".to_string(), value: int(3) }),
            }
        );
        assert_eq!(
            parse_expr_str("arr[1] = 5"),
            Expr::SetElement { target: var("arr"), index: int(1), value: int(5) }
        );
        assert_eq!(parse_expr_str("arr[i]"), Expr::GetElement { target: var("arr"), index: var("i") });
        let err = parser_for("1 + x = 2").parse_expr().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Parse { .. }));
    }

    #[test]
    fn test_function_calls() {
        if let Expr::Call { callee, args } = parse_expr_str("add(1, x * 2)") {
            assert_eq!(*callee, Expr::GetVariable("add".to_string()));
            assert_eq!(args.len(), 2);
        } else {
            panic!("Expected Call");
        }
        if let Expr::Call { args, .. } = parse_expr_str("tick()") {
            assert!(args.is_empty());
        } else {
            panic!("Expected Call");
        }
    }

    #[test]
    fn test_program_function_count() {
        let program = parse_program_str(
            "int add(int a, int b) { return a + b; }
             void main() { printf(\"%d\", add(1, 2)); }
             double half(x) { return x / 2.0; }",
        );
        assert_eq!(program.functions.len(), 3);
        let names: Vec<&str> = program.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["add", "main", "half"]);
        assert_eq!(
            program.functions[0].params,
            vec![
                Param { name: "a".to_string(), ty: Some(TypeTag::Int) },
                Param { name: "b".to_string(), ty: Some(TypeTag::Int) },
            ]
        );
        assert_eq!(program.functions[2].params[0].ty, None);
        assert_eq!(program.functions[2].return_type, TypeTag::Double);
    }

    #[test]
    fn test_missing_expression_is_reported_at_semicolon() {
        let err = parse_error("void main() {\n  int x = ;\n}");
        assert_eq!(
            err.kind,
            ErrorKind::Parse { expected: "expression".to_string(), found: "';'".to_string() }
        );
        assert_eq!((err.line, err.col), (2, 11));
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_error("void main() { int x = 1;");
        assert_eq!(err.kind, ErrorKind::UnclosedBlock);
    }

    #[test]
    fn test_top_level_requires_function() {
        let err = parse_error("x = 1;");
        assert!(matches!(err.kind, ErrorKind::Parse { ref expected, .. } if expected == "type keyword"));
    }

    #[test]
    fn test_return_rules() {
        let program = parse_program_str("void f() { return; } int g() { return 1; }");
        assert_eq!(program.functions[0].body, vec![Stmt::Return(None)]);
        assert_eq!(program.functions[1].body, vec![Stmt::Return(Some(Expr::Int(1)))]);
        let err = parse_error("int g() { return; }");
        assert!(matches!(err.kind, ErrorKind::Parse { ref expected, .. } if expected == "expression"));
    }

    #[test]
    fn test_for_loop_parts() {
        let program = parse_program_str(
            "void f() { for (int i = 0; i < 10; i = i + 1) { continue; } for (;;i = i) { break; } }",
        );
        let body = &program.functions[0].body;
        match &body[0] {
            Stmt::For { init: Some(decl), cond: Some(_), step: Expr::SetVariable { .. }, body } => {
                assert_eq!(decl.name, "i");
                assert_eq!(body, &vec![Stmt::Continue]);
            }
            other => panic!("Expected full for loop, got {:?}", other),
        }
        assert!(matches!(&body[1], Stmt::For { init: None, cond: None, .. }));
    }

    #[test]
    fn test_while_requires_condition() {
        let program = parse_program_str("void f() { while (x < 3) { x = x + 1; } }");
        assert!(matches!(&program.functions[0].body[0], Stmt::While { .. }));
        let err = parse_error("void f() { while () { } }");
        assert!(matches!(err.kind, ErrorKind::Parse { ref expected, .. } if expected == "expression"));
    }

    #[test]
    fn test_if_elif_else() {
        let stmt = parse_stmt_str(
            "if (a == 1) { x = 1; } elif (a == 2) { x = 2; } elif (a == 3) { } else { x = 0; }",
        );
        match stmt {
            Stmt::If { branches, else_body } => {
                assert_eq!(branches.len(), 3);
                assert_eq!(branches[2].body.len(), 0);
                assert_eq!(else_body.map(|b| b.len()), Some(1));
            }
            other => panic!("Expected If, got {:?}", other),
        }
        assert!(matches!(parse_stmt_str("if (ok) { }"), Stmt::If { else_body: None, .. }));
    }

    #[test]
    fn test_switch_cases() {
        let stmt = parse_stmt_str(
            "switch (n) { case 1: x = 1; break; case -2: case 3: x = 3; default: x = 0; }",
        );
        match stmt {
            Stmt::Switch { scrutinee, cases, default } => {
                assert_eq!(scrutinee, Expr::GetVariable("n".to_string()));
                let values: Vec<i64> = cases.iter().map(|c| c.value).collect();
                assert_eq!(values, vec![1, -2, 3]);
                assert_eq!(cases[0].body.len(), 2);
                assert!(cases[1].body.is_empty());
                assert_eq!(default.map(|b| b.len()), Some(1));
            }
            other => panic!("Expected Switch, got {:?}", other),
        }
        let err = parser_for("switch (n) { default: default: }").parse_stmt().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Parse { .. }));
        let err = parser_for("switch (n) { case 1: x = 1;").parse_stmt().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnclosedBlock);
    }

    #[test]
    fn test_print_statements() {
        assert_eq!(
            parse_stmt_str("printf(\"%d + %d\", a, 1 + 2);"),
            Stmt::Print {
                format: "%d + %d".to_string(),
                args: vec![
                    Expr::GetVariable("a".to_string()),
                    Expr::Arithmetic { op: ArithOp::Add, lhs: int(1), rhs: int(2) },
                ],
            }
        );
        assert!(matches!(parse_stmt_str("print(\"hi\");"), Stmt::Print { ref args, .. } if args.is_empty()));
        assert!(parser_for("printf(x);").parse_stmt().is_err());
    }

    #[test]
    fn test_array_literal_requires_positive_size() {
        assert!(parser_for("[0]").parse_expr().is_err());
        assert!(parser_for("[x]").parse_expr().is_err());
    }

    #[test]
    fn test_integer_overflow_is_invalid_literal() {
        let err = parser_for("99999999999999999999").parse_expr().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidLiteral { .. }));
    }

    #[test]
    fn test_infinite_double_is_invalid_literal() {
        let src = format!("{}.0", "9".repeat(400));
        let err = parser_for(&src).parse_expr().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidLiteral { .. }));
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let src = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
        let err = parser_for(&src).parse_expr().unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooDeep);

        let src = format!("{}1", "-".repeat(5000));
        let err = parser_for(&src).parse_expr().unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooDeep);

        let src = format!("void f() {{ {}{} }}", "while (x) { ".repeat(5000), "}".repeat(5000));
        assert_eq!(parse_error(&src).kind, ErrorKind::TooDeep);
    }

    #[test]
    fn test_moderate_nesting_parses() {
        let src = format!("{}1{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(parse_expr_str(&src), Expr::Int(1));
        let mut parser = parser_for(&format!("{}2", "-".repeat(50)));
        assert!(parser.parse_expr().is_ok());
    }

    #[test]
    fn test_void_return_and_empty_for_condition() {
        let program = parse_program_str("void f() { for (;; i = i + 1) { return; } }");
        match &program.functions[0].body[0] {
            Stmt::For { cond: None, body, .. } => assert_eq!(body, &vec![Stmt::Return(None)]),
            other => panic!("Expected for loop, got {:?}", other),
        }
        let err = parse_error("void f() { switch (n) { default: x = 1; default: } }");
        assert!(matches!(err.kind, ErrorKind::Parse { ref expected, .. } if expected == "'case', 'default' or '}'"));
    }

    #[test]
    fn test_parse_free_function() {
        let tokens = slc_lexer::scan("void main() { }").unwrap();
        let program = parse(tokens).unwrap();
        assert_eq!(program.functions[0].body, Vec::new());
    }
}
