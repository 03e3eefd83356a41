#[cfg(test)]
mod tests {
    use crate::core::ast::{
        Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement,
    };
    use crate::core::lexer::Lexer;
    use crate::core::parser::{Parser, ParserError};
    use crate::core::token::{Token, TokenKind};

    #[test]
    fn test_let_statements() {
        let (program, errors) = parse("let x = 5;");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(
            program.statements,
            vec![Statement::Let {
                token: Token::new(TokenKind::Let, "let"),
                name: ident("x"),
                value: int(5),
            }]
        );

        let inputs = [
            ("let y = true;", "y", "true"),
            ("let foobar = y", "foobar", "y"),
            ("let z = 1 + 2 * 3;", "z", "(1 + (2 * 3))"),
        ];
        for (input, name, value) in inputs {
            let (program, errors) = parse(input);
            assert!(errors.is_empty(), "{:?}", errors);
            assert_eq!(program.statements.len(), 1);
            match &program.statements[0] {
                Statement::Let { name: id, value: v, .. } => {
                    assert_eq!(id.value, name);
                    assert_eq!(v.to_string(), value);
                }
                other => panic!("expected let statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_let_statement_errors() {
        let (program, errors) = parse("let x 5;");
        assert!(program.statements.is_empty());
        assert_eq!(
            errors,
            vec![ParserError::Expected {
                expected: TokenKind::Assign,
                actual: Token::new(TokenKind::Int, "5"),
            }]
        );
        assert_eq!(errors[0].to_string(), "Expected token :=, got Int(5)");

        let (program, errors) = parse("let = 10;");
        assert!(program.statements.is_empty());
        assert_eq!(errors[0].to_string(), "Expected token :ident, got =");

        let (program, errors) = parse("let x = ;");
        assert!(program.statements.is_empty());
        assert_eq!(
            errors,
            vec![ParserError::NoPrefixFn(Token::new(TokenKind::Semicolon, ";"))]
        );
    }

    #[test]
    fn test_return_statements() {
        let (program, errors) = parse("return 10; return x; return 1 + 1");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(program.statements.len(), 3);
        assert_eq!(
            program.statements[0],
            Statement::Return {
                token: Token::new(TokenKind::Return, "return"),
                return_value: int(10),
            }
        );
        assert_eq!(program.to_string(), "return 10;\nreturn x;\nreturn (1 + 1);");
    }

    #[test]
    fn test_literal_expressions() {
        let (program, errors) = parse("foobar; 5; true; false;");
        assert!(errors.is_empty(), "{:?}", errors);
        let expressions: Vec<&Expression> = program
            .statements
            .iter()
            .map(|statement| match statement {
                Statement::Expression { expression, .. } => expression,
                other => panic!("expected expression statement, got {:?}", other),
            })
            .collect();
        assert_eq!(
            expressions,
            vec![
                &Expression::Identifier(ident("foobar")),
                &int(5),
                &boolean(true),
                &boolean(false),
            ]
        );
    }

    #[test]
    fn test_prefix_expressions() {
        let tests = [
            ("!5;", PrefixOperator::Not, int(5)),
            ("-15;", PrefixOperator::Neg, int(15)),
            ("!true;", PrefixOperator::Not, boolean(true)),
        ];
        for (input, operator, right) in tests {
            let expression = parse_single_expression(input);
            match expression {
                Expression::Prefix {
                    operator: op,
                    right: r,
                    ..
                } => {
                    assert_eq!(op, operator);
                    assert_eq!(*r, right);
                }
                other => panic!("expected prefix expression, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let tests = [
            ("5 + 5;", InfixOperator::Plus),
            ("5 - 5;", InfixOperator::Minus),
            ("5 * 5;", InfixOperator::Mul),
            ("5 / 5;", InfixOperator::Div),
            ("5 > 5;", InfixOperator::Gt),
            ("5 < 5;", InfixOperator::Lt),
            ("5 == 5;", InfixOperator::Eq),
            ("5 != 5;", InfixOperator::NotEq),
        ];
        for (input, operator) in tests {
            let expression = parse_single_expression(input);
            assert_eq!(expression, infix(int(5), operator, int(5)), "input: {}", input);
        }
    }

    #[test]
    fn test_operator_precedence_parsing() {
        let tests = [
            ("-a * b", "((-a) * b)"),
            ("-a + b", "((-a) + b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)\n((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            ("1 == 2 == 3", "((1 == 2) == 3)"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
        ];
        for (input, expected) in tests {
            let (program, errors) = parse(input);
            assert!(errors.is_empty(), "input: {}, errors: {:?}", input, errors);
            assert_eq!(program.to_string(), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_precedence_tree_shape() {
        assert_eq!(
            parse_single_expression("1 + 2 * 3"),
            infix(int(1), InfixOperator::Plus, infix(int(2), InfixOperator::Mul, int(3)))
        );
        assert_eq!(
            parse_single_expression("-1 * 2"),
            infix(prefix(PrefixOperator::Neg, int(1)), InfixOperator::Mul, int(2))
        );
        assert_eq!(
            parse_single_expression("1 - 2 - 3"),
            infix(infix(int(1), InfixOperator::Minus, int(2)), InfixOperator::Minus, int(3))
        );
    }

    #[test]
    fn test_node_tokens() {
        let expression = parse_single_expression("1 + 2");
        assert_eq!(expression.token(), &Token::new(TokenKind::Plus, "+"));

        let tests = [
            ("(7)", Token::new(TokenKind::Lparen, "(")),
            ("-a * b;", Token::new(TokenKind::Minus, "-")),
            ("(1 + 2) * 3;", Token::new(TokenKind::Lparen, "(")),
            ("x == y", Token::new(TokenKind::Ident, "x")),
            ("let z = 1;", Token::new(TokenKind::Let, "let")),
            ("return !true;", Token::new(TokenKind::Return, "return")),
        ];
        for (input, expected) in tests {
            let (program, errors) = parse(input);
            assert!(errors.is_empty(), "{:?}", errors);
            assert_eq!(program.statements[0].token(), &expected, "input: {}", input);
        }
    }

    #[test]
    fn test_signed_integer_literal_rejected() {
        for literal in ["-5", "+5", "1_000", ""] {
            let tokens = vec![Token::new(TokenKind::Int, literal), Token::eof()];
            let mut parser = Parser::new(tokens).unwrap();
            let program = parser.parse_program();
            assert!(program.statements.is_empty(), "literal: {:?}", literal);
            assert_eq!(
                parser.errors(),
                &[ParserError::ParseInt(literal.to_string())][..]
            );
        }
    }

    #[test]
    fn test_parser_errors_are_accumulated() {
        let (program, errors) = parse("let x 5; 1 + 2; ) ; 99999999999999999999; (1 + 2; let y = 3;");
        assert_eq!(program.to_string(), "(1 + 2)\nlet y = 3;");
        assert_eq!(
            errors,
            vec![
                ParserError::Expected {
                    expected: TokenKind::Assign,
                    actual: Token::new(TokenKind::Int, "5"),
                },
                ParserError::NoPrefixFn(Token::new(TokenKind::Rparen, ")")),
                ParserError::ParseInt("99999999999999999999".to_string()),
                ParserError::Expected {
                    expected: TokenKind::Rparen,
                    actual: Token::new(TokenKind::Semicolon, ";"),
                },
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        let mut parser = Parser::from_source("@; 1 +").unwrap();
        let program = parser.parse_program();
        assert!(program.statements.is_empty());
        assert_eq!(
            parser.error_messages(),
            vec![
                "No prefix function for token: ILLEGAL: @".to_string(),
                "No prefix function for token: EOF".to_string(),
            ]
        );
    }

    #[test]
    fn test_parser_construction() {
        assert_eq!(
            Parser::new(vec![Token::eof()]).unwrap_err(),
            ParserError::TooFewTokens(1)
        );
        assert_eq!(Parser::new(vec![]).unwrap_err(), ParserError::TooFewTokens(0));
        assert_eq!(
            Parser::new(vec![
                Token::new(TokenKind::Int, "1"),
                Token::new(TokenKind::Semicolon, ";"),
            ])
            .unwrap_err(),
            ParserError::MissingEof(Token::new(TokenKind::Semicolon, ";"))
        );
        assert!(Parser::from_source("").is_err());

        let mut parser = Parser::new(vec![Token::new(TokenKind::Int, "1"), Token::eof()]).unwrap();
        let program = parser.parse_program();
        check_parser_error(parser);
        assert_eq!(program.statements, vec![expression_statement(int(1))]);
    }

    #[test]
    fn test_round_trip() {
        let inputs = [
            "let x = 5; return -x * 2;",
            "1 + 2 * 3 - 4 / 5",
            "-1 * 2; !true == false",
            "a < b != c > d; (((a)))",
            "1 + (2 + (3 + 4)) * -(5 - 6)",
        ];
        for input in inputs {
            let (program, errors) = parse(input);
            assert!(errors.is_empty(), "{:?}", errors);
            let source = program.to_string();
            let (reparsed, errors) = parse(&source);
            assert!(errors.is_empty(), "{:?}", errors);
            assert_eq!(
                statement_bodies(&reparsed),
                statement_bodies(&program),
                "input: {}, printed: {}",
                input,
                source
            );
            assert_eq!(reparsed.to_string(), source);
        }
    }

    /*辅助函数*/
    fn parse(input: &str) -> (Program, Vec<ParserError>) {
        let mut parser = Parser::new(Lexer::new(input).tokenize())
            .unwrap_or_else(|err| panic!("invalid input {:?}: {}", input, err));
        let program = parser.parse_program();
        (program, parser.into_errors())
    }

    fn parse_single_expression(input: &str) -> Expression {
        let (program, errors) = parse(input);
        assert!(errors.is_empty(), "input: {}, errors: {:?}", input, errors);
        assert_eq!(program.statements.len(), 1, "input: {}", input);
        match program.statements.into_iter().next() {
            Some(Statement::Expression { expression, .. }) => expression,
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    fn check_parser_error(parser: Parser) {
        let errors = parser.errors();
        if !errors.is_empty() {
            panic!("parser has {} errors: {:?}", errors.len(), errors);
        }
    }

    fn ident(name: &str) -> Identifier {
        Identifier {
            token: Token::new(TokenKind::Ident, name),
            value: name.to_string(),
        }
    }

    fn int(value: i64) -> Expression {
        Expression::IntegerLiteral {
            token: Token::new(TokenKind::Int, value.to_string()),
            value,
        }
    }

    fn boolean(value: bool) -> Expression {
        let kind = if value { TokenKind::True } else { TokenKind::False };
        Expression::BooleanLiteral {
            token: Token::new(kind, value.to_string()),
            value,
        }
    }

    fn prefix(operator: PrefixOperator, right: Expression) -> Expression {
        let kind = match operator {
            PrefixOperator::Not => TokenKind::Bang,
            PrefixOperator::Neg => TokenKind::Minus,
        };
        Expression::Prefix {
            token: Token::new(kind, operator.to_string()),
            operator,
            right: Box::new(right),
        }
    }

    fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Expression {
        let kind = match operator {
            InfixOperator::Plus => TokenKind::Plus,
            InfixOperator::Minus => TokenKind::Minus,
            InfixOperator::Mul => TokenKind::Asterisk,
            InfixOperator::Div => TokenKind::Slash,
            InfixOperator::Gt => TokenKind::Gt,
            InfixOperator::Lt => TokenKind::Lt,
            InfixOperator::Eq => TokenKind::Eq,
            InfixOperator::NotEq => TokenKind::NotEq,
        };
        Expression::Infix {
            token: Token::new(kind, operator.to_string()),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// 去掉语句自身的token; 重新打印后表达式语句的开头可能变成`(`
    fn statement_bodies(program: &Program) -> Vec<(Option<&Identifier>, &Expression)> {
        program
            .statements
            .iter()
            .map(|statement| match statement {
                Statement::Let { name, value, .. } => (Some(name), value),
                Statement::Return { return_value, .. } => (None, return_value),
                Statement::Expression { expression, .. } => (None, expression),
            })
            .collect()
    }

    fn expression_statement(expression: Expression) -> Statement {
        Statement::Expression {
            token: expression.token().clone(),
            expression,
        }
    }
}
