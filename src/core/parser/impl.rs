use log::{debug, info, trace};

use crate::core::{
    ast::{Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement},
    lexer::Lexer,
    parser::{InfixParseFn, ParseResult, Parser, ParserError, Precedence, PrefixParseFn},
    token::{Token, TokenKind},
};

impl Parser {
    /// 从Token序列构建Parser
    ///
    /// 至少需要两个Token, 并且最后一个必须是Eof
    pub fn new(tokens: Vec<Token>) -> ParseResult<Parser> {
        if tokens.len() < 2 {
            return Err(ParserError::TooFewTokens(tokens.len()));
        }
        if let Some(last) = tokens.last().filter(|tk| !tk.is(TokenKind::Eof)) {
            return Err(ParserError::MissingEof(last.clone()));
        }
        info!("Parser created with {} tokens", tokens.len());
        Ok(Parser {
            tokens,
            position: 0,
            errors: vec![],
        })
    }
    /// 从字符串构建Parser
    pub fn from_source(input: &str) -> ParseResult<Parser> {
        Parser::new(Lexer::new(input).tokenize())
    }
    /// 解析程序
    ///
    /// 出错的语句会被丢弃, 错误被记录, 然后跳到下一个`;`继续
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];
        while self.has_next() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    debug!("parse error: {}", err);
                    self.errors.push(err);
                    self.synchronize();
                }
            }
            self.next_token();
        }
        info!(
            "Parsed {} statements with {} errors",
            statements.len(),
            self.errors.len()
        );
        Program { statements }
    }
    /// 当前Token
    fn token(&self) -> &Token {
        &self.tokens[self.position]
    }
    /// 下一个Token, 到末尾后一直是Eof
    fn peek_token(&self) -> &Token {
        let index = (self.position + 1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }
    /// 读取下一个Token
    fn next_token(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }
    /// 丢掉当前语句剩下的Token
    fn synchronize(&mut self) {
        while !self.token().is(TokenKind::Semicolon) && self.has_next() {
            self.next_token();
        }
        trace!("synchronized at {}", self.token());
    }
    /// 解析语句
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        trace!("parse statement at {}", self.token());
        match self.token().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }
    /// 解析let语句
    ///
    /// let identifier = expression;
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        // cur_token is let
        let token = self.token().clone();
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier {
            token: self.token().clone(),
            value: self.token().literal.clone(),
        };
        // expect '=' then eat ident
        self.expect_peek(TokenKind::Assign)?;
        self.next_token(); //eat =
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Let { token, name, value })
    }
    /// 解析return语句
    ///
    /// return expr;
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let token = self.token().clone();
        self.next_token(); //eat return
        let return_value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Return {
            token,
            return_value,
        })
    }
    /// 解析表达式语句
    ///
    /// expr;  token是表达式开头的那个token
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let token = self.token().clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Expression { token, expression })
    }
    /// 解析表达式
    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult {
        let prefix = Parser::prefix_parse_fn(self.token().kind)
            .ok_or_else(|| ParserError::NoPrefixFn(self.token().clone()))?;
        let mut left_expr = prefix(self)?;
        while !self.peek_token().is(TokenKind::Semicolon) {
            match Parser::infix_parse_fn(self.peek_token().kind) {
                Some((op_precedence, operator, infix)) if precedence < op_precedence => {
                    self.next_token();
                    left_expr = infix(self, left_expr, op_precedence, operator)?;
                }
                _ => break,
            }
        }
        Ok(left_expr)
    }
    ///解析分组表达式
    fn parse_grouped_expression(&mut self) -> ParseResult {
        self.next_token(); // eat (
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Rparen)?;
        Ok(expr)
    }

    /*前缀表达式相关*/
    /// 解析`!`表达式
    fn parse_not_expression(&mut self) -> ParseResult {
        self.parse_prefix_expression(PrefixOperator::Not)
    }
    /// 解析`-`表达式
    fn parse_neg_expression(&mut self) -> ParseResult {
        self.parse_prefix_expression(PrefixOperator::Neg)
    }
    /// 解析前缀表达式, 操作数的优先级高于所有二元操作符
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> ParseResult {
        let token = self.token().clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        })
    }
    /// 前缀表达式函数
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn> {
        match kind {
            TokenKind::Ident => Some(Parser::parse_identifier),
            TokenKind::Int => Some(Parser::parse_integer_literal),
            TokenKind::True | TokenKind::False => Some(Parser::parse_boolean),

            TokenKind::Bang => Some(Parser::parse_not_expression),
            TokenKind::Minus => Some(Parser::parse_neg_expression),

            TokenKind::Lparen => Some(Parser::parse_grouped_expression),

            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Rparen
            | TokenKind::Lbrace
            | TokenKind::Rbrace
            | TokenKind::Let
            | TokenKind::Return => None,
        }
    }

    /*中缀表达式相关*/
    /// 解析中缀表达式, 右边用操作符自己的优先级, 所以是左结合
    fn parse_infix_expression(
        &mut self,
        left: Expression,
        precedence: Precedence,
        operator: InfixOperator,
    ) -> ParseResult {
        let token = self.token().clone();
        self.next_token(); //eat op
        let right = self.parse_expression(precedence)?;
        Ok(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
    ///中缀表达式函数, 连同优先级和操作符
    fn infix_parse_fn(kind: TokenKind) -> Option<(Precedence, InfixOperator, InfixParseFn)> {
        let infix: InfixParseFn = Parser::parse_infix_expression;
        match kind {
            TokenKind::Eq => Some((Precedence::Equals, InfixOperator::Eq, infix)),
            TokenKind::NotEq => Some((Precedence::Equals, InfixOperator::NotEq, infix)),
            TokenKind::Lt => Some((Precedence::LessGreater, InfixOperator::Lt, infix)),
            TokenKind::Gt => Some((Precedence::LessGreater, InfixOperator::Gt, infix)),
            TokenKind::Plus => Some((Precedence::Sum, InfixOperator::Plus, infix)),
            TokenKind::Minus => Some((Precedence::Sum, InfixOperator::Minus, infix)),
            TokenKind::Slash => Some((Precedence::Product, InfixOperator::Div, infix)),
            TokenKind::Asterisk => Some((Precedence::Product, InfixOperator::Mul, infix)),

            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Assign
            | TokenKind::Bang
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Lparen
            | TokenKind::Rparen
            | TokenKind::Lbrace
            | TokenKind::Rbrace
            | TokenKind::Let
            | TokenKind::Return => None,
        }
    }

    /*基本解析*/
    /// 解析标识符
    fn parse_identifier(&mut self) -> ParseResult {
        let token = self.token().clone();
        Ok(Expression::Identifier(Identifier {
            value: token.literal.clone(),
            token,
        }))
    }
    /// 解析整型字面量
    fn parse_integer_literal(&mut self) -> ParseResult {
        let token = self.token().clone();
        // 只接受纯数字, 符号由前缀表达式表示
        let digits_only =
            !token.literal.is_empty() && token.literal.bytes().all(|b| b.is_ascii_digit());
        match token.literal.parse() {
            Ok(value) if digits_only => Ok(Expression::IntegerLiteral { token, value }),
            _ => Err(ParserError::ParseInt(token.literal)),
        }
    }
    ///解析布尔值
    fn parse_boolean(&mut self) -> ParseResult {
        let token = self.token().clone();
        let value = token.is(TokenKind::True);
        Ok(Expression::BooleanLiteral { token, value })
    }

    /*其他*/
    /// 断言下一个Token是期待值, 是的话前进一步
    fn expect_peek(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.peek_token().is(expected) {
            self.next_token();
            Ok(())
        } else {
            Err(ParserError::Expected {
                expected,
                actual: self.peek_token().clone(),
            })
        }
    }
    /// 可选的`;`
    fn skip_semicolon(&mut self) {
        if self.peek_token().is(TokenKind::Semicolon) {
            self.next_token(); //eat ;
        }
    }
    /// 判断是否还有Token
    fn has_next(&self) -> bool {
        !self.token().is(TokenKind::Eof)
    }
    /// 返回错误信息
    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }
    /// 错误信息的文本形式, 按记录顺序
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|err| err.to_string()).collect()
    }
    pub fn into_errors(self) -> Vec<ParserError> {
        self.errors
    }
}
