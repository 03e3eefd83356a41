use crate::core::lexer::{is_digit, is_letter, Lexer};
use crate::core::token::{Token, TokenKind};

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            read_position: 0,
            ch: None,
            finished: false,
        };
        lexer.read_char();
        lexer
    }
    /// 读取Token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let ch = match self.ch {
            Some(ch) => ch,
            None => return Token::eof(),
        };
        let kind = match ch {
            '(' => TokenKind::Lparen,
            ')' => TokenKind::Rparen,
            '{' => TokenKind::Lbrace,
            '}' => TokenKind::Rbrace,

            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '>' => TokenKind::Gt,
            '<' => TokenKind::Lt,
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    self.read_char();
                    return Token::new(TokenKind::NotEq, "!=");
                }
                TokenKind::Bang
            }
            '=' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    self.read_char();
                    return Token::new(TokenKind::Eq, "==");
                }
                TokenKind::Assign
            }
            c => {
                return if is_letter(c) {
                    let id = self.read_while(|c| is_letter(c) || is_digit(c));
                    Token::new(TokenKind::lookup_ident(&id), id)
                } else if is_digit(c) {
                    let num = self.read_while(is_digit);
                    Token::new(TokenKind::Int, num)
                } else {
                    self.read_char();
                    Token::new(TokenKind::Illegal, c.to_string())
                };
            }
        };
        self.read_char();
        Token::new(kind, ch.to_string())
    }
    /// 读完全部输入, 结果以唯一的Eof结尾
    pub fn tokenize(self) -> Vec<Token> {
        let mut tokens: Vec<Token> = self.collect();
        if tokens.last().map_or(true, |tk| !tk.is(TokenKind::Eof)) {
            tokens.push(Token::eof());
        }
        tokens
    }
    //读取满足条件的连续字符
    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.ch.filter(|&ch| accept(ch)) {
            text.push(ch);
            self.read_char();
        }
        text
    }
    //忽略空格
    fn skip_whitespace(&mut self) {
        while self.ch.map_or(false, |ch| ch.is_ascii_whitespace()) {
            self.read_char();
        }
    }
    //读取一个字符, 到末尾后一直是None
    fn read_char(&mut self) {
        self.ch = self.chars.get(self.read_position).copied();
        if self.read_position < self.chars.len() {
            self.read_position += 1;
        }
    }
    //查看字符
    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.read_position).copied()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}
