mod r#impl;

/// 把源码切成Token流, 最后总是以一个Eof结尾
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    /// 下一个要读的字符下标
    read_position: usize,
    /// 当前字符, 读完输入后为None
    ch: Option<char>,
    finished: bool,
}

fn is_letter(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
