use super::ident::{is_identifier_continue, is_identifier_start};
use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    GrinLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_grin_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_grin_digit(c: char) -> bool {
    c.is_ascii_digit()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_grin_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        if let Some('-') = self.chars().peek() {
            s.push('-');
            self.chars().next();
        }
        while let Some(pk) = self.chars().peek() {
            let ch = *pk;
            if is_grin_digit(ch) {
                s.push(ch);
            } else if ch == '.' && !decimal {
                decimal = true;
                s.push(ch);
            } else {
                break;
            }
            self.chars().next();
        }
        if decimal {
            Some(Token::Literal(Literal::Real(s)))
        } else {
            Some(Token::Literal(Literal::Integer(s)))
        }
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().next() {
                Some('"') => return Some(Token::Literal(Literal::String(s))),
                Some(ch) => s.push(ch),
                None => {
                    s.insert(0, '"');
                    return Some(Token::Unknown(s));
                }
            }
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_identifier_continue(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        match Word::from_string(&s) {
            Some(word) => Some(Token::Word(word)),
            None => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let mut s = ch.to_string();
        if let Some(pk) = self.chars().peek() {
            let mut pair = s.clone();
            pair.push(*pk);
            if let Some(t) = Token::from_string(&pair) {
                self.chars().next();
                return Some(t);
            }
        }
        if let Some(t) = Token::from_string(&s) {
            return Some(t);
        }
        match ch {
            ':' => Some(Token::Colon),
            '.' => Some(Token::Dot),
            _ => {
                while let Some(pk) = self.chars().peek() {
                    if is_grin_whitespace(*pk) {
                        break;
                    }
                    s.push(*pk);
                    self.chars().next();
                }
                Some(Token::Unknown(s))
            }
        }
    }
}

struct GrinLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for GrinLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for GrinLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let pk = *self.chars.peek()?;
        if is_grin_digit(pk) {
            return self.number();
        }
        if pk == '-' {
            let mut ahead = self.chars.clone();
            ahead.next();
            if let Some(ch) = ahead.peek() {
                if is_grin_digit(*ch) {
                    return self.number();
                }
            }
        }
        if is_identifier_start(pk) {
            return self.alphabetic();
        }
        if pk == '"' {
            return self.string();
        }
        self.minutia()
    }
}
