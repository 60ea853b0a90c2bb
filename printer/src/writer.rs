use std::fmt::Write as _;
use strum::{Display, EnumString};

use crate::config::Config;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CommentStyle {
    Semicolon,
    Slash,
    Hash,
}

impl CommentStyle {
    pub fn prefix(&self) -> &'static str {
        match self {
            CommentStyle::Semicolon => "; ",
            CommentStyle::Slash => "// ",
            CommentStyle::Hash => "# ",
        }
    }
}

/// Text buffer for printers. The first error sticks and silences later writes.
#[derive(Debug)]
pub struct Writer {
    buf: String,
    style: CommentStyle,
    err: Option<Error>,
}

impl Writer {
    pub fn new(style: CommentStyle) -> Self {
        Writer {
            buf: String::new(),
            style,
            err: None,
        }
    }

    pub fn printf(&mut self, args: std::fmt::Arguments) {
        if self.err.is_some() {
            return;
        }
        if let Err(e) = self.buf.write_fmt(args) {
            self.add_error(Error::Format(e));
        }
    }

    pub fn nl(&mut self) {
        self.printf(format_args!("\n"));
    }

    pub fn comment(&mut self, line: &str) {
        let prefix = self.style.prefix();
        self.printf(format_args!("{}{}\n", prefix, line));
    }

    pub fn comment_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            self.comment(line.as_ref());
        }
    }

    pub fn generated_header(&mut self, cfg: &Config) {
        self.comment(&cfg.generated_warning());
        self.nl();
    }

    pub fn add_error(&mut self, err: Error) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    pub fn result(self) -> Result<Vec<u8>, Error> {
        match self.err {
            Some(e) => Err(e),
            None => Ok(self.buf.into_bytes()),
        }
    }
}
