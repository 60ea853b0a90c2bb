use color_print::cformat;
use indexmap::IndexMap;
use strum::Display;

use crate::error::Error;
use crate::msg::Msg;

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Label(String),
    Static(String, u16),
    Const(String, u16),
    /// Operation text, kept as written apart from whitespace.
    Code(String),
}

impl Stmt {
    pub fn parse(code: &str) -> Result<Option<Stmt>, Error> {
        let words: Vec<&str> = code.split_whitespace().collect();
        let Some((head, rest)) = words.split_first() else {
            return Ok(None);
        };

        // @0x0123 hoge
        if let Some(value) = head.strip_prefix('@') {
            let name = symbol_name(rest)?;
            return Ok(Some(Stmt::Static(name, parse_number(value)?)));
        }
        // #0x0123 hoge
        if let Some(value) = head.strip_prefix('#') {
            let name = symbol_name(rest)?;
            return Ok(Some(Stmt::Const(name, parse_number(value)?)));
        }
        // main:
        if let Some(label) = head.strip_suffix(':') {
            if rest.is_empty() && !label.is_empty() {
                return Ok(Some(Stmt::Label(label.to_string())));
            }
        }

        Ok(Some(Stmt::Code(words.join(" "))))
    }

    pub fn cformat(&self) -> String {
        match self {
            Stmt::Label(key) => cformat!("<g>{}:</>", key),
            Stmt::Static(key, val) => cformat!("<c>@0x{:04X} {}</>", val, key),
            Stmt::Const(key, val) => cformat!("<y>#0x{:04X} {}</>", val, key),
            Stmt::Code(text) => cformat!("    <red>{}</>", text),
        }
    }
}

fn symbol_name(words: &[&str]) -> Result<String, Error> {
    match words {
        [] => Err(Error::MissingArgument),
        [name] => Ok(name.to_string()),
        [_, extra, ..] => Err(Error::TrailingArgument(extra.to_string())),
    }
}

pub fn parse_number(s: &str) -> Result<u16, Error> {
    let (num, radix) = match s.get(0..2) {
        Some("0b") => (&s[2..], 2),
        Some("0o") => (&s[2..], 8),
        Some("0x") => (&s[2..], 16),
        _ => (s, 10),
    };
    u16::from_str_radix(num, radix).map_err(|e| Error::ParseNumber(s.to_string(), e))
}

// ----------------------------------------------------------------------------
// Symbols

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SymbolKind {
    Code,
    Static,
    Const,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// (file, 0-based line index)
    pub location: (String, usize),
    pub kind: SymbolKind,
    pub value: u16,
}

// ----------------------------------------------------------------------------
// Listing

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub file: String,
    pub idx: usize,
    pub raw: String,
    pub stmt: Option<Stmt>,
    pub comment: Option<String>,
    /// Address of code statements.
    pub pc: Option<u16>,
}

#[derive(Debug, Clone, Default)]
pub struct Listing {
    lines: Vec<Line>,
    symbols: IndexMap<String, Symbol>,
    pc: usize,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<S: AsRef<str>>(path: &str, lines: &[S]) -> (Listing, Vec<Msg>) {
        let mut listing = Listing::new();
        let msgs = listing.add_file(path, lines);
        (listing, msgs)
    }

    /// Append a file. Code addresses continue from the previous file.
    pub fn add_file<S: AsRef<str>>(&mut self, path: &str, lines: &[S]) -> Vec<Msg> {
        let mut msgs = vec![];
        for (idx, raw) in lines.iter().enumerate() {
            let raw = raw.as_ref();
            let (code, comment) = match raw.split_once(';') {
                Some((code, comment)) => (code, Some(comment.trim().to_string())),
                None => (raw, None),
            };

            let stmt = match Stmt::parse(code) {
                Ok(stmt) => stmt,
                Err(err) => {
                    msgs.push(Msg::error(err.to_string(), path, idx, raw));
                    None
                }
            };

            // Addresses past the 16-bit space are reported, not wrapped.
            let addr = u16::try_from(self.pc).map_err(|_| Error::AddressOverflow(self.pc));
            let mut pc = None;
            let symbol = match &stmt {
                Some(Stmt::Code(_)) => {
                    match addr {
                        Ok(addr) => pc = Some(addr),
                        Err(err) => msgs.push(Msg::error(err.to_string(), path, idx, raw)),
                    }
                    self.pc += 1;
                    None
                }
                Some(Stmt::Label(key)) => match addr {
                    Ok(addr) => Some((key, SymbolKind::Code, addr)),
                    Err(err) => {
                        msgs.push(Msg::error(err.to_string(), path, idx, raw));
                        None
                    }
                },
                Some(Stmt::Static(key, val)) => Some((key, SymbolKind::Static, *val)),
                Some(Stmt::Const(key, val)) => Some((key, SymbolKind::Const, *val)),
                None => None,
            };

            if let Some((key, kind, value)) = symbol {
                let symbol = Symbol {
                    location: (path.to_string(), idx),
                    kind,
                    value,
                };
                if let Some(prev) = self.symbols.insert(key.clone(), symbol) {
                    msgs.push(Msg::warn(format!("Re-defined label: `{}`", key), path, idx, raw));
                    let (file, line_idx) = &prev.location;
                    let prev_raw = self
                        .lines
                        .iter()
                        .find(|l| &l.file == file && l.idx == *line_idx)
                        .map(|l| l.raw.as_str())
                        .unwrap_or("");
                    msgs.push(Msg::note(
                        "Already defined here. The value has been overridden.".to_string(),
                        file,
                        *line_idx,
                        prev_raw,
                    ));
                }
            }

            self.lines.push(Line {
                file: path.to_string(),
                idx,
                raw: raw.to_string(),
                stmt,
                comment,
                pc,
            });
        }
        msgs
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn symbols(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.symbols.iter()
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|sym| sym.value)
    }

    /// Number of code statements.
    pub fn len(&self) -> usize {
        self.pc
    }

    pub fn is_empty(&self) -> bool {
        self.pc == 0
    }

    pub fn dump(&self) {
        let mut current: Option<&str> = None;
        for line in &self.lines {
            if current != Some(line.file.as_str()) {
                current = Some(line.file.as_str());
                println!(
                    "{}+------[{}]{}",
                    "-".repeat(7),
                    line.file,
                    "-".repeat(45usize.saturating_sub(line.file.len()))
                );
            }
            let pc = line
                .pc
                .map(|pc| format!("[{:04X}]", pc))
                .unwrap_or_default();
            let body = line.stmt.as_ref().map(Stmt::cformat).unwrap_or_default();
            let comment = line
                .comment
                .as_ref()
                .map(|c| cformat!(" <dim>;{}</>", c))
                .unwrap_or_default();
            println!("{:7}| {:>4}: {}{}", pc, line.idx + 1, body, comment);
        }
        println!("-------+-----------------------------------------------------");
    }
}
