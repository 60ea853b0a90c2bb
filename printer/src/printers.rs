use crate::config::Config;
use crate::error::Error;
use crate::listing::{Listing, Stmt};
use crate::writer::{CommentStyle, Writer};

/// Turns a listing into the bytes of a generated file.
pub trait Printer {
    fn print(&self, listing: &Listing) -> Result<Vec<u8>, Error>;
}

pub type Builder = fn(Config) -> Box<dyn Printer>;

pub fn print_all(
    builders: &[Builder],
    cfg: &Config,
    listing: &Listing,
) -> Result<Vec<Vec<u8>>, Error> {
    builders
        .iter()
        .map(|build| build(cfg.clone()).print(listing))
        .collect()
}

// ----------------------------------------------------------------------------
// Assembly source

pub struct AsmPrinter {
    cfg: Config,
}

impl AsmPrinter {
    pub fn new(cfg: Config) -> Self {
        AsmPrinter { cfg }
    }

    pub fn builder(cfg: Config) -> Box<dyn Printer> {
        Box::new(Self::new(cfg))
    }
}

impl Printer for AsmPrinter {
    fn print(&self, listing: &Listing) -> Result<Vec<u8>, Error> {
        let mut w = Writer::new(CommentStyle::Semicolon);
        w.generated_header(&self.cfg);
        for line in listing.lines() {
            let body = match &line.stmt {
                Some(Stmt::Label(key)) => format!("{}:", key),
                Some(Stmt::Static(key, val)) => format!("@0x{:04X} {}", val, key),
                Some(Stmt::Const(key, val)) => format!("#0x{:04X} {}", val, key),
                Some(Stmt::Code(text)) => format!("    {}", text),
                None => String::new(),
            };
            match (&line.comment, body.is_empty()) {
                (Some(comment), true) => w.comment(comment),
                (Some(comment), false) => w.printf(format_args!("{} ; {}\n", body, comment)),
                (None, _) => w.printf(format_args!("{}\n", body)),
            }
        }
        w.result()
    }
}

// ----------------------------------------------------------------------------
// Symbol table

pub struct SymbolPrinter {
    cfg: Config,
}

impl SymbolPrinter {
    pub fn new(cfg: Config) -> Self {
        SymbolPrinter { cfg }
    }

    pub fn builder(cfg: Config) -> Box<dyn Printer> {
        Box::new(Self::new(cfg))
    }

    fn qualify(&self, name: &str) -> String {
        if self.cfg.pkg.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.cfg.pkg, name)
        }
    }
}

impl Printer for SymbolPrinter {
    fn print(&self, listing: &Listing) -> Result<Vec<u8>, Error> {
        let mut w = Writer::new(CommentStyle::Hash);
        w.generated_header(&self.cfg);
        for (name, sym) in listing.symbols() {
            w.printf(format_args!(
                "{} {} 0x{:04X}\n",
                self.qualify(name),
                sym.kind,
                sym.value
            ));
        }
        w.result()
    }
}
