use color_print::cprintln;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Error,
    Warn,
    Note,
}

/// Diagnostic attached to a source line.
#[derive(Debug, Clone)]
pub struct Msg {
    kind: MsgKind,
    msg: String,
    file: String,
    line_no: usize,
    raw: String,
}

impl Msg {
    pub fn error(msg: String, file: &str, line_idx: usize, raw: &str) -> Self {
        Msg::new(MsgKind::Error, msg, file, line_idx, raw)
    }
    pub fn warn(msg: String, file: &str, line_idx: usize, raw: &str) -> Self {
        Msg::new(MsgKind::Warn, msg, file, line_idx, raw)
    }
    pub fn note(msg: String, file: &str, line_idx: usize, raw: &str) -> Self {
        Msg::new(MsgKind::Note, msg, file, line_idx, raw)
    }

    fn new(kind: MsgKind, msg: String, file: &str, line_idx: usize, raw: &str) -> Self {
        Msg {
            kind,
            msg,
            file: file.to_string(),
            line_no: line_idx + 1,
            raw: raw.to_string(),
        }
    }

    pub fn kind(&self) -> MsgKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.msg
    }

    /// 1-based line number.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn print(&self) {
        match self.kind {
            MsgKind::Error => cprintln!("<red,bold>error</>: {}", self.msg),
            MsgKind::Warn => cprintln!("<yellow,bold>warn</>: {}", self.msg),
            MsgKind::Note => cprintln!("<green,bold>note</>: {}", self.msg),
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", self.file, self.line_no);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", self.line_no, self.raw);
        cprintln!("      <blue>|</>");
    }
}

pub fn dump(msgs: &[Msg]) {
    for msg in msgs {
        msg.print();
    }
}

pub fn has_error(msgs: &[Msg]) -> bool {
    msgs.iter().any(|msg| msg.kind == MsgKind::Error)
}
