use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;

/// Generator name used when nothing else identifies the tool.
pub const DEFAULT_NAME: &str = "avo";

/// Metadata describing who produced a generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Command invocation that produced the output, program name first.
    pub argv: Vec<String>,
    /// Name of the generating tool.
    pub name: String,
    /// Namespace for emitted symbols. Empty means unqualified.
    pub pkg: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            argv: vec![],
            name: DEFAULT_NAME.to_string(),
            pkg: String::new(),
        }
    }
}

impl Config {
    pub fn new_default() -> Self {
        Self::default()
    }

    /// Record a command invocation. The program path is cut down to its file name.
    pub fn from_argv<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv: Vec<String> = args.into_iter().map(Into::into).collect();
        if let Some(prog) = argv.first_mut() {
            if let Some(base) = Path::new(prog.as_str()).file_name() {
                *prog = base.to_string_lossy().into_owned();
            }
        }
        Config {
            argv,
            ..Self::default()
        }
    }

    /// Like `from_argv`, but arguments that are not UTF-8 are converted lossily.
    pub fn from_args_os<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::from_argv(args.into_iter().map(|arg| arg.to_string_lossy().into_owned()))
    }

    pub fn from_env() -> Self {
        Self::from_args_os(std::env::args_os())
    }

    /// Read a YAML config. Missing keys keep their defaults, unknown keys are rejected.
    pub fn load(path: &str) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Config(path.to_string(), e))
    }

    /// Identity of the generator: the command if one was recorded, otherwise the name.
    pub fn generated_by(&self) -> String {
        if !self.argv.is_empty() {
            return format!("command: {}", self.argv.join(" "));
        }
        if !self.name.is_empty() {
            return self.name.clone();
        }
        DEFAULT_NAME.to_string()
    }

    /// One-line marker for generated files, without comment syntax or newline.
    pub fn generated_warning(&self) -> String {
        format!("Code generated by {}. DO NOT EDIT.", self.generated_by())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_path_is_trimmed() {
        let cfg = Config::from_argv(["/usr/local/bin/rkgen", "-o", "out/main.gen.rk"]);
        assert_eq!(cfg.argv, vec!["rkgen", "-o", "out/main.gen.rk"]);
        assert_eq!(cfg.name, DEFAULT_NAME);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_arguments_are_kept() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("/bin/rkgen"),
            OsString::from_vec(vec![b'o', 0xFF, b'k']),
        ];
        let cfg = Config::from_args_os(args);
        assert_eq!(cfg.argv, vec!["rkgen".to_string(), "o\u{FFFD}k".to_string()]);
    }

    #[test]
    fn empty_argv_keeps_name() {
        let cfg = Config::from_argv(Vec::<String>::new());
        assert!(cfg.argv.is_empty());
        assert_eq!(cfg.generated_by(), "avo");
    }
}
