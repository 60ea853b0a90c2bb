use clap::Parser;
use color_print::cprintln;
use printer::{msg, AsmPrinter, Builder, Config, Error, Listing, SymbolPrinter};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(default_value = "main.rk")]
    input: Vec<String>,

    /// Output file
    #[clap(short, long, default_value = "main.gen.rk")]
    output: String,

    /// Also write the symbol table to this file
    #[clap(short, long)]
    symbols: Option<String>,

    /// Generator name
    #[clap(short, long)]
    name: Option<String>,

    /// Namespace for symbol names
    #[clap(short, long)]
    pkg: Option<String>,

    /// YAML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Do not record the command line in the generated header
    #[clap(long)]
    no_argv: bool,

    /// Dump parsed listing
    #[clap(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!("RK16 Generated-File Printer by kanade-k-1228");

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn config(args: &Args) -> Result<Config, Error> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::new_default(),
    };
    if let Some(name) = &args.name {
        cfg.name = name.clone();
    }
    if let Some(pkg) = &args.pkg {
        cfg.pkg = pkg.clone();
    }
    cfg.argv = if args.no_argv {
        vec![]
    } else {
        Config::from_env().argv
    };
    Ok(cfg)
}

fn run(args: &Args) -> Result<ExitCode, Error> {
    let cfg = config(args)?;

    println!("1. Read Files and Parse Lines");
    let mut listing = Listing::new();
    let mut msgs = vec![];
    for path in &args.input {
        println!("  < {}", path);
        let file = File::open(path).map_err(|e| Error::FileOpen(path.clone(), e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::FileRead)?;
        msgs.extend(listing.add_file(path, &lines));
    }
    msg::dump(&msgs);
    if msg::has_error(&msgs) {
        cprintln!("<red,bold>error</>: aborting due to previous error");
        return Ok(ExitCode::FAILURE);
    }

    if args.dump {
        listing.dump();
    }

    println!("2. Print Generated Files");
    println!("  * {}", cfg.generated_warning());
    let asm: Builder = AsmPrinter::builder;
    let mut targets: Vec<(&String, Builder)> = vec![(&args.output, asm)];
    if let Some(path) = &args.symbols {
        let symbols: Builder = SymbolPrinter::builder;
        targets.push((path, symbols));
    }
    let builders: Vec<Builder> = targets.iter().map(|(_, build)| *build).collect();
    let outputs = printer::printers::print_all(&builders, &cfg, &listing)?;

    for ((path, _), bytes) in targets.iter().zip(outputs) {
        println!("  > {}", path);
        let mut file = File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
        file.write_all(&bytes)
            .map_err(|e| Error::FileWrite(path.to_string(), e))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn report(err: &Error) {
    cprintln!("<red,bold>error</>: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        cprintln!("  <blue>caused by</>: {}", cause);
        source = std::error::Error::source(cause);
    }
}
