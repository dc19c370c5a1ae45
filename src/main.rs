use clap::Parser;
use grammarkit::{copy, EbnfWriter, ProductionTable, ResolutionOption};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve a grammar document, reporting missing and unused productions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a `.ron` or `.json` grammar document
    grammar: PathBuf,
    /// Don't require a production named after the language; every production of the language
    /// is a root instead
    #[arg(long)]
    rootless: bool,
    /// Don't warn about unused productions
    #[arg(long)]
    skip_unused: bool,
    /// Order the productions by name instead of by definition
    #[arg(long)]
    sorted: bool,
    /// Print the resolved grammar
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut options = Vec::new();
    if args.rootless {
        options.push(ResolutionOption::AllowRootless);
    }
    if args.skip_unused {
        options.push(ResolutionOption::SkipUnusedProductions);
    }

    let table = ProductionTable::load(&args.grammar)?;
    let grammar = if args.sorted {
        table.resolve(copy::sorted, &options)?
    } else {
        table.resolve(copy::identity, &options)?
    };
    println!("{}: {} productions", grammar, grammar.len());

    if args.print {
        let mut writer = EbnfWriter::new(String::new());
        grammar.accept(&mut writer)?;
        print!("{}", writer.into_inner());
    }
    Ok(())
}
