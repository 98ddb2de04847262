use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;

use spelldict::dictionary::Dictionary;
use spelldict::speller::{self, CheckReport};
use spelldict::tokenizer::Tokenize;

trait ReportWriter {
    fn write_report(&mut self, report: &CheckReport) -> anyhow::Result<()>;
}

struct StdoutWriter;

impl ReportWriter for StdoutWriter {
    fn write_report(&mut self, report: &CheckReport) -> anyhow::Result<()> {
        for line in &report.lines {
            println!("{}", line);
        }
        Ok(())
    }
}

struct JsonWriter;

impl ReportWriter for JsonWriter {
    fn write_report(&mut self, report: &CheckReport) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(report)?);
        Ok(())
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(no_short, long = "json", help = "render the check report as JSON")]
    use_json: bool,

    #[options(
        free,
        help = "dictionary file, then an optional file to spell check"
    )]
    inputs: Vec<PathBuf>,
}

/// Interactive command loop. Owns the one live dictionary; `load`
/// replaces it wholesale on success and keeps the old one on failure.
struct Shell {
    dictionary: Dictionary,
}

impl Shell {
    fn new(dictionary: Dictionary) -> Shell {
        Shell { dictionary }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        print_banner();

        let mut stdin = io::stdin().lock();
        let mut line = String::new();

        loop {
            print!("spelldict> ");
            io::stdout().flush()?;

            line.clear();
            if stdin.read_line(&mut line)? == 0 {
                println!();
                break;
            }

            let mut tokens = line.tokens();
            let command = match tokens.next() {
                Some(v) => v,
                None => continue,
            };

            match (command, tokens.next()) {
                ("exit", _) => break,
                ("add", Some(word)) => match self.dictionary.insert(word) {
                    Ok(()) => {}
                    Err(e) => println!("{}", e),
                },
                ("lookup", Some(word)) => {
                    if self.dictionary.contains(word) {
                        println!("'{}' present in dictionary", word);
                    } else {
                        println!("'{}' not found", word);
                    }
                }
                ("print", _) => {
                    for word in self.dictionary.words() {
                        println!("{}", word);
                    }
                }
                ("load", Some(path)) => match Dictionary::read_from_path(path) {
                    Ok(dictionary) => {
                        self.dictionary = dictionary;
                        println!("Dictionary successfully read from text file");
                    }
                    Err(e) => println!("Failed to read dictionary from text file: {}", e),
                },
                ("save", Some(path)) => match self.dictionary.write_to_path(path) {
                    Ok(()) => println!("Dictionary successfully written to text file"),
                    Err(e) => println!("Failed to write dictionary to text file: {}", e),
                },
                ("check", Some(path)) => {
                    match speller::check_path(Some(&self.dictionary), path) {
                        Ok(report) => StdoutWriter.write_report(&report)?,
                        Err(e) => println!("Spell check failed: {}", e),
                    }
                }
                ("add" | "lookup" | "load" | "save" | "check", None) => {
                    println!("usage: {} <argument>", command);
                }
                _ => println!("Unknown command {}", command),
            }
        }

        Ok(())
    }
}

fn print_banner() {
    println!("spelldict spell check system");
    println!("Commands:");
    println!("  add <word>:        adds a new word to dictionary");
    println!("  lookup <word>:     searches for a word");
    println!("  print:             shows all words currently in the dictionary");
    println!("  load <file_name>:  reads in dictionary from a file");
    println!("  save <file_name>:  writes dictionary to a file");
    println!("  check <file_name>: spell checks the specified file");
    println!("  exit:              exits the program");
}

fn check_once(dictionary: &Dictionary, target: &Path, use_json: bool) -> anyhow::Result<bool> {
    let report = speller::check_path(Some(dictionary), target)
        .with_context(|| format!("failed to spell check {}", target.display()))?;

    let mut writer: Box<dyn ReportWriter> = if use_json {
        Box::new(JsonWriter)
    } else {
        Box::new(StdoutWriter)
    };
    writer.write_report(&report)?;

    Ok(report.all_correct)
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();
    let mut inputs = args.inputs.into_iter();

    // A failed startup load halts the process; a failed `load` inside
    // the shell only reports.
    let dictionary = match inputs.next() {
        Some(path) => Dictionary::read_from_path(&path)
            .with_context(|| format!("failed to read dictionary from {}", path.display()))?,
        None => Dictionary::new(),
    };

    if let Some(target) = inputs.next() {
        let all_correct = check_once(&dictionary, &target, args.use_json)?;
        if !all_correct {
            std::process::exit(1);
        }
        return Ok(());
    }

    Shell::new(dictionary).run()
}
