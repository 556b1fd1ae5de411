use clap::{Parser, Subcommand};
use log::error;
use std::{path::PathBuf, process::ExitCode};
use tabled::{Table, Tabled, settings::Style};
use ueb::{
    braille::{BrailleChars, braille_chars},
    check::{TestResult, check_yaml},
    decode, encode,
    translator::{self, Direction, ResolvedTranslation, TranslationKind},
};

#[derive(Debug, Subcommand)]
enum Commands {
    /// Translate <INPUT> text to braille
    #[command(arg_required_else_help = true)]
    Encode {
        /// Text to translate
        input: String,
        /// Print the braille in dot notation, e.g. 6-125-15
        #[arg(long)]
        dots: bool,
        /// Fail if the input contains characters that cannot be translated
        #[arg(long)]
        strict: bool,
    },
    /// Translate <INPUT> braille to text
    #[command(arg_required_else_help = true)]
    Decode {
        /// Braille to translate
        input: String,
        /// Read the braille in dot notation, e.g. 6-125-15
        #[arg(long)]
        dots: bool,
        /// Fail if the input contains cells that cannot be translated
        #[arg(long)]
        strict: bool,
    },
    /// Show each translation step for <INPUT>
    #[command(arg_required_else_help = true)]
    Trace {
        /// Translate from braille to text instead
        #[arg(short, long)]
        backward: bool,
        /// Text or braille to translate
        input: String,
    },
    /// Run the tests defined in the <YAML_TEST_FILE>s. Return 0 if all
    /// tests pass or 1 if any of the tests fail.
    CheckYaml {
        /// YAML files listing all the tests
        #[arg(required = true)]
        yaml: Vec<PathBuf>,
    },
    /// Translate a few example sentences in both directions
    Demo,
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "ueb")]
#[command(about = "A command line tool to translate to and from uncontracted English Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Tabled)]
struct TraceRow {
    #[tabled(rename = "#")]
    position: usize,
    input: String,
    output: String,
    dots: String,
    kind: TranslationKind,
}

impl TraceRow {
    fn new(translation: &ResolvedTranslation, direction: Direction) -> Self {
        let braille = match direction {
            Direction::Forward => translation.output(),
            Direction::Backward => translation.input(),
        };
        TraceRow {
            position: translation.position(),
            input: translation.input().to_string(),
            output: translation.output().to_string(),
            dots: BrailleChars::from_unicode(braille)
                .map(|b| b.dots())
                .unwrap_or_default(),
            kind: translation.kind(),
        }
    }
}

const DEMO_BRAILLE: [&str; 2] = [
    "⠠⠕⠝⠀⠠⠎⠑⠏⠞⠲⠀⠼⠃⠃⠂⠀⠼⠁⠊⠛⠑⠂⠀⠼⠙⠑⠤⠽⠑⠁⠗⠤⠕⠇⠙⠀⠠⠎⠁⠗⠁⠀⠠⠚⠁⠝⠑⠀⠠⠍⠕⠕⠗⠑⠀⠙⠗⠕⠏⠏⠑⠙⠀⠓⠑⠗⠀⠎⠕⠝⠀⠕⠋⠋⠀⠁⠞⠀⠓⠊⠎⠀⠠⠎⠁⠝⠀⠠⠋⠗⠁⠝⠉⠊⠎⠉⠕⠀⠎⠉⠓⠕⠕⠇⠂⠀⠧⠊⠎⠊⠞⠑⠙⠀⠁⠀⠏⠗⠊⠧⠁⠞⠑⠀⠛⠥⠝⠀⠙⠑⠁⠇⠑⠗⠀⠁⠝⠙⠂⠀⠊⠝⠀⠺⠓⠁⠞⠀⠎⠓⠑⠀⠇⠁⠞⠑⠗⠀⠞⠕⠇⠙⠀⠞⠓⠑⠀⠠⠇⠕⠎⠀⠠⠁⠝⠛⠑⠇⠑⠎⠀⠠⠞⠊⠍⠑⠎⠀⠺⠁⠎⠀⠁⠀⠶⠁⠀⠅⠊⠝⠙⠀⠕⠋⠀⠥⠇⠞⠊⠍⠁⠞⠑⠀⠏⠗⠕⠞⠑⠎⠞⠀⠁⠛⠁⠊⠝⠎⠞⠀⠞⠓⠑⠀⠎⠽⠎⠞⠑⠍⠂⠴⠀⠙⠗⠑⠺⠀⠁⠀⠨⠼⠉⠓⠤⠉⠁⠇⠊⠃⠗⠑⠀⠏⠊⠎⠞⠕⠇⠀⠕⠥⠞⠎⠊⠙⠑⠀⠁⠀⠓⠕⠞⠑⠇⠀⠇⠁⠞⠑⠗⠀⠊⠝⠀⠞⠓⠑⠀⠙⠁⠽⠂⠀⠋⠊⠗⠊⠝⠛⠀⠁⠞⠀⠞⠓⠑⠝⠤⠏⠗⠑⠎⠊⠙⠑⠝⠞⠀⠠⠛⠑⠗⠁⠇⠙⠀⠠⠋⠕⠗⠙⠲",
    "⠠⠓⠑⠇⠇⠕⠀⠠⠺⠕⠗⠇⠙⠖⠀⠠⠊⠀⠓⠁⠧⠑⠀⠼⠁⠚⠀⠁⠏⠏⠇⠑⠎⠲",
];

const DEMO_TEXT: [&str; 2] = [
    "Hello World! This is a test with 123.",
    "Hello World! I have 10 apples.",
];

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Commands::Encode {
            input,
            dots,
            strict,
        } => {
            let braille = if strict {
                match translator::translate_strict(&input, Direction::Forward) {
                    Ok(braille) => braille,
                    Err(e) => {
                        error!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                encode(&input)
            };
            if dots {
                match BrailleChars::from_unicode(&braille) {
                    Ok(cells) => println!("{}", cells.dots()),
                    Err(e) => {
                        error!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{braille}");
            }
        }
        Commands::Decode {
            input,
            dots,
            strict,
        } => {
            let braille = if dots {
                match braille_chars(&input) {
                    Ok(cells) => cells.to_string(),
                    Err(e) => {
                        error!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                input
            };
            if strict {
                match translator::translate_strict(&braille, Direction::Backward) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        error!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", decode(&braille));
            }
        }
        Commands::Trace { backward, input } => {
            let direction = if backward {
                Direction::Backward
            } else {
                Direction::Forward
            };
            let rows: Vec<TraceRow> = translator::trace(&input, direction)
                .iter()
                .map(|t| TraceRow::new(t, direction))
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::modern());
            println!("{table}");
            println!("Result: {}", translator::translate(&input, direction));
        }
        Commands::CheckYaml { yaml } => {
            let mut results = Vec::new();
            for path in yaml {
                println!("Testing with {:?}", path);
                match check_yaml(&path) {
                    Ok(r) => results.extend(r),
                    Err(e) => {
                        error!("{:?}: {e}", path);
                        return ExitCode::FAILURE;
                    }
                }
            }
            for result in &results {
                if let TestResult::Failure {
                    input,
                    expected,
                    actual,
                    direction,
                } = result
                {
                    println!("FAIL ({direction}): {input:?} expected {expected:?}, got {actual:?}");
                }
            }
            let failures = results
                .iter()
                .filter(|r| r.is_failure() || r.is_unexpected_success())
                .count();
            println!(
                "Pass: {}",
                results.iter().filter(|r| r.is_success()).count()
            );
            println!("Fail: {}", failures);
            println!(
                "Expected failures: {}",
                results.iter().filter(|r| r.is_expected_failure()).count()
            );
            if failures > 0 {
                return ExitCode::FAILURE;
            }
        }
        Commands::Demo => {
            for braille in DEMO_BRAILLE {
                println!("UEB Grade 1: {braille}");
                println!("Text Output: {}", decode(braille));
            }
            for text in DEMO_TEXT {
                println!("Text Input: {text}");
                println!("Braille Output: {}", encode(text));
            }
        }
    }
    ExitCode::SUCCESS
}
