//! lexrule grammar CLI

use lexrulec::commands::{check_grammar, explain_error, tokenize_file};
use lexrulec::{init_tracing, parse_options, Options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let options = options_or_exit(&args[2..]);
            let [grammar] = options.positional.as_slice() else {
                eprintln!("Usage: lexrulec check <grammar> [options]");
                std::process::exit(1);
            };
            check_grammar(grammar, options.config);
        }
        "match" => {
            let options = options_or_exit(&args[2..]);
            let [grammar, input] = options.positional.as_slice() else {
                eprintln!("Usage: lexrulec match <grammar> <input> [options]");
                std::process::exit(1);
            };
            tokenize_file(grammar, input, options.config);
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: lexrulec explain <ERROR_CODE>");
                eprintln!("Example: lexrulec explain E0202");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("lexrulec {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn options_or_exit(args: &[String]) -> Options {
    match parse_options(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("lexrule grammar engine");
    println!();
    println!("Usage: lexrulec <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <grammar>          Parse a grammar file and report every error");
    println!("  match <grammar> <input>  Tokenize a file with the longest matching rule");
    println!("  explain <code>           Describe an error code (e.g., E0202)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --no-parallel                  Parse rules on one thread");
    println!("  --line-comment=<s>             Comment delimiter inside rules, e.g. //");
    println!("  --block-comment=<open>,<close> Block comment delimiters, e.g. /*,*/");
    println!();
    println!("Grammar files hold one '<id> <rule>' per line; '#' starts a comment line.");
    println!();
    println!("Environment:");
    println!("  LEXRULE_LOG       Tracing filter (falls back to RUST_LOG)");
    println!("  LEXRULE_LOG_TREE  Print spans as an indented tree");
    println!();
    println!("Examples:");
    println!("  lexrulec check tokens.lex");
    println!("  lexrulec match tokens.lex main.src --line-comment=#");
    println!("  lexrulec explain E0304");
}
