//! Paramshape CLI - validate JSON input against a declared schema.

use anyhow::{bail, Context, Result};
use paramshape::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("paramshape");

    if args.len() < 2 {
        print_usage(program);
        return ExitCode::from(2);
    }

    let outcome = match args[1].as_str() {
        "check" => check(&args[2..]),
        "predicates" => {
            list_predicates();
            Ok(true)
        }
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("{} {}", paramshape::NAME, paramshape::VERSION);
            Ok(true)
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(program);
            return ExitCode::from(2);
        }
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  check <schema> <input> [options]  Validate a JSON input file");
    println!("  predicates                        List available predicates");
    println!("  version                           Show version");
    println!("  help                              Show this help message");
    println!();
    println!("Check options:");
    println!("  --json             Print the full result as JSON");
    println!("  --style <style>    Input style: params (default) or json");
    println!("  --messages <file>  Extra message templates (TOML)");
    println!();
    println!("Schemas are TOML or JSON files with a [[keys]] list.");
    println!("Exit status: 0 valid, 1 invalid, 2 error.");
}

struct CheckOptions {
    schema: PathBuf,
    input: PathBuf,
    json: bool,
    style: InputStyle,
    messages: Option<PathBuf>,
}

fn parse_check_args(args: &[String]) -> Result<CheckOptions> {
    if args.len() < 2 {
        bail!("check needs a schema path and an input path");
    }

    let mut options = CheckOptions {
        schema: PathBuf::from(&args[0]),
        input: PathBuf::from(&args[1]),
        json: false,
        style: InputStyle::Params,
        messages: None,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                options.json = true;
                i += 1;
            }
            flag @ ("--style" | "--messages") => {
                let Some(value) = args.get(i + 1) else {
                    bail!("{} needs a value", flag);
                };
                if flag == "--style" {
                    options.style = match value.as_str() {
                        "params" => InputStyle::Params,
                        "json" => InputStyle::Json,
                        other => bail!("unknown input style '{}'", other),
                    };
                } else {
                    options.messages = Some(PathBuf::from(value));
                }
                i += 2;
            }
            other => bail!("unknown option: {}", other),
        }
    }

    Ok(options)
}

/// Returns whether the input was valid.
fn check(args: &[String]) -> Result<bool> {
    let options = parse_check_args(args)?;
    let result = validate_files(&options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.summary());
        for (key, messages) in result.messages() {
            for message in messages {
                println!("   {} {}", key, message);
            }
        }
    }

    Ok(result.is_success())
}

fn validate_files(options: &CheckOptions) -> Result<ValidationResult> {
    let declaration = SchemaDeclaration::from_path(&options.schema)
        .with_context(|| format!("failed to load schema {}", options.schema.display()))?;

    let mut config = SchemaConfig::for_style(options.style);
    if let Some(path) = &options.messages {
        let templates = MessageTemplates::from_path(path)
            .with_context(|| format!("failed to load messages {}", path.display()))?;
        config = config.with_templates(templates);
    }

    let schema = Schema::compile(&declaration, &config).context("schema does not compile")?;
    log::info!(
        "compiled {} key(s) from {}",
        schema.rules().len(),
        options.schema.display()
    );

    let input = Input::from_path(&options.input)
        .with_context(|| format!("failed to load input {}", options.input.display()))?;

    Ok(schema.validate(&input))
}

fn list_predicates() {
    let registry = PredicateRegistry::with_builtins();
    let templates = MessageTemplates::english();

    println!("Available predicates ({} total):", registry.len());
    println!();

    for (category, entries) in registry.grouped_by_category() {
        println!("  📁 {:?}", category);
        for entry in entries {
            let args: Vec<String> = entry
                .args
                .iter()
                .map(|arg| format!("{}: {}", arg.name, arg.kind))
                .collect();
            let message = templates
                .template(&CheckKind::Predicate(entry.name.clone()))
                .unwrap_or("-");
            println!(
                "      • {}({}) - {} [\"{}\"]",
                entry.name,
                args.join(", "),
                entry.description,
                message
            );
        }
        println!();
    }
}
