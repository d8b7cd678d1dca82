// Command-line interface for weft
//
// This binary provides commands for exporting and previewing weft JSON documents.
//
// The main role of the weft program is to interface with weft content: decoding
// the JSON document schema into a live fragment under a presentation mode, then
// serializing the fragment back out as JSON text or as an HTML preview. The
// core capabilities use the weft-codec crate; this crate is only the shell
// around that library.
//
// Usage:
//  weft <input> [--mode <mode>] [--output <file>]     - Export (default command)
//  weft export [<input>] [--mode <mode>] [--check]    - JSON -> fragment -> JSON text
//  weft render [<input>] [--mode <mode>]              - JSON -> fragment -> HTML preview
//  weft sample                                        - Print the embedded sample document
//
// When no input file is given, export and render fall back to the embedded
// sample document, so the tool can be exercised without any setup.

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use weft_codec::{
    from_fragment, to_fragment, ContextStore, FormatRegistry, HtmlFormat, JsonFormat, TextOptions,
};
use weft_config::{Loader, WeftConfig};

const SAMPLE_JSON: &str = include_str!("sample.json");

fn build_cli() -> Command {
    Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for exporting and previewing weft content documents")
        .long_about(
            "weft is a command-line tool for working with weft JSON documents.\n\n\
            Commands:\n  \
            - export: decode a document into a live fragment and emit it as JSON text\n  \
            - render: decode a document and emit an HTML preview of the fragment\n  \
            - sample: print the embedded sample document\n\n\
            The presentation mode (e.g. 'page' or 'teaser') selects which style\n\
            variant of each element's context payload is applied to the fragment.\n\n\
            Examples:\n  \
            weft doc.json                      # Export doc.json (to stdout)\n  \
            weft export --check                # Round-trip the embedded sample\n  \
            weft render doc.json --mode teaser # HTML preview under teaser mode",
        )
        .arg_required_else_help(false)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a weft.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Report the active presentation mode on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Export a document as JSON text (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path (defaults to the embedded sample)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .help("Presentation mode to decode under")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("escape")
                        .long("escape")
                        .help("Emit strictly escaped JSON text instead of the legacy form")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Verify the object-form round trip before emitting")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document as an HTML preview of the fragment")
                .arg(
                    Arg::new("input")
                        .help("Input file path (defaults to the embedded sample)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .help("Presentation mode to decode under")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("sample").about("Print the embedded sample document"))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Try normal parsing first. A bare `weft doc.json` injects "export" as
    // the subcommand so the common case stays short.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "export"
                && args[1] != "render"
                && args[1] != "sample"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "export".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let verbose = matches.get_flag("verbose");

    match matches.subcommand() {
        Some(("export", sub_matches)) => {
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let mode = resolve_mode(sub_matches.get_one::<String>("mode"), &config);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            let mut options: TextOptions = (&config.export).into();
            if sub_matches.get_flag("escape") {
                options.escape_strings = true;
            }

            if verbose {
                eprintln!("mode: {mode}");
            }

            handle_export_command(
                input,
                &mode,
                options,
                sub_matches.get_flag("check"),
                output,
            );
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let mode = resolve_mode(sub_matches.get_one::<String>("mode"), &config);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            if verbose {
                eprintln!("mode: {mode}");
            }

            handle_render_command(input, &mode, output);
        }
        Some(("sample", _)) => {
            print!("{SAMPLE_JSON}");
        }
        _ => {
            // No subcommand and no injectable input: show usage.
            build_cli().print_help().ok();
        }
    }
}

/// Handle the export command
fn handle_export_command(
    input: Option<&str>,
    mode: &str,
    options: TextOptions,
    check: bool,
    output: Option<&str>,
) {
    let source = read_source(input);

    let mut registry = FormatRegistry::new();
    registry.register(JsonFormat::new(options));
    registry.register(HtmlFormat);

    let mut store = ContextStore::new();
    let fragment = registry
        .parse(&source, "json", mode, &mut store)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        });

    if check {
        // Round-trip the object form: a second decode of our own output must
        // reproduce the same document.
        let first = from_fragment(&fragment, &store);
        let again = to_fragment(&first, mode, &mut store);
        let second = from_fragment(&again, &store);
        if first != second {
            eprintln!("Round-trip check failed: object forms differ");
            std::process::exit(1);
        }
    }

    let json = registry
        .serialize(&fragment, "json", &store)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    write_output(output, &json);
}

/// Handle the render command
fn handle_render_command(input: Option<&str>, mode: &str, output: Option<&str>) {
    let source = read_source(input);

    let registry = FormatRegistry::default();
    let mut store = ContextStore::new();

    let fragment = registry
        .parse(&source, "json", mode, &mut store)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        });

    let html = registry
        .serialize(&fragment, "html", &store)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    write_output(output, &html);
}

fn read_source(input: Option<&str>) -> String {
    match input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        }),
        None => SAMPLE_JSON.to_string(),
    }
}

fn write_output(output: Option<&str>, data: &str) {
    match output {
        Some(path) => {
            fs::write(path, data).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{data}");
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> WeftConfig {
    let loader = Loader::new().with_optional_file("weft.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Pick the presentation mode: explicit flag first, configured default
/// otherwise. Unknown modes are rejected against the configured list.
fn resolve_mode(cli_mode: Option<&String>, config: &WeftConfig) -> String {
    let mode = cli_mode
        .map(|s| s.to_string())
        .unwrap_or_else(|| config.render.mode.clone());

    if !config.render.knows_mode(&mode) {
        eprintln!(
            "Unknown presentation mode '{mode}' (configured modes: {})",
            config.render.modes.join(", ")
        );
        std::process::exit(1);
    }

    mode
}
