use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn completion_cli() -> Command {
    Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for exporting and previewing weft content documents")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .arg(
                    Arg::new("input")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("mode").long("mode").value_hint(ValueHint::Other))
                .arg(Arg::new("escape").long("escape").action(ArgAction::SetTrue))
                .arg(Arg::new("check").long("check").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render")
                .arg(
                    Arg::new("input")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("mode").long("mode").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("sample"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    generate_to(Bash, &mut cmd, "weft", &outdir)?;
    generate_to(Zsh, &mut cmd, "weft", &outdir)?;
    generate_to(Fish, &mut cmd, "weft", &outdir)?;

    Ok(())
}
