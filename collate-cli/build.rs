use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the subcommands from src/main.rs
// Build scripts can't access src/ modules, so the shape is duplicated here.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = |help: &'static str| {
        Arg::new("input")
            .help(help)
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };
    let output = Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath);

    let mut cmd = Command::new("collate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert rich-text commitments to WordprocessingML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input("HTML file to convert ('-' for stdin)"))
                .arg(output.clone()),
        )
        .subcommand(
            Command::new("data")
                .arg(input("Commitments JSON file"))
                .arg(output.clone()),
        )
        .subcommand(
            Command::new("render")
                .arg(input("Commitments JSON file"))
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "collate", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "collate", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "collate", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
