use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("mediaframe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonicalize media URLs and render responsive iframe embeds")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-providers")
                .long("list-providers")
                .help("List known media providers")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mediaframe.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("canonicalize")
                .about("Print the embeddable form of each URL")
                .arg(
                    Arg::new("url")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                        .value_hint(ValueHint::Url),
                ),
        )
        .subcommand(
            Command::new("embed")
                .about("Render the markup for a single embed")
                .arg(
                    Arg::new("url")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Url),
                )
                .arg(Arg::new("width").long("width"))
                .arg(Arg::new("height").long("height"))
                .arg(
                    Arg::new("sizing")
                        .long("sizing")
                        .value_parser(clap::builder::PossibleValuesParser::new(["auto", "fixed"])),
                )
                .arg(Arg::new("ratio").long("ratio").value_name("W:H")),
        )
        .subcommand(
            Command::new("normalize")
                .about("Rewrite every embed in an HTML file")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("canonicalize")
                        .long("canonicalize")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the embeds of an HTML file as JSON")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mediaframe", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mediaframe", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mediaframe", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
