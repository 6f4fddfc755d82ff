// Command-line interface for mediaframe
//
// This binary exposes the mediaframe library over URLs and HTML files: rewriting
// share links into embeddable URLs, rendering a single embed, and finding or
// rewriting the embeds in a document.
//
// Usage:
//  mediaframe canonicalize <URL>...                       - Print the embeddable form of each URL
//  mediaframe embed <URL> [--width N] [--height N] [--sizing auto|fixed] [--ratio W:H]
//                                                         - Print the markup for one embed
//  mediaframe normalize <INPUT> [-o OUTPUT] [--canonicalize]
//                                                         - Rewrite every embed in an HTML file
//  mediaframe inspect <INPUT>                             - Print the embeds of an HTML file as JSON
//  mediaframe --list-providers                            - List known media providers
//
// Configuration:
//
// Pass-through iframe attributes and normalize defaults come from the embedded
// defaults, then ./mediaframe.toml if present, then --config <PATH>.
//
// Logging goes to stderr and is controlled with MEDIAFRAME_LOG (e.g. MEDIAFRAME_LOG=debug).

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mediaframe::formats::html::{extract_embeds, normalize_embeds, render_embed_html};
use mediaframe::{canonicalize, insert, InsertOptions, ProviderRegistry, Ratio, SizingMode};
use mediaframe_config::{Loader, MediaframeConfig};
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("mediaframe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonicalize media URLs and render responsive iframe embeds")
        .long_about(
            "mediaframe turns media share links into responsive iframe embeds.\n\n\
            Commands:\n  \
            - canonicalize: Rewrite share/watch URLs into embeddable URLs\n  \
            - embed:        Render the markup for a single embed\n  \
            - normalize:    Rewrite every embed in an HTML file\n  \
            - inspect:      Show the embeds of an HTML file as JSON\n\n\
            Examples:\n  \
            mediaframe canonicalize https://youtu.be/dQw4w9WgXcQ\n  \
            mediaframe embed https://vimeo.com/76979871 --ratio 4:3\n  \
            mediaframe normalize post.html --canonicalize -o post.out.html",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Rewrite share, watch and page URLs into each provider's embeddable form.\n\n\
                    URLs no provider recognizes are printed unchanged.\n\n\
                    Examples:\n  \
                    mediaframe canonicalize https://www.youtube.com/watch?v=dQw4w9WgXcQ\n  \
                    mediaframe canonicalize https://vimeo.com/76979871 https://dai.ly/x7tgad0",
                )
                .arg(
                    Arg::new("url")
                        .help("URLs to canonicalize")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                        .value_hint(ValueHint::Url),
                ),
        )
        .subcommand(
            Command::new("embed")
                .about("Render the markup for a single embed")
                .long_about(
                    "Create an embed for a URL and print its markup.\n\n\
                    The URL is canonicalized first. Out-of-range dimensions fall back to\n\
                    560x315 and a malformed ratio falls back to 16:9.\n\n\
                    Examples:\n  \
                    mediaframe embed https://youtu.be/dQw4w9WgXcQ\n  \
                    mediaframe embed https://vimeo.com/76979871 --sizing fixed --width 640 --height 360",
                )
                .arg(
                    Arg::new("url")
                        .help("Source URL")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Url),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .help("Width in pixels (fixed sizing)")
                        .value_parser(clap::value_parser!(i64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .help("Height in pixels (fixed sizing)")
                        .value_parser(clap::value_parser!(i64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("sizing")
                        .long("sizing")
                        .help("Sizing mode")
                        .value_parser(clap::builder::PossibleValuesParser::new(["auto", "fixed"])),
                )
                .arg(
                    Arg::new("ratio")
                        .long("ratio")
                        .value_name("W:H")
                        .help("Aspect ratio (auto sizing)"),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Rewrite every embed in an HTML file")
                .long_about(
                    "Find the embeds in an HTML file (wrapped structures and bare iframes)\n\
                    and rewrite them in the canonical wrapped structure.\n\n\
                    Other markup is left as it is. Output goes to stdout by default,\n\
                    or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input HTML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("canonicalize")
                        .long("canonicalize")
                        .help("Also rewrite embed sources into their embeddable form")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the embeds of an HTML file as JSON")
                .arg(
                    Arg::new("input")
                        .help("Input HTML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("MEDIAFRAME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    if matches.get_flag("list-providers") {
        handle_list_providers_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    debug!(?config, "configuration loaded");

    match matches.subcommand() {
        Some(("canonicalize", sub_matches)) => {
            let urls: Vec<&String> = sub_matches
                .get_many::<String>("url")
                .expect("url is required")
                .collect();
            handle_canonicalize_command(&urls);
        }
        Some(("embed", sub_matches)) => {
            handle_embed_command(insert_options_from_matches(sub_matches), &config);
        }
        Some(("normalize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let force_canonicalize = sub_matches.get_flag("canonicalize");
            handle_normalize_command(input, output, force_canonicalize, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the --list-providers flag
fn handle_list_providers_command() {
    let registry = ProviderRegistry::global();
    println!("Available providers (in priority order):\n");
    for name in registry.list_providers() {
        if let Some(provider) = registry.get(&name) {
            println!("  {:<12} {}", name, provider.description());
        }
    }
}

/// Handle the canonicalize command
fn handle_canonicalize_command(urls: &[&String]) {
    for url in urls {
        println!("{}", canonicalize(url));
    }
}

/// Handle the embed command
fn handle_embed_command(options: InsertOptions, config: &MediaframeConfig) {
    let entity = insert(options, &config.frame).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let html = render_embed_html(&entity).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{html}");
}

/// Handle the normalize command
fn handle_normalize_command(
    input: &str,
    output: Option<&str>,
    force_canonicalize: bool,
    config: &MediaframeConfig,
) {
    let source = read_input(input);

    let mut options = config.normalize_options();
    options.canonicalize |= force_canonicalize;

    let html = normalize_embeds(&source, &options).unwrap_or_else(|e| {
        eprintln!("Normalize error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{html}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, config: &MediaframeConfig) {
    let source = read_input(input);
    let entities = extract_embeds(&source, &config.frame);

    let json = serde_json::to_string_pretty(&entities).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn insert_options_from_matches(matches: &ArgMatches) -> InsertOptions {
    let url = matches.get_one::<String>("url").expect("url is required");
    InsertOptions {
        width: matches.get_one::<i64>("width").copied(),
        height: matches.get_one::<i64>("height").copied(),
        sizing_mode: matches
            .get_one::<String>("sizing")
            .map(|raw| SizingMode::parse_lenient(raw)),
        ratio: matches
            .get_one::<String>("ratio")
            .map(|raw| Ratio::parse_or_default(Some(raw.as_str()))),
        ..InsertOptions::new(url.as_str())
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MediaframeConfig {
    let loader = Loader::new().with_optional_file("mediaframe.toml");
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

#[cfg(test)]
mod tests {
    use super::*;

    fn embed_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["mediaframe", "embed"];
        argv.extend_from_slice(args);
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();
        sub_matches.clone()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_insert_options_defaults() {
        let options = insert_options_from_matches(&embed_matches(&["https://youtu.be/dQw4w9WgXcQ"]));
        assert_eq!(options, InsertOptions::new("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_insert_options_from_flags() {
        let options = insert_options_from_matches(&embed_matches(&[
            "/page",
            "--width",
            "-5",
            "--height",
            "480",
            "--sizing",
            "fixed",
            "--ratio",
            "0:9",
        ]));
        assert_eq!(options.width, Some(-5));
        assert_eq!(options.height, Some(480));
        assert_eq!(options.sizing_mode, Some(SizingMode::Fixed));
        assert_eq!(options.ratio, Some(Ratio::DEFAULT));
    }

    #[test]
    fn test_sizing_rejects_unknown_mode() {
        let result =
            build_cli().try_get_matches_from(["mediaframe", "embed", "/page", "--sizing", "wide"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_canonicalize_takes_many_urls() {
        let matches = build_cli()
            .try_get_matches_from(["mediaframe", "canonicalize", "a", "b", "c"])
            .unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(sub_matches.get_many::<String>("url").unwrap().count(), 3);
    }

    #[test]
    fn test_load_cli_config_defaults() {
        let config = load_cli_config(None);
        assert_eq!(config.frame.frameborder.as_deref(), Some("0"));
    }
}
