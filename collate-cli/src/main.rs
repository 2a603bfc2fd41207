// Command-line interface for collate
//
// This binary is a thin shell around the collate-wml library: it reads editor HTML or a
// commitments file, converts rich text to WordprocessingML, and renders templates.
//
// Usage:
//  collate <input.html> [-o <file>]                          - Convert one HTML file (default)
//  collate convert <input.html|-> [-o <file>]                - Same as above (explicit)
//  collate data <commitments.json> [-o <file>]               - Print the template data dictionary
//  collate render <commitments.json> [-t <tpl>] [-o <file>]  - Render the document template
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<key> <value>.
// Example:
//  collate render commitments.json --extra-highlight-color green

use clap::{Arg, Command, ValueHint};
use collate_config::{CollateConfig, Loader};
use collate_wml::{
    convert, export, Collation, ExportArtifact, ExportSpec, WmlOptions, XmlTemplate,
};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("collate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert rich-text commitments to WordprocessingML")
        .long_about(
            "collate converts rich-text HTML written in an editor into WordprocessingML\n\
            paragraphs and splices them into a document template.\n\n\
            Commands:\n  \
            - convert: Convert one HTML file to a WML fragment\n  \
            - data:    Print the template data dictionary for a commitments file\n  \
            - render:  Render a template with a commitments file\n\n\
            Extra Parameters:\n  \
            Use --extra-<key> <value> to override configuration:\n  \
            highlight-color, link-color, hyperlink-switch, template, output.\n\n\
            Examples:\n  \
            collate note.html                               # Fragment to stdout\n  \
            collate data commitments.json                   # Data dictionary as JSON\n  \
            collate render commitments.json -o preview.xml  # Render the template",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a collate.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an HTML file to a WordprocessingML fragment (default command)")
                .arg(
                    Arg::new("input")
                        .help("HTML file to convert ('-' reads stdin)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("data")
                .about("Print the template data dictionary as JSON")
                .arg(
                    Arg::new("input")
                        .help("Commitments JSON file: [{\"code\", \"name\", \"content\"}, ...]")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render the document template with converted commitments")
                .arg(
                    Arg::new("input")
                        .help("Commitments JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .help("Template document.xml (defaults to render.template from config)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means "convert"
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["convert", "data", "render", "help"].contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        tracing::warn!("ignoring unknown parameter --extra-{key}");
    }

    let result = match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config)
        }
        Some(("data", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_data_command(input, output, &config)
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let template = sub_matches
                .get_one::<String>("template")
                .map(|s| s.as_str())
                .unwrap_or(config.render.template.as_str());
            let output = sub_matches
                .get_one::<String>("output")
                .map(|s| s.as_str())
                .unwrap_or(config.render.output.as_str());
            handle_render_command(input, template, output, &config)
        }
        _ => Err("Unknown subcommand. Use --help for usage information.".to_string()),
    };

    if let Err(message) = result {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}

/// Handle the convert command: one HTML file to one WML fragment
fn handle_convert_command(
    input: &str,
    output: Option<&str>,
    config: &CollateConfig,
) -> Result<(), String> {
    let html = read_input(input)?;
    let options = WmlOptions::from(&config.convert);
    let wml = convert(&html, &options);
    write_output(&wml, output)
}

/// Handle the data command: commitments file to the data dictionary as JSON
fn handle_data_command(
    input: &str,
    output: Option<&str>,
    config: &CollateConfig,
) -> Result<(), String> {
    let collation = load_collation(input)?;
    let data = collation.template_data(&WmlOptions::from(&config.convert));
    let json = serde_json::to_string_pretty(&data)
        .map_err(|e| format!("Failed to serialize data: {e}"))?;
    write_output(&json, output)
}

/// Handle the render command: commitments file and template to a document
fn handle_render_command(
    input: &str,
    template: &str,
    output: &str,
    config: &CollateConfig,
) -> Result<(), String> {
    let collation = load_collation(input)?;
    let template = XmlTemplate::load(template).map_err(|e| e.to_string())?;
    let spec = ExportSpec::new(&collation)
        .with_options(WmlOptions::from(&config.convert))
        .with_output_path(output);
    match export(spec, &template).map_err(|e| e.to_string())? {
        ExportArtifact::File(path) => {
            eprintln!("Wrote {}", path.display());
            Ok(())
        }
        ExportArtifact::InMemory(xml) => write_output(&xml, None),
    }
}

fn load_collation(path: &str) -> Result<Collation, String> {
    let json = read_input(path)?;
    Collation::from_json(&json).map_err(|e| format!("{path}: {e}"))
}

fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Error reading stdin: {e}"))?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|e| format!("Error reading file '{path}': {e}"))
}

fn write_output(content: &str, output: Option<&str>) -> Result<(), String> {
    match output {
        Some(path) => {
            fs::write(path, content).map_err(|e| format!("Error writing file '{path}': {e}"))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> CollateConfig {
    let loader = Loader::new().with_optional_file("collate.toml");
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

fn apply_config_overrides(config: &mut CollateConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["highlight-color", "highlight"]) {
        config.convert.highlight_color = raw;
    }
    if let Some(raw) = take_override(extra_params, &["link-color"]) {
        config.convert.link_color = raw;
    }
    if let Some(raw) = take_override(extra_params, &["hyperlink-switch"]) {
        config.convert.hyperlink_switch = raw;
    }
    if let Some(raw) = take_override(extra_params, &["template"]) {
        config.render.template = raw;
    }
    if let Some(raw) = take_override(extra_params, &["output"]) {
        config.render.output = raw;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
