use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use curlfetch::{
    ParsedCurl, Result, classify, fetch, json, parse_curl, parse_curl_strict, tokenize,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CurlPart {
    Url,
    Method,
    Headers,
    Body,
    Options,
    Code,
}

fn input_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .index(1)
        .default_value("-")
}

fn cli() -> Command {
    Command::new("curlfetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A CLI tool to turn curl commands into fetch requests")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parses a curl command into url, fetch options and sample code")
                .arg(input_arg("command", "The input curl command string, or - for stdin"))
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Print only one part (url, method, headers, body, options, code)")
                        .required(false)
                        .value_parser(clap::value_parser!(CurlPart)),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail instead of guessing on malformed input")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Splits a command line into shell words")
                .arg(input_arg("command", "The command line, or - for stdin")),
        )
        .subcommand(
            Command::new("classify")
                .about("Tells curl, fetch code, JSON and plain text apart")
                .arg(input_arg("text", "The text to classify, or - for stdin")),
        )
        .subcommand(
            Command::new("inspect")
                .about("Extracts method, url and options from curl or fetch code")
                .arg(input_arg("code", "The snippet, or - for stdin")),
        )
        .subcommand(
            Command::new("json")
                .about("Pretty-prints JSON, unwrapping JSON nested in strings")
                .arg(input_arg("text", "The JSON text, or - for stdin")),
        )
}

fn read_input(sub: &ArgMatches, name: &str) -> Result<String> {
    let arg = sub.get_one::<String>(name).map(String::as_str).unwrap_or("-");
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_parsed(parsed: &ParsedCurl, part: Option<&CurlPart>) -> Result<()> {
    let options = &parsed.descriptor.options;
    match part {
        Some(CurlPart::Url) => println!("{}", parsed.descriptor.url),
        Some(CurlPart::Method) => println!("{}", options.method),
        Some(CurlPart::Headers) => println!("{}", serde_json::to_string_pretty(&options.headers)?),
        Some(CurlPart::Body) => {
            if let Some(body) = &options.body {
                println!("{}", body);
            }
        }
        Some(CurlPart::Options) => println!("{}", serde_json::to_string_pretty(options)?),
        Some(CurlPart::Code) => println!("{}", parsed.sample_code),
        None => println!("{}", parsed.to_json()?),
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("parse", sub)) => {
            let command = read_input(sub, "command")?;
            let part = sub.get_one::<CurlPart>("part");
            let parsed = if sub.get_flag("strict") {
                parse_curl_strict(&command)?
            } else {
                parse_curl(&command)
            };
            for diagnostic in &parsed.diagnostics {
                warn!(%diagnostic, "curl command read by fallback");
            }
            print_parsed(&parsed, part)
        }
        Some(("tokenize", sub)) => {
            let command = read_input(sub, "command")?;
            println!("{}", serde_json::to_string_pretty(&tokenize(&command))?);
            Ok(())
        }
        Some(("classify", sub)) => {
            let text = read_input(sub, "text")?;
            let class = classify(&text);
            println!("{}\t{}", class, class.editor_language());
            Ok(())
        }
        Some(("inspect", sub)) => {
            let code = read_input(sub, "code")?;
            let details = fetch::extract_fetch_details(&code);
            let report = serde_json::json!({
                "classification": classify(&code),
                "method": fetch::extract_http_method(&code),
                "urlPath": fetch::extract_url_path(&code),
                "url": details.url,
                "options": details.options,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Some(("json", sub)) => {
            let text = read_input(sub, "text")?;
            println!("{}", serde_json::to_string_pretty(&json::loose_parse_str(&text))?);
            Ok(())
        }
        _ => {
            cli().print_help()?;
            println!();
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("curlfetch=info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli().get_matches()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_parse_part_and_strict() {
        let matches = cli()
            .try_get_matches_from(["curlfetch", "parse", "curl x.com", "-p", "headers", "--strict"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "parse");
        assert_eq!(sub.get_one::<CurlPart>("part"), Some(&CurlPart::Headers));
        assert!(sub.get_flag("strict"));
        assert_eq!(read_input(sub, "command").unwrap(), "curl x.com");
    }
}
