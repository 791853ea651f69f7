// Copyright 2026 ddg-instant Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod cli;
mod config;
mod output;

use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context as _;
use anyhow::Result;
use clap::Parser;
use ddg_instant::SearchResult;
use ddg_instant::decode;
use ddg_instant::format;
use ddg_instant::resolve::Field;
use ddg_instant::resolve::PathSpec;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::output::JsonResponse;
use crate::output::print_json;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Instant(args) => handle_result(
            cmd_instant(args.input, args.priorities, args.json),
            args.json,
        ),
        Commands::Decode(args) => handle_result(cmd_decode(args.input, args.json), args.json),
        Commands::Config { json } => handle_result(cmd_config(json), json),
    }
}

fn handle_result(result: Result<()>, json: bool) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            if json {
                let code = match err.downcast_ref::<ddg_instant::Error>() {
                    Some(ddg_instant::Error::InvalidIndex(_)) => "invalid_index",
                    Some(ddg_instant::Error::Json(_)) => "invalid_json",
                    None => "error",
                };
                let resp = JsonResponse::error(code, &format!("{err:#}"));
                print_json(&resp)?;
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("read response {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read response from stdin")?;
            Ok(buf)
        }
    }
}

fn load_response(input: Option<PathBuf>) -> Result<SearchResult> {
    let text = read_input(input.as_deref())?;
    Ok(decode::from_str(&text)?)
}

fn unknown_field_warnings(priorities: &[String]) -> Vec<String> {
    priorities
        .iter()
        .filter_map(|p| match PathSpec::parse(p) {
            Ok(PathSpec {
                field: Field::Other(name),
                ..
            }) => Some(format!("unknown priority field {name:?}")),
            _ => None,
        })
        .collect()
}

fn cmd_instant(input: Option<PathBuf>, priorities: Vec<String>, json: bool) -> Result<()> {
    let priorities = if priorities.is_empty() {
        config::load_global_config()?.priorities
    } else {
        priorities
    };
    let result = load_response(input)?;
    let instant = result.instant_information_with(priorities.as_slice())?;
    let warnings = unknown_field_warnings(&priorities);

    if json {
        let resp = JsonResponse::ok()
            .with_instant(instant)
            .with_priorities(priorities)
            .with_warnings(warnings);
        print_json(&resp)?;
    } else {
        println!("{instant}");
        for warn in warnings {
            eprintln!("warning: {warn}");
        }
    }
    Ok(())
}

fn cmd_decode(input: Option<PathBuf>, json: bool) -> Result<()> {
    let result = load_response(input)?;

    if json {
        let value = serde_json::to_value(&result).context("serialize decoded response")?;
        let resp = JsonResponse::ok().with_result(value);
        print_json(&resp)?;
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn print_summary(result: &SearchResult) {
    println!("Type: {}", result.kind().label().unwrap_or("none"));
    let sections = [
        ("Answer", result.answer().and_then(format::answer)),
        ("Abstract", result.topic_abstract().and_then(format::topic_abstract)),
        ("Definition", result.definition().and_then(format::definition)),
        ("Redirect", result.redirect().and_then(format::redirect)),
    ];
    for (name, value) in sections {
        if let Some(value) = value {
            println!("{name}: {value}");
        }
    }
    for (label, items) in [
        ("Related", result.related_topics()),
        ("Result", result.results()),
    ] {
        for (i, item) in items.iter().enumerate() {
            let Some(text) = format::result_item(item) else {
                continue;
            };
            match item.icon().and_then(format::icon) {
                Some(icon) => println!("{label} {i}: {text} [{icon}]"),
                None => println!("{label} {i}: {text}"),
            }
        }
    }
}

fn cmd_config(json: bool) -> Result<()> {
    let path = config::global_config_path();
    let config = config::load_global_config()?;

    if json {
        let resp = JsonResponse::ok()
            .with_config_path(path.map(|p| p.display().to_string()))
            .with_priorities(config.priorities);
        print_json(&resp)?;
    } else {
        match path {
            Some(path) => println!("Config: {}", path.display()),
            None => println!("Config: <config dir unavailable>"),
        }
        println!("Priorities: {}", config.priorities.join(", "));
    }
    Ok(())
}
