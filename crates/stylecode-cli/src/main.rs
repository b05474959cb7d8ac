//! stylecode command-line driver.
//!
//! Compiles one or two inline declaration lists, cascades each as a single
//! element, composes the child against the parent and prints both computed
//! styles as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use stylecode_core::{ComputedStyle, ParseContext, SelectState, parse_declaration_list, tokenize};
use stylecode_types::config::EngineConfig;

const USAGE: &str = "Usage: stylecode-cli [--config FILE] PARENT_DECLS [CHILD_DECLS]";

#[derive(Debug, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    parent: String,
    child: Option<String>,
}

#[derive(Serialize)]
struct Output {
    parent: ComputedStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    child: Option<ComputedStyle>,
}

fn parse_args(mut iter: impl Iterator<Item = String>) -> Result<Args> {
    let mut config = None;
    let mut positional = Vec::new();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config needs a file argument\n{USAGE}"),
            },
            "-h" | "--help" => bail!("{USAGE}"),
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    let Some(parent) = positional.next() else {
        bail!("missing declarations\n{USAGE}");
    };
    let child = positional.next();
    if let Some(extra) = positional.next() {
        bail!("unexpected argument: {extra}\n{USAGE}");
    }
    Ok(Args {
        config,
        parent,
        child,
    })
}

/// Parse and cascade `text` as the only declarations of one element.
fn cascade_element(config: &EngineConfig, text: &str) -> Result<ComputedStyle> {
    let mut ctx = ParseContext::new(config);
    let style = parse_declaration_list(&mut ctx, &tokenize(text))
        .context("declaration list ran out of buffer space")?;
    log::debug!("compiled {} bytecode words", style.len());

    let strings = ctx.into_strings();
    let mut state = SelectState::new();
    state
        .cascade(&style, &strings, config.origin, 0)
        .context("cascade ran out of memory")?;
    Ok(state.finish())
}

fn run(args: &Args) -> Result<Output> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let parent = cascade_element(&config, &args.parent)?
        .resolve_root()
        .context("composing parent style")?;
    let child = match &args.child {
        Some(text) => {
            let child = cascade_element(&config, text)?;
            Some(ComputedStyle::compose(&parent, &child).context("composing child style")?)
        },
        None => None,
    };
    Ok(Output { parent, child })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;
    let output = run(&args)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
