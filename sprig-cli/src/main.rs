//! sprig CLI
//!
//! Builds CSS selectors from command-line fragments or JSON recipes.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use sprig_selector::{Combinator, Fragment, FragmentKind, SelectorRecipe};
use strum::IntoEnumIterator;

/// sprig — build CSS selectors whose parts are checked for order
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    sprig build element=a id=main class=x 'attr=href$=".png"' pseudo-class=focus

    # Combine two selectors
    sprig build element=div id=main + element=table id=data

    # Build from a JSON recipe
    sprig recipe nav.json

    # Show the required fragment order
    sprig kinds
"#)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from `kind=value` fragments and combinator tokens
    Build {
        /// Fragments such as `class=btn`, separated by combinators (`>`, `+`, `~`, `||`,
        /// `descendant`). Combinators are written with a space on each side, so
        /// `descendant` yields three spaces between the selectors.
        #[arg(value_name = "TOKEN", required = true)]
        tokens: Vec<String>,
    },

    /// Build a selector from a JSON recipe file (`-` reads stdin)
    Recipe {
        /// Path to the recipe
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List fragment kinds in their required order
    Kinds,
}

#[derive(Serialize)]
struct SelectorOutput<'a> {
    selector: &'a str,
}

#[derive(Serialize)]
struct KindOutput {
    kind: String,
    rank: u8,
    singleton: bool,
    example: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "{} {err:#}",
                "error:".if_supports_color(Stream::Stderr, |text| text.style(Style::new().red().bold()))
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Build { tokens } => {
            let recipe = tokens_to_recipe(tokens)?;
            print_selector(&recipe.build()?, cli.json)
        }
        Command::Recipe { path } => {
            let text = read_recipe(path)?;
            let recipe = SelectorRecipe::from_json(&text)
                .with_context(|| format!("failed to load recipe '{}'", path.display()))?;
            print_selector(&recipe.build()?, cli.json)
        }
        Command::Kinds => print_kinds(cli.json),
    }
}

fn read_recipe(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        let _ = io::stdin()
            .read_to_string(&mut text)
            .context("failed to read recipe from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Group command-line tokens into a recipe.
///
/// Fragments between combinators form one compound selector; combinations
/// fold left, so `a > b + c` is `(a > b) + c`.
fn tokens_to_recipe(tokens: &[String]) -> Result<SelectorRecipe> {
    let mut recipe: Option<SelectorRecipe> = None;
    let mut combinator: Option<Combinator> = None;
    let mut current: Vec<Fragment> = Vec::new();

    for token in tokens {
        if let Ok(next) = Combinator::from_str(token) {
            if current.is_empty() {
                bail!("combinator `{token}` needs a selector on its left");
            }
            recipe = Some(join(recipe, combinator, std::mem::take(&mut current)));
            combinator = Some(next);
            continue;
        }

        let fragment =
            Fragment::from_str(token).with_context(|| format!("invalid token `{token}`"))?;
        current.push(fragment);
    }

    if current.is_empty() {
        match combinator {
            Some(combinator) => bail!(
                "combinator `{}` needs a selector on its right",
                combinator.token()
            ),
            None => bail!("no fragments given"),
        }
    }
    Ok(join(recipe, combinator, current))
}

fn join(
    left: Option<SelectorRecipe>,
    combinator: Option<Combinator>,
    fragments: Vec<Fragment>,
) -> SelectorRecipe {
    let compound = SelectorRecipe::Compound(fragments);
    match (left, combinator) {
        (Some(left), Some(combinator)) => {
            SelectorRecipe::combined(left, combinator.token(), compound)
        }
        _ => compound,
    }
}

fn print_selector(selector: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&SelectorOutput { selector })?);
    } else {
        println!("{selector}");
    }
    Ok(())
}

fn print_kinds(json: bool) -> Result<()> {
    let kinds: Vec<KindOutput> = FragmentKind::iter()
        .map(|kind| KindOutput {
            kind: kind.to_string(),
            rank: kind.rank(),
            singleton: kind.is_singleton(),
            example: kind.format("value"),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&kinds)?);
        return Ok(());
    }

    let header = "RANK  KIND            ONCE  SYNTAX";
    println!("{}", header.if_supports_color(Stream::Stdout, |text| text.bold()));
    for kind in &kinds {
        let once = if kind.singleton { "yes" } else { "no" };
        let example = kind
            .example
            .if_supports_color(Stream::Stdout, |text| text.cyan());
        println!("{:<5} {:<15} {:<5} {example}", kind.rank, kind.kind, once);
    }
    Ok(())
}
