use std::io::{self, Read, Write};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use sort_basics_rs::stable::merge_sort;
use sort_basics_rs::unstable::{quicksort, selection_sort};

/// Reads a count followed by that many integers from stdin, sorts them and prints the sequence
/// before and after.
#[derive(Parser, Debug)]
#[command(name = "sort-cli", version)]
struct Cli {
    #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
    algorithm: Algorithm,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Algorithm {
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    fn sort(self, v: &mut [i64]) -> sort_basics_rs::Result<()> {
        let len = v.len();
        match self {
            Algorithm::Selection => selection_sort::sort_prefix(v, len),
            Algorithm::Merge => merge_sort::sort_range(v, ..),
            Algorithm::Quick => quicksort::sort_range(v, ..),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: &'static str,
    before: &'a [i64],
    after: &'a [i64],
}

/// Parses `<count> <int>...`. Returns `None` for a count of zero or less, tokens past `count`
/// integers are ignored.
fn parse_input(input: &str) -> anyhow::Result<Option<Vec<i64>>> {
    let mut tokens = input.split_whitespace();

    let count_token = tokens.next().context("missing number of elements")?;
    let count: i64 = count_token
        .parse()
        .with_context(|| format!("invalid number of elements `{count_token}`"))?;
    if count <= 0 {
        return Ok(None);
    }

    let count = usize::try_from(count).context("number of elements does not fit in memory")?;
    let mut values = Vec::with_capacity(count.min(1 << 16));
    for (i, token) in tokens.take(count).enumerate() {
        let value = token
            .parse::<i64>()
            .with_context(|| format!("element {} `{token}` is not an integer", i + 1))?;
        values.push(value);
    }

    if values.len() != count {
        bail!("expected {count} integers, got {}", values.len());
    }

    Ok(Some(values))
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(cli: &Cli, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(before) = parse_input(input)? else {
        writeln!(out, "No elements to sort.")?;
        return Ok(());
    };

    let mut after = before.clone();
    cli.algorithm
        .sort(&mut after)
        .with_context(|| format!("{} sort failed", cli.algorithm.name()))?;

    match cli.format {
        Format::Text => {
            writeln!(out, "Before:")?;
            writeln!(out, "{}", join(&before))?;
            writeln!(out, "After:")?;
            writeln!(out, "{}", join(&after))?;
        }
        Format::Json => {
            let report = Report {
                algorithm: cli.algorithm.name(),
                before: &before,
                after: &after,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let stdout = io::stdout();
    run(&cli, &input, &mut stdout.lock())
}
