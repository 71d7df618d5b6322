//! Addup CLI
//!
//! Command-line entry point for checked addition over coercible operands.

use addup_arith::add_operands;
use addup_value::Operand;
use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use std::process;

fn main() {
    let matches = Command::new("addup")
        .version("0.1.0")
        .about("Checked integer addition with string coercion")
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .value_name("DOC")
                .help("Read the two operands from a JSON object {\"a\", \"b\"} or two-element array")
                .num_args(1)
                .conflicts_with_all(["check", "operands"]),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Run the built-in smoke check and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("operands")
                .value_name("OPERAND")
                .help("Two base-10 integer operands")
                .num_args(2)
                .allow_hyphen_values(true)
                .index(1),
        )
        .get_matches();

    let result = if matches.get_flag("check") {
        run_check()
    } else {
        matches.get_one::<String>("json").map_or_else(
            || {
                matches.get_many::<String>("operands").map_or_else(
                    || {
                        eprintln!("Usage: addup-cli <OPERAND> <OPERAND> | --json <DOC> | --check");
                        process::exit(2);
                    },
                    |operands| {
                        let operands: Vec<&String> = operands.collect();
                        sum_args(operands[0], operands[1])
                    },
                )
            },
            // Read both operands from a JSON document
            |doc| sum_json(doc),
        )
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn sum_args(a: &str, b: &str) -> Result<i32, anyhow::Error> {
    let sum = add_operands(&Operand::from(a), &Operand::from(b))?;
    println!("{sum}");
    Ok(0)
}

fn sum_json(doc: &str) -> Result<i32, anyhow::Error> {
    let value: serde_json::Value =
        serde_json::from_str(doc).context("operands are not valid JSON")?;
    let (a, b) = json_operands(&value)?;

    let sum = add_operands(&a, &b)?;
    println!("{sum}");
    Ok(0)
}

/// Extract the two operands from a JSON document
///
/// Accepts an object carrying `a` and `b` keys, or a two-element array.
/// JSON numbers stay integer operands; JSON strings stay textual operands.
fn json_operands(value: &serde_json::Value) -> Result<(Operand, Operand), anyhow::Error> {
    match value {
        serde_json::Value::Object(map) => {
            let a = map.get("a").context("JSON object is missing key \"a\"")?;
            let b = map.get("b").context("JSON object is missing key \"b\"")?;
            Ok((Operand::try_from(a)?, Operand::try_from(b)?))
        }
        serde_json::Value::Array(items) if items.len() == 2 => {
            Ok((Operand::try_from(&items[0])?, Operand::try_from(&items[1])?))
        }
        _ => anyhow::bail!(
            "JSON document must be an object with keys \"a\" and \"b\" or a two-element array"
        ),
    }
}

fn run_check() -> Result<i32, anyhow::Error> {
    println!("running addup self-check");

    let sum = add_operands(&Operand::from("1"), &Operand::from("1"))?;
    anyhow::ensure!(sum == 2, "self-check failed: add(\"1\", \"1\") returned {sum}");

    println!("ok");
    Ok(0)
}
