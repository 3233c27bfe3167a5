//! Query inspection command
//!
//! Validates listing parameters exactly as the server does and prints the
//! resulting SQL, without connecting to a database.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use carquery_server::{CarQuery, ListParams};

/// Arguments for the query command
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Query parameters as key=value (e.g. fields=id,brand brand=Honda page=2)
    #[arg(value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Build the typed /cars query (all columns) instead of /query-builder
    #[arg(long)]
    pub typed: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Split `key=value`; a bare key means an empty value.
fn split_pair(raw: &str) -> (&str, &str) {
    raw.split_once('=').unwrap_or((raw, ""))
}

/// Print the SQL for the given parameters
pub fn run_query(args: QueryArgs) -> Result<()> {
    let params = ListParams::from_pairs(args.params.iter().map(|raw| split_pair(raw)));

    let query = if args.typed {
        CarQuery::typed_from_params(&params)
    } else {
        CarQuery::from_params(&params)
    }
    .context("Invalid query parameters")?;

    let builder = query.build();
    let sql = builder.sql();
    let bound = query.bound_args();

    if args.json {
        let out = json!({ "sql": sql, "args": bound });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", sql);
        for (i, arg) in bound.iter().enumerate() {
            println!("  ${} = {:?}", i + 1, arg);
        }
    }

    Ok(())
}
