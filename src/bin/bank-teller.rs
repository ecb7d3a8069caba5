use std::{fs::File, io::BufReader};

use anyhow::{Context, Result, ensure};
use bank_teller::bin_utils::{DEFAULT_ACCOUNT_ID, DEFAULT_OPENING_BALANCE, Service};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a file name as the first argument")?;
    let account_id = args
        .next()
        .unwrap_or_else(|| DEFAULT_ACCOUNT_ID.to_string());
    let opening_balance = match args.next() {
        Some(balance) => balance
            .parse()
            .with_context(|| format!("Invalid opening balance `{balance}`"))?,
        None => DEFAULT_OPENING_BALANCE,
    };
    ensure!(args.next().is_none(), "Too many arguments");

    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: BufReader::new(file),
        output: &mut std::io::stdout(),
        account_id,
        opening_balance,
    };
    service.run()?;
    Ok(())
}
