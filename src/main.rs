use std::io::{self, BufRead};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voice_billing::config::Config;
use voice_billing::{Bill, VoiceOrderParser, confirmation, manual_entry};

const USAGE: &str = "usage: voice_billing [--config <path>] [--item <product>:<qty>:<unit>]... [utterance]...";

#[derive(Default)]
struct Args {
    config: Option<String>,
    manual: Vec<String>,
    utterances: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, Box<dyn std::error::Error>> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(args.next().ok_or(USAGE)?),
            "--item" => parsed.manual.push(args.next().ok_or(USAGE)?),
            "-h" | "--help" => return Err(USAGE.into()),
            _ => parsed.utterances.push(arg),
        }
    }
    Ok(parsed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(std::env::args().skip(1))?;
    let cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_env_filter(filter)
        .init();

    let parser = VoiceOrderParser::new(cfg.catalog()?)?;
    let mut bill = Bill::new();

    for entry in &args.manual {
        let mut parts = entry.splitn(3, ':');
        let (Some(product), Some(qty), Some(unit)) = (parts.next(), parts.next(), parts.next()) else {
            warn!(item = %entry, "Expected <product>:<qty>:<unit>");
            continue;
        };
        let Ok(quantity) = Decimal::from_str(qty.trim()) else {
            warn!(item = %entry, "Quantity is not a number");
            continue;
        };
        let Some(unit) = parser.catalog().unit_hint(unit) else {
            warn!(item = %entry, "Unknown unit");
            continue;
        };
        match manual_entry(parser.catalog(), product, quantity, unit) {
            Ok(item) => {
                info!(product = item.product(), qty = %item.quantity(), unit = %item.unit(), total = %item.total_price(), "Manual item");
                println!("{}", confirmation(std::slice::from_ref(&item), &cfg.currency));
                bill.push(item);
            }
            Err(e) => warn!(item = %entry, error = %e, "Manual item rejected"),
        }
    }

    let mut handle = |utterance: &str| {
        let items = parser.parse(utterance);
        for (i, item) in items.iter().enumerate() {
            info!(
                idx = i,
                product = item.product(),
                qty = %item.quantity(),
                unit = %item.unit(),
                unit_price = %item.price_per_unit(),
                total = %item.total_price(),
                "Line item"
            );
        }
        println!("{}", confirmation(&items, &cfg.currency));
        bill.extend(items);
    };

    if args.utterances.is_empty() && args.manual.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                handle(&line);
            }
        }
    } else {
        for utterance in &args.utterances {
            handle(utterance);
        }
    }

    match bill.grand_total() {
        Some(total) => info!(items = bill.len(), grand_total = %total, "Bill complete"),
        None => warn!(items = bill.len(), "Bill total overflows, not summed"),
    }
    println!("{}", serde_json::to_string_pretty(&bill.summary())?);

    Ok(())
}
