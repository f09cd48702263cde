//! Send and run subcommands handler

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use mailroom::logging::TracingSink;
use mailroom::service::{FailureKind, InspectionError, MailService, Thief};
use mailroom::{Config, Item};

/// What happened to one item.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Delivered { item: Item },
    Rejected { failure: FailureKind, message: String },
}

impl Outcome {
    fn from_result(result: &Result<Item, InspectionError>) -> Self {
        match result {
            Ok(item) => Outcome::Delivered { item: item.clone() },
            Err(err) => Outcome::Rejected {
                failure: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Summary of a batch run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
    pub delivered: usize,
    pub rejected: usize,
    pub stolen_value: i64,
}

/// Send one item through the configured pipeline.
///
/// A rejected item is reported and turned into an error so the process
/// exits non-zero.
pub fn handle_send(config: &Config, item: Item, json: bool) -> Result<()> {
    let mut worker = config.build_worker(Arc::new(TracingSink));
    let result = worker.process(item);
    let outcome = Outcome::from_result(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if let Ok(item) = &result {
        println!("Delivered {}", describe(item));
    }

    result.map(|_| ()).map_err(anyhow::Error::new)
}

/// Send every item in a JSON array through one pipeline.
pub fn handle_run(config: &Config, file: &Path, json: bool) -> Result<()> {
    let items = read_items(file)?;
    let mut worker = config.build_worker(Arc::new(TracingSink));

    let outcomes: Vec<Outcome> = items
        .into_iter()
        .map(|item| Outcome::from_result(&worker.process(item)))
        .collect();

    let report = RunReport {
        delivered: worker.real_mail_service().delivered(),
        rejected: outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Rejected { .. }))
            .count(),
        stolen_value: worker.service::<Thief>().map_or(0, Thief::stolen_value),
        outcomes,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (i, outcome) in report.outcomes.iter().enumerate() {
        match outcome {
            Outcome::Delivered { item } => println!("{:>3}. delivered {}", i + 1, describe(item)),
            Outcome::Rejected { message, .. } => println!("{:>3}. rejected: {}", i + 1, message),
        }
    }
    println!(
        "{} delivered, {} rejected, {} stolen",
        report.delivered, report.rejected, report.stolen_value
    );
    Ok(())
}

fn read_items(file: &Path) -> Result<Vec<Item>> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read items from stdin")?;
        buf
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Failed to read items file: {}", file.display()))?
    };
    serde_json::from_str(&content).context("Items must be a JSON array of messages and packages")
}

/// One-line human description of an item.
fn describe(item: &Item) -> String {
    match item {
        Item::Message(m) => format!("message from {} to {}: \"{}\"", m.from, m.to, m.text),
        Item::Package(p) => match &p.content {
            Some(parcel) => format!(
                "package from {} to {}: {} (declared value {})",
                p.from,
                p.to,
                parcel.description.as_deref().unwrap_or("<no description>"),
                parcel.declared_value
            ),
            None => format!("empty package from {} to {}", p.from, p.to),
        },
    }
}
