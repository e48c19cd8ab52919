//! Command-line front end for the constant registry and energy conversions.
//!
//! ```text
//! physcalc list --domain solar
//! physcalc get hbar Msun
//! physcalc j2ev 1 -5
//! physcalc export constants.json --format json
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostic output on stderr.

mod cli;

use std::io::{self, BufWriter, Write};

use clap::Parser;
use itertools::Itertools;
use ndarray::Array1;

use physcalc::error::PhysCalcResult;
use physcalc::table::{self, Domain, PhysicalConstant, CONSTANTS};
use physcalc::units::{ev2j_array, j2ev_array};
use physcalc::utils::{write_csv, write_json};

use cli::{Args, Command, ExportFormat};

fn main() {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(args.command, &mut out).and_then(|()| Ok(out.flush()?));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run<W: Write>(command: Command, out: &mut W) -> PhysCalcResult<()> {
    match command {
        Command::List { domain, json } => {
            let selected: Vec<PhysicalConstant> = match domain {
                Some(domain) => table::by_domain(domain).copied().collect(),
                None => CONSTANTS.to_vec(),
            };
            write_constants(&selected, json, out)
        }
        Command::Get { queries, json } => {
            let found = queries
                .iter()
                .map(|q| table::lookup(q).copied())
                .collect::<PhysCalcResult<Vec<_>>>()?;
            write_constants(&found, json, out)
        }
        Command::J2ev { joules } => {
            let joules = Array1::from(joules);
            let ev = j2ev_array(&joules);
            for (j, e) in joules.iter().zip(ev.iter()) {
                writeln!(out, "{:e} J = {:e} eV", j, e)?;
            }
            Ok(())
        }
        Command::Ev2j { ev } => {
            let ev = Array1::from(ev);
            let joules = ev2j_array(&ev);
            for (e, j) in ev.iter().zip(joules.iter()) {
                writeln!(out, "{:e} eV = {:e} J", e, j)?;
            }
            Ok(())
        }
        Command::Export { path, format } => {
            match format {
                ExportFormat::Csv => write_csv(CONSTANTS, &path)?,
                ExportFormat::Json => write_json(CONSTANTS, &path)?,
            }
            writeln!(out, "Wrote {} constants to {}", CONSTANTS.len(), path.display())?;
            Ok(())
        }
    }
}

fn domain_rank(domain: Domain) -> usize {
    Domain::ALL
        .iter()
        .position(|d| *d == domain)
        .unwrap_or(Domain::ALL.len())
}

/// Writes constants as a table with one heading per domain, or as JSON.
///
/// Table rows are ordered by domain so each heading appears once; the order
/// within a domain is the caller's.
fn write_constants<W: Write>(
    constants: &[PhysicalConstant],
    json: bool,
    out: &mut W,
) -> PhysCalcResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, constants)?;
        writeln!(out)?;
        return Ok(());
    }

    let symbol_width = constants.iter().map(|c| c.symbol.len()).max().unwrap_or(0);
    let name_width = constants.iter().map(|c| c.name.len()).max().unwrap_or(0);

    let ordered = constants.iter().sorted_by_key(|c| domain_rank(c.domain));
    for (domain, group) in &ordered.group_by(|c| c.domain) {
        writeln!(out, "[{}]", domain)?;
        for c in group {
            let marker = if c.derived { "*" } else { " " };
            writeln!(
                out,
                "  {:<sw$}  {:<nw$}  {:>16.9e}{} {}",
                c.symbol,
                c.name,
                c.value,
                marker,
                c.unit,
                sw = symbol_width,
                nw = name_width,
            )?;
        }
    }

    if constants.iter().any(|c| c.derived) {
        writeln!(out, "\n* derived from other constants")?;
    }

    Ok(())
}
