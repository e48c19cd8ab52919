//! Command-line arguments of the `physcalc` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use physcalc::table::Domain;

#[derive(Parser, Debug)]
#[command(name = "physcalc", about = "Physical and astronomical constants calculator")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List constants, optionally restricted to one domain
    List {
        /// general, electrodynamics, quantum, thermodynamics, solar, planetary or astronomical
        #[arg(short = 'd', long = "domain")]
        domain: Option<Domain>,

        /// Print JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// Look up constants by symbol or name
    Get {
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// Convert energies from Joules to electron-volts
    J2ev {
        #[arg(required = true, allow_hyphen_values = true)]
        joules: Vec<f64>,
    },

    /// Convert energies from electron-volts to Joules
    Ev2j {
        #[arg(required = true, allow_hyphen_values = true)]
        ev: Vec<f64>,
    },

    /// Write every constant to a file
    Export {
        path: PathBuf,

        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_energies() {
        let args = Args::try_parse_from(["physcalc", "j2ev", "0", "1", "-5"]).unwrap();
        match args.command {
            Command::J2ev { joules } => assert_eq!(joules, vec![0.0, 1.0, -5.0]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_negative_scientific_notation() {
        let args = Args::try_parse_from(["physcalc", "j2ev", "-1.6e-19", "2e-3"]).unwrap();
        match args.command {
            Command::J2ev { joules } => assert_eq!(joules, vec![-1.6e-19, 2e-3]),
            other => panic!("unexpected command {:?}", other),
        }

        let args = Args::try_parse_from(["physcalc", "ev2j", "-0.5e-3", "-1e3"]).unwrap();
        match args.command {
            Command::Ev2j { ev } => assert_eq!(ev, vec![-0.5e-3, -1e3]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_energy() {
        assert!(Args::try_parse_from(["physcalc", "j2ev", "-x"]).is_err());
    }

    #[test]
    fn parses_domain_filter() {
        let args = Args::try_parse_from(["physcalc", "list", "--domain", "Solar"]).unwrap();
        match args.command {
            Command::List { domain, json } => {
                assert_eq!(domain, Some(Domain::Solar));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_domain() {
        assert!(Args::try_parse_from(["physcalc", "list", "--domain", "optics"]).is_err());
    }

    #[test]
    fn get_requires_a_query() {
        assert!(Args::try_parse_from(["physcalc", "get"]).is_err());
    }

    #[test]
    fn export_defaults_to_csv() {
        let args = Args::try_parse_from(["physcalc", "export", "out.csv"]).unwrap();
        match args.command {
            Command::Export { path, format } => {
                assert_eq!(path, PathBuf::from("out.csv"));
                assert_eq!(format, ExportFormat::Csv);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
