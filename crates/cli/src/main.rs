// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod output;

use clap::{Parser, Subcommand};
use little_lemon::{Clock, SystemClock};
use little_lemon_api::{
    ApiError, BookingRequest, ConfirmationResponse, ValidationErrorResponse, book,
    check_availability,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Little Lemon - table reservations from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level used when `RUST_LOG` is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the open time slots for a date
    Slots {
        /// Reservation date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Book a table
    Book(BookArgs),
}

/// Booking values, given as flags or as a JSON request file.
#[derive(clap::Args, Debug)]
struct BookArgs {
    /// Read the booking from a JSON file
    #[arg(
        long,
        conflicts_with_all = ["date", "time", "guests", "occasion", "name", "email", "phone", "special_requests"]
    )]
    request: Option<PathBuf>,

    /// Reservation date (YYYY-MM-DD)
    #[arg(long, required_unless_present = "request")]
    date: Option<String>,

    /// Time slot, e.g. 19:30
    #[arg(long, required_unless_present = "request")]
    time: Option<String>,

    /// Number of guests
    #[arg(long, required_unless_present = "request", allow_negative_numbers = true)]
    guests: Option<String>,

    /// Occasion: birthday, anniversary, engagement, business or other
    #[arg(long, required_unless_present = "request")]
    occasion: Option<String>,

    /// Guest name
    #[arg(long, required_unless_present = "request")]
    name: Option<String>,

    /// Contact email
    #[arg(long, required_unless_present = "request")]
    email: Option<String>,

    /// Contact phone number
    #[arg(long, required_unless_present = "request")]
    phone: Option<String>,

    /// Special requests
    #[arg(long)]
    special_requests: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Errors that stop a command before it produces a result.
#[derive(Debug)]
enum CliError {
    /// The request file could not be read.
    ReadRequest {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The request file is not a booking request.
    ParseRequest(serde_json::Error),
    /// A booking flag was not given.
    MissingArgument(&'static str),
    /// Output could not be serialized.
    Render(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadRequest { path, source } => {
                write!(f, "Failed to read request file '{}': {source}", path.display())
            }
            Self::ParseRequest(err) => write!(f, "Invalid booking request: {err}"),
            Self::MissingArgument(flag) => write!(f, "Missing required argument --{flag}"),
            Self::Render(err) => write!(f, "Failed to render output: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadRequest { source, .. } => Some(source),
            Self::ParseRequest(err) | Self::Render(err) => Some(err),
            Self::MissingArgument(_) => None,
        }
    }
}

/// The result of a command: text to print and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Report {
    Success(String),
    Failure(String),
}

fn required<T>(value: Option<T>, flag: &'static str) -> Result<T, CliError> {
    value.ok_or(CliError::MissingArgument(flag))
}

fn parse_request(json: &str) -> Result<BookingRequest, CliError> {
    serde_json::from_str(json).map_err(CliError::ParseRequest)
}

fn load_request(path: &Path) -> Result<BookingRequest, CliError> {
    let contents: String =
        std::fs::read_to_string(path).map_err(|source| CliError::ReadRequest {
            path: path.to_path_buf(),
            source,
        })?;
    parse_request(&contents)
}

impl BookArgs {
    fn into_request(self) -> Result<BookingRequest, CliError> {
        if let Some(path) = &self.request {
            debug!(path = %path.display(), "Reading booking request");
            return load_request(path);
        }

        Ok(BookingRequest {
            date: required(self.date, "date")?,
            time: required(self.time, "time")?,
            guests: required(self.guests, "guests")?,
            occasion: required(self.occasion, "occasion")?,
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            phone: required(self.phone, "phone")?,
            special_requests: self.special_requests,
        })
    }
}

fn failure(err: &ApiError, json: bool) -> Result<Report, CliError> {
    output::render_failure(&ValidationErrorResponse::from(err), json)
        .map(Report::Failure)
        .map_err(CliError::Render)
}

fn run<C: Clock>(command: Commands, clock: C) -> Result<Report, CliError> {
    match command {
        Commands::Slots { date, json } => match check_availability(date.as_deref(), &clock) {
            Ok(response) => output::render_slots(&response, json)
                .map(Report::Success)
                .map_err(CliError::Render),
            Err(err) => failure(&err, json),
        },
        Commands::Book(args) => {
            let json: bool = args.json;
            let request: BookingRequest = args.into_request()?;
            match book(&request, clock) {
                Ok(details) => {
                    info!(date = %details.date, time = %details.time, "Reservation confirmed");
                    output::render_confirmation(&ConfirmationResponse::from(details), json)
                        .map(Report::Success)
                        .map_err(CliError::Render)
                }
                Err(err) => {
                    info!(%err, "Reservation not accepted");
                    failure(&err, json)
                }
            }
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let args: Args = Args::parse();
    init_tracing(&args.log_level);

    match run(args.command, SystemClock) {
        Ok(Report::Success(text)) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Report::Failure(text)) => {
            print!("{text}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(%err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
