//! Rendering of reservations and nearest-reservation summaries.
//!
//! Every command that prints records goes through here so the table, JSON,
//! CSV and TSV renditions stay column-compatible.

use crate::error::CliError;
use crate::utils::format_timestamp;
use bookit::config::OutputFormat;
use bookit::{Nearest, Reservation, ResourceId};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Column headers for reservation output.
const RESERVATION_HEADERS: [&str; 9] = [
    "id",
    "resource",
    "resource_name",
    "owner",
    "requester",
    "requester_name",
    "start",
    "end",
    "status",
];

/// Column headers for nearest output.
const NEAREST_HEADERS: [&str; 7] = [
    "resource",
    "last_id",
    "last_start",
    "last_end",
    "next_id",
    "next_start",
    "next_end",
];

/// Output format accepted by `--format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

/// Picks the explicit `--format` if given, else the configured default.
pub fn resolve_format(arg: Option<FormatArg>, configured: OutputFormat) -> OutputFormat {
    arg.map_or(configured, OutputFormat::from)
}

fn reservation_row(r: &Reservation) -> [String; 9] {
    [
        r.id().to_string(),
        r.resource().id.to_string(),
        r.resource().name.clone(),
        r.owner().to_string(),
        r.requester().id.to_string(),
        r.requester().name.clone(),
        format_timestamp(r.start()),
        format_timestamp(r.end()),
        r.status().to_string(),
    ]
}

fn nearest_row(resource: ResourceId, nearest: &Nearest, empty: &str) -> [String; 7] {
    let id = |r: Option<&Reservation>| r.map_or_else(|| empty.to_string(), |r| r.id().to_string());
    let start = |r: Option<&Reservation>| {
        r.map_or_else(|| empty.to_string(), |r| format_timestamp(r.start()))
    };
    let end =
        |r: Option<&Reservation>| r.map_or_else(|| empty.to_string(), |r| format_timestamp(r.end()));

    let last = nearest.last.as_ref();
    let next = nearest.next.as_ref();
    [
        resource.to_string(),
        id(last),
        start(last),
        end(last),
        id(next),
        start(next),
        end(next),
    ]
}

fn write_table<W: Write, const N: usize>(
    out: &mut W,
    headers: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<(), CliError> {
    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;
    for row in rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

fn write_delimited<W: Write, const N: usize>(
    out: W,
    delimiter: u8,
    headers: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes reservations in the requested format.
pub fn write_reservations<W: Write>(
    mut out: W,
    format: OutputFormat,
    reservations: &[Reservation],
) -> Result<(), CliError> {
    let rows = reservations.iter().map(reservation_row);
    match format {
        OutputFormat::Table => write_table(&mut out, RESERVATION_HEADERS, rows),
        OutputFormat::Json => write_json(out, reservations),
        OutputFormat::Csv => write_delimited(out, b',', RESERVATION_HEADERS, rows),
        OutputFormat::Tsv => write_delimited(out, b'\t', RESERVATION_HEADERS, rows),
    }
}

#[derive(Serialize)]
struct NearestEntry<'a> {
    resource: ResourceId,
    last: Option<&'a Reservation>,
    next: Option<&'a Reservation>,
}

/// Writes nearest summaries, one line per resource in the given order.
pub fn write_nearest<W: Write>(
    mut out: W,
    format: OutputFormat,
    entries: &[(ResourceId, Nearest)],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(
            &mut out,
            NEAREST_HEADERS,
            entries.iter().map(|(id, n)| nearest_row(*id, n, "-")),
        ),
        OutputFormat::Json => {
            let json: Vec<_> = entries
                .iter()
                .map(|(resource, n)| NearestEntry {
                    resource: *resource,
                    last: n.last.as_ref(),
                    next: n.next.as_ref(),
                })
                .collect();
            write_json(out, &json)
        }
        OutputFormat::Csv => write_delimited(
            out,
            b',',
            NEAREST_HEADERS,
            entries.iter().map(|(id, n)| nearest_row(*id, n, "")),
        ),
        OutputFormat::Tsv => write_delimited(
            out,
            b'\t',
            NEAREST_HEADERS,
            entries.iter().map(|(id, n)| nearest_row(*id, n, "")),
        ),
    }
}
