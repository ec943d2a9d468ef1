//! Build script for bookit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("bookit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Share items through owner-approved reservations")
        .long_about(
            "Command-line front end for the bookit reservation engine: request, approve, \
             cancel and list reservations on shared items",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("BOOKIT_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("BOOKIT_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("BOOKIT_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("actor")
                .about("Manage actors")
                .long_about("Register actors; `actor add --name NAME` prints the new id"),
            Command::new("resource")
                .about("Manage resources")
                .long_about(
                    "Register resources for an owner; `resource add --owner ID --name NAME` \
                     prints the new id",
                ),
            Command::new("reserve")
                .about("Request a reservation on a resource")
                .long_about("Request a time window on a resource; the reservation starts WAITING"),
            Command::new("approve")
                .about("Approve or reject a waiting reservation (owner only)")
                .long_about("Record the owner's decision on a WAITING reservation"),
            Command::new("cancel")
                .about("Cancel a waiting reservation (requester only)")
                .long_about("Withdraw a WAITING reservation before the owner decides"),
            Command::new("show")
                .about("Show a single reservation")
                .long_about("Show a reservation to its requester or the resource owner"),
            Command::new("list")
                .about("List reservations by bucket with pagination")
                .long_about(
                    "List one page of an actor's reservations, as requester or as owner, \
                     filtered by a time or status bucket",
                ),
            Command::new("nearest")
                .about("Show the nearest past and upcoming approved reservation per resource")
                .long_about(
                    "Annotate resources with their latest past and earliest upcoming \
                     APPROVED reservation",
                ),
            Command::new("eligible")
                .about("Check whether an actor has completed a reservation on a resource")
                .long_about("Exit 0 when the actor holds an approved, ended reservation; 1 otherwise"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main bookit.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("bookit.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
