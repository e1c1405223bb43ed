// src/bin/mftm.rs

//! Driver program _mftm_ drives the [_mftmlib_].
//!
//! Processes user-passed command-line arguments.
//! The one passed path is processed by a [`LogReader`] into an ordered
//! [`Event`] sequence, which is reduced to the derived collections
//! (a [`ScheduledTransfer`] sequence and a [`CategorizedSummary`]).
//! The event sequence and both derived collections are exported as
//! pretty-printed JSON artifacts.
//!
//! If passed CLI option `--summary`, prints a summary of processing
//! counts and derived statistics.
//!
//! [_mftmlib_]: mftmlib
//! [`LogReader`]: mftmlib::readers::logreader::LogReader
//! [`Event`]: mftmlib::data::event::Event
//! [`ScheduledTransfer`]: mftmlib::data::scheduled::ScheduledTransfer
//! [`CategorizedSummary`]: mftmlib::reducers::categorizer::CategorizedSummary

#![allow(non_camel_case_types)]

// first setup the custom global allocator
cfg_if::cfg_if! {
    if #[cfg(feature = "jemalloc")] {
        use ::tikv_jemallocator::Jemalloc;
        #[global_allocator]
        static GLOBAL: Jemalloc = Jemalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "jemalloc";
    }
    else if #[cfg(feature = "mimalloc")] {
        use ::mimalloc::MiMalloc;
        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "mimalloc";
    }
    else {
        const CLI_HELP_AFTER_ALLOCATOR: &str = "system";
    }
}

use std::process::ExitCode;

use ::anyhow::Context;
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
use ::mftmlib::common::FPath;
use ::mftmlib::data::scheduled::ScheduledTransfer;
use ::mftmlib::e_err;
use ::mftmlib::e_wrn;
use ::mftmlib::printer::printers::{ColorChoice, JsonSink};
use ::mftmlib::printer::summary::print_summary;
use ::mftmlib::readers::logreader::LogReader;
use ::mftmlib::reducers::categorizer::{categorize_events, CategorizedSummary};
use ::mftmlib::reducers::correlator::correlate_scheduled;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// --------------------
// command-line parsing

/// user-passed output path signifying STDOUT
const OUTPUT_STDOUT: &str = "-";

const CLI_HELP_AFTER: &str = concatcp!(
    "\
Datetime stamps in the log are expected in the form \"2025-01-02T03:04:05\"
(ISO-8601 without a timezone offset, as written by the MFT subsystem).

Lines that cannot be parsed are dropped with a warning; lines of
unsupported event types are dropped silently. Neither fails the run.

Passing \"",
    OUTPUT_STDOUT,
    "\" for an output path writes that JSON artifact to STDOUT.",
);

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// Parsed command-line arguments.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "mftm",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(MFT Log Melder)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "Allocator: ", CLI_HELP_AFTER_ALLOCATOR, "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the MFT event log file to process.
    #[clap(required = true)]
    path: String,

    /// Write the parsed events as JSON to this path.
    #[clap(
        short = 'm',
        long,
        default_value = "merged_transfers.json",
    )]
    merged_output: String,

    /// Write the correlated scheduled transfers as JSON to this path.
    #[clap(
        short = 'd',
        long,
        default_value = "scheduled_transfers.json",
    )]
    scheduled_output: String,

    /// Write the categorized entity summary as JSON to this path.
    #[clap(
        short = 'g',
        long,
        default_value = "categorized_summary.json",
    )]
    categorized_output: String,

    /// Do not write any JSON artifact.
    #[clap(short = 'n', long)]
    no_export: bool,

    /// Print a summary of processing counts and derived statistics.
    #[clap(short, long)]
    summary: bool,

    /// Choose to print to terminal using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,
}

// --------------------
// processing

/// Process the passed log file and write the JSON artifacts.
fn run(
    args: &CLI_Args,
    color_choice: ColorChoice,
) -> anyhow::Result<()> {
    defn!("({:?})", args.path);
    let logreader = LogReader::new(args.path.clone())
        .with_context(|| format!("Unable to read {:?}", args.path))?;
    for rejected_line in logreader.rejected().iter() {
        e_wrn!(
            "skipping malformed line {}: {}: {:?}",
            rejected_line.line_num,
            rejected_line.reason,
            rejected_line.line,
        );
    }

    let scheduled: Vec<ScheduledTransfer> = correlate_scheduled(logreader.events());
    let categorized: CategorizedSummary = categorize_events(logreader.events());
    defo!(
        "{} events, {} scheduled transfers",
        logreader.count_events(),
        scheduled.len(),
    );

    if !args.no_export {
        JsonSink::from_path(&args.merged_output)
            .write(logreader.events())
            .with_context(|| format!("Unable to write {:?}", args.merged_output))?;
        JsonSink::from_path(&args.scheduled_output)
            .write(&scheduled)
            .with_context(|| format!("Unable to write {:?}", args.scheduled_output))?;
        JsonSink::from_path(&args.categorized_output)
            .write(&categorized)
            .with_context(|| format!("Unable to write {:?}", args.categorized_output))?;
    }

    if args.summary {
        let path: &FPath = logreader.path();
        print_summary(
            path,
            &logreader.summary(),
            logreader.rejected(),
            logreader.events(),
            &scheduled,
            &categorized,
            color_choice,
        )
        .context("Unable to print summary")?;
    }
    defx!();

    Ok(())
}

// --------------------
// main

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };

    let exitcode: ExitCode = match run(&args, color_choice) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            e_err!("{:#}", err);
            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
