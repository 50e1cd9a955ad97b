/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate lib_ramsey_census;

use std::io;
use std::process;
use std::time::Instant;

use clap::ArgMatches;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lib_ramsey_census::ramsey::config::{
    command_line_app, OutputFormat, RamseyTable, TransformerConfig,
};
use lib_ramsey_census::ramsey::error::RamseyResult;
use lib_ramsey_census::ramsey::input::Input;
use lib_ramsey_census::ramsey::output::Output;
use lib_ramsey_census::ramsey::sink::{RecordSink, SqliteStore, TextSink};
use lib_ramsey_census::ramsey::transformer::RamseyTransformer;

fn get_command_line_args() -> ArgMatches<'static> {
    command_line_app().get_matches()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> RamseyResult<()> {
    let table = RamseyTable::standard();
    let config: TransformerConfig = TransformerConfig::from_argmatches(matches, &table)?;
    info!(
        num_nodes = config.evaluator.num_nodes,
        red = config.evaluator.red_size,
        blue = config.evaluator.blue_size,
        num_workers = config.num_workers,
        "Processing graphs"
    );

    let start_time = Instant::now();
    let transformer = RamseyTransformer::new(config.clone());
    let stdio: io::Stdin = io::stdin();
    let input: Input = Input::console(&stdio);
    let aggregate = transformer.run(input)?;
    info!(
        num_records = aggregate.len(),
        num_counterexamples = aggregate.count_counterexamples(),
        "Generated graph data in: {:.3} seconds.",
        start_time.elapsed().as_secs_f64()
    );

    let write_start_time = Instant::now();
    match config.output_format {
        OutputFormat::Sqlite => {
            let mut store = SqliteStore::open(&config.db_path, &config.table_name())?;
            store.write_aggregate(&aggregate)?;
            info!(
                "Wrote to db in: {:.3} seconds.",
                write_start_time.elapsed().as_secs_f64()
            );
        }
        format => {
            TextSink::new(Output::console(), format)?.write_aggregate(&aggregate)?;
        }
    }
    info!(
        "Total time: {:.3} seconds.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() {
    init_logging();
    let matches: ArgMatches = get_command_line_args();
    if let Err(error) = run(&matches) {
        eprintln!("{}", error);
        process::exit(1);
    }
}
