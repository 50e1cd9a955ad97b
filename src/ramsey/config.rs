/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use clap::{App, Arg, ArgMatches};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::ramsey::algorithms::cliques::SearchStrategy;
use crate::ramsey::error::{RamseyError, RamseyResult};
use crate::ramsey::evaluator::EvaluatorConfig;

pub const DEFAULT_DB_PATH: &str = "ramsey_results.db";
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Command line accepted by the `ramsey_census` binary.
pub fn command_line_app() -> App<'static, 'static> {
    App::new("Ramsey Census")
        .version("0.1.0")
        .about(
            "Reads graph6 graphs from stdin, counts red K_r cliques in each graph and blue \
             K_s cliques in its complement, and writes the results to a SQLite table \
             (r<RED><BLUE>) or to stdout.",
        )
        .arg(
            Arg::with_name("red")
                .required(true)
                .index(1)
                .help("Size of red clique to search for (e.g., 3)"),
        )
        .arg(
            Arg::with_name("blue")
                .required(true)
                .index(2)
                .help("Size of blue clique to search for in the complement (e.g., 4)"),
        )
        .arg(
            Arg::with_name("workers")
                .short("w")
                .long("workers")
                .takes_value(true)
                .help("Number of worker threads (default: number of CPUs)"),
        )
        .arg(
            Arg::with_name("queue_capacity")
                .long("queue-capacity")
                .takes_value(true)
                .help("Max number of lines buffered ahead of the workers; 0 for unbounded (default: 1024)"),
        )
        .arg(
            Arg::with_name("db")
                .long("db")
                .takes_value(true)
                .help("SQLite database path (default: ramsey_results.db)"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["sqlite", "tsv", "json"])
                .help("Where to write results (default: sqlite)"),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .takes_value(true)
                .possible_values(&["pruned", "exhaustive"])
                .help("Clique enumeration strategy; both give identical results (default: pruned)"),
        )
        .arg(
            Arg::with_name("no_edges")
                .long("no-edges")
                .help("Do not record the edge lists of each graph and its complement"),
        )
}

/// Vertex counts to check for each (red, blue) clique-size pair. Built once
/// and only read afterwards.
pub struct RamseyTable {
    entries: BTreeMap<(usize, usize), usize>,
}
impl RamseyTable {
    pub fn standard() -> Self {
        let entries: BTreeMap<(usize, usize), usize> = vec![
            ((3, 3), 6),
            ((3, 4), 9),
            ((3, 5), 14),
            ((3, 6), 18),
            ((3, 7), 23),
            ((3, 8), 28),
            ((3, 9), 36),
            ((4, 4), 18),
            ((4, 5), 25),
            ((4, 6), 41),
            ((4, 7), 49),
            ((5, 5), 43),
            ((5, 6), 102),
        ]
        .into_iter()
        .collect();
        Self { entries }
    }

    /// Looks the pair up as given; (4, 3) is not the same entry as (3, 4).
    pub fn lookup(&self, red: usize, blue: usize) -> RamseyResult<usize> {
        self.entries
            .get(&(red, blue))
            .copied()
            .ok_or(RamseyError::UnknownParameters { red, blue })
    }

    pub fn pairs(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.entries.keys()
    }
}
impl Default for RamseyTable {
    fn default() -> Self {
        RamseyTable::standard()
    }
}

/// Where evaluation records go once the pipeline has drained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Sqlite,
    Tsv,
    Json,
}
impl FromStr for OutputFormat {
    type Err = RamseyError;
    fn from_str(s: &str) -> RamseyResult<Self> {
        match s {
            "sqlite" => Ok(OutputFormat::Sqlite),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s).into()),
        }
    }
}

/// Everything a run needs: the evaluator parameters, the worker pool shape
/// and the persistence target.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformerConfig {
    pub evaluator: EvaluatorConfig,
    pub num_workers: usize,
    /// None means an unbounded queue.
    pub queue_capacity: Option<usize>,
    pub output_format: OutputFormat,
    pub db_path: String,
}
impl TransformerConfig {
    pub fn new(num_nodes: usize, red_size: usize, blue_size: usize) -> Self {
        Self {
            evaluator: EvaluatorConfig {
                num_nodes,
                red_size,
                blue_size,
                include_edges: true,
                strategy: SearchStrategy::default(),
            },
            num_workers: num_cpus::get(),
            queue_capacity: Some(DEFAULT_QUEUE_CAPACITY),
            output_format: OutputFormat::Sqlite,
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }

    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: Option<usize>) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_edges(mut self, include_edges: bool) -> Self {
        self.evaluator.include_edges = include_edges;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.evaluator.strategy = strategy;
        self
    }

    /// SQLite table the records of this run are written to, e.g. `r34`.
    pub fn table_name(&self) -> String {
        format!("r{}{}", self.evaluator.red_size, self.evaluator.blue_size)
    }

    /// constructs a config from an ArgMatches object (to help with command line arguments).
    /// The (red, blue) pair must be present in `table`.
    pub fn from_argmatches(matches: &ArgMatches, table: &RamseyTable) -> RamseyResult<Self> {
        let arg_value = |name: &str| -> RamseyResult<&str> {
            matches
                .value_of(name)
                .ok_or_else(|| RamseyError::from(format!("Missing required argument: {}", name)))
        };
        let red_size: usize = arg_value("red")?.parse::<usize>()?;
        let blue_size: usize = arg_value("blue")?.parse::<usize>()?;
        let num_nodes = table.lookup(red_size, blue_size)?;

        let mut config = TransformerConfig::new(num_nodes, red_size, blue_size);
        if let Some(workers) = matches.value_of("workers") {
            config = config.with_workers(workers.parse::<usize>()?);
        }
        if let Some(capacity) = matches.value_of("queue_capacity") {
            let capacity = capacity.parse::<usize>()?;
            config = config.with_queue_capacity(if capacity == 0 { None } else { Some(capacity) });
        }
        if let Some(format) = matches.value_of("format") {
            config.output_format = format.parse::<OutputFormat>()?;
        }
        if let Some(db_path) = matches.value_of("db") {
            config.db_path = db_path.to_string();
        }
        if let Some(strategy) = matches.value_of("strategy") {
            config = config.with_strategy(strategy.parse::<SearchStrategy>()?);
        }
        config = config.with_edges(!matches.is_present("no_edges"));
        Ok(config)
    }
}
