/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

extern crate clap;
extern crate rand;
extern crate thiserror;

pub mod ramsey;

pub use ramsey::aggregate::ResultAggregate;
pub use ramsey::algorithms::cliques::{CliqueSearchResult, Cliques, SearchStrategy};
pub use ramsey::algorithms::complement::Complement;
pub use ramsey::config::{command_line_app, OutputFormat, RamseyTable, TransformerConfig};
pub use ramsey::evaluator::{EvaluatorConfig, GraphEvaluator};
pub use ramsey::graph6::{DecodedGraph, Graph6Codec};
pub use ramsey::graph_base::GraphBase;
pub use ramsey::id_types::GraphId;
pub use ramsey::input::Input;
pub use ramsey::line_processor::{LineProcessor, WorkItem};
pub use ramsey::output::Output;
pub use ramsey::record::EvaluationRecord;
pub use ramsey::simple_undirected_graph::SimpleUndirectedGraph;
pub use ramsey::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;
pub use ramsey::sink::{RecordSink, SqliteStore, TextSink};
pub use ramsey::test_utils::*;
pub use ramsey::transformer::RamseyTransformer;
