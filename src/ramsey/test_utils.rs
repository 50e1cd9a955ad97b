/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::aggregate::ResultAggregate;
use crate::ramsey::config::TransformerConfig;
use crate::ramsey::error::RamseyResult;
use crate::ramsey::graph6::Graph6Codec;
use crate::ramsey::input::Input;
use crate::ramsey::simple_undirected_graph::SimpleUndirectedGraph;
use crate::ramsey::transformer::RamseyTransformer;

pub fn gen_test_transformer(
    num_nodes: usize,
    red_size: usize,
    blue_size: usize,
    num_workers: usize,
) -> RamseyTransformer {
    let config = TransformerConfig::new(num_nodes, red_size, blue_size).with_workers(num_workers);
    RamseyTransformer::new(config)
}

/// graph6 tokens for `graphs`, one per line, each prefixed with `<id>,` when
/// `with_ids` is set.
pub fn gen_input_lines(graphs: &[SimpleUndirectedGraph], with_ids: bool) -> Vec<String> {
    graphs
        .iter()
        .enumerate()
        .map(|(i, graph)| {
            let token = Graph6Codec::new(graph.neighbors.len()).encode(graph);
            if with_ids {
                format!("{},{}", i, token)
            } else {
                token
            }
        })
        .collect()
}

pub fn run_on_lines(transformer: &RamseyTransformer, lines: &[String]) -> RamseyResult<ResultAggregate> {
    let raw: String = lines.join("\n");
    let bytes = raw.as_bytes();
    let input = Input::string(bytes);
    transformer.run(input)
}
