/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::algorithms::cliques::{Cliques, SearchStrategy};
use crate::ramsey::algorithms::complement::Complement;
use crate::ramsey::graph6::Graph6Codec;
use crate::ramsey::graph_base::GraphBase;
use crate::ramsey::line_processor::WorkItem;
use crate::ramsey::record::EvaluationRecord;
use tracing::{trace, warn};

/// Parameters shared by every evaluation in a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EvaluatorConfig {
    pub num_nodes: usize,
    pub red_size: usize,
    pub blue_size: usize,
    pub include_edges: bool,
    pub strategy: SearchStrategy,
}

/// Decodes a work item and runs the red census on the graph and the blue
/// census on its complement. Holds no mutable state, so one instance is
/// shared by all workers.
pub struct GraphEvaluator {
    config: EvaluatorConfig,
    codec: Graph6Codec,
}

impl GraphEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            codec: Graph6Codec::new(config.num_nodes),
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn evaluate(&self, item: &WorkItem) -> EvaluationRecord {
        let decoded = self.codec.decode(&item.token);
        if let Some(error) = decoded.as_error() {
            warn!(graph_id = item.graph_id.value(), "{}; evaluating what was read", error);
        }
        let graph = decoded.graph;
        let red = graph.find_clique_with(self.config.red_size, self.config.strategy);
        let complement = graph.get_complement();
        let blue = complement.find_clique_with(self.config.blue_size, self.config.strategy);
        trace!(
            graph_id = item.graph_id.value(),
            red_count = red.count,
            blue_count = blue.count,
            "evaluated graph"
        );
        let (red_edges, blue_edges) = if self.config.include_edges {
            (Some(graph.get_edges()), Some(complement.get_edges()))
        } else {
            (None, None)
        };
        EvaluationRecord {
            graph_id: item.graph_id,
            sequence: item.sequence,
            red,
            blue,
            red_edges,
            blue_edges,
        }
    }
}
