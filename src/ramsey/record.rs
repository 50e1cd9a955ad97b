/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::algorithms::cliques::CliqueSearchResult;
use crate::ramsey::id_types::GraphId;
use itertools::Itertools;
use serde_json::{json, Value};

/// Outcome of evaluating one input graph. `red` describes cliques of the red
/// size in the graph itself, `blue` cliques of the blue size in its
/// complement. Edge lists are only present when they were requested.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationRecord {
    pub graph_id: GraphId,
    pub sequence: u64,
    pub red: CliqueSearchResult,
    pub blue: CliqueSearchResult,
    pub red_edges: Option<Vec<(usize, usize)>>,
    pub blue_edges: Option<Vec<(usize, usize)>>,
}

impl EvaluationRecord {
    /// True when the graph has neither a red nor a blue clique, i.e. it
    /// witnesses that R(r, s) exceeds its vertex count.
    pub fn is_counterexample(&self) -> bool {
        self.red.count == 0 && self.blue.count == 0
    }
    pub fn red_witness_string(&self) -> String {
        self.red.witness.iter().join(",")
    }
    pub fn blue_witness_string(&self) -> String {
        self.blue.witness.iter().join(",")
    }
    pub fn red_edges_string(&self) -> Option<String> {
        self.red_edges.as_ref().map(|edges| edges_to_string(edges))
    }
    pub fn blue_edges_string(&self) -> Option<String> {
        self.blue_edges.as_ref().map(|edges| edges_to_string(edges))
    }

    /// graph_id, red count, red witness, blue count, blue witness and, when
    /// present, both edge lists, tab-separated.
    pub fn as_tsv_line(&self) -> String {
        let mut fields: Vec<String> = vec![
            self.graph_id.to_string(),
            self.red.count.to_string(),
            self.red_witness_string(),
            self.blue.count.to_string(),
            self.blue_witness_string(),
        ];
        if let (Some(red_edges), Some(blue_edges)) =
            (self.red_edges_string(), self.blue_edges_string())
        {
            fields.push(red_edges);
            fields.push(blue_edges);
        }
        fields.join("\t")
    }

    pub fn as_json(&self) -> Value {
        json!({
            "graph_id": self.graph_id.value(),
            "k_red_count": self.red.count,
            "k_red": self.red.witness,
            "k_blue_count": self.blue.count,
            "k_blue": self.blue.witness,
            "red_edges": self.red_edges_string(),
            "blue_edges": self.blue_edges_string(),
        })
    }
}

fn edges_to_string(edges: &[(usize, usize)]) -> String {
    edges.iter().map(|(u, v)| format!("{}:{}", u, v)).join(",")
}
