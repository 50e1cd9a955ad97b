/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::graph_base::GraphBase;
use crate::ramsey::simple_undirected_graph::SimpleUndirectedGraph;
use crate::ramsey::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;

pub trait Complement: GraphBase {
    /// The graph on the same vertices whose edges are exactly the non-edges
    /// of `self` (excluding self-loops).
    fn get_complement(&self) -> SimpleUndirectedGraph {
        let num_nodes = self.count_nodes();
        let mut builder = SimpleUndirectedGraphBuilder::with_nodes(num_nodes);
        for u in 0..num_nodes {
            for v in u + 1..num_nodes {
                if !self.has_edge(u, v) {
                    builder.add_edge(u, v);
                }
            }
        }
        builder.build()
    }
}
