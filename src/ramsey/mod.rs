/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod aggregate;
pub mod algorithms;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod graph6;
pub mod graph_base;
pub mod id_types;
pub mod input;
pub mod line_processor;
pub mod output;
pub mod record;
pub mod simple_undirected_graph;
pub mod simple_undirected_graph_builder;
pub mod sink;
pub mod test_utils;
pub mod transformer;
