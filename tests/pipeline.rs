/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_ramsey_census;

use lib_ramsey_census::ramsey::algorithms::cliques::SearchStrategy;
use lib_ramsey_census::ramsey::config::TransformerConfig;
use lib_ramsey_census::ramsey::error::RamseyResult;
use lib_ramsey_census::ramsey::graph6::Graph6Codec;
use lib_ramsey_census::ramsey::graph_base::GraphBase;
use lib_ramsey_census::ramsey::id_types::GraphId;
use lib_ramsey_census::ramsey::record::EvaluationRecord;
use lib_ramsey_census::ramsey::simple_undirected_graph::SimpleUndirectedGraph;
use lib_ramsey_census::ramsey::simple_undirected_graph_builder::SimpleUndirectedGraphBuilder;
use lib_ramsey_census::ramsey::test_utils::{gen_input_lines, gen_test_transformer, run_on_lines};
use lib_ramsey_census::ramsey::transformer::RamseyTransformer;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_graphs(n: usize, num_graphs: usize, seed: u64) -> Vec<SimpleUndirectedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_graphs)
        .map(|i| SimpleUndirectedGraphBuilder::get_er_graph(n, (i % 5) as f64 / 4.0, &mut rng))
        .collect()
}

#[test]
fn test_cycle_has_no_triangle_but_complement_does() -> RamseyResult<()> {
    let transformer = gen_test_transformer(6, 3, 3, 2);
    let lines = gen_input_lines(&[SimpleUndirectedGraphBuilder::get_cycle_graph(6)], false);
    let aggregate = run_on_lines(&transformer, &lines)?;
    assert_eq!(aggregate.len(), 1);
    let record = aggregate.get(GraphId::from(0)).unwrap();
    assert_eq!(record.red.count, 0);
    assert!(record.red.witness.is_empty());
    // the complement of C6 is the triangular prism: triangles 0-2-4 and 1-3-5
    assert_eq!(record.blue.count, 2);
    assert_eq!(record.blue.witness, vec![0, 2, 4]);
    assert!(!record.is_counterexample());
    Ok(())
}

#[test]
fn test_complete_graph_record() -> RamseyResult<()> {
    let transformer = gen_test_transformer(4, 4, 2, 1);
    let lines = gen_input_lines(&[SimpleUndirectedGraphBuilder::get_complete_graph(4)], false);
    let record = run_on_lines(&transformer, &lines)?.into_sorted().remove(0);
    assert_eq!(record.red.count, 1);
    assert_eq!(record.red.witness, vec![0, 1, 2, 3]);
    assert_eq!(record.blue.count, 0);
    assert_eq!(record.red_edges.as_ref().map(|e| e.len()), Some(6));
    assert_eq!(record.blue_edges, Some(vec![]));
    Ok(())
}

#[test]
fn test_edgeless_graph_record() -> RamseyResult<()> {
    let transformer = gen_test_transformer(5, 2, 2, 3);
    let lines = gen_input_lines(&[SimpleUndirectedGraphBuilder::get_empty_graph(5)], false);
    let record = run_on_lines(&transformer, &lines)?.into_sorted().remove(0);
    assert_eq!(record.red.count, 0);
    assert_eq!(record.blue.count, 10);
    assert_eq!(record.blue.witness, vec![0, 1]);
    assert_eq!(record.red_edges, Some(vec![]));
    assert_eq!(record.blue_edges.as_ref().map(|e| e.len()), Some(10));
    Ok(())
}

#[test]
fn test_comment_lines_do_not_consume_ordinals() -> RamseyResult<()> {
    let codec = Graph6Codec::new(4);
    let complete = codec.encode(&SimpleUndirectedGraphBuilder::get_complete_graph(4));
    let empty = codec.encode(&SimpleUndirectedGraphBuilder::get_empty_graph(4));
    let lines: Vec<String> = vec![
        "> graph6 header".to_string(),
        complete.clone(),
        "".to_string(),
        "> another comment".to_string(),
        empty.clone(),
        complete,
    ];
    let transformer = gen_test_transformer(4, 3, 3, 4);
    let records = run_on_lines(&transformer, &lines)?.into_sorted();
    let ids: Vec<i64> = records.iter().map(|r| r.graph_id.value()).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(records[0].red.count, 4);
    assert_eq!(records[1].red.count, 0);
    assert_eq!(records[1].blue.count, 4);
    assert_eq!(records[2].red.count, 4);
    Ok(())
}

#[test]
fn test_explicit_ids_are_kept() -> RamseyResult<()> {
    let codec = Graph6Codec::new(4);
    let complete = codec.encode(&SimpleUndirectedGraphBuilder::get_complete_graph(4));
    let lines = vec![
        ">>graph6<<".to_string(),
        format!("17,{}", complete),
        format!("3,{}", complete),
    ];
    let transformer = gen_test_transformer(4, 2, 2, 2);
    let aggregate = run_on_lines(&transformer, &lines)?;
    let ids: Vec<i64> = aggregate
        .sorted()
        .iter()
        .map(|r| r.graph_id.value())
        .collect();
    assert_eq!(ids, vec![3, 17]);
    assert_eq!(aggregate.get(GraphId::from(17)).unwrap().red.count, 6);
    Ok(())
}

#[test]
fn test_repeated_explicit_ids_keep_input_order() -> RamseyResult<()> {
    let codec = Graph6Codec::new(5);
    let lines: Vec<String> = (0..40)
        .map(|i| {
            let graph = if i % 2 == 0 {
                SimpleUndirectedGraphBuilder::get_complete_graph(5)
            } else {
                SimpleUndirectedGraphBuilder::get_empty_graph(5)
            };
            format!("{},{}", i % 3, codec.encode(&graph))
        })
        .collect();
    for num_workers in &[1, 4, 8] {
        let transformer = gen_test_transformer(5, 3, 3, *num_workers);
        let aggregate = run_on_lines(&transformer, &lines)?;
        let order: Vec<(i64, u64)> = aggregate
            .sorted()
            .iter()
            .map(|r| (r.graph_id.value(), r.sequence))
            .collect();
        let mut expected: Vec<(i64, u64)> = (0..40u64).map(|i| ((i % 3) as i64, i)).collect();
        expected.sort();
        assert_eq!(order, expected);
        for id in 0..3i64 {
            let first = aggregate.get(GraphId::from(id)).unwrap();
            assert_eq!(first.sequence, id as u64);
            // even lines are K5, odd lines are edgeless
            let red_count = if id % 2 == 0 { 10 } else { 0 };
            assert_eq!(first.red.count, red_count);
        }
    }
    Ok(())
}

#[test]
fn test_truncated_line_is_evaluated_not_dropped() -> RamseyResult<()> {
    let transformer = gen_test_transformer(6, 3, 3, 2);
    // six bits: edges (0,1),(0,2),(1,2),(0,3),(1,3),(2,3) i.e. K4 on 0..3
    let lines = vec!["E~".to_string(), "EhEG".to_string()];
    let records = run_on_lines(&transformer, &lines)?.into_sorted();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].red.count, 4);
    assert_eq!(records[0].red.witness, vec![0, 1, 2]);
    assert_eq!(records[1].red.count, 0);
    Ok(())
}

#[test]
fn test_worker_count_does_not_change_records() -> RamseyResult<()> {
    let graphs = random_graphs(9, 60, 7);
    let lines = gen_input_lines(&graphs, false);
    let sequential: Vec<EvaluationRecord> =
        run_on_lines(&gen_test_transformer(9, 3, 4, 1), &lines)?.into_sorted();
    for &workers in &[2usize, 4, 8] {
        let parallel = run_on_lines(&gen_test_transformer(9, 3, 4, workers), &lines)?.into_sorted();
        assert_eq!(sequential, parallel, "workers={}", workers);
    }
    assert_eq!(sequential.len(), 60);
    Ok(())
}

#[test]
fn test_queue_shapes_and_strategies_agree() -> RamseyResult<()> {
    let graphs = random_graphs(9, 40, 11);
    let lines = gen_input_lines(&graphs, true);
    let reference = run_on_lines(&gen_test_transformer(9, 3, 4, 1), &lines)?.into_sorted();
    let configs = vec![
        TransformerConfig::new(9, 3, 4).with_workers(3).with_queue_capacity(Some(1)),
        TransformerConfig::new(9, 3, 4).with_workers(3).with_queue_capacity(None),
        TransformerConfig::new(9, 3, 4)
            .with_workers(2)
            .with_strategy(SearchStrategy::Exhaustive),
    ];
    for config in configs {
        let transformer = RamseyTransformer::new(config);
        let records = run_on_lines(&transformer, &lines)?.into_sorted();
        assert_eq!(reference, records);
    }
    Ok(())
}

#[test]
fn test_no_edges_config() -> RamseyResult<()> {
    let transformer = RamseyTransformer::new(TransformerConfig::new(6, 3, 3).with_edges(false));
    let lines = gen_input_lines(&[SimpleUndirectedGraphBuilder::get_cycle_graph(6)], false);
    let record = run_on_lines(&transformer, &lines)?.into_sorted().remove(0);
    assert_eq!(record.red_edges, None);
    assert_eq!(record.blue_edges, None);
    assert_eq!(record.blue.count, 2);
    Ok(())
}

#[test]
fn test_empty_input() -> RamseyResult<()> {
    let transformer = gen_test_transformer(6, 3, 3, 4);
    let aggregate = run_on_lines(&transformer, &["> only a header".to_string()])?;
    assert!(aggregate.is_empty());
    Ok(())
}

#[test]
fn test_pentagon_is_r33_counterexample() -> RamseyResult<()> {
    // C5 is self-complementary and triangle-free, so R(3,3) > 5
    let transformer = gen_test_transformer(5, 3, 3, 2);
    let lines = gen_input_lines(&[SimpleUndirectedGraphBuilder::get_cycle_graph(5)], false);
    let aggregate = run_on_lines(&transformer, &lines)?;
    assert_eq!(aggregate.count_counterexamples(), 1);
    Ok(())
}

#[test]
fn test_no_r33_counterexample_on_six_vertices() -> RamseyResult<()> {
    // every graph on 6 vertices has a triangle or an independent triple
    let codec = Graph6Codec::new(6);
    let num_pairs = codec.expected_bits();
    let mut lines: Vec<String> = Vec::with_capacity(1 << num_pairs);
    for mask in 0u32..(1 << num_pairs) {
        let mut builder = SimpleUndirectedGraphBuilder::with_nodes(6);
        let mut bit = 0;
        for v in 1..6 {
            for u in 0..v {
                if mask >> bit & 1 == 1 {
                    builder.add_edge(u, v);
                }
                bit += 1;
            }
        }
        let graph = builder.build();
        assert_eq!(graph.count_nodes(), 6);
        lines.push(codec.encode(&graph));
    }
    let transformer = RamseyTransformer::new(
        TransformerConfig::new(6, 3, 3)
            .with_workers(4)
            .with_edges(false),
    );
    let aggregate = run_on_lines(&transformer, &lines)?;
    assert_eq!(aggregate.len(), 1 << num_pairs);
    assert_eq!(aggregate.count_counterexamples(), 0);
    Ok(())
}
