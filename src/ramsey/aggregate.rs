/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::id_types::GraphId;
use crate::ramsey::record::EvaluationRecord;
use fxhash::FxHashMap;

/// Evaluation records in arrival order. Arrival order depends on worker
/// scheduling; `sorted` restores input order through the identities, with
/// the producer sequence breaking ties between repeated identities.
#[derive(Clone, Debug, Default)]
pub struct ResultAggregate {
    records: Vec<EvaluationRecord>,
    positions: FxHashMap<GraphId, usize>,
}

impl ResultAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: EvaluationRecord) {
        let pos = self.records.len();
        let records = &self.records;
        self.positions
            .entry(record.graph_id)
            .and_modify(|current| {
                if record.sequence < records[*current].sequence {
                    *current = pos;
                }
            })
            .or_insert(pos);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvaluationRecord> {
        self.records.iter()
    }

    /// The record filed under `graph_id` whose line came first in the input.
    pub fn get(&self, graph_id: GraphId) -> Option<&EvaluationRecord> {
        self.positions.get(&graph_id).map(|&pos| &self.records[pos])
    }

    /// Records ordered by identity, then by input position.
    pub fn sorted(&self) -> Vec<&EvaluationRecord> {
        let mut records: Vec<&EvaluationRecord> = self.records.iter().collect();
        records.sort_by_key(|record| (record.graph_id, record.sequence));
        records
    }

    pub fn into_sorted(mut self) -> Vec<EvaluationRecord> {
        self.records
            .sort_by_key(|record| (record.graph_id, record.sequence));
        self.records
    }

    pub fn count_counterexamples(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.is_counterexample())
            .count()
    }
}
