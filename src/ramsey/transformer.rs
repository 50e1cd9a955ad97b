/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::aggregate::ResultAggregate;
use crate::ramsey::config::TransformerConfig;
use crate::ramsey::error::{RamseyError, RamseyResult};
use crate::ramsey::evaluator::GraphEvaluator;
use crate::ramsey::input::Input;
use crate::ramsey::line_processor::{LineProcessor, WorkItem};
use crate::ramsey::record::EvaluationRecord;
use crossbeam::channel::{bounded, unbounded, Receiver, Sender};
use tracing::{debug, warn};

/// Runs the ingest / evaluate / collect pipeline over a stream of graph6
/// lines.
///
/// The calling thread is the only producer: it reads lines in order, assigns
/// identities and enqueues work items. `num_workers` scoped threads pull
/// items off the queue and evaluate them independently, and a collector
/// thread appends their records to the aggregate. Dropping the work sender
/// once input is exhausted is the "no more input" signal: workers finish
/// what is queued and exit, which in turn closes the record channel and lets
/// the collector return.
pub struct RamseyTransformer {
    config: TransformerConfig,
    evaluator: GraphEvaluator,
}

impl RamseyTransformer {
    pub fn new(config: TransformerConfig) -> Self {
        let evaluator = GraphEvaluator::new(config.evaluator);
        Self { config, evaluator }
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    fn work_queue(&self) -> (Sender<WorkItem>, Receiver<WorkItem>) {
        match self.config.queue_capacity {
            Some(capacity) => bounded(capacity),
            None => unbounded(),
        }
    }

    // pulls items until the producer hangs up and the queue is empty
    fn work(
        &self,
        worker_id: usize,
        items: Receiver<WorkItem>,
        records: Sender<EvaluationRecord>,
    ) -> usize {
        let mut num_processed: usize = 0;
        for item in items.iter() {
            let record = self.evaluator.evaluate(&item);
            if records.send(record).is_err() {
                warn!(worker_id, "Collector hung up; stopping worker");
                break;
            }
            num_processed += 1;
        }
        debug!(worker_id, num_processed, "Worker drained");
        num_processed
    }

    pub fn run(&self, input: Input) -> RamseyResult<ResultAggregate> {
        let num_workers = self.config.num_workers.max(1);
        let scope_result = crossbeam::scope(|scope| -> RamseyResult<ResultAggregate> {
            let (item_sender, item_receiver) = self.work_queue();
            let (record_sender, record_receiver) = unbounded::<EvaluationRecord>();

            let collector = scope.spawn(move |_| {
                let mut aggregate = ResultAggregate::new();
                for record in record_receiver.iter() {
                    aggregate.push(record);
                }
                aggregate
            });
            for worker_id in 0..num_workers {
                let items = item_receiver.clone();
                let records = record_sender.clone();
                scope.spawn(move |_| self.work(worker_id, items, records));
            }
            // only the workers may keep these channels open
            drop(item_receiver);
            drop(record_sender);
            debug!(num_workers, "Pipeline running");

            let mut line_processor = LineProcessor::new();
            for line in input.lines() {
                match line {
                    Ok(line) => {
                        if let Some(item) = line_processor.process_line(&line) {
                            item_sender.send(item).map_err(|_| {
                                RamseyError::new("All workers exited before the input was drained")
                            })?;
                        }
                    }
                    Err(error) => warn!("I/O error: {}", error),
                }
            }
            drop(item_sender);
            debug!(
                num_items = line_processor.num_items(),
                "Input exhausted; draining"
            );

            let aggregate = collector
                .join()
                .map_err(|_| RamseyError::WorkerPanicked)?;
            debug!(num_records = aggregate.len(), "Pipeline done");
            Ok(aggregate)
        });
        scope_result.map_err(|_| RamseyError::WorkerPanicked)?
    }
}
