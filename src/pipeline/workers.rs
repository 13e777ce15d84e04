use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use crate::error::MatrixError;
use crate::matrix::Element;

/// Both input streams behind one lock, so a worker always takes the n-th
/// element of each stream together.
struct PairedReceiver {
    streams: Mutex<(Receiver<Element>, Receiver<Element>)>,
}

impl PairedReceiver {
    fn new(left: Receiver<Element>, right: Receiver<Element>) -> Self {
        Self {
            streams: Mutex::new((left, right)),
        }
    }

    /// Next matched pair, or `None` once either stream is drained and closed.
    fn next_pair(&self) -> Option<(Element, Element)> {
        // A poisoned lock means a sibling worker panicked; stop and let the
        // join surface the failure.
        let streams = self.streams.lock().ok()?;
        let left = streams.0.recv().ok()?;
        let right = streams.1.recv().ok()?;
        Some((left, right))
    }
}

/// A fixed-size pool of product workers.
///
/// Workers drain the two input streams in matched pairs, multiply the
/// scalars and send `{left.row, right.col, product}` to the output stream.
/// Every worker owns a clone of the output sender, so the output stream
/// closes exactly once: when the last worker exits.
pub struct ProductPipeline {
    workers: usize,
    inputs: Arc<PairedReceiver>,
    output: Sender<Element>,
}

impl ProductPipeline {
    pub fn new(
        workers: usize,
        left: Receiver<Element>,
        right: Receiver<Element>,
        output: Sender<Element>,
    ) -> Self {
        Self {
            workers: workers.max(crate::constants::pipeline::MIN_WORKERS),
            inputs: Arc::new(PairedReceiver::new(left, right)),
            output,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Start the workers. The pipeline's own output sender is dropped here,
    /// leaving the workers as the only producers.
    pub fn spawn(self) -> Result<WorkerPool, MatrixError> {
        let mut handles = Vec::with_capacity(self.workers);
        for id in 0..self.workers {
            let inputs = Arc::clone(&self.inputs);
            let output = self.output.clone();
            let handle = thread::Builder::new()
                .name(format!("product-worker-{id}"))
                .spawn(move || compute_products(&inputs, &output))
                .map_err(|e| MatrixError::Pipeline {
                    message: format!("failed to spawn product worker {id}: {e}"),
                })?;
            handles.push(handle);
        }

        Ok(WorkerPool { handles })
    }
}

fn compute_products(inputs: &PairedReceiver, output: &Sender<Element>) -> usize {
    let mut produced = 0;
    while let Some((left, right)) = inputs.next_pair() {
        let product = Element::new(
            left.row_index,
            right.col_index,
            left.value.wrapping_mul(right.value),
        );
        if output.send(product).is_err() {
            break;
        }
        produced += 1;
    }
    produced
}

/// Handles to running product workers.
pub struct WorkerPool {
    handles: Vec<JoinHandle<usize>>,
}

impl WorkerPool {
    /// Wait for every worker and return the total number of products emitted.
    pub fn join(self) -> Result<usize, MatrixError> {
        let mut total = 0;
        for handle in self.handles {
            let name = handle.thread().name().unwrap_or("product-worker").to_string();
            total += handle.join().map_err(|_| MatrixError::Pipeline {
                message: format!("{name} panicked"),
            })?;
        }
        Ok(total)
    }
}
