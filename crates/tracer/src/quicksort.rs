//! QuickSort tracer (Lomuto partition).
//!
//! Sorts the caller's slice in place and records every pivot choice, pointer
//! move, comparison and exchange. Each step carries a snapshot of the whole
//! slice at the instant it was recorded; the snapshots are part of the replay
//! contract, not a convenience.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use steps::{IndexRange, Step, StepRecorder, StepSequence};
use tracing::{info, instrument};

use crate::{PivotMethod, SortConfig};

/// Sort `array` in place and return the trace.
///
/// The `random` strategy draws from a `StdRng` seeded with `config.seed`, or
/// from OS entropy when no seed is given.
pub fn trace(array: &mut [f64], config: &SortConfig) -> StepSequence {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    trace_with_rng(array, config.pivot, &mut rng)
}

/// Sort `array` in place with an injected random source.
#[instrument(skip(array, rng), fields(len = array.len(), pivot = %method))]
pub fn trace_with_rng<R: Rng + ?Sized>(
    array: &mut [f64],
    method: PivotMethod,
    rng: &mut R,
) -> StepSequence {
    let mut rec = StepRecorder::new();

    if array.len() > 1 {
        let high = array.len() - 1;
        sort_range(array, 0, high, method, rng, &mut rec);
    }

    rec.push(Step::Sorted {
        sorted: (0..array.len()).collect(),
        range: None,
        array: array.to_vec(),
    });

    info!(steps = rec.len(), "quicksort trace complete");
    rec.finish()
}

fn sort_range<R: Rng + ?Sized>(
    array: &mut [f64],
    low: usize,
    high: usize,
    method: PivotMethod,
    rng: &mut R,
    rec: &mut StepRecorder,
) {
    if low >= high {
        return;
    }

    rec.push(Step::Range { range: [low, high], array: array.to_vec() });

    let pivot = method.choose(array, low, high, rng);
    let split = partition(array, [low, high], pivot, rec);

    if split > low {
        sort_range(array, low, split - 1, method, rng, rec);
    }
    sort_range(array, split + 1, high, method, rng, rec);
}

/// Lomuto partition of `array[low..=high]` around the value at `pivot`.
/// Returns the pivot's final index.
fn partition(array: &mut [f64], range: IndexRange, pivot: usize, rec: &mut StepRecorder) -> usize {
    let [low, high] = range;
    let pivot_value = array[pivot];

    array.swap(pivot, high);
    rec.push(Step::Pivot { pivot, range, array: array.to_vec() });

    // `store` is the next slot of the `<= pivot` region; the wire format
    // reports the last filled slot, `store - 1`, which starts at `low - 1`.
    let mut store = low;
    rec.push(Step::Pointers {
        i_pointer: boundary(store),
        j_pointer: low,
        range,
        array: array.to_vec(),
    });

    for j in low..high {
        rec.push(Step::Compare {
            comparing: [j, high],
            i_pointer: boundary(store),
            j_pointer: j,
            range,
            array: array.to_vec(),
        });

        if array[j] <= pivot_value {
            let slot = store;
            store += 1;
            array.swap(slot, j);
            if slot != j {
                rec.push(Step::Swap {
                    swapping: [slot, j],
                    i_pointer: boundary(store),
                    j_pointer: j,
                    range,
                    array: array.to_vec(),
                });
            }
        }
    }

    array.swap(store, high);
    rec.push(Step::Swap {
        swapping: [store, high],
        i_pointer: boundary(store),
        j_pointer: high,
        range,
        array: array.to_vec(),
    });
    rec.push(Step::Sorted { sorted: vec![store], range: Some(range), array: array.to_vec() });

    store
}

fn boundary(store: usize) -> i64 {
    store as i64 - 1
}
