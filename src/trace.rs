//! Heapsort trace generation.
//!
//! Runs an instrumented heapsort over a copy of the input and records a
//! [`Step`] at every comparison, swap and phase boundary. Replaying the steps
//! in order reproduces a single evolving buffer.

use serde::Serialize;
use tracing::{debug, trace};

// ─── Step ────────────────────────────────────────────────────────────────────

/// Snapshot of the working buffer at one instant of the sort.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub array: Vec<f64>,
    /// Number of elements at the front of `array` still in the heap.
    pub heap_size: usize,
    /// Indices being compared (empty unless this is a comparison step).
    pub comparing: Vec<usize>,
    /// Indices being swapped (empty unless this is a swap step).
    pub swapping: Vec<usize>,
    /// Indices already in final position, from the end of the array forward.
    pub sorted: Vec<usize>,
    pub description: String,
}

impl Step {
    fn neutral(array: &[f64], heap_size: usize, sorted: &[usize], description: String) -> Self {
        Self {
            array: array.to_vec(),
            heap_size,
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: sorted.to_vec(),
            description,
        }
    }

    fn comparison(
        array: &[f64],
        heap_size: usize,
        pair: [usize; 2],
        sorted: &[usize],
        description: String,
    ) -> Self {
        Self {
            comparing: pair.to_vec(),
            ..Self::neutral(array, heap_size, sorted, description)
        }
    }

    fn swap(
        array: &[f64],
        heap_size: usize,
        pair: [usize; 2],
        sorted: &[usize],
        description: String,
    ) -> Self {
        Self {
            swapping: pair.to_vec(),
            ..Self::neutral(array, heap_size, sorted, description)
        }
    }

    pub fn is_comparison(&self) -> bool {
        !self.comparing.is_empty()
    }

    pub fn is_swap(&self) -> bool {
        !self.swapping.is_empty()
    }

    pub fn is_sorted_index(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }
}

// ─── Number text ─────────────────────────────────────────────────────────────

/// Format a value the way a browser prints a number: `5`, `2.5`, `0` for
/// negative zero, and exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    value.to_string()
}

// ─── Generator ───────────────────────────────────────────────────────────────

/// The trailing `count` indices of an `n`-element array, last index first.
fn trailing_indices(n: usize, count: usize) -> Vec<usize> {
    (0..count).map(|k| n - 1 - k).collect()
}

/// Produce the full heapsort trace for `values`.
///
/// The input is copied; the last step's `array` is `values` sorted ascending
/// and its `sorted` list covers every index.
pub fn generate_trace(values: &[f64]) -> Vec<Step> {
    let mut buf = values.to_vec();
    let n = buf.len();
    let mut steps = Vec::new();

    steps.push(Step::neutral(&buf, n, &[], "Initial array".to_string()));

    for i in (0..n / 2).rev() {
        heapify(&mut buf, n, i, &[], &mut steps);
    }
    steps.push(Step::neutral(&buf, n, &[], "Max heap built".to_string()));
    debug!(n, steps = steps.len(), "max heap built");

    for i in (1..n).rev() {
        let sorted = trailing_indices(n, n - 1 - i);
        steps.push(Step::swap(
            &buf,
            i + 1,
            [0, i],
            &sorted,
            format!(
                "Swapping root ({}) with last element ({})",
                format_number(buf[0]),
                format_number(buf[i])
            ),
        ));

        buf.swap(0, i);

        let sorted_after = trailing_indices(n, n - i);
        steps.push(Step::neutral(
            &buf,
            i,
            &sorted_after,
            format!(
                "Element {} is now in sorted position",
                format_number(buf[i])
            ),
        ));

        heapify(&mut buf, i, 0, &sorted_after, &mut steps);
    }

    let all: Vec<usize> = (0..n).collect();
    steps.push(Step::neutral(&buf, 0, &all, "Sorting complete!".to_string()));
    debug!(n, steps = steps.len(), "heapsort trace generated");
    steps
}

/// Sift the element at `root` down within `buf[..heap_size]`, recording a step
/// for every comparison and swap. Ties never swap.
fn heapify(
    buf: &mut [f64],
    heap_size: usize,
    mut root: usize,
    sorted: &[usize],
    steps: &mut Vec<Step>,
) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_size {
            steps.push(Step::comparison(
                buf,
                heap_size,
                [largest, left],
                sorted,
                format!(
                    "Comparing {} with left child {}",
                    format_number(buf[largest]),
                    format_number(buf[left])
                ),
            ));
            if buf[left] > buf[largest] {
                largest = left;
            }
        }

        if right < heap_size {
            steps.push(Step::comparison(
                buf,
                heap_size,
                [largest, right],
                sorted,
                format!(
                    "Comparing {} with right child {}",
                    format_number(buf[largest]),
                    format_number(buf[right])
                ),
            ));
            if buf[right] > buf[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }

        trace!(root, largest, heap_size, "sift-down swap");
        steps.push(Step::swap(
            buf,
            heap_size,
            [root, largest],
            sorted,
            format!(
                "Swapping {} with {} to maintain heap property",
                format_number(buf[root]),
                format_number(buf[largest])
            ),
        ));
        buf.swap(root, largest);
        steps.push(Step::neutral(
            buf,
            heap_size,
            sorted,
            format!("Swapped. Now heapifying subtree at index {largest}"),
        ));
        root = largest;
    }
}
