//! Bar chart renderer for a single trace step.
//!
//! One horizontal bar per array slot, scaled to the largest magnitude in the
//! step, with the slot's marker (sorted, swapping, comparing) after the value.

use super::StepRenderer;
use super::charset::{CharSet, Glyphs};
use crate::trace::{Step, format_number};

/// Highlight class of one bar. Sorted wins over swapping, swapping over comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Plain,
    Comparing,
    Swapping,
    Sorted,
}

impl BarState {
    pub fn of(step: &Step, index: usize) -> Self {
        if step.is_sorted_index(index) {
            Self::Sorted
        } else if step.swapping.contains(&index) {
            Self::Swapping
        } else if step.comparing.contains(&index) {
            Self::Comparing
        } else {
            Self::Plain
        }
    }
}

pub struct BarChartRenderer {
    pub charset: CharSet,
    /// Length of the longest bar in characters.
    pub width: usize,
}

impl BarChartRenderer {
    pub fn new(unicode: bool, width: usize) -> Self {
        Self {
            charset: CharSet::from_unicode_flag(unicode),
            width,
        }
    }

    fn bar_len(&self, value: f64, scale: f64) -> usize {
        if scale <= 0.0 || value == 0.0 {
            return 0;
        }
        let len = (value.abs() / scale * self.width as f64).round() as usize;
        len.clamp(1, self.width)
    }
}

impl StepRenderer for BarChartRenderer {
    fn render(&self, step: &Step) -> String {
        let glyphs = Glyphs::for_charset(self.charset);
        let scale = step.array.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let index_w = step.array.len().saturating_sub(1).to_string().len();
        let labels: Vec<String> = step.array.iter().map(|v| format_number(*v)).collect();
        let value_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut lines = vec![format!(
            "{} (heap size {})",
            step.description, step.heap_size
        )];
        for (index, (value, label)) in step.array.iter().zip(&labels).enumerate() {
            let bar: String = std::iter::repeat_n(glyphs.bar, self.bar_len(*value, scale)).collect();
            let mark = match BarState::of(step, index) {
                BarState::Plain => "",
                BarState::Comparing => glyphs.mark_comparing,
                BarState::Swapping => glyphs.mark_swapping,
                BarState::Sorted => glyphs.mark_sorted,
            };
            let line = format!(
                "[{index:>index_w$}] {label:>value_w$} {gutter}{bar:<width$} {mark}",
                gutter = glyphs.gutter,
                width = self.width,
            );
            lines.push(line.trim_end().to_string());
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
