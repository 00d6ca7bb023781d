/// Next revealed count after one "load more" press.
pub fn reveal(filtered_count: usize, revealed: usize, batch_size: usize) -> usize {
    filtered_count.min(revealed.saturating_add(batch_size))
}

/// Incremental pagination over a filtered result.
///
/// `revealed` starts at the initial page size and only grows through
/// [`RevealWindow::load_more`]; [`RevealWindow::reset`] is called on every
/// filter or sort change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealWindow {
    initial: usize,
    batch_size: usize,
    revealed: usize,
}

impl RevealWindow {
    pub fn new(initial: usize, batch_size: usize) -> Self {
        Self {
            initial,
            batch_size,
            revealed: initial,
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Items to render for a result of `total`, never more than `total`.
    pub fn visible(&self, total: usize) -> usize {
        self.revealed.min(total)
    }

    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible(total))
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.remaining(total) > 0
    }

    /// Size of the next batch, shown on the "load more" button.
    pub fn next_batch(&self, total: usize) -> usize {
        self.remaining(total).min(self.batch_size)
    }

    /// Reveals one more batch. No-op once everything is visible.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.revealed = reveal(total, self.visible(total), self.batch_size);
        true
    }

    pub fn reset(&mut self) {
        self.revealed = self.initial;
    }
}
