use indicatif::{ProgressBar, ProgressStyle};

/// Terminal progress bar fed with `(done, total)` updates.
pub struct ProgressReporter {
    bar: ProgressBar,
    unit: &'static str,
}

impl ProgressReporter {
    pub fn new(unit: &'static str) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {msg} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar, unit }
    }

    pub fn update(&self, done: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(done as u64);
        self.bar
            .set_message(format!("Processed {done} of {total} {}", self.unit));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
