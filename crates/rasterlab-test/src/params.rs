//! Regression test parameters and operations

use rasterlab_core::PixelBuffer;

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, a running check
/// index, and every recorded failure. `cleanup` prints the failures and
/// returns overall success, so a test asserts once at the end.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current check index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    fn next_index(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    /// Compare two values within a tolerance.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let index = self.next_index();
        let ok = (expected - actual).abs() <= delta;
        if !ok {
            self.success = false;
            self.failures.push(format!(
                "{} check {index}: expected {expected} +/- {delta}, got {actual}",
                self.test_name
            ));
        }
        ok
    }

    /// Compare two buffers for byte-identical equality.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        let index = self.next_index();
        let ok = expected == actual;
        if !ok {
            self.success = false;
            self.failures.push(format!(
                "{} check {index}: buffers differ ({}x{} vs {}x{})",
                self.test_name,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
        }
        ok
    }

    /// Record an arbitrary boolean check.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        let index = self.next_index();
        if !ok {
            self.success = false;
            self.failures
                .push(format!("{} check {index}: {what}", self.test_name));
        }
        ok
    }

    /// Report failures and return overall success.
    pub fn cleanup(&self) -> bool {
        for failure in &self.failures {
            eprintln!("FAIL: {failure}");
        }
        eprintln!(
            "{}: {} checks, {} failures",
            self.test_name,
            self.index,
            self.failures.len()
        );
        self.success
    }
}
