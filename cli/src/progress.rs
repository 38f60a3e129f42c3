use crate::ui;
use std::time::{Duration, Instant};

/// Reports the steps of a multi-step command through the `ui` module, so it
/// goes silent together with the rest of the console output.
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    pub fn with_steps(mut self, steps: &[&str]) -> Self {
        self.steps = steps.iter().map(|step| step.to_string()).collect();
        self
    }

    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::status_message(step);
        }
    }

    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    pub fn complete(&self) {
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            Self::format_duration(self.start_time.elapsed())
        ));
    }

    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.1} seconds", duration.as_secs_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_advance_and_stop_at_end() {
        let mut progress = ProgressTracker::new("Test").with_steps(&["one", "two"]);
        progress.start_step();
        progress.complete_step();
        progress.start_step();
        progress.complete_step();
        progress.complete_step();
        assert_eq!(progress.current_step, 2);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(ProgressTracker::format_duration(Duration::from_millis(42)), "42 ms");
        assert_eq!(
            ProgressTracker::format_duration(Duration::from_millis(2500)),
            "2.5 seconds"
        );
    }
}
