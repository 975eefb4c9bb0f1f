use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock time spent in one generator stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Stage timings of one generator run, in the order the stages ran.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

impl TimingBreakdown {
    /// Run `stage`, record its duration under `label` and pass its output through.
    pub fn time<T>(&mut self, label: &str, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = stage();
        self.stages.push(StageTiming {
            label: label.to_owned(),
            elapsed_ms: ms_since(start),
        });
        out
    }

    /// Close the breakdown; `started` is when the whole run began.
    pub fn finish(mut self, started: Instant) -> Self {
        self.total_ms = ms_since(started);
        self
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_recorded_in_order() {
        let started = Instant::now();
        let mut timings = TimingBreakdown::default();
        let a = timings.time("first", || 2 + 2);
        let b: Result<u8, String> = timings.time("second", || Ok(7));
        assert_eq!((a, b), (4, Ok(7)));

        let timings = timings.finish(started);
        let labels: Vec<&str> = timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["first", "second"]);
        let staged: f64 = timings.stages.iter().map(|s| s.elapsed_ms).sum();
        assert!(timings.total_ms >= staged);
        assert!(timings.stage_ms("third").is_none());
    }
}
