// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-phase timing output on stderr.
//!
//! Enable with `ILOREST_TIMINGS=1`. Each REST round trip and the session
//! open are reported as `[timings] <phase> <ms>ms`.

use std::time::{Duration, Instant};

/// Measures one phase from creation until [`PhaseTimer::finish`].
pub struct PhaseTimer {
    phase: String,
    start: Instant,
}

impl PhaseTimer {
    pub fn start(phase: impl Into<String>) -> Self {
        PhaseTimer {
            phase: phase.into(),
            start: Instant::now(),
        }
    }

    /// Reports the elapsed time when timings are enabled.
    pub fn finish(self) {
        if crate::env::timings() {
            eprintln!("{}", format_timing(&self.phase, self.start.elapsed()));
        }
    }
}

pub fn format_timing(phase: &str, elapsed: Duration) -> String {
    format!("[timings] {} {}ms", phase, elapsed.as_millis())
}

/// Times the evaluation of `$block` under `$phase`.
///
/// ```ignore
/// let response = time_phase!("rest::GET", {
///     transport.send(&request)
/// })?;
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __timer = $crate::timings::PhaseTimer::start($phase);
        let __result = $block;
        __timer.finish();
        __result
    }};
}

#[cfg(test)]
#[path = "timings_tests.rs"]
mod tests;
