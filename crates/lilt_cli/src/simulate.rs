//! Frame-by-frame spring simulation

use std::time::Duration;

use lilt_animation::{SpringAnimation, FRAME_DT};
use serde::Serialize;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// One reported frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    pub value: f64,
    pub velocity: f64,
}

/// Result of a simulation run
#[derive(Debug, Serialize)]
pub struct Simulation {
    pub frames: Vec<Frame>,
    /// Whether the spring settled before the frame budget ran out
    pub settled: bool,
}

/// Steps a spring one frame at a time, up to a frame budget
pub struct Simulator {
    spring: SpringAnimation,
    max_frames: usize,
    produced: usize,
    running: bool,
}

impl Simulator {
    pub fn new(spring: SpringAnimation, max_frames: usize) -> Self {
        Self {
            spring,
            max_frames,
            produced: 0,
            running: true,
        }
    }

    /// Produce the next frame, or `None` once settled or out of budget
    pub fn next_frame(&mut self) -> Option<Frame> {
        if !self.running || self.produced >= self.max_frames {
            return None;
        }

        let mut value = 0.0;
        self.running = self.spring.frame(|v| value = v);

        let frame = Frame {
            index: self.produced,
            value,
            velocity: self.spring.velocity(),
        };
        self.produced += 1;
        Some(frame)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Run to completion as fast as possible
    pub fn run(mut self) -> Simulation {
        let mut frames = Vec::new();
        while let Some(frame) = self.next_frame() {
            frames.push(frame);
        }
        self.finish(frames)
    }

    /// Run at 60 frames per second, reporting each frame as it is produced
    pub async fn run_realtime(mut self, mut on_frame: impl FnMut(&Frame)) -> Simulation {
        let mut ticker = interval(Duration::from_secs_f64(FRAME_DT));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = Vec::new();
        loop {
            ticker.tick().await;
            let Some(frame) = self.next_frame() else {
                break;
            };
            on_frame(&frame);
            frames.push(frame);
        }
        self.finish(frames)
    }

    fn finish(self, frames: Vec<Frame>) -> Simulation {
        let settled = self.is_settled();
        if settled {
            debug!(frames = frames.len(), value = self.spring.value(), "spring settled");
        } else {
            info!(
                frames = frames.len(),
                value = self.spring.value(),
                "frame budget exhausted before the spring settled"
            );
        }
        Simulation { frames, settled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lilt_animation::{SpringPreset, SETTLE_THRESHOLD};

    #[test]
    fn test_spring_at_rest_reports_one_frame() {
        let simulation = Simulator::new(SpringAnimation::from_preset(SpringPreset::Bouncy), 600).run();

        assert!(simulation.settled);
        assert_eq!(
            simulation.frames,
            vec![Frame {
                index: 0,
                value: 0.0,
                velocity: 0.0
            }]
        );
    }

    #[test]
    fn test_run_settles_at_target() {
        let spring = SpringAnimation::from_preset(SpringPreset::Responsive).with_target(1.0);
        let simulation = Simulator::new(spring, 600).run();

        assert!(simulation.settled);
        let last = simulation.frames.last().unwrap();
        assert!((last.value - 1.0).abs() <= SETTLE_THRESHOLD);
        assert_eq!(last.index + 1, simulation.frames.len());
    }

    #[test]
    fn test_frame_budget_is_respected() {
        let spring = SpringAnimation::from_preset(SpringPreset::Bouncy).with_target(1.0);
        let simulation = Simulator::new(spring, 3).run();

        assert!(!simulation.settled);
        assert_eq!(simulation.frames.len(), 3);
    }

    #[test]
    fn test_start_value_is_honoured() {
        let spring = SpringAnimation::from_preset(SpringPreset::Default)
            .with_value(1.0)
            .with_target(0.0);
        let simulation = Simulator::new(spring, 600).run();

        assert!(simulation.frames[0].value < 1.0);
        assert!(simulation.frames.last().unwrap().value.abs() <= SETTLE_THRESHOLD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_realtime_matches_fast_run() {
        let spring = SpringAnimation::from_preset(SpringPreset::Bouncy).with_target(1.0);
        let fast = Simulator::new(spring.clone(), 600).run();

        let mut seen = 0;
        let paced = Simulator::new(spring, 600)
            .run_realtime(|_| seen += 1)
            .await;

        assert_eq!(paced.frames, fast.frames);
        assert_eq!(seen, fast.frames.len());
    }
}
