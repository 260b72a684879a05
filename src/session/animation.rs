use crate::core::Face;

/// How far the card narrows at the midpoint of a flip.
pub const SHRINK: f32 = 0.1;

/// Width factor after `step` of `steps`. Linear down to `1 - SHRINK` at the midpoint,
/// then linear back up to 1.0.
pub fn scale_at(step: u32, steps: u32) -> f32 {
    let half = (steps / 2).max(1);
    if step == 0 {
        1.0
    } else if step <= half {
        1.0 - (step as f32 / half as f32) * SHRINK
    } else {
        (1.0 - SHRINK) + ((step - half) as f32 / half as f32) * SHRINK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub swap_face: bool,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct FlipAnimation {
    steps: u32,
    step: u32,
    target: Face,
}

impl FlipAnimation {
    /// `steps` is rounded down to an even count of at least two.
    pub fn new(steps: u32, target: Face) -> Self {
        Self { steps: steps.max(2) & !1, step: 0, target }
    }

    pub fn advance(&mut self) -> StepOutcome {
        if self.step < self.steps {
            self.step += 1;
        }
        StepOutcome { swap_face: self.step == self.midpoint(), finished: self.is_finished() }
    }

    pub fn scale(&self) -> f32 {
        scale_at(self.step, self.steps)
    }

    pub fn midpoint(&self) -> u32 {
        self.steps / 2
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn target(&self) -> Face {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}
