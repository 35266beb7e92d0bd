/// Cyclic counter behind an icon picker.
///
/// With `states > 0` the value walks `0, step, ..., (states - 1) * step` and
/// wraps. With `states == 0` it only wraps downward, from 0 to `step`.
/// Values saturate at the `i32` bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCounter {
    states: u32,
    step: i32,
    value: i32,
}

impl StateCounter {
    pub fn new(states: u32, step: i32) -> Self {
        Self {
            states,
            step,
            value: 0,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn states(&self) -> u32 {
        self.states
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn set(&mut self, value: i32) {
        self.value = value;
    }

    fn limit(&self) -> i64 {
        self.states as i64 * self.step as i64
    }

    /// Highest state value, clamped to the `i32` range.
    fn top(&self) -> i32 {
        let top = (self.states as i64 - 1) * self.step as i64;
        i32::try_from(top).unwrap_or(if top < 0 { i32::MIN } else { i32::MAX })
    }

    /// Advance one state, wrapping to 0 past the last one. Returns false when
    /// nothing changed (a picker stuck at 0 with no room to grow).
    pub fn increment(&mut self) -> bool {
        if self.states == 0 || (self.value as i64 + self.step as i64) < self.limit() {
            self.value = self.value.saturating_add(self.step);
            true
        } else if self.value > 0 {
            self.value = 0;
            true
        } else {
            false
        }
    }

    /// Go back one state, wrapping from 0 to the highest state. Unbounded
    /// counters wrap to `step`.
    pub fn decrement(&mut self) {
        if self.value > 0 {
            self.value = self.value.saturating_sub(self.step);
        } else if self.states == 0 {
            self.value = self.step;
        } else {
            self.value = self.top();
        }
    }
}
