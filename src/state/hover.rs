use crate::config::Offset;

/// Marker offset: either at rest or nudged by its hover delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerHover {
    delta: Offset,
    current: Offset,
}

impl MarkerHover {
    pub fn new(delta: Offset) -> Self {
        Self {
            delta,
            current: Offset::ZERO,
        }
    }

    #[cfg(test)]
    pub fn offset(&self) -> Offset {
        self.current
    }

    pub fn transform(&self) -> String {
        format!("transform: translate({}px, {}px);", self.current.x, self.current.y)
    }

    /// Returns whether the offset changed.
    pub fn settle(&mut self) -> bool {
        let changed = self.current != self.delta;
        self.current = self.delta;
        changed
    }

    pub fn leave(&mut self) -> bool {
        let changed = self.current != Offset::ZERO;
        self.current = Offset::ZERO;
        changed
    }

    pub fn set_delta(&mut self, delta: Offset) {
        if self.current != Offset::ZERO {
            self.current = delta;
        }
        self.delta = delta;
    }
}
