/// Trip length in days, kept within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDuration(u32);

impl TripDuration {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 30;
    pub const DEFAULT: u32 = 3;

    /// Out-of-range values are clamped.
    pub fn new(days: u32) -> Self {
        Self(days.clamp(Self::MIN, Self::MAX))
    }

    pub fn days(self) -> u32 {
        self.0
    }

    pub fn increase(&mut self) -> u32 {
        self.0 = (self.0 + 1).min(Self::MAX);
        self.0
    }

    pub fn decrease(&mut self) -> u32 {
        self.0 = self.0.saturating_sub(1).max(Self::MIN);
        self.0
    }
}

impl Default for TripDuration {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bounds() {
        let mut duration = TripDuration::new(1);
        assert_eq!(duration.decrease(), 1);

        let mut duration = TripDuration::new(30);
        assert_eq!(duration.increase(), 30);
        assert_eq!(duration.decrease(), 29);
    }

    #[test]
    fn construction_clamps() {
        assert_eq!(TripDuration::new(0).days(), 1);
        assert_eq!(TripDuration::new(45).days(), 30);
        assert_eq!(TripDuration::default().days(), 3);
    }
}
