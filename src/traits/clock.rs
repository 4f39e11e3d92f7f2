/// Source of per-frame elapsed time
pub trait DeltaClock {
    /// Seconds since the previous call; the first call reports the time
    /// since the clock was created
    fn delta(&mut self) -> f32;
}
