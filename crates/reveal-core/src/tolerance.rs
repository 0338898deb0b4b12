/// Float comparison tolerances for progress and coordinate checks.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Tolerance for coordinate comparisons (device or design units)
    pub linear: f64,
    /// Tolerance for progress values in `[0, 1]`
    pub progress: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_PROGRESS: f64 = 1e-12;

    pub fn new(linear: f64, progress: f64) -> Self {
        Self { linear, progress }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            progress: Self::DEFAULT_PROGRESS,
        }
    }

    /// Check if two coordinates are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if two progress values are equal within progress tolerance
    pub fn progress_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.progress
    }

    /// Snap progress within tolerance of 0 or 1 onto the bound.
    pub fn snap_progress(self, progress: f64) -> f64 {
        if self.progress_eq(progress, 0.0) {
            0.0
        } else if self.progress_eq(progress, 1.0) {
            1.0
        } else {
            progress
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_eq() {
        let tol = Tolerance::default();
        assert!(tol.linear_eq(1.0, 1.0 + 1e-12));
        assert!(!tol.linear_eq(1.0, 1.001));
    }

    #[test]
    fn test_progress_eq() {
        let tol = Tolerance::default();
        assert!(tol.progress_eq(0.5, 0.5 + 1e-14));
        assert!(!tol.progress_eq(0.5, 0.5 + 1e-8));
        assert!(Tolerance::new(1e-9, 1e-7).progress_eq(0.5, 0.5 + 1e-8));
    }

    #[test]
    fn test_snap_progress() {
        let tol = Tolerance::default();
        assert_eq!(tol.snap_progress(1.0 - 1e-14), 1.0);
        assert_eq!(tol.snap_progress(1e-14), 0.0);
        assert_eq!(tol.snap_progress(-1e-14), 0.0);
        assert_eq!(tol.snap_progress(0.25), 0.25);
        assert_eq!(tol.snap_progress(1.0 - 1e-6), 1.0 - 1e-6);
    }
}
