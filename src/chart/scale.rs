//! Axis scales
//!
//! `PointScale` places category labels evenly across the plot width in the
//! order given. `LinearScale` maps a fixed value domain onto plot height;
//! it never widens to fit the data.

use serde::{Deserialize, Serialize};

/// Fixed numeric domain of the y-axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YDomain {
    pub min: f64,
    pub max: f64,
}

impl YDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Evenly spaced tick values from `min` to `max`, inclusive
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            n => {
                let step = self.span() / (n - 1) as f64;
                (0..n).map(|i| self.min + step * i as f64).collect()
            }
        }
    }
}

impl Default for YDomain {
    fn default() -> Self {
        Self::new(1000.0, 1600.0)
    }
}

/// Linear value → pixel mapping (pixel y grows downward)
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: YDomain,
    top: f64,
    height: f64,
}

impl LinearScale {
    pub fn new(domain: YDomain, top: f64, height: f64) -> Self {
        Self {
            domain,
            top,
            height,
        }
    }

    /// Pixel position for a value; out-of-domain values land outside the
    /// plot area and are left to the clip path
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return self.top + self.height / 2.0;
        }
        self.top + (self.domain.max - value) / span * self.height
    }
}

/// Evenly spaced category positions, first label at the left edge
#[derive(Debug, Clone, Copy)]
pub struct PointScale {
    count: usize,
    left: f64,
    width: f64,
}

impl PointScale {
    pub fn new(count: usize, left: f64, width: f64) -> Self {
        Self { count, left, width }
    }

    /// Pixel x for the category at `index`; a single category is centered
    pub fn map(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (self.count - 1) as f64
    }

    pub fn step(&self) -> f64 {
        if self.count <= 1 {
            self.width
        } else {
            self.width / (self.count - 1) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_ticks() {
        let domain = YDomain::default();
        assert_eq!(domain.ticks(5), vec![1000.0, 1150.0, 1300.0, 1450.0, 1600.0]);
        assert!(domain.ticks(0).is_empty());
    }

    #[test]
    fn test_linear_scale_bounds() {
        let scale = LinearScale::new(YDomain::default(), 10.0, 300.0);
        assert_eq!(scale.map(1600.0), 10.0);
        assert_eq!(scale.map(1000.0), 310.0);
        assert_eq!(scale.map(1300.0), 160.0);
    }

    #[test]
    fn test_linear_scale_out_of_domain() {
        let scale = LinearScale::new(YDomain::default(), 0.0, 600.0);
        assert!(scale.map(1700.0) < 0.0);
        assert!(scale.map(900.0) > 600.0);
    }

    #[test]
    fn test_point_scale() {
        let scale = PointScale::new(11, 60.0, 1000.0);
        assert_eq!(scale.map(0), 60.0);
        assert_eq!(scale.map(10), 1060.0);
        assert_eq!(scale.step(), 100.0);

        let single = PointScale::new(1, 60.0, 1000.0);
        assert_eq!(single.map(0), 560.0);
    }
}
