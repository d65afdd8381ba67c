//! Operations that only make sense for deques of `f64`.

use crate::settings::ReadPolicy;
use crate::{DequeError, GrowableDeque};

// slack for accumulated floating point error when deciding whether `stop` was reached
const RANGE_TOLERANCE: f64 = 1e-12;

impl<Read: ReadPolicy> GrowableDeque<f64, Read> {
    /// Builds the sequence `start, start + step, ...` up to and including `stop`.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidRange`] if any argument is not finite, if `step` is zero,
    /// or if `step` points away from `stop`.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let deque = GrowableDeque::<f64>::range(0.0, 1.0, 0.25).unwrap();
    /// assert_eq!(deque.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// let down = GrowableDeque::<f64>::range(1.0, 0.0, -0.5).unwrap();
    /// assert_eq!(down.as_slice(), &[1.0, 0.5, 0.0]);
    /// ```
    pub fn range(start: f64, stop: f64, step: f64) -> Result<Self, DequeError> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(DequeError::InvalidRange(format!(
                "range({}, {}, {}) has a non-finite argument",
                start, stop, step
            )));
        }
        if step == 0.0 {
            return Err(DequeError::InvalidRange("step must be non-zero".to_string()));
        }
        if (step > 0.0 && start > stop) || (step < 0.0 && start < stop) {
            return Err(DequeError::InvalidRange(format!(
                "step {} never reaches {} from {}",
                step, stop, start
            )));
        }

        let mut deque = GrowableDeque::default();
        // computed from the index rather than accumulated, so long ranges don't drift
        let mut i = 0usize;
        loop {
            let x = start + step * i as f64;
            let past_stop = if step > 0.0 {
                x > stop + RANGE_TOLERANCE
            } else {
                x < stop - RANGE_TOLERANCE
            };
            if past_stop {
                break;
            }
            deque.push(x);
            i += 1;
        }
        Ok(deque)
    }

    /// Sum of all elements; `0.0` for an empty deque.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    #[inline]
    pub fn min(&self) -> Option<f64> {
        self.iter().copied().reduce(|a, b| if b < a { b } else { a })
    }

    #[inline]
    pub fn max(&self) -> Option<f64> {
        self.iter().copied().reduce(|a, b| if b > a { b } else { a })
    }

    /// Arithmetic mean, or `None` for an empty deque.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.sum() / self.len() as f64)
        }
    }

    /// Median of the elements. For an even count this is the mean of the two middle values.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let deque = GrowableDeque::from([4.0, 1.0, 3.0, 2.0]);
    /// assert_eq!(deque.median(), Some(2.5));
    /// ```
    pub fn median(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let mut sorted = self.as_slice().to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        if n % 2 == 1 {
            Some(sorted[n / 2])
        } else {
            Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        }
    }

    /// Renders the elements as `[v1,v2,...]` with `precision` decimals, writing exact zeros as a bare `0`.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let deque = GrowableDeque::from([0.0, 1.5, -2.0]);
    /// assert_eq!(deque.to_fixed_string(5), "[0,1.50000,-2.00000]");
    /// ```
    pub fn to_fixed_string(&self, precision: usize) -> String {
        let parts: Vec<String> = self
            .iter()
            .map(|&x| {
                if x == 0.0 {
                    "0".to_string()
                } else {
                    format!("{:.*}", precision, x)
                }
            })
            .collect();
        format!("[{}]", parts.join(","))
    }
}
