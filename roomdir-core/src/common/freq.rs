/// \[Hz\]
pub struct Hz;

/// \[kHz\]
#[allow(non_camel_case_types)]
pub struct kHz;

/// Frequency
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Freq {
    pub(crate) freq: f64,
}

impl core::fmt::Debug for Freq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.freq)
    }
}

impl Freq {
    #[inline]
    /// Returns the frequency in Hz.
    #[must_use]
    pub const fn hz(&self) -> f64 {
        self.freq
    }
}

impl core::ops::Mul<Hz> for f64 {
    type Output = Freq;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Self::Output { freq: self }
    }
}

impl core::ops::Mul<kHz> for f64 {
    type Output = Freq;

    fn mul(self, _rhs: kHz) -> Self::Output {
        Self::Output { freq: self * 1e3 }
    }
}

impl core::ops::Add<Freq> for Freq {
    type Output = Freq;

    fn add(self, rhs: Freq) -> Self::Output {
        Freq {
            freq: self.freq + rhs.freq,
        }
    }
}

impl core::ops::Sub<Freq> for Freq {
    type Output = Freq;

    fn sub(self, rhs: Freq) -> Self::Output {
        Freq {
            freq: self.freq - rhs.freq,
        }
    }
}

impl core::ops::Mul<f64> for Freq {
    type Output = Freq;

    fn mul(self, rhs: f64) -> Self::Output {
        Freq {
            freq: self.freq * rhs,
        }
    }
}

impl core::ops::Div<f64> for Freq {
    type Output = Freq;

    fn div(self, rhs: f64) -> Self::Output {
        Freq {
            freq: self.freq / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        assert_eq!(200. * Hz, 100. * Hz + 100. * Hz);
        assert_eq!(0. * Hz, 100. * Hz - 100. * Hz);
        assert_eq!(200. * Hz, 100. * Hz * 2.);
        assert_eq!(50. * Hz, 100. * Hz / 2.);
        assert_eq!(1000. * Hz, 1. * kHz);
        assert!(500. * Hz < 1. * kHz);
    }

    #[test]
    fn dbg() {
        assert_eq!(format!("{:?}", 100. * Hz), "100 Hz");
        assert_eq!(format!("{:?}", 2. * kHz), "2000 Hz");
    }
}
