use crate::error::NormalizeError;

use super::model::Spectrum;

/// Rescale Y so its maximum becomes 1.0. X is copied unchanged.
///
/// A zero or non-finite maximum is rejected instead of producing NaN/inf.
pub fn normalize(spectrum: &Spectrum) -> Result<Spectrum, NormalizeError> {
    let max = spectrum.max_y().ok_or(NormalizeError::EmptyData)?;
    if max == 0.0 || !max.is_finite() {
        return Err(NormalizeError::DegenerateData { max });
    }

    Ok(Spectrum {
        x: spectrum.x.clone(),
        y: spectrum.y.iter().map(|&yi| yi / max).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(y: Vec<f64>) -> Spectrum {
        Spectrum {
            x: (0..y.len()).map(|i| 1000.0 - i as f64).collect(),
            y,
        }
    }

    #[test]
    fn divides_by_maximum() {
        let out = normalize(&spectrum(vec![0.2, 0.5, 0.1])).unwrap();
        let expected = [0.4, 1.0, 0.2];
        for (got, want) in out.y.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
        assert_eq!(out.x, vec![1000.0, 999.0, 998.0]);
    }

    #[test]
    fn negative_values_keep_their_sign() {
        let out = normalize(&spectrum(vec![-2.0, 4.0])).unwrap();
        assert_eq!(out.y, vec![-0.5, 1.0]);
    }

    #[test]
    fn zero_maximum_is_degenerate() {
        assert_eq!(
            normalize(&spectrum(vec![0.0, -1.0])),
            Err(NormalizeError::DegenerateData { max: 0.0 })
        );
    }

    #[test]
    fn infinite_maximum_is_degenerate() {
        assert!(matches!(
            normalize(&spectrum(vec![1.0, f64::INFINITY])),
            Err(NormalizeError::DegenerateData { .. })
        ));
    }

    #[test]
    fn empty_spectrum() {
        assert_eq!(
            normalize(&Spectrum::default()),
            Err(NormalizeError::EmptyData)
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let input = spectrum(vec![2.0, 4.0]);
        let _ = normalize(&input).unwrap();
        assert_eq!(input.y, vec![2.0, 4.0]);
    }
}
