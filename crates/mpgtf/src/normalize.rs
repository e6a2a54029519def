//! Cross-filter RMS normalization.

/// Root mean square of one row of taps.
pub fn rms(row: &[f64]) -> f64 {
    if row.is_empty() {
        return 0.0;
    }
    (row.iter().map(|tap| tap * tap).sum::<f64>() / row.len() as f64).sqrt()
}

/// Scales every `row_len`-sized row of `matrix` so its RMS matches the
/// loudest row's. The loudest row is left untouched; all others are boosted
/// up to its RMS.
pub fn equalize_rms(matrix: &mut [f64], row_len: usize) {
    if row_len == 0 {
        return;
    }

    let rms_per_row: Vec<f64> = matrix.chunks_exact(row_len).map(rms).collect();
    let max_rms = rms_per_row.iter().copied().fold(0.0_f64, f64::max);

    for (row, &row_rms) in matrix.chunks_exact_mut(row_len).zip(&rms_per_row) {
        if row_rms > 0.0 {
            let gain = max_rms / row_rms;
            for tap in row.iter_mut() {
                *tap *= gain;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms() {
        assert!((rms(&[3.0, 4.0]) - (12.5_f64).sqrt()).abs() < 1e-12);
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn test_rows_equalized_to_loudest() {
        let mut matrix = vec![1.0, 1.0, 1.0, 1.0, 4.0, 4.0, 4.0, 4.0];
        equalize_rms(&mut matrix, 4);

        // Quiet row boosted, loud row untouched
        assert_eq!(&matrix[..4], &[4.0, 4.0, 4.0, 4.0]);
        assert_eq!(&matrix[4..], &[4.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_sign_structure_preserved() {
        let mut matrix = vec![0.5, -0.25, 2.0, -1.0];
        equalize_rms(&mut matrix, 2);

        assert_eq!(&matrix[2..], &[2.0, -1.0]);
        assert!((matrix[0] - 2.0).abs() < 1e-12);
        assert!((matrix[1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_row_left_unscaled() {
        let mut matrix = vec![0.0, 0.0, 1.0, 1.0];
        equalize_rms(&mut matrix, 2);
        assert_eq!(&matrix[..2], &[0.0, 0.0]);
    }
}
