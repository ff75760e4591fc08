//! Ordinary least squares in closed form
//!
//! Solves the normal equations for the expanded feature matrix. The
//! design matrix here is small (a handful of columns after one-hot
//! expansion), so forming the Gram matrix and running Gaussian
//! elimination with partial pivoting is exact enough and keeps the fit
//! free of iterative, order-dependent steps.

use crate::errors::TrainerError;

/// Pivots below this magnitude are treated as singular.
const PIVOT_EPS: f64 = 1e-10;

/// Ridge term added to the Gram diagonal when the plain system is
/// singular (perfectly collinear columns).
const RIDGE_LAMBDA: f64 = 1e-8;

/// Fitted linear estimator: one weight per feature column plus intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

/// Fit `targets ~ rows` by ordinary least squares.
///
/// Every row must have the same width. Returns an error when the rows
/// are empty or the system stays singular even after the ridge retry.
pub fn fit_least_squares(rows: &[Vec<f64>], targets: &[f64]) -> Result<LeastSquaresFit, TrainerError> {
    if rows.is_empty() {
        return Err(TrainerError::Fit("no rows to fit".to_string()));
    }
    if rows.len() != targets.len() {
        return Err(TrainerError::Fit(format!(
            "{} rows but {} targets",
            rows.len(),
            targets.len()
        )));
    }

    let width = rows[0].len();
    if rows.iter().any(|r| r.len() != width) {
        return Err(TrainerError::Fit("rows have inconsistent widths".to_string()));
    }

    // Augment with a constant column so the intercept is just another
    // coefficient: n = width + 1 unknowns.
    let n = width + 1;

    // Gram matrix G = A^T A and right-hand side b = A^T y.
    let mut gram = vec![vec![0.0f64; n]; n];
    let mut rhs = vec![0.0f64; n];

    for (row, &y) in rows.iter().zip(targets) {
        for i in 0..n {
            let xi = if i == 0 { 1.0 } else { row[i - 1] };
            rhs[i] += xi * y;
            for j in i..n {
                let xj = if j == 0 { 1.0 } else { row[j - 1] };
                gram[i][j] += xi * xj;
            }
        }
    }
    // Mirror the upper triangle.
    for i in 0..n {
        for j in 0..i {
            gram[i][j] = gram[j][i];
        }
    }

    let solution = match solve(gram.clone(), rhs.clone()) {
        Some(solution) => solution,
        None => {
            // Collinear columns: retry with a small ridge penalty.
            tracing::warn!("normal equations are singular, retrying with ridge penalty");
            let mut ridged = gram;
            for (i, row) in ridged.iter_mut().enumerate() {
                row[i] += RIDGE_LAMBDA * (1.0 + row[i].abs());
            }
            solve(ridged, rhs)
                .ok_or_else(|| TrainerError::Fit("normal equations are singular".to_string()))?
        }
    };

    if solution.iter().any(|v| !v.is_finite()) {
        return Err(TrainerError::Fit(
            "fit produced non-finite coefficients".to_string(),
        ));
    }

    Ok(LeastSquaresFit {
        intercept: solution[0],
        weights: solution[1..].to_vec(),
    })
}

/// Gaussian elimination with partial pivoting; `None` when singular.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < PIVOT_EPS {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in row + 1..n {
            acc -= a[row][k] * x[k];
        }
        x[row] = acc / a[row][row];
    }

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_linear_relationship() {
        // y = 10 + 2*x0 + 3*x1, noiseless
        let rows = vec![
            vec![1.0, 1.0],
            vec![2.0, 1.0],
            vec![1.0, 3.0],
            vec![4.0, 2.0],
            vec![3.0, 5.0],
        ];
        let targets: Vec<f64> = rows.iter().map(|r| 10.0 + 2.0 * r[0] + 3.0 * r[1]).collect();

        let fit = fit_least_squares(&rows, &targets).unwrap();
        assert!((fit.intercept - 10.0).abs() < 1e-6);
        assert!((fit.weights[0] - 2.0).abs() < 1e-6);
        assert!((fit.weights[1] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn fit_is_deterministic() {
        let rows = vec![
            vec![1.0, 0.0],
            vec![2.0, 1.0],
            vec![3.0, 0.0],
            vec![4.0, 1.0],
        ];
        let targets = vec![3.1, 5.9, 7.2, 9.8];

        let first = fit_least_squares(&rows, &targets).unwrap();
        let second = fit_least_squares(&rows, &targets).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn collinear_columns_fall_back_to_ridge() {
        // Second column is an exact copy of the first.
        let rows = vec![
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![3.0, 3.0],
            vec![4.0, 4.0],
        ];
        let targets = vec![2.0, 4.0, 6.0, 8.0];

        let fit = fit_least_squares(&rows, &targets).unwrap();
        let predicted = fit.intercept + fit.weights[0] * 2.0 + fit.weights[1] * 2.0;
        assert!((predicted - 4.0).abs() < 1e-3);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(fit_least_squares(&[], &[]).is_err());
    }

    #[test]
    fn mismatched_lengths_are_an_error() {
        let rows = vec![vec![1.0]];
        assert!(fit_least_squares(&rows, &[1.0, 2.0]).is_err());
    }
}
