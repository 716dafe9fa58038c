//! Inverse, rank, characteristic polynomial and integer powers.

use crate::config::SelectionConfig;
use crate::element::Element;
use crate::elimination::{reduce, EchelonAlgorithm};
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

impl<E: Element> Matrix<E> {
    /// The inverse matrix.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square matrix and `Singular` if no
    /// inverse exists.
    pub fn inverse(&self, algorithm: EchelonAlgorithm) -> Result<Self> {
        self.inverse_with_config(algorithm, &SelectionConfig::default())
    }

    /// [`Matrix::inverse`] with explicit selection thresholds.
    ///
    /// # Errors
    ///
    /// See [`Matrix::inverse`].
    pub fn inverse_with_config(
        &self,
        algorithm: EchelonAlgorithm,
        config: &SelectionConfig,
    ) -> Result<Self> {
        self.check_square("inverse")?;
        let n = self.num_rows();
        let identity = Self::identity(n)?;
        let vars = Self::from_fn(n, n, |_, _| E::fresh_symbol())?;
        match self.solve_with_config(&vars, &identity, algorithm, config) {
            Err(LinalgError::Inconsistent { .. }) => Err(LinalgError::Singular { op: "inverse" }),
            other => other,
        }
    }

    /// Number of linearly independent rows.
    #[must_use]
    pub fn rank(&self, algorithm: EchelonAlgorithm) -> usize {
        self.rank_with_config(algorithm, &SelectionConfig::default())
    }

    /// [`Matrix::rank`] with explicit selection thresholds.
    #[must_use]
    pub fn rank_with_config(&self, algorithm: EchelonAlgorithm, config: &SelectionConfig) -> usize {
        let mut reduced = self.clone();
        reduce(&mut reduced, algorithm, self.num_cols(), config);
        reduced
            .entries()
            .iter()
            .rposition(|e| !e.is_zero())
            .map_or(0, |last| 1 + last / self.num_cols())
    }

    /// Characteristic polynomial `det(A - lambda*I)`, collected in `lambda`.
    ///
    /// Numeric matrices go through Leverrier's trace recurrence, others
    /// through a determinant.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square matrix.
    pub fn charpoly(&self, lambda: &E) -> Result<E> {
        self.check_square("charpoly")?;
        let n = self.num_rows();

        if !self.entries().iter().all(E::is_numeric) {
            let mut shifted = self.clone();
            for d in 0..n {
                shifted[(d, d)] = shifted[(d, d)].clone() - lambda.clone();
            }
            return Ok(shifted.determinant()?.collect(lambda));
        }

        let mut b = self.clone();
        let mut c = b.trace()?;
        let mut poly = lambda.power(degree(n)?) - c.clone() * lambda.power(degree(n - 1)?);
        for i in 1..n {
            for d in 0..n {
                b[(d, d)] = b[(d, d)].clone() - c.clone();
            }
            b = self.mul(&b)?;
            let step = i64::try_from(i + 1).map_err(|_| too_large())?;
            c = b.trace()? / E::from_i64(step);
            poly = poly - c.clone() * lambda.power(degree(n - i - 1)?);
        }
        // Leverrier yields det(lambda*I - A)
        if n % 2 == 1 {
            poly = -poly;
        }
        Ok(poly.collect(lambda))
    }

    /// Integer power of a square matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `exponent` is not an integer or does
    /// not fit in `i64`, and the errors of [`Matrix::pow_i64`].
    pub fn pow(&self, exponent: &E) -> Result<Self> {
        match exponent.as_integer() {
            Some(k) => self.pow_i64(k),
            None if exponent.is_integer() => Err(LinalgError::invalid(
                "pow",
                format!("exponent {exponent:?} is out of range"),
            )),
            None => Err(LinalgError::invalid(
                "pow",
                format!("exponent must be an integer, got {exponent:?}"),
            )),
        }
    }

    /// Integer power by repeated squaring; negative powers invert first.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square matrix and `Singular` for a
    /// negative power of a singular matrix.
    pub fn pow_i64(&self, exponent: i64) -> Result<Self> {
        self.check_square("pow")?;
        let mut a = if exponent < 0 {
            self.inverse(EchelonAlgorithm::Automatic)?
        } else {
            self.clone()
        };
        let mut b = exponent.unsigned_abs();
        let mut c = Self::identity(self.num_rows())?;
        if b == 0 {
            return Ok(c);
        }
        while b != 1 {
            if b % 2 == 1 {
                c = c.mul(&a)?;
                b -= 1;
            }
            b /= 2;
            a = a.mul(&a)?;
        }
        a.mul(&c)
    }
}

fn too_large() -> LinalgError {
    LinalgError::invalid("charpoly", "dimension too large")
}

fn degree(k: usize) -> Result<u32> {
    u32::try_from(k).map_err(|_| too_large())
}
