// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parameters of a canonical annotated path query.

use crate::errors::CountingError;

/// Boundary flags of a path.
///
/// `delta_s` is set when the path starts with a non-diagonal move and
/// `delta_e` when it ends with one (a final "wedge").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boundary {
    pub delta_s: bool,
    pub delta_e: bool,
}

impl Boundary {
    /// The four flag combinations, in `(delta_s, delta_e)` lexicographic order.
    pub const ALL: [Boundary; 4] = [
        Boundary::new(false, false),
        Boundary::new(false, true),
        Boundary::new(true, false),
        Boundary::new(true, true),
    ];

    pub const fn new(delta_s: bool, delta_e: bool) -> Self {
        Self { delta_s, delta_e }
    }

    /// `delta_s` as 0 or 1.
    #[inline]
    pub fn s(self) -> i64 {
        i64::from(self.delta_s)
    }

    /// `delta_e` as 0 or 1.
    #[inline]
    pub fn e(self) -> i64 {
        i64::from(self.delta_e)
    }
}

/// `(n, r, D, q, boundary)`; Σ comes from the counting context.
///
/// - `n`: string length
/// - `r`: path cost (edit distance radius)
/// - `d`: number of diagonal-leaving segment pairs D
/// - `q`: total run length of non-diagonal moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathParameters {
    pub n: u32,
    pub r: u32,
    pub d: u32,
    pub q: u32,
    pub boundary: Boundary,
}

impl PathParameters {
    pub fn new(n: u32, r: u32, d: u32, q: u32, boundary: Boundary) -> Self {
        Self {
            n,
            r,
            d,
            q,
            boundary,
        }
    }

    /// Same path shape with other boundary flags.
    pub fn with_boundary(self, boundary: Boundary) -> Self {
        Self { boundary, ..self }
    }

    /// Upper end of the q range, `min(2D, n - r + D + 1)`.
    ///
    /// Two non-diagonal moves per segment pair bound q by 2D; the `+1`
    /// accounts for a final wedge. The result may be below 2, in which case
    /// no q is feasible.
    pub fn q_max(n: u32, r: u32, d: u32) -> i64 {
        let (n, r, d) = (i64::from(n), i64::from(r), i64::from(d));
        (2 * d).min(n - r + d + 1)
    }

    /// Largest feasible D for cost r, `floor(r / 2)`.
    pub fn d_max(r: u32) -> u32 {
        r / 2
    }

    /// Every feasible shape with D > 0 for strings of length n, ordered by
    /// r, then D, then q. Boundary flags are left unset.
    pub fn grid(n: u32) -> impl Iterator<Item = PathParameters> {
        (0..=n).flat_map(move |r| {
            (1..=Self::d_max(r)).flat_map(move |d| {
                let q_max = Self::q_max(n, r, d).max(1) as u32;
                (2..=q_max).map(move |q| PathParameters::new(n, r, d, q, Boundary::default()))
            })
        })
    }

    /// Check the feasibility constraints of the (D, q) grid.
    ///
    /// - `0 <= D <= floor(r/2)`
    /// - `D == 0` implies `q == 0` (the diagonal-only path)
    /// - `D > 0` implies `2 <= q <= min(2D, n - r + D + 1)`
    pub fn validate(&self) -> Result<(), CountingError> {
        let fail = |reason: &'static str| CountingError::InvalidParameters {
            n: self.n,
            r: self.r,
            d: self.d,
            q: self.q,
            reason,
        };
        if self.d > Self::d_max(self.r) {
            return Err(fail("D exceeds floor(r/2)"));
        }
        if self.d == 0 {
            if self.q != 0 {
                return Err(fail("the diagonal path (D = 0) has q = 0"));
            }
            return Ok(());
        }
        if self.q < 2 {
            return Err(fail("q must be at least 2 when D > 0"));
        }
        if i64::from(self.q) > Self::q_max(self.n, self.r, self.d) {
            return Err(fail("q exceeds min(2D, n - r + D + 1)"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_order() {
        let flags: Vec<(i64, i64)> = Boundary::ALL.iter().map(|b| (b.s(), b.e())).collect();
        assert_eq!(flags, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_q_max() {
        assert_eq!(PathParameters::q_max(8, 4, 2), 4);
        assert_eq!(PathParameters::q_max(8, 8, 4), 5);
        assert_eq!(PathParameters::q_max(8, 8, 1), 2);
        // infeasible: below 2
        assert_eq!(PathParameters::q_max(2, 2, 0), 0);
    }

    #[test]
    fn test_validate() {
        let b = Boundary::default();
        assert!(PathParameters::new(8, 4, 0, 0, b).validate().is_ok());
        assert!(PathParameters::new(8, 4, 2, 4, b).validate().is_ok());
        assert!(PathParameters::new(8, 4, 3, 2, b).validate().is_err());
        assert!(PathParameters::new(8, 4, 0, 2, b).validate().is_err());
        assert!(PathParameters::new(8, 4, 1, 1, b).validate().is_err());
        assert!(PathParameters::new(8, 4, 1, 3, b).validate().is_err());
        assert!(PathParameters::new(8, 8, 4, 6, b).validate().is_err());
    }

    #[test]
    fn test_grid_is_feasible() {
        let shapes: Vec<PathParameters> = PathParameters::grid(8).collect();
        assert!(shapes.iter().all(|p| p.validate().is_ok()));
        // r=4 contributes D=1 (q=2) and D=2 (q=2,3,4)
        let r4: Vec<(u32, u32)> = shapes.iter().filter(|p| p.r == 4).map(|p| (p.d, p.q)).collect();
        assert_eq!(r4, vec![(1, 2), (2, 2), (2, 3), (2, 4)]);
        assert_eq!(shapes.len(), 37);
    }

    #[test]
    fn test_validate_reason() {
        let err = PathParameters::new(8, 4, 2, 5, Boundary::default())
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid path parameters (n=8, r=4, D=2, q=5): q exceeds min(2D, n - r + D + 1)"
        );
    }
}
