//! Small dense matrices over `F_p`, enough to split a vector space into common eigenspaces.

use cyclotomic::prime;

/// A dense matrix over `F_p`, stored as a list of rows with entries in `0..p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    p: u32,
    columns: usize,
    rows: Vec<Vec<u32>>,
}

impl Matrix {
    pub fn new(p: u32, rows: usize, columns: usize) -> Self {
        Self {
            p,
            columns,
            rows: vec![vec![0; columns]; rows],
        }
    }

    pub fn from_rows(p: u32, columns: usize, rows: Vec<Vec<u32>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns));
        Self { p, columns, rows }
    }

    pub fn identity(p: u32, n: usize) -> Self {
        let mut result = Self::new(p, n, n);
        for (i, row) in result.rows.iter_mut().enumerate() {
            row[i] = 1;
        }
        result
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.rows[i]
    }

    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.rows
    }

    /// `v * self`, for a row vector `v`.
    pub fn apply_left(&self, v: &[u32]) -> Vec<u32> {
        let p = self.p;
        let mut result = vec![0; self.columns];
        for (&c, row) in v.iter().zip(&self.rows) {
            if c == 0 {
                continue;
            }
            for (r, &x) in result.iter_mut().zip(row) {
                *r = prime::sum(p, *r, prime::product(p, c, x));
            }
        }
        result
    }

    /// `self * v`, for a column vector `v`.
    pub fn apply_right(&self, v: &[u32]) -> Vec<u32> {
        let p = self.p;
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(v)
                    .fold(0, |acc, (&x, &y)| prime::sum(p, acc, prime::product(p, x, y)))
            })
            .collect()
    }

    /// Row reduces the first `pivot_columns` columns, leaving the remaining columns along for the
    /// ride. Rows are reordered so that pivot rows come first, each with a leading 1. Returns the
    /// rank of the first block.
    pub fn row_reduce(&mut self, pivot_columns: usize) -> usize {
        let p = self.p;
        let mut rank = 0;
        for column in 0..pivot_columns {
            let Some(pivot) = (rank..self.rows.len()).find(|&r| self.rows[r][column] != 0) else {
                continue;
            };
            self.rows.swap(rank, pivot);
            let c = prime::inverse(p, self.rows[rank][column]);
            for x in &mut self.rows[rank] {
                *x = prime::product(p, *x, c);
            }
            let pivot_row = self.rows[rank].clone();
            for (r, row) in self.rows.iter_mut().enumerate() {
                if r == rank || row[column] == 0 {
                    continue;
                }
                let factor = p - row[column];
                for (x, &y) in row.iter_mut().zip(&pivot_row) {
                    *x = prime::sum(p, *x, prime::product(p, factor, y));
                }
            }
            rank += 1;
        }
        rank
    }

    /// A basis of the left kernel `{ c : c * self = 0 }`.
    ///
    /// This augments `self` with an identity matrix and row reduces the left block. The rows whose
    /// left block vanishes record the row operations producing zero, which is exactly the kernel.
    pub fn left_kernel(&self) -> Vec<Vec<u32>> {
        let n = self.rows.len();
        let mut augmented = Self::from_rows(
            self.p,
            self.columns + n,
            self.rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let mut r = row.clone();
                    r.resize(self.columns + n, 0);
                    r[self.columns + i] = 1;
                    r
                })
                .collect(),
        );
        let rank = augmented.row_reduce(self.columns);
        augmented.rows[rank..]
            .iter()
            .map(|row| row[self.columns..].to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_reduce_test() {
        let mut m = Matrix::from_rows(
            3,
            5,
            vec![vec![1, 2, 1, 1, 0], vec![1, 0, 2, 1, 1], vec![2, 2, 0, 2, 1]],
        );
        let rank = m.row_reduce(5);
        assert_eq!(rank, 2);
        assert_eq!(m.row(0), &[1, 0, 2, 1, 1]);
        assert_eq!(m.row(1), &[0, 1, 1, 0, 1]);
        assert_eq!(m.row(2), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn left_kernel_test() {
        let p = 7;
        let m = Matrix::from_rows(p, 2, vec![vec![1, 2], vec![2, 4], vec![3, 1]]);
        let kernel = m.left_kernel();
        assert_eq!(kernel.len(), 1);
        assert!(m.apply_left(&kernel[0]).iter().all(|&x| x == 0));
        assert!(kernel[0].iter().any(|&x| x != 0));

        assert!(Matrix::identity(p, 3).left_kernel().is_empty());
    }

    #[test]
    fn apply() {
        let m = Matrix::from_rows(5, 2, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.apply_left(&[1, 1]), vec![4, 1]);
        assert_eq!(m.apply_right(&[1, 1]), vec![3, 2]);
    }
}
