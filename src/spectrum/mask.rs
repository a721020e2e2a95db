//! Binary circular band masks over a centered frequency plane.

/// Which spectral band a mask lets through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Pass frequencies near zero (smoothing).
    LowPass,
    /// Pass frequencies far from zero (detail emphasis).
    HighPass,
}

/// Real-valued {0, 1} mask matching a shifted spectrum's dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Mask {
    /// Builds a band mask for a `rows x cols` centered frequency plane.
    ///
    /// The plane is filled with the reject value, then a filled disk of
    /// `radius` around `(rows / 2, cols / 2)` is set to the pass value.
    /// Membership is boundary-inclusive (distance to center `<= radius`).
    /// Radius 0 keeps only the center sample; a radius beyond the half-plane
    /// covers everything. Neither degenerate case is an error.
    pub fn build(rows: usize, cols: usize, band: Band, radius: u32) -> Mask {
        let (pass, reject) = match band {
            Band::LowPass => (1.0f32, 0.0f32),
            Band::HighPass => (0.0f32, 1.0f32),
        };
        let center_r = (rows / 2) as i64;
        let center_c = (cols / 2) as i64;
        let radius_sq = i64::from(radius) * i64::from(radius);

        let mut data = vec![reject; rows * cols];
        for r in 0..rows {
            let dr = r as i64 - center_r;
            for c in 0..cols {
                let dc = c as i64 - center_c;
                if dr * dr + dc * dc <= radius_sq {
                    data[r * cols + c] = pass;
                }
            }
        }
        Mask { data, rows, cols }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the backing row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the value at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }
}
