use crate::FieldFn;

// Width and height of a field, image or pixel surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

// Dense scalar field stored as a single row-major buffer of width × height.
// Every cell is written exactly once while building; afterwards it is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Field {
    // Build a field by evaluating `f` once per lattice point, rows first.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> f64,
    {
        assert!(
            width > 0 && height > 0,
            "field dimensions must be positive, got {}x{}",
            width,
            height
        );

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    // Freeze any sampling function (e.g. a composed pipeline) into a field.
    pub fn materialize<F: FieldFn + ?Sized>(source: &F) -> Self {
        Self::from_fn(source.width(), source.height(), |x, y| source.get2(x, y))
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} field",
            x,
            y,
            self.width,
            self.height
        );
        self.data[self.index(x, y)]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Row-major view of every cell
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            })
    }
}

impl FieldFn for Field {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get2(&self, x: u32, y: u32) -> f64 {
        self.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use crate::FieldFn;

    #[test]
    fn field_row_major_layout() {
        let f = Field::from_fn(3, 2, |x, y| (y * 10 + x) as f64);
        assert_eq!(f.values(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(f.get(2, 1), 12.0);
        assert_eq!(f.get2(0, 1), 10.0);
    }

    #[test]
    fn field_visits_each_cell_once() {
        let mut calls = 0;
        let f = Field::from_fn(7, 5, |_, _| {
            calls += 1;
            0.5
        });
        assert_eq!(calls, 35);
        assert_eq!(f.values().len(), 35);
    }

    #[test]
    fn field_min_max() {
        let f = Field::from_fn(4, 4, |x, y| x as f64 - y as f64);
        assert_eq!(f.min_max(), (-3.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn field_zero_width_panics() {
        let _ = Field::from_fn(0, 4, |_, _| 0.0);
    }

    #[test]
    #[should_panic]
    fn field_out_of_bounds_panics() {
        let f = Field::from_fn(2, 2, |_, _| 0.0);
        let _ = f.get(2, 0);
    }
}
