use crate::Lattice;
use russell_lab::Vector;

/// Holds the potential values at all lattice points
///
/// The values follow the lattice's global (row-major) node numbering.
/// Boundary entries carry the prescribed Dirichlet data and are never
/// mutated by the solvers; interior entries are the unknowns.
pub struct Field {
    pub(crate) values: Vector,
    nx: usize,
    ny: usize,
}

impl Field {
    /// Allocates a zeroed field matching the lattice dimensions
    pub(crate) fn new(lattice: &Lattice) -> Self {
        Field {
            values: Vector::new(lattice.dim()),
            nx: lattice.nx(),
            ny: lattice.ny(),
        }
    }

    /// Returns the total number of points
    pub fn dim(&self) -> usize {
        self.nx * self.ny
    }

    /// Returns the number of points along x
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Returns the number of points along y (1 for a 1D field)
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Returns the value at global node index i
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Sets the value at global node index i
    pub(crate) fn set(&mut self, i: usize, value: f64) {
        self.values[i] = value;
    }

    /// Gives access to the underlying vector of values
    pub fn as_vector(&self) -> &Vector {
        &self.values
    }

    /// Returns the values regridded as rows (ny lists of nx values)
    ///
    /// Useful for contour plotting; a 1D field yields a single row.
    pub fn grid_values(&self) -> Vec<Vec<f64>> {
        (0..self.ny)
            .map(|row| (0..self.nx).map(|col| self.values[row * self.nx + col]).collect())
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Field;
    use crate::Lattice;

    #[test]
    fn new_and_access_work() {
        let lat = Lattice::new_2d(3, 2, 1.0, 1.0).unwrap();
        let mut field = Field::new(&lat);
        assert_eq!(field.dim(), 6);
        assert_eq!(field.nx(), 3);
        assert_eq!(field.ny(), 2);
        field.set(4, 1.5);
        assert_eq!(field.get(4), 1.5);
        assert_eq!(field.as_vector().dim(), 6);
    }

    #[test]
    fn grid_values_works() {
        let lat = Lattice::new_2d(3, 2, 1.0, 1.0).unwrap();
        let mut field = Field::new(&lat);
        for i in 0..6 {
            field.set(i, i as f64);
        }
        assert_eq!(field.grid_values(), vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);

        let lat = Lattice::new_1d(3, 1.0).unwrap();
        let mut field = Field::new(&lat);
        field.set(1, 7.0);
        assert_eq!(field.grid_values(), vec![vec![0.0, 7.0, 0.0]]);
    }
}
