use crate::StrError;

/// Specifies the (boundary) side of a rectangle
///
/// For a one-dimensional lattice, only `Left` and `Right` exist;
/// `Bottom` and `Top` map to empty index lists.
#[derive(Clone, Copy)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

/// Implements an evenly-spaced lattice over a segment (1D) or rectangle (2D)
///
/// Nodes are numbered with a single global index following the row-major
/// convention (grid column varies fastest):
///
/// ```text
/// 12--13--14--15
///  |   |   |   |
///  8---9--10--11     index = row * nx + col
///  |   |   |   |
///  4---5---6---7
///  |   |   |   |
///  0---1---2---3
/// ```
///
/// Nodes on the outer edge are **boundary** nodes (their values are
/// prescribed); all others are **interior** nodes (their values are the
/// unknowns of the discrete Laplace problem).
pub struct Lattice {
    nx: usize, // number of points along x (≥ 2)
    ny: usize, // number of points along y (≥ 2 in 2D; equals 1 in 1D)
    lx: f64,   // length along x
    ly: f64,   // length along y (zero in 1D)
    dx: f64,   // grid spacing along x
    dy: f64,   // grid spacing along y (zero in 1D)
}

impl Lattice {
    /// Allocates a one-dimensional lattice
    ///
    /// # Input
    ///
    /// * `nx` -- number of points (≥ 2)
    /// * `lx` -- physical length (> 0)
    pub fn new_1d(nx: usize, lx: f64) -> Result<Self, StrError> {
        if nx < 2 {
            return Err("nx must be ≥ 2");
        }
        if !(lx > 0.0) {
            return Err("lx must be positive");
        }
        let dx = lx / ((nx - 1) as f64);
        Ok(Lattice {
            nx,
            ny: 1,
            lx,
            ly: 0.0,
            dx,
            dy: 0.0,
        })
    }

    /// Allocates a two-dimensional lattice
    ///
    /// # Input
    ///
    /// * `nx` -- number of points along x (≥ 2)
    /// * `ny` -- number of points along y (≥ 2)
    /// * `lx` -- length along x (> 0)
    /// * `ly` -- length along y (> 0)
    pub fn new_2d(nx: usize, ny: usize, lx: f64, ly: f64) -> Result<Self, StrError> {
        if nx < 2 {
            return Err("nx must be ≥ 2");
        }
        if ny < 2 {
            return Err("ny must be ≥ 2");
        }
        if !(lx > 0.0) {
            return Err("lx must be positive");
        }
        if !(ly > 0.0) {
            return Err("ly must be positive");
        }
        let dx = lx / ((nx - 1) as f64);
        let dy = ly / ((ny - 1) as f64);
        Ok(Lattice { nx, ny, lx, ly, dx, dy })
    }

    /// Returns the total number of lattice points
    pub fn dim(&self) -> usize {
        self.nx * self.ny
    }

    /// Returns the number of spatial dimensions (1 or 2)
    pub fn ndim(&self) -> usize {
        if self.ny == 1 {
            1
        } else {
            2
        }
    }

    /// Returns the number of points along x
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Returns the number of points along y (1 for a 1D lattice)
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Returns the length along x
    pub fn lx(&self) -> f64 {
        self.lx
    }

    /// Returns the length along y (zero for a 1D lattice)
    pub fn ly(&self) -> f64 {
        self.ly
    }

    /// Returns the grid spacing along x
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Returns the grid spacing along y (zero for a 1D lattice)
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Returns the number of interior points
    pub fn num_interior(&self) -> usize {
        if self.ny == 1 {
            self.nx - 2
        } else {
            (self.nx - 2) * (self.ny - 2)
        }
    }

    /// Returns the stencil size, i.e., the number of neighbors of an interior node
    ///
    /// The stencil size is 2 in 1D and 4 in 2D.
    pub fn stencil_size(&self) -> usize {
        2 * self.ndim()
    }

    /// Tells whether a node lies on the outer boundary or not
    pub fn is_boundary(&self, i: usize) -> bool {
        let col = i % self.nx;
        if self.ny == 1 {
            col == 0 || col == self.nx - 1
        } else {
            let row = i / self.nx;
            col == 0 || col == self.nx - 1 || row == 0 || row == self.ny - 1
        }
    }

    /// Returns the interior node indices in ascending (row-major) order
    ///
    /// This enumeration defines the row ordering of the linear system:
    /// row i of the assembled matrix corresponds to the i-th index
    /// returned here.
    pub fn interior_indices(&self) -> Vec<usize> {
        (0..self.dim()).filter(|&i| !self.is_boundary(i)).collect()
    }

    /// Returns the boundary node indices in ascending order
    pub fn boundary_indices(&self) -> Vec<usize> {
        (0..self.dim()).filter(|&i| self.is_boundary(i)).collect()
    }

    /// Returns the indices of the lattice neighbors of node i
    ///
    /// The order is left, right (and below, above in 2D). Interior nodes
    /// always get the full stencil (2 neighbors in 1D, 4 in 2D); nodes on
    /// the outer edge get the clipped set of in-lattice neighbors, but the
    /// solvers never visit those.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        let col = i % self.nx;
        let row = i / self.nx;
        let mut nbrs = Vec::with_capacity(self.stencil_size());
        if col > 0 {
            nbrs.push(i - 1);
        }
        if col < self.nx - 1 {
            nbrs.push(i + 1);
        }
        if self.ny > 1 {
            if row > 0 {
                nbrs.push(i - self.nx);
            }
            if row < self.ny - 1 {
                nbrs.push(i + self.nx);
            }
        }
        nbrs
    }

    /// Returns the node indices lying on a given side of the lattice
    pub fn side_indices(&self, side: Side) -> Vec<usize> {
        let dim = self.dim();
        match side {
            Side::Left => (0..dim).step_by(self.nx).collect(),
            Side::Right => ((self.nx - 1)..dim).step_by(self.nx).collect(),
            Side::Bottom => {
                if self.ny == 1 {
                    Vec::new()
                } else {
                    (0..self.nx).collect()
                }
            }
            Side::Top => {
                if self.ny == 1 {
                    Vec::new()
                } else {
                    ((dim - self.nx)..dim).collect()
                }
            }
        }
    }

    /// Returns the physical coordinates (x, y) of node i
    ///
    /// The y coordinate is zero for a 1D lattice.
    pub fn coordinates(&self, i: usize) -> (f64, f64) {
        let col = i % self.nx;
        let row = i / self.nx;
        ((col as f64) * self.dx, (row as f64) * self.dy)
    }

    /// Executes a callback over all grid points
    ///
    /// The callback receives the global index and the (x, y) coordinates.
    pub fn loop_over_grid_points<F>(&self, mut callback: F)
    where
        F: FnMut(usize, f64, f64),
    {
        for i in 0..self.dim() {
            let (x, y) = self.coordinates(i);
            callback(i, x, y);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
