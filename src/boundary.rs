use crate::{Field, Lattice, Side, StrError};
use std::collections::HashMap;

/// Two sides sharing a corner must prescribe values this close to each other
const CORNER_TOLERANCE: f64 = 1e-12;

/// Specifies the Dirichlet data along one side of the lattice
///
/// A profile is either a constant or a function of the along-edge physical
/// coordinate (y for the left/right sides, x for the bottom/top sides).
/// A 1D edge is a single point and is sampled at coordinate 0.0.
pub enum EdgeProfile {
    /// The same value at every node of the side
    Constant(f64),

    /// A value computed from the along-edge coordinate
    Function(Box<dyn Fn(f64) -> f64>),
}

impl EdgeProfile {
    /// Creates a constant profile
    pub fn constant(value: f64) -> Self {
        EdgeProfile::Constant(value)
    }

    /// Creates a profile from a function of the along-edge coordinate
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        EdgeProfile::Function(Box::new(function))
    }

    /// Evaluates the profile at the along-edge coordinate s
    fn eval(&self, s: f64) -> f64 {
        match self {
            EdgeProfile::Constant(value) => *value,
            EdgeProfile::Function(function) => function(s),
        }
    }
}

/// Collects the essential (Dirichlet) boundary conditions, one profile per side
///
/// A 1D lattice requires the left and right profiles; a 2D lattice requires
/// all four. Sides are evaluated in the order bottom, top, left, right; at a
/// shared corner the two prescribing sides must agree within a small
/// tolerance (the first side's value stands), otherwise the evaluation fails.
pub struct BoundaryCondition {
    left: Option<EdgeProfile>,
    right: Option<EdgeProfile>,
    bottom: Option<EdgeProfile>,
    top: Option<EdgeProfile>,
}

impl BoundaryCondition {
    /// Allocates a new instance with no side prescribed yet
    pub fn new() -> Self {
        BoundaryCondition {
            left: None,
            right: None,
            bottom: None,
            top: None,
        }
    }

    /// Creates the two-point boundary condition of a 1D problem
    ///
    /// # Input
    ///
    /// * `left` -- the value at the leftmost node
    /// * `right` -- the value at the rightmost node
    pub fn two_point(left: f64, right: f64) -> Self {
        let mut bc = BoundaryCondition::new();
        bc.set_constant(Side::Left, left).set_constant(Side::Right, right);
        bc
    }

    /// Sets the profile of a given side
    pub fn set(&mut self, side: Side, profile: EdgeProfile) -> &mut Self {
        match side {
            Side::Left => self.left = Some(profile),
            Side::Right => self.right = Some(profile),
            Side::Bottom => self.bottom = Some(profile),
            Side::Top => self.top = Some(profile),
        }
        self
    }

    /// Sets a constant value on a given side
    pub fn set_constant(&mut self, side: Side, value: f64) -> &mut Self {
        self.set(side, EdgeProfile::Constant(value))
    }

    /// Sets zero on all four sides
    pub fn set_homogeneous(&mut self) -> &mut Self {
        self.set_constant(Side::Left, 0.0)
            .set_constant(Side::Right, 0.0)
            .set_constant(Side::Bottom, 0.0)
            .set_constant(Side::Top, 0.0)
    }

    /// Evaluates the prescribed values at every boundary node
    ///
    /// Returns a map: global node index => prescribed value
    pub(crate) fn evaluate(&self, lattice: &Lattice) -> Result<HashMap<usize, f64>, StrError> {
        let sides = [
            (Side::Bottom, &self.bottom, "missing boundary condition on the bottom side"),
            (Side::Top, &self.top, "missing boundary condition on the top side"),
            (Side::Left, &self.left, "missing boundary condition on the left side"),
            (Side::Right, &self.right, "missing boundary condition on the right side"),
        ];
        let mut prescribed = HashMap::new();
        for (side, profile, missing) in sides {
            let along_y = matches!(side, Side::Left | Side::Right);
            let indices = lattice.side_indices(side);
            if indices.is_empty() {
                continue;
            }
            let profile = profile.as_ref().ok_or(missing)?;
            for i in indices {
                let (x, y) = lattice.coordinates(i);
                let value = profile.eval(if along_y { y } else { x });
                match prescribed.get(&i) {
                    Some(&existing) => {
                        if f64::abs(existing - value) > CORNER_TOLERANCE {
                            return Err("boundary values disagree at a shared corner");
                        }
                    }
                    None => {
                        prescribed.insert(i, value);
                    }
                }
            }
        }
        Ok(prescribed)
    }

    /// Creates a field with boundary values set and interior values initialized
    ///
    /// The interior is filled with the mean of all boundary values, which
    /// shortens the relaxation without affecting the converged solution.
    pub fn apply(&self, lattice: &Lattice) -> Result<Field, StrError> {
        let prescribed = self.evaluate(lattice)?;
        let mut field = Field::new(lattice);
        let boundary = lattice.boundary_indices();
        let mut sum = 0.0;
        for &i in &boundary {
            let value = *prescribed
                .get(&i)
                .ok_or("boundary condition does not cover every boundary point")?;
            field.set(i, value);
            sum += value;
        }
        let mean = sum / (boundary.len() as f64);
        for i in lattice.interior_indices() {
            field.set(i, mean);
        }
        Ok(field)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BoundaryCondition, EdgeProfile};
    use crate::{Lattice, Side};
    use russell_lab::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn two_point_apply_works() {
        let lat = Lattice::new_1d(4, 1.0).unwrap();
        let bc = BoundaryCondition::two_point(3.0, -1.0);
        let field = bc.apply(&lat).unwrap();
        assert_eq!(field.get(0), 3.0);
        assert_eq!(field.get(3), -1.0);
        // interior starts at the mean of the two endpoint values
        assert_eq!(field.get(1), 1.0);
        assert_eq!(field.get(2), 1.0);
    }

    #[test]
    fn apply_fails_on_missing_side() {
        let lat = Lattice::new_1d(4, 1.0).unwrap();
        let mut bc = BoundaryCondition::new();
        bc.set_constant(Side::Left, 1.0);
        assert_eq!(
            bc.apply(&lat).err(),
            Some("missing boundary condition on the right side")
        );

        let lat = Lattice::new_2d(4, 4, 1.0, 1.0).unwrap();
        let mut bc = BoundaryCondition::new();
        bc.set_constant(Side::Left, 0.0)
            .set_constant(Side::Right, 0.0)
            .set_constant(Side::Bottom, 0.0);
        assert_eq!(
            bc.apply(&lat).err(),
            Some("missing boundary condition on the top side")
        );
    }

    #[test]
    fn corner_disagreement_fails() {
        let lat = Lattice::new_2d(4, 4, 1.0, 1.0).unwrap();
        let mut bc = BoundaryCondition::new();
        bc.set_homogeneous().set_constant(Side::Left, 1.0);
        assert_eq!(
            bc.apply(&lat).err(),
            Some("boundary values disagree at a shared corner")
        );
    }

    #[test]
    fn sine_profile_works() {
        // sin(π x) on the top edge vanishes at both corners, thus it is
        // compatible with grounded left/right/bottom sides
        let lat = Lattice::new_2d(5, 5, 1.0, 1.0).unwrap();
        let mut bc = BoundaryCondition::new();
        bc.set_homogeneous()
            .set(Side::Top, EdgeProfile::from_fn(|x| f64::sin(PI * x)));
        let field = bc.apply(&lat).unwrap();
        for i in lat.side_indices(Side::Top) {
            let (x, _) = lat.coordinates(i);
            approx_eq(field.get(i), f64::sin(PI * x), 1e-12);
        }
        for i in lat.side_indices(Side::Bottom) {
            assert_eq!(field.get(i), 0.0);
        }
    }

    #[test]
    fn evaluate_covers_every_boundary_node() {
        let lat = Lattice::new_2d(5, 4, 1.0, 1.0).unwrap();
        let mut bc = BoundaryCondition::new();
        bc.set_homogeneous();
        let prescribed = bc.evaluate(&lat).unwrap();
        let boundary = lat.boundary_indices();
        assert_eq!(prescribed.len(), boundary.len());
        for i in boundary {
            assert!(prescribed.contains_key(&i));
        }
    }

    #[test]
    fn interior_initial_guess_is_boundary_mean() {
        let lat = Lattice::new_2d(4, 4, 1.0, 1.0).unwrap();
        let mut bc = BoundaryCondition::new();
        bc.set_constant(Side::Left, 2.0)
            .set_constant(Side::Right, 2.0)
            .set_constant(Side::Bottom, 2.0)
            .set_constant(Side::Top, 2.0);
        let field = bc.apply(&lat).unwrap();
        for i in lat.interior_indices() {
            assert_eq!(field.get(i), 2.0);
        }
    }
}
