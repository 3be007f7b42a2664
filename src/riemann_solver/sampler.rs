use std::fmt::Display;

use crate::{errors::RiemannError, physical_quantities::State};

use super::{RiemannSolution, Side, Wave};

/// The self-similar regions of the solution, ordered from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Left,
    LeftFan,
    LeftStar,
    RightStar,
    RightFan,
    Right,
}

/// One end of an interval on the `x / t` axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Open(f64),
    Closed(f64),
}

/// A region together with the `x / t` range it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: Bound,
    upper: Bound,
    region: Region,
}

impl Interval {
    pub fn lower(&self) -> Bound {
        self.lower
    }

    pub fn upper(&self) -> Bound {
        self.upper
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn contains(&self, xi: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Unbounded => true,
            Bound::Open(lower) => xi > lower,
            Bound::Closed(lower) => xi >= lower,
        };
        let below_upper = match self.upper {
            Bound::Unbounded => true,
            Bound::Open(upper) => xi < upper,
            Bound::Closed(upper) => xi <= upper,
        };
        above_lower && below_upper
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lower {
            Bound::Unbounded => (),
            Bound::Open(lower) => write!(f, "{lower:.3e} < ")?,
            Bound::Closed(lower) => write!(f, "{lower:.3e} <= ")?,
        }
        write!(f, "x/t")?;
        match self.upper {
            Bound::Unbounded => Ok(()),
            Bound::Open(upper) => write!(f, " < {upper:.3e}"),
            Bound::Closed(upper) => write!(f, " <= {upper:.3e}"),
        }
    }
}

/// Edges of the wave on `side`, ordered from the contact discontinuity outwards,
/// each paired with the region on its contact side.
fn wave_edges(side: Side, wave: &Wave) -> Vec<(Region, f64)> {
    let (star, fan) = match side {
        Side::Left => (Region::LeftStar, Region::LeftFan),
        Side::Right => (Region::RightStar, Region::RightFan),
    };
    match wave {
        Wave::Shock { speed, .. } => vec![(star, *speed)],
        Wave::Rarefaction { head, tail, .. } => vec![(star, *tail), (fan, *head)],
    }
}

/// Split the `x / t` axis in half-open intervals, one per region.
///
/// Every wave edge belongs to the region on the side of the original state, so left
/// regions are closed at their upper end and right regions at their lower end. The
/// contact discontinuity belongs to the left star region.
pub(super) fn partition(left_wave: &Wave, right_wave: &Wave, v_star: f64) -> Vec<Interval> {
    let mut intervals = Vec::with_capacity(6);

    // Left side: walk from the contact outwards, then reverse.
    let mut upper = Bound::Closed(v_star);
    for (region, edge) in wave_edges(Side::Left, left_wave) {
        intervals.push(Interval {
            lower: Bound::Open(edge),
            upper,
            region,
        });
        upper = Bound::Closed(edge);
    }
    intervals.push(Interval {
        lower: Bound::Unbounded,
        upper,
        region: Region::Left,
    });
    intervals.reverse();

    let mut lower = Bound::Open(v_star);
    for (region, edge) in wave_edges(Side::Right, right_wave) {
        intervals.push(Interval {
            lower,
            upper: Bound::Open(edge),
            region,
        });
        lower = Bound::Closed(edge);
    }
    intervals.push(Interval {
        lower,
        upper: Bound::Unbounded,
        region: Region::Right,
    });

    intervals
}

/// The region whose interval contains `xi`.
fn find_region(intervals: &[Interval], xi: f64) -> Option<Region> {
    intervals
        .iter()
        .find(|interval| interval.contains(xi))
        .map(|interval| interval.region())
}

impl RiemannSolution {
    /// The region containing the ray `xi = x / t`.
    pub fn region(&self, xi: f64) -> Option<Region> {
        find_region(&self.intervals, xi)
    }

    /// The constant state of `region`, or `None` for the rarefaction fans.
    pub fn uniform_state(&self, region: Region) -> Option<&State> {
        match region {
            Region::Left => Some(&self.left),
            Region::LeftStar => Some(&self.left_star),
            Region::RightStar => Some(&self.right_star),
            Region::Right => Some(&self.right),
            Region::LeftFan | Region::RightFan => None,
        }
    }

    /// Sample the solution along the ray `xi = x / t`.
    pub fn sample_xi(&self, xi: f64) -> Result<State, RiemannError> {
        let region = self
            .region(xi)
            .ok_or(RiemannError::NonFiniteCoordinate(xi))?;
        Ok(match region {
            Region::LeftFan => Wave::fan_state(Side::Left, &self.left, xi, &self.gamma),
            Region::RightFan => Wave::fan_state(Side::Right, &self.right, xi, &self.gamma),
            Region::Left => self.left,
            Region::LeftStar => self.left_star,
            Region::RightStar => self.right_star,
            Region::Right => self.right,
        })
    }

    /// Sample the solution at position `x` and time `t > 0`.
    pub fn sample(&self, x: f64, t: f64) -> Result<State, RiemannError> {
        if !(t > 0.) {
            return Err(RiemannError::InvalidTime(t));
        }
        self.sample_xi(x / t)
    }
}
