use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::RiemannError, gas_law::AdiabaticIndex, physical_quantities::State,
    riemann_solver::RiemannSolution,
};

/// The solution sampled at a fixed time on a uniform grid of cell centres in (-0.5, 0.5).
#[derive(Debug, Clone)]
pub struct Profile {
    time: f64,
    gamma: AdiabaticIndex,
    points: Vec<(f64, State)>,
}

impl Profile {
    /// Sample `solution` at `time` in `number` cells of width `1 / number`.
    pub fn sample(
        solution: &RiemannSolution,
        number: usize,
        time: f64,
    ) -> Result<Self, RiemannError> {
        let dx = 1. / number as f64;
        let points = (0..number)
            .map(|idx| {
                let x = -0.5 + (idx as f64 + 0.5) * dx;
                solution.sample(x, time).map(|state| (x, state))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            time,
            gamma: *solution.gamma(),
            points,
        })
    }

    pub fn points(&self) -> &[(f64, State)] {
        &self.points
    }

    /// Write a `# time` header followed by one `x velocity density pressure internal_energy`
    /// line per cell.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "# time {}", self.time)?;
        for (x, state) in self.points.iter() {
            writeln!(
                writer,
                "{} {} {} {} {}",
                x,
                state.velocity(),
                state.density(),
                state.pressure(),
                state.internal_energy(&self.gamma)
            )?;
        }
        writer.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        self.write(BufWriter::new(File::create(path)?))
    }
}
