use crate::{BorderPolicy, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Index;
use tracing::{debug, trace};

/// Game of Life field of fixed size with two cell buffers.
///
/// One buffer holds the current generation and is the only one visible
/// through [`Grid::cells`]; the other is the back buffer that [`Grid::step`]
/// writes the next generation into before the roles are swapped.
///
/// Cells are stored row-major: the cell `(x, y)` is at `x + y * width`.
pub struct Grid {
    buffers: [Vec<u8>; 2],
    current: usize,
    width: usize,
    height: usize,
    generation: u64,
    rng: ChaCha8Rng,
}

impl Grid {
    /// Create a blank field of `width x height` cells.
    ///
    /// The generator used by [`Grid::randomize`] is seeded from entropy.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_rng(width, height, ChaCha8Rng::from_entropy())
    }

    /// Create a blank field whose random generator is seeded with `seed`.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: ChaCha8Rng) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimension { width, height };
        let size = match width.checked_mul(height) {
            Some(size) if size != 0 => size,
            _ => return Err(invalid),
        };
        let cells_curr = blank_buffer(size).ok_or_else(|| invalid.clone())?;
        let cells_next = blank_buffer(size).ok_or(invalid)?;
        debug!(width, height, "created grid");
        Ok(Self {
            buffers: [cells_curr, cells_next],
            current: 0,
            width,
            height,
            generation: 0,
            rng,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of steps performed since the grid was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation.
    ///
    /// The view borrows the grid, so it has to be dropped before the next
    /// `step`, `clear` or `randomize`; the storage behind it is reused by the
    /// step after next. Use [`Cells::to_vec`] or [`Grid::snapshot`] to keep a
    /// generation around.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            cells: &self.buffers[self.current],
            width: self.width,
        }
    }

    /// Owned copy of the current generation.
    pub fn snapshot(&self) -> Vec<u8> {
        self.buffers[self.current].clone()
    }

    /// Panics if `(x, y)` is outside of the field.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.buffers[self.current][self.index(x, y)] != 0
    }

    /// Sets a cell of the current generation.
    ///
    /// Panics if `(x, y)` is outside of the field.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.buffers[self.current][idx] = alive as u8;
    }

    pub fn population(&self) -> usize {
        self.cells().population()
    }

    /// Kill every cell of the current generation.
    pub fn clear(&mut self) {
        self.buffers[self.current].fill(0);
        debug!(generation = self.generation, "cleared grid");
    }

    /// Fill the current generation with cells that are alive with probability 1/2.
    pub fn randomize(&mut self) {
        let current = &mut self.buffers[self.current];
        fill_random(current, &mut self.rng, 0.5, self.generation);
    }

    /// Same as [`Grid::randomize`], but with a custom probability of a live cell.
    pub fn randomize_with_rate(&mut self, fill_rate: f64) -> Result<(), GridError> {
        check_fill_rate(fill_rate)?;
        let current = &mut self.buffers[self.current];
        fill_random(current, &mut self.rng, fill_rate, self.generation);
        Ok(())
    }

    /// Fill the current generation using an external generator.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fill_rate: f64,
    ) -> Result<(), GridError> {
        check_fill_rate(fill_rate)?;
        fill_random(&mut self.buffers[self.current], rng, fill_rate, self.generation);
        Ok(())
    }

    /// Number of live neighbours of `(x, y)` in the current generation.
    ///
    /// Panics if `(x, y)` is outside of the field.
    pub fn count_neighbors(&self, x: usize, y: usize, policy: BorderPolicy) -> u8 {
        self.check_bounds(x, y);
        count_neighbors(
            &self.buffers[self.current],
            self.width,
            self.height,
            x,
            y,
            policy,
        )
    }

    /// Advance the field by one generation.
    pub fn step(&mut self, policy: BorderPolicy) {
        let (w, h) = (self.width, self.height);
        let (first, second) = self.buffers.split_at_mut(1);
        let (curr, next) = if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };

        for y in 0..h {
            for x in 0..w {
                let idx = x + y * w;
                let neibs = count_neighbors(curr, w, h, x, y, policy);
                next[idx] = next_state(curr[idx], neibs);
            }
        }

        self.current ^= 1;
        self.generation += 1;
        trace!(generation = self.generation, %policy, "step");
    }

    /// Advance the field by one generation, with the policy given by name.
    ///
    /// Nothing is changed if the name is not a known policy.
    pub fn step_named(&mut self, policy: &str) -> Result<(), GridError> {
        let policy = policy.parse()?;
        self.step(policy);
        Ok(())
    }

    /// Advance the field by `steps` generations.
    pub fn update(&mut self, steps: u64, policy: BorderPolicy) {
        for _ in 0..steps {
            self.step(policy);
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.check_bounds(x, y);
        x + y * self.width
    }

    fn check_bounds(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) is outside of {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish()
    }
}

/// Row-major view of one generation, see [`Grid::cells`].
///
/// `cells[y][x]` is `1` for a live cell and `0` for a dead one.
#[derive(Clone, Copy)]
pub struct Cells<'a> {
    cells: &'a [u8],
    width: usize,
}

impl<'a> Cells<'a> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.row(y)[x]
    }

    pub fn row(&self, y: usize) -> &'a [u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'a, u8> {
        self.cells.chunks_exact(self.width)
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.cells.to_vec()
    }
}

impl Index<usize> for Cells<'_> {
    type Output = [u8];

    fn index(&self, y: usize) -> &[u8] {
        self.row(y)
    }
}

fn check_fill_rate(fill_rate: f64) -> Result<(), GridError> {
    if (0.0..=1.0).contains(&fill_rate) {
        Ok(())
    } else {
        Err(GridError::InvalidFillRate(fill_rate))
    }
}

fn fill_random<R: Rng + ?Sized>(
    cells: &mut [u8],
    rng: &mut R,
    fill_rate: f64,
    generation: u64,
) {
    for cell in cells.iter_mut() {
        *cell = rng.gen_bool(fill_rate) as u8;
    }
    debug!(generation, fill_rate, "randomized grid");
}

/// Zeroed buffer of `size` cells, or `None` if it cannot be allocated.
fn blank_buffer(size: usize) -> Option<Vec<u8>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(size).ok()?;
    cells.resize(size, 0);
    Some(cells)
}

fn count_neighbors(
    cells: &[u8],
    w: usize,
    h: usize,
    x: usize,
    y: usize,
    policy: BorderPolicy,
) -> u8 {
    match policy {
        BorderPolicy::Wrap => {
            let x1 = if x == 0 { w - 1 } else { x - 1 };
            let x2 = if x == w - 1 { 0 } else { x + 1 };
            let y1 = if y == 0 { h - 1 } else { y - 1 };
            let y2 = if y == h - 1 { 0 } else { y + 1 };
            let (r1, r, r2) = (y1 * w, y * w, y2 * w);
            cells[x1 + r1]
                + cells[x + r1]
                + cells[x2 + r1]
                + cells[x1 + r]
                + cells[x2 + r]
                + cells[x1 + r2]
                + cells[x + r2]
                + cells[x2 + r2]
        }
        BorderPolicy::NoWrap => {
            let mut neibs = 0;
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    if nx != x || ny != y {
                        neibs += cells[nx + ny * w];
                    }
                }
            }
            neibs
        }
    }
}

fn next_state(cell: u8, neibs: u8) -> u8 {
    let alive = if cell != 0 {
        neibs == 2 || neibs == 3
    } else {
        neibs == 3
    };
    alive as u8
}
