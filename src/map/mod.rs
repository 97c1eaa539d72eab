//! Synthetic site maps.
//!
//! The search only needs a distance oracle: [`DistanceOracle`] is the seam
//! between the search engine and whatever holds the coordinates.
//! [`SalesmanMap`] is the grid-backed implementation used by the CLI: a
//! `height x width` board where each occupied cell holds a unique site id.
//!
//! Site `0` is where the salesman starts.

use crate::error::{ConfigError, Result};
use rand::Rng;
use std::fmt;

/// Pairwise distances between sites `0..=last_site_id()`.
///
/// Implementations must be symmetric with `distance(x, x) == 0`.
pub trait DistanceOracle: Send + Sync {
    /// Distance between two sites.
    fn distance(&self, a: usize, b: usize) -> f64;

    /// Largest site id, equal to `num_sites() - 1`.
    fn last_site_id(&self) -> usize;

    /// Number of sites.
    fn num_sites(&self) -> usize {
        self.last_site_id() + 1
    }
}

/// A grid of cells, each empty or holding one site.
///
/// Immutable once generated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "MapLayout", into = "MapLayout")
)]
pub struct SalesmanMap {
    height: usize,
    width: usize,
    /// Row-major cells.
    cells: Vec<Option<usize>>,
    /// `positions[site] = (row, col)`.
    positions: Vec<(usize, usize)>,
}

impl SalesmanMap {
    /// Places `num_sites` sites on distinct random cells.
    ///
    /// Fails with [`ConfigError::TooManySites`] when the grid has fewer cells
    /// than sites, and with [`ConfigError::TooFewSites`] for an empty map.
    pub fn generate<R: Rng>(
        num_sites: usize,
        height: usize,
        width: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if num_sites == 0 {
            return Err(ConfigError::TooFewSites { sites: num_sites }.into());
        }
        let cell_count = cell_count(height, width)?;
        if num_sites > cell_count {
            return Err(ConfigError::TooManySites {
                sites: num_sites,
                height,
                width,
            }
            .into());
        }

        let mut chosen = rand::seq::index::sample(rng, cell_count, num_sites).into_vec();
        crate::random::shuffle(&mut chosen, rng);

        let positions = chosen.into_iter().map(|c| (c / width, c % width)).collect();
        Self::from_positions(height, width, positions)
    }

    /// Builds a map with site `i` at `positions[i]`.
    pub fn from_positions(
        height: usize,
        width: usize,
        positions: Vec<(usize, usize)>,
    ) -> Result<Self> {
        if positions.is_empty() {
            return Err(ConfigError::TooFewSites { sites: 0 }.into());
        }
        let cell_count = cell_count(height, width)?;
        if positions.len() > cell_count {
            return Err(ConfigError::TooManySites {
                sites: positions.len(),
                height,
                width,
            }
            .into());
        }

        let mut cells = vec![None; cell_count];
        for (site, &(row, col)) in positions.iter().enumerate() {
            if row >= height || col >= width {
                return Err(ConfigError::SiteOutOfBounds { site, row, col }.into());
            }
            let cell = &mut cells[row * width + col];
            if let Some(other) = *cell {
                return Err(ConfigError::SiteCollision { site, other }.into());
            }
            *cell = Some(site);
        }

        Ok(Self {
            height,
            width,
            cells,
            positions,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid coordinates `(row, col)` of a site.
    pub fn position(&self, site: usize) -> Option<(usize, usize)> {
        self.positions.get(site).copied()
    }

    /// Site occupying a cell, if any.
    pub fn site_at(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col]
    }
}

/// `height * width`, or [`ConfigError::GridTooLarge`] when it overflows.
fn cell_count(height: usize, width: usize) -> Result<usize> {
    height
        .checked_mul(width)
        .ok_or_else(|| ConfigError::GridTooLarge { height, width }.into())
}

/// Serialized form of a map: dimensions and site positions only. The cell
/// index is rebuilt through [`SalesmanMap::from_positions`] on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MapLayout {
    height: usize,
    width: usize,
    positions: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl TryFrom<MapLayout> for SalesmanMap {
    type Error = crate::error::SalesmanError;

    fn try_from(layout: MapLayout) -> Result<Self> {
        Self::from_positions(layout.height, layout.width, layout.positions)
    }
}

#[cfg(feature = "serde")]
impl From<SalesmanMap> for MapLayout {
    fn from(map: SalesmanMap) -> Self {
        Self {
            height: map.height,
            width: map.width,
            positions: map.positions,
        }
    }
}

impl DistanceOracle for SalesmanMap {
    /// Euclidean distance between cell coordinates.
    ///
    /// # Panics
    /// Panics if either id is not a site of this map.
    fn distance(&self, a: usize, b: usize) -> f64 {
        let (ar, ac) = self.positions[a];
        let (br, bc) = self.positions[b];
        let dr = ar as f64 - br as f64;
        let dc = ac as f64 - bc as f64;
        dr.hypot(dc)
    }

    fn last_site_id(&self) -> usize {
        self.positions.len() - 1
    }

    fn num_sites(&self) -> usize {
        self.positions.len()
    }
}

/// Display label for a site: `a` for 0, `b` for 1, and so on.
///
/// Ids past the printable ASCII range render as `?`.
pub fn site_label(site: usize) -> char {
    u32::try_from(site)
        .ok()
        .and_then(|s| s.checked_add(u32::from(b'a')))
        .and_then(char::from_u32)
        .filter(|c| c.is_ascii_graphic())
        .unwrap_or('?')
}

/// Renders the grid, one line per row. With `{:#}` the start cell shows `^`.
impl fmt::Display for SalesmanMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.positions[0];
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if f.alternate() && (row, col) == start {
                    '^'
                } else {
                    match self.cells[row * self.width + col] {
                        Some(site) => site_label(site),
                        None => '.',
                    }
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
