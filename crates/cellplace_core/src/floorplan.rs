//! The floorplan: cells, nets, and the entity-to-site permutation.
//!
//! Topology (which cells each net connects, and the reverse index from cell
//! to nets) is fixed when the floorplan is built. Only the placement and the
//! cached bounding-box costs change afterwards, through [`Floorplan::swap`]
//! and the cost routines in [`crate::placement`].

use crate::error::ParseError;
use crate::geometry::{self, GeometryError, Point};
use crate::ids::{CellId, EntityId, NetId, SiteId};
use crate::parse::Description;
use crate::placement::random_permutation;
use crate::random::Randomness;
use std::fmt;

/// A hyperedge over cells with its cached half-perimeter cost.
#[derive(Debug, Clone)]
pub struct Net {
    pub(crate) cells: Vec<CellId>,
    pub(crate) bbox: u32,
}

impl Net {
    /// The cells this net connects.
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// The cached bounding-box half perimeter, as of the last cost update.
    pub fn bbox(&self) -> u32 {
        self.bbox
    }
}

/// The nets a cell participates in (its pins).
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub(crate) nets: Vec<NetId>,
}

impl Cell {
    /// The nets incident to this cell.
    pub fn nets(&self) -> &[NetId] {
        &self.nets
    }
}

/// Sizes and cost of a floorplan, used to scale annealing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FloorplanStats {
    /// Real cells.
    pub cell_count: u32,
    /// Nets.
    pub net_count: u32,
    /// Grid sites, `nx * ny`.
    pub site_count: u32,
    /// Current total cost.
    pub total_cost: u64,
}

/// Cells and nets on an `nx` by `ny` grid, plus the current placement.
///
/// `placement[e]` is the site occupied by entity `e`. Entities below
/// [`cell_count`](Self::cell_count) are real cells, the rest are phantom
/// empty-site placeholders. The placement is always a bijection onto
/// `[0, nx*ny)`, and `total_cost` always equals the sum of the nets' cached
/// bounding boxes.
#[derive(Debug, Clone)]
pub struct Floorplan {
    pub(crate) name: String,
    pub(crate) nx: u32,
    pub(crate) ny: u32,
    pub(crate) cells: Vec<Cell>,
    pub(crate) nets: Vec<Net>,
    pub(crate) placement: Vec<SiteId>,
    pub(crate) total_cost: u64,
    pub(crate) faults: Vec<GeometryError>,
}

impl Floorplan {
    /// Builds a floorplan with a uniformly random initial placement.
    ///
    /// Validates the description, builds the cell-to-net index, draws the
    /// placement permutation from `rng`, and computes every net's cost.
    pub fn build(description: &Description, rng: &mut Randomness) -> Result<Self, ParseError> {
        description.validate()?;

        let mut cells = vec![Cell::default(); description.cells as usize];
        let nets: Vec<Net> = description
            .nets
            .iter()
            .map(|spec| Net {
                cells: spec.cells.iter().map(|&c| CellId::from_raw(c)).collect(),
                bbox: 0,
            })
            .collect();
        for (i, net) in nets.iter().enumerate() {
            let net_id = NetId::from_raw(i as u32);
            for cell in &net.cells {
                cells[cell.index()].nets.push(net_id);
            }
        }

        // validate() guarantees the grid fits in u32.
        let sites = description.rows * description.cols;
        let mut floorplan = Self {
            name: description.name.clone(),
            nx: description.cols,
            ny: description.rows,
            cells,
            nets,
            placement: random_permutation(rng, sites),
            total_cost: 0,
            faults: Vec::new(),
        };
        floorplan.recompute_all();
        Ok(floorplan)
    }

    /// Input name the floorplan was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grid columns.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Grid rows.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Number of real cells.
    pub fn cell_count(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Number of nets.
    pub fn net_count(&self) -> u32 {
        self.nets.len() as u32
    }

    /// Number of grid sites, which is also the number of entities.
    pub fn site_count(&self) -> u32 {
        self.placement.len() as u32
    }

    /// Returns a cell by ID.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Returns a net by ID.
    pub fn net(&self, id: NetId) -> &Net {
        &self.nets[id.index()]
    }

    /// All nets, indexed by [`NetId`].
    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    /// Sum of all nets' cached bounding boxes.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// The entity-to-site mapping, indexed by [`EntityId`].
    pub fn placement(&self) -> &[SiteId] {
        &self.placement
    }

    /// The site an entity occupies.
    pub fn site_of(&self, entity: EntityId) -> SiteId {
        self.placement[entity.index()]
    }

    /// The grid coordinate of a cell.
    pub fn location_of(&self, cell: CellId) -> Result<Point, GeometryError> {
        geometry::to_coordinate(self.site_of(cell.into()), self.nx, self.ny)
    }

    /// Returns `true` if `entity` is a real cell rather than a phantom.
    pub fn is_cell(&self, entity: EntityId) -> bool {
        entity.is_cell(self.cell_count())
    }

    /// Sizes and current cost.
    pub fn stats(&self) -> FloorplanStats {
        FloorplanStats {
            cell_count: self.cell_count(),
            net_count: self.net_count(),
            site_count: self.site_count(),
            total_cost: self.total_cost,
        }
    }

    /// Exchanges the sites of two entities and updates the cost of every net
    /// touching a real cell among them.
    ///
    /// Swapping the same pair twice restores the previous placement and cost
    /// exactly. Swapping two phantoms changes no cost.
    ///
    /// # Panics
    ///
    /// Panics if either entity is outside `[0, nx*ny)`.
    pub fn swap(&mut self, a: EntityId, b: EntityId) {
        self.placement.swap(a.index(), b.index());
        let cell_count = self.cell_count();
        if let Some(cell) = a.as_cell(cell_count) {
            self.cell_cost(cell);
        }
        if let Some(cell) = b.as_cell(cell_count) {
            self.cell_cost(cell);
        }
    }

    /// Returns `true` if every site is occupied by exactly one entity.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.placement.len()];
        for site in &self.placement {
            match seen.get_mut(site.index()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Drains out-of-range faults recorded by cost updates.
    pub fn take_faults(&mut self) -> Vec<GeometryError> {
        std::mem::take(&mut self.faults)
    }

    /// Replaces the whole placement with a previously taken snapshot.
    ///
    /// Cached costs are stale until [`recompute_all`](Self::recompute_all).
    pub(crate) fn restore_placement(&mut self, snapshot: &[SiteId]) {
        self.placement.copy_from_slice(snapshot);
    }
}

impl fmt::Display for Floorplan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Floorplan: {}", self.name)?;
        writeln!(f, "\tSize   : ({},{})", self.nx, self.ny)?;
        writeln!(f, "\tCells #: {}", self.cell_count())?;
        writeln!(f, "\tNets  #: {}", self.net_count())?;
        writeln!(f, "\tbbox  #: {}", self.total_cost)?;

        writeln!(f, "Nets:")?;
        for (i, net) in self.nets.iter().enumerate() {
            let cells: Vec<String> = net.cells.iter().map(ToString::to_string).collect();
            writeln!(
                f,
                "\tNet#{i}: bbox: {}, cells #: {}, cells: {}",
                net.bbox,
                net.cells.len(),
                cells.join(" ")
            )?;
        }

        writeln!(f, "Cells:")?;
        for (i, cell) in self.cells.iter().enumerate() {
            let nets: Vec<String> = cell.nets.iter().map(ToString::to_string).collect();
            let site = self.placement[i];
            match geometry::to_coordinate(site, self.nx, self.ny) {
                Ok(p) => write!(f, "\tCell#{i}: location ({},{})", p.x, p.y)?,
                Err(_) => write!(f, "\tCell#{i}: location <site {site}>")?,
            }
            writeln!(f, ", nets #: {}, nets: {}", cell.nets.len(), nets.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Floorplan {
        // 3 cells on a 2x2 grid: one phantom.
        let d = Description::new(3, 2, 2, vec![vec![0, 1], vec![1, 2]]);
        Floorplan::build(&d, &mut Randomness::seeded(11)).unwrap()
    }

    #[test]
    fn build_sizes() {
        let fp = chain();
        assert_eq!(fp.nx(), 2);
        assert_eq!(fp.ny(), 2);
        assert_eq!(fp.cell_count(), 3);
        assert_eq!(fp.net_count(), 2);
        assert_eq!(fp.site_count(), 4);
        assert!(fp.is_permutation());
    }

    #[test]
    fn build_backward_index() {
        let fp = chain();
        assert_eq!(fp.cell(CellId::from_raw(0)).nets(), &[NetId::from_raw(0)]);
        assert_eq!(
            fp.cell(CellId::from_raw(1)).nets(),
            &[NetId::from_raw(0), NetId::from_raw(1)]
        );
        assert_eq!(fp.cell(CellId::from_raw(2)).nets(), &[NetId::from_raw(1)]);
    }

    #[test]
    fn build_rejects_overfull_grid() {
        let d = Description::new(5, 2, 2, vec![vec![0]]);
        let err = Floorplan::build(&d, &mut Randomness::seeded(1)).unwrap_err();
        assert!(matches!(err, ParseError::Capacity { .. }));
    }

    #[test]
    fn cost_matches_net_sum() {
        let fp = chain();
        let sum: u64 = fp.nets().iter().map(|n| u64::from(n.bbox())).sum();
        assert_eq!(fp.total_cost(), sum);
    }

    #[test]
    fn swap_is_self_inverse() {
        let mut fp = chain();
        let before = fp.placement().to_vec();
        let cost = fp.total_cost();
        let (a, b) = (EntityId::from_raw(0), EntityId::from_raw(3));
        fp.swap(a, b);
        assert!(fp.is_permutation());
        fp.swap(a, b);
        assert_eq!(fp.placement(), &before[..]);
        assert_eq!(fp.total_cost(), cost);
    }

    #[test]
    fn swap_moves_sites() {
        let mut fp = chain();
        let site_a = fp.site_of(EntityId::from_raw(1));
        let site_b = fp.site_of(EntityId::from_raw(2));
        fp.swap(EntityId::from_raw(1), EntityId::from_raw(2));
        assert_eq!(fp.site_of(EntityId::from_raw(1)), site_b);
        assert_eq!(fp.site_of(EntityId::from_raw(2)), site_a);
    }

    #[test]
    fn location_follows_placement() {
        let fp = chain();
        for c in 0..3 {
            let cell = CellId::from_raw(c);
            let p = fp.location_of(cell).unwrap();
            let site = geometry::to_linear(p.x, p.y, 2, 2).unwrap();
            assert_eq!(site, fp.site_of(cell.into()));
        }
    }

    #[test]
    fn is_permutation_detects_duplicates() {
        let mut fp = chain();
        fp.placement[0] = fp.placement[1];
        assert!(!fp.is_permutation());
    }

    #[test]
    fn stats_snapshot() {
        let fp = chain();
        let stats = fp.stats();
        assert_eq!(stats.cell_count, 3);
        assert_eq!(stats.net_count, 2);
        assert_eq!(stats.site_count, 4);
        assert_eq!(stats.total_cost, fp.total_cost());
    }

    #[test]
    fn dump_lists_everything() {
        let fp = chain();
        let dump = fp.to_string();
        assert!(dump.contains("Size   : (2,2)"));
        assert!(dump.contains("Cells #: 3"));
        assert!(dump.contains("Net#1: bbox:"));
        assert!(dump.contains("Cell#2: location ("));
        assert!(dump.contains(&format!("bbox  #: {}", fp.total_cost())));
    }
}
