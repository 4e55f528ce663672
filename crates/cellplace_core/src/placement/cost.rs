//! Incremental bounding-box cost bookkeeping.
//!
//! Each net caches its half-perimeter wirelength; the floorplan caches the
//! sum. Moving one entity only touches the nets on its pins, so an update
//! costs time proportional to the pin count, not the net count.
//!
//! Row coordinates are doubled before measuring: routing channels run
//! between placement rows, so one row step spans two units of wire.

use crate::floorplan::Floorplan;
use crate::geometry::{self, Point};
use crate::ids::{CellId, NetId};

impl Floorplan {
    /// Recomputes one net's bounding box from the current placement.
    ///
    /// Updates the net's cached value, adjusts the total by the difference,
    /// and returns the new value. A cell whose site falls outside the grid is
    /// left out of the box and recorded as a fault.
    pub fn net_cost(&mut self, net: NetId) -> u32 {
        let mut points = Vec::with_capacity(self.nets[net.index()].cells.len());
        for &cell in &self.nets[net.index()].cells {
            let site = self.placement[cell.index()];
            match geometry::to_coordinate(site, self.nx, self.ny) {
                Ok(p) => points.push(Point::new(p.x, p.y.saturating_mul(2))),
                Err(err) => self.faults.push(err),
            }
        }

        let bbox = geometry::half_perimeter(&points);
        let old = std::mem::replace(&mut self.nets[net.index()].bbox, bbox);
        self.total_cost = self.total_cost - u64::from(old) + u64::from(bbox);
        bbox
    }

    /// Recomputes every net incident to `cell`.
    pub fn cell_cost(&mut self, cell: CellId) {
        for i in 0..self.cells[cell.index()].nets.len() {
            let net = self.cells[cell.index()].nets[i];
            self.net_cost(net);
        }
    }

    /// Recomputes every net and the total from scratch.
    ///
    /// Clears any drift an incremental update could have introduced.
    pub fn recompute_all(&mut self) {
        self.total_cost = 0;
        for net in &mut self.nets {
            net.bbox = 0;
        }
        for i in 0..self.nets.len() {
            self.net_cost(NetId::from_raw(i as u32));
        }
    }
}

/// Sums every net's bounding box without touching any cache.
///
/// An independent reference for the cached [`Floorplan::total_cost`].
pub fn scratch_cost(floorplan: &Floorplan) -> u64 {
    floorplan
        .nets()
        .iter()
        .map(|net| {
            let points: Vec<Point> = net
                .cells()
                .iter()
                .filter_map(|&cell| floorplan.location_of(cell).ok())
                .map(|p| Point::new(p.x, p.y.saturating_mul(2)))
                .collect();
            u64::from(geometry::half_perimeter(&points))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{EntityId, SiteId};
    use crate::parse::Description;
    use crate::random::Randomness;

    /// Builds a floorplan and pins each entity to the given sites.
    fn placed(description: Description, sites: &[u32]) -> Floorplan {
        let mut fp = Floorplan::build(&description, &mut Randomness::seeded(0)).unwrap();
        let snapshot: Vec<SiteId> = sites.iter().map(|&s| SiteId::from_raw(s)).collect();
        fp.restore_placement(&snapshot);
        fp.recompute_all();
        fp
    }

    #[test]
    fn rows_count_double() {
        // 2 columns, 2 rows; cells 0 and 1 stacked in column 0.
        let d = Description::new(2, 2, 2, vec![vec![0, 1]]);
        let fp = placed(d, &[0, 2, 1, 3]);
        assert_eq!(fp.total_cost(), 2);
    }

    #[test]
    fn columns_count_single() {
        let d = Description::new(2, 2, 2, vec![vec![0, 1]]);
        let fp = placed(d, &[0, 1, 2, 3]);
        assert_eq!(fp.total_cost(), 1);
    }

    #[test]
    fn diagonal_net() {
        let d = Description::new(2, 2, 2, vec![vec![0, 1]]);
        let fp = placed(d, &[0, 3, 1, 2]);
        assert_eq!(fp.total_cost(), 1 + 2);
    }

    #[test]
    fn single_cell_net_is_free() {
        let d = Description::new(2, 2, 2, vec![vec![1]]);
        let fp = placed(d, &[0, 3, 1, 2]);
        assert_eq!(fp.total_cost(), 0);
    }

    #[test]
    fn net_cost_updates_total_by_delta() {
        let d = Description::new(3, 1, 3, vec![vec![0, 1], vec![1, 2]]);
        let mut fp = placed(d, &[0, 1, 2]);
        assert_eq!(fp.total_cost(), 2);

        // Exchange cells 0 and 1 without going through swap().
        fp.placement.swap(0, 1);
        let bbox = fp.net_cost(NetId::from_raw(0));
        assert_eq!(bbox, 1);
        // Net 1 is stale until its own update.
        assert_eq!(fp.total_cost(), 1 + 1);
        fp.net_cost(NetId::from_raw(1));
        assert_eq!(fp.total_cost(), 1 + 2);
        assert_eq!(fp.total_cost(), scratch_cost(&fp));
    }

    #[test]
    fn cell_cost_touches_only_incident_nets() {
        let d = Description::new(4, 1, 4, vec![vec![0, 1], vec![2, 3]]);
        let mut fp = placed(d, &[0, 1, 2, 3]);
        fp.nets[1].bbox = 99;
        fp.total_cost += 98;
        fp.cell_cost(CellId::from_raw(0));
        assert_eq!(fp.net(NetId::from_raw(1)).bbox(), 99);
        fp.cell_cost(CellId::from_raw(3));
        assert_eq!(fp.net(NetId::from_raw(1)).bbox(), 1);
        assert_eq!(fp.total_cost(), 2);
    }

    #[test]
    fn recompute_all_clears_drift() {
        let d = Description::new(3, 2, 2, vec![vec![0, 1, 2]]);
        let mut fp = placed(d, &[0, 1, 2, 3]);
        let exact = fp.total_cost();
        fp.total_cost += 17;
        fp.recompute_all();
        assert_eq!(fp.total_cost(), exact);
    }

    #[test]
    fn phantom_swap_keeps_cost() {
        let d = Description::new(2, 2, 2, vec![vec![0, 1]]);
        let mut fp = placed(d, &[0, 1, 2, 3]);
        let cost = fp.total_cost();
        fp.swap(EntityId::from_raw(2), EntityId::from_raw(3));
        assert_eq!(fp.total_cost(), cost);
        assert!(fp.is_permutation());
    }

    #[test]
    fn out_of_range_site_is_a_fault() {
        let d = Description::new(2, 1, 2, vec![vec![0, 1]]);
        let mut fp = placed(d, &[0, 1]);
        fp.placement[1] = SiteId::from_raw(7);
        let bbox = fp.net_cost(NetId::from_raw(0));
        assert_eq!(bbox, 0);
        let faults = fp.take_faults();
        assert_eq!(faults.len(), 1);
        assert!(fp.take_faults().is_empty());
    }
}
