//! Opaque ID newtypes for placement entities.
//!
//! [`CellId`], [`NetId`], [`SiteId`] and [`EntityId`] are thin `u32` wrappers
//! used as indices into the floorplan. They are `Copy`, `Hash`, and
//! `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }

            /// Returns the index as a `usize` for slice access.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// A real cell, in `[0, cellsN)`.
    CellId
);

define_id!(
    /// A net, in `[0, netsN)`.
    NetId
);

define_id!(
    /// A row-major linear grid location, in `[0, nx*ny)`.
    SiteId
);

define_id!(
    /// Anything that occupies a grid site.
    ///
    /// Entities `[0, cellsN)` are real cells; `[cellsN, nx*ny)` are phantom
    /// placeholders for empty sites. Phantoms carry no nets and never
    /// contribute cost, so they must never be used where a [`CellId`] is
    /// expected. Use [`EntityId::as_cell`] to cross over.
    EntityId
);

impl EntityId {
    /// Returns `true` if this entity is a real, net-bearing cell.
    pub fn is_cell(self, cell_count: u32) -> bool {
        self.0 < cell_count
    }

    /// Returns the cell this entity denotes, or `None` for a phantom.
    pub fn as_cell(self, cell_count: u32) -> Option<CellId> {
        self.is_cell(cell_count).then(|| CellId::from_raw(self.0))
    }
}

impl From<CellId> for EntityId {
    fn from(cell: CellId) -> Self {
        EntityId::from_raw(cell.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn roundtrip() {
        assert_eq!(CellId::from_raw(42).as_raw(), 42);
        assert_eq!(NetId::from_raw(99).index(), 99);
        assert_eq!(SiteId::from_raw(7).as_raw(), 7);
    }

    #[test]
    fn entity_real_or_phantom() {
        let cells = 3;
        assert!(EntityId::from_raw(2).is_cell(cells));
        assert!(!EntityId::from_raw(3).is_cell(cells));
        assert_eq!(
            EntityId::from_raw(1).as_cell(cells),
            Some(CellId::from_raw(1))
        );
        assert_eq!(EntityId::from_raw(5).as_cell(cells), None);
    }

    #[test]
    fn cell_converts_to_entity() {
        let entity: EntityId = CellId::from_raw(4).into();
        assert_eq!(entity, EntityId::from_raw(4));
    }

    #[test]
    fn id_hash_in_set() {
        let mut set = HashSet::new();
        set.insert(NetId::from_raw(1));
        set.insert(NetId::from_raw(2));
        set.insert(NetId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = SiteId::from_raw(55);
        let json = serde_json::to_string(&id).unwrap();
        let restored: SiteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", EntityId::from_raw(42)), "42");
    }
}
