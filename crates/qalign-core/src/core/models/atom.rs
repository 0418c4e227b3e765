use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// Represents the element kind of a backbone atom tracked by the comparison pipeline.
///
/// Only the four backbone element kinds relevant to structural comparison are
/// representable; structure-file records with any other atom name are dropped
/// during parsing. Each kind carries a fixed Van der Waals radius (Pauling values)
/// so downstream consumers can reconstruct sphere representations without a
/// parameter lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomKind {
    /// Alpha carbon ("CA"), the per-residue representative atom.
    AlphaCarbon,
    /// Backbone nitrogen ("N").
    Nitrogen,
    /// Backbone oxygen ("O").
    Oxygen,
    /// Sulfur ("S"), e.g. in cysteine bridges.
    Sulfur,
}

impl AtomKind {
    /// Van der Waals radius in Angstroms.
    pub fn vdw_radius(&self) -> f64 {
        match self {
            AtomKind::AlphaCarbon => 1.7,
            AtomKind::Nitrogen => 1.55,
            AtomKind::Oxygen => 1.52,
            AtomKind::Sulfur => 1.8,
        }
    }

    /// The atom name as written in structure files.
    pub fn label(&self) -> &'static str {
        match self {
            AtomKind::AlphaCarbon => "CA",
            AtomKind::Nitrogen => "N",
            AtomKind::Oxygen => "O",
            AtomKind::Sulfur => "S",
        }
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AtomKind {
    type Err = ();

    /// Parses a structure-file atom name into an `AtomKind`.
    ///
    /// # Errors
    ///
    /// Returns `()` if the name is not one of the four tracked kinds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "CA" => Ok(AtomKind::AlphaCarbon),
            "N" => Ok(AtomKind::Nitrogen),
            "O" => Ok(AtomKind::Oxygen),
            "S" => Ok(AtomKind::Sulfur),
            _ => Err(()),
        }
    }
}

/// Represents one atom record produced by the parsing layer.
///
/// An atom carries its identity (serial number, element kind, residue name,
/// chain, residue sequence index) and its 3-D position. Records are immutable
/// after parsing: superposition produces new `Atom` values via
/// [`Atom::with_position`] instead of mutating coordinates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number from the source file.
    pub serial: i32,
    /// Element kind of this atom.
    pub kind: AtomKind,
    /// Three-letter residue name (e.g. "ALA").
    pub residue_name: String,
    /// Identifier of the owning chain.
    pub chain_id: char,
    /// 0-based residue sequence index, unique per distinct residue position.
    pub seq_index: usize,
    /// The 3-D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Van der Waals radius in Angstroms, derived from the element kind.
    pub radius: f64,
}

impl Atom {
    /// Creates a new `Atom` with the radius derived from its element kind.
    pub fn new(
        serial: i32,
        kind: AtomKind,
        residue_name: &str,
        chain_id: char,
        seq_index: usize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            kind,
            residue_name: residue_name.to_string(),
            chain_id,
            seq_index,
            position,
            radius: kind.vdw_radius(),
        }
    }

    /// Returns a copy of this atom placed at `position`.
    ///
    /// Every identity field (serial, kind, residue name, chain, sequence index,
    /// radius) is preserved unchanged.
    pub fn with_position(&self, position: Point3<f64>) -> Self {
        Self {
            serial: self.serial,
            kind: self.kind,
            residue_name: self.residue_name.clone(),
            chain_id: self.chain_id,
            seq_index: self.seq_index,
            position,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn new_atom_derives_radius_from_kind() {
        let atom = Atom::new(1, AtomKind::AlphaCarbon, "ALA", 'A', 0, Point3::origin());
        assert_eq!(atom.radius, 1.7);

        let atom = Atom::new(2, AtomKind::Sulfur, "CYS", 'A', 1, Point3::origin());
        assert_eq!(atom.radius, 1.8);
    }

    #[test]
    fn with_position_preserves_identity_fields() {
        let atom = Atom::new(7, AtomKind::Nitrogen, "GLY", 'B', 3, Point3::new(1.0, 2.0, 3.0));
        let moved = atom.with_position(Point3::new(-1.0, 0.5, 9.0));

        assert_eq!(moved.serial, 7);
        assert_eq!(moved.kind, AtomKind::Nitrogen);
        assert_eq!(moved.residue_name, "GLY");
        assert_eq!(moved.chain_id, 'B');
        assert_eq!(moved.seq_index, 3);
        assert_eq!(moved.radius, atom.radius);
        assert_eq!(moved.position, Point3::new(-1.0, 0.5, 9.0));
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn from_str_parses_tracked_kinds() {
        assert_eq!(AtomKind::from_str("CA"), Ok(AtomKind::AlphaCarbon));
        assert_eq!(AtomKind::from_str("N"), Ok(AtomKind::Nitrogen));
        assert_eq!(AtomKind::from_str("O"), Ok(AtomKind::Oxygen));
        assert_eq!(AtomKind::from_str("S"), Ok(AtomKind::Sulfur));
        assert_eq!(AtomKind::from_str(" CA "), Ok(AtomKind::AlphaCarbon));
    }

    #[test]
    fn from_str_rejects_untracked_names() {
        assert_eq!(AtomKind::from_str("CB"), Err(()));
        assert_eq!(AtomKind::from_str("H"), Err(()));
        assert_eq!(AtomKind::from_str(""), Err(()));
        assert_eq!(AtomKind::from_str("ca"), Err(()));
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for kind in [
            AtomKind::AlphaCarbon,
            AtomKind::Nitrogen,
            AtomKind::Oxygen,
            AtomKind::Sulfur,
        ] {
            assert_eq!(AtomKind::from_str(kind.label()), Ok(kind));
        }
    }
}
