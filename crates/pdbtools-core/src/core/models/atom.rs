use nalgebra::Point3;

/// Represents a single atom record read from a PDB file.
///
/// Every field is always populated. Records carry no links to other records; an ordered
/// `Vec<Atom>` is the only aggregate the library works with. Callers that own the vector
/// may edit fields freely, while selection code only ever reads through `&Atom`.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The 1-based sequential position of the atom in the file it was read from.
    pub index: usize,
    /// The serial number written in columns 7-11 of the source record.
    pub index_pdb: i64,
    /// The name of the atom (e.g., "CA", "N", "OW").
    pub name: String,
    /// The name of the residue this atom belongs to (e.g., "ALA", "HOH").
    pub resname: String,
    /// The chain identifier, possibly empty.
    pub chain: String,
    /// The residue sequence number from the source file.
    pub resnum: i64,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The temperature factor (B-factor).
    pub beta: f64,
    /// The occupancy. Conventionally in [0, 1] but not checked.
    pub occupancy: f64,
    /// The model this atom belongs to; 1 when the file defines no models.
    pub model: i64,
}

impl Atom {
    /// Creates a new `Atom` with default values for the bookkeeping fields.
    ///
    /// The index and serial number start at 1, the model at 1, and both the
    /// temperature factor and occupancy at zero. They can be adjusted afterward.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `resname` - The name of the residue the atom belongs to.
    /// * `chain` - The chain identifier.
    /// * `resnum` - The residue sequence number.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, resname: &str, chain: &str, resnum: i64, position: Point3<f64>) -> Self {
        Self {
            index: 1,
            index_pdb: 1,
            name: name.to_string(),
            resname: resname.to_string(),
            chain: chain.to_string(),
            resnum,
            position,
            beta: 0.0,
            occupancy: 0.0,
            model: 1,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }
}

impl Default for Atom {
    fn default() -> Self {
        Self::new("", "", "", 0, Point3::origin())
    }
}
