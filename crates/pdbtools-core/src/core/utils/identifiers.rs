use phf::{Set, phf_set};

/// Residue names recognized by the `protein` selection keyword.
///
/// The twenty standard amino acids, followed by the protonation and disulfide
/// variants written by common simulation packages (CHARMM and AMBER naming).
pub static PROTEIN_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "HSD", "HSE", "HSP", "HID", "HIE", "HIP",
    "CYX", "CYM", "ASH", "GLH", "LYN",
};

/// Residue names recognized by the `water` selection keyword.
pub static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "H2O", "DOD", "SOL", "OH2",
    "TIP", "TIP3", "TIP3P", "TIP4", "TIP4P", "TIP5", "TIP5P", "T3P", "T4P",
    "SPC", "SPCE",
};

pub fn is_protein_residue(residue_name: &str) -> bool {
    PROTEIN_RESIDUE_NAMES.contains(residue_name)
}

pub fn is_water_residue(residue_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(residue_name)
}
