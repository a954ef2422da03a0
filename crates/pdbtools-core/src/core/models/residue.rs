use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcidType {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // ALA
    Glycine,    // GLY
    Isoleucine, // ILE
    Leucine,    // LEU
    Proline,    // PRO
    Valine,     // VAL

    // --- Aromatic ---
    Phenylalanine, // PHE
    Tryptophan,    // TRP
    Tyrosine,      // TYR

    // --- Polar, Uncharged ---
    Asparagine, // ASN
    Cysteine,   // CYS, CYX, CYM
    Glutamine,  // GLN
    Serine,     // SER
    Threonine,  // THR
    Methionine, // MET

    // --- Positively Charged (Basic) ---
    Arginine,  // ARG
    Lysine,    // LYS, LYN
    Histidine, // HIS, HSD, HSE, HSP, HID, HIE, HIP

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // ASP, ASH
    GlutamicAcid, // GLU, GLH
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown amino acid residue name: '{0}'")]
pub struct UnknownResidueError(pub String);

impl AminoAcidType {
    pub fn three_letter_code(&self) -> &'static str {
        match self {
            Self::Alanine => "ALA",
            Self::Glycine => "GLY",
            Self::Isoleucine => "ILE",
            Self::Leucine => "LEU",
            Self::Proline => "PRO",
            Self::Valine => "VAL",
            Self::Phenylalanine => "PHE",
            Self::Tryptophan => "TRP",
            Self::Tyrosine => "TYR",
            Self::Asparagine => "ASN",
            Self::Cysteine => "CYS",
            Self::Glutamine => "GLN",
            Self::Serine => "SER",
            Self::Threonine => "THR",
            Self::Methionine => "MET",
            Self::Arginine => "ARG",
            Self::Lysine => "LYS",
            Self::Histidine => "HIS",
            Self::AsparticAcid => "ASP",
            Self::GlutamicAcid => "GLU",
        }
    }

    pub fn one_letter_code(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Glycine => 'G',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Proline => 'P',
            Self::Valine => 'V',
            Self::Phenylalanine => 'F',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Asparagine => 'N',
            Self::Cysteine => 'C',
            Self::Glutamine => 'Q',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Methionine => 'M',
            Self::Arginine => 'R',
            Self::Lysine => 'K',
            Self::Histidine => 'H',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
        }
    }
}

impl FromStr for AminoAcidType {
    type Err = UnknownResidueError;

    /// Parses a residue name into an `AminoAcidType`.
    ///
    /// Protonation and disulfide variants map onto their parent amino acid.
    /// Matching is exact and case-sensitive, like residue names in PDB files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALA" => Ok(Self::Alanine),
            "GLY" => Ok(Self::Glycine),
            "ILE" => Ok(Self::Isoleucine),
            "LEU" => Ok(Self::Leucine),
            "PRO" => Ok(Self::Proline),
            "VAL" => Ok(Self::Valine),
            "PHE" => Ok(Self::Phenylalanine),
            "TRP" => Ok(Self::Tryptophan),
            "TYR" => Ok(Self::Tyrosine),
            "ASN" => Ok(Self::Asparagine),
            "CYS" | "CYX" | "CYM" => Ok(Self::Cysteine),
            "GLN" => Ok(Self::Glutamine),
            "SER" => Ok(Self::Serine),
            "THR" => Ok(Self::Threonine),
            "MET" => Ok(Self::Methionine),
            "ARG" => Ok(Self::Arginine),
            "LYS" | "LYN" => Ok(Self::Lysine),
            "HIS" | "HSD" | "HSE" | "HSP" | "HID" | "HIE" | "HIP" => Ok(Self::Histidine),
            "ASP" | "ASH" => Ok(Self::AsparticAcid),
            "GLU" | "GLH" => Ok(Self::GlutamicAcid),
            _ => Err(UnknownResidueError(s.to_string())),
        }
    }
}

/// A residue in a sequence, as both its three-letter and one-letter code.
///
/// The three-letter code is the residue name exactly as read from the file.
/// Residues that are not amino acids are abbreviated by the first character of
/// their name, so `NEW` becomes `'N'`; an empty name becomes `'X'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueCode {
    pub three_letter: String,
    pub one_letter: char,
}

impl ResidueCode {
    pub fn from_residue_name(name: &str) -> Self {
        let one_letter = name
            .parse::<AminoAcidType>()
            .map(|aa| aa.one_letter_code())
            .unwrap_or_else(|_| name.chars().next().unwrap_or('X'));
        Self {
            three_letter: name.to_string(),
            one_letter,
        }
    }
}

impl fmt::Display for ResidueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.three_letter, self.one_letter)
    }
}
