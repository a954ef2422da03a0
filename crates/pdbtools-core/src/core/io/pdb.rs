use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace, warn};

const MIN_ATOM_LINE_LENGTH: usize = 54;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Line is too short for ATOM/HETATM record ({length} chars, need at least 54)")]
    LineTooShort { length: usize },
    #[error("Line is not an ATOM/HETATM record")]
    NotAtomRecord,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn parse_int(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<i64, PdbParseErrorKind> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbParseErrorKind::InvalidInt {
        columns,
        value: value.into(),
    })
}

fn parse_float(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<f64, PdbParseErrorKind> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbParseErrorKind::InvalidFloat {
        columns,
        value: value.into(),
    })
}

/// Like [`parse_float`], but a blank field reads as zero.
fn parse_optional_float(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<f64, PdbParseErrorKind> {
    if slice_and_trim(line, start, end).is_empty() {
        Ok(0.0)
    } else {
        parse_float(line, start, end, columns)
    }
}

fn is_atom_record(line: &str) -> bool {
    matches!(slice_and_trim(line, 0, 6), "ATOM" | "HETATM")
}

pub struct PdbFile;

impl PdbFile {
    /// Parses a single `ATOM` or `HETATM` line into an [`Atom`].
    ///
    /// The model number is left at 1; [`StructureFile::read_from`] overrides it
    /// from the enclosing `MODEL` record.
    ///
    /// # Arguments
    ///
    /// * `line` - The fixed-column record.
    /// * `index` - The 1-based sequential index to assign to the atom.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not an atom record, is too short to hold
    /// coordinates, or holds a malformed number.
    pub fn read_atom(line: &str, index: usize) -> Result<Atom, PdbParseErrorKind> {
        if !is_atom_record(line) {
            return Err(PdbParseErrorKind::NotAtomRecord);
        }
        if line.len() < MIN_ATOM_LINE_LENGTH {
            return Err(PdbParseErrorKind::LineTooShort { length: line.len() });
        }

        let index_pdb = parse_int(line, 6, 11, "7-11")?;
        let resnum = parse_int(line, 22, 26, "23-26")?;
        let x = parse_float(line, 30, 38, "31-38")?;
        let y = parse_float(line, 38, 46, "39-46")?;
        let z = parse_float(line, 46, 54, "47-54")?;
        let occupancy = parse_optional_float(line, 54, 60, "55-60")?;
        let beta = parse_optional_float(line, 60, 66, "61-66")?;

        Ok(Atom {
            index,
            index_pdb,
            name: slice_and_trim(line, 12, 16).to_string(),
            resname: slice_and_trim(line, 17, 21).to_string(),
            chain: slice_and_trim(line, 21, 22).to_string(),
            resnum,
            position: Point3::new(x, y, z),
            beta,
            occupancy,
            model: 1,
        })
    }

    /// Formats an [`Atom`] as a fixed-column `ATOM` record, without a trailing newline.
    ///
    /// Names shorter than four characters start at column 14, as in files written by
    /// most programs; four-character residue names spill into column 21. Longer
    /// names are cut to four characters so that every later column stays in place.
    pub fn write_atom(atom: &Atom) -> String {
        let name = if atom.name.chars().count() < 4 {
            format!(" {:<3}", atom.name)
        } else {
            format!("{:.4}", atom.name)
        };
        let resname = if atom.resname.chars().count() < 4 {
            format!("{:>3} ", atom.resname)
        } else {
            format!("{:.4}", atom.resname)
        };
        format!(
            "{:<6}{:>5} {} {}{:1.1}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}",
            "ATOM",
            atom.index_pdb,
            name,
            resname,
            atom.chain,
            atom.resnum,
            atom.position.x,
            atom.position.y,
            atom.position.z,
            atom.occupancy,
            atom.beta,
        )
    }
}

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Atom>, Self::Error> {
        let mut atoms = Vec::new();
        let mut current_model = 1;
        let mut seen_model_record = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                "ATOM" | "HETATM" => {
                    let mut atom = PdbFile::read_atom(&line, atoms.len() + 1).map_err(|kind| {
                        PdbError::Parse {
                            line: line_num,
                            kind,
                        }
                    })?;
                    atom.model = current_model;
                    trace!("Read atom {} ({}) on line {}", atom.index, atom.name, line_num);
                    atoms.push(atom);
                }
                "MODEL" => {
                    let next = if seen_model_record {
                        current_model + 1
                    } else {
                        current_model
                    };
                    current_model = line
                        .split_whitespace()
                        .nth(1)
                        .and_then(|n| n.parse().ok())
                        .unwrap_or(next);
                    seen_model_record = true;
                    debug!("Entering model {} on line {}", current_model, line_num);
                }
                "END" => break,
                _ => {}
            }
        }

        if atoms.is_empty() {
            warn!("No ATOM/HETATM records found");
        } else {
            debug!("Read {} atoms", atoms.len());
        }
        Ok(atoms)
    }

    fn write_to(atoms: &[Atom], writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "REMARK   Generated by pdbtools")?;

        let multi_model = atoms.windows(2).any(|pair| pair[0].model != pair[1].model);
        let mut open_model = None;

        for atom in atoms {
            if multi_model && open_model != Some(atom.model) {
                if open_model.is_some() {
                    writeln!(writer, "ENDMDL")?;
                }
                writeln!(writer, "MODEL     {:>4}", atom.model)?;
                open_model = Some(atom.model);
            }
            writeln!(writer, "{}", PdbFile::write_atom(atom))?;
        }
        if open_model.is_some() {
            writeln!(writer, "ENDMDL")?;
        }

        writeln!(writer, "END")?;
        debug!("Wrote {} atoms", atoms.len());
        Ok(())
    }
}
