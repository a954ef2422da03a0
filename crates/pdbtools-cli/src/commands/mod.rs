pub mod coords;
pub mod index;
pub mod select;
pub mod sequence;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::PathBuf;

    const STRUCTURE: &str = "\
REMARK   FIXTURE FOR COMMAND TESTS
ATOM      1  N   MET A   1      38.950  49.300  34.380  1.00  0.00           N
ATOM      2  CA  MET A   1      38.030  49.560  35.450  1.00 10.00           C
ATOM      3  N   LYS A   2      38.120  52.850  37.520  1.00 20.00           N
ATOM      4  CA  LYS A   2      39.000  53.000  38.000  0.50 30.00           C
ATOM      5  CA  LIG L   3       1.000   2.000   3.000  1.00 40.00           C
HETATM    6  OW  HOH W 101      60.050  47.500  57.340  1.00 50.00           O
END
";

    pub(crate) fn write_structure(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("input.pdb");
        std::fs::write(&path, STRUCTURE).unwrap();
        path
    }

    pub(crate) fn output_of(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }
}
