pub const DEFAULT_COORDINATE_PRECISION: usize = 3;
pub const MAX_COORDINATE_PRECISION: usize = 10;
pub const DEFAULT_SEQUENCE_SELECTION: &str = "protein";
