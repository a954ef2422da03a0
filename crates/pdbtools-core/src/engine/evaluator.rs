use crate::core::models::atom::Atom;
use crate::core::utils::identifiers::{is_protein_residue, is_water_residue};
use crate::engine::selection::ast::{
    Category, Comparison, Expression, IntegerField, RealField, TextField,
};

/// Evaluates a parsed selection against a single atom.
///
/// Evaluation is pure and total: it never fails and never modifies the atom.
pub fn evaluate(expression: &Expression, atom: &Atom) -> bool {
    match expression {
        Expression::Comparison(comparison) => compare(comparison, atom),
        Expression::Category(category) => belongs_to(*category, atom),
        Expression::Not(inner) => !evaluate(inner, atom),
        Expression::And(operands) => operands.iter().all(|operand| evaluate(operand, atom)),
        Expression::Or(operands) => operands.iter().any(|operand| evaluate(operand, atom)),
    }
}

fn compare(comparison: &Comparison, atom: &Atom) -> bool {
    match comparison {
        Comparison::Integer { field, op, value } => op.holds(integer_field(*field, atom), *value),
        Comparison::Real { field, op, value } => op.holds(real_field(*field, atom), *value),
        Comparison::Text { field, value } => text_field(*field, atom) == value.as_str(),
    }
}

fn belongs_to(category: Category, atom: &Atom) -> bool {
    match category {
        Category::Protein => is_protein_residue(&atom.resname),
        Category::Water => is_water_residue(&atom.resname),
    }
}

fn integer_field(field: IntegerField, atom: &Atom) -> i64 {
    match field {
        IntegerField::Index => i64::try_from(atom.index).unwrap_or(i64::MAX),
        IntegerField::ResNum => atom.resnum,
        IntegerField::Model => atom.model,
    }
}

fn real_field(field: RealField, atom: &Atom) -> f64 {
    match field {
        RealField::Beta => atom.beta,
        RealField::Occupancy => atom.occupancy,
    }
}

fn text_field(field: TextField, atom: &Atom) -> &str {
    match field {
        TextField::Name => &atom.name,
        TextField::ResName => &atom.resname,
        TextField::Chain => &atom.chain,
    }
}
