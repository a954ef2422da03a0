use std::cmp::Ordering;
use std::fmt;

/// Atom fields compared as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerField {
    Index,
    ResNum,
    Model,
}

/// Atom fields compared as real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealField {
    Beta,
    Occupancy,
}

/// Atom fields compared as exact, case-sensitive strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    ResName,
    Chain,
}

/// Residue classes selected by a bare keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Protein,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Ge,
    Le,
}

/// A single field test. Text fields only support equality, so they carry no operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Integer {
        field: IntegerField,
        op: CompareOp,
        value: i64,
    },
    Real {
        field: RealField,
        op: CompareOp,
        value: f64,
    },
    Text {
        field: TextField,
        value: String,
    },
}

/// The parsed form of a selection string.
///
/// Leaves are comparisons or categories; `Not`, `And` and `Or` are the only
/// internal nodes. A chain such as `a and b and c` is a single `And` holding its
/// operands in source order, so the tree stays shallow however many clauses a
/// selection has.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Comparison(Comparison),
    Category(Category),
    Not(Box<Expression>),
    /// Two or more operands, all of which must hold.
    And(Vec<Expression>),
    /// Two or more operands, at least one of which must hold.
    Or(Vec<Expression>),
}

impl IntegerField {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::ResNum => "resnum",
            Self::Model => "model",
        }
    }
}

impl RealField {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Beta => "beta",
            Self::Occupancy => "occup",
        }
    }
}

impl TextField {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ResName => "resname",
            Self::Chain => "chain",
        }
    }
}

impl Category {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Water => "water",
        }
    }
}

impl CompareOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Eq),
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            ">=" => Some(Self::Ge),
            "<=" => Some(Self::Le),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }

    /// Applies the operator to `lhs op rhs`. Unordered values (NaN) never match.
    pub fn holds<T: PartialOrd>(&self, lhs: T, rhs: T) -> bool {
        match lhs.partial_cmp(&rhs) {
            Some(Ordering::Equal) => matches!(self, Self::Eq | Self::Ge | Self::Le),
            Some(Ordering::Greater) => matches!(self, Self::Gt | Self::Ge),
            Some(Ordering::Less) => matches!(self, Self::Lt | Self::Le),
            None => false,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { field, op, value } => write!(f, "{} {} {}", field.keyword(), op, value),
            Self::Real { field, op, value } => write!(f, "{} {} {}", field.keyword(), op, value),
            Self::Text { field, value } => write!(f, "{} {}", field.keyword(), value),
        }
    }
}

/// Writes the canonical form of the expression, with every binary node parenthesized.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison(comparison) => write!(f, "{}", comparison),
            Self::Category(category) => f.write_str(category.keyword()),
            Self::Not(inner) => write!(f, "not {}", inner),
            Self::And(operands) => write_joined(f, operands, " and "),
            Self::Or(operands) => write_joined(f, operands, " or "),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    operands: &[Expression],
    connective: &str,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(connective)?;
        }
        write!(f, "{}", operand)?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_is_boundary_inclusive_for_ge_and_le() {
        assert!(CompareOp::Le.holds(10, 10));
        assert!(CompareOp::Ge.holds(10, 10));
        assert!(!CompareOp::Lt.holds(10, 10));
        assert!(!CompareOp::Gt.holds(10, 10));
        assert!(CompareOp::Eq.holds(10, 10));
    }

    #[test]
    fn holds_orders_left_against_right() {
        assert!(CompareOp::Lt.holds(3, 10));
        assert!(!CompareOp::Gt.holds(3, 10));
        assert!(CompareOp::Gt.holds(0.75, 0.5));
        assert!(!CompareOp::Eq.holds(0.75, 0.5));
    }

    #[test]
    fn holds_never_matches_nan() {
        for op in [CompareOp::Eq, CompareOp::Gt, CompareOp::Lt, CompareOp::Ge, CompareOp::Le] {
            assert!(!op.holds(f64::NAN, 1.0));
        }
    }

    #[test]
    fn from_symbol_round_trips_every_operator() {
        for op in [CompareOp::Eq, CompareOp::Gt, CompareOp::Lt, CompareOp::Ge, CompareOp::Le] {
            assert_eq!(CompareOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(CompareOp::from_symbol(">>"), None);
        assert_eq!(CompareOp::from_symbol("=="), None);
    }

    #[test]
    fn display_parenthesizes_binary_nodes() {
        let expression = Expression::Or(vec![
            Expression::Category(Category::Water),
            Expression::And(vec![
                Expression::Comparison(Comparison::Text {
                    field: TextField::Name,
                    value: "CA".into(),
                }),
                Expression::Not(Box::new(Expression::Comparison(Comparison::Integer {
                    field: IntegerField::ResNum,
                    op: CompareOp::Le,
                    value: 10,
                }))),
            ]),
        ]);
        assert_eq!(
            expression.to_string(),
            "(water or (name CA and not resnum <= 10))"
        );
    }

    #[test]
    fn display_joins_every_operand_of_a_chain() {
        let expression = Expression::And(vec![
            Expression::Category(Category::Protein),
            Expression::Comparison(Comparison::Text {
                field: TextField::Chain,
                value: "A".into(),
            }),
            Expression::Comparison(Comparison::Real {
                field: RealField::Beta,
                op: CompareOp::Gt,
                value: 0.5,
            }),
        ]);
        assert_eq!(expression.to_string(), "(protein and chain A and beta > 0.5)");
    }
}
