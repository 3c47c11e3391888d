//! Checking a learner's typed answer against the expected merge result.
//!
//! The presentation layer asks the learner to type what two selected terms
//! add up to before it commits the merge. Nothing here mutates the equation;
//! malformed text simply validates to `false`.

use crate::node::Term;
use crate::types::LeafKind;

/// The kind and coefficient the merge of `a` and `b` would produce, or
/// `None` when they are not two leaves of the same kind.
pub fn expected_merge(a: &Term, b: &Term) -> Option<(LeafKind, i64)> {
    let kind_a = a.kind()?;
    let kind_b = b.kind()?;
    if kind_a != kind_b {
        return None;
    }
    // kind() is Some only for leaves, so the coefficients are present
    Some((kind_a, a.coefficient().unwrap() + b.coefficient().unwrap()))
}

/// Validates free-text input against the merge of `a` and `b`.
///
/// For a variable result of value `k`: `"x"` and `"+x"` match `k == 1`,
/// `"-x"` matches `k == -1`, and otherwise the input must be `<k>x` with an
/// explicit integer prefix equal to `k`. For a constant result the input
/// must be the plain signed integer `k`. Input is trimmed and lowercased
/// first; anything else, including trailing garbage, validates to `false`.
pub fn validate_merge_input(input: &str, a: &Term, b: &Term) -> bool {
    let Some((kind, value)) = expected_merge(a, b) else {
        return false;
    };
    let text = input.trim().to_ascii_lowercase();

    match kind {
        LeafKind::Variable => {
            let Some(prefix) = text.strip_suffix('x') else {
                return false;
            };
            let coefficient = match prefix {
                "" | "+" => Some(1),
                "-" => Some(-1),
                other => other.parse::<i64>().ok(),
            };
            coefficient == Some(value)
        }
        LeafKind::Constant => text.parse::<i64>().ok() == Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::node::Op;

    #[test]
    fn test_expected_merge_sums_like_terms() {
        assert_eq!(
            expected_merge(&Term::variable(2), &Term::variable(3)),
            Some((LeafKind::Variable, 5))
        );
        assert_eq!(
            expected_merge(&Term::constant(-4), &Term::constant(4)),
            Some((LeafKind::Constant, 0))
        );
    }

    #[test]
    fn test_expected_merge_rejects_mixed_operands() {
        assert_eq!(expected_merge(&Term::variable(2), &Term::constant(2)), None);
        let combo = Term::combine(Op::Add, Term::variable(1), Term::constant(1));
        assert_eq!(expected_merge(&combo, &Term::constant(2)), None);
    }

    #[test]
    fn test_variable_formats() {
        let a = Term::variable(2);
        let b = Term::variable(3);
        assert!(validate_merge_input("5x", &a, &b));
        assert!(validate_merge_input("+5x", &a, &b));
        assert!(validate_merge_input("  5X ", &a, &b));
        assert!(!validate_merge_input("5", &a, &b));
        assert!(!validate_merge_input("6x", &a, &b));
        assert!(!validate_merge_input("5xx", &a, &b));
        assert!(!validate_merge_input("", &a, &b));
    }

    #[test]
    fn test_bare_x_means_one() {
        let a = Term::variable(3);
        let b = Term::variable(-2);
        assert!(validate_merge_input("x", &a, &b));
        assert!(validate_merge_input("+x", &a, &b));
        assert!(validate_merge_input("1x", &a, &b));
        assert!(!validate_merge_input("-x", &a, &b));
    }

    #[test]
    fn test_minus_x_means_minus_one() {
        let a = Term::variable(-3);
        let b = Term::variable(2);
        assert!(validate_merge_input("-x", &a, &b));
        assert!(validate_merge_input("-1x", &a, &b));
        assert!(!validate_merge_input("x", &a, &b));
    }

    #[test]
    fn test_zero_variable_result() {
        let a = Term::variable(2);
        let b = Term::variable(-2);
        assert!(validate_merge_input("0x", &a, &b));
        assert!(!validate_merge_input("x", &a, &b));
        assert!(!validate_merge_input("0", &a, &b));
    }

    #[test]
    fn test_constant_formats() {
        let a = Term::constant(4);
        let b = Term::constant(-9);
        assert!(validate_merge_input("-5", &a, &b));
        assert!(validate_merge_input(" -5 ", &a, &b));
        assert!(!validate_merge_input("5", &a, &b));
        assert!(!validate_merge_input("-5x", &a, &b));
        // Stricter than a leading-digits parse: trailing text is malformed.
        assert!(!validate_merge_input("-5 apples", &a, &b));
    }

    #[test]
    fn test_mixed_selection_never_validates() {
        let a = Term::variable(2);
        let b = Term::constant(3);
        assert!(!validate_merge_input("5", &a, &b));
        assert!(!validate_merge_input("5x", &a, &b));
    }
}
