//! Value coercion for option arguments
//!
//! Each function turns the raw token following an option into the field's
//! type and checks its range in one step. Failures carry no detail; the
//! scanner pairs them with the constraint text of the option being parsed.

use crate::config::TreeType;

/// Marker for a token that failed coercion or its range check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

pub type Coerced<T> = Result<T, Rejected>;

/// Any text, stored verbatim
pub fn text(raw: &str) -> Coerced<String> {
    Ok(raw.to_string())
}

/// Integer no smaller than `min`, narrowed to the field type
///
/// Parsed wide enough that every `u64` and `i64` value reaches the narrowing step.
pub fn integer_at_least<T: TryFrom<i128>>(raw: &str, min: i64) -> Coerced<T> {
    let value = raw.trim().parse::<i128>().map_err(|_| Rejected)?;
    if value < i128::from(min) {
        return Err(Rejected);
    }
    T::try_from(value).map_err(|_| Rejected)
}

/// Float in the half-open interval (0, 1]
pub fn unit_fraction(raw: &str) -> Coerced<f64> {
    let value = raw.trim().parse::<f64>().map_err(|_| Rejected)?;
    // written this way round so NaN is rejected
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(Rejected)
    }
}

/// Comma-separated floats, each strictly inside (0, 1)
pub fn quantile_list(raw: &str) -> Coerced<Vec<f64>> {
    raw.split(',')
        .map(|part| {
            let value = part.trim().parse::<f64>().map_err(|_| Rejected)?;
            if value > 0.0 && value < 1.0 {
                Ok(value)
            } else {
                Err(Rejected)
            }
        })
        .collect()
}

/// Comma-separated non-empty names
pub fn name_list(raw: &str) -> Coerced<Vec<String>> {
    raw.split(',')
        .map(|part| {
            let name = part.trim();
            if name.is_empty() {
                Err(Rejected)
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}

/// Numeric tree type code registered in [`TreeType`]
pub fn tree_type(raw: &str) -> Coerced<TreeType> {
    let code = raw.trim().parse::<u32>().map_err(|_| Rejected)?;
    TreeType::from_code(code).ok_or(Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_bounds() {
        assert_eq!(integer_at_least::<usize>("1", 1), Ok(1));
        assert_eq!(integer_at_least::<usize>("250", 1), Ok(250));
        assert_eq!(integer_at_least::<usize>("0", 1), Err(Rejected));
        assert_eq!(integer_at_least::<usize>("-4", 1), Err(Rejected));
        assert_eq!(integer_at_least::<u64>("0", 0), Ok(0));
        assert_eq!(integer_at_least::<u64>("-1", 0), Err(Rejected));
    }

    #[test]
    fn test_integer_rejects_garbage() {
        assert_eq!(integer_at_least::<usize>("ten", 1), Err(Rejected));
        assert_eq!(integer_at_least::<usize>("12abc", 1), Err(Rejected));
        assert_eq!(integer_at_least::<usize>("1.5", 1), Err(Rejected));
        assert_eq!(integer_at_least::<usize>("", 1), Err(Rejected));
        assert_eq!(integer_at_least::<usize>(" 7 ", 1), Ok(7));
    }

    #[test]
    fn test_integer_narrowing() {
        assert_eq!(integer_at_least::<u8>("255", 0), Ok(255));
        assert_eq!(integer_at_least::<u8>("256", 0), Err(Rejected));
    }

    #[test]
    fn test_integer_full_unsigned_range() {
        assert_eq!(
            integer_at_least::<u64>("9223372036854775808", 0),
            Ok(9_223_372_036_854_775_808)
        );
        assert_eq!(integer_at_least::<u64>("18446744073709551615", 0), Ok(u64::MAX));
        assert_eq!(integer_at_least::<u64>("18446744073709551616", 0), Err(Rejected));
    }

    #[test]
    fn test_unit_fraction() {
        assert_eq!(unit_fraction("1"), Ok(1.0));
        assert_eq!(unit_fraction("0.632"), Ok(0.632));
        assert_eq!(unit_fraction("0"), Err(Rejected));
        assert_eq!(unit_fraction("1.5"), Err(Rejected));
        assert_eq!(unit_fraction("-0.5"), Err(Rejected));
        assert_eq!(unit_fraction("NaN"), Err(Rejected));
        assert_eq!(unit_fraction("half"), Err(Rejected));
    }

    #[test]
    fn test_quantile_list() {
        assert_eq!(quantile_list("0.1,0.5,0.9"), Ok(vec![0.1, 0.5, 0.9]));
        assert_eq!(quantile_list("0.25, 0.75"), Ok(vec![0.25, 0.75]));
        assert_eq!(quantile_list("0.1,1.0"), Err(Rejected));
        assert_eq!(quantile_list("0,0.5"), Err(Rejected));
        assert_eq!(quantile_list("0.1,x"), Err(Rejected));
        assert_eq!(quantile_list(""), Err(Rejected));
    }

    #[test]
    fn test_name_list() {
        assert_eq!(
            name_list("X1,X2"),
            Ok(vec!["X1".to_string(), "X2".to_string()])
        );
        assert_eq!(name_list("X1,,X2"), Err(Rejected));
    }

    #[test]
    fn test_tree_type() {
        assert_eq!(tree_type("11"), Ok(TreeType::Quantile));
        assert_eq!(tree_type("15"), Ok(TreeType::Instrumental));
        assert_eq!(tree_type("3"), Err(Rejected));
        assert_eq!(tree_type("quantile"), Err(Rejected));
    }
}
