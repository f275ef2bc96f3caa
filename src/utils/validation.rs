use crate::domain::model::Operator;
use crate::utils::error::{CalcError, Result};

/// Parses an operand token. An absent token counts as invalid.
pub fn validate_operand(token: Option<&str>) -> Result<f64> {
    let Some(token) = token else {
        return Err(CalcError::InvalidNumber { token: None });
    };

    token.parse::<f64>().map_err(|_| CalcError::InvalidNumber {
        token: Some(token.to_string()),
    })
}

/// Takes the first character of the token as the operator symbol; the rest
/// of the token is ignored.
pub fn validate_operator(token: Option<&str>) -> Result<Operator> {
    match token.and_then(|t| t.chars().next()) {
        Some(symbol) => Operator::try_from(symbol),
        None => Err(CalcError::InvalidOperator { symbol: None }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_operand() {
        assert_eq!(validate_operand(Some("5")).unwrap(), 5.0);
        assert_eq!(validate_operand(Some("-2.5")).unwrap(), -2.5);
        assert_eq!(validate_operand(Some("1e3")).unwrap(), 1000.0);
        assert_eq!(validate_operand(Some("+4")).unwrap(), 4.0);
        assert!(validate_operand(Some("inf")).unwrap().is_infinite());
        assert!(validate_operand(Some("abc")).is_err());
        assert!(validate_operand(Some("1,5")).is_err());
        assert!(matches!(
            validate_operand(None),
            Err(CalcError::InvalidNumber { token: None })
        ));
    }

    #[test]
    fn test_validate_operator() {
        assert_eq!(validate_operator(Some("*")).unwrap(), Operator::Multiply);
        assert_eq!(validate_operator(Some("+abc")).unwrap(), Operator::Add);
        assert!(matches!(
            validate_operator(Some("x")),
            Err(CalcError::InvalidOperator { symbol: Some('x') })
        ));
        assert!(matches!(
            validate_operator(Some("")),
            Err(CalcError::InvalidOperator { symbol: None })
        ));
        assert!(matches!(
            validate_operator(None),
            Err(CalcError::InvalidOperator { symbol: None })
        ));
    }
}
