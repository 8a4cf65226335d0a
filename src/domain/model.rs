use crate::utils::error::{CalcError, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// 運算元：整數或浮點數
///
/// 相等比較依數值：`Int(7) == Float(7.0)`。
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i128),
    Float(f64),
}

impl Operand {
    pub fn as_f64(self) -> f64 {
        match self {
            Operand::Int(v) => v as f64,
            Operand::Float(v) => v,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Operand::Int(_))
    }

    /// 依指定小數位數格式化，整數不受影響
    pub fn display_with(self, precision: Option<usize>) -> String {
        match (self, precision) {
            (Operand::Float(v), Some(digits)) => format!("{:.*}", digits, v),
            _ => self.to_string(),
        }
    }

    /// 浮點數四捨五入到指定小數位數
    pub fn rounded(self, precision: Option<usize>) -> Operand {
        match (self, precision) {
            (Operand::Float(v), Some(digits)) if v.is_finite() => {
                Operand::Float(format!("{:.*}", digits, v).parse().unwrap_or(v))
            }
            _ => self,
        }
    }

    /// 從 JSON 值轉換，只接受數字
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        let kind = match value {
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    return Ok(Operand::Int(i128::from(v)));
                }
                if let Some(v) = n.as_u64() {
                    return Ok(Operand::Int(i128::from(v)));
                }
                if let Some(v) = n.as_f64() {
                    return Ok(Operand::Float(v));
                }
                "an unrepresentable number"
            }
            Value::String(_) => "a string",
            Value::Bool(_) => "a boolean",
            Value::Null => "null",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };

        Err(CalcError::invalid_operand(
            "operand",
            value.to_string(),
            format!("expected a number, found {}", kind),
        ))
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OperandVisitor;

        impl<'de> Visitor<'de> for OperandVisitor {
            type Value = Operand;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Operand, E> {
                Ok(Operand::Int(i128::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Operand, E> {
                Ok(Operand::Int(i128::from(v)))
            }

            fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Operand, E> {
                Ok(Operand::Int(v))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Operand, E> {
                Ok(i128::try_from(v)
                    .map(Operand::Int)
                    .unwrap_or(Operand::Float(v as f64)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Operand, E> {
                Ok(Operand::Float(v))
            }
        }

        deserializer.deserialize_any(OperandVisitor)
    }
}

impl PartialEq for Operand {
    fn eq(&self, other: &Operand) -> bool {
        match (self, other) {
            (Operand::Int(a), Operand::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{}", v),
            Operand::Float(v) => {
                // 有限浮點數一律帶小數點 (5.0)，不使用指數表示
                let text = v.to_string();
                if v.is_finite() && !text.contains('.') {
                    write!(f, "{}.0", text)
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

impl FromStr for Operand {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if let Ok(v) = trimmed.parse::<i128>() {
            return Ok(Operand::Int(v));
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Ok(Operand::Float(v));
        }

        let reason = if trimmed.is_empty() {
            "value is empty"
        } else {
            "text is not a number"
        };
        Err(CalcError::invalid_operand("operand", s, reason))
    }
}

impl Add for Operand {
    type Output = Operand;

    /// 整數相加溢位時改用浮點數
    fn add(self, rhs: Operand) -> Operand {
        match (self, rhs) {
            (Operand::Int(a), Operand::Int(b)) => a
                .checked_add(b)
                .map(Operand::Int)
                .unwrap_or_else(|| Operand::Float(a as f64 + b as f64)),
            (a, b) => Operand::Float(a.as_f64() + b.as_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_operands() {
        assert_eq!("7".parse::<Operand>().unwrap(), Operand::Int(7));
        assert_eq!(" -5 ".parse::<Operand>().unwrap(), Operand::Int(-5));
        assert_eq!("2.5".parse::<Operand>().unwrap(), Operand::Float(2.5));
        assert_eq!("1e3".parse::<Operand>().unwrap(), Operand::Float(1000.0));
        assert!("9223372036854775808".parse::<Operand>().unwrap().is_integer());
    }

    #[test]
    fn test_parse_rejects_text() {
        for input in ["three", "", "   ", "3 4", "0x10"] {
            let err = input.parse::<Operand>().unwrap_err();
            assert!(matches!(err, CalcError::InvalidOperand { .. }), "{input:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::Int(7).to_string(), "7");
        assert_eq!(Operand::Float(5.0).to_string(), "5.0");
        assert_eq!(Operand::Float(0.1).to_string(), "0.1");
        assert_eq!(Operand::Float(-2.0).to_string(), "-2.0");
        assert_eq!(Operand::Float(1.0 / 3.0).display_with(Some(2)), "0.33");
        assert_eq!(Operand::Int(7).display_with(Some(2)), "7");
    }

    #[test]
    fn test_display_large_and_small_floats() {
        assert_eq!(Operand::Float(1e16).to_string(), "10000000000000000.0");
        assert_eq!(
            Operand::Float(i64::MAX as f64).to_string(),
            "9223372036854775808.0"
        );
        assert_eq!(Operand::Float(1e-7).to_string(), "0.0000001");
        assert_eq!(Operand::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Operand::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(Operand::Int(7), Operand::Float(7.0));
        assert_eq!(Operand::Float(0.0), Operand::Int(0));
        assert_ne!(Operand::Int(7), Operand::Float(7.5));
        assert_ne!(Operand::Int(i128::MAX), Operand::Int(i128::MAX - 1));
        assert_ne!(Operand::Float(f64::NAN), Operand::Float(f64::NAN));
    }

    #[test]
    fn test_rounded() {
        assert_eq!(
            Operand::Float(0.1 + 0.2).rounded(Some(2)).as_f64(),
            0.3
        );
        assert_eq!(Operand::Float(0.1 + 0.2).rounded(None).as_f64(), 0.1 + 0.2);
        assert!(Operand::Int(7).rounded(Some(2)).is_integer());
        assert!(Operand::Float(f64::INFINITY).rounded(Some(2)).as_f64().is_infinite());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Operand::from_json(&json!(3)).unwrap(), Operand::Int(3));
        assert_eq!(Operand::from_json(&json!(2.5)).unwrap(), Operand::Float(2.5));

        let big = Operand::from_json(&json!(u64::MAX)).unwrap();
        assert!(big.is_integer());
        assert_eq!(big, Operand::Int(i128::from(u64::MAX)));

        assert!(Operand::from_json(&json!("3")).is_err());
        assert!(Operand::from_json(&json!(true)).is_err());
        assert!(Operand::from_json(&json!(null)).is_err());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Operand::Int(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Operand::Float(5.0)).unwrap(), "5.0");
        let parsed: Operand = serde_json::from_str("2.5").unwrap();
        assert!(!parsed.is_integer());
        assert_eq!(parsed, Operand::Float(2.5));

        let parsed: Operand = serde_json::from_str("7").unwrap();
        assert!(parsed.is_integer());
        assert!(serde_json::from_str::<Operand>("\"7\"").is_err());
    }

    #[test]
    fn test_add_widens() {
        let ints = Operand::Int(3) + Operand::Int(4);
        assert!(ints.is_integer());
        assert_eq!(ints, Operand::Int(7));

        let mixed = Operand::Int(2) + Operand::Float(0.5);
        assert!(!mixed.is_integer());
        assert_eq!(mixed, Operand::Float(2.5));

        assert!((Operand::Int(i128::from(i64::MAX)) + Operand::Int(1)).is_integer());
        assert!(!(Operand::Int(i128::MAX) + Operand::Int(1)).is_integer());
    }
}
