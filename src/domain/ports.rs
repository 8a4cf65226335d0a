use crate::domain::model::Operand;
use crate::utils::error::Result;

/// 可轉換成運算元的輸入。數值型別一定成功，文字與 JSON 可能失敗。
pub trait IntoOperand {
    fn into_operand(self) -> Result<Operand>;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Result<Operand> {
        Ok(self)
    }
}

macro_rules! lossless_int {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                fn into_operand(self) -> Result<Operand> {
                    Ok(Operand::Int(i128::from(self)))
                }
            }
        )*
    };
}

// 超出 i128 範圍時改用浮點數
macro_rules! wide_int {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                fn into_operand(self) -> Result<Operand> {
                    Ok(i128::try_from(self)
                        .map(Operand::Int)
                        .unwrap_or(Operand::Float(self as f64)))
                }
            }
        )*
    };
}

lossless_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
wide_int!(isize, usize, u128);

impl IntoOperand for f32 {
    fn into_operand(self) -> Result<Operand> {
        Ok(Operand::Float(f64::from(self)))
    }
}

impl IntoOperand for f64 {
    fn into_operand(self) -> Result<Operand> {
        Ok(Operand::Float(self))
    }
}

impl IntoOperand for &str {
    fn into_operand(self) -> Result<Operand> {
        self.parse()
    }
}

impl IntoOperand for String {
    fn into_operand(self) -> Result<Operand> {
        self.as_str().into_operand()
    }
}

impl IntoOperand for &String {
    fn into_operand(self) -> Result<Operand> {
        self.as_str().into_operand()
    }
}

impl IntoOperand for &serde_json::Value {
    fn into_operand(self) -> Result<Operand> {
        Operand::from_json(self)
    }
}

impl IntoOperand for serde_json::Value {
    fn into_operand(self) -> Result<Operand> {
        Operand::from_json(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(7u8.into_operand().unwrap(), Operand::Int(7));
        assert_eq!((-7i32).into_operand().unwrap(), Operand::Int(-7));
        assert_eq!(1.5f32.into_operand().unwrap(), Operand::Float(1.5));
        assert_eq!(42usize.into_operand().unwrap(), Operand::Int(42));
        assert!(u64::MAX.into_operand().unwrap().is_integer());
        assert_eq!(
            u64::MAX.into_operand().unwrap(),
            Operand::Int(i128::from(u64::MAX))
        );
        assert!(!u128::MAX.into_operand().unwrap().is_integer());
    }

    #[test]
    fn test_text_conversions() {
        assert_eq!("4".into_operand().unwrap(), Operand::Int(4));
        assert_eq!(String::from("0.5").into_operand().unwrap(), Operand::Float(0.5));
        assert!("four".into_operand().is_err());
    }
}
