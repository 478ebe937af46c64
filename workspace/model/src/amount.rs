//! Lossless storage for order values.
//!
//! SeaORM hands `Decimal` to SQLite as an `f64`, and `NUMERIC(p, s)` on
//! Postgres rounds anything past its scale. `Amount` stores the canonical
//! decimal string in a TEXT column instead, so every value rust_decimal can
//! represent reads back unchanged on both backends.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::sea_query::{ArrayType, ColumnType, Value, ValueType, ValueTypeErr};
use sea_orm::{ColIdx, DbErr, QueryResult, TryGetError, TryGetable};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Amount(pub Decimal);

impl Amount {
    pub fn decimal(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl PartialEq<Decimal> for Amount {
    fn eq(&self, other: &Decimal) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Amount> for Value {
    fn from(amount: Amount) -> Self {
        Value::String(Some(Box::new(amount.0.to_string())))
    }
}

impl TryGetable for Amount {
    fn try_get_by<I: ColIdx>(res: &QueryResult, index: I) -> Result<Self, TryGetError> {
        let raw = String::try_get_by(res, index)?;
        Decimal::from_str(&raw).map(Amount).map_err(|e| {
            TryGetError::DbErr(DbErr::Type(format!(
                "stored amount {:?} is not a decimal: {}",
                raw, e
            )))
        })
    }
}

impl ValueType for Amount {
    fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
        match v {
            Value::String(Some(raw)) => Decimal::from_str(&raw).map(Amount).map_err(|_| ValueTypeErr),
            _ => Err(ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Amount".to_owned()
    }

    fn array_type() -> ArrayType {
        ArrayType::String
    }

    fn column_type() -> ColumnType {
        ColumnType::Text
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_value_keeps_every_digit() {
        for raw in ["9007199254740993", "0.30000000000000004", "1.23456", "145.00"] {
            let amount = Amount(Decimal::from_str(raw).unwrap());
            let stored: Value = amount.into();
            assert_eq!(stored, Value::String(Some(Box::new(raw.to_string()))));
            assert_eq!(<Amount as ValueType>::try_from(stored).unwrap(), amount);
        }
    }

    #[test]
    fn test_non_decimal_text_is_rejected() {
        let stored = Value::String(Some(Box::new("twelve".to_string())));
        assert!(<Amount as ValueType>::try_from(stored).is_err());
    }
}
