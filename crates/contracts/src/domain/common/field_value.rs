use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Значение поля сущности, которое клиент только показывает.
///
/// Сервер может прислать число, строку (`Decimal` приходит как `"2.50"`)
/// или `null`. Значение хранится как пришло; при выводе строка печатается
/// как есть, `null` даёт пустую строку, дробное число пишется в кратчайшем
/// виде (`2.5`, `3`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(pub Value);

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            Value::Number(n) => match n.as_f64().filter(|_| n.is_f64()) {
                Some(x) => write!(f, "{}", x),
                None => write!(f, "{}", n),
            },
            other => write!(f, "{}", other),
        }
    }
}
