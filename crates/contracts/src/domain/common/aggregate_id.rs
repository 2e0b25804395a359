use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор сущности, выданный сервером.
///
/// Клиент не интерпретирует идентификатор: он приходит либо числом, либо
/// строкой, и в форму попадает ровно в том виде, в котором пришёл.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// Преобразовать ID в строку для поля формы
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}
