use serde::{Deserialize, Serialize};

/// Тело запроса создания/переименования корзины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopcartNameRequest {
    pub name: String,
}

/// Тело запроса создания позиции.
///
/// Количество и цена уходят строками, как их ввёл пользователь;
/// приведение типов выполняет сервер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub shopcart_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

/// Тело запроса изменения позиции.
///
/// Здесь количество и цена уже числа; `None` сериализуется в `null`,
/// если поле формы не удалось разобрать.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub shopcart_id: String,
    pub name: String,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

/// Параметры поиска корзин (`GET /shopcarts?name=...`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopcartSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ShopcartSearchQuery {
    /// Имя уходит без пробелов по краям; пустое имя не передаётся вовсе
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self { name: None }
        } else {
            Self {
                name: Some(trimmed.to_string()),
            }
        }
    }
}
