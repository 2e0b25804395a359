use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, FieldValue};

// ============================================================================
// Shopcart
// ============================================================================

/// Корзина покупателя в том виде, в котором её отдаёт REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopcartDto {
    pub id: EntityId,
    #[serde(default)]
    pub name: FieldValue,

    /// Товары корзины; сервер может не прислать поле для пустой корзины
    #[serde(default)]
    pub items: Vec<ItemDto>,
}

// ============================================================================
// Item
// ============================================================================

/// Позиция корзины.
///
/// Имя, количество и цена только показываются, поэтому принимаются в любом
/// виде: числом, строкой или `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: EntityId,
    pub shopcart_id: EntityId,
    #[serde(default)]
    pub name: FieldValue,
    #[serde(default)]
    pub quantity: FieldValue,
    #[serde(default)]
    pub price: FieldValue,
}
