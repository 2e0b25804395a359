//! Pure table rendering: API payloads in, [`ResultTable`] out.

use contracts::domain::a001_shopcart::aggregate::{ItemDto, ShopcartDto};

use super::state::{ResultRow, ResultTable};

pub const SHOPCART_RESULT_HEADERS: [&str; 6] =
    ["ID", "Name", "Item_ID", "Item_Name", "Quantity", "Price"];
pub const ITEM_RESULT_HEADERS: [&str; 5] = ["ID", "Shopcart_ID", "Name", "Quantity", "Price"];

/// One row per item; a cart without items still gets one row with empty item cells.
/// Rows of the same cart share its `row_{index}` id.
pub fn render_shopcarts(carts: &[ShopcartDto]) -> ResultTable {
    let mut rows = Vec::new();

    for (index, cart) in carts.iter().enumerate() {
        let row_id = format!("row_{}", index);
        let cart_id = cart.id.as_string();

        if cart.items.is_empty() {
            rows.push(ResultRow {
                id: row_id,
                cells: vec![
                    cart_id,
                    cart.name.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
            });
            continue;
        }

        for item in &cart.items {
            rows.push(ResultRow {
                id: row_id.clone(),
                cells: vec![
                    cart_id.clone(),
                    cart.name.to_string(),
                    item.id.as_string(),
                    item.name.to_string(),
                    item.quantity.to_string(),
                    item.price.to_string(),
                ],
            });
        }
    }

    ResultTable {
        headers: SHOPCART_RESULT_HEADERS.to_vec(),
        rows,
    }
}

pub fn render_items(items: &[ItemDto]) -> ResultTable {
    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| ResultRow {
            id: format!("row_{}", index),
            cells: vec![
                item.id.as_string(),
                item.shopcart_id.as_string(),
                item.name.to_string(),
                item.quantity.to_string(),
                item.price.to_string(),
            ],
        })
        .collect();

    ResultTable {
        headers: ITEM_RESULT_HEADERS.to_vec(),
        rows,
    }
}
