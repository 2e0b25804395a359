//! Shopcart REST endpoints.
//!
//! Each function turns form input into the [`ApiRequest`] for one endpoint.
//! Nothing here touches the network; see [`crate::shared::http::send`].

use contracts::domain::a001_shopcart::dto::{
    CreateItemRequest, ShopcartNameRequest, ShopcartSearchQuery, UpdateItemRequest,
};

use crate::shared::api_utils::path_segment;
use crate::shared::http::{ApiError, ApiRequest, HttpMethod};

const API_BASE: &str = "/shopcarts";

fn shopcart_path(id: &str) -> String {
    format!("{}/{}", API_BASE, path_segment(id))
}

fn items_path(shopcart_id: &str) -> String {
    format!("{}/items", shopcart_path(shopcart_id))
}

fn item_path(shopcart_id: &str, item_id: &str) -> String {
    format!("{}/{}", items_path(shopcart_id), path_segment(item_id))
}

/// Создать корзину
pub fn create_shopcart(name: &str) -> Result<ApiRequest, ApiError> {
    let body = ShopcartNameRequest {
        name: name.to_string(),
    };
    ApiRequest::with_json(HttpMethod::Post, API_BASE, &body)
}

/// Переименовать корзину
pub fn update_shopcart(id: &str, name: &str) -> Result<ApiRequest, ApiError> {
    let body = ShopcartNameRequest {
        name: name.to_string(),
    };
    ApiRequest::with_json(HttpMethod::Put, shopcart_path(id), &body)
}

/// Получить корзину по ID
pub fn get_shopcart(id: &str) -> ApiRequest {
    ApiRequest::get(shopcart_path(id))
}

/// Удалить корзину
pub fn delete_shopcart(id: &str) -> ApiRequest {
    ApiRequest::delete(shopcart_path(id))
}

/// Очистить корзину на стороне сервера
pub fn clear_shopcart(id: &str) -> ApiRequest {
    ApiRequest::put_empty(format!("{}/clear", shopcart_path(id)))
}

/// Поиск корзин по имени; пустое имя ищет все корзины (`/shopcarts?`)
pub fn search_shopcarts(name: &str) -> Result<ApiRequest, ApiError> {
    let query = serde_qs::to_string(&ShopcartSearchQuery::from_name(name))
        .map_err(|e| ApiError::Transport(format!("Failed to serialize query: {}", e)))?;
    Ok(ApiRequest::get(format!("{}?{}", API_BASE, query)))
}

/// Создать позицию; количество и цена уходят как введены
pub fn create_item(body: &CreateItemRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::with_json(HttpMethod::Post, items_path(&body.shopcart_id), body)
}

pub fn get_item(shopcart_id: &str, item_id: &str) -> ApiRequest {
    ApiRequest::get(item_path(shopcart_id, item_id))
}

pub fn list_items(shopcart_id: &str) -> ApiRequest {
    ApiRequest::get(items_path(shopcart_id))
}

pub fn delete_item(shopcart_id: &str, item_id: &str) -> ApiRequest {
    ApiRequest::delete(item_path(shopcart_id, item_id))
}

/// Изменить позицию; количество и цена уже приведены к числам
pub fn update_item(item_id: &str, body: &UpdateItemRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::with_json(HttpMethod::Put, item_path(&body.shopcart_id, item_id), body)
}
