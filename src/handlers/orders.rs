//! Order routes: JSON in, typed order-service RPC out.
//!
//! Each handler validates the payload before anything touches the backend,
//! stamps the authenticated subject onto the RPC request, and maps the typed
//! response back into a JSON view.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{PageQuery, SharedState};
use crate::auth::Identity;
use crate::error::GatewayError;
use crate::proto::order;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct OrderItemRequest {
    #[validate(length(min = 1, message = "product_id is required"))]
    pub product_id: String,
    pub name: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    #[validate(range(min = 0.0, message = "unit_price cannot be negative"))]
    pub unit_price: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "order must contain at least one item"), nested)]
    pub items: Vec<OrderItemRequest>,
    #[validate(length(min = 1, message = "delivery_address_id is required"))]
    pub delivery_address_id: String,
    pub delivery_time: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "postal_code is required"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderItemView {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemView>,
    pub status: String,
    pub delivery_address_id: String,
    pub delivery_time: i64,
    pub total_price: f64,
    pub created_at: i64,
}

#[derive(Debug, Serialize)]
pub struct AddressView {
    pub id: String,
    pub user_id: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
pub struct AddressListView {
    pub addresses: Vec<AddressView>,
    pub total: i32,
}

#[derive(Debug, Serialize)]
pub struct DeliverySlotView {
    pub id: String,
    pub starts_at: i64,
    pub ends_at: i64,
    pub available: bool,
}

impl From<order::OrderItem> for OrderItemView {
    fn from(item: order::OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

impl From<order::Order> for OrderView {
    fn from(o: order::Order) -> Self {
        let status = order::OrderStatus::try_from(o.status)
            .unwrap_or(order::OrderStatus::Unspecified)
            .as_str_name()
            .to_string();
        Self {
            id: o.id,
            user_id: o.user_id,
            items: o.items.into_iter().map(Into::into).collect(),
            status,
            delivery_address_id: o.delivery_address_id,
            delivery_time: o.delivery_time,
            total_price: o.total_price,
            created_at: o.created_at,
        }
    }
}

impl From<order::DeliveryAddress> for AddressView {
    fn from(a: order::DeliveryAddress) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            street: a.street,
            city: a.city,
            postal_code: a.postal_code,
            country: a.country,
        }
    }
}

impl From<OrderItemRequest> for order::OrderItem {
    fn from(item: OrderItemRequest) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

fn parse_status(value: &str) -> Result<order::OrderStatus, GatewayError> {
    order::OrderStatus::from_str_name(value)
        .ok_or_else(|| GatewayError::Validation(format!("unknown order status {:?}", value)))
}

pub async fn create_order(
    State(state): State<SharedState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    payload.validate()?;

    let request = order::CreateOrderRequest {
        user_id: identity.subject_id,
        items: payload.items.into_iter().map(Into::into).collect(),
        delivery_address_id: payload.delivery_address_id,
        delivery_time: payload.delivery_time,
    };

    let created = state.backends.order.create_order(request).await?;
    Ok((StatusCode::CREATED, Json(OrderView::from(created))))
}

pub async fn get_order(
    State(state): State<SharedState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let found = state
        .backends
        .order
        .get_order(order::GetOrderRequest { order_id })
        .await?;
    Ok(Json(OrderView::from(found)))
}

pub async fn update_order_status(
    State(state): State<SharedState>,
    Path(order_id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let status = parse_status(&payload.status)?;

    let updated = state
        .backends
        .order
        .update_order_status(order::UpdateOrderStatusRequest {
            order_id,
            status: status as i32,
        })
        .await?;
    Ok(Json(OrderView::from(updated)))
}

pub async fn add_address(
    State(state): State<SharedState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<AddressRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    payload.validate()?;

    let request = order::DeliveryAddress {
        id: String::new(),
        user_id: identity.subject_id,
        street: payload.street,
        city: payload.city,
        postal_code: payload.postal_code,
        country: payload.country,
    };

    let stored = state.backends.order.add_delivery_address(request).await?;
    Ok((StatusCode::CREATED, Json(AddressView::from(stored))))
}

pub async fn list_addresses(
    State(state): State<SharedState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let response = state
        .backends
        .order
        .list_delivery_addresses(order::ListAddressesRequest {
            user_id: identity.subject_id,
            page: query.page(),
            limit: query.limit(),
        })
        .await?;

    Ok(Json(AddressListView {
        addresses: response.addresses.into_iter().map(Into::into).collect(),
        total: response.total,
    }))
}

pub async fn delivery_slots(
    State(state): State<SharedState>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let date = query
        .date
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

    let response = state
        .backends
        .order
        .get_available_delivery_slots(order::GetDeliverySlotsRequest { date })
        .await?;

    let slots: Vec<DeliverySlotView> = response
        .slots
        .into_iter()
        .map(|s| DeliverySlotView {
            id: s.id,
            starts_at: s.starts_at,
            ends_at: s.ends_at,
            available: s.available,
        })
        .collect();

    Ok(Json(serde_json::json!({ "slots": slots })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> OrderItemRequest {
        OrderItemRequest {
            product_id: "p-1".to_string(),
            name: "Apples".to_string(),
            quantity: 2,
            unit_price: 1.50,
        }
    }

    #[test]
    fn valid_order_passes_validation() {
        let request = CreateOrderRequest {
            items: vec![item()],
            delivery_address_id: "addr-1".to_string(),
            delivery_time: 1_700_000_000,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_order_is_rejected_before_dispatch() {
        let request = CreateOrderRequest {
            items: vec![],
            delivery_address_id: "addr-1".to_string(),
            delivery_time: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn zero_quantity_item_is_rejected() {
        let mut bad = item();
        bad.quantity = 0;
        let request = CreateOrderRequest {
            items: vec![bad],
            delivery_address_id: "addr-1".to_string(),
            delivery_time: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn status_strings_use_proto_names() {
        assert_eq!(
            parse_status("ORDER_STATUS_CONFIRMED").unwrap(),
            order::OrderStatus::Confirmed
        );
        assert!(parse_status("confirmed").is_err());
    }

    #[test]
    fn order_view_renders_status_name() {
        let view = OrderView::from(order::Order {
            id: "o-1".to_string(),
            user_id: "u1".to_string(),
            items: vec![],
            status: order::OrderStatus::Pending as i32,
            delivery_address_id: "addr-1".to_string(),
            delivery_time: 0,
            total_price: 3.0,
            created_at: 0,
        });
        assert_eq!(view.status, "ORDER_STATUS_PENDING");
    }

    #[test]
    fn unknown_status_value_renders_unspecified() {
        let view = OrderView::from(order::Order {
            status: 99,
            ..Default::default()
        });
        assert_eq!(view.status, "ORDER_STATUS_UNSPECIFIED");
    }
}
