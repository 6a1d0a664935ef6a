//! Payment routes. Same translation pattern as the order routes; card data
//! passes straight through to the payment service and is never logged.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{PageQuery, SharedState};
use crate::auth::Identity;
use crate::error::GatewayError;
use crate::proto::payment;

#[derive(Debug, Deserialize, Validate)]
pub struct InitiatePaymentRequest {
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,
    #[validate(range(min = 0.01, message = "amount must be positive"))]
    pub amount: f64,
    #[validate(length(equal = 3, message = "currency must be a 3-letter code"))]
    pub currency: String,
    pub payment_method: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreditCardPaymentRequest {
    #[validate(length(min = 1, message = "payment_id is required"))]
    pub payment_id: String,
    #[validate(length(min = 12, max = 19, message = "card_number length is invalid"))]
    pub card_number: String,
    #[validate(length(equal = 2, message = "expiry_month must be two digits"))]
    pub expiry_month: String,
    #[validate(length(equal = 4, message = "expiry_year must be four digits"))]
    pub expiry_year: String,
    #[validate(length(min = 3, max = 4, message = "cvv length is invalid"))]
    pub cvv: String,
    #[validate(length(min = 1, message = "cardholder_name is required"))]
    pub cardholder_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MetaMaskInitiateRequest {
    #[validate(length(min = 1, message = "payment_id is required"))]
    pub payment_id: String,
    #[validate(length(equal = 42, message = "wallet_address must be a 42-character address"))]
    pub wallet_address: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MetaMaskConfirmRequest {
    #[validate(length(min = 1, message = "payment_id is required"))]
    pub payment_id: String,
    #[validate(length(min = 1, message = "transaction_hash is required"))]
    pub transaction_hash: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentView {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
    pub payment_method: String,
    pub status: String,
    pub transaction_hash: String,
    pub created_at: i64,
}

#[derive(Debug, Serialize)]
pub struct MetaMaskInitiateView {
    pub payment_id: String,
    pub payment_address: String,
    pub amount_wei: String,
    pub expires_at: i64,
}

#[derive(Debug, Serialize)]
pub struct PaymentListView {
    pub payments: Vec<PaymentView>,
    pub total: Option<i32>,
}

impl From<payment::Payment> for PaymentView {
    fn from(p: payment::Payment) -> Self {
        let method = payment::PaymentMethod::try_from(p.payment_method)
            .unwrap_or(payment::PaymentMethod::Unspecified)
            .as_str_name()
            .to_string();
        let status = payment::PaymentStatus::try_from(p.status)
            .unwrap_or(payment::PaymentStatus::Unspecified)
            .as_str_name()
            .to_string();
        Self {
            id: p.id,
            order_id: p.order_id,
            user_id: p.user_id,
            amount: p.amount,
            currency: p.currency,
            payment_method: method,
            status,
            transaction_hash: p.transaction_hash,
            created_at: p.created_at,
        }
    }
}

fn parse_method(value: &str) -> Result<payment::PaymentMethod, GatewayError> {
    payment::PaymentMethod::from_str_name(value)
        .ok_or_else(|| GatewayError::Validation(format!("unknown payment method {:?}", value)))
}

pub async fn initiate_payment(
    State(state): State<SharedState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<InitiatePaymentRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    payload.validate()?;
    let method = parse_method(&payload.payment_method)?;

    let request = payment::InitiatePaymentRequest {
        order_id: payload.order_id,
        user_id: identity.subject_id,
        amount: payload.amount,
        currency: payload.currency,
        payment_method: method as i32,
    };

    let created = state.backends.payment.initiate_payment(request).await?;
    Ok((StatusCode::CREATED, Json(PaymentView::from(created))))
}

pub async fn credit_card_payment(
    State(state): State<SharedState>,
    Json(payload): Json<CreditCardPaymentRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    payload.validate()?;

    let request = payment::CreditCardPaymentRequest {
        payment_id: payload.payment_id,
        card_info: Some(payment::CreditCardInfo {
            card_number: payload.card_number,
            expiry_month: payload.expiry_month,
            expiry_year: payload.expiry_year,
            cvv: payload.cvv,
            cardholder_name: payload.cardholder_name,
        }),
    };

    let processed = state
        .backends
        .payment
        .process_credit_card_payment(request)
        .await?;
    Ok(Json(PaymentView::from(processed)))
}

pub async fn metamask_initiate(
    State(state): State<SharedState>,
    Json(payload): Json<MetaMaskInitiateRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    payload.validate()?;

    let response = state
        .backends
        .payment
        .initiate_meta_mask_payment(payment::MetaMaskPaymentRequest {
            payment_id: payload.payment_id,
            wallet_address: payload.wallet_address,
        })
        .await?;

    Ok(Json(MetaMaskInitiateView {
        payment_id: response.payment_id,
        payment_address: response.payment_address,
        amount_wei: response.amount_wei,
        expires_at: response.expires_at,
    }))
}

pub async fn metamask_confirm(
    State(state): State<SharedState>,
    Json(payload): Json<MetaMaskConfirmRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    payload.validate()?;

    let confirmed = state
        .backends
        .payment
        .confirm_meta_mask_payment(payment::ConfirmMetaMaskPaymentRequest {
            payment_id: payload.payment_id,
            transaction_hash: payload.transaction_hash,
        })
        .await?;
    Ok(Json(PaymentView::from(confirmed)))
}

pub async fn get_payment(
    State(state): State<SharedState>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let found = state
        .backends
        .payment
        .get_payment(payment::GetPaymentRequest { payment_id })
        .await?;
    Ok(Json(PaymentView::from(found)))
}

pub async fn payments_by_order(
    State(state): State<SharedState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let response = state
        .backends
        .payment
        .get_payments_by_order(payment::GetPaymentsByOrderRequest { order_id })
        .await?;

    Ok(Json(PaymentListView {
        payments: response.payments.into_iter().map(Into::into).collect(),
        total: None,
    }))
}

pub async fn pending_payments(
    State(state): State<SharedState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let response = state
        .backends
        .payment
        .get_pending_payments(payment::GetPendingPaymentsRequest {
            user_id: identity.subject_id,
            page: query.page(),
            limit: query.limit(),
        })
        .await?;

    Ok(Json(PaymentListView {
        payments: response.payments.into_iter().map(Into::into).collect(),
        total: Some(response.total),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initiate_request_rejects_bad_currency() {
        let request = InitiatePaymentRequest {
            order_id: "o-1".to_string(),
            amount: 10.0,
            currency: "EURO".to_string(),
            payment_method: "PAYMENT_METHOD_CREDIT_CARD".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn initiate_request_rejects_zero_amount() {
        let request = InitiatePaymentRequest {
            order_id: "o-1".to_string(),
            amount: 0.0,
            currency: "EUR".to_string(),
            payment_method: "PAYMENT_METHOD_CREDIT_CARD".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn payment_method_strings_use_proto_names() {
        assert_eq!(
            parse_method("PAYMENT_METHOD_METAMASK").unwrap(),
            payment::PaymentMethod::Metamask
        );
        assert!(parse_method("metamask").is_err());
    }

    #[test]
    fn card_request_rejects_short_card_number() {
        let request = CreditCardPaymentRequest {
            payment_id: "pay-1".to_string(),
            card_number: "1234".to_string(),
            expiry_month: "04".to_string(),
            expiry_year: "2027".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "A Customer".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn wallet_address_length_is_enforced() {
        let request = MetaMaskInitiateRequest {
            payment_id: "pay-1".to_string(),
            wallet_address: "0xdeadbeef".to_string(),
        };
        assert!(request.validate().is_err());

        let ok = MetaMaskInitiateRequest {
            payment_id: "pay-1".to_string(),
            wallet_address: format!("0x{}", "a".repeat(40)),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn payment_view_renders_enum_names() {
        let view = PaymentView::from(payment::Payment {
            id: "pay-1".to_string(),
            payment_method: payment::PaymentMethod::Metamask as i32,
            status: payment::PaymentStatus::Pending as i32,
            ..Default::default()
        });
        assert_eq!(view.payment_method, "PAYMENT_METHOD_METAMASK");
        assert_eq!(view.status, "PAYMENT_STATUS_PENDING");
    }
}
