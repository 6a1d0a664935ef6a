use crate::config::Config;
use crate::error::GatewayError;
use crate::proto::order;
use crate::proto::order::order_service_client::OrderServiceClient;
use crate::proto::payment;
use crate::proto::payment::payment_service_client::PaymentServiceClient;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

/// Typed client for the order service.
///
/// Holds one multiplexed channel shared by all concurrent calls; tonic
/// handles call-level multiplexing, so no locking happens here. Dropping the
/// per-call future (client disconnect) cancels the in-flight RPC.
#[derive(Clone)]
pub struct OrderClient {
    channel: Channel,
}

impl OrderClient {
    /// Dials the order service with a bounded timeout. Startup-only.
    pub async fn dial(address: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let channel = endpoint("order", address)?
            .connect_timeout(timeout)
            .connect()
            .await
            .map_err(|source| GatewayError::BackendDial {
                service: "order",
                address: address.to_string(),
                source,
            })?;
        Ok(Self { channel })
    }

    /// Creates a client whose channel connects on first use. For tests and
    /// local tooling; production startup uses [`OrderClient::dial`] so that
    /// an unreachable backend is fatal.
    pub fn lazy(address: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            channel: endpoint("order", address)?.connect_lazy(),
        })
    }

    fn stub(&self) -> OrderServiceClient<Channel> {
        OrderServiceClient::new(self.channel.clone())
    }

    pub async fn create_order(
        &self,
        req: order::CreateOrderRequest,
    ) -> Result<order::Order, tonic::Status> {
        self.stub().create_order(req).await.map(|r| r.into_inner())
    }

    pub async fn get_order(
        &self,
        req: order::GetOrderRequest,
    ) -> Result<order::Order, tonic::Status> {
        self.stub().get_order(req).await.map(|r| r.into_inner())
    }

    pub async fn update_order_status(
        &self,
        req: order::UpdateOrderStatusRequest,
    ) -> Result<order::Order, tonic::Status> {
        self.stub()
            .update_order_status(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn add_delivery_address(
        &self,
        req: order::DeliveryAddress,
    ) -> Result<order::DeliveryAddress, tonic::Status> {
        self.stub()
            .add_delivery_address(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn list_delivery_addresses(
        &self,
        req: order::ListAddressesRequest,
    ) -> Result<order::ListAddressesResponse, tonic::Status> {
        self.stub()
            .list_delivery_addresses(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn get_available_delivery_slots(
        &self,
        req: order::GetDeliverySlotsRequest,
    ) -> Result<order::GetDeliverySlotsResponse, tonic::Status> {
        self.stub()
            .get_available_delivery_slots(req)
            .await
            .map(|r| r.into_inner())
    }
}

/// Typed client for the payment service. Same connection model as
/// [`OrderClient`].
#[derive(Clone)]
pub struct PaymentClient {
    channel: Channel,
}

impl PaymentClient {
    pub async fn dial(address: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let channel = endpoint("payment", address)?
            .connect_timeout(timeout)
            .connect()
            .await
            .map_err(|source| GatewayError::BackendDial {
                service: "payment",
                address: address.to_string(),
                source,
            })?;
        Ok(Self { channel })
    }

    pub fn lazy(address: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            channel: endpoint("payment", address)?.connect_lazy(),
        })
    }

    fn stub(&self) -> PaymentServiceClient<Channel> {
        PaymentServiceClient::new(self.channel.clone())
    }

    pub async fn initiate_payment(
        &self,
        req: payment::InitiatePaymentRequest,
    ) -> Result<payment::Payment, tonic::Status> {
        self.stub()
            .initiate_payment(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn process_credit_card_payment(
        &self,
        req: payment::CreditCardPaymentRequest,
    ) -> Result<payment::Payment, tonic::Status> {
        self.stub()
            .process_credit_card_payment(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn initiate_meta_mask_payment(
        &self,
        req: payment::MetaMaskPaymentRequest,
    ) -> Result<payment::MetaMaskPaymentResponse, tonic::Status> {
        self.stub()
            .initiate_meta_mask_payment(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn confirm_meta_mask_payment(
        &self,
        req: payment::ConfirmMetaMaskPaymentRequest,
    ) -> Result<payment::Payment, tonic::Status> {
        self.stub()
            .confirm_meta_mask_payment(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn get_payment(
        &self,
        req: payment::GetPaymentRequest,
    ) -> Result<payment::Payment, tonic::Status> {
        self.stub().get_payment(req).await.map(|r| r.into_inner())
    }

    pub async fn get_payments_by_order(
        &self,
        req: payment::GetPaymentsByOrderRequest,
    ) -> Result<payment::GetPaymentsByOrderResponse, tonic::Status> {
        self.stub()
            .get_payments_by_order(req)
            .await
            .map(|r| r.into_inner())
    }

    pub async fn get_pending_payments(
        &self,
        req: payment::GetPendingPaymentsRequest,
    ) -> Result<payment::GetPendingPaymentsResponse, tonic::Status> {
        self.stub()
            .get_pending_payments(req)
            .await
            .map(|r| r.into_inner())
    }
}

/// One long-lived connection per backend, created at startup and closed at
/// shutdown. Per-call faults propagate to the dispatcher untouched; there is
/// no retry or circuit breaking in this layer.
pub struct BackendClients {
    pub order: OrderClient,
    pub payment: PaymentClient,
}

impl BackendClients {
    /// Dials every backend. Any failure here must abort startup.
    pub async fn connect(config: &Config) -> Result<Self, GatewayError> {
        let timeout = config.dial_timeout();
        let (order, payment) = tokio::try_join!(
            OrderClient::dial(&config.order_service_url, timeout),
            PaymentClient::dial(&config.payment_service_url, timeout),
        )?;
        tracing::info!(
            order = %config.order_service_url,
            payment = %config.payment_service_url,
            "backend connections established"
        );
        Ok(Self { order, payment })
    }

    /// Lazily-connecting pool for tests and local tooling.
    pub fn connect_lazy(order_url: &str, payment_url: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            order: OrderClient::lazy(order_url)?,
            payment: PaymentClient::lazy(payment_url)?,
        })
    }

    /// Releases both channels. Consumes the pool so a second close cannot
    /// happen.
    pub fn close(self) {
        drop(self.order);
        tracing::debug!(target: "api_gateway::clients", "order service connection closed");
        drop(self.payment);
        tracing::debug!(target: "api_gateway::clients", "payment service connection closed");
    }
}

fn endpoint(service: &'static str, address: &str) -> Result<Endpoint, GatewayError> {
    Endpoint::from_shared(address.to_string()).map_err(|e| GatewayError::Internal(format!(
        "invalid {} service address {:?}: {}",
        service, address, e
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lazy_clients_accept_valid_addresses() {
        assert!(BackendClients::connect_lazy("http://127.0.0.1:50051", "http://127.0.0.1:50052").is_ok());
    }

    #[test]
    fn invalid_address_is_rejected() {
        assert!(OrderClient::lazy("not a uri").is_err());
    }

    #[tokio::test]
    async fn dial_failure_is_fatal_and_named() {
        // Nothing listens on this port; connect_timeout bounds the wait.
        let result = OrderClient::dial("http://127.0.0.1:1", Duration::from_millis(200)).await;
        match result {
            Err(GatewayError::BackendDial { service, .. }) => assert_eq!(service, "order"),
            other => panic!("expected dial failure, got {:?}", other.map(|_| ())),
        }
    }
}
