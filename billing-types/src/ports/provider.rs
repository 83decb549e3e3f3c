//! Payment provider port.
//!
//! One method per remote call. Implementations forward to the provider and
//! report failures as `ProviderError`; they never validate caller input.

use crate::domain::{
    Customer, DeletedCustomer, Invoice, InvoiceItem, PaymentIntent, PaymentMethod, Subscription,
};
use crate::dto::{CustomerInput, NewInvoiceItem, NewPaymentIntent, NewSubscription};
use crate::error::ProviderError;

#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync + 'static {
    // ─────────────────────────────────────────────────────────────────────────────
    // Customers
    // ─────────────────────────────────────────────────────────────────────────────

    async fn create_customer(&self, input: &CustomerInput) -> Result<Customer, ProviderError>;

    async fn retrieve_customer(&self, customer_id: &str) -> Result<Customer, ProviderError>;

    async fn delete_customer(&self, customer_id: &str) -> Result<DeletedCustomer, ProviderError>;

    /// Sets the payment method invoices for this customer are charged against.
    async fn set_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProviderError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment methods & intents
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a card payment method from a client-side card token.
    async fn create_card_payment_method(&self, token: &str)
    -> Result<PaymentMethod, ProviderError>;

    async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        customer_id: &str,
    ) -> Result<PaymentMethod, ProviderError>;

    async fn create_payment_intent(
        &self,
        params: &NewPaymentIntent,
    ) -> Result<PaymentIntent, ProviderError>;

    async fn confirm_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<PaymentIntent, ProviderError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Subscriptions
    // ─────────────────────────────────────────────────────────────────────────────

    async fn create_subscription(
        &self,
        params: &NewSubscription,
    ) -> Result<Subscription, ProviderError>;

    async fn retrieve_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Subscription, ProviderError>;

    /// Moves one subscription item to a new price, invoicing the proration immediately.
    async fn update_subscription_price(
        &self,
        subscription_id: &str,
        item_id: &str,
        price_id: &str,
    ) -> Result<Subscription, ProviderError>;

    async fn set_cancel_at_period_end(
        &self,
        subscription_id: &str,
        cancel: bool,
    ) -> Result<Subscription, ProviderError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Invoices
    // ─────────────────────────────────────────────────────────────────────────────

    async fn list_invoices(&self, subscription_id: &str) -> Result<Vec<Invoice>, ProviderError>;

    async fn retrieve_invoice(&self, invoice_id: &str) -> Result<Invoice, ProviderError>;

    /// Creates a draft invoice for a subscription.
    async fn create_invoice(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Invoice, ProviderError>;

    async fn create_invoice_item(
        &self,
        params: &NewInvoiceItem,
    ) -> Result<InvoiceItem, ProviderError>;

    async fn finalize_invoice(&self, invoice_id: &str) -> Result<Invoice, ProviderError>;
}
