//! Payment Facade
//!
//! Each operation checks its required inputs, asserts whatever subscription
//! state it depends on, then forwards to the provider port. Validation
//! failures return before any remote call is made.

use chrono::{DateTime, Days, Utc};
use tracing::{info, instrument};

use billing_types::{
    Customer, CustomerId, CustomerInput, DeletedCustomer, FacadeError, Field, Invoice,
    NewInvoiceItem, NewPaymentIntent, NewSubscription, PaymentIntent, PaymentProvider,
    Subscription, SubscriptionRequest,
};

/// Currency for one-time payments unless overridden.
pub const DEFAULT_CURRENCY: &str = "usd";

/// Facade over a payment provider.
///
/// The provider handle is built by the caller and owned here; nothing is
/// global, so several facades (e.g. test and live keys) can coexist.
pub struct PaymentFacade<P: PaymentProvider> {
    provider: P,
    currency: String,
}

fn require(value: &str, field: Field) -> Result<&str, FacadeError> {
    if value.is_empty() {
        return Err(FacadeError::MissingField(field));
    }
    Ok(value)
}

/// Trial end in epoch seconds, `days` calendar days after `now`.
///
/// Zero days means no trial. A trial ending past the calendar's range is
/// rejected rather than dropped.
pub fn trial_end(now: DateTime<Utc>, days: u32) -> Result<Option<i64>, FacadeError> {
    if days == 0 {
        return Ok(None);
    }
    now.checked_add_days(Days::new(days.into()))
        .map(|end| Some(end.timestamp()))
        .ok_or(FacadeError::TrialDaysOutOfRange)
}

impl<P: PaymentProvider> PaymentFacade<P> {
    /// Creates a facade over the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Sets the currency one-time payments are charged in.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_lowercase();
        self
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Customers
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a customer and returns its id.
    #[instrument(skip(self, input), err(level = "warn"))]
    pub async fn create_customer(&self, input: CustomerInput) -> Result<CustomerId, FacadeError> {
        require(&input.name, Field::Name)?;
        require(&input.email, Field::Email)?;

        let customer = self.provider.create_customer(&input).await?;
        info!(customer_id = %customer.id, "customer created");
        Ok(customer.id)
    }

    #[instrument(skip(self), err(level = "warn"))]
    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer, FacadeError> {
        require(customer_id, Field::CustomerId)?;
        Ok(self.provider.retrieve_customer(customer_id).await?)
    }

    #[instrument(skip(self), err(level = "warn"))]
    pub async fn delete_customer(&self, customer_id: &str) -> Result<DeletedCustomer, FacadeError> {
        require(customer_id, Field::CustomerId)?;
        let deleted = self.provider.delete_customer(customer_id).await?;
        info!("customer deleted");
        Ok(deleted)
    }

    /// Stores a tokenized card on the customer and makes it the invoice default.
    #[instrument(skip(self, token), err(level = "warn"))]
    pub async fn attach_payment(
        &self,
        token: &str,
        customer_id: &str,
    ) -> Result<Customer, FacadeError> {
        require(token, Field::Token)?;
        require(customer_id, Field::CustomerId)?;

        let method = self.provider.create_card_payment_method(token).await?;
        let method = self
            .provider
            .attach_payment_method(method.id.as_str(), customer_id)
            .await?;
        let customer = self
            .provider
            .set_default_payment_method(customer_id, method.id.as_str())
            .await?;

        info!(payment_method_id = %method.id, "default payment method set");
        Ok(customer)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Subscriptions
    // ─────────────────────────────────────────────────────────────────────────────

    /// Subscribes a customer to a price.
    ///
    /// The given payment method must already be the customer's default, so
    /// the first invoice is charged against the instrument the caller expects.
    #[instrument(
        skip(self, req),
        fields(customer_id = %req.customer_id, price_id = %req.price_id),
        err(level = "warn")
    )]
    pub async fn create_subscription(
        &self,
        req: SubscriptionRequest,
    ) -> Result<Subscription, FacadeError> {
        require(&req.customer_id, Field::CustomerId)?;
        require(&req.payment_method_id, Field::PaymentMethodId)?;
        require(&req.price_id, Field::PriceId)?;
        let trial_end = match req.trial_days {
            Some(days) => trial_end(Utc::now(), days)?,
            None => None,
        };

        let customer = self.provider.retrieve_customer(&req.customer_id).await?;
        let on_file = customer.default_payment_method();
        if on_file
            .as_ref()
            .is_none_or(|pm| pm.as_str() != req.payment_method_id)
        {
            return Err(FacadeError::PaymentMethodMismatch {
                on_file: on_file.map(|pm| pm.into_inner()),
            });
        }

        let params = NewSubscription {
            customer_id: req.customer_id,
            price_id: req.price_id,
            trial_end,
        };
        let subscription = self.provider.create_subscription(&params).await?;
        info!(subscription_id = %subscription.id, "subscription created");
        Ok(subscription)
    }

    #[instrument(skip(self), err(level = "warn"))]
    pub async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription, FacadeError> {
        require(subscription_id, Field::SubscriptionId)?;
        Ok(self.provider.retrieve_subscription(subscription_id).await?)
    }

    /// Moves the subscription to a different price, invoicing the proration now.
    #[instrument(skip(self), err(level = "warn"))]
    pub async fn upgrade_subscription(
        &self,
        subscription_id: &str,
        customer_id: &str,
        price_id: &str,
    ) -> Result<Subscription, FacadeError> {
        require(subscription_id, Field::SubscriptionId)?;
        require(customer_id, Field::CustomerId)?;
        require(price_id, Field::PriceId)?;

        let subscription = self.provider.retrieve_subscription(subscription_id).await?;
        if subscription.is_canceling() {
            return Err(FacadeError::SubscriptionCanceled);
        }
        if !subscription.is_owned_by(customer_id) {
            return Err(FacadeError::CustomerMismatch);
        }
        let item = subscription
            .primary_item()
            .ok_or(FacadeError::EmptySubscription)?;
        if item.price.id == price_id {
            return Err(FacadeError::SamePrice);
        }

        let updated = self
            .provider
            .update_subscription_price(subscription_id, item.id.as_str(), price_id)
            .await?;
        info!(from = %item.price.id, to = price_id, "subscription price changed");
        Ok(updated)
    }

    /// Schedules cancellation at the end of the current period.
    #[instrument(skip(self), err(level = "warn"))]
    pub async fn cancel_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Subscription, FacadeError> {
        require(customer_id, Field::CustomerId)?;
        require(subscription_id, Field::SubscriptionId)?;

        let subscription = self.provider.retrieve_subscription(subscription_id).await?;
        if subscription.is_canceling() {
            return Err(FacadeError::SubscriptionCanceled);
        }
        if !subscription.is_owned_by(customer_id) {
            return Err(FacadeError::CustomerMismatch);
        }

        let updated = self
            .provider
            .set_cancel_at_period_end(subscription_id, true)
            .await?;
        info!("subscription set to cancel at period end");
        Ok(updated)
    }

    /// Clears a scheduled cancellation.
    #[instrument(skip(self), err(level = "warn"))]
    pub async fn reactivate_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Subscription, FacadeError> {
        require(subscription_id, Field::SubscriptionId)?;

        let updated = self
            .provider
            .set_cancel_at_period_end(subscription_id, false)
            .await?;
        info!("subscription reactivated");
        Ok(updated)
    }

    /// Bills a one-off price against an active subscription.
    ///
    /// Creates a draft invoice, adds the price as a single item, finalizes it
    /// and confirms the resulting payment intent. A finalized invoice that is
    /// not open (e.g. already paid from a credit balance) is reported as an
    /// error.
    #[instrument(skip(self), err(level = "warn"))]
    pub async fn subscription_addons(
        &self,
        customer_id: &str,
        price_id: &str,
        subscription_id: &str,
    ) -> Result<PaymentIntent, FacadeError> {
        require(customer_id, Field::CustomerId)?;
        require(price_id, Field::PriceId)?;
        require(subscription_id, Field::SubscriptionId)?;

        let customer = self.provider.retrieve_customer(customer_id).await?;
        let subscription = self.provider.retrieve_subscription(subscription_id).await?;

        if !subscription.is_owned_by(customer.id.as_str()) {
            return Err(FacadeError::CustomerMismatch);
        }
        if customer.default_payment_method().is_none() {
            return Err(FacadeError::NoDefaultPaymentMethod);
        }
        if subscription.is_canceling() || !subscription.is_active() {
            return Err(FacadeError::SubscriptionCanceled);
        }

        let draft = self
            .provider
            .create_invoice(customer_id, subscription_id)
            .await?;
        self.provider
            .create_invoice_item(&NewInvoiceItem {
                customer_id: customer_id.to_string(),
                invoice_id: draft.id.to_string(),
                price_id: price_id.to_string(),
                quantity: 1,
            })
            .await?;
        let invoice = self.provider.finalize_invoice(draft.id.as_str()).await?;

        if !invoice.is_open() {
            return Err(FacadeError::InvoiceNotOpen);
        }
        let intent_id = invoice
            .payment_intent
            .as_ref()
            .map(|pi| pi.id().to_string())
            .ok_or(FacadeError::MissingPaymentIntent)?;

        let intent = self.provider.confirm_payment_intent(&intent_id).await?;
        info!(invoice_id = %invoice.id, payment_intent_id = %intent.id, "add-on charged");
        Ok(intent)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payments & invoices
    // ─────────────────────────────────────────────────────────────────────────────

    /// Charges a tokenized card once, without storing it on a customer.
    ///
    /// `amount` is in minor currency units.
    #[instrument(skip(self, token), fields(currency = %self.currency), err(level = "warn"))]
    pub async fn one_time_payment(
        &self,
        token: &str,
        amount: u64,
    ) -> Result<PaymentIntent, FacadeError> {
        require(token, Field::Token)?;
        if amount == 0 {
            return Err(FacadeError::MissingField(Field::Amount));
        }

        let method = self.provider.create_card_payment_method(token).await?;
        let intent = self
            .provider
            .create_payment_intent(&NewPaymentIntent {
                amount,
                currency: self.currency.clone(),
                payment_method_id: method.id.into_inner(),
                confirm: true,
            })
            .await?;
        info!(payment_intent_id = %intent.id, status = ?intent.status, "one-time payment");
        Ok(intent)
    }

    #[instrument(skip(self), err(level = "warn"))]
    pub async fn get_invoices_for_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<Invoice>, FacadeError> {
        require(subscription_id, Field::SubscriptionId)?;
        Ok(self.provider.list_invoices(subscription_id).await?)
    }

    #[instrument(skip(self), err(level = "warn"))]
    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice, FacadeError> {
        require(invoice_id, Field::InvoiceId)?;
        Ok(self.provider.retrieve_invoice(invoice_id).await?)
    }
}
