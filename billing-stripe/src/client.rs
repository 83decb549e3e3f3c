//! Stripe HTTP client and `PaymentProvider` implementation.

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use billing_types::{
    Customer, CustomerInput, DeletedCustomer, Invoice, InvoiceItem, NewInvoiceItem,
    NewPaymentIntent, NewSubscription, PaymentIntent, PaymentMethod, PaymentProvider,
    ProviderError, Subscription,
};

use crate::config::StripeConfig;
use crate::error::{api_error, transport};

/// Form parameters in Stripe's bracket notation.
type Params<'a> = Vec<(&'a str, String)>;

/// Largest page size Stripe allows for list endpoints.
const PAGE_LIMIT: &str = "100";

/// One page of a Stripe list endpoint.
#[derive(Debug, Deserialize)]
struct List<T> {
    data: Vec<T>,
    #[serde(default)]
    has_more: bool,
}

/// Stripe API client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct StripeClient {
    base_url: Url,
    secret_key: String,
    api_version: String,
    http: Client,
}

impl StripeClient {
    /// Builds a client for the live API from a secret key.
    pub fn connect(secret_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::from_config(StripeConfig::new(secret_key))
    }

    /// Builds a client from explicit settings.
    pub fn from_config(config: StripeConfig) -> Result<Self, ProviderError> {
        if config.secret_key.trim().is_empty() {
            return Err(ProviderError::Config("secret key is required.".into()));
        }

        let base_url = Url::parse(&config.api_base).map_err(|e| {
            ProviderError::Config(format!("Invalid API base URL {}: {}", config.api_base, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::Config(format!(
                "Invalid API base URL {}",
                config.api_base
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport)?;

        Ok(Self {
            base_url,
            secret_key: config.secret_key,
            api_version: config.api_version,
            http,
        })
    }

    /// `<base>/v1/<segments...>`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("v1").extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http
            .request(method, self.url(segments))
            .bearer_auth(&self.secret_key)
            .header("Stripe-Version", &self.api_version)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        self.send(self.request(Method::GET, segments).query(query))
            .await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &Params<'_>,
    ) -> Result<T, ProviderError> {
        self.send(self.request(Method::POST, segments).form(params))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ProviderError> {
        self.send(self.request(Method::DELETE, segments)).await
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ProviderError> {
        let req = req.build().map_err(transport)?;
        let method = req.method().clone();
        let path = req.url().path().to_string();

        let resp = self.http.execute(req).await.map_err(|e| {
            warn!(%method, %path, error = %e, "Stripe request failed");
            transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;
        debug!(%method, %path, status = status.as_u16(), "Stripe response");

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
        } else {
            let err = api_error(status.as_u16(), &body);
            warn!(%method, %path, status = status.as_u16(), error = %err, "Stripe API error");
            Err(err)
        }
    }
}

#[async_trait::async_trait]
impl PaymentProvider for StripeClient {
    // ─────────────────────────────────────────────────────────────────────────────
    // Customers
    // ─────────────────────────────────────────────────────────────────────────────

    #[instrument(skip(self, input))]
    async fn create_customer(&self, input: &CustomerInput) -> Result<Customer, ProviderError> {
        let params = vec![("name", input.name.clone()), ("email", input.email.clone())];
        self.post(&["customers"], &params).await
    }

    #[instrument(skip(self))]
    async fn retrieve_customer(&self, customer_id: &str) -> Result<Customer, ProviderError> {
        self.get(&["customers", customer_id], &[]).await
    }

    #[instrument(skip(self))]
    async fn delete_customer(&self, customer_id: &str) -> Result<DeletedCustomer, ProviderError> {
        self.delete(&["customers", customer_id]).await
    }

    #[instrument(skip(self))]
    async fn set_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProviderError> {
        let params = vec![(
            "invoice_settings[default_payment_method]",
            payment_method_id.to_string(),
        )];
        self.post(&["customers", customer_id], &params).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment methods & intents
    // ─────────────────────────────────────────────────────────────────────────────

    #[instrument(skip(self, token))]
    async fn create_card_payment_method(
        &self,
        token: &str,
    ) -> Result<PaymentMethod, ProviderError> {
        let params = vec![("type", "card".to_string()), ("card[token]", token.to_string())];
        self.post(&["payment_methods"], &params).await
    }

    #[instrument(skip(self))]
    async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        customer_id: &str,
    ) -> Result<PaymentMethod, ProviderError> {
        let params = vec![("customer", customer_id.to_string())];
        self.post(&["payment_methods", payment_method_id, "attach"], &params)
            .await
    }

    #[instrument(skip(self, params), fields(amount = params.amount, currency = %params.currency))]
    async fn create_payment_intent(
        &self,
        params: &NewPaymentIntent,
    ) -> Result<PaymentIntent, ProviderError> {
        let params = vec![
            ("amount", params.amount.to_string()),
            ("currency", params.currency.clone()),
            ("payment_method", params.payment_method_id.clone()),
            ("confirm", params.confirm.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];
        self.post(&["payment_intents"], &params).await
    }

    #[instrument(skip(self))]
    async fn confirm_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<PaymentIntent, ProviderError> {
        self.post(&["payment_intents", payment_intent_id, "confirm"], &Vec::new())
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Subscriptions
    // ─────────────────────────────────────────────────────────────────────────────

    #[instrument(skip(self, params), fields(customer_id = %params.customer_id))]
    async fn create_subscription(
        &self,
        params: &NewSubscription,
    ) -> Result<Subscription, ProviderError> {
        let mut form = vec![
            ("customer", params.customer_id.clone()),
            ("items[0][price]", params.price_id.clone()),
            ("expand[]", "latest_invoice.payment_intent".to_string()),
        ];
        if let Some(trial_end) = params.trial_end {
            form.push(("trial_end", trial_end.to_string()));
        }
        self.post(&["subscriptions"], &form).await
    }

    #[instrument(skip(self))]
    async fn retrieve_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Subscription, ProviderError> {
        self.get(&["subscriptions", subscription_id], &[]).await
    }

    #[instrument(skip(self))]
    async fn update_subscription_price(
        &self,
        subscription_id: &str,
        item_id: &str,
        price_id: &str,
    ) -> Result<Subscription, ProviderError> {
        let params = vec![
            ("items[0][id]", item_id.to_string()),
            ("items[0][price]", price_id.to_string()),
            ("proration_behavior", "always_invoice".to_string()),
        ];
        self.post(&["subscriptions", subscription_id], &params).await
    }

    #[instrument(skip(self))]
    async fn set_cancel_at_period_end(
        &self,
        subscription_id: &str,
        cancel: bool,
    ) -> Result<Subscription, ProviderError> {
        let params = vec![("cancel_at_period_end", cancel.to_string())];
        self.post(&["subscriptions", subscription_id], &params).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Invoices
    // ─────────────────────────────────────────────────────────────────────────────

    /// Follows `has_more` until every invoice of the subscription is collected.
    #[instrument(skip(self))]
    async fn list_invoices(&self, subscription_id: &str) -> Result<Vec<Invoice>, ProviderError> {
        let mut invoices: Vec<Invoice> = Vec::new();
        loop {
            let cursor = invoices.last().map(|inv| inv.id.to_string());
            let mut query = vec![("subscription", subscription_id), ("limit", PAGE_LIMIT)];
            if let Some(cursor) = cursor.as_deref() {
                query.push(("starting_after", cursor));
            }

            let page: List<Invoice> = self.get(&["invoices"], &query).await?;
            let done = !page.has_more || page.data.is_empty();
            invoices.extend(page.data);
            if done {
                break;
            }
        }
        debug!(count = invoices.len(), "invoices listed");
        Ok(invoices)
    }

    #[instrument(skip(self))]
    async fn retrieve_invoice(&self, invoice_id: &str) -> Result<Invoice, ProviderError> {
        self.get(&["invoices", invoice_id], &[]).await
    }

    #[instrument(skip(self))]
    async fn create_invoice(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Invoice, ProviderError> {
        let params = vec![
            ("customer", customer_id.to_string()),
            ("subscription", subscription_id.to_string()),
        ];
        self.post(&["invoices"], &params).await
    }

    #[instrument(skip(self, params), fields(invoice_id = %params.invoice_id))]
    async fn create_invoice_item(
        &self,
        params: &NewInvoiceItem,
    ) -> Result<InvoiceItem, ProviderError> {
        let params = vec![
            ("customer", params.customer_id.clone()),
            ("invoice", params.invoice_id.clone()),
            ("price", params.price_id.clone()),
            ("quantity", params.quantity.to_string()),
        ];
        self.post(&["invoiceitems"], &params).await
    }

    #[instrument(skip(self))]
    async fn finalize_invoice(&self, invoice_id: &str) -> Result<Invoice, ProviderError> {
        self.post(&["invoices", invoice_id, "finalize"], &Vec::new())
            .await
    }
}
