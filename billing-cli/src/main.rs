//! Billing CLI
//!
//! Runs one facade operation against Stripe and prints the result envelope
//! as JSON. Logs go to stderr so stdout stays machine-readable.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billing_hex::PaymentFacade;
use billing_stripe::StripeClient;
use billing_types::{
    CustomerInput, Envelope, EnvelopePayload, SubscriptionRequest, parse_trial_days,
};

#[derive(Parser)]
#[command(name = "billing")]
#[command(author, version, about = "Customer, subscription and invoice operations on Stripe", long_about = None)]
struct Cli {
    /// Stripe secret key [default: $STRIPE_SECRET_KEY]
    #[arg(long)]
    secret_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Customer operations
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Subscription operations
    Subscription {
        #[command(subcommand)]
        action: SubscriptionCommands,
    },
    /// Invoice lookups
    Invoice {
        #[command(subcommand)]
        action: InvoiceCommands,
    },
    /// Charge a card token once
    Pay {
        /// Card token from the client-side tokenizer
        #[arg(long)]
        token: String,
        /// Amount in minor currency units (e.g. cents)
        #[arg(long)]
        amount: u64,
    },
}

#[derive(Subcommand)]
enum CustomerCommands {
    /// Create a new customer
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Get customer details
    Get { id: String },
    /// Delete a customer
    Delete { id: String },
    /// Attach a card token and make it the default payment method
    AttachPayment {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        token: String,
    },
}

#[derive(Subcommand)]
enum SubscriptionCommands {
    /// Subscribe a customer to a price
    Create {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        price: String,
        /// Must be the customer's current default payment method
        #[arg(long)]
        payment_method: String,
        /// Free trial length in days
        #[arg(long, default_value = "")]
        trial_days: String,
    },
    /// Get subscription details
    Get { id: String },
    /// Move a subscription to a new price
    Upgrade {
        #[arg(long)]
        subscription: String,
        #[arg(long)]
        customer: String,
        #[arg(long)]
        price: String,
    },
    /// Cancel at the end of the current period
    Cancel {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        subscription: String,
    },
    /// Undo a scheduled cancellation
    Reactivate { id: String },
    /// Bill a one-off price against the subscription
    Addon {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        subscription: String,
    },
}

#[derive(Subcommand)]
enum InvoiceCommands {
    /// List all invoices of a subscription
    List {
        #[arg(long)]
        subscription: String,
    },
    /// Get invoice details
    Get { id: String },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,billing_hex=info,billing_stripe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Prints the envelope and reports whether it was a success.
fn emit<T: EnvelopePayload>(envelope: Envelope<T>) -> Result<bool> {
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(envelope.status())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = config::Config::from_env(cli.secret_key)?;

    let stripe = config.stripe();
    tracing::debug!(test_mode = stripe.is_test_mode(), currency = %config.currency, "client configured");
    let client = StripeClient::from_config(stripe)?;
    let facade = PaymentFacade::new(client).with_currency(&config.currency);

    let ok = match cli.command {
        Commands::Customer { action } => match action {
            CustomerCommands::Create { name, email } => emit(
                facade
                    .create_customer(CustomerInput { name, email })
                    .await
                    .into(),
            )?,
            CustomerCommands::Get { id } => emit(facade.get_customer(&id).await.into())?,
            CustomerCommands::Delete { id } => emit(facade.delete_customer(&id).await.into())?,
            CustomerCommands::AttachPayment { customer, token } => {
                emit(facade.attach_payment(&token, &customer).await.into())?
            }
        },

        Commands::Subscription { action } => match action {
            SubscriptionCommands::Create {
                customer,
                price,
                payment_method,
                trial_days,
            } => {
                let result = match parse_trial_days(&trial_days) {
                    Ok(trial_days) => {
                        facade
                            .create_subscription(SubscriptionRequest {
                                customer_id: customer,
                                price_id: price,
                                payment_method_id: payment_method,
                                trial_days,
                            })
                            .await
                    }
                    Err(e) => Err(e),
                };
                emit(result.into())?
            }
            SubscriptionCommands::Get { id } => emit(facade.get_subscription(&id).await.into())?,
            SubscriptionCommands::Upgrade {
                subscription,
                customer,
                price,
            } => emit(
                facade
                    .upgrade_subscription(&subscription, &customer, &price)
                    .await
                    .into(),
            )?,
            SubscriptionCommands::Cancel {
                customer,
                subscription,
            } => emit(
                facade
                    .cancel_subscription(&customer, &subscription)
                    .await
                    .into(),
            )?,
            SubscriptionCommands::Reactivate { id } => {
                emit(facade.reactivate_subscription(&id).await.into())?
            }
            SubscriptionCommands::Addon {
                customer,
                price,
                subscription,
            } => emit(
                facade
                    .subscription_addons(&customer, &price, &subscription)
                    .await
                    .into(),
            )?,
        },

        Commands::Invoice { action } => match action {
            InvoiceCommands::List { subscription } => emit(
                facade
                    .get_invoices_for_subscription(&subscription)
                    .await
                    .into(),
            )?,
            InvoiceCommands::Get { id } => emit(facade.get_invoice(&id).await.into())?,
        },

        Commands::Pay { token, amount } => {
            emit(facade.one_time_payment(&token, amount).await.into())?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
