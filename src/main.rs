use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use swish_client::{
    logging::{try_init_tracing, LogFormat},
    models::{PaymentRequestParams, RefundParams, DEFAULT_CURRENCY},
    SwishClient, SwishConfig, SwishError,
};

#[derive(Parser)]
#[command(version, about = "Create and track Swish payments")]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a payer to approve a payment
    PaymentRequest {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        payer_alias: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        callback_url: Option<String>,
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long)]
        payee_alias: Option<String>,
    },
    /// Refund a completed payment
    Refund {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        original_payment_reference: String,
        #[arg(long)]
        payer_alias: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        callback_url: Option<String>,
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Fetch the status of a payment request or refund
    Status {
        /// Location returned when the resource was created
        location: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    try_init_tracing(cli.log_format)?;

    let config = SwishConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    tracing::info!(api_base_url = %config.api_base_url, "Configuration loaded");

    let client = SwishClient::from_config(&config)?;

    let outcome = match cli.command {
        Command::PaymentRequest {
            reference,
            payer_alias,
            amount,
            callback_url,
            currency,
            message,
            payee_alias,
        } => {
            let params = PaymentRequestParams {
                reference,
                payer_alias,
                amount,
                callback_url,
                currency,
                message,
                payee_alias,
            };
            client
                .create_payment_request(&params)
                .await
                .map(|r| serde_json::json!(r))
        }
        Command::Refund {
            reference,
            original_payment_reference,
            payer_alias,
            amount,
            callback_url,
            currency,
            message,
        } => {
            let params = RefundParams {
                reference,
                original_payment_reference,
                payer_alias,
                amount,
                callback_url,
                currency,
                message,
            };
            client
                .create_refund(&params)
                .await
                .map(|r| serde_json::json!(r))
        }
        Command::Status { location } => client.get_status(&location).await,
    };

    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(SwishError::Validation(e)) => {
            for error in &e.errors {
                eprintln!(
                    "{}: {}",
                    error.error_code,
                    error.display_message().unwrap_or("Unknown error")
                );
            }
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
