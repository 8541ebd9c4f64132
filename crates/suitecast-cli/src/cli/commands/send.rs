use std::sync::Arc;

use anyhow::Context;
use suitecast_core::{
    load_options, load_results, MessageComposer, Notifier, NotifyError, ReportPortalClient,
    TransportConfig, WebhookTransport,
};
use tracing::info;

use super::super::args::SendArgs;
use crate::exit_codes::SUCCESS;

pub async fn run(args: SendArgs) -> anyhow::Result<i32> {
    match send(&args).await {
        Ok(code) => Ok(code),
        Err(SendError::Notify(e)) => {
            eprintln!("error: {}", e);
            Ok(e.exit_code())
        }
        Err(SendError::Other(e)) => Err(e),
    }
}

enum SendError {
    Notify(NotifyError),
    Other(anyhow::Error),
}

impl From<NotifyError> for SendError {
    fn from(e: NotifyError) -> Self {
        Self::Notify(e)
    }
}

impl From<anyhow::Error> for SendError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e)
    }
}

async fn send(args: &SendArgs) -> Result<i32, SendError> {
    let mut options = load_options(&args.config)?;
    if let Some(report_type) = &args.report_type {
        options.report_type = Some(report_type.clone());
    }
    let results = load_results(&args.results)?;

    let config = TransportConfig::from_env();
    let composer = if args.no_analysis {
        MessageComposer::without_analysis()
    } else {
        let client = ReportPortalClient::new(&config)
            .map_err(|e| NotifyError::Config {
                message: e.to_string(),
            })?;
        MessageComposer::new(Arc::new(client))
    };

    if args.dry_run {
        match composer.compose_for(&options, &results).await? {
            Some(payload) => {
                let json = serde_json::to_string_pretty(&payload)
                    .context("failed to serialize payload")?;
                println!("{}", json);
            }
            None => eprintln!("nothing to send for report type '{}'", options.report_type()),
        }
        return Ok(SUCCESS);
    }

    let transport = WebhookTransport::new(&config)?;
    let notifier = Notifier::new(composer, Arc::new(transport));
    match notifier.send(&options, &results).await? {
        Some(receipt) => info!(status = receipt.status, "notification sent"),
        None => info!(report_type = options.report_type(), "nothing to send"),
    }
    Ok(SUCCESS)
}
