use std::io::{self, Write};

use reqwest::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Url};

use crate::error::NotifyError;
use crate::payload::WebhookMessage;

/// Stand-in destination that must be replaced before anything is sent.
pub const PLACEHOLDER: &str = "%WEBHOOK%";
pub const USER_AGENT: &str = "safe-webhook-tester/1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Placeholder,
    Endpoint(Endpoint),
}

/// An absolute http(s) URL with a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    pub fn parse(raw: &str) -> Result<Self, NotifyError> {
        let url = Url::parse(raw).map_err(|e| NotifyError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(NotifyError::UnsupportedScheme(other.to_string())),
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(NotifyError::MissingHost(raw.to_string()));
        }
        Ok(Endpoint { url })
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    pub fn is_tls(&self) -> bool {
        self.url.scheme() == "https"
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Pick the destination: CLI argument, then config, then the placeholder.
pub fn resolve_target(
    arg: Option<&str>,
    configured: Option<&str>,
) -> Result<Target, NotifyError> {
    // An empty argument counts as no argument
    let raw = arg
        .filter(|s| !s.is_empty())
        .or(configured.filter(|s| !s.is_empty()))
        .unwrap_or(PLACEHOLDER);
    if raw == PLACEHOLDER {
        return Ok(Target::Placeholder);
    }
    Endpoint::parse(raw).map(Target::Endpoint)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Webhook POST completed. status: {}", self.status)?;
        if !self.body.is_empty() {
            writeln!(out, "Response body: {}", self.body)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// Placeholder target, nothing was sent.
    Skipped,
    Delivered(Delivery),
    Failed(NotifyError),
}

impl Outcome {
    /// Without `strict` every outcome exits 0.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !strict {
            return 0;
        }
        match self {
            Outcome::Skipped => 0,
            Outcome::Delivered(d) if d.is_success() => 0,
            Outcome::Delivered(_) => 2,
            Outcome::Failed(_) => 1,
        }
    }

    /// Print the outcome: delivery lines on `out`, warnings and errors through `log`.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Outcome::Skipped => {
                log::warn!(
                    "The webhook URL is still the placeholder {PLACEHOLDER}, not sending. \
                     Pass your webhook URL as the first argument, e.g. \
                     hookping https://discord.com/api/webhooks/ID/TOKEN"
                );
            }
            Outcome::Delivered(delivery) => delivery.write_report(out)?,
            Outcome::Failed(err) if err.is_url_error() => log::error!("{err}, nothing was sent"),
            Outcome::Failed(err) => log::error!("{err}"),
        }
        Ok(())
    }

    /// [`Outcome::report`] and flush; a write failure (closed pipe) is logged, not returned.
    pub fn emit<W: Write>(&self, out: &mut W) {
        if let Err(err) = self.report(out).and_then(|_| out.flush()) {
            log::error!("Writing outcome failed: {err}");
        }
    }
}

pub struct Notifier {
    client: Client,
}

impl Notifier {
    pub fn new() -> Result<Self, NotifyError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()?;
        Ok(Notifier { client })
    }

    /// Send `message` once. No retries, no timeout beyond the transport's own.
    pub async fn send(
        &self,
        endpoint: &Endpoint,
        message: &WebhookMessage<'_>,
    ) -> Result<Delivery, NotifyError> {
        let body = message.to_body()?;
        log::info!(
            "POST {} byte payload to {} {}{} (tls: {})",
            body.len(),
            endpoint.host(),
            endpoint.path(),
            endpoint.query().map(|q| format!("?{q}")).unwrap_or_default(),
            endpoint.is_tls()
        );

        let mut response = self
            .client
            .post(endpoint.url().clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let mut buf = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            log::debug!("Received {} byte chunk", chunk.len());
            buf.extend_from_slice(&chunk);
        }

        Ok(Delivery {
            status,
            body: String::from_utf8_lossy(&buf).into_owned(),
        })
    }
}

/// Resolve, send and fold every failure into an [`Outcome`].
pub async fn notify(arg: Option<&str>, configured: Option<&str>) -> Outcome {
    let endpoint = match resolve_target(arg, configured) {
        Ok(Target::Placeholder) => return Outcome::Skipped,
        Ok(Target::Endpoint(endpoint)) => endpoint,
        Err(err) => return Outcome::Failed(err),
    };
    let notifier = match Notifier::new() {
        Ok(n) => n,
        Err(err) => return Outcome::Failed(err),
    };
    match notifier.send(&endpoint, &WebhookMessage::hello()).await {
        Ok(delivery) => Outcome::Delivered(delivery),
        Err(err) => Outcome::Failed(err),
    }
}
