//! SMTP delivery.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{debug, info};

use super::{EmailFormat, Notifier, OutgoingEmail};
use crate::config::Config;
use crate::error_handling::NotificationError;

/// Sends notifications through an SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Option<String>,
    to: Option<String>,
}

impl SmtpNotifier {
    /// Builds the transport from the SMTP options.
    ///
    /// `smtp_secure` selects implicit TLS (usually port 465). Otherwise the
    /// connection starts in plain text and upgrades with STARTTLS when the
    /// server offers it. Credentials are sent only when a user is configured.
    ///
    /// # Errors
    ///
    /// Returns the lettre error if the host cannot be used for TLS.
    pub fn from_config(config: &Config) -> Result<Self, lettre::transport::smtp::Error> {
        let builder = if config.smtp_secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            let tls = TlsParameters::new(config.smtp_host.clone())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .tls(Tls::Opportunistic(tls))
        };

        let mut builder = builder.port(config.smtp_port);
        if let Some(user) = &config.smtp_user {
            let password = config.smtp_password.clone().unwrap_or_default();
            builder = builder.credentials(Credentials::new(user.clone(), password));
        }

        info!(
            "SMTP transport configured for {}:{} (secure: {})",
            config.smtp_host, config.smtp_port, config.smtp_secure
        );

        Ok(Self {
            transport: builder.build(),
            from: config.smtp_from.clone(),
            to: config.notification_email.clone(),
        })
    }
}

/// Parses a configured address, accepting both `ops@example.com` and
/// `Survey Bot <ops@example.com>`.
pub(crate) fn parse_mailbox(
    field: &'static str,
    value: Option<&str>,
) -> Result<Mailbox, NotificationError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(NotificationError::MissingAddress(field))?;

    value
        .parse::<Mailbox>()
        .map_err(|e| NotificationError::InvalidAddress {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Assembles the MIME message for `email`.
pub(crate) fn build_message(
    from: Mailbox,
    to: Mailbox,
    email: OutgoingEmail,
) -> Result<Message, NotificationError> {
    let content_type = match email.format {
        EmailFormat::Html => ContentType::TEXT_HTML,
        EmailFormat::Text => ContentType::TEXT_PLAIN,
    };

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject)
        .header(content_type)
        .body(email.body)?;
    Ok(message)
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        let from = parse_mailbox("SMTP_FROM", self.from.as_deref())?;
        let to = parse_mailbox("NOTIFICATION_EMAIL", self.to.as_deref())?;
        let message = build_message(from, to, email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| NotificationError::TransportError(e.to_string()))?;
        debug!("SMTP server replied {}", response.code());
        Ok(())
    }
}
