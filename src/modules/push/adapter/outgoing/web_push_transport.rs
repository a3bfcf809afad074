use async_trait::async_trait;
use std::env;
use web_push::{
    ContentEncoding, IsahcWebPushClient, PartialVapidSignatureBuilder, SubscriptionInfo,
    VapidSignatureBuilder, WebPushClient, WebPushError, WebPushMessage, WebPushMessageBuilder,
    URL_SAFE_NO_PAD,
};

use crate::push::application::ports::outgoing::{
    PushSubscriptionRecord, PushTransport, PushTransportError,
};

pub const DEFAULT_VAPID_SUBJECT: &str = "mailto:contact@fi-khidmatik.com";

#[derive(Debug, Clone)]
pub struct VapidConfig {
    pub public_key: String,
    pub private_key: String,
    pub subject: String,
}

impl VapidConfig {
    /// `None` when either key is missing; push is then disabled.
    pub fn from_env() -> Option<Self> {
        let public_key = env::var("VAPID_PUBLIC_KEY").ok().filter(|k| !k.is_empty())?;
        let private_key = env::var("VAPID_PRIVATE_KEY").ok().filter(|k| !k.is_empty())?;
        let subject = env::var("VAPID_EMAIL").unwrap_or_else(|_| DEFAULT_VAPID_SUBJECT.to_string());

        Some(Self {
            public_key,
            private_key,
            subject,
        })
    }
}

pub struct WebPushTransport {
    signer: PartialVapidSignatureBuilder,
    subject: String,
    client: IsahcWebPushClient,
}

impl WebPushTransport {
    /// Decodes the VAPID private key (URL-safe base64, no padding) up front,
    /// so a bad key is reported at startup rather than on every send.
    pub fn new(config: &VapidConfig) -> Result<Self, PushTransportError> {
        let signer = VapidSignatureBuilder::from_base64_no_sub(&config.private_key, URL_SAFE_NO_PAD)
            .map_err(|e| PushTransportError::Failed(format!("invalid VAPID private key: {e}")))?;
        let client =
            IsahcWebPushClient::new().map_err(|e| PushTransportError::Failed(e.to_string()))?;

        Ok(Self {
            signer,
            subject: config.subject.clone(),
            client,
        })
    }

    fn message(
        &self,
        info: &SubscriptionInfo,
        payload: &[u8],
    ) -> Result<WebPushMessage, PushTransportError> {
        let mut signature = self.signer.clone().add_sub_info(info);
        signature.add_claim("sub", self.subject.as_str());
        let signature = signature.build().map_err(map_web_push_error)?;

        let mut builder = WebPushMessageBuilder::new(info);
        builder.set_payload(ContentEncoding::Aes128Gcm, payload);
        builder.set_vapid_signature(signature);
        builder.build().map_err(map_web_push_error)
    }
}

fn map_web_push_error(err: WebPushError) -> PushTransportError {
    match err {
        WebPushError::EndpointNotFound => PushTransportError::Gone(404),
        WebPushError::EndpointNotValid => PushTransportError::Gone(410),
        other => PushTransportError::Failed(other.to_string()),
    }
}

#[async_trait]
impl PushTransport for WebPushTransport {
    async fn send(
        &self,
        subscription: &PushSubscriptionRecord,
        payload: &[u8],
    ) -> Result<(), PushTransportError> {
        let info = SubscriptionInfo::new(
            &subscription.endpoint,
            &subscription.p256dh,
            &subscription.auth,
        );

        let message = self.message(&info, payload)?;

        self.client.send(message).await.map_err(map_web_push_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // P-256 test key and browser subscription published with web-push.
    const PRIVATE_KEY: &str = "IQ9Ur0ykXoHS9gzfYX0aBjy9lvdrjx_PFUXmie9YRcY";
    const P256DH: &str = "BH1HTeKM7-NwaLGHEqxeu2IamQaVVLkcsFHPIHmsCnqxcBHPQBprF41bEMOr3O1hUQ2jU1opNEm1F_lZV_sxMP8";
    const AUTH: &str = "sBXU5_tIYz-5w7G2B25BEw";

    fn config(private_key: &str) -> VapidConfig {
        VapidConfig {
            public_key: "unused-by-transport".to_string(),
            private_key: private_key.to_string(),
            subject: DEFAULT_VAPID_SUBJECT.to_string(),
        }
    }

    #[test]
    fn builds_signed_message_for_subscription() {
        let transport = WebPushTransport::new(&config(PRIVATE_KEY)).unwrap();
        let info = SubscriptionInfo::new(
            "https://updates.push.services.mozilla.com/wpush/v2/abc",
            P256DH,
            AUTH,
        );

        let message = transport
            .message(&info, r#"{"title":"Nouvelle réservation"}"#.as_bytes())
            .unwrap();

        assert_eq!(
            message.endpoint.to_string(),
            "https://updates.push.services.mozilla.com/wpush/v2/abc"
        );
        assert!(message.payload.is_some());
    }

    #[test]
    fn bad_private_key_fails_at_construction() {
        let result = WebPushTransport::new(&config("not base64 at all!"));
        assert!(matches!(result, Err(PushTransportError::Failed(_))));
    }

    #[test]
    fn unspecified_errors_are_plain_failures() {
        assert!(matches!(
            map_web_push_error(WebPushError::Unspecified),
            PushTransportError::Failed(_)
        ));
    }
}
