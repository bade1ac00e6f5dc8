//! Non-URL payload detection (§6). A QR code can carry a Wi-Fi
//! credential, a vCard, an SMS draft, or a payment URI instead of a URL;
//! the core doesn't analyze those payloads, it just recognizes the kind
//! so the host application can route it elsewhere.

const PREFIXES: &[(&str, &str)] = &[
    ("WIFI:", "wifi"),
    ("BEGIN:VCARD", "vcard"),
    ("sms:", "sms"),
    ("bitcoin:", "bitcoin"),
    ("upi:", "upi"),
];

/// Returns the payload kind if `raw` (after trimming whitespace) starts
/// with one of the recognized non-URL scheme prefixes, case-sensitively
/// matching the prefixes as specified.
pub fn detect(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    PREFIXES
        .iter()
        .find(|(prefix, _)| trimmed.starts_with(prefix))
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_wifi_payload() {
        assert_eq!(detect("WIFI:S:MyNetwork;T:WPA;P:secret;;"), Some("wifi"));
    }

    #[test]
    fn detects_vcard_payload() {
        assert_eq!(detect("BEGIN:VCARD\nVERSION:3.0\nEND:VCARD"), Some("vcard"));
    }

    #[test]
    fn detects_sms_and_bitcoin_and_upi() {
        assert_eq!(detect("sms:+15551234567"), Some("sms"));
        assert_eq!(detect("bitcoin:1A1zP1...?amount=0.1"), Some("bitcoin"));
        assert_eq!(detect("upi://pay?pa=merchant@bank"), Some("upi"));
    }

    #[test]
    fn ordinary_url_is_not_a_payload() {
        assert_eq!(detect("https://example.com"), None);
    }
}
