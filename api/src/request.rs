//! Facts about the client derived from request headers.
//!
//! [`session_member_key`] is for login callers that bind a session to the
//! client.

use std::net::SocketAddr;

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// First address of `X-Forwarded-For`, else the socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    let forwarded = headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    match forwarded {
        Some(ip) => Some(ip.to_string()),
        None => peer.map(|addr| addr.ip().to_string()),
    }
}

pub fn user_agent(headers: &HeaderMap) -> &str {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Pc,
    Mobile,
    Tablet,
    Unknown,
}

impl DeviceClass {
    pub fn from_user_agent(ua: &str) -> Self {
        if ua.is_empty() {
            return DeviceClass::Unknown;
        }
        if ua.contains("iPad") || ua.contains("Tablet") || (ua.contains("Android") && !ua.contains("Mobile")) {
            return DeviceClass::Tablet;
        }
        if ua.contains("Mobi") || ua.contains("iPhone") || ua.contains("Android") {
            return DeviceClass::Mobile;
        }
        if ["Windows", "Macintosh", "X11", "Linux", "CrOS"]
            .iter()
            .any(|needle| ua.contains(needle))
        {
            return DeviceClass::Pc;
        }
        DeviceClass::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Pc => "pc",
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Unknown => "unknown",
        }
    }

    /// Phones and tablets both get the mobile layout.
    pub fn wants_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile | DeviceClass::Tablet)
    }
}

pub fn browser_family(ua: &str) -> &'static str {
    // Order matters: most browsers also claim to be Chrome and Safari.
    if ua.contains("Edg/") {
        "Edge"
    } else if ua.contains("OPR/") || ua.contains("Opera") {
        "Opera"
    } else if ua.contains("SamsungBrowser/") {
        "Samsung Internet"
    } else if ua.contains("Whale/") {
        "Whale"
    } else if ua.contains("Firefox/") {
        "Firefox"
    } else if ua.contains("Chrome/") || ua.contains("CriOS/") {
        "Chrome"
    } else if ua.contains("Safari/") {
        "Safari"
    } else if ua.contains("MSIE") || ua.contains("Trident/") {
        "IE"
    } else {
        "Other"
    }
}

pub fn os_family(ua: &str) -> &'static str {
    if ua.contains("Windows") {
        "Windows"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "iOS"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("Mac OS X") {
        "Mac OS X"
    } else if ua.contains("CrOS") {
        "Chrome OS"
    } else if ua.contains("Linux") {
        "Linux"
    } else {
        "Other"
    }
}

/// Fingerprint stored in the session next to a logged-in member, tying the
/// session to the member's join time, address and browser.
pub fn session_member_key(mb_datetime: &str, client_ip: &str, user_agent: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(mb_datetime.as_bytes());
    hasher.update(client_ip.as_bytes());
    hasher.update(user_agent.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const CHROME_ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const SAMSUNG_ANDROID_PHONE: &str = "Mozilla/5.0 (Linux; Android 13; SM-S918N) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/23.0 Chrome/115.0.0.0 Mobile Safari/537.36";
    const FIREFOX_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR_HEADER, "203.0.113.7, 10.0.0.1".parse().unwrap());

        let peer: SocketAddr = "10.0.0.1:5555".parse().unwrap();
        assert_eq!(client_ip(&headers, Some(peer)), Some("203.0.113.7".to_string()));
    }

    #[test]
    fn test_client_ip_falls_back_to_peer() {
        let headers = HeaderMap::new();
        let peer: SocketAddr = "192.168.0.9:443".parse().unwrap();

        assert_eq!(client_ip(&headers, Some(peer)), Some("192.168.0.9".to_string()));
        assert_eq!(client_ip(&headers, None), None);
    }

    #[test]
    fn test_client_ip_ignores_empty_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR_HEADER, "".parse().unwrap());

        let peer: SocketAddr = "192.168.0.9:443".parse().unwrap();
        assert_eq!(client_ip(&headers, Some(peer)), Some("192.168.0.9".to_string()));
    }

    #[test]
    fn test_device_class() {
        assert_eq!(DeviceClass::from_user_agent(CHROME_WINDOWS), DeviceClass::Pc);
        assert_eq!(DeviceClass::from_user_agent(SAFARI_IPHONE), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(CHROME_ANDROID_TABLET), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_user_agent(SAMSUNG_ANDROID_PHONE), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(FIREFOX_LINUX), DeviceClass::Pc);
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Unknown);
        assert_eq!(DeviceClass::from_user_agent("curl/8.0"), DeviceClass::Unknown);

        assert!(DeviceClass::Tablet.wants_mobile());
        assert!(!DeviceClass::Pc.wants_mobile());
    }

    #[test]
    fn test_browser_and_os_family() {
        assert_eq!(browser_family(CHROME_WINDOWS), "Chrome");
        assert_eq!(os_family(CHROME_WINDOWS), "Windows");

        assert_eq!(browser_family(SAFARI_IPHONE), "Safari");
        assert_eq!(os_family(SAFARI_IPHONE), "iOS");

        assert_eq!(browser_family(SAMSUNG_ANDROID_PHONE), "Samsung Internet");
        assert_eq!(os_family(SAMSUNG_ANDROID_PHONE), "Android");

        assert_eq!(browser_family(FIREFOX_LINUX), "Firefox");
        assert_eq!(os_family(FIREFOX_LINUX), "Linux");

        assert_eq!(browser_family(""), "Other");
        assert_eq!(os_family(""), "Other");
    }

    #[test]
    fn test_session_member_key() {
        let key = session_member_key("2024-03-01 09:00:00", "10.0.0.1", "agent");

        assert_eq!(key.len(), 64);
        assert_eq!(key, session_member_key("2024-03-01 09:00:00", "10.0.0.1", "agent"));
        assert_ne!(key, session_member_key("2024-03-01 09:00:00", "10.0.0.2", "agent"));
    }

    #[test]
    fn test_user_agent_missing() {
        assert_eq!(user_agent(&HeaderMap::new()), "");
    }
}
