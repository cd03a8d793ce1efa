pub mod context;
pub mod storage;

/// Capability supplying the current Basic authorization value on demand.
/// API modules depend on this interface, never on a concrete store.
pub trait CredentialProvider {
    fn basic_credential(&self) -> Option<String>;
}

/// Production provider: reads localStorage freshly on every call, so a
/// credential change in another tab is picked up by the next request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialProvider for LocalStorageCredentials {
    fn basic_credential(&self) -> Option<String> {
        storage::get_credential()
    }
}

/// Authorization header value for the given provider. A missing
/// credential yields an empty Basic value; the backend rejects it.
pub fn basic_header(creds: &impl CredentialProvider) -> String {
    format!("Basic {}", creds.basic_credential().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCredentials(Option<String>);

    impl CredentialProvider for FixedCredentials {
        fn basic_credential(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_basic_header_from_provider() {
        let creds = FixedCredentials(Some("YWRtaW46YWRtaW4=".to_string()));
        assert_eq!(basic_header(&creds), "Basic YWRtaW46YWRtaW4=");
    }

    #[test]
    fn test_basic_header_without_credential() {
        let creds = FixedCredentials(None);
        assert_eq!(basic_header(&creds), "Basic ");
    }
}
