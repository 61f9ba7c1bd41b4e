//! 凭据导出边界
//!
//! 批准医生后管理端需要把签发的凭据交给申请人。导出走可替换的
//! 输出端：首选端失败时告警并退回备用端，两端都失败才报错。

use portal_core::{Credentials, PortalError, Result};

/// 凭据输出端
pub trait CredentialSink {
    fn copy(&self, text: &str) -> Result<()>;
}

/// 标准输出端，备用方案
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl CredentialSink for StdoutSink {
    fn copy(&self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }
}

/// 格式化凭据块并导出，首选端失败时退回备用端
pub fn export_credentials(
    credentials: &Credentials,
    primary: &dyn CredentialSink,
    fallback: &dyn CredentialSink,
) -> Result<()> {
    let block = format!(
        "Email: {}\nPassword: {}",
        credentials.email, credentials.password
    );

    match primary.copy(&block) {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::warn!("Primary credential sink failed: {}, using fallback", err);
            fallback.copy(&block)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        copied: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                copied: RefCell::new(Vec::new()),
            }
        }
    }

    impl CredentialSink for RecordingSink {
        fn copy(&self, text: &str) -> Result<()> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl CredentialSink for FailingSink {
        fn copy(&self, _text: &str) -> Result<()> {
            Err(PortalError::Internal("clipboard unavailable".to_string()))
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "james.wilson@email.com".to_string(),
            password: "aB3xK9mQ42".to_string(),
        }
    }

    #[test]
    fn test_export_uses_primary_sink() {
        let primary = RecordingSink::new();
        let fallback = RecordingSink::new();

        export_credentials(&credentials(), &primary, &fallback).unwrap();

        assert_eq!(
            primary.copied.borrow().as_slice(),
            ["Email: james.wilson@email.com\nPassword: aB3xK9mQ42"]
        );
        assert!(fallback.copied.borrow().is_empty());
    }

    #[test]
    fn test_export_falls_back_when_primary_fails() {
        let fallback = RecordingSink::new();

        export_credentials(&credentials(), &FailingSink, &fallback).unwrap();

        assert_eq!(fallback.copied.borrow().len(), 1);
    }

    #[test]
    fn test_export_errors_when_both_fail() {
        assert!(export_credentials(&credentials(), &FailingSink, &FailingSink).is_err());
    }
}
