use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("failed to read {what} from {path}: {source}")]
    Read {
        what: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} does not contain a PEM encoded {what}")]
    NotPem { what: &'static str, path: PathBuf },

    #[error("--cert and --key must be provided together")]
    Incomplete,

    #[error("--chain requires --cert and --key")]
    ChainWithoutCertificate,
}

/// Load balancer certificate material, as PEM text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub cert: String,
    pub key: String,
    pub chain: Option<String>,
}

impl Certificate {
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.cert.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Name the certificate is stored under for an environment. Changes
    /// whenever the certificate body changes.
    pub fn name_for(&self, env_id: &str) -> String {
        format!("{}-lb-cert-{}", env_id, &self.fingerprint()[..12])
    }

    pub fn same_as(&self, cert: &str, key: &str, chain: &str) -> bool {
        self.cert == cert && self.key == key && self.chain.as_deref().unwrap_or("") == chain
    }
}

/// Reads the certificate files named on the command line.
///
/// Returns `None` when no certificate was requested at all.
pub async fn load(
    cert: Option<&Path>,
    key: Option<&Path>,
    chain: Option<&Path>,
) -> Result<Option<Certificate>, CertificateError> {
    let (cert_path, key_path) = match (cert, key) {
        (Some(cert), Some(key)) => (cert, key),
        (None, None) if chain.is_some() => return Err(CertificateError::ChainWithoutCertificate),
        (None, None) => return Ok(None),
        _ => return Err(CertificateError::Incomplete),
    };

    let cert = read_pem(cert_path, "certificate").await?;
    let key = read_pem(key_path, "private key").await?;
    let chain = match chain {
        Some(path) => Some(read_pem(path, "certificate chain").await?),
        None => None,
    };

    Ok(Some(Certificate { cert, key, chain }))
}

async fn read_pem(path: &Path, what: &'static str) -> Result<String, CertificateError> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| CertificateError::Read {
            what,
            path: path.to_path_buf(),
            source,
        })?;

    if !contents.contains("-----BEGIN ") {
        return Err(CertificateError::NotPem {
            what,
            path: path.to_path_buf(),
        });
    }

    Ok(contents)
}
