use std::fs;
use std::path::Path;

use reqwest::Identity;

use crate::error::{SwishError, SwishResult};

/// Client credential presented to the API during the TLS handshake.
#[derive(Clone)]
pub struct ClientCertificate {
    identity: Identity,
}

impl ClientCertificate {
    /// Builds the credential from PEM bytes holding the certificate chain and private key.
    pub fn from_pem(pem: &[u8]) -> SwishResult<Self> {
        let identity = Identity::from_pem(pem)
            .map_err(|e| SwishError::Certificate(format!("Invalid PEM identity: {}", e)))?;

        Ok(Self { identity })
    }

    /// Loads a single PEM file, or a certificate/key file pair.
    pub fn from_files(cert_path: &Path, key_path: Option<&Path>) -> SwishResult<Self> {
        let mut pem = read_pem(cert_path)?;

        if let Some(key_path) = key_path {
            if !pem.ends_with(b"\n") {
                pem.push(b'\n');
            }
            pem.extend(read_pem(key_path)?);
        }

        tracing::debug!(cert = %cert_path.display(), "Loaded client certificate");

        Self::from_pem(&pem)
    }

    pub(crate) fn identity(&self) -> Identity {
        self.identity.clone()
    }
}

impl std::fmt::Debug for ClientCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCertificate").finish_non_exhaustive()
    }
}

fn read_pem(path: &Path) -> SwishResult<Vec<u8>> {
    fs::read(path).map_err(|e| {
        SwishError::Certificate(format!("Failed to read {}: {}", path.display(), e))
    })
}
