//! Sign a webhook body command.

use std::path::Path;

use sagapay_crypto::{sign as hmac_sign, SecretKey};

use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, SignatureOutput};

/// Execute the sign command.
///
/// Signs the file's bytes exactly as stored, so the output can be replayed
/// against a webhook endpoint with the same body.
pub fn sign(secret: &SecretKey, format: OutputFormat, file: &Path) -> CliResult<String> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.display().to_string()));
    }
    let body = std::fs::read(file)?;
    let signature = hmac_sign(&body, secret.as_bytes());

    let output = SignatureOutput {
        file: file.display().to_string(),
        bytes: body.len(),
        signature: signature.to_string(),
    };
    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sign_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"what do ya want for nothing?").unwrap();

        let output = sign(&SecretKey::from("Jefe"), OutputFormat::Json, file.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json["signature"],
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
        assert_eq!(json["bytes"], 28);
    }

    #[test]
    fn test_sign_missing_file() {
        let err = sign(
            &SecretKey::from("secret"),
            OutputFormat::Human,
            Path::new("/nonexistent/body.json"),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
