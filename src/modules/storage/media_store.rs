//! S3-compatible media store for gallery images
//!
//! Wraps rust-s3 against MinIO or any S3-compatible endpoint. Uploaded
//! images live under a single logical folder inside the bucket; the object
//! key doubles as the asset's public id and is all that is needed to
//! destroy it later.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Client, Url};
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::MediaStoreConfig;
use crate::core::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Handle to an asset the media store accepted
#[derive(Debug, Clone)]
pub struct StoredAsset {
    /// Publicly reachable URL of the stored image
    pub url: String,
    /// The store's internal reference, required to destroy the asset
    pub public_id: String,
}

/// Hosted media storage: accepts image bytes and hands back a public URL
/// plus a reference id that can later be used to request deletion.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, data: Vec<u8>, content_type: &str) -> Result<StoredAsset, AppError>;

    async fn destroy(&self, public_id: &str) -> Result<(), AppError>;
}

pub struct S3MediaStore {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    endpoint: String,
    public_endpoint: String,
    folder: String,
    /// Access key for AWS Signature v4 signing
    access_key: String,
    /// Secret key for AWS Signature v4 signing
    secret_key: String,
    /// Region name for AWS Signature v4 signing
    region_name: String,
    /// HTTP client for bucket policy operations
    http_client: Client,
}

impl S3MediaStore {
    /// Create a new media store client from configuration
    ///
    /// This will:
    /// 1. Create the bucket if it doesn't exist
    /// 2. Set a public read policy on the upload folder so returned URLs
    ///    are reachable without credentials
    pub async fn new(config: MediaStoreConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create storage bucket: {}", e)))?;

        // Use path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        let http_client = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let client = Self {
            bucket,
            region,
            credentials,
            endpoint: config.endpoint,
            public_endpoint: config.public_endpoint,
            folder: config.folder,
            access_key: config.access_key,
            secret_key: config.secret_key,
            region_name: config.region,
            http_client,
        };

        client.ensure_bucket_exists().await?;
        client.set_public_read_policy().await?;

        info!(
            "Media store initialized for endpoint: {}, bucket: {}, folder: {}",
            client.endpoint,
            client.bucket.name(),
            client.folder
        );

        Ok(client)
    }

    /// Ensure the bucket exists, create if not
    pub async fn ensure_bucket_exists(&self) -> Result<(), AppError> {
        match self.create_bucket().await {
            Ok(_) => {
                info!("Bucket '{}' created successfully", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                // Bucket already exists - this is fine
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    // Log warning but don't fail - bucket might exist with different error
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    async fn create_bucket(&self) -> Result<(), AppError> {
        let bucket_config = BucketConfiguration::default();

        Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            bucket_config,
        )
        .await
        .map_err(|e| {
            AppError::Internal(format!(
                "Failed to create bucket '{}': {}",
                self.bucket.name(),
                e
            ))
        })?;

        Ok(())
    }

    /// Set a public read policy on the upload folder
    ///
    /// Allows anonymous read access to `<folder>/*` so gallery URLs work
    /// without authentication. The rest of the bucket stays closed.
    async fn set_public_read_policy(&self) -> Result<(), AppError> {
        let bucket_name = self.bucket.name();
        let folder = &self.folder;

        let policy = json!({
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Effect": "Allow",
                    "Principal": {"AWS": "*"},
                    "Action": ["s3:GetObject"],
                    "Resource": [format!("arn:aws:s3:::{bucket_name}/{folder}/*")]
                }
            ]
        });

        let policy_str = policy.to_string();

        match self
            .put_bucket_policy_with_sigv4(&bucket_name, &policy_str)
            .await
        {
            Ok(_) => {
                info!("Set public read policy for {}/{}/*", bucket_name, folder);
                Ok(())
            }
            Err(e) => {
                // Log warning but don't fail startup - policy can be set manually
                warn!(
                    "Failed to set bucket policy for '{}': {}. \
                    You may need to set the policy manually using: \
                    mc anonymous set download minio/{}/{}",
                    bucket_name, e, bucket_name, folder
                );
                Ok(())
            }
        }
    }

    /// Put bucket policy using AWS Signature v4
    async fn put_bucket_policy_with_sigv4(
        &self,
        bucket_name: &str,
        policy: &str,
    ) -> Result<(), AppError> {
        let now = Utc::now();
        let date_stamp = now.format("%Y%m%d").to_string();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();

        // Parse endpoint to get host
        let endpoint_url = Url::parse(&self.endpoint)
            .map_err(|e| AppError::Internal(format!("Invalid endpoint URL: {}", e)))?;
        let host = endpoint_url
            .host_str()
            .ok_or_else(|| AppError::Internal("Endpoint URL has no host".to_string()))?;
        let port = endpoint_url.port();
        let host_header = match port {
            Some(p) => format!("{}:{}", host, p),
            None => host.to_string(),
        };

        // Build the URL for PUT bucket policy
        let url = format!("{}/{}?policy", self.endpoint, bucket_name);

        // Calculate payload hash
        let payload_hash = hex::encode(Sha256::digest(policy.as_bytes()));

        // Create canonical request
        let canonical_uri = format!("/{}", bucket_name);
        let canonical_querystring = "policy=";
        let canonical_headers = format!(
            "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
            host_header, payload_hash, amz_date
        );
        let signed_headers = "host;x-amz-content-sha256;x-amz-date";

        let canonical_request = format!(
            "PUT\n{}\n{}\n{}\n{}\n{}",
            canonical_uri, canonical_querystring, canonical_headers, signed_headers, payload_hash
        );

        // Create string to sign
        let algorithm = "AWS4-HMAC-SHA256";
        let credential_scope = format!("{}/{}/s3/aws4_request", date_stamp, self.region_name);
        let canonical_request_hash = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            algorithm, amz_date, credential_scope, canonical_request_hash
        );

        // Calculate signature
        let signature = self.calculate_signature(&date_stamp, &string_to_sign)?;

        // Create authorization header
        let authorization_header = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            algorithm, self.access_key, credential_scope, signed_headers, signature
        );

        // Make the request
        let response = self
            .http_client
            .put(&url)
            .header("Host", &host_header)
            .header("x-amz-date", &amz_date)
            .header("x-amz-content-sha256", &payload_hash)
            .header("Authorization", &authorization_header)
            .header("Content-Type", "application/json")
            .body(policy.to_string())
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send policy request: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::Internal(format!(
                "Failed to set bucket policy: {} - {}",
                status, body
            )))
        }
    }

    /// Calculate AWS Signature v4 signature
    fn calculate_signature(
        &self,
        date_stamp: &str,
        string_to_sign: &str,
    ) -> Result<String, AppError> {
        // Step 1: Create signing key
        let k_date = Self::hmac_sha256(
            format!("AWS4{}", self.secret_key).as_bytes(),
            date_stamp.as_bytes(),
        )?;
        let k_region = Self::hmac_sha256(&k_date, self.region_name.as_bytes())?;
        let k_service = Self::hmac_sha256(&k_region, b"s3")?;
        let k_signing = Self::hmac_sha256(&k_service, b"aws4_request")?;

        // Step 2: Calculate signature
        let signature = Self::hmac_sha256(&k_signing, string_to_sign.as_bytes())?;
        Ok(hex::encode(signature))
    }

    /// HMAC-SHA256 helper
    fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, AppError> {
        let mut mac = HmacSha256::new_from_slice(key)
            .map_err(|e| AppError::Internal(format!("HMAC key error: {}", e)))?;
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    /// Get the bucket name
    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }

    /// Direct public URL for an object key
    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn upload(&self, data: Vec<u8>, content_type: &str) -> Result<StoredAsset, AppError> {
        let key = object_key(&self.folder, content_type);

        self.bucket
            .put_object_with_content_type(&key, &data, content_type)
            .await
            .map_err(|e| AppError::MediaStore(format!("Failed to upload '{}': {}", key, e)))?;

        debug!("Uploaded '{}' to bucket '{}'", key, self.bucket.name());

        Ok(StoredAsset {
            url: self.public_url(&key),
            public_id: key,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), AppError> {
        self.bucket.delete_object(public_id).await.map_err(|e| {
            AppError::MediaStore(format!("Failed to delete '{}': {}", public_id, e))
        })?;

        debug!(
            "Deleted '{}' from bucket '{}'",
            public_id,
            self.bucket.name()
        );
        Ok(())
    }
}

/// Generate a fresh object key under the given folder.
///
/// The key is the asset's public id for the rest of its life, so it must be
/// unique per upload.
fn object_key(folder: &str, content_type: &str) -> String {
    format!(
        "{}/{}.{}",
        folder,
        Uuid::new_v4(),
        extension_for(content_type)
    )
}

/// File extension for a declared content type
fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_content_type() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("image/gif"), "gif");
        assert_eq!(extension_for("application/octet-stream"), "bin");
    }

    #[test]
    fn object_keys_are_unique_and_foldered() {
        let a = object_key("gallery", "image/png");
        let b = object_key("gallery", "image/png");

        assert_ne!(a, b);
        assert!(a.starts_with("gallery/"));
        assert!(a.ends_with(".png"));

        let stem = a
            .strip_prefix("gallery/")
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap();
        assert!(Uuid::parse_str(stem).is_ok());
    }
}
