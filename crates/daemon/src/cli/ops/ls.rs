use std::path::PathBuf;

use clap::Args;

use common::prelude::{BrowseError, BucketDetail, BucketPath, Store, StoreError};

#[derive(Args, Debug, Clone)]
pub struct Ls {
    /// Bucket path to list, e.g. `users/sessions` (defaults to the root)
    #[arg(default_value = "")]
    pub path: String,

    /// Store file path (default from config, my.db)
    #[arg(long, env = "BOLTVIEW_DB")]
    pub db: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum LsError {
    #[error("state error: {0}")]
    State(#[from] boltview_daemon::state::StateError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{path}: {source}")]
    Browse {
        path: String,
        #[source]
        source: BrowseError,
    },
}

/// One line per entry; nested buckets end in `/`.
fn format_details(details: &[BucketDetail]) -> String {
    if details.is_empty() {
        return "No entries found".to_string();
    }

    details
        .iter()
        .map(|detail| {
            if detail.is_nested {
                format!("{}/ (bucket)", detail.key)
            } else {
                format!("{} = {}", detail.key, detail.value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Ls {
    type Error = LsError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = ctx.config()?;
        let db_path = self.db.clone().unwrap_or_else(|| config.db_path.clone());

        let store = Store::open_with_timeout(db_path, config.open_timeout()).await?;
        let path = BucketPath::parse(self.path.clone());

        let details = store
            .list_blocking(path)
            .await
            .map_err(|source| LsError::Browse {
                path: self.path.clone(),
                source,
            })?;

        Ok(format_details(&details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_details() {
        let details = vec![
            BucketDetail {
                key: "alice".to_string(),
                value: "admin".to_string(),
                is_nested: false,
            },
            BucketDetail {
                key: "sessions".to_string(),
                value: String::new(),
                is_nested: true,
            },
        ];
        assert_eq!(format_details(&details), "alice = admin\nsessions/ (bucket)");
        assert_eq!(format_details(&[]), "No entries found");
    }
}
