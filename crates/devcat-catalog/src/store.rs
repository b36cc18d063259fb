//! Catalog file loading with XDG path support.
//!
//! Catalogs are JSON exports, either a bare array of developments or an object
//! with a `developments` array. The default location is
//! `~/.local/share/devcat/catalog.json`.
//!
//! Both synchronous and asynchronous loaders are provided:
//! - `load()`, `load_or_default()` - Synchronous methods using `std::fs`
//! - `load_async()`, `load_or_default_async()` - Asynchronous methods using `tokio::fs`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::model::Development;
use crate::Catalog;

/// Default catalog filename.
const CATALOG_FILENAME: &str = "catalog.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "devcat";

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// Failed to determine XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not a valid catalog document.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogStoreError {
    /// Returns true if the error is a read error for a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogStoreError::ReadError { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// Accepted catalog document shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Development>),
    Wrapped(Catalog),
}

impl From<CatalogDocument> for Catalog {
    fn from(doc: CatalogDocument) -> Self {
        match doc {
            CatalogDocument::Bare(developments) => Catalog::from_developments(developments),
            CatalogDocument::Wrapped(catalog) => catalog,
        }
    }
}

/// Parses a catalog document from a JSON string.
///
/// # Errors
///
/// Returns `CatalogStoreError::Json` if the string is neither a development
/// array nor an object with a `developments` array.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let doc: CatalogDocument = serde_json::from_str(contents)?;
    Ok(doc.into())
}

/// Read-only access to a catalog file.
///
/// # Example
///
/// ```no_run
/// use devcat_catalog::{CatalogEngine, CatalogStore};
///
/// let store = CatalogStore::new()?;
/// let catalog = store.load_or_default()?;
/// let engine = CatalogEngine::new(catalog);
/// println!("{} location facets", engine.facets().len());
/// # Ok::<(), devcat_catalog::CatalogStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Path to the catalog file.
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a new `CatalogStore` with the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `CatalogStore` reading from a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default XDG path for the catalog file.
    ///
    /// On Unix: `~/.local/share/devcat/catalog.json`
    /// On macOS: `~/Library/Application Support/devcat/catalog.json`
    /// On Windows: `C:\Users\<User>\AppData\Roaming\devcat\data\catalog.json`
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CatalogStoreError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(CATALOG_FILENAME))
    }

    /// Returns the path to the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the catalog file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the catalog from disk.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::ReadError` if the file cannot be read.
    /// - Returns `CatalogStoreError::Json` if the file is not a valid catalog.
    pub fn load(&self) -> Result<Catalog> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.read_error(e))?;
        self.parse(&contents)
    }

    /// Loads the catalog, returning an empty catalog if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::ReadError` for I/O errors other than "file not found".
    /// - Returns `CatalogStoreError::Json` if the file is not a valid catalog.
    pub fn load_or_default(&self) -> Result<Catalog> {
        match self.load() {
            Err(e) if e.is_not_found() => {
                tracing::info!(path = %self.path.display(), "no catalog file, using empty catalog");
                Ok(Catalog::default())
            }
            other => other,
        }
    }

    // =========================================================================
    // Async I/O Methods
    // =========================================================================

    /// Loads the catalog from disk asynchronously.
    ///
    /// This is the async equivalent of [`load()`](Self::load).
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::ReadError` if the file cannot be read.
    /// - Returns `CatalogStoreError::Json` if the file is not a valid catalog.
    pub async fn load_async(&self) -> Result<Catalog> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.read_error(e))?;
        self.parse(&contents)
    }

    /// Loads the catalog asynchronously, returning an empty catalog if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::ReadError` for I/O errors other than "file not found".
    /// - Returns `CatalogStoreError::Json` if the file is not a valid catalog.
    pub async fn load_or_default_async(&self) -> Result<Catalog> {
        match self.load_async().await {
            Err(e) if e.is_not_found() => {
                tracing::info!(path = %self.path.display(), "no catalog file, using empty catalog");
                Ok(Catalog::default())
            }
            other => other,
        }
    }

    fn parse(&self, contents: &str) -> Result<Catalog> {
        let catalog = parse_catalog(contents)?;
        tracing::info!(
            path = %self.path.display(),
            developments = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn read_error(&self, source: io::Error) -> CatalogStoreError {
        CatalogStoreError::ReadError {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_DEVELOPMENT: &str = r#"{
        "id": "dev-1",
        "slug": "vista-mar",
        "status": "launch",
        "region": "region-a",
        "location": { "city": "Itapema" },
        "priceRange": { "min": 700000, "max": 900000 },
        "createdAt": "2025-01-01T00:00:00Z"
    }"#;

    #[test]
    fn test_parse_bare_array() {
        let catalog = parse_catalog(&format!("[{ONE_DEVELOPMENT}]")).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.developments[0].slug, "vista-mar");
    }

    #[test]
    fn test_parse_wrapped_object() {
        let catalog =
            parse_catalog(&format!(r#"{{ "developments": [{ONE_DEVELOPMENT}] }}"#)).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_empty_documents() {
        assert!(parse_catalog("[]").unwrap().is_empty());
        assert!(parse_catalog("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_catalog("not json").unwrap_err();
        assert!(matches!(err, CatalogStoreError::Json(_)));
    }

    #[test]
    fn test_with_path() {
        let store = CatalogStore::with_path("/tmp/devcat-test/catalog.json");
        assert_eq!(store.path(), Path::new("/tmp/devcat-test/catalog.json"));
    }

    #[test]
    fn test_default_path_ends_with_catalog_json() {
        if let Ok(path) = CatalogStore::default_path() {
            assert!(path.ends_with("catalog.json"));
            assert!(path.to_string_lossy().contains("devcat"));
        }
    }

    #[test]
    fn test_not_found_detection() {
        let err = CatalogStoreError::ReadError {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_not_found());

        let err = CatalogStoreError::ReadError {
            path: PathBuf::from("denied.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_not_found());
    }
}
