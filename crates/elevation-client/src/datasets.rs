//! Catalog of elevation datasets served by Open Topo Data.

/// Metadata for one provider dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetInfo {
    /// Dataset id as used in request paths (e.g. "srtm30m").
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Ground resolution of the dataset.
    pub resolution: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// The datasets this client supports.
pub fn dataset_catalog() -> &'static [DatasetInfo] {
    &[
        DatasetInfo {
            id: "srtm30m",
            name: "SRTM 30m",
            resolution: "30 meters",
            description: "High-resolution SRTM elevation data",
        },
        DatasetInfo {
            id: "srtm90m",
            name: "SRTM 90m",
            resolution: "90 meters",
            description: "Standard SRTM elevation data",
        },
        DatasetInfo {
            id: "aster30m",
            name: "ASTER 30m",
            resolution: "30 meters",
            description: "ASTER Global DEM elevation data",
        },
    ]
}

/// Check whether a dataset id is in the catalog.
pub fn is_known_dataset(id: &str) -> bool {
    dataset_catalog().iter().any(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_datasets() {
        assert!(is_known_dataset("srtm30m"));
        assert!(is_known_dataset("srtm90m"));
        assert!(is_known_dataset("aster30m"));
        assert!(!is_known_dataset("etopo1"));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = dataset_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
