use crate::types::*;

/// Imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImposeOptions {
    /// Pages tiled onto each sheet side (N in N-up)
    pub pages_per_side: usize,

    /// Output sheet size
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    /// Overlay dashed guide lines at the internal grid boundaries
    pub cut_guides: bool,
    /// Stamp the 1-based source page number into each occupied cell
    pub page_labels: bool,
}

impl Default for ImposeOptions {
    fn default() -> Self {
        Self {
            pages_per_side: 2,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            cut_guides: true,
            page_labels: true,
        }
    }
}

impl ImposeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.pages_per_side < 1 {
            return Err(ImposeError::InvalidDensity(self.pages_per_side));
        }

        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(ImposeError::Config(format!(
                "Sheet dimensions must be positive, got {}mm x {}mm",
                width_mm, height_mm
            )));
        }

        Ok(())
    }
}
