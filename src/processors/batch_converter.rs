use crate::config::{ConversionMode, ConverterConfig};
use crate::error::{CoordinateError, Result};
use crate::models::{CoordinatePair, Format, LatLong, Token};
use tracing::{debug, info, warn};
use validator::Validate;

/// Converts a flat `lat, long, lat, long, ...` token list pair by pair
pub struct BatchConverter {
    config: ConverterConfig,
}

impl BatchConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn with_mode(mut self, mode: ConversionMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Build every pair before converting any of them; the first failure aborts the batch
    pub fn pairs(&self, tokens: &[Token]) -> Result<Vec<CoordinatePair>> {
        if tokens.is_empty() || tokens.len() % 2 != 0 {
            return Err(CoordinateError::OddBatchSize {
                count: tokens.len(),
            });
        }

        tokens
            .chunks_exact(2)
            .enumerate()
            .map(|(index, chunk)| {
                CoordinatePair::new(&chunk[0], &chunk[1]).map_err(|e| {
                    warn!("Batch aborted at pair {}: {}", index, e);
                    e
                })
            })
            .collect()
    }

    /// Convert every pair to `format`, preserving input order
    pub fn convert(&self, tokens: &[Token], format: Format) -> Result<Vec<LatLong>> {
        self.config.validate()?;
        info!(
            "Converting {} coordinate pairs to {}",
            tokens.len() / 2,
            format
        );

        let pairs = self.pairs(tokens)?;
        let results = pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| {
                let result = pair.convert(format, &self.config)?;
                debug!(index, lat = %result.lat, long = %result.long, "Converted pair");
                Ok(result)
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Converted {} coordinate pairs", results.len());
        Ok(results)
    }
}

impl Default for BatchConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

/// Convert a flat token list with the default configuration
///
/// # Examples
/// ```
/// use coords_converter::models::{Format, Token};
/// use coords_converter::processors::batch_convert;
///
/// let tokens = vec![Token::from(-43.63872), Token::from(-116.24135)];
/// let results = batch_convert(&tokens, Format::Ddm).unwrap();
/// assert_eq!(results[0].lat, "S43°38.3232'");
/// ```
pub fn batch_convert(tokens: &[Token], format: Format) -> Result<Vec<LatLong>> {
    BatchConverter::default().convert(tokens, format)
}
