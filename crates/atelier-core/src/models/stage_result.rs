use serde::Serialize;

use crate::errors::AtelierError;

/// Uniform return shape for every pipeline stage.
///
/// Only constructible through [`StageResult::success`] and
/// [`StageResult::failure`], so a failed result never carries data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageResult<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    recommendations: Vec<String>,
}

impl<T> StageResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            recommendations: Vec::new(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            recommendations: Vec::new(),
        }
    }

    /// Fold an `AtelierResult` into the stage shape.
    pub fn from_result(result: Result<T, AtelierError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::failure(e.to_string()),
        }
    }

    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Split into `Ok(data)` or `Err(message)`.
    pub fn into_result(self) -> Result<T, String> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "stage returned no data".to_string())),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StageResult<U> {
        StageResult {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            recommendations: self.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StageError;

    #[test]
    fn failure_never_carries_data() {
        let r: StageResult<u32> = StageResult::failure("boom");
        assert!(!r.is_success());
        assert!(r.data().is_none());
        assert_eq!(r.error(), Some("boom"));
    }

    #[test]
    fn from_result_normalizes_errors() {
        let r: StageResult<u32> = StageResult::from_result(Err(StageError::EmptyCatalog.into()));
        assert!(!r.is_success());
        assert_eq!(r.error(), Some("catalog table is empty"));
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_value(StageResult::success(3u32)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 3}));
    }
}
