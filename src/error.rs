//! Error types for the timesheet payroll engine.
//!
//! Malformed cell data never surfaces here: the extraction and aggregation
//! stages degrade missing or unparsable values to defaults. These errors cover
//! the boundaries only (configuration, the threshold parameter, workbook
//! decoding, report writing) plus the "nothing extracted" outcome.

use thiserror::Error;

/// The main error type for the timesheet payroll engine.
///
/// # Example
///
/// ```
/// use timesheet_payroll::error::EngineError;
///
/// let error = EngineError::InvalidMonthlyHours {
///     input: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "Monthly hours must be a number, got 'abc'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The sheet layout contradicts itself.
    #[error("Invalid sheet layout: {message}")]
    InvalidLayout {
        /// What is wrong with the layout.
        message: String,
    },

    /// The monthly hours threshold supplied by the caller is not a number.
    #[error("Monthly hours must be a number, got '{input}'")]
    InvalidMonthlyHours {
        /// The rejected input, verbatim.
        input: String,
    },

    /// No employee block was recognised in any sheet of the workbook.
    #[error("No valid employee data found in any sheet")]
    NoEmployeeData,

    /// The uploaded workbook could not be decoded into grids.
    #[error("Failed to read workbook: {message}")]
    WorkbookRead {
        /// A description of the decoding failure.
        message: String,
    },

    /// The report could not be serialised.
    #[error("Failed to write report: {message}")]
    ReportWrite {
        /// A description of the serialisation failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<calamine::Error> for EngineError {
    fn from(error: calamine::Error) -> Self {
        EngineError::WorkbookRead {
            message: error.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for EngineError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        EngineError::ReportWrite {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/layout.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/layout.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_layout_displays_message() {
        let error = EngineError::InvalidLayout {
            message: "day_slots must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid sheet layout: day_slots must be at least 1"
        );
    }

    #[test]
    fn test_invalid_monthly_hours_displays_input() {
        let error = EngineError::InvalidMonthlyHours {
            input: "one hundred".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Monthly hours must be a number, got 'one hundred'"
        );
    }

    #[test]
    fn test_no_employee_data_message() {
        assert_eq!(
            EngineError::NoEmployeeData.to_string(),
            "No valid employee data found in any sheet"
        );
    }

    #[test]
    fn test_workbook_read_displays_message() {
        let error = EngineError::WorkbookRead {
            message: "not a zip archive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read workbook: not a zip archive"
        );
    }

    #[test]
    fn test_report_write_displays_message() {
        let error = EngineError::ReportWrite {
            message: "sheet name too long".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write report: sheet name too long"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_data() -> EngineResult<()> {
            Err(EngineError::NoEmployeeData)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_data()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(EngineError::NoEmployeeData)));
    }
}
