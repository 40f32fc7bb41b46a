//! Error type for the update cycle.

/// Error returned by [`crate::builder::build_records`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisualError {
    /// The update carried no usable categorical data. Callers render nothing.
    #[error("no usable data view: missing {part}")]
    MissingDataView {
        /// Which level of the data view was absent.
        part: MissingPart,
    },
}

/// The level of a data view found absent while building records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    /// `options.dataViews` was empty.
    DataView,
    /// The data view had no categorical section.
    Categorical,
    /// The categorical section had no category column.
    CategoryColumn,
    /// The categorical section had no value column.
    ValueColumn,
}

impl std::fmt::Display for MissingPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DataView => "data view",
            Self::Categorical => "categorical section",
            Self::CategoryColumn => "category column",
            Self::ValueColumn => "value column",
        };
        f.write_str(name)
    }
}

impl VisualError {
    /// Shorthand for [`VisualError::MissingDataView`].
    #[must_use]
    pub fn missing(part: MissingPart) -> Self {
        Self::MissingDataView { part }
    }
}
