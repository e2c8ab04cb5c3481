//! Platform API levels

/// Numeric platform API level.
///
/// The window bar-color read-back APIs appeared at
/// [`ApiLevel::BAR_COLOR_APIS`]; earlier levels draw both bars black and
/// cannot report a color at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// First level whose windows expose status/navigation bar colors.
    pub const BAR_COLOR_APIS: ApiLevel = ApiLevel(21);

    /// Whether windows on this level expose bar colors.
    pub const fn supports_bar_colors(self) -> bool {
        self.0 >= Self::BAR_COLOR_APIS.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_threshold() {
        assert!(!ApiLevel(19).supports_bar_colors());
        assert!(!ApiLevel(20).supports_bar_colors());
        assert!(ApiLevel(21).supports_bar_colors());
        assert!(ApiLevel(34).supports_bar_colors());
    }
}
