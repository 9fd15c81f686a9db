//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_stamp.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD, or "unknown" outside a checkout
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }
}
