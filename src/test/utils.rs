#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::utils::{format_decimal, format_size, next_row, previous_row};

    #[test]
    fn picker_wraps_around() {
        assert_eq!(next_row(Some(0), 5), Some(1));
        assert_eq!(next_row(Some(4), 5), Some(0));
        assert_eq!(next_row(None, 5), Some(0));
        assert_eq!(previous_row(Some(0), 5), Some(4));
        assert_eq!(previous_row(Some(3), 5), Some(2));
        assert_eq!(previous_row(None, 5), Some(0));
        assert_eq!(next_row(Some(0), 0), None);
    }

    #[test]
    fn formats_values() {
        assert_eq!(format_decimal(&dec!(150.250)), "150.25");
        assert_eq!(format_decimal(&dec!(-1.10)), "-1.1");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
    }
}
