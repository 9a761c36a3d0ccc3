use rust_decimal::Decimal;

pub fn format_decimal(value: &Decimal) -> String {
    value.normalize().to_string()
}

pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

pub fn next_row(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(i) if i >= len - 1 => Some(0),
        Some(i) => Some(i + 1),
        None => Some(0),
    }
}

pub fn previous_row(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(0) => Some(len - 1),
        Some(i) => Some(i - 1),
        None => Some(0),
    }
}
