/// Количество байт в одном мебибайте.
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Переводит размер в байтах в мебибайты.
///
/// # Example
///
/// ```
/// use reelrelay::core::utils::bytes_to_mib;
///
/// assert_eq!(bytes_to_mib(50 * 1024 * 1024), 50.0);
/// ```
pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MIB
}

/// Обрезает строку до `max_chars` символов (не байт).
///
/// Безопасно для многобайтовых символов: кириллица и эмодзи никогда не
/// разрезаются посередине.
///
/// # Example
///
/// ```
/// use reelrelay::core::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("Привет, мир", 6), "Привет");
/// assert_eq!(truncate_chars("short", 100), "short");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
