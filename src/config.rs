use std::sync::OnceLock;

/// Pixels per module when `QR_RENDER_SCALE` is unset
pub const DEFAULT_SCALE: u32 = 8;
/// Quiet zone modules when `QR_RENDER_MARGIN` is unset
pub const DEFAULT_MARGIN: u32 = 4;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

static RENDER_SCALE: OnceLock<u32> = OnceLock::new();

/// Pixels per module (`QR_RENDER_SCALE`, 1-64)
pub fn render_scale() -> u32 {
    *RENDER_SCALE.get_or_init(|| parse_env_u32("QR_RENDER_SCALE", DEFAULT_SCALE).clamp(1, 64))
}

static RENDER_MARGIN: OnceLock<u32> = OnceLock::new();

/// Quiet zone width in modules (`QR_RENDER_MARGIN`, 0-16)
pub fn render_margin() -> u32 {
    *RENDER_MARGIN.get_or_init(|| parse_env_u32("QR_RENDER_MARGIN", DEFAULT_MARGIN).min(16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_fallback() {
        assert_eq!(parse_env_u32("QR_SYMBOL_TEST_UNSET_VARIABLE", 7), 7);
    }

    #[test]
    fn test_defaults_in_range() {
        assert!((1..=64).contains(&render_scale()));
        assert!(render_margin() <= 16);
    }
}
