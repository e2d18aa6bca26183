use std::path::Path;
use std::str::FromStr;

use image::{Rgb, RgbImage};

use crate::config;
use crate::error::RenderError;
use crate::models::Matrix;

/// Shape painted for each dark module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DotStyle {
    /// Filled square
    #[default]
    Square,
    /// Square with rounded corners
    Rounded,
    /// Circle inside the module cell
    Dots,
}

impl FromStr for DotStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(DotStyle::Square),
            "rounded" => Ok(DotStyle::Rounded),
            "dots" => Ok(DotStyle::Dots),
            other => Err(format!("unknown dot style {other:?} (expected square, rounded or dots)")),
        }
    }
}

/// Rendering options; the matrix content itself is never affected by them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module
    pub scale: u32,
    /// Quiet zone in modules on every side
    pub margin: u32,
    /// RGB color of dark modules
    pub dark: [u8; 3],
    /// RGB color of light modules and the quiet zone
    pub light: [u8; 3],
    /// Module shape
    pub style: DotStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: config::render_scale(),
            margin: config::render_margin(),
            dark: [0, 0, 0],
            light: [255, 255, 255],
            style: DotStyle::Square,
        }
    }
}

impl RenderOptions {
    /// Side length of the rendered image in pixels
    pub fn image_size(&self, matrix: &Matrix) -> u32 {
        (matrix.size() as u32 + 2 * self.margin) * self.scale.max(1)
    }
}

/// Paint `matrix` into an RGB image with a quiet zone
pub fn render(matrix: &Matrix, options: &RenderOptions) -> RgbImage {
    let scale = options.scale.max(1);
    let side = options.image_size(matrix);
    let mut img = RgbImage::from_pixel(side, side, Rgb(options.light));

    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            if !matrix.get(row, col) {
                continue;
            }
            let x0 = (col as u32 + options.margin) * scale;
            let y0 = (row as u32 + options.margin) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    if covers(options.style, dx, dy, scale) {
                        img.put_pixel(x0 + dx, y0 + dy, Rgb(options.dark));
                    }
                }
            }
        }
    }

    img
}

/// Render and write a PNG (format chosen from the file extension)
pub fn save_png<P: AsRef<Path>>(
    matrix: &Matrix,
    options: &RenderOptions,
    path: P,
) -> Result<(), RenderError> {
    render(matrix, options).save(path)?;
    Ok(())
}

/// Whether pixel (dx, dy) inside a module cell is painted for `style`
fn covers(style: DotStyle, dx: u32, dy: u32, scale: u32) -> bool {
    // Offsets from the cell center in module units, within [-0.5, 0.5]
    let fx = (dx as f32 + 0.5) / scale as f32 - 0.5;
    let fy = (dy as f32 + 0.5) / scale as f32 - 0.5;
    match style {
        DotStyle::Square => true,
        DotStyle::Dots => fx * fx + fy * fy <= 0.45 * 0.45,
        DotStyle::Rounded => {
            let radius = 0.3;
            let qx = (fx.abs() - (0.5 - radius)).max(0.0);
            let qy = (fy.abs() - (0.5 - radius)).max(0.0);
            qx * qx + qy * qy <= radius * radius
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(style: DotStyle) -> RenderOptions {
        RenderOptions {
            scale: 4,
            margin: 2,
            dark: [0, 0, 0],
            light: [255, 255, 255],
            style,
        }
    }

    #[test]
    fn test_square_render() {
        let mut matrix = Matrix::new(3);
        matrix.set(0, 0, true);
        let img = render(&matrix, &options(DotStyle::Square));
        assert_eq!(img.dimensions(), (28, 28));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(8, 8), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(11, 11), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(12, 12), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_dot_styles_leave_corners_light() {
        let mut matrix = Matrix::new(1);
        matrix.set(0, 0, true);
        for style in [DotStyle::Rounded, DotStyle::Dots] {
            let opts = RenderOptions {
                scale: 8,
                ..options(style)
            };
            let img = render(&matrix, &opts);
            assert_eq!(img.dimensions(), (40, 40));
            assert_eq!(img.get_pixel(16, 16), &Rgb([255, 255, 255]));
            assert_eq!(img.get_pixel(23, 23), &Rgb([255, 255, 255]));
            assert_eq!(img.get_pixel(20, 20), &Rgb([0, 0, 0]));
        }
    }

    #[test]
    fn test_render_does_not_mutate() {
        let matrix = crate::generate("render", crate::ECLevel::L).unwrap();
        let before = matrix.clone();
        let _ = render(&matrix, &options(DotStyle::Dots));
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("Rounded".parse::<DotStyle>(), Ok(DotStyle::Rounded));
        assert!("stars".parse::<DotStyle>().is_err());
    }
}
