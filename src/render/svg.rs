/// SVG serialization of a finished matrix
use crate::encoder::config::{
    default_dark_color, default_light_color, default_margin, default_pixel_size,
};
use crate::models::Matrix;

/// Output options for [`SvgRenderer`]
///
/// No validation happens here: size clamping and color checks belong to the
/// caller (see [`crate::service::QrRequest`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Canvas width and height in pixels
    pub pixel_size: u32,
    /// Fill for dark modules
    pub dark_color: String,
    /// Background fill
    pub light_color: String,
    /// Quiet zone width in modules
    pub margin: usize,
}

impl RenderOptions {
    /// Options with the given canvas size and configured defaults otherwise
    pub fn with_size(pixel_size: u32) -> Self {
        Self {
            pixel_size,
            ..Self::default()
        }
    }

    /// Replace both colors
    pub fn colors(mut self, dark: impl Into<String>, light: impl Into<String>) -> Self {
        self.dark_color = dark.into();
        self.light_color = light.into();
        self
    }

    /// Replace the quiet zone width
    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Edge length of one module in pixels
    pub fn module_size(&self, module_count: usize) -> f64 {
        self.pixel_size as f64 / (module_count + 2 * self.margin) as f64
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixel_size: default_pixel_size(),
            dark_color: default_dark_color().to_string(),
            light_color: default_light_color().to_string(),
            margin: default_margin(),
        }
    }
}

/// Writes a matrix as an SVG document
pub struct SvgRenderer;

impl SvgRenderer {
    /// Render `matrix`: one background rect, then one rect per dark module.
    ///
    /// Output depends only on the inputs.
    pub fn render(matrix: &Matrix, options: &RenderOptions) -> String {
        let count = matrix.size();
        let size = options.pixel_size;
        let module = options.module_size(count);

        let mut svg = String::with_capacity(128 + matrix.count_dark() * 96);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#
        ));
        svg.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            options.light_color
        ));

        for (row, modules) in matrix.rows().enumerate() {
            for (col, cell) in modules.iter().enumerate() {
                if !cell.is_dark() {
                    continue;
                }
                let x = (col + options.margin) as f64 * module;
                let y = (row + options.margin) as f64 * module;
                svg.push_str(&format!(
                    r#"<rect x="{x}" y="{y}" width="{module}" height="{module}" fill="{}"/>"#,
                    options.dark_color
                ));
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::builder::MatrixBuilder;
    use crate::encoder::placement::DataPlacer;
    use crate::models::Version;

    fn sample_matrix() -> Matrix {
        let mut matrix = MatrixBuilder::build(Version::MIN);
        DataPlacer::place(&mut matrix, &[true, false, true, true]);
        matrix
    }

    #[test]
    fn test_rect_count_matches_dark_modules() {
        let matrix = sample_matrix();
        let svg = SvgRenderer::render(&matrix, &RenderOptions::with_size(200));
        let rects = svg.matches("<rect ").count();
        assert_eq!(rects, matrix.count_dark() + 1);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 200\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_module_geometry() {
        let matrix = sample_matrix();
        // 290 / (21 + 2 * 4) = 10 px per module
        let options = RenderOptions::with_size(290)
            .colors("#112233", "#fefefe")
            .margin(4);
        let svg = SvgRenderer::render(&matrix, &options);

        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#fefefe"/>"##));
        // Top-left finder corner at (0, 0) lands inside the quiet zone offset
        assert!(svg.contains(r##"<rect x="40" y="40" width="10" height="10" fill="#112233"/>"##));
    }

    #[test]
    fn test_zero_margin() {
        let matrix = sample_matrix();
        let options = RenderOptions::with_size(210).margin(0);
        let svg = SvgRenderer::render(&matrix, &options);
        assert!(svg.contains(r#"<rect x="0" y="0" width="10" height="10""#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let matrix = sample_matrix();
        let options = RenderOptions::with_size(333);
        assert_eq!(
            SvgRenderer::render(&matrix, &options),
            SvgRenderer::render(&matrix, &options)
        );
    }
}
