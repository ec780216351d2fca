// Page wiring and renderer constants for the web front-end.

// DOM
pub const CANVAS_ID: &str = "parallax-canvas";

// Clear colour behind the composite (matches the page background)
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Texture format for uploaded layer images
pub const IMAGE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

// Six vertices: two triangles spanning the banner quad
pub const QUAD_VERTEX_COUNT: u32 = 6;
