use hough_detector::image::{EdgeMask, ImageF32};

/// Rasterize a straight segment from (x0, y0) to (x1, y1) into a mask.
pub fn draw_segment(mask: &mut EdgeMask, x0: f32, y0: f32, x1: f32, y1: f32) {
    let steps = ((x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize).max(1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (x0 + t * (x1 - x0)).round() as isize;
        let y = (y0 + t * (y1 - y0)).round() as isize;
        if x >= 0 && (x as usize) < mask.w && y >= 0 && (y as usize) < mask.h {
            mask.set(x as usize, y as usize, true);
        }
    }
}

/// Rasterize a circle outline and fill the matching radial gradient
/// directions. Returns the mask together with the direction map.
pub fn circle_scene(w: usize, h: usize, cx: f32, cy: f32, r: f32) -> (EdgeMask, ImageF32) {
    let mut mask = EdgeMask::new(w, h);
    let mut directions = ImageF32::new(w, h);
    for i in 0..720 {
        let phi = (i as f32 * 0.5).to_radians();
        let x = (cx + r * phi.cos()).round() as isize;
        let y = (cy + r * phi.sin()).round() as isize;
        if x >= 0 && (x as usize) < w && y >= 0 && (y as usize) < h {
            mask.set(x as usize, y as usize, true);
            directions.set(x as usize, y as usize, phi);
        }
    }
    (mask, directions)
}
