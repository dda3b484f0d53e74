use hough_detector::image::{EdgeMask, EdgeSource, ImageF32};
use hough_detector::{detect_circles, detect_lines, CircleParams, LineParams};

/// Synthetic scene standing in for an external edge detector.
struct SyntheticEdges {
    mask: EdgeMask,
    directions: ImageF32,
}

impl EdgeSource for SyntheticEdges {
    fn edges(&self) -> &EdgeMask {
        &self.mask
    }
    fn directions(&self) -> Option<&ImageF32> {
        Some(&self.directions)
    }
}

fn synthetic_scene(w: usize, h: usize) -> SyntheticEdges {
    let mut mask = EdgeMask::new(w, h);
    let mut directions = ImageF32::new(w, h);

    // Vertical line at x = w/3, gradient along +x.
    for y in 10..h - 10 {
        mask.set(w / 3, y, true);
        directions.set(w / 3, y, 0.0);
    }

    // Circle of radius 30 around the image center.
    let (cx, cy, r) = (w as f32 / 2.0, h as f32 / 2.0, 30.0f32);
    for i in 0..360 {
        let phi = (i as f32).to_radians();
        let x = (cx + r * phi.cos()).round() as isize;
        let y = (cy + r * phi.sin()).round() as isize;
        if x >= 0 && (x as usize) < w && y >= 0 && (y as usize) < h {
            mask.set(x as usize, y as usize, true);
            directions.set(x as usize, y as usize, phi);
        }
    }

    SyntheticEdges { mask, directions }
}

fn main() {
    // Demo stub: builds a synthetic edge scene and runs both detectors.
    let scene = synthetic_scene(256, 256);

    let line_params = LineParams {
        threshold: 120,
        ..Default::default()
    };
    match detect_lines(scene.edges(), &line_params) {
        Ok(det) => {
            println!(
                "lines: {} peaks in {:.3} ms vote / {:.3} ms peaks",
                det.peaks.len(),
                det.vote_ms,
                det.peak_ms
            );
            for line in &det.lines {
                println!(
                    "  rho={:8.2} theta={:6.3} votes={}",
                    line.rho, line.theta, line.votes
                );
            }
        }
        Err(err) => eprintln!("line detection failed: {err}"),
    }

    let circle_params = CircleParams {
        r_min: 20.0,
        r_max: 40.0,
        n_bins_r: 5,
        threshold: 60,
    };
    let directions = scene.directions().expect("synthetic scene has directions");
    match detect_circles(scene.edges(), directions, &circle_params) {
        Ok(det) => {
            println!(
                "circles: {} peaks in {:.3} ms vote / {:.3} ms peaks",
                det.peaks.len(),
                det.vote_ms,
                det.peak_ms
            );
            for circle in &det.circles {
                println!(
                    "  center=({:6.1}, {:6.1}) r={:5.1} votes={}",
                    circle.cx, circle.cy, circle.radius, circle.votes
                );
            }
        }
        Err(err) => eprintln!("circle detection failed: {err}"),
    }
}
