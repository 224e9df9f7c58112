//! Scanline fill invariants on generated images
//!
//! Compares the engine against a straightforward breadth-first fill on
//! noise images and checks the dirty rectangle, accumulation and reset
//! invariants after every seed.
//!
//! Run with:
//! ```
//! cargo test -p masker-region --test fill_props_reg
//! ```

use masker_core::{PixelFormat, Rect, SourceImage};
use masker_region::{MASKED, Masker, UNMASKED};
use masker_test::RegParams;
use std::collections::VecDeque;

const ON: u32 = 0xffffffff;
const OFF: u32 = 0x000000ff;

/// Simple linear congruential generator for reproducible noise
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn below(&mut self, n: u32) -> u32 {
        self.next() % n
    }
}

/// Noise image where roughly `percent`% of pixels are fillable
fn noise_image(width: u32, height: u32, percent: u32, seed: u64) -> SourceImage {
    let mut rng = Lcg(seed);
    SourceImage::from_fn(width, height, PixelFormat::Rgba, |_, _| {
        if rng.below(100) < percent { ON } else { OFF }
    })
    .unwrap()
}

/// Reference 4-connected fill; `already` pixels are treated as walls
fn reference_fill(image: &SourceImage, already: &[u8], sx: u32, sy: u32) -> Vec<bool> {
    let (w, h) = (image.width(), image.height());
    let fillable = |x: u32, y: u32| {
        let i = image.index(x, y);
        image.pixel_at(i) == ON && already[i] != MASKED
    };

    let mut out = vec![false; (w * h) as usize];
    if !fillable(sx, sy) {
        return out;
    }

    let mut queue = VecDeque::new();
    out[image.index(sx, sy)] = true;
    queue.push_back((sx, sy));
    while let Some((x, y)) = queue.pop_front() {
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if x + 1 < w {
            neighbors.push((x + 1, y));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if y + 1 < h {
            neighbors.push((x, y + 1));
        }
        for (nx, ny) in neighbors {
            let i = image.index(nx, ny);
            if !out[i] && fillable(nx, ny) {
                out[i] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    out
}

/// Exact bounding box of the masked pixels, if any
fn mask_bounds(mask: &[u8], width: u32) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for (i, &v) in mask.iter().enumerate() {
        if v == MASKED {
            let (x, y) = ((i as u32 % width) as i32, (i as u32 / width) as i32);
            match &mut bounds {
                Some(r) => r.include_point(x, y),
                None => bounds = Some(Rect::from_point(x, y)),
            }
        }
    }
    bounds
}

#[test]
fn fill_props_reg() {
    let mut rp = RegParams::new("fill_props");

    for (case, &(w, h, percent)) in [(17, 13, 55), (40, 25, 62), (64, 64, 70), (1, 30, 80)]
        .iter()
        .enumerate()
    {
        let image = noise_image(w, h, percent, 42 + case as u64);
        let mut masker = Masker::new(image.clone()).unwrap();
        let mut rng = Lcg(7 + case as u64);
        let mut prev_rect: Option<Rect> = None;

        for _ in 0..12 {
            let (sx, sy) = (rng.below(w), rng.below(h));
            let before = masker.mask_buffer().to_vec();
            let expected = reference_fill(&image, &before, sx, sy);
            let expected_count = expected.iter().filter(|&&b| b).count();

            let n = masker.mask(sx as i32, sy as i32).unwrap();
            rp.compare_values(expected_count as f64, n as f64, 0.0);

            // New pixels are exactly the reference region; old ones stay
            let mut want = before.clone();
            for (i, &hit) in expected.iter().enumerate() {
                if hit {
                    want[i] = MASKED;
                }
            }
            rp.compare_masks(&want, masker.mask_buffer(), w);

            // Every masked pixel is fillable
            let stray = masker
                .mask_buffer()
                .iter()
                .zip(image.data())
                .filter(|&(&m, &p)| m == MASKED && p != ON)
                .count();
            rp.compare_values(0.0, stray as f64, 0.0);

            // Dirty rect is the exact bounding box and never shrinks
            let cur = masker.dirty_rect();
            match mask_bounds(masker.mask_buffer(), w) {
                Some(exact) => {
                    rp.compare_rects(exact, cur);
                    if let Some(prev) = prev_rect {
                        rp.compare_rects(prev.union(&cur), cur);
                    }
                    prev_rect = Some(cur);
                }
                None => {
                    rp.compare_rects(Rect::full(w, h), cur);
                }
            }

            // Re-seeding the same pixel is a no-op
            rp.compare_values(0.0, masker.mask(sx as i32, sy as i32).unwrap() as f64, 0.0);
        }

        let total = masker.mask_buffer().iter().filter(|&&v| v == MASKED).count();
        rp.compare_values(total as f64, masker.masked_count() as f64, 0.0);

        masker.reset();
        rp.compare_values(
            0.0,
            masker.mask_buffer().iter().filter(|&&v| v != UNMASKED).count() as f64,
            0.0,
        );
        rp.compare_values(0.0, masker.state().visited_count() as f64, 0.0);
        rp.compare_rects(Rect::full(w, h), masker.dirty_rect());
    }

    assert!(rp.cleanup());
}

#[test]
fn test_order_independence() {
    // Seeding the same set of points in opposite orders yields the same mask
    let image = noise_image(48, 32, 60, 99);
    let seeds: Vec<(i32, i32)> = {
        let mut rng = Lcg(3);
        (0..20)
            .map(|_| (rng.below(48) as i32, rng.below(32) as i32))
            .collect()
    };

    let mut forward = Masker::new(image.clone()).unwrap();
    let total_fwd: usize = seeds.iter().map(|&(x, y)| forward.mask(x, y).unwrap()).sum();

    let mut backward = Masker::new(image).unwrap();
    let total_bwd: usize = seeds
        .iter()
        .rev()
        .map(|&(x, y)| backward.mask(x, y).unwrap())
        .sum();

    assert_eq!(total_fwd, total_bwd);
    assert_eq!(forward.mask_buffer(), backward.mask_buffer());
    assert_eq!(forward.dirty_rect(), backward.dirty_rect());
}
