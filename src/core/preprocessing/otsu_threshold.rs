use image::{GrayImage, Luma};

pub const FOREGROUND_VALUE: u8 = 255;
pub const BACKGROUND_VALUE: u8 = 0;

pub fn compute_intensity_histogram(image: &GrayImage) -> [u64; 256] {
    let mut histogram = [0u64; 256];

    for pixel in image.pixels() {
        histogram[pixel[0] as usize] += 1;
    }

    histogram
}

/// Otsu's method: the level that maximizes between-class variance, which is
/// the same level that minimizes the weighted intra-class variance.
/// Pixels `<= level` form the dark class.
pub fn otsu_threshold_level(image: &GrayImage) -> u8 {
    let histogram = compute_intensity_histogram(image);
    let total_pixels: u64 = histogram.iter().sum();

    if total_pixels == 0 {
        return 0;
    }

    let weighted_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(intensity, count)| intensity as f64 * *count as f64)
        .sum();

    let mut dark_weight = 0u64;
    let mut dark_weighted_sum = 0f64;
    let mut best_variance = 0f64;
    let mut best_level = 0u8;

    for (intensity, count) in histogram.iter().enumerate() {
        dark_weight += count;
        if dark_weight == 0 {
            continue;
        }

        let light_weight = total_pixels - dark_weight;
        if light_weight == 0 {
            break;
        }

        dark_weighted_sum += intensity as f64 * *count as f64;

        let dark_mean = dark_weighted_sum / dark_weight as f64;
        let light_mean = (weighted_total - dark_weighted_sum) / light_weight as f64;
        let mean_gap = dark_mean - light_mean;
        let between_class_variance = dark_weight as f64 * light_weight as f64 * mean_gap * mean_gap;

        if between_class_variance > best_variance {
            best_variance = between_class_variance;
            best_level = intensity as u8;
        }
    }

    best_level
}

pub fn binarize_at_level(image: &GrayImage, level: u8) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if image.get_pixel(x, y)[0] > level {
            Luma([FOREGROUND_VALUE])
        } else {
            Luma([BACKGROUND_VALUE])
        }
    })
}
