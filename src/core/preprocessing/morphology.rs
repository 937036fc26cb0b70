use image::{GrayImage, Luma};

#[derive(Clone, Copy)]
enum KernelAnchor {
    // samples (x - dx, y - dy)
    BottomRight,
    // samples (x + dx, y + dy)
    TopLeft,
}

fn apply_square_kernel(
    image: &GrayImage,
    kernel_size: u32,
    anchor: KernelAnchor,
    initial_value: u8,
    combine: fn(u8, u8) -> u8,
) -> GrayImage {
    let (width, height) = image.dimensions();

    GrayImage::from_fn(width, height, |x, y| {
        let mut accumulated = initial_value;

        for dy in 0..kernel_size {
            for dx in 0..kernel_size {
                let source = match anchor {
                    KernelAnchor::BottomRight => x.checked_sub(dx).zip(y.checked_sub(dy)),
                    KernelAnchor::TopLeft => Some((x + dx, y + dy))
                        .filter(|(source_x, source_y)| *source_x < width && *source_y < height),
                };

                if let Some((source_x, source_y)) = source {
                    accumulated = combine(accumulated, image.get_pixel(source_x, source_y)[0]);
                }
            }
        }

        Luma([accumulated])
    })
}

pub fn dilate(image: &GrayImage, kernel_size: u32) -> GrayImage {
    apply_square_kernel(image, kernel_size, KernelAnchor::BottomRight, u8::MIN, u8::max)
}

pub fn erode(image: &GrayImage, kernel_size: u32) -> GrayImage {
    apply_square_kernel(image, kernel_size, KernelAnchor::TopLeft, u8::MAX, u8::min)
}

/// Dilate then erode. Erosion uses the reflected element so the closed
/// shape stays registered with the input and the result is never darker
/// than the input at any pixel.
pub fn close(image: &GrayImage, kernel_size: u32) -> GrayImage {
    let dilated = dilate(image, kernel_size);
    erode(&dilated, kernel_size)
}
