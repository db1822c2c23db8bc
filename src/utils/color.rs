use nalgebra::Vector3;

/// Represents an RGB color with float components [0.0, 1.0].
pub type Color = Vector3<f32>;

/// Applies gamma correction, converting linear RGB values to sRGB space.
///
/// # Arguments
/// * `linear_color` - RGB color in linear space [0.0-1.0]
///
/// # Returns
/// Gamma corrected RGB color [0.0-1.0]
pub fn apply_gamma_correction(linear_color: &Color) -> Color {
    // Standard gamma value 2.2
    let gamma = 2.2;
    let inv_gamma = 1.0 / gamma;

    Color::new(
        linear_color.x.powf(inv_gamma),
        linear_color.y.powf(inv_gamma),
        linear_color.z.powf(inv_gamma),
    )
}

/// Converts a linear RGB color to a u8 array, optionally applying gamma
/// correction first.
///
/// # Arguments
/// * `linear_color` - RGB color in linear space [0.0-1.0]
/// * `apply_gamma` - whether to apply gamma correction
///
/// # Returns
/// An array of three u8 values for the RGB channels
pub fn linear_rgb_to_u8(linear_color: &Color, apply_gamma: bool) -> [u8; 3] {
    let display_color = if apply_gamma {
        apply_gamma_correction(linear_color)
    } else {
        *linear_color
    };

    [
        (display_color.x * 255.0).clamp(0.0, 255.0) as u8,
        (display_color.y * 255.0).clamp(0.0, 255.0) as u8,
        (display_color.z * 255.0).clamp(0.0, 255.0) as u8,
    ]
}
