use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 线性RGB颜色，分量范围 [0.0, 1.0]
pub type Color = Vector3<f32>;

/// 帧缓冲区中的像素颜色（8位RGB）
pub type Rgb8 = [u8; 3];

pub const BLACK: Rgb8 = [0, 0, 0];
pub const WHITE: Rgb8 = [255, 255, 255];
pub const RED: Rgb8 = [255, 0, 0];
pub const GREEN: Rgb8 = [0, 255, 0];
pub const BLUE: Rgb8 = [0, 0, 255];

/// 将线性RGB值转换为u8数组
///
/// 每个通道先乘以255再截断（向零取整），超出范围的值被夹紧。
/// 因此强度0.5得到127，而不是128。
pub fn linear_rgb_to_u8(color: &Color) -> Rgb8 {
    [
        (color.x * 255.0).clamp(0.0, 255.0) as u8,
        (color.y * 255.0).clamp(0.0, 255.0) as u8,
        (color.z * 255.0).clamp(0.0, 255.0) as u8,
    ]
}

/// 平面着色：把光照强度均匀地作用到R、G、B三个通道
#[inline]
pub fn shade_intensity(intensity: f32) -> Rgb8 {
    linear_rgb_to_u8(&Color::new(intensity, intensity, intensity))
}

/// 根据面索引生成确定性的伪随机颜色
///
/// 以面索引作为随机数种子，同一个面在每次运行中得到同样的颜色。
pub fn get_face_color(face_index: usize) -> Color {
    let mut rng = StdRng::seed_from_u64(face_index as u64);
    Color::new(
        0.3 + rng.random::<f32>() * 0.7,
        0.3 + rng.random::<f32>() * 0.7,
        0.3 + rng.random::<f32>() * 0.7,
    )
}
