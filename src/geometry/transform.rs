use nalgebra::{Point2, Point3};

/// 正交投影：把归一化到 [-1, 1] 的物体坐标映射到像素坐标
///
/// x、y 线性缩放到 `[0, width]`、`[0, height]`，z 原样保留作为相对深度（越大越近）。
#[inline]
pub fn object_to_screen(position: &Point3<f32>, width: usize, height: usize) -> Point3<f32> {
    Point3::new(
        (position.x + 1.0) * width as f32 / 2.0,
        (position.y + 1.0) * height as f32 / 2.0,
        position.z,
    )
}

/// 投影后取整到像素网格，供线框绘制使用
#[inline]
pub fn object_to_pixel(position: &Point3<f32>, width: usize, height: usize) -> Point2<i32> {
    let screen = object_to_screen(position, width, height);
    Point2::new(screen.x as i32, screen.y as i32)
}
