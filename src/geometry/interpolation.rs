use nalgebra::{Point2, Vector2, Vector3};

const EPSILON: f32 = 1e-5; // 浮点比较的容差

/// 计算点 p 相对于二维三角形 (v0, v1, v2) 的重心坐标 (alpha, beta, gamma)
///
/// alpha 对应 v0，beta 对应 v1，gamma 对应 v2，三者之和为 1。
/// 三角形退化（面积为零）时返回 None，调用方不会除以零。
pub fn barycentric_coordinates(
    p: Point2<f32>,
    v0: Point2<f32>,
    v1: Point2<f32>,
    v2: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let p_v0 = p - v0;

    // 二维叉积行列式，等于三角形面积的两倍（带符号）
    let total_area_x2 = e1.x * e2.y - e1.y * e2.x;

    if total_area_x2.abs() < EPSILON {
        return None;
    }

    let inv_total_area_x2 = 1.0 / total_area_x2;

    // 子三角形 (p, v2, v0) 的面积比 -> v1 的权重
    let beta = (p_v0.x * e2.y - p_v0.y * e2.x) * inv_total_area_x2;
    // 子三角形 (p, v0, v1) 的面积比 -> v2 的权重
    let gamma = (e1.x * p_v0.y - e1.y * p_v0.x) * inv_total_area_x2;
    let alpha = 1.0 - beta - gamma;

    Some(Vector3::new(alpha, beta, gamma))
}

/// 三个重心坐标都落在 [0, 1]（含边界，允许微小误差）时点在三角形内
#[inline(always)]
pub fn is_inside_triangle(bary: Vector3<f32>) -> bool {
    bary.iter()
        .all(|&weight| (-EPSILON..=1.0 + EPSILON).contains(&weight))
}

/// 正交投影下的线性深度插值
#[inline]
pub fn interpolate_depth(bary: Vector3<f32>, z0: f32, z1: f32, z2: f32) -> f32 {
    bary.x * z0 + bary.y * z1 + bary.z * z2
}

/// 线性插值纹理坐标（纹素空间）
pub fn interpolate_texcoords(
    bary: Vector3<f32>,
    tc0: Vector2<i32>,
    tc1: Vector2<i32>,
    tc2: Vector2<i32>,
) -> Vector2<f32> {
    tc0.cast::<f32>() * bary.x + tc1.cast::<f32>() * bary.y + tc2.cast::<f32>() * bary.z
}
