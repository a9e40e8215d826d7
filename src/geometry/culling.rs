use nalgebra::{Point2, Point3, Vector3};

/// 由物体空间（未投影）的三个顶点计算单位面法线
///
/// 法线为 `(v2 - v0) × (v1 - v0)`。对于在 XY 平面内逆时针排列、朝向 +Z 的三角形，
/// 该法线指向 -Z，与默认光照方向一致。退化面（叉积长度为零）返回 None。
pub fn face_normal(v0: &Point3<f32>, v1: &Point3<f32>, v2: &Point3<f32>) -> Option<Vector3<f32>> {
    let edge1 = v2 - v0;
    let edge2 = v1 - v0;
    edge1.cross(&edge2).try_normalize(1e-12)
}

/// 屏幕空间三角形的有符号面积的两倍
#[inline]
pub fn signed_area_x2(v0: &Point2<f32>, v1: &Point2<f32>, v2: &Point2<f32>) -> f32 {
    (v1.x - v0.x) * (v2.y - v0.y) - (v2.x - v0.x) * (v1.y - v0.y)
}

/// 屏幕空间面积为零（共线或重合顶点）的三角形不产生任何像素
#[inline]
pub fn is_degenerate(v0: &Point2<f32>, v1: &Point2<f32>, v2: &Point2<f32>) -> bool {
    signed_area_x2(v0, v1, v2).abs() < 1e-5
}
