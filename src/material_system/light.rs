use nalgebra::Vector3;

/// 固定方向的平行光
///
/// `direction` 是光线传播的方向。面法线与它的点积就是该面的漫反射强度，
/// 点积不为正的面视为背向光源。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vector3<f32>,
}

impl DirectionalLight {
    /// 创建定向光源，方向会被归一化；零向量返回 None
    pub fn new(direction: Vector3<f32>) -> Option<Self> {
        direction
            .try_normalize(1e-12)
            .map(|direction| Self { direction })
    }

    pub fn direction(&self) -> Vector3<f32> {
        self.direction
    }

    /// 计算单位法线的光照强度（未夹紧，可能为负）
    #[inline]
    pub fn intensity(&self, normal: &Vector3<f32>) -> f32 {
        normal.dot(&self.direction)
    }
}

impl Default for DirectionalLight {
    /// 沿 -Z 方向照射，即从观察者射向屏幕内部
    fn default() -> Self {
        Self {
            direction: Vector3::new(0.0, 0.0, -1.0),
        }
    }
}
