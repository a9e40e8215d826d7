use nalgebra::{Vector2, Vector3};

/// 未指定模型路径时使用的默认资源
pub const DEFAULT_OBJ_PATH: &str = "obj/african_head.obj";

/// 所有渲染参数
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    // ===== 文件路径设置 =====
    /// 输入OBJ文件的路径
    pub obj: String,
    /// 输出图像路径，格式由扩展名决定
    pub output: String,

    // ===== 渲染基础设置 =====
    /// 输出图像的宽度
    pub width: usize,
    /// 输出图像的高度
    pub height: usize,
    /// 光线传播方向
    pub light_direction: Vector3<f32>,
    /// 以线框模式渲染
    pub wireframe: bool,
    /// 线框模式下为每个面使用伪随机颜色
    pub colorize: bool,
    /// 纹理坐标所在的纹素空间尺寸
    pub texture_extent: Vector2<u32>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            obj: DEFAULT_OBJ_PATH.to_string(),
            output: "output.tga".to_string(),
            width: 800,
            height: 800,
            light_direction: Vector3::new(0.0, 0.0, -1.0),
            wireframe: false,
            colorize: false,
            texture_extent: Vector2::new(1024, 1024),
        }
    }
}

impl RenderSettings {
    /// 检查参数是否可用于渲染
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "图像尺寸必须为正数，当前为 {}x{}",
                self.width, self.height
            ));
        }
        if self.light_direction.norm_squared() <= 1e-12 {
            return Err("光照方向不能为零向量".to_string());
        }
        if self.obj.trim().is_empty() {
            return Err("未指定模型文件路径".to_string());
        }
        Ok(())
    }

    /// 渲染模式的描述字符串
    pub fn get_mode_description(&self) -> &'static str {
        match (self.wireframe, self.colorize) {
            (true, true) => "彩色线框",
            (true, false) => "线框",
            (false, _) => "平面着色 + Z缓冲",
        }
    }
}
