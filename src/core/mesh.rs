use nalgebra::{Point3, Vector2};

/// 渲染核心所需的网格访问接口
///
/// 场景驱动只通过这个 trait 读取模型，不关心数据来自 OBJ 文件还是内存。
pub trait MeshProvider {
    /// 三角形面的数量
    fn face_count(&self) -> usize;

    /// 第 `face` 个面的三个顶点索引
    fn face_vertex_indices(&self, face: usize) -> [usize; 3];

    /// 物体空间顶点坐标
    fn vertex_position(&self, index: usize) -> Point3<f32>;

    /// 第 `face` 个面第 `corner` 个角的纹理坐标（纹素空间，整数）
    fn face_texcoord(&self, face: usize, corner: usize) -> Vector2<i32>;
}

/// 一个三角形面：三个顶点索引和（可选的）三个纹理坐标索引
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub vertex_indices: [usize; 3],
    pub texcoord_indices: Option<[usize; 3]>,
}

impl Face {
    pub fn new(vertex_indices: [usize; 3]) -> Self {
        Face {
            vertex_indices,
            texcoord_indices: None,
        }
    }

    pub fn with_texcoords(vertex_indices: [usize; 3], texcoord_indices: [usize; 3]) -> Self {
        Face {
            vertex_indices,
            texcoord_indices: Some(texcoord_indices),
        }
    }
}

/// 内存中的三角形网格
///
/// 只能通过 [`ModelData::new`] 构造，字段只读，所以索引在构造后始终有效。
#[derive(Debug, Clone)]
pub struct ModelData {
    name: String,
    vertices: Vec<Point3<f32>>,
    /// 归一化的 UV 坐标，取值通常在 [0, 1]
    texcoords: Vec<Vector2<f32>>,
    faces: Vec<Face>,
    /// UV 乘以该尺寸得到整数纹素坐标
    texture_extent: Vector2<u32>,
}

impl ModelData {
    /// 创建网格并检查所有索引都在范围内
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Point3<f32>>,
        texcoords: Vec<Vector2<f32>>,
        faces: Vec<Face>,
        texture_extent: Vector2<u32>,
    ) -> Result<Self, String> {
        let model = ModelData {
            name: name.into(),
            vertices,
            texcoords,
            faces,
            texture_extent,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn texcoords(&self) -> &[Vector2<f32>] {
        &self.texcoords
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn texture_extent(&self) -> Vector2<u32> {
        self.texture_extent
    }

    /// 检查每个面的顶点索引和纹理坐标索引
    fn validate(&self) -> Result<(), String> {
        for (i, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face
                .vertex_indices
                .iter()
                .find(|&&idx| idx >= self.vertices.len())
            {
                return Err(format!(
                    "面 {} 的顶点索引 {} 越界（顶点数 {}）",
                    i,
                    bad,
                    self.vertices.len()
                ));
            }
            if let Some(tc) = face.texcoord_indices {
                if let Some(&bad) = tc.iter().find(|&&idx| idx >= self.texcoords.len()) {
                    return Err(format!(
                        "面 {} 的纹理坐标索引 {} 越界（纹理坐标数 {}）",
                        i,
                        bad,
                        self.texcoords.len()
                    ));
                }
            }
        }
        Ok(())
    }
}

impl MeshProvider for ModelData {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face_vertex_indices(&self, face: usize) -> [usize; 3] {
        self.faces[face].vertex_indices
    }

    fn vertex_position(&self, index: usize) -> Point3<f32> {
        self.vertices[index]
    }

    fn face_texcoord(&self, face: usize, corner: usize) -> Vector2<i32> {
        match self.faces[face].texcoord_indices {
            Some(indices) => {
                let uv = self.texcoords[indices[corner]];
                Vector2::new(
                    (uv.x * self.texture_extent.x as f32) as i32,
                    (uv.y * self.texture_extent.y as f32) as i32,
                )
            }
            None => Vector2::zeros(),
        }
    }
}
