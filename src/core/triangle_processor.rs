use crate::core::mesh::MeshProvider;
use crate::core::rasterizer::{TriangleData, VertexRenderData};
use crate::geometry::culling::face_normal;
use crate::geometry::transform::object_to_screen;
use crate::material_system::light::DirectionalLight;

/// 单个面的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum FaceOutcome {
    /// 光照强度为正，可以光栅化
    Visible(TriangleData),
    /// 光照强度不为正（背向光源）或法线不存在
    Culled,
}

/// 三角形处理器，负责投影、光照计算和剔除
pub struct TriangleProcessor;

impl TriangleProcessor {
    /// 处理第 `face_index` 个面
    ///
    /// 法线由物体空间（未投影）坐标计算，顶点按正交投影映射到 `width × height` 的屏幕。
    pub fn process_face<M: MeshProvider + ?Sized>(
        model: &M,
        face_index: usize,
        width: usize,
        height: usize,
        light: &DirectionalLight,
    ) -> FaceOutcome {
        let indices = model.face_vertex_indices(face_index);
        let object_coords = indices.map(|i| model.vertex_position(i));

        let intensity = match face_normal(&object_coords[0], &object_coords[1], &object_coords[2])
        {
            Some(normal) => light.intensity(&normal),
            None => return FaceOutcome::Culled,
        };

        // 背面剔除
        if intensity <= 0.0 {
            return FaceOutcome::Culled;
        }

        let mut corner = 0;
        let vertices = object_coords.map(|coords| {
            let screen = object_to_screen(&coords, width, height);
            let texcoord = model.face_texcoord(face_index, corner);
            corner += 1;
            VertexRenderData::new(screen.x, screen.y, screen.z).with_texcoord(texcoord)
        });

        FaceOutcome::Visible(TriangleData::new(vertices, intensity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mesh::{Face, ModelData};
    use nalgebra::{Point2, Point3, Vector2, Vector3};

    fn model(vertices: Vec<Point3<f32>>) -> ModelData {
        ModelData::new(
            "test",
            vertices,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(0.5, 0.0),
                Vector2::new(0.0, 0.25),
            ],
            vec![Face::with_texcoords([0, 1, 2], [0, 1, 2])],
            Vector2::new(100, 100),
        )
        .unwrap()
    }

    #[test]
    fn front_facing_face_is_projected() {
        let m = model(vec![
            Point3::new(-1.0, -1.0, 0.2),
            Point3::new(1.0, -1.0, 0.2),
            Point3::new(-1.0, 1.0, 0.2),
        ]);
        let outcome =
            TriangleProcessor::process_face(&m, 0, 800, 600, &DirectionalLight::default());
        let FaceOutcome::Visible(triangle) = outcome else {
            panic!("face should be visible");
        };
        assert!((triangle.intensity - 1.0).abs() < 1e-6);
        assert_eq!(triangle.vertices[0].pix, Point2::new(0.0, 0.0));
        assert_eq!(triangle.vertices[1].pix, Point2::new(800.0, 0.0));
        assert_eq!(triangle.vertices[2].pix, Point2::new(0.0, 600.0));
        assert_eq!(triangle.vertices[2].z, 0.2);
        assert_eq!(triangle.vertices[1].texcoord, Vector2::new(50, 0));
        assert_eq!(triangle.vertices[2].texcoord, Vector2::new(0, 25));
    }

    #[test]
    fn back_facing_face_is_culled() {
        let m = model(vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        ]);
        let outcome =
            TriangleProcessor::process_face(&m, 0, 64, 64, &DirectionalLight::default());
        assert_eq!(outcome, FaceOutcome::Culled);
    }

    #[test]
    fn edge_on_face_is_culled() {
        // 法线垂直于光照方向，强度恰好为 0
        let m = model(vec![
            Point3::new(0.0, -1.0, -1.0),
            Point3::new(0.0, 1.0, -1.0),
            Point3::new(0.0, -1.0, 1.0),
        ]);
        let outcome =
            TriangleProcessor::process_face(&m, 0, 64, 64, &DirectionalLight::default());
        assert_eq!(outcome, FaceOutcome::Culled);
    }

    #[test]
    fn oblique_light_scales_intensity() {
        let m = model(vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ]);
        let light = DirectionalLight::new(Vector3::new(0.0, 1.0, -1.0)).unwrap();
        let FaceOutcome::Visible(triangle) = TriangleProcessor::process_face(&m, 0, 64, 64, &light)
        else {
            panic!("face should be visible");
        };
        assert!((triangle.intensity - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }
}
