use crate::geometry::culling::is_degenerate;
use nalgebra::{Point2, Vector2};

/// 顶点渲染数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRenderData {
    /// 屏幕空间像素坐标
    pub pix: Point2<f32>,
    /// 相对深度，越大越近
    pub z: f32,
    /// 纹素空间纹理坐标，只参与插值
    pub texcoord: Vector2<i32>,
}

impl VertexRenderData {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        VertexRenderData {
            pix: Point2::new(x, y),
            z,
            texcoord: Vector2::zeros(),
        }
    }

    pub fn with_texcoord(mut self, texcoord: Vector2<i32>) -> Self {
        self.texcoord = texcoord;
        self
    }
}

/// 三角形光栅化数据
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleData {
    pub vertices: [VertexRenderData; 3],
    /// 平面着色强度，取值 [0, 1]
    pub intensity: f32,
}

impl TriangleData {
    pub fn new(vertices: [VertexRenderData; 3], intensity: f32) -> Self {
        TriangleData {
            vertices,
            intensity,
        }
    }

    pub fn is_valid(&self) -> bool {
        let [v0, v1, v2] = &self.vertices;
        !is_degenerate(&v0.pix, &v1.pix, &v2.pix)
    }
}

/// 屏幕空间包围盒：`[min_x, max_x) × [min_y, max_y)` 范围内的像素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    /// 两个轴分别对三个顶点求真实的最小、最大值，与顶点顺序无关。
    /// 下界向下取整、上界向上取整后夹紧到 `width × height`，
    /// 与屏幕没有交集时返回 None。
    pub fn from_triangle(triangle: &TriangleData, width: usize, height: usize) -> Option<Self> {
        let (lo, hi) = triangle.vertices.iter().fold(
            (
                Point2::new(f32::INFINITY, f32::INFINITY),
                Point2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
            ),
            |(lo, hi), v| (lo.inf(&v.pix), hi.sup(&v.pix)),
        );

        let clamp_axis = |lo: f32, hi: f32, extent: usize| -> Option<(usize, usize)> {
            let start = lo.floor().max(0.0) as usize;
            let end = hi.ceil().min(extent as f32) as usize;
            (start < end).then_some((start, end))
        };

        let (min_x, max_x) = clamp_axis(lo.x, hi.x, width)?;
        let (min_y, max_y) = clamp_axis(lo.y, hi.y, height)?;
        Some(BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// 按行优先顺序访问包围盒内的每个像素
    pub fn for_each_pixel<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize),
    {
        (self.min_y..self.max_y)
            .flat_map(|y| (self.min_x..self.max_x).map(move |x| (x, y)))
            .for_each(|(x, y)| visit(x, y));
    }
}
