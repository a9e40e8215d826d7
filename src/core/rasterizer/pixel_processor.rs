use super::triangle_data::{BoundingBox, TriangleData};
use crate::core::depth_buffer::DepthBuffer;
use crate::core::frame_buffer::FrameBuffer;
use crate::geometry::interpolation::{
    barycentric_coordinates, interpolate_depth, interpolate_texcoords, is_inside_triangle,
};
use crate::material_system::color::{Rgb8, shade_intensity};
use nalgebra::{Point2, Vector2, Vector3};

/// 通过覆盖测试的片元
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub x: usize,
    pub y: usize,
    pub bary: Vector3<f32>,
    pub depth: f32,
    pub texcoord: Vector2<f32>,
}

/// 光栅化单个三角形，返回写入的像素数
///
/// 遍历包围盒内每个像素中心，重心坐标全部落在 [0, 1] 的像素做深度测试，
/// 插值深度严格大于深度缓冲中的值时才同时更新深度和颜色。
/// 退化三角形不产生任何写入。
///
/// # Panics
///
/// 深度缓冲区与帧缓冲区尺寸不一致时 panic。
pub fn rasterize_triangle(
    triangle: &TriangleData,
    frame_buffer: &mut FrameBuffer,
    depth_buffer: &mut DepthBuffer,
) -> usize {
    assert!(
        depth_buffer.width() == frame_buffer.width()
            && depth_buffer.height() == frame_buffer.height(),
        "深度缓冲区 {}x{} 与帧缓冲区 {}x{} 尺寸不一致",
        depth_buffer.width(),
        depth_buffer.height(),
        frame_buffer.width(),
        frame_buffer.height()
    );

    let color = shade_intensity(triangle.intensity);
    let mut written = 0;

    for_each_fragment(
        triangle,
        frame_buffer.width(),
        frame_buffer.height(),
        |fragment| {
            if depth_buffer.test_and_set(fragment.x, fragment.y, fragment.depth) {
                write_pixel_color(frame_buffer, fragment.x, fragment.y, color);
                written += 1;
            }
        },
    );

    written
}

/// 对三角形覆盖的每个像素回调一次，带插值后的深度和纹理坐标
pub fn for_each_fragment<F>(triangle: &TriangleData, width: usize, height: usize, mut callback: F)
where
    F: FnMut(Fragment),
{
    if !triangle.is_valid() {
        return;
    }

    let bbox = match BoundingBox::from_triangle(triangle, width, height) {
        Some(bbox) => bbox,
        None => return,
    };

    let [v0, v1, v2] = &triangle.vertices;

    bbox.for_each_pixel(|x, y| {
        let pixel_center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);

        let bary = match barycentric_coordinates(pixel_center, v0.pix, v1.pix, v2.pix) {
            Some(bary) => bary,
            None => return,
        };

        if !is_inside_triangle(bary) {
            return;
        }

        callback(Fragment {
            x,
            y,
            bary,
            depth: interpolate_depth(bary, v0.z, v1.z, v2.z),
            texcoord: interpolate_texcoords(bary, v0.texcoord, v1.texcoord, v2.texcoord),
        });
    });
}

#[inline]
fn write_pixel_color(frame_buffer: &mut FrameBuffer, x: usize, y: usize, color: Rgb8) {
    frame_buffer.set_pixel(x as i32, y as i32, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rasterizer::VertexRenderData;
    use crate::material_system::color::{BLACK, WHITE};

    fn flat_triangle(points: [(f32, f32); 3], z: f32, intensity: f32) -> TriangleData {
        TriangleData::new(
            points.map(|(x, y)| VertexRenderData::new(x, y, z)),
            intensity,
        )
    }

    fn buffers(size: usize) -> (FrameBuffer, DepthBuffer) {
        (FrameBuffer::new(size, size), DepthBuffer::new(size, size))
    }

    #[test]
    fn degenerate_triangle_writes_nothing() {
        let (mut fb, mut zbuf) = buffers(16);
        let t = flat_triangle([(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)], 0.0, 1.0);
        assert_eq!(rasterize_triangle(&t, &mut fb, &mut zbuf), 0);
        assert_eq!(fb.count_non_black(), 0);
        assert!(zbuf.is_untouched());
    }

    #[test]
    fn coincident_vertices_write_nothing() {
        let (mut fb, mut zbuf) = buffers(8);
        let t = flat_triangle([(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)], 0.0, 1.0);
        assert_eq!(rasterize_triangle(&t, &mut fb, &mut zbuf), 0);
        assert!(zbuf.is_untouched());
    }

    #[test]
    fn interior_pixels_are_white_at_full_intensity() {
        let (mut fb, mut zbuf) = buffers(32);
        let t = flat_triangle([(2.0, 2.0), (28.0, 2.0), (2.0, 28.0)], 0.0, 1.0);
        let written = rasterize_triangle(&t, &mut fb, &mut zbuf);
        assert!(written > 0);
        assert_eq!(written, fb.count_non_black());

        let [v0, v1, v2] = t.vertices.map(|v| v.pix);
        for y in 0..32 {
            for x in 0..32 {
                let center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
                let bary = barycentric_coordinates(center, v0, v1, v2).unwrap();
                if bary.iter().all(|&w| w > 0.0 && w < 1.0) {
                    assert_eq!(fb.get_pixel(x, y), Some(WHITE), "pixel ({x}, {y})");
                }
                if !is_inside_triangle(bary) {
                    assert_eq!(fb.get_pixel(x, y), Some(BLACK), "pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn half_intensity_is_consistent() {
        let (mut fb, mut zbuf) = buffers(16);
        let t = flat_triangle([(0.0, 0.0), (16.0, 0.0), (0.0, 16.0)], 0.0, 0.5);
        rasterize_triangle(&t, &mut fb, &mut zbuf);
        assert_eq!(fb.get_pixel(2, 2), Some([127, 127, 127]));
        assert_eq!(fb.get_pixel(6, 3), Some([127, 127, 127]));
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let points = [(1.0, 14.0), (13.0, 2.0), (4.0, 3.0)];
        let mut results = Vec::new();
        for rotation in 0..3 {
            let mut rotated = points;
            rotated.rotate_left(rotation);
            for order in [rotated, [rotated[0], rotated[2], rotated[1]]] {
                let (mut fb, mut zbuf) = buffers(16);
                rasterize_triangle(&flat_triangle(order, 0.0, 1.0), &mut fb, &mut zbuf);
                results.push(fb);
            }
        }
        assert!(results[0].count_non_black() > 0);
        for fb in &results[1..] {
            assert_eq!(fb, &results[0]);
        }
    }

    #[test]
    fn nearer_triangle_wins_in_either_order() {
        let far = flat_triangle([(0.0, 0.0), (16.0, 0.0), (0.0, 16.0)], -0.5, 0.5);
        let near = flat_triangle([(2.0, 2.0), (14.0, 2.0), (2.0, 14.0)], 0.5, 1.0);

        let (mut fb_a, mut zbuf_a) = buffers(16);
        rasterize_triangle(&far, &mut fb_a, &mut zbuf_a);
        rasterize_triangle(&near, &mut fb_a, &mut zbuf_a);

        let (mut fb_b, mut zbuf_b) = buffers(16);
        rasterize_triangle(&near, &mut fb_b, &mut zbuf_b);
        rasterize_triangle(&far, &mut fb_b, &mut zbuf_b);

        assert_eq!(fb_a, fb_b);
        assert_eq!(zbuf_a, zbuf_b);
        assert_eq!(fb_a.get_pixel(4, 4), Some(WHITE));
        assert_eq!(fb_a.get_pixel(1, 1), Some([127, 127, 127]));
        assert_eq!(zbuf_a.get(4, 4), Some(0.5));
    }

    #[test]
    fn interpolated_depth_decides_visibility() {
        // 两个三角形在 x = 8 处深度相交：左侧 a 更近，右侧 b 更近
        let a = TriangleData::new(
            [
                VertexRenderData::new(0.0, 0.0, 1.0),
                VertexRenderData::new(16.0, 0.0, -1.0),
                VertexRenderData::new(0.0, 16.0, 1.0),
            ],
            1.0,
        );
        let b = TriangleData::new(
            [
                VertexRenderData::new(0.0, 0.0, -1.0),
                VertexRenderData::new(16.0, 0.0, 1.0),
                VertexRenderData::new(0.0, 16.0, -1.0),
            ],
            0.5,
        );
        for order in [[&a, &b], [&b, &a]] {
            let (mut fb, mut zbuf) = buffers(16);
            for t in order {
                rasterize_triangle(t, &mut fb, &mut zbuf);
            }
            assert_eq!(fb.get_pixel(2, 1), Some(WHITE));
            assert_eq!(fb.get_pixel(12, 1), Some([127, 127, 127]));
        }
    }

    #[test]
    fn shared_edge_pixels_go_to_the_nearer_triangle() {
        // 两个三角形共享对角线 x + y = 8，像素 (3, 4) 的中心恰好落在这条边上
        let lower = flat_triangle([(0.0, 0.0), (8.0, 0.0), (0.0, 8.0)], 0.0, 1.0);
        let upper_near = flat_triangle([(8.0, 0.0), (8.0, 8.0), (0.0, 8.0)], 0.5, 0.5);
        let upper_far = flat_triangle([(8.0, 0.0), (8.0, 8.0), (0.0, 8.0)], -0.5, 0.5);

        for (upper, edge_color) in [(&upper_near, [127, 127, 127]), (&upper_far, WHITE)] {
            for order in [[&lower, upper], [upper, &lower]] {
                let (mut fb, mut zbuf) = buffers(8);
                for t in order {
                    rasterize_triangle(t, &mut fb, &mut zbuf);
                }
                assert_eq!(fb.count_non_black(), 64);
                assert_eq!(fb.get_pixel(3, 4), Some(edge_color));
                assert_eq!(fb.get_pixel(1, 1), Some(WHITE));
                assert_eq!(fb.get_pixel(6, 6), Some([127, 127, 127]));
            }
        }
    }

    #[test]
    #[should_panic]
    fn mismatched_depth_buffer_panics() {
        let mut fb = FrameBuffer::new(16, 16);
        let mut zbuf = DepthBuffer::new(8, 8);
        let t = flat_triangle([(0.0, 0.0), (16.0, 0.0), (0.0, 16.0)], 0.0, 1.0);
        rasterize_triangle(&t, &mut fb, &mut zbuf);
    }

    #[test]
    fn fragments_carry_interpolated_texcoords() {
        let t = TriangleData::new(
            [
                VertexRenderData::new(0.0, 0.0, 0.0).with_texcoord(Vector2::new(0, 0)),
                VertexRenderData::new(8.0, 0.0, 0.0).with_texcoord(Vector2::new(800, 0)),
                VertexRenderData::new(0.0, 8.0, 0.0).with_texcoord(Vector2::new(0, 800)),
            ],
            1.0,
        );
        let mut fragments = Vec::new();
        for_each_fragment(&t, 8, 8, |f| fragments.push(f));
        let f = fragments
            .iter()
            .find(|f| f.x == 1 && f.y == 2)
            .expect("pixel (1, 2) is covered");
        assert!((f.texcoord - Vector2::new(150.0, 250.0)).norm() < 1e-2);
        assert!((f.bary.sum() - 1.0).abs() < 1e-5);
    }
}
