use image::{ImageBuffer, Luma};
use keiko::euclid::default::{Point2D, SideOffsets2D};
use keiko::{HighlightBlock, LineRect, SliceLineSource};

/// Line boxes shaped like a short ragged paragraph.
fn demo_lines() -> Vec<LineRect> {
    vec![
        LineRect::new(20.0, 20.0, 300.0, 52.0),
        LineRect::new(20.0, 52.0, 220.0, 84.0),
        LineRect::new(20.0, 84.0, 340.0, 116.0),
        LineRect::new(20.0, 116.0, 140.0, 148.0),
        LineRect::new(20.0, 148.0, 260.0, 180.0),
    ]
}

/// Even-odd scanline fill of the resolved polygon loops.
fn fill_polygons(
    image: &mut ImageBuffer<Luma<u8>, Vec<u8>>,
    polygons: &[Vec<Point2D<f32>>],
    shade: u8,
) {
    let (width, height) = image.dimensions();

    for py in 0..height {
        let y = py as f32 + 0.5;
        let mut crossings: Vec<f32> = vec![];

        for ring in polygons {
            let n = ring.len();
            for i in 0..n {
                let a = ring[i];
                let b = ring[(i + 1) % n];
                if (a.y <= y) != (b.y <= y) {
                    crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));

        for span in crossings.chunks_exact(2) {
            let from = span[0].max(0.0) as u32;
            let to = (span[1].min(width as f32)).max(0.0) as u32;
            for px in from..to {
                image.put_pixel(px, py, Luma([shade]));
            }
        }
    }
}

#[allow(clippy::unwrap_used)]
fn main() {
    let lines = demo_lines();

    let mut block = HighlightBlock::new();
    block.set_outset(SideOffsets2D::new_all_same(6.0));
    let path = block.update(&SliceLineSource::new(&lines));

    println!("outline: {} commands", path.len());

    let mut image: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(400, 200);
    fill_polygons(&mut image, &path.polygons(), 200);

    let output = "outline_demo.png";
    image.save(output).unwrap();
    println!("wrote {output}");
}
