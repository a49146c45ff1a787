use argh::FromArgs;
use rand::{rngs::StdRng, SeedableRng};

use pointview::viewer::{FrameBuffer, PointViewer, ViewerEvent, ViewerParams};

#[derive(FromArgs, Debug)]
/// Drive the point viewer with a scripted drag / zoom / rotate session.
struct Args {
    /// viewport width in pixels
    #[argh(option, default = "800")]
    width: usize,

    /// viewport height in pixels
    #[argh(option, default = "600")]
    height: usize,

    /// number of random points to start with
    #[argh(option, short = 'n', default = "100")]
    num_points: usize,

    /// seed for the random points
    #[argh(option, short = 's', default = "42")]
    seed: u64,

    /// number of drag / zoom / rotate rounds
    #[argh(option, default = "12")]
    steps: usize,

    /// resize points with the zoom
    #[argh(switch)]
    resize_points: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut viewer = PointViewer::new(ViewerParams {
        width: args.width,
        height: args.height,
        resize_points_with_zoom: args.resize_points,
        ..Default::default()
    })?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    viewer.fill_random(args.num_points, &mut rng)?;

    let (cx, cy) = (args.width as f32 / 2.0, args.height as f32 / 2.0);
    viewer.handle(ViewerEvent::Click { x: cx, y: cy })?;

    let mut frame = FrameBuffer::default();
    for step in 0..args.steps {
        let t = step as f32;
        let script = [
            ViewerEvent::Move { x: cx, y: cy },
            ViewerEvent::Drag {
                x: cx + 4.0 * t.cos(),
                y: cy + 4.0 * t.sin(),
            },
            ViewerEvent::Wheel {
                rotation: if step % 2 == 0 { -1 } else { 1 },
                shift: false,
            },
            ViewerEvent::Wheel {
                rotation: 1,
                shift: true,
            },
        ];
        for event in script {
            viewer.handle(event)?;
        }

        viewer.render(&mut frame);
        log::info!(
            "step {step}: {} points, radius {:.2}",
            frame.points.len(),
            frame.radius
        );
    }

    if let Some(points) = viewer.points() {
        // homogeneous points span the full 3D space unless they are collinear
        println!("rank of the point matrix: {}", points.rank());
    }

    println!("first points after {} steps:", args.steps);
    for [x, y] in frame.points.iter().take(5) {
        println!("  ({x:8.2}, {y:8.2})");
    }

    Ok(())
}
