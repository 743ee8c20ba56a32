//! 3D visualization of a folded snake using kiss3d.

use kiss3d::prelude::*;
use rustc_hash::FxHashMap;

use snake_cube::geometry::{compute_bounds, materialize, BoundingVolume};
use snake_cube::snake::Step;

/// Palette cycled by segment id so neighbouring segments never share a colour.
const SEGMENT_COLORS: [(f32, f32, f32); 6] = [
    (1.0, 0.2, 0.2), // red
    (0.2, 1.0, 0.2), // green
    (0.2, 0.2, 1.0), // blue
    (1.0, 1.0, 0.2), // yellow
    (1.0, 0.2, 1.0), // magenta
    (0.2, 1.0, 1.0), // cyan
];

fn segment_color(segment_id: usize) -> Color {
    let (r, g, b) = SEGMENT_COLORS[segment_id.saturating_sub(1) % SEGMENT_COLORS.len()];
    Color::new(r, g, b, 1.0)
}

/// A rendered cube in the 3D scene.
struct RenderedCube {
    node: SceneNode3d,
    /// Position when not exploded.
    base_position: Vec3,
    segment_id: usize,
}

fn to_world((x, y, z): (i32, i32, i32)) -> Vec3 {
    Vec3::new(x as f32, y as f32, z as f32)
}

/// Center of the bounding volume in solver coordinates.
fn bounds_center(bounds: &BoundingVolume) -> Vec3 {
    (to_world(bounds.min) + to_world(bounds.max)) / 2.0
}

/// Builds the scene for the first `visible` segments of a solution.
///
/// Cubes are centered on the bounding volume of the full fold, so the
/// camera does not jump as segments are folded in.
///
/// Returns the rendered cubes and each segment's centroid for explosion.
fn build_scene(
    scene: &mut SceneNode3d,
    solution: &[Step],
    visible: usize,
) -> (Vec<RenderedCube>, FxHashMap<usize, Vec3>) {
    /// Size of each rendered cube (slightly smaller than 1.0 for visible gaps).
    const CUBE_SIZE: f32 = 0.9;

    let center = bounds_center(&compute_bounds(&materialize(solution)));
    let path = materialize(&solution[..visible.min(solution.len())]);

    let mut sums: FxHashMap<usize, (Vec3, f32)> = FxHashMap::default();
    for cell in &path {
        let entry = sums.entry(cell.step.id).or_insert((Vec3::ZERO, 0.0));
        entry.0 += to_world(cell.coordinate);
        entry.1 += 1.0;
    }
    let segment_centroids: FxHashMap<usize, Vec3> = sums
        .into_iter()
        .map(|(id, (sum, count))| (id, sum / count - center))
        .collect();

    let rendered_cubes: Vec<RenderedCube> = path
        .iter()
        .map(|cell| {
            let base_position = to_world(cell.coordinate) - center;
            let node = scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(segment_color(cell.step.id))
                .set_position(base_position);
            RenderedCube {
                node,
                base_position,
                segment_id: cell.step.id,
            }
        })
        .collect();

    (rendered_cubes, segment_centroids)
}

/// Displays a solution in an interactive 3D viewer.
pub fn display(name: &str, solution: Vec<Step>) {
    pollster::block_on(display_async(name, solution));
}

async fn display_async(name: &str, solution: Vec<Step>) {
    if solution.is_empty() {
        println!("Nothing to display");
        return;
    }

    let num_segments = solution.len();
    let mut visible_segments = num_segments;

    let title = |visible: usize| {
        format!(
            "{name}: {visible}/{num_segments} segments - [Left/Right] fold, [Up/Down] explode, [R] reset"
        )
    };
    let mut window = Window::new(&title(visible_segments)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(8.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let (mut rendered_cubes, mut segment_centroids) =
        build_scene(&mut scene, &solution, visible_segments);

    // 0.0 = compact, higher = more exploded
    let mut explosion_amount: f32 = 0.0;
    const EXPLOSION_SPEED: f32 = 0.05;
    let mut needs_rebuild = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Up => explosion_amount += EXPLOSION_SPEED,
                        Key::Down => {
                            explosion_amount = (explosion_amount - EXPLOSION_SPEED).max(0.0)
                        }
                        Key::R => {
                            explosion_amount = 0.0;
                            visible_segments = num_segments;
                            needs_rebuild = true;
                        }
                        Key::Right if visible_segments < num_segments => {
                            visible_segments += 1;
                            needs_rebuild = true;
                        }
                        Key::Left if visible_segments > 1 => {
                            visible_segments -= 1;
                            needs_rebuild = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if needs_rebuild {
            for mut cube in rendered_cubes.drain(..) {
                cube.node.remove();
            }
            let (new_cubes, new_centroids) =
                build_scene(&mut scene, &solution, visible_segments);
            rendered_cubes = new_cubes;
            segment_centroids = new_centroids;
            window.set_title(&title(visible_segments));
            needs_rebuild = false;
        }

        // push each segment away from the fold's center
        for cube in &mut rendered_cubes {
            let centroid = segment_centroids
                .get(&cube.segment_id)
                .copied()
                .unwrap_or(Vec3::ZERO);
            let explosion_direction = centroid.normalize_or_zero();
            cube.node.set_position(
                cube.base_position + explosion_direction * explosion_amount * 2.0,
            );
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
