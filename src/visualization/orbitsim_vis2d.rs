use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use log::{error, info};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};
use crate::visualization::projection::ScreenTransform;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance readout attached to every non-reference body
#[derive(Component)]
struct DistanceLabel(pub usize);

const LABEL_OFFSET: f32 = 14.0;
const LABEL_FONT_SIZE: f32 = 16.0;

/// Screen projection plus the window size needed to move from window
/// pixels (y down) to Bevy world units (origin at center, y up)
#[derive(Resource, Clone, Copy)]
struct View {
    transform: ScreenTransform,
    width: f64,
    height: f64,
}

impl View {
    fn world(&self, position: &NVec2) -> Vec2 {
        let s = self.transform.apply(position);
        Vec2::new((s.x - self.width / 2.0) as f32, (self.height / 2.0 - s.y) as f32)
    }
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

/// Open a window and run the scenario until it is closed or a step fails
pub fn run_2d(scenario: Scenario) -> AppExit {
    info!(
        "run_2d: starting Bevy 2D viewer with {} bodies at {} steps/s",
        scenario.simulator.len(),
        scenario.view.fps
    );

    let view = View {
        transform: ScreenTransform::from(&scenario.view),
        width: scenario.view.width,
        height: scenario.view.height,
    };
    let window = Window {
        title: scenario.view.title.clone(),
        resolution: (view.width as f32, view.height as f32).into(),
        ..Default::default()
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(scenario.view.fps))
        .insert_resource(view)
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                })
                // the `log` facade is already owned by env_logger
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (sync_transforms_system, sync_labels_system, draw_trajectories_system))
        .run()
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, view: Res<View>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.simulator.bodies().iter().enumerate() {
        let p = view.world(&body.position());
        let radius = body.radius() as f32;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(to_color(body.color()))),
                transform: Transform::from_xyz(p.x, p.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if !body.is_reference() {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        String::new(),
                        TextStyle {
                            font_size: LABEL_FONT_SIZE,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(p.x, p.y + radius + LABEL_OFFSET, 2.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>, mut halted: Local<bool>) {
    if *halted {
        return;
    }
    if let Err(e) = scenario.simulator.step() {
        error!("simulation halted after {} steps: {e}", scenario.simulator.steps());
        *halted = true;
        exit.send(AppExit::error());
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, view: Res<View>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.simulator.body(*i) {
            let p = view.world(&b.position());
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

fn sync_labels_system(scenario: Res<Scenario>, view: Res<View>, mut query: Query<(&DistanceLabel, &mut Text, &mut Transform)>) {
    for (DistanceLabel(i), mut text, mut transform) in &mut query {
        if let Some(b) = scenario.simulator.body(*i) {
            let p = view.world(&b.position());
            transform.translation.x = p.x;
            transform.translation.y = p.y + b.radius() as f32 + LABEL_OFFSET;
            text.sections[0].value = format!("{:.1}km", b.distance_to_reference() / 1000.0);
        }
    }
}

fn draw_trajectories_system(scenario: Res<Scenario>, view: Res<View>, mut gizmos: Gizmos) {
    for b in scenario.simulator.bodies() {
        let trajectory = b.trajectory();
        if trajectory.len() > 2 {
            gizmos.linestrip_2d(trajectory.iter().map(|p| view.world(p)), to_color(b.color()));
        }
    }
}
