use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResized};

use crate::simulation::engine::Arena;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyId, NVec2};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct SidebarText;

#[derive(Component)]
struct DragLabel;

const MASS_STEP: f64 = 0.1; // kg per key press
const TIME_SCALE_STEP: f64 = 0.25;
const INK: Color = Color::srgb(0.07, 0.07, 0.07);

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer, arena {} x {} px",
        scenario.arena.width, scenario.arena.height
    );

    let resolution = (scenario.arena.width as f32, scenario.arena.height as f32);

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.93, 0.93, 0.9)))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "kinesim".into(),
                resolution: resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                resize_system,
                pointer_input_system,
                keyboard_input_system,
                physics_step_system,
                sync_transforms_system,
                draw_drag_system,
                sidebar_system,
            )
                .chain(),
        )
        .run();
}

/// Arena pixels (origin top left, y down) -> world (origin at the center, y up)
fn arena_to_world(p: &NVec2, arena: &Arena) -> Vec2 {
    Vec2::new(
        (p.x - arena.width * 0.5) as f32,
        (arena.height * 0.5 - p.y) as f32,
    )
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.bodies().iter().enumerate() {
        let side = (body.half_extent * 2.0) as f32;
        let pos = arena_to_world(&body.x, &scenario.arena);
        let [r, g, b] = body.color;

        commands
            .spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(meshes.add(Rectangle::new(side, side))),
                    material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                    transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                    ..Default::default()
                },
                BodyIndex(i),
            ))
            .with_children(|parent| {
                parent.spawn(Text2dBundle {
                    text: Text::from_section(
                        body.label.clone(),
                        TextStyle { font_size: 14.0, color: Color::WHITE, ..default() },
                    ),
                    transform: Transform::from_xyz(0.0, 0.0, 1.0),
                    ..default()
                });
            });
    }

    commands.spawn((
        Text2dBundle {
            text: Text::from_section("", TextStyle { font_size: 12.0, color: INK, ..default() }),
            transform: Transform::from_xyz(0.0, 0.0, 2.0),
            visibility: Visibility::Hidden,
            ..default()
        },
        DragLabel,
    ));

    commands.spawn((
        TextBundle::from_section("", TextStyle { font_size: 15.0, color: INK, ..default() })
            .with_style(Style {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                ..default()
            }),
        SidebarText,
    ));
}

fn resize_system(mut scenario: ResMut<Scenario>, mut resized: EventReader<WindowResized>) {
    for event in resized.read() {
        scenario.resize_arena(event.width as f64, event.height as f64);
    }
}

/// Mouse drag on a body: press picks it, release launches it
fn pointer_input_system(mut scenario: ResMut<Scenario>, buttons: Res<ButtonInput<MouseButton>>, windows: Query<&Window, With<PrimaryWindow>>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    // window cursor coordinates already match the arena: origin top left, y down
    let cursor = window.cursor_position().map(|p| NVec2::new(p.x as f64, p.y as f64));

    if let Some(point) = cursor {
        if buttons.just_pressed(MouseButton::Left) {
            scenario.begin_drag(point);
        }
        scenario.update_drag(point);
    }
    if buttons.just_released(MouseButton::Left) {
        scenario.end_drag();
    }
}

fn keyboard_input_system(mut scenario: ResMut<Scenario>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
    }
    if keys.just_pressed(KeyCode::Space) {
        scenario.toggle_pause();
    }

    let min_mass = scenario.parameters.min_mass;
    for (id, up, down) in [
        (BodyId::A, KeyCode::KeyQ, KeyCode::KeyA),
        (BodyId::B, KeyCode::KeyW, KeyCode::KeyS),
    ] {
        let current = scenario.parameters.mass(id);
        if keys.just_pressed(up) {
            scenario.set_mass(id, current + MASS_STEP);
        }
        if keys.just_pressed(down) {
            scenario.set_mass(id, (current - MASS_STEP).max(min_mass));
        }
    }

    let speed = scenario.time_scale();
    if keys.just_pressed(KeyCode::BracketRight) {
        scenario.set_time_scale(speed + TIME_SCALE_STEP);
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        scenario.set_time_scale((speed - TIME_SCALE_STEP).max(TIME_SCALE_STEP));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.bodies().get(*i) {
            let pos = arena_to_world(&b.x, &scenario.arena);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

/// Square outlines, and the slingshot arrow with its speed label while dragging
fn draw_drag_system(
    scenario: Res<Scenario>,
    mut gizmos: Gizmos,
    mut label: Query<(&mut Text, &mut Transform, &mut Visibility), With<DragLabel>>,
) {
    for body in scenario.bodies() {
        let side = (body.half_extent * 2.0) as f32;
        gizmos.rect_2d(arena_to_world(&body.x, &scenario.arena), 0.0, Vec2::splat(side), Color::WHITE);
    }

    let Ok((mut text, mut transform, mut visibility)) = label.get_single_mut() else {
        return;
    };

    let Some(preview) = scenario.drag_preview() else {
        *visibility = Visibility::Hidden;
        return;
    };

    let from = arena_to_world(&preview.origin, &scenario.arena);
    let to = arena_to_world(&preview.tip, &scenario.arena);
    gizmos.arrow_2d(from, to, INK).with_tip_length(10.0);

    text.sections[0].value = format!(
        "{:.1} m/s\n{:.2} m, {:.2} m",
        preview.speed, preview.displacement.x, preview.displacement.y
    );
    transform.translation.x = to.x;
    transform.translation.y = to.y + 18.0;
    *visibility = Visibility::Visible;
}

fn sidebar_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<SidebarText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let mut out = format!("Simulation Speed: {}x", scenario.time_scale());
    if scenario.is_paused() {
        out.push_str("  (paused)");
    }
    out.push('\n');

    for id in BodyId::ALL {
        out.push_str(&format!("\n{}\n", scenario.body_readout(id)));
    }

    out.push('\n');
    match scenario.collision_readout() {
        Some(readout) => out.push_str(&readout.to_string()),
        None => out.push_str("No collision yet."),
    }

    out.push_str("\n\ndrag a square to launch | R reset | Space pause\nQ/A mass A | W/S mass B | [ ] speed");
    text.sections[0].value = out;
}
