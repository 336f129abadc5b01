//! CLI command implementations.

use std::time::Instant;

use serde::Deserialize;
use velum_contact::{FixerVolume, PenaltySphere};
use velum_math::{Mat4, Vec3};
use velum_mesh::generators::quad_grid;
use velum_solver::{assemble_cloth, assemble_solid, ExternalForce, SimulationConfig, SolidInput};
use velum_telemetry::{ConsoleSink, EventBus, EventKind, SimulationEvent, TracingSink};

/// A TOML scenario: mesh source, physics parameters, and the motion of
/// the setup/step collaborators (fixer anchors, penalty sphere).
#[derive(Debug, Deserialize)]
struct Scenario {
    /// Outer ticks to simulate.
    #[serde(default = "default_ticks")]
    ticks: u32,

    /// Mesh source.
    source: Source,

    /// Physics parameters.
    #[serde(default)]
    config: SimulationConfig,

    /// Fixer volumes binding particles kinematically, each with its own
    /// anchor.
    #[serde(default)]
    fixers: Vec<FixerSpec>,

    /// Optional penalty sphere obstacle.
    sphere: Option<SphereSpec>,
}

fn default_ticks() -> u32 {
    300
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Source {
    /// Procedural cloth sheet.
    Cloth {
        cols: usize,
        rows: usize,
        width: f32,
        height: f32,
    },
    /// Tetrahedral solid from TetGen-style files.
    Solid {
        node_file: String,
        ele_file: String,
        face_file: Option<String>,
    },
}

/// Fixer volume with optional sinusoidal oscillation along X, mirroring
/// the original practice scene's moving fixer.
#[derive(Debug, Deserialize)]
struct FixerSpec {
    center: [f32; 3],
    half_extents: [f32; 3],
    #[serde(default)]
    oscillate: bool,
    #[serde(default = "default_speed")]
    speed: f32,
    #[serde(default = "default_amplitude")]
    amplitude: f32,
}

impl FixerSpec {
    /// Anchor position at simulation time `t`.
    fn anchor_position(&self, base: Vec3, t: f32) -> Vec3 {
        if !self.oscillate {
            return base;
        }
        base + Vec3::new((t * self.speed).sin() * self.amplitude, 0.0, 0.0)
    }
}

fn default_speed() -> f32 {
    1.0
}

fn default_amplitude() -> f32 {
    3.0
}

/// Penalty sphere swept at constant velocity along Z, wrapping back to
/// its start position once it passes `sweep_limit`.
#[derive(Debug, Deserialize)]
struct SphereSpec {
    center: [f32; 3],
    radius: f32,
    #[serde(default)]
    sweep_speed: f32,
    #[serde(default = "default_sweep_limit")]
    sweep_limit: f32,
}

fn default_sweep_limit() -> f32 {
    30.0
}

impl SphereSpec {
    /// Advances the sweep by one tick; past the limit the sphere resets
    /// to its configured start position.
    fn advance(&self, sphere: &mut PenaltySphere, dt: f32) {
        sphere.center.z += self.sweep_speed * dt;
        if sphere.center.z > self.sweep_limit {
            sphere.center = Vec3::from(self.center);
        }
    }
}

/// Run a simulation from a scenario file.
pub fn simulate(scenario_path: &str, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(scenario_path)?;
    let scenario: Scenario = toml::from_str(&text)?;

    println!("Velum Simulation");
    println!("────────────────");
    println!("Scenario: {scenario_path}");

    let mut sim = match &scenario.source {
        Source::Cloth { cols, rows, width, height } => {
            let mesh = quad_grid(*cols, *rows, *width, *height);
            println!(
                "Source:   cloth sheet ({} verts, {} tris)",
                mesh.vertex_count(),
                mesh.triangle_count()
            );
            assemble_cloth(&mesh, Mat4::IDENTITY, scenario.config.clone())?
        }
        Source::Solid { node_file, ele_file, face_file } => {
            let nodes = velum_io::parse_node(&std::fs::read_to_string(node_file)?)?;
            let cells = velum_io::parse_ele(&std::fs::read_to_string(ele_file)?, nodes.len())?;
            let surface = match face_file {
                Some(path) => {
                    velum_io::parse_face(&std::fs::read_to_string(path)?, nodes.len())?
                }
                None => Vec::new(),
            };
            println!(
                "Source:   solid ({} nodes, {} cells, {} surface faces)",
                nodes.len(),
                cells.len() / 4,
                surface.len() / 3
            );
            let input = SolidInput { nodes: &nodes, cells: &cells, surface: &surface };
            assemble_solid(input, None, scenario.config.clone())?
        }
    };

    println!(
        "Topology: {} particles, {} springs",
        sim.particles.len(),
        sim.springs.len()
    );

    // One anchor per fixer volume that actually captured particles.
    let mut fixer_anchors = Vec::new();
    for (i, spec) in scenario.fixers.iter().enumerate() {
        let volume = FixerVolume::new(Vec3::from(spec.center), Vec3::from(spec.half_extents));
        if let Some(anchor) = volume.bind_particles(&mut sim) {
            fixer_anchors.push((i, anchor, volume.center));
        }
    }
    if !scenario.fixers.is_empty() {
        let bound = sim.particles.bindings.iter().filter(|b| b.is_some()).count();
        println!(
            "Fixers:   {} of {} volumes bound {bound} particles",
            fixer_anchors.len(),
            scenario.fixers.len()
        );
    }

    let mut sphere = scenario
        .sphere
        .as_ref()
        .map(|s| PenaltySphere::new(Vec3::from(s.center), s.radius, scenario.config.penalty_stiffness));

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink));
    if verbose {
        bus.add_sink(Box::new(ConsoleSink));
    }

    sim.set_running(true);

    let started = Instant::now();
    for tick in 0..scenario.ticks {
        let sim_time = tick as f32 * sim.config.time_step;

        // Collaborator motion, between ticks only.
        for &(i, anchor, base) in &fixer_anchors {
            let spec = &scenario.fixers[i];
            if spec.oscillate {
                sim.set_anchor_position(anchor, spec.anchor_position(base, sim_time));
            }
        }
        if let (Some(sphere), Some(spec)) = (sphere.as_mut(), scenario.sphere.as_ref()) {
            spec.advance(sphere, sim.config.time_step);
        }

        let tick_started = Instant::now();
        match &sphere {
            Some(s) => sim.tick(&[s as &dyn ExternalForce]),
            None => sim.tick(&[]),
        }
        let wall = tick_started.elapsed().as_secs_f64();

        bus.emit(SimulationEvent::new(tick, EventKind::TickEnd { wall_time: wall }));
        bus.emit(SimulationEvent::new(
            tick,
            EventKind::Energy { kinetic: sim.particles.kinetic_energy() },
        ));
        if let Some(s) = &sphere {
            bus.emit(SimulationEvent::new(
                tick,
                EventKind::PenaltyContacts { count: s.contact_count(&sim.particles) },
            ));
        }
        bus.flush();
    }
    bus.finalize();

    let min_y = sim
        .particles
        .positions
        .iter()
        .map(|p| p.y)
        .fold(f32::INFINITY, f32::min);

    println!();
    println!("Ticks:      {}", scenario.ticks);
    println!("Wall time:  {:.3}s", started.elapsed().as_secs_f64());
    println!("Kinetic:    {:.6e}", sim.particles.kinetic_energy());
    println!("Lowest Y:   {min_y:.4}");

    Ok(())
}

/// Validate a scenario, mesh, or node file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Velum Validator");
    println!("───────────────");

    if path.ends_with(".toml") {
        let text = std::fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&text)?;
        scenario.config.validate()?;
        println!("Scenario is valid ({} ticks).", scenario.ticks);
    } else if path.ends_with(".json") {
        let text = std::fs::read_to_string(path)?;
        let mesh: velum_mesh::TriangleMesh = serde_json::from_str(&text)?;
        mesh.validate()?;
        println!(
            "Mesh is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    } else if path.ends_with(".node") {
        let nodes = velum_io::parse_node(&std::fs::read_to_string(path)?)?;
        println!("Node file is valid ({} nodes).", nodes.len());
    } else {
        return Err("Unsupported file format. Use .toml, .json, or .node.".into());
    }

    Ok(())
}
