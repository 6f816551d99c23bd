//! CLI command implementations.

use lathe_gpu::PackedLayout;
use lathe_mesh::{cone, ConeParams, NormalSet};
use lathe_types::Rgba;
use lathe_viewport::SurfaceConfig;

/// Generate a cone mesh and report on it.
pub fn generate(
    segments: u32,
    radius: f32,
    half_height: f32,
    color: Option<&str>,
    normals: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let normal_set = match normals {
        "face" => NormalSet::Face,
        "vertex" => NormalSet::Vertex,
        other => {
            eprintln!("Unknown normal set: {other}");
            eprintln!("Available: face, vertex");
            return Err("Unknown normal set".into());
        }
    };

    let mut params = ConeParams {
        segments,
        radius,
        half_height,
        ..Default::default()
    };
    if let Some(rgba) = color {
        params.color = parse_color(rgba)?;
    }

    let mut mesh = cone(&params)?;
    mesh.select_normal_set(normal_set);
    mesh.validate()?;

    let layout = PackedLayout::for_mesh(&mesh);

    println!("Lathe Cone");
    println!("──────────");
    println!("Segments:      {}", mesh.segments);
    println!("Radius:        {}", mesh.radius);
    println!("Half-height:   {}", mesh.half_height);
    println!("Vertices:      {}", mesh.vertex_count());
    println!("Triangles:     {}", mesh.triangle_count());
    println!("Normal set:    {:?}", mesh.active_set());
    println!("Vertex buffer: {} bytes", layout.vertex_bytes);
    println!("Index buffer:  {} bytes", layout.index_bytes);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&mesh)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        std::fs::write(path, json)?;
        println!();
        println!("Mesh written to: {path}");
    }

    Ok(())
}

/// Print the four-quadrant clear layout for a surface.
pub fn viewport(width: u32, height: u32) -> Result<(), Box<dyn std::error::Error>> {
    let surface = SurfaceConfig::new(width, height)?;

    println!("Surface {}x{}", surface.width(), surface.height());
    println!("───────────────");
    for rect in surface.quadrants() {
        println!(
            "clear [{:>4}, {:>4}] {:>4}x{:<4} rgba({}, {}, {}, {})",
            rect.x, rect.y, rect.width, rect.height,
            rect.color.r, rect.color.g, rect.color.b, rect.color.a,
        );
    }

    Ok(())
}

/// Parses "r,g,b,a" into a color.
fn parse_color(input: &str) -> Result<Rgba, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!("Expected 4 comma-separated components, got {}", parts.len()).into());
    }
    let mut components = [0.0f32; 4];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("Invalid color component: '{part}'"))?;
    }
    Ok(Rgba::from(components))
}
