//! Lathe CLI — cone generation and viewport layout inspection.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lathe")]
#[command(version, about = "Lathe — procedural cone meshes for shading experiments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cone mesh, print its stats, optionally export JSON.
    Generate {
        /// Number of angular segments (minimum 3).
        #[arg(short, long, default_value_t = 32)]
        segments: u32,

        /// Base-circle radius.
        #[arg(short, long, default_value_t = 0.5)]
        radius: f32,

        /// Half of the cone's height.
        #[arg(long, default_value_t = 0.5)]
        half_height: f32,

        /// Vertex color as "r,g,b,a" with components in [0,1].
        #[arg(short, long)]
        color: Option<String>,

        /// Which normal set to activate (face or vertex).
        #[arg(short, long, default_value = "face")]
        normals: String,

        /// Output JSON file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the four-quadrant clear layout for a surface.
    Viewport {
        /// Surface width in pixels.
        #[arg(long, default_value_t = 500)]
        width: u32,

        /// Surface height in pixels.
        #[arg(long, default_value_t = 500)]
        height: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            segments,
            radius,
            half_height,
            color,
            normals,
            output,
        } => commands::generate(
            segments,
            radius,
            half_height,
            color.as_deref(),
            &normals,
            output.as_deref(),
        ),
        Commands::Viewport { width, height } => commands::viewport(width, height),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
