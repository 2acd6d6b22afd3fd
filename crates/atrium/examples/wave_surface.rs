//! Wave Surface — the `sin x · cos z` height field.
//!
//! Builds the 150×150 grid, reports its size and bounds, and samples the
//! shaded color under the orbiting camera at a few points in time.
//!
//! Run with: `cargo run -p atrium --example wave_surface`

use atrium::camera::Viewport;
use atrium::math::Vec3;
use atrium::modeller::WaveSurface;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let surface = WaveSurface::default();
    let mesh = surface.mesh();
    println!(
        "grid {}x{}: {} vertices, {} triangles, {} bytes of vertex data",
        surface.grid_n,
        surface.grid_n,
        mesh.vertices.len(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len()
    );
    if let Some((lo, hi)) = mesh.bounds() {
        println!(
            "bounds ({:.2}, {:.2}, {:.2}) .. ({:.2}, {:.2}, {:.2})",
            lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
        );
    }

    let viewport = Viewport::new(1280, 720);
    let probes = [0, mesh.vertices.len() / 3, mesh.vertices.len() / 2, mesh.vertices.len() - 1];
    for t in [0.0f32, 2.5, 5.0, 7.5] {
        let eye = surface.eye(t);
        let vp = surface.view_projection(t, &viewport);
        println!("t = {t:.1}s  eye ({:.2}, {:.2}, {:.2})", eye.x, eye.y, eye.z);
        for &i in &probes {
            let v = &mesh.vertices[i];
            let p = Vec3::from(v.position);
            let clip = vp * p.extend(1.0);
            let c = surface.shade(p.y, Vec3::from(v.normal));
            println!(
                "  vertex {i:>5} y {:+.3}  ndc ({:+.2}, {:+.2})  rgb ({:.2}, {:.2}, {:.2})",
                p.y,
                clip.x / clip.w,
                clip.y / clip.w,
                c.r,
                c.g,
                c.b
            );
        }
    }
}
