use anyhow::Context;
use cgmath::vec2;
use image_util::{save_monochrome, save_uv};
use log::info;
use ndarray::Array;
use stable_fluids::d2::{Fluid, FluidParams};
use std::f64::consts::PI;

/// Cells that receive dye around the pointer.
const BRUSH: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

fn load_params() -> anyhow::Result<FluidParams> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text =
                std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path))
        }
        None => Ok(FluidParams {
            size: 128,
            ..FluidParams::default()
        }),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    const N_FRAME: usize = 120;

    let params = load_params()?;
    let mut fluid = Fluid::with_params(params)?;
    let n = fluid.size();

    std::fs::create_dir_all("out")?;
    info!("simulating {} frames on a {}x{} grid", N_FRAME, n, n);

    let centre = n as f64 / 2.0;
    let radius = n as f64 / 4.0;

    for f in 1..=N_FRAME {
        // The pointer circles the centre once over the whole run.
        let theta = 2.0 * PI * f as f64 / N_FRAME as f64;
        let x = (centre + radius * theta.cos()) as isize;
        let y = (centre + radius * theta.sin()) as isize;

        for &(dx, dy) in BRUSH.iter() {
            let (bx, by) = (x + dx, y + dy);
            if bx >= 0 && by >= 0 && (bx as usize) < n && (by as usize) < n {
                fluid.add_density(bx as usize, by as usize, 255.0);
            }
        }

        let push = vec2(-theta.sin(), theta.cos()) * 10.0;
        fluid.add_velocity(x as usize, y as usize, push.x, push.y);

        fluid.step();

        save_monochrome("smoke", f, fluid.density())?;
        if f % 10 == 0 {
            let uv = Array::from_shape_fn((n, n), |(i, j)| fluid.velocity_at(i, j));
            save_uv("smoke", f, &uv, 4, 4.0)?;
        }

        eprint!("\r {} / {}", f, N_FRAME);
    }
    eprintln!();

    info!("total density {:.1}", fluid.total_density());

    Ok(())
}
