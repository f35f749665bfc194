//! # Slabify CLI Application
//!
//! Terminal front-end for the two-way slab design engine. Prompts for the
//! panel inputs with sensible defaults, prints the reinforcement schedule
//! and design checks, and draws an ASCII plan-view schematic.
//!
//! Pass `--json` to skip the prompts and instead read a `SlabInput` JSON
//! document on stdin, writing the `SlabResult` JSON on stdout.

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use slab_core::calculations::slab::{calculate, SlabInput, SlabResult};
use slab_core::calculations::CheckStatus;
use slab_core::panel::PanelClass;
use slab_core::rebar::BarSize;

const CONCRETE_GRADES: [f64; 5] = [20.0, 25.0, 30.0, 35.0, 40.0];

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_index(prompt: &str, count: usize, default: usize) -> usize {
    print!("{} [{}]: ", prompt, default + 1);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => n - 1,
        _ => default,
    }
}

fn prompt_input() -> SlabInput {
    println!("1. Material Properties");
    println!("----------------------");
    for (i, grade) in CONCRETE_GRADES.iter().enumerate() {
        println!("  {}. C{}", i + 1, grade);
    }
    let fck = CONCRETE_GRADES[prompt_index("Concrete grade", CONCRETE_GRADES.len(), 1)];
    let fyk = prompt_f64("Steel yield fyk (N/mm2)", 460.0);
    let cover_mm = prompt_f64("Nominal cover (mm)", 25.0);
    for (i, bar) in BarSize::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, bar);
    }
    let bar = BarSize::ALL[prompt_index("Preferred bar size", BarSize::ALL.len(), 2)];

    println!();
    println!("2. Geometry");
    println!("-----------");
    let short_span_mm = prompt_f64("Short span Lx (mm)", 3000.0);
    let long_span_mm = prompt_f64("Long span Ly (mm)", 5000.0);
    let thickness_mm = prompt_f64("Slab thickness (mm)", 150.0);

    println!();
    println!("3. Loading");
    println!("----------");
    let dead_load_knm2 = prompt_f64("Dead load Gk (kN/m2)", 6.45);
    let live_load_knm2 = prompt_f64("Live load Qk (kN/m2)", 1.5);

    println!();
    println!("4. Panel Boundary Condition");
    println!("---------------------------");
    for (i, panel) in PanelClass::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, panel);
    }
    let panel = PanelClass::ALL[prompt_index("Panel class", PanelClass::ALL.len(), 0)];

    SlabInput {
        label: "CLI Panel".to_string(),
        fck,
        fyk,
        cover_mm,
        bar,
        short_span_mm,
        long_span_mm,
        thickness_mm,
        dead_load_knm2,
        live_load_knm2,
        panel,
    }
}

fn print_report(result: &SlabResult) {
    println!();
    println!(
        "Design load n: {:.2} kN/m2  |  Ratio Ly/Lx: {:.2}",
        result.design_load_knm2, result.aspect_ratio
    );
    if result.one_way_warning {
        println!("WARNING: Ratio > 2.0 - this is technically a one-way slab.");
    }

    println!();
    println!("Reinforcement Schedule");
    println!("----------------------");
    println!(
        "{:<10} {:<11} {:<12} {:>14}  {}",
        "Location", "Role", "Direction", "Area Req (mm2)", "Provision"
    );
    for row in &result.schedule {
        println!(
            "{:<10} {:<11} {:<12} {:>14}  {}",
            row.location.to_string(),
            row.role.to_string(),
            row.direction.to_string(),
            row.as_target_mm2 as i64,
            row.provision_label
        );
    }

    println!();
    println!("Design Checks");
    println!("-------------");
    println!(
        "Deflection: {}  (actual L/d {:.2} vs allowable {:.2})",
        result.deflection.status, result.deflection.actual_ratio, result.deflection.allowable_ratio
    );
    println!(
        "Shear:      {}  (V_Ed {:.2} kN vs V_Rd,c {:.2} kN, {:.1}% utilization)",
        result.shear.status, result.shear.v_ed_kn, result.shear.v_rdc_kn,
        result.shear.utilization_pct
    );
    if result.deflection.status == CheckStatus::NotApplicable {
        println!("(deflection not applicable: no steel demand)");
    }

    println!();
    println!("{}", render_schematic(result));
    println!(
        "Overall: {}",
        if result.passes() { "DESIGN OK" } else { "DESIGN FAILS - revise section or bars" }
    );
}

/// ASCII plan view: Lx horizontal, Ly vertical, main (short-span) bars as
/// horizontal lines, secondary (long-span) bars as dashed columns.
fn render_schematic(result: &SlabResult) -> String {
    let schematic = &result.schematic;
    // Lx runs horizontally at a fixed 32 characters; scale the rows by the
    // aspect ratio, halved because terminal cells are about twice as tall
    // as they are wide
    let width = 32usize;
    let aspect = schematic.long_span_mm / schematic.short_span_mm;
    let height = ((width as f64 * aspect / 2.0).round() as usize).clamp(8, 24);

    // Three sample bars per direction, like the plotted plan view
    let bar_rows = [height / 4, height / 2, 3 * height / 4];
    let bar_cols = [width / 4, width / 2, 3 * width / 4];

    let mut lines = Vec::with_capacity(height + 5);
    lines.push(format!(
        "Slab Plan View ({}mm x {}mm)",
        schematic.short_span_mm as i64, schematic.long_span_mm as i64
    ));
    lines.push(format!("+{}+", "-".repeat(width)));
    for row in 0..height {
        let main_bar_row = bar_rows.contains(&row);
        let mut line = String::with_capacity(width + 2);
        line.push('|');
        for col in 0..width {
            let secondary_bar_col = bar_cols.contains(&col);
            line.push(if main_bar_row && col > 1 && col < width - 2 {
                '='
            } else if secondary_bar_col && row > 0 && row < height - 1 {
                ':'
            } else {
                ' '
            });
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(format!("+{}+", "-".repeat(width)));
    lines.push(format!("Main (=, along Lx): {}", schematic.short_span_label));
    lines.push(format!("Sec  (:, along Ly): {}", schematic.long_span_label));
    lines.join("\n")
}

fn run_json_mode() -> ExitCode {
    let mut buffer = String::new();
    if io::stdin().read_to_string(&mut buffer).is_err() {
        eprintln!("error: could not read stdin");
        return ExitCode::FAILURE;
    }

    let input: SlabInput = match serde_json::from_str(&buffer) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: invalid SlabInput JSON: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match calculate(&input) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&err).unwrap_or_else(|_| err.to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    if std::env::args().any(|arg| arg == "--json") {
        return run_json_mode();
    }

    println!("Slabify - Two-Way Slab Panel Designer (BS 8110 / EC2)");
    println!("=====================================================");
    println!();

    let input = prompt_input();

    match calculate(&input) {
        Ok(result) => {
            print_report(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!();
            eprintln!("error [{}]: {}", err.error_code(), err);
            ExitCode::FAILURE
        }
    }
}
